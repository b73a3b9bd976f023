//! # CVRP heuristics
//!
//! Construction heuristics and local search for the Capacitated Vehicle
//! Routing Problem: every route starts and ends at a shared depot and no
//! vehicle carries more than its capacity.
//!
//! A run builds the distance matrix, constructs routes with one of three
//! heuristics (savings, nearest neighbor, or scored insertion), then improves
//! each route independently with first-improvement 2-opt. Customers that fit
//! no route under the capacity and vehicle limits are reported as dropped.

pub mod config;
pub mod construction;
pub mod distance;
pub mod error;
pub mod generator;
pub mod local_search;
pub mod problem;
pub mod solution;
pub mod utils;

use crate::config::{Algorithm, Config};
use crate::construction::Construction;
use crate::error::Result;
use crate::local_search::LocalSearch;
use crate::problem::Problem;
use crate::solution::Solution;
use crate::utils::{rank_summaries, SolutionSummary};

use log::{info, warn};
use std::path::Path;
use std::time::{Duration, Instant};

/// Orchestrates one construction-and-improvement run.
pub struct Solver {
    pub problem: Problem,
    pub config: Config,
    pub run_time: Duration,
}

impl Solver {
    /// Create a solver for the given problem and configuration.
    pub fn new(problem: Problem, config: Config) -> Self {
        Solver {
            problem,
            config,
            run_time: Duration::from_secs(0),
        }
    }

    /// Load an instance file and create a solver for it.
    pub fn from_file<P: AsRef<Path>>(path: P, config: Config) -> Result<Self> {
        let problem = Problem::from_file(path)?;
        Ok(Solver::new(problem, config))
    }

    /// Build the initial routes with the configured heuristic.
    pub fn construct(&self) -> Solution {
        Construction::new(&self.problem, &self.config).build(self.config.algorithm)
    }

    /// Run 2-opt over every route of `solution`.
    pub fn improve(&self, solution: &mut Solution) {
        let mut local_search = LocalSearch::new(self.config.two_opt_min_len);
        local_search.educate(solution, &self.problem);
    }

    /// Construct, improve, and return the solution.
    pub fn run(&mut self) -> Solution {
        let start_time = Instant::now();

        let mut solution = self.construct();
        if self.config.improve_routes {
            self.improve(&mut solution);
        }

        self.run_time = start_time.elapsed();

        if !solution.dropped.is_empty() {
            warn!(
                "{} of {} customers could not be placed: {:?}",
                solution.dropped.len(),
                self.problem.get_customer_count(),
                solution.dropped
            );
        }
        info!("{}", self.summary(&solution).format());

        solution
    }

    /// Headline figures for a solution of this solver's problem.
    pub fn summary(&self, solution: &Solution) -> SolutionSummary {
        SolutionSummary::new(self.config.algorithm, solution, &self.problem, self.run_time)
    }
}

/// Run every algorithm on `problem` and return their summaries, cheapest first.
pub fn compare_algorithms(problem: &Problem, config: &Config) -> Vec<SolutionSummary> {
    let mut summaries: Vec<SolutionSummary> = Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let mut solver = Solver::new(problem.clone(), config.clone().with_algorithm(algorithm));
            let solution = solver.run();
            solver.summary(&solution)
        })
        .collect();

    rank_summaries(&mut summaries);
    summaries
}
