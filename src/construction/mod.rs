//! Construction heuristics that build an initial set of routes.

pub mod insertion;
pub mod nearest_neighbor;
pub mod savings;
pub mod utils;

use log::debug;

use crate::config::{Algorithm, Config, InsertionWeights};
use crate::problem::Problem;
use crate::solution::Solution;

/// Builds routes for one problem under one route-count policy.
pub struct Construction<'a> {
    pub problem: &'a Problem,
    /// Ceiling on the number of routes; `None` is unbounded
    pub max_routes: Option<usize>,
    pub weights: InsertionWeights,
}

impl<'a> Construction<'a> {
    /// Create a construction context for `problem` using the limits in `config`.
    pub fn new(problem: &'a Problem, config: &Config) -> Self {
        Construction {
            problem,
            max_routes: config.max_routes(problem.num_vehicles),
            weights: config.insertion.clone(),
        }
    }

    /// Run the selected heuristic and record dropped customers.
    pub fn build(&self, algorithm: Algorithm) -> Solution {
        let mut solution = Solution::new();
        solution.routes = match algorithm {
            Algorithm::Clarke => self.clarke_wright(),
            Algorithm::Nearest => self.nearest_neighbor(),
            Algorithm::Enhanced => self.scored_insertion(),
        };
        solution.collect_dropped(self.problem);

        debug!(
            "{} construction: {} routes, {} served, {} dropped",
            algorithm,
            solution.routes.len(),
            solution.served_count(),
            solution.dropped.len()
        );

        solution
    }

    /// Whether another route may be opened when `open` routes already exist.
    pub fn can_open_route(&self, open: usize) -> bool {
        self.max_routes.map_or(true, |max| open < max)
    }

    /// Whether `customer` fits an empty vehicle.
    pub fn fits_empty_vehicle(&self, customer: usize) -> bool {
        self.problem.demand(customer) <= self.problem.vehicle_capacity
    }
}
