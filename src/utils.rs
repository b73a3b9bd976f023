//! Result formatting and reporting helpers.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::time::Duration;

use crate::config::Algorithm;
use crate::problem::Problem;
use crate::solution::Solution;

/// Format a duration as seconds with millisecond precision.
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    format!("{}.{:03}s", millis / 1000, millis % 1000)
}

/// Write a solution in the plain-text result format.
///
/// First line is the route count; each following line is
/// `<totalCost> <totalDemand> <customerCount> <customer>...`.
pub fn write_solution<W: Write>(solution: &Solution, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", solution.routes.len())?;

    for route in &solution.routes {
        write!(
            out,
            "{} {} {}",
            route.total_cost,
            route.total_demand,
            route.customers.len()
        )?;
        for &customer in &route.customers {
            write!(out, " {}", customer)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Render a solution in the plain-text result format.
pub fn solution_to_string(solution: &Solution) -> std::io::Result<String> {
    let mut buf = Vec::new();
    write_solution(solution, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Headline figures of one solver run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionSummary {
    pub algorithm: Algorithm,
    pub total_cost: f64,
    pub routes: usize,
    pub served: usize,
    pub dropped: usize,
    pub total_demand: i64,
    /// Served demand over the capacity of the routes used
    pub utilization: f64,
    pub runtime: Duration,
}

impl SolutionSummary {
    pub fn new(
        algorithm: Algorithm,
        solution: &Solution,
        problem: &Problem,
        runtime: Duration,
    ) -> Self {
        let fleet_capacity = solution.routes.len() as f64 * problem.vehicle_capacity as f64;
        let utilization = if fleet_capacity > 0.0 {
            solution.total_demand() as f64 / fleet_capacity
        } else {
            0.0
        };

        SolutionSummary {
            algorithm,
            total_cost: solution.total_cost(),
            routes: solution.routes.len(),
            served: solution.served_count(),
            dropped: solution.dropped.len(),
            total_demand: solution.total_demand(),
            utilization,
            runtime,
        }
    }

    /// Format the summary as a single line.
    pub fn format(&self) -> String {
        format!(
            "{}: cost {:.2}, {} routes, {} served, {} dropped, demand {}, utilization {:.1}%, {}",
            self.algorithm,
            self.total_cost,
            self.routes,
            self.served,
            self.dropped,
            self.total_demand,
            self.utilization * 100.0,
            format_duration(self.runtime)
        )
    }
}

/// Order summaries by total cost, cheapest first.
///
/// Equal costs keep their input order.
pub fn rank_summaries(summaries: &mut [SolutionSummary]) {
    summaries.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));
}
