//! Intra-route improvement applied after construction.

pub mod two_opt;

use log::debug;

use crate::problem::Problem;
use crate::solution::Solution;

/// Runs 2-opt over every route of a solution.
pub struct LocalSearch {
    /// Routes shorter than this are left untouched
    pub min_route_len: usize,
    /// Improving moves accepted since creation
    pub moves_applied: usize,
}

impl LocalSearch {
    /// Create a new local search instance.
    pub fn new(min_route_len: usize) -> Self {
        LocalSearch {
            min_route_len,
            moves_applied: 0,
        }
    }

    /// Improve each route of `solution` independently.
    ///
    /// Route membership never changes; only the visiting order does.
    pub fn educate(&mut self, solution: &mut Solution, problem: &Problem) {
        let before = solution.total_cost();

        for route in &mut solution.routes {
            if route.len() >= self.min_route_len {
                self.two_opt(route, problem);
            }
        }

        debug!(
            "2-opt: {} moves, cost {:.4} -> {:.4}",
            self.moves_applied,
            before,
            solution.total_cost()
        );
    }
}
