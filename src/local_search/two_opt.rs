//! First-improvement 2-opt (intra-route).

use crate::problem::Problem;
use crate::solution::Route;

use super::LocalSearch;

impl LocalSearch {
    /// Apply 2-opt moves to `route` until a full scan finds no improvement.
    ///
    /// Returns whether the route changed.
    pub fn two_opt(&mut self, route: &mut Route, problem: &Problem) -> bool {
        let mut changed = false;

        while let Some(candidate) = self.first_improvement(route, problem) {
            *route = candidate;
            self.moves_applied += 1;
            changed = true;
        }

        changed
    }

    /// Scan segment reversals `i + 1..=j` with `j >= i + 2` and return the
    /// first one that strictly lowers the route cost.
    fn first_improvement(&self, route: &Route, problem: &Problem) -> Option<Route> {
        let n = route.len();

        for i in 0..n.saturating_sub(1) {
            for j in (i + 2)..n {
                let candidate = route.with_reversed_segment(i, j, problem);
                if candidate.total_cost < route.total_cost {
                    return Some(candidate);
                }
            }
        }

        None
    }
}
