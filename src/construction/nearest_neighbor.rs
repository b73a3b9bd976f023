//! Nearest-neighbor construction.

use super::utils::Assigned;
use super::Construction;
use crate::distance::DEPOT;
use crate::solution::Route;

impl Construction<'_> {
    /// Build routes one at a time by walking to the closest unvisited customer that fits.
    ///
    /// A route is closed once no unvisited customer fits its remaining capacity;
    /// a new route is opened while the route limit allows and some customer can
    /// still be placed.
    pub fn nearest_neighbor(&self) -> Vec<Route> {
        let problem = self.problem;
        let mut assigned = Assigned::new();
        let mut routes: Vec<Route> = Vec::new();

        while self.can_open_route(routes.len()) {
            let mut route = Route::new();
            let mut current = DEPOT;

            while let Some(next) = self.nearest_fitting(current, &route, &assigned) {
                route.push(next, problem);
                assigned.insert(next);
                current = next;
            }

            if route.is_empty() {
                break;
            }

            routes.push(route);
        }

        routes
    }

    /// Closest unassigned customer to `from` whose demand fits `route`.
    ///
    /// Ties go to the lowest customer index.
    fn nearest_fitting(&self, from: usize, route: &Route, assigned: &Assigned) -> Option<usize> {
        let problem = self.problem;

        assigned
            .unassigned(problem)
            .filter(|&c| route.can_accept(problem.demand(c), problem.vehicle_capacity))
            .fold(None, |best: Option<(usize, f64)>, c| {
                let d = problem.get_distance(from, c);
                match best {
                    Some((_, best_d)) if best_d <= d => best,
                    _ => Some((c, d)),
                }
            })
            .map(|(c, _)| c)
    }
}
