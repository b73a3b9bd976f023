//! Scored-insertion construction (the "enhanced" heuristic).
//!
//! Starts from the savings seeds, then repeatedly commits the single
//! (customer, placement) pair with the highest score until no unassigned
//! customer has a feasible placement. Scores:
//!
//! ```text
//! existing route: 1 / insertion_delta * (1 + w * demand / capacity) * length_penalty
//! new route:      1 / d(0, customer)  * (1 + w * demand / capacity)
//! ```

use log::debug;

use super::utils::{best_insertion, Assigned};
use super::Construction;
use crate::distance::DEPOT;
use crate::solution::Route;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Placement {
    Existing { route: usize, position: usize },
    NewRoute,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    customer: usize,
    placement: Placement,
    score: f64,
}

impl Construction<'_> {
    /// Savings seeding followed by greedy highest-score insertion.
    pub fn scored_insertion(&self) -> Vec<Route> {
        let problem = self.problem;
        let mut assigned = Assigned::new();
        let mut routes = self.seed_savings_pairs(&mut assigned);
        let mut insertions = 0;

        while let Some(candidate) = self.best_candidate(&routes, &assigned) {
            match candidate.placement {
                Placement::Existing { route, position } => {
                    routes[route].insert(position, candidate.customer, problem);
                }
                Placement::NewRoute => {
                    routes.push(Route::from_customers(vec![candidate.customer], problem));
                }
            }
            assigned.insert(candidate.customer);
            insertions += 1;
        }

        debug!("scored insertion committed {} customers", insertions);
        routes
    }

    /// Highest-scoring feasible placement over all unassigned customers.
    ///
    /// Ties keep the first candidate in (customer, route) order.
    fn best_candidate(&self, routes: &[Route], assigned: &Assigned) -> Option<Candidate> {
        let problem = self.problem;
        let capacity = problem.vehicle_capacity;
        let mut best: Option<Candidate> = None;

        let mut consider = |candidate: Candidate| {
            if best.map_or(true, |b| candidate.score > b.score) {
                best = Some(candidate);
            }
        };

        for customer in assigned.unassigned(problem) {
            let demand = problem.demand(customer);
            let demand_bonus = 1.0 + self.weights.demand_weight * problem.demand_ratio(demand);
            let mut admitted = false;

            for (r_idx, route) in routes.iter().enumerate() {
                if !route.can_accept(demand, capacity) {
                    continue;
                }
                admitted = true;

                let (position, cost) = best_insertion(route, customer, problem);
                let delta = (cost - route.total_cost).max(f64::EPSILON);
                consider(Candidate {
                    customer,
                    placement: Placement::Existing {
                        route: r_idx,
                        position,
                    },
                    score: demand_bonus * self.weights.length_penalty(route.len()) / delta,
                });
            }

            if !admitted && self.can_open_route(routes.len()) && self.fits_empty_vehicle(customer)
            {
                let distance = problem.get_distance(DEPOT, customer).max(f64::EPSILON);
                consider(Candidate {
                    customer,
                    placement: Placement::NewRoute,
                    score: demand_bonus / distance,
                });
            }
        }

        best
    }
}
