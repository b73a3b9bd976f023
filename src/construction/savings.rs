//! Savings-based (Clarke-Wright style) construction.
//!
//! Customer pairs are visited by decreasing saving
//! `d(0, i) + d(0, j) - d(i, j)`; a pair of unassigned customers whose joint
//! demand fits a vehicle seeds a new two-customer route. Remaining customers
//! are then appended to the first route with room, or open a route of their
//! own while the route limit allows.

use log::debug;

use super::utils::{compute_savings, Assigned};
use super::Construction;
use crate::solution::Route;

impl Construction<'_> {
    /// Seed two-customer routes from the savings list.
    pub fn seed_savings_pairs(&self, assigned: &mut Assigned) -> Vec<Route> {
        let problem = self.problem;
        let mut routes: Vec<Route> = Vec::new();

        for saving in compute_savings(problem) {
            if !self.can_open_route(routes.len()) {
                break;
            }
            if assigned.contains(saving.i) || assigned.contains(saving.j) {
                continue;
            }

            let fits = problem
                .demand(saving.i)
                .checked_add(problem.demand(saving.j))
                .is_some_and(|demand| demand <= problem.vehicle_capacity);
            if fits {
                routes.push(Route::from_customers(vec![saving.i, saving.j], problem));
                assigned.insert(saving.i);
                assigned.insert(saving.j);
            }
        }

        debug!("seeded {} routes from savings pairs", routes.len());
        routes
    }

    /// Savings seeding followed by first-fit tail appends.
    pub fn clarke_wright(&self) -> Vec<Route> {
        let problem = self.problem;
        let mut assigned = Assigned::new();
        let mut routes = self.seed_savings_pairs(&mut assigned);

        let remaining: Vec<usize> = assigned.unassigned(problem).collect();
        for customer in remaining {
            let demand = problem.demand(customer);

            let target = routes
                .iter()
                .position(|r| r.can_accept(demand, problem.vehicle_capacity));

            match target {
                Some(idx) => routes[idx].push(customer, problem),
                None if self.can_open_route(routes.len()) && self.fits_empty_vehicle(customer) => {
                    routes.push(Route::from_customers(vec![customer], problem));
                }
                None => {}
            }
        }

        routes
    }
}
