//! Route and solution representation for the CVRP.

use crate::problem::Problem;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Tolerance used when comparing cached costs against a recomputation.
pub const COST_TOLERANCE: f64 = 1e-6;

/// A single vehicle tour starting and ending at the depot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// The sequence of customer indices (excluding the depot)
    pub customers: Vec<usize>,
    /// Cost of the depot-anchored tour over `customers`
    pub total_cost: f64,
    /// Sum of customer demands
    pub total_demand: i64,
}

impl Route {
    /// Create a new, empty route.
    pub fn new() -> Self {
        Route {
            customers: Vec::new(),
            total_cost: 0.0,
            total_demand: 0,
        }
    }

    /// Create a route visiting `customers` in order, with cost and demand evaluated.
    pub fn from_customers(customers: Vec<usize>, problem: &Problem) -> Self {
        let mut route = Route {
            customers,
            total_cost: 0.0,
            total_demand: 0,
        };
        route.evaluate(problem);
        route
    }

    /// Recompute the cached cost and demand from the customer sequence.
    pub fn evaluate(&mut self, problem: &Problem) {
        self.total_cost = problem.distance_matrix.tour_cost(&self.customers);
        self.total_demand = self.customers.iter().map(|&c| problem.demand(c)).sum();
    }

    /// Check if the route is empty.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Number of customers on the route.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Whether adding `demand` keeps the route within `capacity`.
    ///
    /// A sum that overflows `i64` never fits.
    pub fn can_accept(&self, demand: i64, capacity: i64) -> bool {
        self.total_demand
            .checked_add(demand)
            .is_some_and(|total| total <= capacity)
    }

    /// Cost of the tour if `customer` were inserted at `position`.
    pub fn cost_with_insertion(&self, customer: usize, position: usize, problem: &Problem) -> f64 {
        let mut candidate = self.customers.clone();
        candidate.insert(position, customer);
        problem.distance_matrix.tour_cost(&candidate)
    }

    /// Commit `customer` at `position` and refresh the cached fields.
    pub fn insert(&mut self, position: usize, customer: usize, problem: &Problem) {
        self.customers.insert(position, customer);
        self.evaluate(problem);
    }

    /// Commit `customer` at the tail and refresh the cached fields.
    pub fn push(&mut self, customer: usize, problem: &Problem) {
        self.customers.push(customer);
        self.evaluate(problem);
    }

    /// A copy of this route with positions `i + 1..=j` reversed.
    pub fn with_reversed_segment(&self, i: usize, j: usize, problem: &Problem) -> Route {
        let mut customers = self.customers.clone();
        customers[i + 1..=j].reverse();
        Route::from_customers(customers, problem)
    }

    /// Whether the cached cost and demand match a fresh recomputation.
    pub fn is_consistent(&self, problem: &Problem) -> bool {
        let mut fresh = self.clone();
        fresh.evaluate(problem);
        (fresh.total_cost - self.total_cost).abs() <= COST_TOLERANCE
            && fresh.total_demand == self.total_demand
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::new()
    }
}

/// The set of routes produced by one solver run.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Solution {
    /// The list of routes, in creation order
    pub routes: Vec<Route>,
    /// Customers that could not be placed on any route
    pub dropped: Vec<usize>,
}

impl Solution {
    /// Create a new, empty solution.
    pub fn new() -> Self {
        Solution::default()
    }

    /// Sum of route costs.
    pub fn total_cost(&self) -> f64 {
        self.routes.iter().map(|r| r.total_cost).sum()
    }

    /// Sum of route demands, saturating at `i64::MAX`.
    pub fn total_demand(&self) -> i64 {
        self.routes
            .iter()
            .fold(0i64, |acc, r| acc.saturating_add(r.total_demand))
    }

    /// Number of customers placed on some route.
    pub fn served_count(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Record every customer of `problem` not present on any route as dropped.
    pub fn collect_dropped(&mut self, problem: &Problem) {
        let served: HashSet<usize> = self
            .routes
            .iter()
            .flat_map(|r| r.customers.iter().copied())
            .collect();

        self.dropped = problem
            .customer_indices()
            .filter(|c| !served.contains(c))
            .collect();
    }

    /// No route carries more than the vehicle capacity.
    pub fn respects_capacity(&self, capacity: i64) -> bool {
        self.routes.iter().all(|r| r.total_demand <= capacity)
    }

    /// Routes are pairwise disjoint and only reference valid non-depot customers.
    pub fn is_partition(&self, problem: &Problem) -> bool {
        let valid = problem.customer_indices();
        let mut seen = HashSet::new();

        self.routes
            .iter()
            .flat_map(|r| r.customers.iter())
            .all(|&c| valid.contains(&c) && seen.insert(c))
    }
}

impl fmt::Debug for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solution:")?;
        writeln!(f, "  Cost: {:.2}", self.total_cost())?;
        writeln!(f, "  Demand: {}", self.total_demand())?;
        writeln!(f, "  Routes: {}", self.routes.len())?;

        for (i, route) in self.routes.iter().enumerate() {
            writeln!(
                f,
                "  Route {}: {:?} (Demand: {}, Cost: {:.2})",
                i, route.customers, route.total_demand, route.total_cost
            )?;
        }

        if !self.dropped.is_empty() {
            writeln!(f, "  Dropped: {:?}", self.dropped)?;
        }

        Ok(())
    }
}
