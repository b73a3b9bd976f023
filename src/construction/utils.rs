//! Shared helpers for the construction heuristics.

use itertools::Itertools;
use std::collections::BTreeSet;

use crate::distance::DEPOT;
use crate::problem::Problem;
use crate::solution::Route;

/// The cost avoided by serving `i` and `j` on one route instead of two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saving {
    pub i: usize,
    pub j: usize,
    pub value: f64,
}

/// Savings for every unordered customer pair, sorted by decreasing value.
///
/// The sort is stable, so equal savings keep the enumeration order
/// `(1, 2), (1, 3), ..., (2, 3), ...`.
pub fn compute_savings(problem: &Problem) -> Vec<Saving> {
    let mut savings: Vec<Saving> = problem
        .customer_indices()
        .tuple_combinations()
        .map(|(i, j)| Saving {
            i,
            j,
            value: problem.get_distance(DEPOT, i) + problem.get_distance(DEPOT, j)
                - problem.get_distance(i, j),
        })
        .collect();

    savings.sort_by(|a, b| b.value.total_cmp(&a.value));
    savings
}

/// Customers already committed to a route.
#[derive(Debug, Clone, Default)]
pub struct Assigned {
    customers: BTreeSet<usize>,
}

impl Assigned {
    pub fn new() -> Self {
        Assigned::default()
    }

    pub fn contains(&self, customer: usize) -> bool {
        self.customers.contains(&customer)
    }

    pub fn insert(&mut self, customer: usize) {
        self.customers.insert(customer);
    }

    /// Customers of `problem` not yet assigned, in ascending index order.
    pub fn unassigned<'a>(&'a self, problem: &Problem) -> impl Iterator<Item = usize> + 'a {
        problem
            .customer_indices()
            .filter(move |&c| !self.contains(c))
    }
}

/// Cheapest position to insert `customer` into `route`, with the resulting tour cost.
///
/// Ties keep the lowest position.
pub fn best_insertion(route: &Route, customer: usize, problem: &Problem) -> (usize, f64) {
    (0..=route.len())
        .map(|pos| (pos, route.cost_with_insertion(customer, pos, problem)))
        .fold((0, f64::INFINITY), |best, candidate| {
            if candidate.1 < best.1 {
                candidate
            } else {
                best
            }
        })
}
