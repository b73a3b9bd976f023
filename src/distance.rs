//! Euclidean distance model and depot-anchored tour cost.

use serde::{Deserialize, Serialize};

use crate::problem::Customer;

/// Dense all-pairs distance matrix over the depot and every customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Build the full symmetric matrix with a zero diagonal.
    pub fn from_customers(customers: &[Customer]) -> Self {
        let size = customers.len();
        let mut data = vec![0.0; size * size];

        for i in 0..size {
            for j in (i + 1)..size {
                let d = customers[i].distance(&customers[j]);
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }

        DistanceMatrix { data, size }
    }

    /// Distance between two locations by index.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations, depot included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cost of the closed tour depot -> customers... -> depot.
    ///
    /// An empty sequence costs zero.
    pub fn tour_cost(&self, customers: &[usize]) -> f64 {
        let (first, last) = match (customers.first(), customers.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return 0.0,
        };

        let inner: f64 = customers
            .windows(2)
            .map(|pair| self.get(pair[0], pair[1]))
            .sum();

        self.get(DEPOT, first) + inner + self.get(last, DEPOT)
    }
}

/// Index of the depot in every instance.
pub const DEPOT: usize = 0;

#[cfg(test)]
mod tests {
    use super::*;

    fn customers() -> Vec<Customer> {
        vec![
            Customer::new(0, 0.0, 0.0, 0),
            Customer::new(1, 3.0, 4.0, 1),
            Customer::new(2, 6.0, 8.0, 1),
        ]
    }

    #[test]
    fn test_matrix_is_symmetric_with_zero_diagonal() {
        let matrix = DistanceMatrix::from_customers(&customers());

        assert_eq!(matrix.size(), 3);
        for i in 0..3 {
            assert_eq!(matrix.get(i, i), 0.0);
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
        assert!((matrix.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((matrix.get(0, 2) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_cost() {
        let matrix = DistanceMatrix::from_customers(&customers());

        assert_eq!(matrix.tour_cost(&[]), 0.0);
        assert!((matrix.tour_cost(&[1]) - 10.0).abs() < 1e-10);
        // 0 -> 1 -> 2 -> 0 = 5 + 5 + 10
        assert!((matrix.tour_cost(&[1, 2]) - 20.0).abs() < 1e-10);
    }
}
