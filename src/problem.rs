//! Problem definition and instance parsing for the CVRP.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use crate::distance::{DistanceMatrix, DEPOT};
use crate::error::{Result, SolverError};

/// A location with demand. Index 0 of an instance is the depot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub x: f64,
    pub y: f64,
    pub demand: i64,
}

impl Customer {
    /// Create a new customer.
    pub fn new(id: i64, x: f64, y: f64, demand: i64) -> Self {
        Customer { id, x, y, demand }
    }

    /// Euclidean distance to another customer.
    pub fn distance(&self, other: &Customer) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A CVRP instance with its precomputed distance matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub customers: Vec<Customer>,
    pub vehicle_capacity: i64,
    pub num_vehicles: usize,
    pub distance_matrix: DistanceMatrix,
}

impl Problem {
    /// Create a new problem and build its distance matrix.
    pub fn new(customers: Vec<Customer>, vehicle_capacity: i64, num_vehicles: usize) -> Self {
        let distance_matrix = DistanceMatrix::from_customers(&customers);

        Problem {
            customers,
            vehicle_capacity,
            num_vehicles,
            distance_matrix,
        }
    }

    /// Distance between two customer indices.
    pub fn get_distance(&self, from: usize, to: usize) -> f64 {
        self.distance_matrix.get(from, to)
    }

    /// Demand of the customer at `index`.
    pub fn demand(&self, index: usize) -> i64 {
        self.customers[index].demand
    }

    /// Number of customers, depot excluded.
    pub fn get_customer_count(&self) -> usize {
        self.customers.len().saturating_sub(1)
    }

    /// Indices of every non-depot customer in ascending order.
    pub fn customer_indices(&self) -> std::ops::Range<usize> {
        (DEPOT + 1)..self.customers.len()
    }

    /// Total demand over all non-depot customers, saturating at `i64::MAX`.
    pub fn total_demand(&self) -> i64 {
        self.customer_indices()
            .fold(0i64, |acc, c| acc.saturating_add(self.demand(c)))
    }

    /// Share of the vehicle capacity a given demand takes up.
    ///
    /// Zero when the capacity itself is zero.
    pub fn demand_ratio(&self, demand: i64) -> f64 {
        if self.vehicle_capacity > 0 {
            demand as f64 / self.vehicle_capacity as f64
        } else {
            0.0
        }
    }

    /// Load a problem from a whitespace-delimited instance file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SolverError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("read {} bytes from {}", contents.len(), path.display());
        contents.parse()
    }
}

/// Renders the problem in the instance file format that `FromStr` reads.
impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} {}",
            self.customers.len(),
            self.vehicle_capacity,
            self.num_vehicles
        )?;

        for customer in &self.customers {
            writeln!(
                f,
                "{} {} {} {}",
                customer.x, customer.y, customer.demand, customer.id
            )?;
        }

        Ok(())
    }
}

impl FromStr for Problem {
    type Err = SolverError;

    /// Parse `numPoints capacity numVehicles` followed by `numPoints`
    /// records of `x y demand id`.
    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = Tokens(s.split_whitespace());

        let num_points: usize = tokens.next("point count")?;
        let vehicle_capacity: i64 = tokens.next("vehicle capacity")?;
        let num_vehicles: usize = tokens.next("vehicle count")?;

        if num_points == 0 {
            return Err(SolverError::Parse(
                "instance must contain at least the depot".to_string(),
            ));
        }

        let mut customers = Vec::with_capacity(num_points);
        for _ in 0..num_points {
            let x = tokens.next("x coordinate")?;
            let y = tokens.next("y coordinate")?;
            let demand = tokens.next("demand")?;
            let id = tokens.next("id")?;
            customers.push(Customer::new(id, x, y, demand));
        }

        let trailing = tokens.0.count();
        if trailing > 0 {
            warn!("ignoring {} trailing tokens after the last record", trailing);
        }

        Ok(Problem::new(customers, vehicle_capacity, num_vehicles))
    }
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl Tokens<'_> {
    fn next<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let token = self
            .0
            .next()
            .ok_or_else(|| SolverError::Parse(format!("unexpected end of input, expected {}", what)))?;

        token
            .parse()
            .map_err(|_| SolverError::Parse(format!("invalid {}: {:?}", what, token)))
    }
}
