//! Configuration parameters for the construction and improvement phases.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SolverError;

/// Construction heuristic selected for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Savings seeding followed by scored insertion
    Enhanced,
    /// Greedy nearest-neighbor walk
    Nearest,
    /// Savings seeding followed by first-fit tail appends
    Clarke,
}

impl Algorithm {
    /// Every algorithm, in CLI order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Enhanced, Algorithm::Nearest, Algorithm::Clarke];

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Enhanced => "enhanced",
            Algorithm::Nearest => "nearest",
            Algorithm::Clarke => "clarke",
        }
    }

    /// Route-count policy used when none is configured.
    pub fn default_route_limit(self) -> RouteLimit {
        match self {
            Algorithm::Enhanced | Algorithm::Clarke => RouteLimit::Fleet,
            Algorithm::Nearest => RouteLimit::Unbounded,
        }
    }
}

impl FromStr for Algorithm {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| SolverError::UnknownAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How many routes a construction heuristic may open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteLimit {
    /// At most the instance's vehicle count
    Fleet,
    /// No ceiling
    Unbounded,
    /// An explicit ceiling
    Fixed(usize),
}

impl RouteLimit {
    /// Resolve the policy against an instance's vehicle count.
    pub fn resolve(self, num_vehicles: usize) -> Option<usize> {
        match self {
            RouteLimit::Fleet => Some(num_vehicles),
            RouteLimit::Unbounded => None,
            RouteLimit::Fixed(n) => Some(n),
        }
    }
}

/// Weights of the scored-insertion heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertionWeights {
    /// Weight of `demand / capacity` in the demand bonus `1 + w * ratio`
    pub demand_weight: f64,
    /// Multiplier for routes that already hold at least 4 customers
    pub long_route_penalty: f64,
    /// Multiplier for routes that already hold exactly 3 customers
    pub medium_route_penalty: f64,
}

impl Default for InsertionWeights {
    fn default() -> Self {
        InsertionWeights {
            demand_weight: 0.5,
            long_route_penalty: 0.8,
            medium_route_penalty: 0.9,
        }
    }
}

impl InsertionWeights {
    /// Anti-clustering multiplier for a route of the given length.
    pub fn length_penalty(&self, route_len: usize) -> f64 {
        if route_len >= 4 {
            self.long_route_penalty
        } else if route_len >= 3 {
            self.medium_route_penalty
        } else {
            1.0
        }
    }
}

/// Configuration settings for a solver run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Construction heuristic
    pub algorithm: Algorithm,
    /// Route-count policy; `None` uses the algorithm's default
    pub route_limit: Option<RouteLimit>,
    /// Run 2-opt on every route after construction
    pub improve_routes: bool,
    /// Shortest route 2-opt is applied to
    pub two_opt_min_len: usize,
    /// Scoring weights for the enhanced heuristic
    pub insertion: InsertionWeights,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: Algorithm::Enhanced,
            route_limit: None,
            improve_routes: true,
            two_opt_min_len: 3,
            insertion: InsertionWeights::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the construction heuristic.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Override the route-count policy.
    pub fn with_route_limit(mut self, limit: RouteLimit) -> Self {
        self.route_limit = Some(limit);
        self
    }

    /// Enable or disable the 2-opt pass.
    pub fn with_improve_routes(mut self, improve: bool) -> Self {
        self.improve_routes = improve;
        self
    }

    /// Set the shortest route length 2-opt considers.
    pub fn with_two_opt_min_len(mut self, len: usize) -> Self {
        self.two_opt_min_len = len;
        self
    }

    /// Set the insertion scoring weights.
    pub fn with_insertion_weights(mut self, weights: InsertionWeights) -> Self {
        self.insertion = weights;
        self
    }

    /// Effective route ceiling for an instance with `num_vehicles` vehicles.
    pub fn max_routes(&self, num_vehicles: usize) -> Option<usize> {
        self.route_limit
            .unwrap_or_else(|| self.algorithm.default_route_limit())
            .resolve(num_vehicles)
    }
}
