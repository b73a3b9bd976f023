//! Error types for loading instances and running the solver.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a solver run.
///
/// Customers that cannot be placed are not errors; they are reported through
/// [`Solution::dropped`](crate::solution::Solution::dropped).
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("cannot open file {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid instance: {0}")]
    Parse(String),
    #[error("unknown algorithm: {0} (expected one of: enhanced, nearest, clarke)")]
    UnknownAlgorithm(String),
    #[error("failed to write solution: {0}")]
    Output(#[from] io::Error),
    #[error("failed to serialize solution: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SolverError>;
