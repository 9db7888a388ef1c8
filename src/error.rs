//! Error type shared by every network operation.
//!
//! All failures are raised before any weight, output or error value is
//! touched, so a failed call leaves the network as it was.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// An id handed to a wiring or unit operation is not a usable unit.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Input length differs from the input layer, or target length from the output layer.
    #[error("Dimension mismatch: expected {expected} values, found {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// An input value outside the closed interval [-1, 1].
    #[error("Range violation: input {value} at index {index} lies outside [-1, 1]")]
    RangeViolation { index: usize, value: f64 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Empty network: {0}")]
    EmptyNetwork(String),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
