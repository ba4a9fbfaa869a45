//! Error types for frustum plane derivation
//!
//! Every geometric operation validates its inputs up front and reports a
//! degenerate camera or projection as an error instead of returning NaN planes.

use std::fmt;

/// Result type for frustum operations
pub type Result<T> = std::result::Result<T, Error>;

/// Frustum derivation errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input cannot produce a well-defined basis or plane set
    /// (zero-length vector, parallel front/up, aspect or FOV out of range, ...)
    InvalidArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error at ERROR severity before handing it back to the caller
pub(crate) fn log_and_return_error(source: &str, error: Error) -> Error {
    match &error {
        Error::InvalidArgument(msg) => {
            crate::frustum_error!(source, "Invalid argument: {}", msg);
        }
    }
    error
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
