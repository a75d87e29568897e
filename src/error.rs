//! Error types for interval estimation

use thiserror::Error;

/// Errors that can occur during interval estimation
#[derive(Error, Debug)]
pub enum Error {
    /// Success count outside the valid range for the sample size
    #[error("Success count {x} must be in [0, {n}]")]
    SuccessCountOutOfRange { x: f64, n: f64 },

    /// Paired sequence inputs of different lengths
    #[error("Sequence inputs must have equal lengths, got {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    Numerical(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Check that a success count lies in [0, n]
    ///
    /// NaN counts pass through unrejected and propagate through the
    /// arithmetic instead.
    pub fn check_success_count(n: f64, x: f64) -> Result<()> {
        if x < 0.0 || x > n {
            return Err(Error::SuccessCountOutOfRange { x, n });
        }
        Ok(())
    }

    /// Check that paired sequences have equal lengths
    pub fn check_equal_lengths(left: usize, right: usize) -> Result<()> {
        if left != right {
            return Err(Error::LengthMismatch { left, right });
        }
        Ok(())
    }
}
