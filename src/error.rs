//! Input validation errors.

use thiserror::Error;

/// Rejected predicate input.
#[derive(Debug, Error, Copy, Clone, PartialEq)]
pub enum InputError {
    /// NaN or infinite coordinate.
    #[error("coordinate is not finite: {0}")]
    NonFinite(f64),
}
