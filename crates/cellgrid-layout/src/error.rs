//! Error types for cellgrid-layout.

use cellgrid_core::Axis;
use thiserror::Error;

/// Result alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised by grid configuration and placement.
///
/// Every error is raised before any state is touched, so a failed call
/// leaves the grid exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Malformed argument (zero rows/columns, unknown anchor name, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Series or cell index outside the current axis bounds.
    #[error("{axis} index {index} out of range for {len} {axis}(s)")]
    IndexOutOfRange {
        /// Axis the index refers to
        axis: Axis,
        /// Index as passed by the caller
        index: isize,
        /// Current axis length
        len: usize,
    },

    /// Weight, padding or spacing below zero (or not finite).
    #[error("{field} must be a finite non-negative value, got {value}")]
    NegativeValue {
        /// Name of the rejected field
        field: &'static str,
        /// Rejected value
        value: f32,
    },
}

impl GridError {
    /// Shorthand for [`GridError::InvalidArgument`].
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Reject `value` unless it is finite and not negative.
    pub(crate) fn check_non_negative(field: &'static str, value: f32) -> Result<f32> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::NegativeValue { field, value })
        }
    }
}
