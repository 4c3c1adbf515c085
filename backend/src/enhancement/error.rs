//! Pricing errors
//!
//! Every failure of a cost computation is returned to the caller as an
//! [`EnhancementError`]. Nothing is retried, logged, or defaulted to zero.

use thiserror::Error;

/// Errors that can occur while pricing an enhancement
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EnhancementError {
    #[error("{field} must be between {min} and {max}, not {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Unknown base enhancement {0}")]
    UnknownType(i64),

    #[error("Unknown base enhancement '{0}'")]
    UnknownTypeName(String),

    #[error("Add Attack Hex requires at least one current hex, got 0")]
    DivisionByZero,

    #[error("Current hex count cannot be negative, got {0}")]
    InvalidHexCount(i64),
}

impl EnhancementError {
    /// True for level / previous-enhancement range violations
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, EnhancementError::OutOfRange { .. })
    }

    /// True when the enhancement type could not be resolved
    pub fn is_unknown_type(&self) -> bool {
        matches!(
            self,
            EnhancementError::UnknownType(_) | EnhancementError::UnknownTypeName(_)
        )
    }
}
