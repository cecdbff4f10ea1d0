use thiserror::Error;

use crate::domain::Axis;

/// Result type for parsing and area computation
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Everything that can go wrong turning user input into coordinates or an area.
///
/// None of these are fatal; callers surface the message and let the user retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    #[error("at least 3 coordinates required, got {count}")]
    InsufficientPoints { count: usize },

    #[error("invalid coordinate at position {index}: {reason}")]
    InvalidElement { index: usize, reason: String },

    #[error("invalid number for {axis}: {input:?}")]
    NumberParse { axis: Axis, input: String },

    #[error("{axis} out of range: {value} (must be between -{limit} and {limit})", limit = .axis.limit())]
    Range { axis: Axis, value: f64 },
}

impl ValidationError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_element(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidElement {
            index,
            reason: reason.into(),
        }
    }
}
