//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required filter parameter is absent or empty
    MissingFilter { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFilter { field } => {
                write!(f, "Please provide a {} to filter by", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
