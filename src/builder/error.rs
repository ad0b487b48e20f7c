//! Build errors for the validation errors builder.

use thiserror::Error;

/// Errors that can occur when accumulating validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("`{parameter}` must name a field directly, got {selector:?}. Pass the field identifier, not an expression")]
    InvalidFieldSelector {
        parameter: &'static str,
        selector: String,
    },
}

impl BuildError {
    /// Name of the parameter that failed validation.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidFieldSelector { parameter, .. } => parameter,
        }
    }
}
