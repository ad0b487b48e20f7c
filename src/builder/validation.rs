//! Builder for accumulating validation errors.

use crate::builder::error::BuildError;
use crate::core::{ErrorMap, ValidationErrors, GENERAL_KEY};

/// Fluent accumulator for building
/// [`ValidationErrors`](crate::core::ValidationErrors).
///
/// General errors land under [`GENERAL_KEY`], per-field errors under the
/// field's name. [`build`](Self::build) snapshots the current state without
/// consuming the builder, so accumulation can continue afterwards and each
/// snapshot stays independent.
///
/// Not synchronized: a builder belongs to one construction sequence on one
/// thread.
///
/// # Example
///
/// ```rust
/// use fieldwise::ValidationErrorsBuilder;
///
/// # fn main() -> Result<(), fieldwise::BuildError> {
/// let mut builder = ValidationErrorsBuilder::new();
/// builder
///     .error("Submission rejected")
///     .field_error("name", "Name is required")?
///     .field_error("name", "Name is too short")?;
///
/// assert!(builder.has_errors());
/// let errors = builder.build();
/// assert_eq!(errors.error_count(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationErrorsBuilder {
    errors: ErrorMap,
}

impl ValidationErrorsBuilder {
    /// Create a builder with no accumulated errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error not tied to a specific field. Chainable.
    pub fn error(&mut self, message: impl Into<String>) -> &mut Self {
        self.errors
            .entry(GENERAL_KEY.to_string())
            .or_default()
            .push(message.into());
        self
    }

    /// Add an error for a field. Chainable through `?`.
    ///
    /// `field` must name the field directly: a plain identifier, as produced
    /// by [`field_of!`](crate::field_of). Anything else (method calls, member
    /// chains, arbitrary expressions rendered to a string) is rejected
    /// without mutating the accumulator.
    ///
    /// # Errors
    ///
    /// [`BuildError::InvalidFieldSelector`] when `field` is not a plain
    /// identifier.
    pub fn field_error(
        &mut self,
        field: &str,
        message: impl Into<String>,
    ) -> Result<&mut Self, BuildError> {
        if !is_plain_field_name(field) {
            return Err(BuildError::InvalidFieldSelector {
                parameter: "field",
                selector: field.to_string(),
            });
        }
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
        Ok(self)
    }

    /// Whether any error has been added under any key.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Snapshot the accumulated errors into a
    /// [`ValidationErrors`](crate::core::ValidationErrors).
    ///
    /// Always succeeds, including with zero errors accumulated. The builder
    /// remains usable afterwards.
    pub fn build(&self) -> ValidationErrors {
        ValidationErrors::with_errors(self.errors.clone())
    }
}

/// A plain identifier: `[A-Za-z_]` then `[A-Za-z0-9_]*`.
fn is_plain_field_name(field: &str) -> bool {
    let mut chars = field.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
