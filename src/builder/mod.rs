//! Builder API for assembling validation errors fluently.
//!
//! This module provides the accumulator domain code drives while validating
//! input: chain general and per-field errors in any order, then snapshot the
//! collected state into a
//! [`ValidationErrors`](crate::core::ValidationErrors).

pub mod error;
pub mod macros;
pub mod validation;

pub use error::BuildError;
pub use validation::ValidationErrorsBuilder;
