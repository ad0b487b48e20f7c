//! Core validation error carrier and model state types.
//!
//! The carrier is immutable once constructed and safe to read from multiple
//! threads. All mutation happens either in the builder before construction or
//! in the model-state sink the errors are copied into.

pub mod errors;
pub mod model_state;

// Re-export commonly used types
pub use errors::{ErrorMap, ValidationErrors, GENERAL_KEY};
pub use model_state::{ModelState, ModelStateSink};
