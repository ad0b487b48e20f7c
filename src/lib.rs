//! Fieldwise: field-keyed validation errors for web handlers
//!
//! Fieldwise carries already-computed validation results from a domain layer
//! to a web layer. Errors accumulate in an insertion-ordered map keyed by
//! field name (or the empty string for errors not tied to a field), and copy
//! into any model-state container, translating keys through per-type field
//! mappings along the way.
//!
//! # Core Concepts
//!
//! - **ValidationErrors**: an error type wrapping the accumulated messages,
//!   raised by domain code when user input fails validation
//! - **ValidationErrorsBuilder**: a fluent accumulator producing
//!   `ValidationErrors` snapshots
//! - **FieldMap**: per-type declarations remapping external validation keys
//!   onto a model's own field names, with identity fallback
//! - **ModelStateSink**: the write-only seam to the hosting framework's
//!   model-state container, with [`ModelState`] as a ready-made implementation
//!
//! # Example
//!
//! ```rust
//! use fieldwise::{map_fields, FieldMap, ModelState, ValidationErrorsBuilder};
//!
//! // The web-layer form whose field names differ from the domain's keys.
//! struct SignupForm {
//!     shown_name: String,
//! }
//!
//! map_fields! {
//!     SignupForm {
//!         shown_name => "display_name",
//!     }
//! }
//!
//! # fn main() -> Result<(), fieldwise::BuildError> {
//! let mut builder = ValidationErrorsBuilder::new();
//! builder
//!     .error("Account could not be created")
//!     .field_error("display_name", "Display name is required")?;
//!
//! let errors = builder.build();
//!
//! let mut state = ModelState::new();
//! errors.add_to_model_state::<SignupForm>(&mut state);
//!
//! assert!(!state.is_valid());
//! assert_eq!(state.errors(""), ["Account could not be created"]);
//! assert_eq!(state.errors("shown_name"), ["Display name is required"]);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod mapping;

// Re-export commonly used types
pub use builder::{BuildError, ValidationErrorsBuilder};
pub use mapping::FieldMap;
pub use self::core::{ErrorMap, ModelState, ModelStateSink, ValidationErrors, GENERAL_KEY};
