//! Validation error carrier keyed by field name.
//!
//! [`ValidationErrors`] is the payload domain code returns (or propagates with
//! `?`) when user input fails validation. It is not a runtime fault: a higher
//! layer catches it and translates the contents into an HTTP response, usually
//! by copying them into a model-state container via
//! [`add_to_model_state`](ValidationErrors::add_to_model_state).

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use crate::core::model_state::ModelStateSink;
use crate::mapping::FieldMap;

/// Insertion-ordered map from field key to accumulated error messages.
///
/// Keys are field names, or [`GENERAL_KEY`] for errors not tied to a
/// specific field. Iteration reproduces insertion order for both keys and
/// the messages under each key.
pub type ErrorMap = IndexMap<String, Vec<String>>;

/// Key under which errors not tied to a specific field are stored.
pub const GENERAL_KEY: &str = "";

/// An error carrying a set of validation failures keyed by field name.
///
/// The display message is always the same fixed summary, independent of the
/// contents; the per-field detail lives in the error map. Construct it empty,
/// from a pre-built [`ErrorMap`], from a single ad hoc message, or through
/// [`ValidationErrorsBuilder`](crate::builder::ValidationErrorsBuilder).
///
/// # Example
///
/// ```rust
/// use fieldwise::{ErrorMap, ValidationErrors};
///
/// let mut errors = ErrorMap::new();
/// errors.insert("email".to_string(), vec!["Email is invalid".to_string()]);
///
/// let errors = ValidationErrors::with_errors(errors);
/// assert_eq!(
///     errors.to_string(),
///     "One or more data validation errors occurred."
/// );
/// assert_eq!(errors.error_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
#[error("One or more data validation errors occurred.")]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: ErrorMap,
}

impl ValidationErrors {
    /// Create a carrier with no errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a carrier holding the given error map.
    pub fn with_errors(errors: ErrorMap) -> Self {
        Self { errors }
    }

    /// Create a carrier holding a single message under [`GENERAL_KEY`].
    pub fn from_message(message: impl Into<String>) -> Self {
        let mut errors = ErrorMap::new();
        errors.insert(GENERAL_KEY.to_string(), vec![message.into()]);
        Self { errors }
    }

    /// Read-only view of the error map.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Whether the carrier holds no errors at all.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of messages across all keys.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(|messages| messages.len()).sum()
    }

    /// Copy every message into a model-state sink for the target type `T`.
    ///
    /// Each key is resolved through `T`'s [`FieldMap`] declarations: a key
    /// some field of `T` maps from becomes that field's name, any other key
    /// passes through unchanged. Messages are appended in insertion order.
    ///
    /// This always appends; invoking it twice on the same sink duplicates
    /// every message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fieldwise::{FieldMap, ModelState, ValidationErrors};
    ///
    /// struct LoginForm {
    ///     email: String,
    /// }
    ///
    /// impl FieldMap for LoginForm {}
    ///
    /// let errors = ValidationErrors::from_message("Invalid credentials");
    ///
    /// let mut state = ModelState::new();
    /// errors.add_to_model_state::<LoginForm>(&mut state);
    /// assert_eq!(state.errors(""), ["Invalid credentials"]);
    /// ```
    pub fn add_to_model_state<T: FieldMap>(&self, state: &mut impl ModelStateSink) {
        for (key, messages) in &self.errors {
            let field = T::resolve_field(key);
            for message in messages {
                state.add_model_error(field, message);
            }
        }
    }

    /// Render the errors as a field-keyed JSON object for HTTP error bodies.
    ///
    /// Keys appear in the error map's insertion order, each holding its
    /// message list.
    pub fn to_payload(&self) -> serde_json::Value {
        let mut payload = serde_json::Map::new();
        for (key, messages) in &self.errors {
            payload.insert(key.clone(), serde_json::Value::from(messages.clone()));
        }
        serde_json::Value::Object(payload)
    }
}

impl From<ErrorMap> for ValidationErrors {
    fn from(errors: ErrorMap) -> Self {
        Self::with_errors(errors)
    }
}

impl From<String> for ValidationErrors {
    fn from(message: String) -> Self {
        Self::from_message(message)
    }
}

impl From<&str> for ValidationErrors {
    fn from(message: &str) -> Self {
        Self::from_message(message)
    }
}
