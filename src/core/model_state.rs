//! Model state sink trait and a ready-made container.

use indexmap::IndexMap;
use serde::Serialize;

/// Sink for per-field validation error messages.
///
/// This is the seam to the hosting framework's model-state container. The
/// library only ever writes through it; prior contents are never read.
pub trait ModelStateSink {
    /// Append an error message under the given key.
    fn add_model_error(&mut self, key: &str, message: &str);
}

/// Insertion-ordered container of per-field validation error messages.
///
/// A standalone [`ModelStateSink`] implementation for hosts without a
/// framework container of their own. Keys appear in first-write order and
/// messages under a key keep arrival order.
///
/// # Example
///
/// ```rust
/// use fieldwise::{ModelState, ModelStateSink};
///
/// let mut state = ModelState::new();
/// assert!(state.is_valid());
///
/// state.add_model_error("email", "Email is invalid");
/// assert!(!state.is_valid());
/// assert_eq!(state.error_count(), 1);
/// assert_eq!(state.errors("email"), ["Email is invalid"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModelState {
    entries: IndexMap<String, Vec<String>>,
}

impl ModelState {
    /// Create an empty, valid model state.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while no error has been recorded.
    pub fn is_valid(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of messages across all keys.
    pub fn error_count(&self) -> usize {
        self.entries.values().map(|messages| messages.len()).sum()
    }

    /// Messages recorded under the given key, empty when the key is absent.
    pub fn errors(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Keys with at least one message, in first-write order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl ModelStateSink for ModelState {
    fn add_model_error(&mut self, key: &str, message: &str) {
        self.entries
            .entry(key.to_string())
            .or_default()
            .push(message.to_string());
    }
}
