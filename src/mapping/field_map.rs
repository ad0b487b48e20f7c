//! The `FieldMap` trait resolving external keys to a type's field names.

/// Maps externally-supplied validation keys onto a type's own field names.
///
/// Implementations declare static `(domain key, local field name)` pairs;
/// resolution falls back to the key itself when no pair matches, so a type
/// with no declarations behaves as fully unmapped. Domain keys are matched
/// verbatim, the empty string included.
///
/// Most types should implement this through
/// [`map_fields!`](crate::map_fields); implement it manually only when the
/// pairs come from somewhere a macro invocation cannot express.
///
/// # Example
///
/// ```rust
/// use fieldwise::FieldMap;
///
/// struct ProfileForm;
///
/// impl FieldMap for ProfileForm {
///     fn field_mappings() -> &'static [(&'static str, &'static str)] {
///         &[("display_name", "shown_name")]
///     }
/// }
///
/// assert_eq!(ProfileForm::resolve_field("display_name"), "shown_name");
/// assert_eq!(ProfileForm::resolve_field("email"), "email");
/// ```
pub trait FieldMap {
    /// Pairs of `(domain key, local field name)` declared for this type.
    ///
    /// Default implementation declares no mappings.
    fn field_mappings() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Resolve a domain key to this type's field name.
    ///
    /// Returns the local field name of the first declared pair whose domain
    /// key equals `key`, or `key` unchanged when none matches.
    fn resolve_field(key: &str) -> &str {
        Self::field_mappings()
            .iter()
            .find(|(domain, _)| *domain == key)
            .map(|(_, local)| *local)
            .unwrap_or(key)
    }
}
