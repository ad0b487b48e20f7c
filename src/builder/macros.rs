//! Macro for compile-checked field selectors.

/// Yield a field's name as a `&'static str`, checked against the type.
///
/// `field_of!(Model, field)` fails to compile when `Model` has no such
/// field, making it the type-safe way to hand a selector to
/// [`field_error`](crate::builder::ValidationErrorsBuilder::field_error).
/// The expansion is always a plain identifier, so the builder's runtime
/// selector check accepts it.
///
/// # Example
///
/// ```
/// use fieldwise::{field_of, ValidationErrorsBuilder};
///
/// struct SignupForm {
///     email: String,
/// }
///
/// # fn main() -> Result<(), fieldwise::BuildError> {
/// let mut builder = ValidationErrorsBuilder::new();
/// builder.field_error(field_of!(SignupForm, email), "Email is invalid")?;
///
/// assert_eq!(builder.build().errors()["email"], ["Email is invalid"]);
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! field_of {
    ($ty:ty, $field:ident) => {{
        #[allow(dead_code)]
        fn assert_field_exists(model: &$ty) {
            let _ = &model.$field;
        }
        stringify!($field)
    }};
}
