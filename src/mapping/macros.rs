//! Macro for declarative field mapping registration.

/// Generate a [`FieldMap`](crate::mapping::FieldMap) implementation from a
/// declarative block.
///
/// Each entry reads `local_field => "domain key"`: errors recorded under the
/// domain key resolve to the named field. Every named field must exist on the
/// type, checked at compile time. When two entries share a domain key, the
/// first one declared wins.
///
/// # Example
///
/// ```
/// use fieldwise::{map_fields, FieldMap};
///
/// struct SignupForm {
///     shown_name: String,
///     contact: String,
/// }
///
/// map_fields! {
///     SignupForm {
///         shown_name => "display_name",
///         contact => "email_address",
///     }
/// }
///
/// assert_eq!(SignupForm::resolve_field("display_name"), "shown_name");
/// assert_eq!(SignupForm::resolve_field("email_address"), "contact");
/// assert_eq!(SignupForm::resolve_field("unknown"), "unknown");
/// ```
#[macro_export]
macro_rules! map_fields {
    (
        $ty:ty {
            $($field:ident => $domain:expr),* $(,)?
        }
    ) => {
        impl $crate::mapping::FieldMap for $ty {
            fn field_mappings() -> &'static [(&'static str, &'static str)] {
                // Every declared field must exist on the type.
                #[allow(dead_code)]
                fn assert_fields_exist(model: &$ty) {
                    $(let _ = &model.$field;)*
                }
                &[$(($domain, stringify!($field))),*]
            }
        }
    };
}
