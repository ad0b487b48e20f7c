//! Field mapping between external validation keys and model field names.
//!
//! Domain layers report validation errors under their own keys; web-layer
//! models often name the corresponding fields differently. A [`FieldMap`]
//! implementation declares the correspondence per type, and
//! [`map_fields!`](crate::map_fields) keeps the declaration as terse as an
//! attribute while compile-checking that every named field exists.

pub mod field_map;
pub mod macros;

pub use field_map::FieldMap;
