//! Property-based tests for the validation error types.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use fieldwise::{
    map_fields, ErrorMap, FieldMap, ModelState, ValidationErrors, ValidationErrorsBuilder,
};
use proptest::prelude::*;

struct UnmappedModel {
    #[allow(dead_code)]
    name: String,
}

impl FieldMap for UnmappedModel {}

struct MappedModel {
    #[allow(dead_code)]
    mapped_name: String,
}

map_fields! {
    MappedModel {
        mapped_name => "domain_name",
    }
}

const FIXED_MESSAGE: &str = "One or more data validation errors occurred.";

prop_compose! {
    fn arbitrary_field_key()(key in "[a-z_][a-z0-9_]{0,8}") -> String {
        key
    }
}

prop_compose! {
    fn arbitrary_messages()(messages in prop::collection::vec("[ -~]{1,16}", 1..5)) -> Vec<String> {
        messages
    }
}

prop_compose! {
    fn arbitrary_error_map()(
        entries in prop::collection::vec((arbitrary_field_key(), arbitrary_messages()), 0..5)
    ) -> ErrorMap {
        let mut map = ErrorMap::new();
        for (key, messages) in entries {
            map.entry(key).or_default().extend(messages);
        }
        map
    }
}

proptest! {
    #[test]
    fn message_is_fixed_regardless_of_contents(map in arbitrary_error_map()) {
        let errors = ValidationErrors::with_errors(map);
        prop_assert_eq!(errors.to_string(), FIXED_MESSAGE);
    }

    #[test]
    fn error_count_matches_map_contents(map in arbitrary_error_map()) {
        let expected: usize = map.values().map(|messages| messages.len()).sum();
        let errors = ValidationErrors::with_errors(map);
        prop_assert_eq!(errors.error_count(), expected);
    }

    #[test]
    fn resolve_field_without_mappings_is_identity(key in arbitrary_field_key()) {
        prop_assert_eq!(UnmappedModel::resolve_field(&key), key.as_str());
    }

    #[test]
    fn builder_preserves_per_key_message_order(
        key in arbitrary_field_key(),
        messages in arbitrary_messages(),
    ) {
        let mut builder = ValidationErrorsBuilder::new();
        for message in &messages {
            builder.field_error(&key, message.as_str()).unwrap();
        }

        let mut state = ModelState::new();
        builder.build().add_to_model_state::<UnmappedModel>(&mut state);

        prop_assert_eq!(state.errors(&key), messages.as_slice());
    }

    #[test]
    fn has_errors_iff_anything_was_added(
        general in prop::collection::vec("[ -~]{1,16}", 0..4),
        field_messages in prop::collection::vec("[ -~]{1,16}", 0..4),
    ) {
        let mut builder = ValidationErrorsBuilder::new();
        for message in &general {
            builder.error(message.as_str());
        }
        for message in &field_messages {
            builder.field_error("name", message.as_str()).unwrap();
        }

        prop_assert_eq!(
            builder.has_errors(),
            !general.is_empty() || !field_messages.is_empty()
        );
        prop_assert_eq!(
            builder.build().error_count(),
            general.len() + field_messages.len()
        );
    }

    #[test]
    fn rejected_selector_leaves_builder_unchanged(
        selector in "[a-z]{1,6}\\.[a-z_]{1,8}\\(\\)",
        messages in arbitrary_messages(),
    ) {
        let mut builder = ValidationErrorsBuilder::new();
        for message in &messages {
            builder.error(message.as_str());
        }
        let before = builder.build();

        let result = builder.field_error(&selector, "dropped");
        prop_assert!(result.is_err());
        prop_assert_eq!(builder.build(), before);
    }

    #[test]
    fn copying_twice_duplicates_every_message(map in arbitrary_error_map()) {
        let errors = ValidationErrors::with_errors(map);
        let mut state = ModelState::new();

        errors.add_to_model_state::<UnmappedModel>(&mut state);
        errors.add_to_model_state::<UnmappedModel>(&mut state);

        prop_assert_eq!(state.error_count(), errors.error_count() * 2);
    }

    #[test]
    fn mapped_key_lands_under_local_field_name(messages in arbitrary_messages()) {
        let mut builder = ValidationErrorsBuilder::new();
        for message in &messages {
            builder.field_error("domain_name", message.as_str()).unwrap();
        }

        let mut state = ModelState::new();
        builder.build().add_to_model_state::<MappedModel>(&mut state);

        prop_assert_eq!(state.errors("mapped_name"), messages.as_slice());
        prop_assert!(state.errors("domain_name").is_empty());
    }

    #[test]
    fn payload_mirrors_the_error_map(map in arbitrary_error_map()) {
        let errors = ValidationErrors::with_errors(map.clone());
        let payload = errors.to_payload();
        let object = payload.as_object().unwrap();

        prop_assert_eq!(object.len(), map.len());
        for ((key, messages), (payload_key, payload_messages)) in map.iter().zip(object.iter()) {
            prop_assert_eq!(payload_key, key);
            prop_assert_eq!(payload_messages, &serde_json::json!(messages));
        }
    }
}
