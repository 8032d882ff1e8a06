//! Property tests for broadcasting and resolution.

use famkit_model::{BroadcastPolicy, InputValue, ParameterGroup, SpecType};
use famkit_normalization::{broadcast, coerce_flag, resolve_parameter_group, resolve_spec_type};
use proptest::prelude::*;

proptest! {
    #[test]
    fn scalar_broadcast_yields_len_copies(value in "[A-Za-z]{0,8}", len in 0usize..32) {
        let out = broadcast(
            InputValue::Scalar(value.clone()),
            len,
            BroadcastPolicy::Truncate,
            "spec_types",
        ).unwrap();
        prop_assert_eq!(out.len(), len);
        prop_assert!(out.iter().all(|item| item == &value));
    }

    #[test]
    fn short_sequence_is_padded_with_last(
        items in prop::collection::vec(any::<u8>(), 1..8),
        extra in 0usize..16,
    ) {
        let len = items.len() + extra;
        let out = broadcast(
            InputValue::Sequence(items.clone()),
            len,
            BroadcastPolicy::Truncate,
            "groups",
        ).unwrap();
        prop_assert_eq!(out.len(), len);
        prop_assert_eq!(&out[..items.len()], &items[..]);
        let last = *items.last().unwrap();
        prop_assert!(out[items.len()..].iter().all(|item| *item == last));
    }

    #[test]
    fn long_sequence_is_truncated_to_prefix(
        items in prop::collection::vec(any::<u8>(), 0..16),
        len in 0usize..16,
    ) {
        prop_assume!(items.len() >= len);
        let out = broadcast(
            InputValue::Sequence(items.clone()),
            len,
            BroadcastPolicy::Truncate,
            "is_instance",
        ).unwrap();
        prop_assert_eq!(&out[..], &items[..len]);
    }

    #[test]
    fn resolvers_are_total(input in ".*") {
        let spec = resolve_spec_type(&input);
        let group = resolve_parameter_group(&input);
        prop_assert!(SpecType::ALL.contains(&spec.value));
        prop_assert!(ParameterGroup::ALL.contains(&group.value));
    }

    #[test]
    fn text_flags_only_true_for_true(text in "[A-Za-z ]{0,6}") {
        let flag = famkit_model::FlagValue::Text(text.clone());
        prop_assert_eq!(coerce_flag(&flag), text.eq_ignore_ascii_case("true"));
    }
}

#[test]
fn resolving_known_taxonomy_ids_is_idempotent() {
    for spec in SpecType::ALL {
        let first = resolve_spec_type(spec.taxonomy_id());
        let second = resolve_spec_type(spec.taxonomy_id());
        assert_eq!(first, second);
        assert_eq!(first.value, spec);
        assert_eq!(resolve_spec_type(spec.as_str()).value, spec);
    }
    for group in ParameterGroup::ALL {
        for id in group.taxonomy_ids() {
            assert_eq!(resolve_parameter_group(&id).value, group);
            assert_eq!(resolve_parameter_group(&id), resolve_parameter_group(&id));
        }
        assert_eq!(resolve_parameter_group(group.legacy_name()).value, group);
        assert_eq!(resolve_parameter_group(group.label()).value, group);
    }
}
