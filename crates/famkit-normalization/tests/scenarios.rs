//! Request-building scenarios as a graph would drive them.

use famkit_model::{
    InputValue, NormalizationOptions, ParameterGroup, ParameterInputs, ParameterRequest, SpecType,
};
use famkit_normalization::{build_parameter_requests, resolve_spec_type};

fn lenient() -> NormalizationOptions {
    NormalizationOptions::default()
}

#[test]
fn scalar_type_group_and_flag_apply_to_every_name() {
    let inputs = ParameterInputs {
        names: vec!["Length1", "Length2", "Length3"].into(),
        spec_types: "Length".into(),
        groups: "PG_DIMENSIONS".into(),
        is_instance: true.into(),
    };

    let requests = build_parameter_requests(inputs, &lenient()).unwrap();

    let expected: Vec<ParameterRequest> = ["Length1", "Length2", "Length3"]
        .into_iter()
        .map(|name| {
            ParameterRequest::new(name, SpecType::Length, ParameterGroup::Dimensions, true)
        })
        .collect();
    assert_eq!(requests, expected);
}

#[test]
fn per_element_types_and_flags() {
    let inputs = ParameterInputs {
        names: vec!["A", "B"].into(),
        spec_types: vec!["Text", "Integer"].into(),
        groups: "General".into(),
        is_instance: vec![true, false].into(),
    };

    let requests = build_parameter_requests(inputs, &lenient()).unwrap();

    assert_eq!(
        requests,
        vec![
            ParameterRequest::new("A", SpecType::Text, ParameterGroup::General, true),
            ParameterRequest::new("B", SpecType::Integer, ParameterGroup::General, false),
        ]
    );
}

#[test]
fn taxonomy_identifier_resolves_to_area() {
    assert_eq!(
        resolve_spec_type("autodesk.spec.aec:area-2.0.0").value,
        SpecType::Area
    );
}

#[test]
fn unrecognized_type_falls_back_to_length() {
    let resolved = resolve_spec_type("FooBar");
    assert_eq!(resolved.value, SpecType::Length);
    assert!(resolved.was_defaulted());
}

#[test]
fn text_flags_and_short_lists_from_json() {
    let inputs: ParameterInputs = serde_json::from_str(
        r#"{
            "names": ["Width", "Height", "Mark"],
            "spec_types": ["Length", ["Angle", "autodesk.spec.aec:angle-2.0.0"], "Text"],
            "groups": ["PG_GEOMETRY", "Identity Data"],
            "is_instance": ["TRUE", "banana"]
        }"#,
    )
    .unwrap();

    let requests = build_parameter_requests(inputs, &lenient()).unwrap();

    assert_eq!(
        requests,
        vec![
            ParameterRequest::new("Width", SpecType::Length, ParameterGroup::Geometry, true),
            ParameterRequest::new("Height", SpecType::Angle, ParameterGroup::IdentityData, false),
            ParameterRequest::new("Mark", SpecType::Text, ParameterGroup::IdentityData, false),
        ]
    );
}

#[test]
fn no_names_means_no_requests() {
    let inputs = ParameterInputs {
        names: InputValue::Sequence(Vec::new()),
        spec_types: InputValue::Sequence(Vec::new()),
        groups: "General".into(),
        is_instance: true.into(),
    };
    assert!(build_parameter_requests(inputs, &lenient()).unwrap().is_empty());
}
