//! Request and snapshot files as the CLI reads them.

use std::path::{Path, PathBuf};

use famkit_cli::files::{
    RequestFormat, load_config, load_family, load_request, parse_request, save_family,
};
use famkit_core::{FamkitConfig, MemoryFamily};
use famkit_model::{
    FlagValue, InputValue, NameChoice, NormalizationOptions, ParameterGroup, SpecType,
};
use famkit_normalization::build_parameter_requests;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("famkit-cli-{}-{name}", std::process::id()))
}

#[test]
fn request_format_follows_extension() {
    assert_eq!(
        RequestFormat::from_path(Path::new("request.JSON")).unwrap(),
        RequestFormat::Json
    );
    assert_eq!(
        RequestFormat::from_path(Path::new("dir/request.toml")).unwrap(),
        RequestFormat::Toml
    );
    let err = RequestFormat::from_path(Path::new("request.yaml")).unwrap_err();
    assert!(err.to_string().contains("request.yaml"));
}

#[test]
fn toml_request_accepts_scalars_and_lists() {
    let inputs = parse_request(
        r#"
        names = ["Width", "Height"]
        spec_types = "Length"
        groups = ["PG_DIMENSIONS", "General"]
        is_instance = [true, "false"]
        "#,
        RequestFormat::Toml,
    )
    .unwrap();

    assert_eq!(inputs.names.len(), 2);
    assert_eq!(
        inputs.spec_types,
        InputValue::Scalar(NameChoice::One("Length".to_string()))
    );
    assert_eq!(
        inputs.is_instance,
        InputValue::Sequence(vec![
            FlagValue::Bool(true),
            FlagValue::Text("false".to_string())
        ])
    );

    let requests = build_parameter_requests(inputs, &NormalizationOptions::default()).unwrap();
    assert_eq!(requests[0].spec, SpecType::Length);
    assert_eq!(requests[1].group, ParameterGroup::General);
    assert!(!requests[1].is_instance);
}

#[test]
fn json_request_with_nested_type_choice() {
    let inputs = parse_request(
        r#"{
            "names": "Area1",
            "spec_types": [["Area", "autodesk.spec.aec:area-2.0.0"]],
            "groups": "Dimensions",
            "is_instance": "True"
        }"#,
        RequestFormat::Json,
    )
    .unwrap();

    let requests = build_parameter_requests(inputs, &NormalizationOptions::default()).unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].spec, SpecType::Area);
    assert!(requests[0].is_instance);
}

#[test]
fn malformed_request_reports_the_file() {
    let path = scratch_path("broken.json");
    std::fs::write(&path, "{ \"names\": ").unwrap();
    let err = load_request(&path).unwrap_err();
    assert!(format!("{err:#}").contains("broken.json"));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn family_snapshot_round_trips_through_disk() {
    let path = scratch_path("family.json");
    let family = MemoryFamily::new("Cabinet").with_type("Standard");

    save_family(&family, &path).unwrap();
    insta::assert_snapshot!(std::fs::read_to_string(&path).unwrap(), @r#"
    {
      "title": "Cabinet",
      "is_family_document": true,
      "parameters": [],
      "types": [
        {
          "name": "Standard"
        }
      ],
      "elements": {}
    }
    "#);
    let loaded = load_family(&path).unwrap();

    assert_eq!(loaded, family);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_snapshot_is_an_error() {
    let err = load_family(&scratch_path("missing.json")).unwrap_err();
    assert!(err.to_string().contains("read family snapshot"));
}

#[test]
fn integer_flags_are_truthy_when_non_zero() {
    let inputs = parse_request(
        r#"{"names": ["A", "B"], "spec_types": "Text", "groups": "General", "is_instance": [1, 0]}"#,
        RequestFormat::Json,
    )
    .unwrap();

    let requests = build_parameter_requests(inputs, &NormalizationOptions::default()).unwrap();
    assert!(requests[0].is_instance);
    assert!(!requests[1].is_instance);
}

#[test]
fn config_is_optional_but_must_load_when_given() {
    assert_eq!(load_config(None).unwrap(), FamkitConfig::default());

    let err = load_config(Some(&scratch_path("missing.toml"))).unwrap_err();
    assert!(format!("{err:#}").contains("load config"));

    let path = scratch_path("bad-config.toml");
    std::fs::write(&path, "[resolution]\nmode = \"loose\"\n").unwrap();
    let err = load_config(Some(&path)).unwrap_err();
    assert!(format!("{err:#}").contains("bad-config.toml"));
    std::fs::remove_file(&path).unwrap();
}
