//! Loosely-shaped values coming from an upstream graph node.
//!
//! A graph input may be a single value or a list of values. The shape is
//! captured once here and normalized to a sequence by the broadcaster.

use serde::{Deserialize, Serialize};

/// A scalar or an ordered sequence.
///
/// Deserializes untagged, so `"Length"` and `["Length", "Area"]` both work.
/// `Sequence` is tried first: a JSON array is always a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue<T> {
    Sequence(Vec<T>),
    Scalar(T),
}

impl<T> InputValue<T> {
    pub fn is_scalar(&self) -> bool {
        matches!(self, InputValue::Scalar(_))
    }

    /// Number of elements supplied (1 for a scalar).
    pub fn len(&self) -> usize {
        match self {
            InputValue::Sequence(items) => items.len(),
            InputValue::Scalar(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts into a plain sequence without any length alignment.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            InputValue::Sequence(items) => items,
            InputValue::Scalar(value) => vec![value],
        }
    }
}

impl<T> From<Vec<T>> for InputValue<T> {
    fn from(items: Vec<T>) -> Self {
        InputValue::Sequence(items)
    }
}

impl From<&str> for InputValue<String> {
    fn from(value: &str) -> Self {
        InputValue::Scalar(value.to_string())
    }
}

impl From<Vec<&str>> for InputValue<String> {
    fn from(items: Vec<&str>) -> Self {
        InputValue::Sequence(items.into_iter().map(str::to_string).collect())
    }
}

/// One element of a type or group input.
///
/// Graph nodes sometimes hand over a nested list per element (for example
/// every identifier a picker exposes). The taxonomy-looking entry wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameChoice {
    One(String),
    Many(Vec<String>),
}

impl NameChoice {
    /// Picks the name to resolve: the entry itself, the first entry of a
    /// nested list containing a `:`, else the first entry, else `""`.
    pub fn pick(&self) -> &str {
        match self {
            NameChoice::One(name) => name,
            NameChoice::Many(names) => names
                .iter()
                .find(|name| name.contains(':'))
                .or_else(|| names.first())
                .map_or("", String::as_str),
        }
    }
}

impl From<&str> for NameChoice {
    fn from(value: &str) -> Self {
        NameChoice::One(value.to_string())
    }
}

impl From<String> for NameChoice {
    fn from(value: String) -> Self {
        NameChoice::One(value)
    }
}

impl From<&str> for InputValue<NameChoice> {
    fn from(value: &str) -> Self {
        InputValue::Scalar(NameChoice::from(value))
    }
}

impl From<Vec<&str>> for InputValue<NameChoice> {
    fn from(items: Vec<&str>) -> Self {
        InputValue::Sequence(items.into_iter().map(NameChoice::from).collect())
    }
}

/// An instance/type flag as supplied by the graph: a boolean, an integer
/// or text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    /// Truthy when non-zero.
    Integer(i64),
    Text(String),
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        FlagValue::Bool(value)
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        FlagValue::Text(value.to_string())
    }
}

impl From<bool> for InputValue<FlagValue> {
    fn from(value: bool) -> Self {
        InputValue::Scalar(FlagValue::Bool(value))
    }
}

impl From<&str> for InputValue<FlagValue> {
    fn from(value: &str) -> Self {
        InputValue::Scalar(FlagValue::from(value))
    }
}

impl From<Vec<bool>> for InputValue<FlagValue> {
    fn from(items: Vec<bool>) -> Self {
        InputValue::Sequence(items.into_iter().map(FlagValue::Bool).collect())
    }
}

/// Raw inputs of the add-parameters step, one field per graph port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterInputs {
    pub names: InputValue<String>,
    pub spec_types: InputValue<NameChoice>,
    pub groups: InputValue<NameChoice>,
    pub is_instance: InputValue<FlagValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_input_shapes() {
        let scalar: InputValue<String> = serde_json::from_str(r#""Length""#).unwrap();
        assert_eq!(scalar, InputValue::Scalar("Length".to_string()));

        let seq: InputValue<String> = serde_json::from_str(r#"["A", "B"]"#).unwrap();
        assert_eq!(seq.len(), 2);
        assert!(!seq.is_scalar());
    }

    #[test]
    fn test_nested_name_choice() {
        let input: InputValue<NameChoice> =
            serde_json::from_str(r#"[["Area", "autodesk.spec.aec:area-2.0.0"], "Text"]"#).unwrap();
        let items = input.into_vec();
        assert_eq!(items[0].pick(), "autodesk.spec.aec:area-2.0.0");
        assert_eq!(items[1].pick(), "Text");
        assert_eq!(NameChoice::Many(vec![]).pick(), "");
        assert_eq!(
            NameChoice::Many(vec!["Area".into(), "Volume".into()]).pick(),
            "Area"
        );
    }

    #[test]
    fn test_flag_values_deserialize() {
        let flags: InputValue<FlagValue> =
            serde_json::from_str(r#"[true, "False", "TRUE"]"#).unwrap();
        assert_eq!(
            flags.into_vec(),
            vec![
                FlagValue::Bool(true),
                FlagValue::Text("False".into()),
                FlagValue::Text("TRUE".into())
            ]
        );
    }

    #[test]
    fn test_integer_flags_deserialize() {
        let inputs: ParameterInputs = serde_json::from_str(
            r#"{"names": ["A", "B"], "spec_types": "Text", "groups": "General", "is_instance": [1, 0]}"#,
        )
        .unwrap();
        assert_eq!(
            inputs.is_instance,
            InputValue::Sequence(vec![FlagValue::Integer(1), FlagValue::Integer(0)])
        );
    }

    #[test]
    fn test_text_flag_converts_to_scalar_input() {
        let flag: InputValue<FlagValue> = "TRUE".into();
        assert_eq!(flag, InputValue::Scalar(FlagValue::Text("TRUE".to_string())));
    }
}
