//! Records the host contract hands back: family parameters, family types and
//! parameters of placed nested elements.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::{ParameterGroup, ParameterScope, SpecType, StorageType};

/// Identifier of a placed element in the host document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A parameter defined on the family itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyParameter {
    pub name: String,
    pub spec: SpecType,
    pub group: ParameterGroup,
    pub is_instance: bool,
}

/// A named preset of parameter values in the family's type table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyType {
    pub name: String,
}

/// Stored value of an element parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ParameterValue {
    Integer(i64),
    Double(f64),
    Text(String),
    Empty,
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Integer(value) => write!(f, "{value}"),
            ParameterValue::Double(value) => write!(f, "{value}"),
            ParameterValue::Text(value) => write!(f, "'{value}'"),
            ParameterValue::Empty => f.write_str("<empty>"),
        }
    }
}

/// A parameter found on a placed nested element or on its type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementParameter {
    pub name: String,
    pub spec: SpecType,
    pub storage: StorageType,
    pub scope: ParameterScope,
    #[serde(default = "empty_value")]
    pub value: ParameterValue,
    /// Name of the family parameter this one is driven by, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_with: Option<String>,
}

fn empty_value() -> ParameterValue {
    ParameterValue::Empty
}

impl ElementParameter {
    pub fn is_instance(&self) -> bool {
        self.scope == ParameterScope::Instance
    }
}
