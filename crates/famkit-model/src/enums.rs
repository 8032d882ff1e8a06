//! Closed tag sets for family parameter metadata.
//!
//! The host identifies data kinds and UI groups with taxonomy identifiers
//! (`authority.namespace:kind-MAJOR.MINOR.PATCH`). These enums are the
//! fixed subset the toolkit knows how to request.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Data specification of a family parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecType {
    /// Free text.
    Text,
    /// Whole number.
    Integer,
    /// Unitless decimal number.
    Number,
    /// Length; the fallback when a name cannot be resolved.
    Length,
    Area,
    Volume,
    Angle,
    /// Boolean checkbox.
    #[serde(rename = "yesno")]
    YesNo,
}

impl SpecType {
    /// All known specification types, in display order.
    pub const ALL: [SpecType; 8] = [
        SpecType::Text,
        SpecType::Integer,
        SpecType::Number,
        SpecType::Length,
        SpecType::Area,
        SpecType::Volume,
        SpecType::Angle,
        SpecType::YesNo,
    ];

    /// Human-readable name as accepted by the type resolver.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecType::Text => "Text",
            SpecType::Integer => "Integer",
            SpecType::Number => "Number",
            SpecType::Length => "Length",
            SpecType::Area => "Area",
            SpecType::Volume => "Volume",
            SpecType::Angle => "Angle",
            SpecType::YesNo => "YesNo",
        }
    }

    /// Canonical taxonomy identifier.
    pub fn taxonomy_id(&self) -> &'static str {
        match self {
            SpecType::Text => "autodesk.spec:text-2.0.0",
            SpecType::Integer => "autodesk.spec:integer-2.0.0",
            SpecType::Number => "autodesk.spec:number-2.0.0",
            SpecType::Length => "autodesk.spec.aec:length-2.0.0",
            SpecType::Area => "autodesk.spec.aec:area-2.0.0",
            SpecType::Volume => "autodesk.spec.aec:volume-2.0.0",
            SpecType::Angle => "autodesk.spec.aec:angle-2.0.0",
            SpecType::YesNo => "autodesk.spec:yesno-2.0.0",
        }
    }

    /// Storage the host uses for values of this specification.
    pub fn storage(&self) -> StorageType {
        match self {
            SpecType::Text => StorageType::String,
            SpecType::Integer | SpecType::YesNo => StorageType::Integer,
            SpecType::Number
            | SpecType::Length
            | SpecType::Area
            | SpecType::Volume
            | SpecType::Angle => StorageType::Double,
        }
    }
}

impl fmt::Display for SpecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SpecType {
    type Err = String;

    /// Strict parse of a human-readable name or canonical taxonomy id.
    /// Lenient resolution with a fallback lives in `famkit-normalization`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SpecType::ALL
            .into_iter()
            .find(|spec| spec.as_str() == trimmed || spec.taxonomy_id() == trimmed)
            .ok_or_else(|| format!("Unknown specification type: {s}"))
    }
}

/// UI group a family parameter is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterGroup {
    General,
    IdentityData,
    Geometry,
    /// The fallback when a group name cannot be resolved.
    Dimensions,
}

impl ParameterGroup {
    pub const ALL: [ParameterGroup; 4] = [
        ParameterGroup::General,
        ParameterGroup::IdentityData,
        ParameterGroup::Geometry,
        ParameterGroup::Dimensions,
    ];

    /// Label shown in the host UI.
    pub fn label(&self) -> &'static str {
        match self {
            ParameterGroup::General => "General",
            ParameterGroup::IdentityData => "Identity Data",
            ParameterGroup::Geometry => "Geometry",
            ParameterGroup::Dimensions => "Dimensions",
        }
    }

    /// Legacy enumeration-style name (`PG_*`).
    pub fn legacy_name(&self) -> &'static str {
        match self {
            ParameterGroup::General => "PG_GENERAL",
            ParameterGroup::IdentityData => "PG_IDENTITY_DATA",
            ParameterGroup::Geometry => "PG_GEOMETRY",
            ParameterGroup::Dimensions => "PG_DIMENSIONS",
        }
    }

    fn taxonomy_kind(&self) -> &'static str {
        match self {
            ParameterGroup::General => "general",
            ParameterGroup::IdentityData => "identity_data",
            ParameterGroup::Geometry => "geometry",
            ParameterGroup::Dimensions => "dimensions",
        }
    }

    /// Canonical taxonomy identifier.
    pub fn taxonomy_id(&self) -> String {
        format!("autodesk.parameter.group:{}-2.0.0", self.taxonomy_kind())
    }

    /// Every taxonomy identifier the host has used for this group.
    pub fn taxonomy_ids(&self) -> [String; 2] {
        let kind = self.taxonomy_kind();
        [
            format!("autodesk.parameter.group:{kind}-2.0.0"),
            format!("autodesk.parameter.group:{kind}-1.0.0"),
        ]
    }
}

impl fmt::Display for ParameterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ParameterGroup {
    type Err = String;

    /// Strict parse of a label, legacy name, or taxonomy id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ParameterGroup::ALL
            .into_iter()
            .find(|group| {
                group.label() == trimmed
                    || group.legacy_name() == trimmed
                    || group.taxonomy_ids().iter().any(|id| id == trimmed)
            })
            .ok_or_else(|| format!("Unknown parameter group: {s}"))
    }
}

/// How the host stores a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    Integer,
    Double,
    String,
    ElementId,
    None,
}

/// Whether a parameter varies per placed instance or per type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterScope {
    Instance,
    Type,
}

impl ParameterScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterScope::Instance => "instance",
            ParameterScope::Type => "type",
        }
    }
}

impl fmt::Display for ParameterScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_type_from_str() {
        assert_eq!("Area".parse::<SpecType>().unwrap(), SpecType::Area);
        assert_eq!(
            " autodesk.spec:yesno-2.0.0 ".parse::<SpecType>().unwrap(),
            SpecType::YesNo
        );
        assert!("area".parse::<SpecType>().is_err());
    }

    #[test]
    fn test_parameter_group_from_str() {
        assert_eq!(
            "PG_IDENTITY_DATA".parse::<ParameterGroup>().unwrap(),
            ParameterGroup::IdentityData
        );
        assert_eq!(
            "autodesk.parameter.group:geometry-1.0.0"
                .parse::<ParameterGroup>()
                .unwrap(),
            ParameterGroup::Geometry
        );
        assert!("Graphics".parse::<ParameterGroup>().is_err());
    }

    #[test]
    fn test_spec_storage() {
        assert_eq!(SpecType::YesNo.storage(), StorageType::Integer);
        assert_eq!(SpecType::Text.storage(), StorageType::String);
        assert_eq!(SpecType::Angle.storage(), StorageType::Double);
    }

    #[test]
    fn test_group_taxonomy_ids() {
        assert_eq!(
            ParameterGroup::IdentityData.taxonomy_id(),
            "autodesk.parameter.group:identity_data-2.0.0"
        );
        assert_eq!(
            ParameterGroup::Dimensions.taxonomy_ids()[1],
            "autodesk.parameter.group:dimensions-1.0.0"
        );
    }
}
