//! Data model shared by the famkit crates.
//!
//! - **enums**: specification, group, storage and scope tags
//! - **input**: scalar-or-sequence graph inputs
//! - **request**: normalized parameter requests and resolution provenance
//! - **element**: records returned by the host document
//! - **report**: per-item and batch outcomes
//! - **options**: normalization options

pub mod element;
pub mod enums;
pub mod error;
pub mod input;
pub mod options;
pub mod report;
pub mod request;

pub use element::{ElementId, ElementParameter, FamilyParameter, FamilyType, ParameterValue};
pub use enums::{ParameterGroup, ParameterScope, SpecType, StorageType};
pub use error::{FamilyError, HostError, NameKind, ParameterLookup, Result};
pub use input::{FlagValue, InputValue, NameChoice, ParameterInputs};
pub use options::{BroadcastPolicy, NormalizationOptions, ResolutionMode};
pub use report::{BatchReport, ItemReport, ItemStatus};
pub use request::{ParameterRequest, Resolved, ResolutionSource, ResolvedRequest};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes() {
        let request = ParameterRequest::new(
            "Width",
            SpecType::Length,
            ParameterGroup::Dimensions,
            true,
        );
        let json = serde_json::to_string(&request).expect("serialize request");
        let round: ParameterRequest = serde_json::from_str(&json).expect("deserialize request");
        assert_eq!(round, request);
        assert!(json.contains("\"dimensions\""));
    }

    #[test]
    fn not_in_family_editor_message() {
        let error = FamilyError::NotInFamilyEditor {
            document: "Project1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "document 'Project1' is not open in the Family Editor"
        );
    }

    #[test]
    fn lookup_failures_read_like_diagnostics() {
        let element = FamilyError::ParameterNotFound {
            name: "Vis".to_string(),
            lookup: ParameterLookup::Element,
        };
        let family = FamilyError::ParameterNotFound {
            name: "Vis_FP".to_string(),
            lookup: ParameterLookup::Family,
        };
        assert_eq!(element.to_string(), "Parameter 'Vis' not found in instance or type");
        assert_eq!(family.to_string(), "Family parameter 'Vis_FP' not found");
    }

    #[test]
    fn input_shape_message_names_the_input() {
        let error = FamilyError::InputShape {
            input: "spec_types",
            primary_len: 3,
            secondary_len: 0,
        };
        assert!(error.to_string().starts_with("input 'spec_types' has 0 element(s)"));
    }
}
