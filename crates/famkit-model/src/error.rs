use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by the host document.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum HostError {
    /// The host refused this one operation; the batch can continue.
    #[error("{0}")]
    Rejected(String),
    /// The host is in a state where nothing else in the batch should run.
    #[error("fatal host error: {0}")]
    Fatal(String),
}

impl HostError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, HostError::Fatal(_))
    }
}

/// Which tag set an unresolved name was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Spec,
    Group,
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameKind::Spec => f.write_str("specification type"),
            NameKind::Group => f.write_str("parameter group"),
        }
    }
}

/// Where a named parameter was looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLookup {
    /// Instance and type parameters of a placed nested element.
    Element,
    /// Parameters defined on the family being edited.
    Family,
}

fn not_found_message(name: &str, lookup: &ParameterLookup) -> String {
    match lookup {
        ParameterLookup::Element => format!("Parameter '{name}' not found in instance or type"),
        ParameterLookup::Family => format!("Family parameter '{name}' not found"),
    }
}

#[derive(Debug, Error)]
pub enum FamilyError {
    #[error(
        "input '{input}' has {secondary_len} element(s) but {primary_len} parameter name(s) were given"
    )]
    InputShape {
        input: &'static str,
        primary_len: usize,
        secondary_len: usize,
    },

    #[error("unrecognized {kind} '{input}'")]
    UnresolvedName { kind: NameKind, input: String },

    #[error("document '{document}' is not open in the Family Editor")]
    NotInFamilyEditor { document: String },

    #[error("{}", not_found_message(.name, .lookup))]
    ParameterNotFound {
        name: String,
        lookup: ParameterLookup,
    },

    #[error("Error associating '{element_parameter}' to '{family_parameter}': {reason}")]
    AssociationIncompatible {
        element_parameter: String,
        family_parameter: String,
        reason: String,
    },

    #[error("transaction '{transaction}' rolled back: {message}")]
    TransactionFailure {
        transaction: String,
        message: String,
    },

    #[error(transparent)]
    Host(#[from] HostError),
}

pub type Result<T> = std::result::Result<T, FamilyError>;
