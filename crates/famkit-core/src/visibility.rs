//! Forcing visibility-like parameters on after association.
//!
//! A nested element whose visibility is driven by a freshly associated
//! family parameter would otherwise start hidden. After association every
//! matching instance parameter is set to its truthy value.

use famkit_model::{ElementParameter, ParameterValue, StorageType};
use serde::{Deserialize, Serialize};

/// Keywords matched by the default rule.
pub const DEFAULT_VISIBILITY_KEYWORDS: [&str; 3] = ["visibility", "show", "hidden"];

/// Decides which parameter names count as visibility switches.
#[derive(Debug, Clone)]
pub enum VisibilityRule {
    /// Case-insensitive substring match on any keyword.
    Keywords(Vec<String>),
    /// Caller-supplied predicate on the parameter name.
    Predicate(fn(&str) -> bool),
}

impl Default for VisibilityRule {
    fn default() -> Self {
        Self::keywords(DEFAULT_VISIBILITY_KEYWORDS)
    }
}

impl VisibilityRule {
    pub fn keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Keywords(
            keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().to_lowercase())
                .filter(|keyword| !keyword.is_empty())
                .collect(),
        )
    }

    /// A rule that matches nothing.
    pub fn none() -> Self {
        Self::Keywords(Vec::new())
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            VisibilityRule::Keywords(keywords) => {
                let lower = name.to_lowercase();
                keywords.iter().any(|keyword| lower.contains(keyword.as_str()))
            }
            VisibilityRule::Predicate(predicate) => predicate(name),
        }
    }
}

/// What to do with one associated visibility parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum VisibilityAction {
    /// Set the parameter to `value`; `message` is reported on success.
    Force {
        name: String,
        value: ParameterValue,
        message: String,
    },
    /// Leave the parameter alone.
    Leave { name: String, message: String },
}

impl VisibilityAction {
    pub fn name(&self) -> &str {
        match self {
            VisibilityAction::Force { name, .. } | VisibilityAction::Leave { name, .. } => name,
        }
    }
}

/// Plans the forced value for an associated visibility parameter.
///
/// Only instance parameters are touched. Integer storage gets `1`, string
/// storage gets `"True"`; anything else is left as is.
pub fn plan_visibility(parameter: &ElementParameter) -> VisibilityAction {
    let name = parameter.name.clone();
    if !parameter.is_instance() {
        return VisibilityAction::Leave {
            message: format!("Skipped '{name}' - not an instance parameter"),
            name,
        };
    }
    match parameter.storage {
        StorageType::Integer => VisibilityAction::Force {
            message: format!("Set '{name}' to 1 (visible)"),
            value: ParameterValue::Integer(1),
            name,
        },
        StorageType::String => VisibilityAction::Force {
            message: format!("Set '{name}' to 'True'"),
            value: ParameterValue::Text("True".to_string()),
            name,
        },
        StorageType::Double | StorageType::ElementId | StorageType::None => {
            VisibilityAction::Leave {
                message: format!("Couldn't set '{name}' - unknown storage type"),
                name,
            }
        }
    }
}
