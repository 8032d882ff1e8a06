//! In-memory family document.
//!
//! Implements the host contract with the rules the real host enforces that
//! matter to the operations: mutations only inside a transaction, one
//! transaction at a time, unique names, compatible associations. Snapshots
//! round-trip through JSON so a family can be prepared as a fixture.

use std::collections::{BTreeMap, BTreeSet};

use famkit_model::{
    ElementId, ElementParameter, FamilyParameter, FamilyType, HostError, ParameterRequest,
    ParameterScope, ParameterValue, StorageType,
};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::host::{FamilyDocument, ParameterStore, TransactionHost};

/// Characters the host refuses in parameter and type names.
const PROHIBITED_NAME_CHARS: &[char] = &['\\', ':', '{', '}', '[', ']', '|', ';', '<', '>', '?', '`', '~'];

/// Failures a fixture can ask the in-memory host to produce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailurePlan {
    /// Type names `new_type` refuses.
    #[serde(default)]
    pub reject_types: BTreeSet<String>,
    /// Parameter names whose creation fails fatally.
    #[serde(default)]
    pub fatal_parameters: BTreeSet<String>,
    /// Make every commit fail.
    #[serde(default)]
    pub fail_commit: bool,
}

/// How a transaction ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionOutcome {
    Committed,
    RolledBack,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub name: String,
    pub outcome: TransactionOutcome,
}

#[derive(Debug, Clone, PartialEq)]
struct Checkpoint {
    name: String,
    parameters: Vec<FamilyParameter>,
    types: Vec<FamilyType>,
    elements: BTreeMap<ElementId, Vec<ElementParameter>>,
}

/// A family document held entirely in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryFamily {
    pub title: String,
    #[serde(default = "default_true")]
    pub is_family_document: bool,
    #[serde(default)]
    pub parameters: Vec<FamilyParameter>,
    #[serde(default)]
    pub types: Vec<FamilyType>,
    /// Placed nested elements and their instance and type parameters.
    #[serde(default)]
    pub elements: BTreeMap<ElementId, Vec<ElementParameter>>,
    #[serde(default, skip_serializing_if = "is_default")]
    pub failures: FailurePlan,
    #[serde(skip)]
    open: Option<Checkpoint>,
    #[serde(skip)]
    history: Vec<TransactionRecord>,
}

fn default_true() -> bool {
    true
}

fn is_default(plan: &FailurePlan) -> bool {
    plan == &FailurePlan::default()
}

fn validate_name(kind: &str, name: &str) -> Result<(), HostError> {
    if name.trim().is_empty() {
        return Err(HostError::Rejected(format!("{kind} name cannot be empty")));
    }
    if let Some(ch) = name.chars().find(|ch| PROHIBITED_NAME_CHARS.contains(ch)) {
        return Err(HostError::Rejected(format!(
            "{kind} name '{name}' contains prohibited character '{ch}'"
        )));
    }
    Ok(())
}

fn value_fits(storage: StorageType, value: &ParameterValue) -> bool {
    matches!(
        (storage, value),
        (StorageType::Integer, ParameterValue::Integer(_))
            | (StorageType::Double, ParameterValue::Double(_))
            | (StorageType::String, ParameterValue::Text(_))
            | (_, ParameterValue::Empty)
    )
}

impl MemoryFamily {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_family_document: true,
            parameters: Vec::new(),
            types: Vec::new(),
            elements: BTreeMap::new(),
            failures: FailurePlan::default(),
            open: None,
            history: Vec::new(),
        }
    }

    /// A project document; family operations refuse to run on it.
    pub fn project(title: impl Into<String>) -> Self {
        Self {
            is_family_document: false,
            ..Self::new(title)
        }
    }

    pub fn with_parameter(mut self, parameter: FamilyParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_type(mut self, name: impl Into<String>) -> Self {
        self.types.push(FamilyType { name: name.into() });
        self
    }

    pub fn with_element(mut self, id: ElementId, parameters: Vec<ElementParameter>) -> Self {
        self.elements.insert(id, parameters);
        self
    }

    pub fn with_failures(mut self, failures: FailurePlan) -> Self {
        self.failures = failures;
        self
    }

    /// Transactions that ended on this document, oldest first.
    pub fn history(&self) -> &[TransactionRecord] {
        &self.history
    }

    pub fn in_transaction(&self) -> bool {
        self.open.is_some()
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn require_transaction(&self, action: &str) -> Result<(), HostError> {
        if self.open.is_none() {
            return Err(HostError::Fatal(format!(
                "cannot {action} outside of a transaction"
            )));
        }
        Ok(())
    }

    fn element_mut(&mut self, element: &ElementId) -> Result<&mut Vec<ElementParameter>, HostError> {
        self.elements
            .get_mut(element)
            .ok_or_else(|| HostError::Rejected(format!("element {element} not found")))
    }

    fn end_transaction(&mut self, outcome: TransactionOutcome) -> Result<(), HostError> {
        let checkpoint = self
            .open
            .take()
            .ok_or_else(|| HostError::Fatal("no open transaction".to_string()))?;
        if outcome == TransactionOutcome::RolledBack {
            self.parameters = checkpoint.parameters;
            self.types = checkpoint.types;
            self.elements = checkpoint.elements;
        }
        trace!(transaction = %checkpoint.name, ?outcome, "transaction ended");
        self.history.push(TransactionRecord {
            name: checkpoint.name,
            outcome,
        });
        Ok(())
    }
}

impl FamilyDocument for MemoryFamily {
    fn title(&self) -> &str {
        &self.title
    }

    fn is_family_document(&self) -> bool {
        self.is_family_document
    }
}

impl ParameterStore for MemoryFamily {
    fn family_parameter(&self, name: &str) -> Option<FamilyParameter> {
        self.parameters.iter().find(|p| p.name == name).cloned()
    }

    fn family_parameters(&self) -> Vec<FamilyParameter> {
        self.parameters.clone()
    }

    fn add_parameter(&mut self, request: &ParameterRequest) -> Result<FamilyParameter, HostError> {
        self.require_transaction("add a parameter")?;
        if self.failures.fatal_parameters.contains(&request.name) {
            return Err(HostError::Fatal(format!(
                "family manager failed while adding '{}'",
                request.name
            )));
        }
        validate_name("parameter", &request.name)?;
        if self.family_parameter(&request.name).is_some() {
            return Err(HostError::Rejected(format!(
                "parameter '{}' already exists",
                request.name
            )));
        }
        let parameter = FamilyParameter {
            name: request.name.clone(),
            spec: request.spec,
            group: request.group,
            is_instance: request.is_instance,
        };
        self.parameters.push(parameter.clone());
        Ok(parameter)
    }

    fn element_parameters(&self, element: &ElementId) -> Result<Vec<ElementParameter>, HostError> {
        let parameters = self
            .elements
            .get(element)
            .ok_or_else(|| HostError::Rejected(format!("element {element} not found")))?;
        let (mut ordered, types): (Vec<_>, Vec<_>) = parameters
            .iter()
            .cloned()
            .partition(ElementParameter::is_instance);
        ordered.extend(types);
        Ok(ordered)
    }

    fn associate(
        &mut self,
        element: &ElementId,
        element_parameter: &ElementParameter,
        family_parameter: &FamilyParameter,
    ) -> Result<(), HostError> {
        self.require_transaction("associate parameters")?;
        if element_parameter.spec != family_parameter.spec {
            return Err(HostError::Rejected(format!(
                "specification mismatch: '{}' is {} but '{}' is {}",
                element_parameter.name,
                element_parameter.spec,
                family_parameter.name,
                family_parameter.spec
            )));
        }
        if element_parameter.scope == ParameterScope::Type && family_parameter.is_instance {
            return Err(HostError::Rejected(format!(
                "type parameter '{}' cannot be driven by instance parameter '{}'",
                element_parameter.name, family_parameter.name
            )));
        }
        let parameters = self.element_mut(element)?;
        let target = parameters
            .iter_mut()
            .find(|p| p.name == element_parameter.name && p.scope == element_parameter.scope)
            .ok_or_else(|| {
                HostError::Rejected(format!(
                    "parameter '{}' does not belong to element {element}",
                    element_parameter.name
                ))
            })?;
        target.associated_with = Some(family_parameter.name.clone());
        Ok(())
    }

    fn set_element_parameter(
        &mut self,
        element: &ElementId,
        name: &str,
        value: ParameterValue,
    ) -> Result<(), HostError> {
        self.require_transaction("set a parameter value")?;
        let parameters = self.element_mut(element)?;
        let target = parameters
            .iter_mut()
            .find(|p| p.name == name && p.is_instance())
            .ok_or_else(|| HostError::Rejected(format!("instance parameter '{name}' not found")))?;
        if !value_fits(target.storage, &value) {
            return Err(HostError::Rejected(format!(
                "value {value} does not fit {:?} storage",
                target.storage
            )));
        }
        target.value = value;
        Ok(())
    }

    fn new_type(&mut self, name: &str) -> Result<FamilyType, HostError> {
        self.require_transaction("create a type")?;
        if self.failures.reject_types.contains(name) {
            return Err(HostError::Rejected(format!("type '{name}' was refused")));
        }
        validate_name("type", name)?;
        if self.types.iter().any(|t| t.name == name) {
            return Err(HostError::Rejected(format!("type '{name}' already exists")));
        }
        let family_type = FamilyType {
            name: name.to_string(),
        };
        self.types.push(family_type.clone());
        Ok(family_type)
    }
}

impl TransactionHost for MemoryFamily {
    fn start_transaction(&mut self, name: &str) -> Result<(), HostError> {
        if let Some(open) = &self.open {
            return Err(HostError::Fatal(format!(
                "transaction '{}' is already open",
                open.name
            )));
        }
        self.open = Some(Checkpoint {
            name: name.to_string(),
            parameters: self.parameters.clone(),
            types: self.types.clone(),
            elements: self.elements.clone(),
        });
        Ok(())
    }

    fn commit_transaction(&mut self) -> Result<(), HostError> {
        if self.failures.fail_commit {
            return Err(HostError::Fatal("commit failed".to_string()));
        }
        self.end_transaction(TransactionOutcome::Committed)
    }

    fn rollback_transaction(&mut self) -> Result<(), HostError> {
        self.end_transaction(TransactionOutcome::RolledBack)
    }
}

#[cfg(test)]
mod tests {
    use famkit_model::{ParameterGroup, SpecType};

    use super::*;

    fn request(name: &str) -> ParameterRequest {
        ParameterRequest::new(name, SpecType::Length, ParameterGroup::Dimensions, true)
    }

    #[test]
    fn mutations_require_a_transaction() {
        let mut family = MemoryFamily::new("Door");
        let err = family.add_parameter(&request("Width")).unwrap_err();
        assert!(err.is_fatal());
        assert!(family.parameters.is_empty());
    }

    #[test]
    fn rollback_restores_checkpoint() {
        let mut family = MemoryFamily::new("Door").with_type("Standard");
        family.start_transaction("edit").unwrap();
        family.add_parameter(&request("Width")).unwrap();
        family.new_type("Wide").unwrap();
        family.rollback_transaction().unwrap();

        assert!(family.parameters.is_empty());
        assert_eq!(family.types, vec![FamilyType { name: "Standard".into() }]);
        assert_eq!(family.history()[0].outcome, TransactionOutcome::RolledBack);
        assert!(!family.in_transaction());
    }

    #[test]
    fn rejects_bad_and_duplicate_names() {
        let mut family = MemoryFamily::new("Door");
        family.start_transaction("edit").unwrap();
        assert!(matches!(
            family.add_parameter(&request("Width:1")),
            Err(HostError::Rejected(_))
        ));
        family.add_parameter(&request("Width")).unwrap();
        assert!(matches!(
            family.add_parameter(&request("Width")),
            Err(HostError::Rejected(_))
        ));
        assert!(matches!(family.new_type(" "), Err(HostError::Rejected(_))));
        family.commit_transaction().unwrap();
    }

    #[test]
    fn nested_transactions_are_refused() {
        let mut family = MemoryFamily::new("Door");
        family.start_transaction("outer").unwrap();
        assert!(family.start_transaction("inner").unwrap_err().is_fatal());
    }

    #[test]
    fn element_parameters_list_instance_before_type() {
        let family = MemoryFamily::new("Cabinet").with_element(
            ElementId::new("42"),
            vec![
                ElementParameter {
                    name: "Width".into(),
                    spec: SpecType::Length,
                    storage: StorageType::Double,
                    scope: ParameterScope::Type,
                    value: ParameterValue::Double(1.0),
                    associated_with: None,
                },
                ElementParameter {
                    name: "Visibility".into(),
                    spec: SpecType::YesNo,
                    storage: StorageType::Integer,
                    scope: ParameterScope::Instance,
                    value: ParameterValue::Integer(0),
                    associated_with: None,
                },
            ],
        );
        let names: Vec<String> = family
            .element_parameters(&ElementId::new("42"))
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Visibility", "Width"]);
        assert!(family.element_parameters(&ElementId::new("7")).is_err());
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let family = MemoryFamily::new("Door").with_type("Standard");
        let json = family.to_json().unwrap();
        assert!(!json.contains("failures"));
        let round = MemoryFamily::from_json(&json).unwrap();
        assert_eq!(round, family);
    }
}
