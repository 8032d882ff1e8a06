//! Associate parameters of a placed nested element with family parameters.

use std::collections::HashMap;

use famkit_model::{
    BatchReport, ElementId, ElementParameter, FamilyError, HostError, InputValue, ItemReport,
    ParameterLookup, Result,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};

use super::{abort, begin, ensure_family_document, finish};
use crate::host::FamilyHost;
use crate::visibility::{VisibilityAction, VisibilityRule, plan_visibility};

pub const ASSOCIATE_TRANSACTION: &str = "Associate Nested Family Parameters";

/// Options for [`associate_parameters`].
#[derive(Debug, Clone)]
pub struct AssociationOptions {
    /// Which associated parameters count as visibility switches.
    pub visibility: VisibilityRule,
    /// Force matching instance parameters to their truthy value.
    pub force_visibility: bool,
}

impl Default for AssociationOptions {
    fn default() -> Self {
        Self {
            visibility: VisibilityRule::default(),
            force_visibility: true,
        }
    }
}

impl AssociationOptions {
    pub fn with_visibility(mut self, rule: VisibilityRule) -> Self {
        self.visibility = rule;
        self
    }

    pub fn with_force_visibility(mut self, enable: bool) -> Self {
        self.force_visibility = enable;
        self
    }
}

/// One successful association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Association {
    pub element_parameter: String,
    pub family_parameter: String,
}

/// Outcome of [`associate_parameters`] with the lookup context a graph
/// author needs to debug a failed pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationReport {
    pub element: ElementId,
    pub batch: BatchReport<Association>,
    pub available_family_parameters: Vec<String>,
    pub requested_element_parameters: Vec<String>,
    pub requested_family_parameters: Vec<String>,
    pub visibility_parameters_found: Vec<String>,
    pub visibility_settings: Vec<String>,
}

impl AssociationReport {
    pub fn success_count(&self) -> usize {
        self.batch.applied_count()
    }
}

/// Element parameters by name; type parameters replace instance parameters
/// of the same name.
fn element_lookup(parameters: Vec<ElementParameter>) -> HashMap<String, ElementParameter> {
    let (instance, types): (Vec<_>, Vec<_>) = parameters
        .into_iter()
        .partition(ElementParameter::is_instance);
    instance
        .into_iter()
        .chain(types)
        .map(|parameter| (parameter.name.clone(), parameter))
        .collect()
}

/// Associates `element_names[i]` with `family_names[i]` on `element`.
///
/// Pairs beyond the shorter list are ignored. Missing parameters and host
/// refusals are recorded per pair. Associated parameters matching the
/// visibility rule are then forced visible in the same transaction.
pub fn associate_parameters<H: FamilyHost + ?Sized>(
    doc: &mut H,
    element: &ElementId,
    element_names: InputValue<String>,
    family_names: InputValue<String>,
    options: &AssociationOptions,
) -> Result<AssociationReport> {
    ensure_family_document(&*doc)?;
    let requested_element_parameters = element_names.into_vec();
    let requested_family_parameters = family_names.into_vec();
    let span = info_span!(
        "associate_parameters",
        document = doc.title(),
        %element,
        requested = requested_element_parameters
            .len()
            .min(requested_family_parameters.len())
    );
    let _guard = span.enter();

    let element_parameters = element_lookup(doc.element_parameters(element)?);
    let family_parameters = doc.family_parameters();
    let available_family_parameters: Vec<String> =
        family_parameters.iter().map(|p| p.name.clone()).collect();

    let mut batch = BatchReport::new(ASSOCIATE_TRANSACTION);
    let mut associated: Vec<&ElementParameter> = Vec::new();
    let mut tx = begin(doc, ASSOCIATE_TRANSACTION)?;

    for (element_name, family_name) in requested_element_parameters
        .iter()
        .zip(&requested_family_parameters)
    {
        let Some(element_parameter) = element_parameters.get(element_name) else {
            let error = FamilyError::ParameterNotFound {
                name: element_name.clone(),
                lookup: ParameterLookup::Element,
            };
            debug!(%error, "skipping pair");
            batch.push(ItemReport::failed(element_name, error.to_string()));
            continue;
        };
        let Some(family_parameter) = family_parameters.iter().find(|p| &p.name == family_name)
        else {
            let error = FamilyError::ParameterNotFound {
                name: family_name.clone(),
                lookup: ParameterLookup::Family,
            };
            debug!(%error, "skipping pair");
            batch.push(ItemReport::failed(element_name, error.to_string()));
            continue;
        };

        match tx.associate(element, element_parameter, family_parameter) {
            Ok(()) => {
                batch.push(ItemReport::applied(
                    element_name,
                    Association {
                        element_parameter: element_name.clone(),
                        family_parameter: family_name.clone(),
                    },
                    format!("Successfully associated '{element_name}' to '{family_name}'"),
                ));
                if options.visibility.matches(element_name) {
                    associated.push(element_parameter);
                }
            }
            Err(HostError::Rejected(reason)) => {
                let error = FamilyError::AssociationIncompatible {
                    element_parameter: element_name.clone(),
                    family_parameter: family_name.clone(),
                    reason,
                };
                warn!(%error, "association refused");
                batch.push(ItemReport::failed(element_name, error.to_string()));
            }
            Err(fatal @ HostError::Fatal(_)) => return Err(abort(tx, &fatal)),
        }
    }

    let visibility_parameters_found: Vec<String> =
        associated.iter().map(|p| p.name.clone()).collect();
    let mut visibility_settings = Vec::new();
    if options.force_visibility {
        for parameter in associated {
            match plan_visibility(parameter) {
                VisibilityAction::Force {
                    name,
                    value,
                    message,
                } => match tx.set_element_parameter(element, &name, value) {
                    Ok(()) => {
                        debug!(parameter = %name, "visibility forced");
                        visibility_settings.push(message);
                    }
                    Err(HostError::Rejected(reason)) => {
                        warn!(parameter = %name, %reason, "could not force visibility");
                        visibility_settings.push(format!("Error setting '{name}': {reason}"));
                    }
                    Err(fatal @ HostError::Fatal(_)) => return Err(abort(tx, &fatal)),
                },
                VisibilityAction::Leave { message, .. } => visibility_settings.push(message),
            }
        }
    }

    finish(tx)?;
    batch.committed = true;
    info!(
        associated = batch.applied_count(),
        failed = batch.failed_count(),
        visibility = visibility_parameters_found.len(),
        "parameter associations processed"
    );

    Ok(AssociationReport {
        element: element.clone(),
        batch,
        available_family_parameters,
        requested_element_parameters,
        requested_family_parameters,
        visibility_parameters_found,
        visibility_settings,
    })
}
