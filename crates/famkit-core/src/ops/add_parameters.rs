//! Add family parameters that do not exist yet.

use famkit_model::{
    BatchReport, FamilyParameter, HostError, ItemReport, NormalizationOptions, ParameterInputs,
    ParameterRequest, Result,
};
use famkit_normalization::build_parameter_requests;
use tracing::{debug, info, info_span, warn};

use super::{abort, begin, ensure_family_document, finish};
use crate::host::FamilyHost;

pub const ADD_PARAMETERS_TRANSACTION: &str = "Add Family Parameters";

/// Adds one family parameter per request.
///
/// Names that already exist are skipped, host refusals are recorded per
/// item, and the batch commits. Only a fatal host error rolls back.
pub fn add_family_parameters<H: FamilyHost + ?Sized>(
    doc: &mut H,
    requests: &[ParameterRequest],
) -> Result<BatchReport<FamilyParameter>> {
    ensure_family_document(&*doc)?;
    let span = info_span!(
        "add_family_parameters",
        document = doc.title(),
        requested = requests.len()
    );
    let _guard = span.enter();

    let mut report = BatchReport::new(ADD_PARAMETERS_TRANSACTION);
    let mut tx = begin(doc, ADD_PARAMETERS_TRANSACTION)?;

    for request in requests {
        let name = request.name.as_str();
        if tx.family_parameter(name).is_some() {
            debug!(parameter = name, "parameter already exists");
            report.push(ItemReport::skipped(
                name,
                format!("Parameter '{name}' already exists"),
            ));
            continue;
        }
        match tx.add_parameter(request) {
            Ok(parameter) => {
                debug!(
                    parameter = name,
                    spec = %parameter.spec,
                    group = %parameter.group,
                    is_instance = parameter.is_instance,
                    "parameter added"
                );
                report.push(ItemReport::applied(
                    name,
                    parameter,
                    format!("Added parameter '{name}'"),
                ));
            }
            Err(HostError::Rejected(reason)) => {
                warn!(parameter = name, %reason, "parameter not added");
                report.push(ItemReport::failed(
                    name,
                    format!("Could not add parameter '{name}': {reason}"),
                ));
            }
            Err(fatal @ HostError::Fatal(_)) => return Err(abort(tx, &fatal)),
        }
    }

    finish(tx)?;
    report.committed = true;
    info!(
        added = report.applied_count(),
        skipped = report.skipped_count(),
        failed = report.failed_count(),
        "family parameters processed"
    );
    Ok(report)
}

/// Builds requests from raw graph inputs, then adds them.
pub fn add_family_parameters_from_inputs<H: FamilyHost + ?Sized>(
    doc: &mut H,
    inputs: ParameterInputs,
    options: &NormalizationOptions,
) -> Result<BatchReport<FamilyParameter>> {
    let requests = build_parameter_requests(inputs, options)?;
    add_family_parameters(doc, &requests)
}
