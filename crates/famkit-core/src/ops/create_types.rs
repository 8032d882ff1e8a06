//! Create family types by name.

use famkit_model::{BatchReport, FamilyType, HostError, InputValue, ItemReport, Result};
use tracing::{debug, info, info_span, warn};

use super::{abort, begin, ensure_family_document, finish};
use crate::host::FamilyHost;

pub const CREATE_TYPES_TRANSACTION: &str = "Create Family Types";

/// Creates one family type per name, in order.
///
/// Names are trimmed first. A refused name is reported and the remaining
/// names are still created; the batch commits either way.
pub fn create_types<H: FamilyHost + ?Sized>(
    doc: &mut H,
    names: InputValue<String>,
) -> Result<BatchReport<FamilyType>> {
    ensure_family_document(&*doc)?;
    let names: Vec<String> = names
        .into_vec()
        .into_iter()
        .map(|name| name.trim().to_string())
        .collect();
    let span = info_span!(
        "create_types",
        document = doc.title(),
        requested = names.len()
    );
    let _guard = span.enter();

    let mut report = BatchReport::new(CREATE_TYPES_TRANSACTION);
    let mut tx = begin(doc, CREATE_TYPES_TRANSACTION)?;

    for name in &names {
        match tx.new_type(name) {
            Ok(family_type) => {
                debug!(family_type = %name, "type created");
                report.push(ItemReport::applied(
                    name,
                    family_type,
                    format!("Created type: {name}"),
                ));
            }
            Err(HostError::Rejected(reason)) => {
                warn!(family_type = %name, %reason, "type not created");
                report.push(ItemReport::failed(
                    name,
                    format!("Could not create type: {name}"),
                ));
            }
            Err(fatal @ HostError::Fatal(_)) => return Err(abort(tx, &fatal)),
        }
    }

    finish(tx)?;
    report.committed = true;
    info!(
        created = report.applied_count(),
        failed = report.failed_count(),
        "family types processed"
    );
    Ok(report)
}
