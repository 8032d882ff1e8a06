//! The three family document operations.
//!
//! Each one checks the document, opens exactly one transaction, records a
//! per-item outcome for every request, and commits. Item-level refusals are
//! reported and the batch continues; a fatal host error rolls the whole
//! batch back.

pub mod add_parameters;
pub mod associate;
pub mod create_types;

use famkit_model::{FamilyError, HostError, Result};
use tracing::error;

use crate::host::{FamilyDocument, TransactionHost};
use crate::transaction::Transaction;

pub use add_parameters::{
    ADD_PARAMETERS_TRANSACTION, add_family_parameters, add_family_parameters_from_inputs,
};
pub use associate::{
    ASSOCIATE_TRANSACTION, Association, AssociationOptions, AssociationReport,
    associate_parameters,
};
pub use create_types::{CREATE_TYPES_TRANSACTION, create_types};

/// Fails fast unless the document is open in the Family Editor.
pub fn ensure_family_document<D: FamilyDocument + ?Sized>(doc: &D) -> Result<()> {
    if doc.is_family_document() {
        Ok(())
    } else {
        Err(FamilyError::NotInFamilyEditor {
            document: doc.title().to_string(),
        })
    }
}

/// Opens the single transaction of an operation.
fn begin<'doc, H: TransactionHost + ?Sized>(
    doc: &'doc mut H,
    name: &str,
) -> Result<Transaction<'doc, H>> {
    Transaction::start(doc, name).map_err(|source| FamilyError::TransactionFailure {
        transaction: name.to_string(),
        message: source.to_string(),
    })
}

/// Rolls back after a fatal host error and reports it.
fn abort<H: TransactionHost + ?Sized>(tx: Transaction<'_, H>, cause: &HostError) -> FamilyError {
    let transaction = tx.name().to_string();
    error!(%transaction, error = %cause, "aborting batch");
    let message = match tx.rollback() {
        Ok(()) => cause.to_string(),
        Err(rollback) => format!("{cause}; rollback failed: {rollback}"),
    };
    FamilyError::TransactionFailure {
        transaction,
        message,
    }
}

/// Commits, mapping a failed commit to a rolled-back batch.
fn finish<H: TransactionHost + ?Sized>(tx: Transaction<'_, H>) -> Result<()> {
    let transaction = tx.name().to_string();
    tx.commit().map_err(|source| {
        error!(%transaction, error = %source, "commit failed");
        FamilyError::TransactionFailure {
            transaction,
            message: source.to_string(),
        }
    })
}
