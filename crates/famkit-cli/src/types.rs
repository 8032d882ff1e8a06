use std::path::PathBuf;

use famkit_core::AssociationReport;
use famkit_model::{BatchReport, FamilyParameter, FamilyType};

#[derive(Debug)]
pub enum Outcome {
    Parameters(BatchReport<FamilyParameter>),
    Association(AssociationReport),
    Types(BatchReport<FamilyType>),
}

impl Outcome {
    pub fn has_failures(&self) -> bool {
        match self {
            Outcome::Parameters(report) => report.has_failures(),
            Outcome::Association(report) => report.batch.has_failures(),
            Outcome::Types(report) => report.has_failures(),
        }
    }
}

#[derive(Debug)]
pub struct EditResult {
    pub document: String,
    pub outcome: Outcome,
    /// Snapshot path written, `None` on a dry run.
    pub written: Option<PathBuf>,
}
