//! Family document operations over an abstract host.
//!
//! - **host**: the traits a family document host implements
//! - **transaction**: scoped transaction guard with rollback on drop
//! - **ops**: add parameters, associate nested parameters, create types
//! - **visibility**: forcing visibility switches after association
//! - **memory**: an in-memory host for fixtures and the CLI
//! - **config**: TOML configuration file

pub mod config;
pub mod host;
pub mod memory;
pub mod ops;
pub mod transaction;
pub mod visibility;

pub use config::{ConfigError, FamkitConfig};
pub use host::{FamilyDocument, FamilyHost, ParameterStore, TransactionHost};
pub use memory::{FailurePlan, MemoryFamily, TransactionOutcome, TransactionRecord};
pub use ops::{
    ADD_PARAMETERS_TRANSACTION, ASSOCIATE_TRANSACTION, Association, AssociationOptions,
    AssociationReport, CREATE_TYPES_TRANSACTION, add_family_parameters,
    add_family_parameters_from_inputs, associate_parameters, create_types,
    ensure_family_document,
};
pub use transaction::Transaction;
pub use visibility::{
    DEFAULT_VISIBILITY_KEYWORDS, VisibilityAction, VisibilityRule, plan_visibility,
};
