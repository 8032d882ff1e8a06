//! Input normalization and name resolution for family parameter requests.
//!
//! - **broadcast**: aligns scalar-or-list inputs to the parameter name list
//! - **name**: whitespace normalization and flag coercion
//! - **spec**: specification type resolver
//! - **group**: parameter group resolver
//! - **builder**: turns raw graph inputs into parameter requests
//!
//! Resolvers are total: unrecognized names fall back to a documented default
//! and report it through [`famkit_model::Resolved::was_defaulted`].

pub mod broadcast;
pub mod builder;
pub mod group;
pub mod name;
pub mod spec;
pub mod taxonomy;

pub use broadcast::broadcast;
pub use builder::{build_parameter_requests, build_requests};
pub use group::{DEFAULT_PARAMETER_GROUP, resolve_parameter_group};
pub use name::{coerce_flag, normalize_name};
pub use spec::{DEFAULT_SPEC_TYPE, resolve_spec_type};
pub use taxonomy::extract_taxonomy_id;
