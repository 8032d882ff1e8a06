use serde::{Deserialize, Serialize};

use crate::enums::{ParameterGroup, SpecType};

/// Which lookup step produced a resolved tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// Exact match on a known taxonomy identifier.
    TaxonomyId,
    /// Exact match on a human-readable or legacy name.
    Name,
    /// Taxonomy identifier extracted from a decorated string.
    Embedded,
    /// Nothing matched; the documented default was used.
    Default,
}

/// A resolved tag together with how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolved<T> {
    pub value: T,
    pub source: ResolutionSource,
}

impl<T> Resolved<T> {
    pub fn new(value: T, source: ResolutionSource) -> Self {
        Self { value, source }
    }

    pub fn was_defaulted(&self) -> bool {
        self.source == ResolutionSource::Default
    }
}

/// Fully normalized unit of work for the add-parameters step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterRequest {
    pub name: String,
    pub spec: SpecType,
    pub group: ParameterGroup,
    pub is_instance: bool,
}

impl ParameterRequest {
    pub fn new(
        name: impl Into<String>,
        spec: SpecType,
        group: ParameterGroup,
        is_instance: bool,
    ) -> Self {
        Self {
            name: name.into(),
            spec,
            group,
            is_instance,
        }
    }
}

/// A request plus the provenance of its spec and group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRequest {
    pub request: ParameterRequest,
    pub spec_source: ResolutionSource,
    pub group_source: ResolutionSource,
}

impl ResolvedRequest {
    /// True when either the spec or the group fell back to its default.
    pub fn was_defaulted(&self) -> bool {
        self.spec_source == ResolutionSource::Default
            || self.group_source == ResolutionSource::Default
    }
}
