//! Type resolver: maps a name or taxonomy identifier to a [`SpecType`].

use famkit_model::{ResolutionSource, Resolved, SpecType};
use tracing::debug;

use crate::name::normalize_name;
use crate::taxonomy::{extract_taxonomy_id, looks_like_taxonomy_id};

/// Used when nothing matches.
pub const DEFAULT_SPEC_TYPE: SpecType = SpecType::Length;

fn spec_from_taxonomy_id(id: &str) -> Option<SpecType> {
    SpecType::ALL
        .into_iter()
        .find(|spec| spec.taxonomy_id() == id)
}

fn spec_from_name(name: &str) -> Option<SpecType> {
    SpecType::ALL.into_iter().find(|spec| spec.as_str() == name)
}

/// Resolves a raw type name.
///
/// Lookup order:
/// 1. exact taxonomy identifier (`autodesk.spec.aec:area-2.0.0`)
/// 2. exact human-readable name (`Area`)
/// 3. taxonomy identifier embedded in a decorated string
/// 4. [`DEFAULT_SPEC_TYPE`]
///
/// Never fails. Callers that need strictness check
/// [`Resolved::was_defaulted`].
pub fn resolve_spec_type(raw: &str) -> Resolved<SpecType> {
    let name = normalize_name(raw);

    if looks_like_taxonomy_id(name)
        && let Some(spec) = spec_from_taxonomy_id(name)
    {
        return Resolved::new(spec, ResolutionSource::TaxonomyId);
    }
    if let Some(spec) = spec_from_name(name) {
        return Resolved::new(spec, ResolutionSource::Name);
    }
    if let Some(spec) = extract_taxonomy_id(name).and_then(spec_from_taxonomy_id) {
        return Resolved::new(spec, ResolutionSource::Embedded);
    }

    debug!(input = name, fallback = %DEFAULT_SPEC_TYPE, "unrecognized specification type");
    Resolved::new(DEFAULT_SPEC_TYPE, ResolutionSource::Default)
}
