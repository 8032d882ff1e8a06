//! Group resolver: maps a name or taxonomy identifier to a
//! [`ParameterGroup`].

use famkit_model::{ParameterGroup, ResolutionSource, Resolved};
use tracing::debug;

use crate::name::normalize_name;
use crate::taxonomy::{extract_taxonomy_id, looks_like_taxonomy_id};

/// Used when nothing matches.
pub const DEFAULT_PARAMETER_GROUP: ParameterGroup = ParameterGroup::Dimensions;

fn group_from_taxonomy_id(id: &str) -> Option<ParameterGroup> {
    ParameterGroup::ALL
        .into_iter()
        .find(|group| group.taxonomy_ids().iter().any(|known| known == id))
}

fn group_from_name(name: &str) -> Option<ParameterGroup> {
    ParameterGroup::ALL
        .into_iter()
        .find(|group| group.legacy_name() == name || group.label() == name)
}

/// Resolves a raw group name.
///
/// Accepts taxonomy identifiers (2.0.0 and 1.0.0), legacy `PG_*` names and
/// UI labels, then embedded identifiers, then falls back to
/// [`DEFAULT_PARAMETER_GROUP`].
pub fn resolve_parameter_group(raw: &str) -> Resolved<ParameterGroup> {
    let name = normalize_name(raw);

    if looks_like_taxonomy_id(name)
        && let Some(group) = group_from_taxonomy_id(name)
    {
        return Resolved::new(group, ResolutionSource::TaxonomyId);
    }
    if let Some(group) = group_from_name(name) {
        return Resolved::new(group, ResolutionSource::Name);
    }
    if let Some(group) = extract_taxonomy_id(name).and_then(group_from_taxonomy_id) {
        return Resolved::new(group, ResolutionSource::Embedded);
    }

    debug!(input = name, fallback = %DEFAULT_PARAMETER_GROUP, "unrecognized parameter group");
    Resolved::new(DEFAULT_PARAMETER_GROUP, ResolutionSource::Default)
}
