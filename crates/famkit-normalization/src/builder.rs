//! Parameter-request builder: aligns graph inputs and resolves each element.

use famkit_model::{
    FamilyError, NameKind, NormalizationOptions, ParameterInputs, ParameterRequest,
    ResolutionMode, ResolvedRequest, Result,
};
use tracing::{debug, debug_span};

use crate::broadcast::broadcast;
use crate::group::resolve_parameter_group;
use crate::name::{coerce_flag, normalize_name};
use crate::spec::resolve_spec_type;

/// Builds one request per parameter name.
///
/// Every secondary input is broadcast to the number of names, so each
/// parameter gets its own type, group and flag unless the caller supplied a
/// scalar. Names are trimmed; types and groups resolve independently.
pub fn build_requests(
    inputs: ParameterInputs,
    options: &NormalizationOptions,
) -> Result<Vec<ResolvedRequest>> {
    let names = inputs.names.into_vec();
    let len = names.len();
    let _span = debug_span!("build_requests", count = len).entered();

    let spec_types = broadcast(inputs.spec_types, len, options.broadcast, "spec_types")?;
    let groups = broadcast(inputs.groups, len, options.broadcast, "groups")?;
    let flags = broadcast(inputs.is_instance, len, options.broadcast, "is_instance")?;

    let mut requests = Vec::with_capacity(len);
    for (((name, spec_input), group_input), flag) in
        names.iter().zip(&spec_types).zip(&groups).zip(&flags)
    {
        let spec = resolve_spec_type(spec_input.pick());
        let group = resolve_parameter_group(group_input.pick());

        if options.resolution == ResolutionMode::Strict {
            if spec.was_defaulted() {
                return Err(FamilyError::UnresolvedName {
                    kind: NameKind::Spec,
                    input: spec_input.pick().to_string(),
                });
            }
            if group.was_defaulted() {
                return Err(FamilyError::UnresolvedName {
                    kind: NameKind::Group,
                    input: group_input.pick().to_string(),
                });
            }
        }

        let request = ParameterRequest::new(
            normalize_name(name),
            spec.value,
            group.value,
            coerce_flag(flag),
        );
        debug!(
            name = %request.name,
            spec = %request.spec,
            group = %request.group,
            is_instance = request.is_instance,
            "resolved parameter request"
        );
        requests.push(ResolvedRequest {
            request,
            spec_source: spec.source,
            group_source: group.source,
        });
    }
    Ok(requests)
}

/// Like [`build_requests`] but drops the resolution provenance.
pub fn build_parameter_requests(
    inputs: ParameterInputs,
    options: &NormalizationOptions,
) -> Result<Vec<ParameterRequest>> {
    Ok(build_requests(inputs, options)?
        .into_iter()
        .map(|resolved| resolved.request)
        .collect())
}

#[cfg(test)]
mod tests {
    use famkit_model::{
        BroadcastPolicy, FlagValue, InputValue, NameChoice, ParameterGroup, ResolutionSource,
        SpecType,
    };

    use super::*;

    fn inputs(
        names: InputValue<String>,
        spec_types: InputValue<NameChoice>,
        groups: InputValue<NameChoice>,
        is_instance: InputValue<FlagValue>,
    ) -> ParameterInputs {
        ParameterInputs {
            names,
            spec_types,
            groups,
            is_instance,
        }
    }

    #[test]
    fn scalar_name_builds_one_request() {
        let requests = build_parameter_requests(
            inputs("  Depth ".into(), "Length".into(), "PG_GEOMETRY".into(), true.into()),
            &NormalizationOptions::default(),
        )
        .unwrap();
        assert_eq!(
            requests,
            vec![ParameterRequest::new(
                "Depth",
                SpecType::Length,
                ParameterGroup::Geometry,
                true
            )]
        );
    }

    #[test]
    fn provenance_is_kept() {
        let requests = build_requests(
            inputs(
                vec!["A", "B"].into(),
                vec!["autodesk.spec:number-2.0.0", "Speed"].into(),
                "General".into(),
                false.into(),
            ),
            &NormalizationOptions::default(),
        )
        .unwrap();
        assert_eq!(requests[0].spec_source, ResolutionSource::TaxonomyId);
        assert!(!requests[0].was_defaulted());
        assert_eq!(requests[1].request.spec, SpecType::Length);
        assert!(requests[1].was_defaulted());
    }

    #[test]
    fn strict_mode_rejects_defaults() {
        let err = build_requests(
            inputs("A".into(), "Text".into(), "Graphics".into(), false.into()),
            &NormalizationOptions::default().with_resolution(ResolutionMode::Strict),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            FamilyError::UnresolvedName { kind: NameKind::Group, ref input } if input == "Graphics"
        ));
    }

    #[test]
    fn empty_flag_sequence_is_a_shape_error() {
        let err = build_requests(
            inputs(
                vec!["A", "B"].into(),
                "Text".into(),
                "General".into(),
                InputValue::Sequence(Vec::new()),
            ),
            &NormalizationOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            FamilyError::InputShape { input: "is_instance", primary_len: 2, secondary_len: 0 }
        ));
    }

    #[test]
    fn reject_policy_flags_extra_types() {
        let err = build_requests(
            inputs(
                "A".into(),
                vec!["Text", "Integer"].into(),
                "General".into(),
                true.into(),
            ),
            &NormalizationOptions::default().with_broadcast(BroadcastPolicy::Reject),
        )
        .unwrap_err();
        assert!(matches!(err, FamilyError::InputShape { input: "spec_types", .. }));
    }
}
