use anyhow::{Context, Result};
use comfy_table::{Cell, Table};
use famkit_core::{
    FamkitConfig, MemoryFamily, add_family_parameters_from_inputs, associate_parameters,
    create_types,
};
use famkit_model::{ElementId, InputValue, ParameterGroup, ResolutionMode, SpecType};
use famkit_normalization::{resolve_parameter_group, resolve_spec_type};
use tracing::{info, info_span};

use famkit_cli::files::{load_family, load_request, save_family};

use crate::cli::{AddParametersArgs, AssociateArgs, CreateTypesArgs, DocumentArgs, ResolveArgs};
use crate::summary::{apply_table_style, source_cell};
use crate::types::{EditResult, Outcome};

pub fn run_add_parameters(args: &AddParametersArgs, config: &FamkitConfig) -> Result<EditResult> {
    let mut options = config.normalization_options();
    if args.strict {
        options = options.with_resolution(ResolutionMode::Strict);
    }
    let inputs = load_request(&args.request)?;
    edit(&args.document, |family| {
        let report = add_family_parameters_from_inputs(family, inputs, &options)
            .context("add family parameters")?;
        Ok(Outcome::Parameters(report))
    })
}

pub fn run_associate(args: &AssociateArgs, config: &FamkitConfig) -> Result<EditResult> {
    let mut options = config.association_options();
    if args.no_force_visibility {
        options = options.with_force_visibility(false);
    }
    let element = ElementId::new(args.element.trim());
    let element_names = InputValue::Sequence(args.element_params.clone());
    let family_names = InputValue::Sequence(args.family_params.clone());
    edit(&args.document, |family| {
        let report = associate_parameters(family, &element, element_names, family_names, &options)
            .with_context(|| format!("associate parameters of element {element}"))?;
        Ok(Outcome::Association(report))
    })
}

pub fn run_create_types(args: &CreateTypesArgs) -> Result<EditResult> {
    let names = InputValue::Sequence(args.names.clone());
    edit(&args.document, |family| {
        let report = create_types(family, names).context("create family types")?;
        Ok(Outcome::Types(report))
    })
}

/// Loads the snapshot, runs one operation and writes the result back.
fn edit<F>(document: &DocumentArgs, operation: F) -> Result<EditResult>
where
    F: FnOnce(&mut MemoryFamily) -> Result<Outcome>,
{
    let mut family = load_family(&document.family)?;
    let span = info_span!("edit", document = %family.title);
    let _guard = span.enter();

    let outcome = operation(&mut family)?;

    let written = if document.dry_run {
        info!("dry run, snapshot not written");
        None
    } else {
        let target = document.output.as_ref().unwrap_or(&document.family);
        save_family(&family, target)?;
        Some(target.clone())
    };
    Ok(EditResult {
        document: family.title,
        outcome,
        written,
    })
}

pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Kind", "Input", "Resolved", "Source"]);
    apply_table_style(&mut table);
    for input in &args.specs {
        let resolved = resolve_spec_type(input);
        table.add_row(vec![
            Cell::new("spec"),
            Cell::new(input),
            Cell::new(resolved.value.as_str()),
            source_cell(resolved.source),
        ]);
    }
    for input in &args.groups {
        let resolved = resolve_parameter_group(input);
        table.add_row(vec![
            Cell::new("group"),
            Cell::new(input),
            Cell::new(resolved.value.label()),
            source_cell(resolved.source),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_specs() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Specification", "Taxonomy id", "Storage"]);
    apply_table_style(&mut table);
    for spec in SpecType::ALL {
        table.add_row(vec![
            spec.as_str().to_string(),
            spec.taxonomy_id().to_string(),
            format!("{:?}", spec.storage()),
        ]);
    }
    println!("{table}");

    let mut table = Table::new();
    table.set_header(vec!["Group", "Legacy name", "Taxonomy id"]);
    apply_table_style(&mut table);
    for group in ParameterGroup::ALL {
        table.add_row(vec![
            group.label().to_string(),
            group.legacy_name().to_string(),
            group.taxonomy_id(),
        ]);
    }
    println!("{table}");
    Ok(())
}
