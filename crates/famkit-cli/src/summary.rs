use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use famkit_core::AssociationReport;
use famkit_model::{BatchReport, ItemStatus, ResolutionSource};

use crate::types::{EditResult, Outcome};

pub fn print_summary(result: &EditResult) {
    println!("Document: {}", result.document);
    match &result.written {
        Some(path) => println!("Snapshot: {}", path.display()),
        None => println!("Snapshot: not written (dry run)"),
    }
    match &result.outcome {
        Outcome::Parameters(report) => print_batch(report),
        Outcome::Types(report) => print_batch(report),
        Outcome::Association(report) => print_association(report),
    }
}

fn print_batch<T>(report: &BatchReport<T>) {
    println!("Transaction: {}", report.operation);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Item"),
        header_cell("Status"),
        header_cell("Message"),
    ]);
    apply_report_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for (index, item) in report.items.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&item.key),
            status_cell(&item.status),
            Cell::new(&item.message),
        ]);
    }
    table.add_row(vec![
        dim_cell("-"),
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} ok / {} skipped / {} failed",
            report.applied_count(),
            report.skipped_count(),
            report.failed_count()
        ))
        .add_attribute(Attribute::Bold),
        commit_cell(report.committed),
    ]);
    println!("{table}");
}

fn print_association(report: &AssociationReport) {
    println!("Element: {}", report.element);
    println!(
        "Family parameters: {}",
        join_or_dash(&report.available_family_parameters)
    );
    print_batch(&report.batch);
    if report.visibility_parameters_found.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Visibility setting")]);
    apply_table_style(&mut table);
    for setting in &report.visibility_settings {
        table.add_row(vec![Cell::new(setting)]);
    }
    if report.visibility_settings.is_empty() {
        table.add_row(vec![dim_cell(format!(
            "found {}, not forced",
            report.visibility_parameters_found.join(", ")
        ))]);
    }
    println!();
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_report_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Percentage(55)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell<T>(status: &ItemStatus<T>) -> Cell {
    match status {
        ItemStatus::Applied { .. } => Cell::new("OK")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        ItemStatus::Skipped { .. } => Cell::new("SKIP").fg(Color::Yellow),
        ItemStatus::Failed { .. } => Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn commit_cell(committed: bool) -> Cell {
    if committed {
        Cell::new("committed").fg(Color::Green)
    } else {
        Cell::new("rolled back").fg(Color::Red)
    }
}

pub fn source_cell(source: ResolutionSource) -> Cell {
    match source {
        ResolutionSource::TaxonomyId => Cell::new("taxonomy id"),
        ResolutionSource::Name => Cell::new("name"),
        ResolutionSource::Embedded => Cell::new("embedded id").fg(Color::Yellow),
        ResolutionSource::Default => Cell::new("default")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
