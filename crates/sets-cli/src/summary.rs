use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use sets_model::Diagnostics;

use crate::types::{CheckReport, RunReport};

pub fn print_summary(report: &RunReport) {
    println!("Source: {}", report.source.display());
    if let Some(path) = &report.output {
        println!("Output: {}", path.display());
    }
    if let Some(delivery) = &report.delivery {
        println!(
            "Delivered: {} ({} bytes, {})",
            delivery.location,
            delivery.bytes,
            delivery.delivered_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Dropped"),
        header_cell("Sets"),
        header_cell("Barcodes"),
        header_cell("Duplicate IDs"),
        header_cell("Short values"),
    ]);
    apply_table_style(&mut table);
    for index in 0..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(report.rows_read),
        count_cell(report.rows_dropped, Color::Yellow),
        Cell::new(report.set_count).add_attribute(Attribute::Bold),
        Cell::new(report.barcode_count),
        count_cell(report.diagnostics.duplicate_ids().len(), Color::Yellow),
        count_cell(report.diagnostics.short_values().len(), Color::Yellow),
    ]);
    println!("{table}");
    print_diagnostics_table(&report.diagnostics, report.min_length);
    println!("{}", report.message);
}

pub fn print_check(report: &CheckReport) {
    println!("Source: {}", report.source.display());
    println!(
        "Rows: {}  Sets: {}  Dropped: {}",
        report.rows_checked, report.set_count, report.rows_dropped
    );
    if report.diagnostics.is_empty() {
        println!("No problems found");
    } else {
        print_diagnostics_table(&report.diagnostics, report.min_length);
    }
}

fn print_diagnostics_table(diagnostics: &Diagnostics, min_length: usize) {
    if diagnostics.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Problem"),
        header_cell("Count"),
        header_cell("Values"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    if !diagnostics.duplicate_ids().is_empty() {
        table.add_row(vec![
            Cell::new("Duplicate set ID").fg(Color::Yellow),
            Cell::new(diagnostics.duplicate_ids().len()),
            Cell::new(diagnostics.duplicate_ids().join(", ")),
        ]);
    }
    if !diagnostics.short_values().is_empty() {
        table.add_row(vec![
            Cell::new(format!("{min_length} characters or fewer")).fg(Color::Yellow),
            Cell::new(diagnostics.short_values().len()),
            Cell::new(diagnostics.short_values().join(", ")),
        ]);
    }
    println!();
    println!("Problems:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
    if table.column_count() >= 3 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(28)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::UpperBoundary(Width::Percentage(70)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
