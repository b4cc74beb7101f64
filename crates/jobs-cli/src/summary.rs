//! Run summaries printed after a pipeline or clean invocation.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{CleanSummary, RunResult};

/// Print the per-stage table for a full pipeline run.
pub fn print_run_summary(result: &RunResult) {
    println!("Work dir: {}", result.work_dir.display());
    println!("Cleaned dataset: {}", result.clean_csv.display());
    println!("Bulk file: {}", result.bulk_file.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Rows"),
        header_cell("Attempts"),
        header_cell("Duration (ms)"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for stage in &result.stages {
        table.add_row(vec![
            Cell::new(stage.stage)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(stage.rows),
            attempts_cell(stage.attempts),
            Cell::new(stage.duration_ms),
        ]);
    }
    println!("{table}");
    print_clean_summary(&result.clean);
}

/// Print the drop counters from the cleaning stage.
pub fn print_clean_summary(summary: &CleanSummary) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows in"),
        header_cell("Duplicates dropped"),
        header_cell("Missing dropped"),
        header_cell("Malformed dropped"),
        header_cell("Rows out"),
    ]);
    apply_table_style(&mut table);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.input_rows),
        count_cell(summary.duplicates_dropped),
        count_cell(summary.missing_dropped),
        count_cell(summary.malformed_dropped),
        Cell::new(summary.output_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    match &summary.output_path {
        Some(path) => println!("Cleaned dataset written to {}", path.display()),
        None => println!("Dry run: no output written"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn attempts_cell(attempts: u32) -> Cell {
    if attempts > 1 {
        Cell::new(attempts)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(attempts)
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
