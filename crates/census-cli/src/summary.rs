use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use census_cli::types::{IngestResult, StoreTarget};
use census_model::EntityKind;

pub fn print_summary(result: &IngestResult) {
    println!("Form: {}", result.form);
    match &result.target {
        StoreTarget::DryRun => println!("Store: in-memory (dry run)"),
        StoreTarget::Sqlite(path) => println!("Store: {}", path.display()),
    }
    println!("Choice tables: {}", result.choices_version);
    println!(
        "Files: {}  Submissions: {}",
        result.files, result.submissions
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Entity"),
        header_cell("Table"),
        header_cell("Records"),
        header_cell("Dropped"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for kind in EntityKind::ALL {
        let written = result.written.get(&kind).copied().unwrap_or(0);
        let dropped = result
            .dropped
            .iter()
            .filter(|dropped| dropped.failure.entity == kind)
            .count();
        if written == 0 && dropped == 0 {
            continue;
        }
        table.add_row(vec![
            Cell::new(kind.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(kind.table()),
            Cell::new(written),
            count_cell(dropped, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(result.total_written()).add_attribute(Attribute::Bold),
        count_cell(result.dropped.len(), Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    print_dropped_table(result);
    if !result.failed.is_empty() {
        eprintln!("Failed submissions:");
        for failed in &result.failed {
            match &failed.submission_id {
                Some(id) => eprintln!("- {} ({id}): {}", failed.location, failed.error),
                None => eprintln!("- {}: {}", failed.location, failed.error),
            }
        }
    }
}

fn print_dropped_table(result: &IngestResult) {
    if result.dropped.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Submission"),
        header_cell("Entity"),
        header_cell("Group"),
        header_cell("Index"),
        header_cell("Record"),
        header_cell("Error"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for dropped in &result.dropped {
        let failure = &dropped.failure;
        table.add_row(vec![
            Cell::new(&dropped.submission_id),
            Cell::new(failure.entity.table()),
            Cell::new(&failure.group),
            failure.index.map_or_else(|| dim_cell("-"), Cell::new),
            failure
                .record_id
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(&failure.error).fg(Color::Yellow),
        ]);
    }
    println!();
    println!("Dropped elements:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
