use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use kdb_ingest::NormalizeSummary;

/// Prints run counts, then one row per rejected record. Goes to stderr so
/// stdout stays pure JSON lines.
pub fn print_summary(summary: &NormalizeSummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rows"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Read"), Cell::new(summary.rows_read)]);
    table.add_row(vec![Cell::new("Normalized"), Cell::new(summary.normalized)]);
    table.add_row(vec![Cell::new("Skipped (no course number)"), dim_cell(summary.skipped)]);
    table.add_row(vec![
        Cell::new("Rejected"),
        count_cell(summary.rejected.len(), Color::Red),
    ]);
    eprintln!("{table}");

    if summary.has_rejections() {
        print_rejection_table(summary);
    }
}

fn print_rejection_table(summary: &NormalizeSummary) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Course"),
        header_cell("Column"),
        header_cell("Value"),
        header_cell("Error"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for error in &summary.rejected {
        table.add_row(vec![
            Cell::new(error.line),
            Cell::new(&error.course_number).add_attribute(Attribute::Bold),
            Cell::new(error.field.column()),
            Cell::new(format!("{:?}", error.raw)),
            Cell::new(&error.source).fg(Color::Red),
        ]);
    }
    eprintln!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}
