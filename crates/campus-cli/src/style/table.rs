//! Table formatting using comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

fn styled_table() -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table
}

fn header_cell(text: &str) -> Cell {
    if super::no_color() {
        Cell::new(text)
    } else {
        Cell::new(text).add_attribute(Attribute::Bold).fg(Color::Cyan)
    }
}

/// Creates a grid with a bold header row and a dimmed first column.
pub fn grid_table(columns: &[String], rows: &[Vec<String>]) -> Table {
    let mut table = styled_table();
    table.set_header(columns.iter().map(|c| header_cell(c)).collect::<Vec<_>>());

    for row in rows {
        let cells: Vec<Cell> = row
            .iter()
            .enumerate()
            .map(|(i, value)| {
                if i == 0 && !super::no_color() {
                    Cell::new(value).fg(Color::DarkGrey)
                } else {
                    Cell::new(value)
                }
            })
            .collect();
        table.add_row(cells);
    }

    table
}

/// Prints a grid followed by a row count footer.
pub fn print_grid(columns: &[String], rows: &[Vec<String>]) {
    use super::colors::SemanticStyle;

    println!("{}", grid_table(columns, rows));

    let count = rows.len();
    let row_word = if count == 1 { "row" } else { "rows" };
    println!("{}", format!("({count} {row_word})").muted());
}
