use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use wine_model::{PipelineSummary, WineType};

pub fn print_summary(summary: &PipelineSummary) {
    println!("Output: {}", summary.output_path.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Partition"),
        header_cell("Rows"),
        header_cell("Source"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    for source in &summary.sources {
        table.add_row(vec![
            stage_cell("combine"),
            wine_type_cell(source.wine_type),
            Cell::new(source.rows),
            Cell::new(source.path.display()),
        ]);
    }
    table.add_row(vec![
        stage_cell("combine"),
        Cell::new("combined"),
        Cell::new(summary.combined_rows).add_attribute(Attribute::Bold),
        dim_cell(format!("{} input rows", summary.input_rows())),
    ]);
    table.add_row(vec![
        stage_cell("split"),
        Cell::new("train"),
        Cell::new(summary.train_rows),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        stage_cell("split"),
        Cell::new("test"),
        Cell::new(summary.test_rows),
        dim_cell("held out"),
    ]);
    table.add_row(vec![
        Cell::new("OUTPUT")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} columns", summary.output_columns.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.train_rows).add_attribute(Attribute::Bold),
        Cell::new(summary.output_path.display()),
    ]);
    println!("{table}");
    println!("Columns: {}", summary.output_columns.join(", "));
}

fn apply_summary_table_style(table: &mut Table) {
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

fn stage_cell(stage: &str) -> Cell {
    Cell::new(stage)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn wine_type_cell(wine_type: WineType) -> Cell {
    let color = match wine_type {
        WineType::Red => Color::Red,
        WineType::White => Color::Yellow,
    };
    Cell::new(wine_type.label()).fg(color)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
