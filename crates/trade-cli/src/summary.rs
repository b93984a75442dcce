use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use trade_catalogue::strategic_categories;
use trade_cli::types::{HarmonizeResult, MetricsResult, SideSummary};
use trade_transform::annual_series;

/// Codes listed per category in the catalogue summary.
const PRIORITY_CODES: usize = 3;

pub fn print_metrics_summary(result: &MetricsResult) {
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: none (dry run)"),
    }
    if let Some(path) = &result.manifest {
        println!("Manifest: {}", path.display());
    }
    print_inputs(&[&result.exports, &result.imports]);

    let exports_only = result.rows.iter().filter(|row| row.imports.is_none()).count();
    let imports_only = result.rows.iter().filter(|row| row.exports.is_none()).count();
    println!(
        "Fact rows: {} ({} exports only, {} imports only)",
        result.rows.len(),
        exports_only,
        imports_only
    );
    let singular_ratio = result.singular_ratio_rows();
    let singular_rca = result.singular_rca_rows();
    if singular_ratio > 0 || singular_rca > 0 {
        println!(
            "Undefined values: {singular_ratio} export/import ratios, {singular_rca} RCA indices"
        );
    }
    print_annual_table(result);
}

pub fn print_harmonize_summary(result: &HarmonizeResult) {
    println!("Output: {}", result.output.display());
    print_inputs(&[&result.side]);
}

fn print_inputs(sides: &[&SideSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Flow"),
        header_cell("Report"),
        header_cell("Value column"),
        header_cell("Records"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for side in sides {
        table.add_row(vec![
            Cell::new(side.flow.as_str()).add_attribute(Attribute::Bold),
            Cell::new(side.path.display()),
            Cell::new(&side.value_column),
            Cell::new(side.records),
        ]);
    }
    println!("{table}");
}

fn print_annual_table(result: &MetricsResult) {
    let series = annual_series(&result.rows);
    if series.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Country"),
        header_cell("Year"),
        header_cell("Balance ($B)"),
        header_cell("Export/Import"),
        header_cell("RCA"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for country in &series {
        for point in &country.points {
            table.add_row(vec![
                Cell::new(&country.country),
                Cell::new(&point.year),
                balance_cell(point.trade_balance),
                value_cell(point.export_import_ratio),
                value_cell(point.rca_index),
            ]);
        }
    }
    println!();
    println!("Annual series:");
    println!("{table}");
}

pub fn print_catalogue_summary(path: &std::path::Path) {
    let categories = strategic_categories();
    for category in categories {
        println!();
        println!("{}", category.name);
        println!("   Impact: {}", category.trade_impact);
        println!("   Dependency: {}", category.dependency_level);
        println!("   Context: {}", category.description);
        println!("   Key Codes: {} codes", category.codes.len());
        println!("   Priority Codes:");
        for (code, description) in category.codes.iter().take(PRIORITY_CODES) {
            println!("     - {code}: {description}");
        }
        if category.codes.len() > PRIORITY_CODES {
            println!("     ... and {} more", category.codes.len() - PRIORITY_CODES);
        }
    }
    let total: usize = categories.iter().map(|category| category.codes.len()).sum();
    println!();
    println!("Total strategic HTS codes: {total}");
    println!("Reference saved to: {}", path.display());
}

fn balance_cell(value: Option<f64>) -> Cell {
    match value {
        Some(balance) if balance.is_finite() => {
            let color = if balance < 0.0 { Color::Red } else { Color::Green };
            Cell::new(format!("{:.2}", balance / 1e9)).fg(color)
        }
        other => value_cell(other),
    }
}

fn value_cell(value: Option<f64>) -> Cell {
    match value {
        Some(v) if v.is_finite() => Cell::new(format!("{v:.3}")),
        Some(v) => Cell::new(v).fg(Color::Yellow),
        None => dim_cell("-"),
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

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
