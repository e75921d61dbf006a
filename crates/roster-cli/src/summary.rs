use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use roster_validate::{Check, Rule};

use crate::cli::ReportFormatArg;
use crate::types::{BatchResult, FileResult};

pub fn print_batch(result: &BatchResult, format: ReportFormatArg) -> Result<()> {
    match format {
        ReportFormatArg::Table => {
            print_summary(result);
            Ok(())
        }
        ReportFormatArg::Json => {
            println!("{}", render_json(result)?);
            Ok(())
        }
    }
}

pub fn render_json(result: &BatchResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("serialize validation report")
}

pub fn print_summary(result: &BatchResult) {
    println!("{}", summary_table(result));
    if let Some(table) = message_table(result) {
        println!();
        println!("Validation messages:");
        println!("{table}");
    }
    let errors: Vec<&FileResult> = result
        .files
        .iter()
        .filter(|file| file.error.is_some())
        .collect();
    if !errors.is_empty() {
        eprintln!("Errors:");
        for file in errors {
            if let Some(error) = &file.error {
                eprintln!("- {error}");
            }
        }
    }
}

/// One row per file plus a totals row.
pub fn summary_table(result: &BatchResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Members"),
        header_cell("Status"),
        header_cell("Failures"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for file in &result.files {
        let (members, failures) = match &file.report {
            Some(report) => (
                Cell::new(report.member_rows),
                count_cell(report.failure_count(), Color::Red),
            ),
            None => (dim_cell("-"), dim_cell("-")),
        };
        table.add_row(vec![
            Cell::new(file.path.display()),
            members,
            status_cell(file),
            failures,
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(format!(
            "{} valid / {} invalid / {} error",
            result.valid_count(),
            result.invalid_count(),
            result.error_count()
        ))
        .add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

/// Failure messages per file, or `None` when every roster passed.
pub fn message_table(result: &BatchResult) -> Option<Table> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Rule"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    let mut rows = 0usize;
    for file in &result.files {
        let Some(report) = &file.report else {
            continue;
        };
        for failure in &report.failures {
            table.add_row(vec![
                Cell::new(file.path.display()),
                Cell::new(&failure.code).fg(Color::Red),
                Cell::new(&failure.message),
            ]);
            rows += 1;
        }
    }
    (rows > 0).then_some(table)
}

/// The rule catalog in execution order.
pub fn rules_table(rules: &[Rule]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Column"),
        header_cell("Check"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for rule in rules {
        table.add_row(vec![
            Cell::new(rule.id.code())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(rule.column),
            Cell::new(check_label(rule)),
            Cell::new(rule.id.description()),
        ]);
    }
    table
}

fn check_label(rule: &Rule) -> String {
    match rule.check {
        Check::Presence => "not blank".to_string(),
        Check::Uniqueness { max_distinct } => {
            format!("<= {max_distinct} distinct")
        }
        Check::MemberCount { minimum } => format!(">= {minimum} distinct"),
    }
}

fn status_cell(file: &FileResult) -> Cell {
    match &file.report {
        Some(report) if report.valid => Cell::new("VALID")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Some(_) => Cell::new("INVALID")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        None => Cell::new("ERROR").fg(Color::Yellow),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    if table.column_count() >= 3 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
        ]);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
        ]);
    }
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
