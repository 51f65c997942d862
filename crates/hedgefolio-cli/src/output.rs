//! Rendering of command results in the selected output format.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Prints rows as a table, JSON array, CSV or tab-separated values.
pub fn print_rows<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            print_table(rows);
            Ok(())
        }
        OutputFormat::Json => print_json_value(rows),
        OutputFormat::Csv => write_delimited(rows, b',', true),
        OutputFormat::Minimal => write_delimited(rows, b'\t', false),
    }
}

/// Prints a single serializable result as pretty JSON.
pub fn print_json_value<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

fn print_table<T: Tabled>(rows: &[T]) {
    if rows.is_empty() {
        println!("(no rows)");
        return;
    }
    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{table}");
}

fn write_delimited<T: Serialize>(rows: &[T], delimiter: u8, headers: bool) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(headers)
        .from_writer(std::io::stdout());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Formats a fraction as a percentage, e.g. `0.1234` as `12.34%`.
pub fn format_percent(value: f64) -> String {
    if value.is_nan() {
        return "n/a".to_string();
    }
    format!("{:.2}%", value * 100.0)
}

/// Formats a value that may be undefined.
pub fn format_number(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "n/a".to_string();
    }
    format!("{value:.precision$}")
}

/// Confirms a completed action on stdout.
pub fn print_success(message: &str) {
    println!("{} {message}", "✓".green());
}

/// Reports a problem on stderr.
pub fn print_warning(message: &str) {
    eprintln!("{} {message}", "⚠".yellow());
}

/// Prints a neutral notice on stdout.
pub fn print_info(message: &str) {
    println!("{} {message}", "ℹ".blue());
}

/// Underlined section title.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// A labelled value in a two-column summary.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    /// Label shown in the first column.
    #[tabled(rename = "Metric")]
    pub key: String,
    /// Formatted value.
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Pairs a label with an already formatted value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Number with fixed precision, `n/a` when undefined.
    pub fn from_number(key: impl Into<String>, value: f64, precision: usize) -> Self {
        Self::new(key, format_number(value, precision))
    }

    /// Fraction rendered as a percentage.
    pub fn from_percent(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, format_percent(value))
    }
}
