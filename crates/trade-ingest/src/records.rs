//! Projection of raw tables onto the trade record schema.

use std::path::Path;

use tracing::debug;

use trade_model::{
    COUNTRY_COLUMN, RawTradeRecord, Result, SourceSpec, TIME_COLUMN, TradeError,
};

use crate::csv_table::{RawTable, read_csv_table};

/// Extracts Time, Country and the side's value column from `table`.
///
/// Every other column is dropped. A missing required column is a
/// [`TradeError::Schema`] and nothing is extracted.
pub fn extract_records(table: &RawTable, spec: &SourceSpec) -> Result<Vec<RawTradeRecord>> {
    let time_idx = require_column(table, spec, TIME_COLUMN)?;
    let country_idx = require_column(table, spec, COUNTRY_COLUMN)?;
    let value_idx = require_column(table, spec, &spec.value_column)?;

    let dropped: Vec<&str> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| ![time_idx, country_idx, value_idx].contains(idx))
        .map(|(_, header)| header.as_str())
        .collect();
    if !dropped.is_empty() {
        debug!(
            artifact = %spec.artifact,
            flow = %spec.flow,
            dropped = ?dropped,
            "dropping extra columns"
        );
    }

    let records = table
        .rows
        .iter()
        .map(|row| RawTradeRecord {
            row: row.number,
            time: cell(&row.cells, time_idx),
            country: cell(&row.cells, country_idx),
            value: cell(&row.cells, value_idx),
        })
        .collect();
    Ok(records)
}

/// Reads `path` and extracts the records described by `spec`.
pub fn load_trade_records(path: &Path, spec: &SourceSpec) -> Result<Vec<RawTradeRecord>> {
    let table = read_csv_table(path)?;
    extract_records(&table, spec)
}

fn require_column(table: &RawTable, spec: &SourceSpec, column: &str) -> Result<usize> {
    table
        .column_index(column)
        .ok_or_else(|| TradeError::Schema {
            artifact: spec.artifact.clone(),
            column: column.to_string(),
            found: describe_headers(&table.headers),
        })
}

fn describe_headers(headers: &[String]) -> String {
    if headers.is_empty() {
        return "no header row".to_string();
    }
    headers
        .iter()
        .map(|header| format!("'{header}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn cell(row: &[String], idx: usize) -> String {
    row.get(idx).cloned().unwrap_or_default()
}
