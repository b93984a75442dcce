//! JSON run manifest written next to the fact table.

use std::io::Write;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use trade_model::{DuplicateKeyPolicy, PeriodMode, ProcessingOptions, SourceSpec, TradeFactRow};

use crate::error::{OutputError, Result};
use crate::writer::write_atomically;

const MANIFEST_SCHEMA: &str = "trade-metrics.run-manifest";
const MANIFEST_SCHEMA_VERSION: u32 = 1;

/// One input artifact of a run.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestInput {
    pub flow: &'static str,
    pub artifact: String,
    pub value_column: String,
    pub record_count: usize,
}

impl ManifestInput {
    pub fn new(spec: &SourceSpec, record_count: usize) -> Self {
        Self {
            flow: spec.flow.as_str(),
            artifact: spec.artifact.clone(),
            value_column: spec.value_column.clone(),
            record_count,
        }
    }
}

/// Summary of a metrics run.
#[derive(Debug, Clone, Serialize)]
pub struct RunManifest {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub period_mode: PeriodMode,
    pub duplicate_keys: DuplicateKeyPolicy,
    pub inputs: Vec<ManifestInput>,
    pub output: Option<String>,
    pub fact_row_count: usize,
    pub exports_only_rows: usize,
    pub imports_only_rows: usize,
    /// Rows whose `Export_Import_Ratio` is infinite or NaN.
    pub singular_ratio_rows: usize,
    /// Rows whose `RCA_Index` is infinite or NaN.
    pub singular_rca_rows: usize,
}

impl RunManifest {
    pub fn from_run(
        inputs: Vec<ManifestInput>,
        rows: &[TradeFactRow],
        options: &ProcessingOptions,
        output: Option<&Path>,
    ) -> Self {
        Self {
            schema: MANIFEST_SCHEMA,
            schema_version: MANIFEST_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            period_mode: options.period_mode,
            duplicate_keys: options.duplicate_keys,
            inputs,
            output: output.map(|path| path.display().to_string()),
            fact_row_count: rows.len(),
            exports_only_rows: rows.iter().filter(|row| row.imports.is_none()).count(),
            imports_only_rows: rows.iter().filter(|row| row.exports.is_none()).count(),
            singular_ratio_rows: rows.iter().filter(|row| row.has_singular_ratio()).count(),
            singular_rca_rows: rows.iter().filter(|row| row.has_singular_rca()).count(),
        }
    }
}

pub fn write_manifest_json(path: &Path, manifest: &RunManifest) -> Result<()> {
    let json = serde_json::to_string_pretty(manifest)?;
    write_atomically(path, |file| -> Result<()> {
        writeln!(file, "{json}").map_err(|e| OutputError::io(path, e))
    })
}
