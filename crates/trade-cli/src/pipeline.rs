//! Trade metrics pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read each raw report and project Time, Country and Value
//! 2. **Harmonize**: parse values and resolve reporting periods per side
//! 3. **Metrics**: outer join both sides and derive the indicators
//! 4. **Output**: write the fact table and the optional manifest
//!
//! Any failure aborts the run before the output stage, so either every
//! requested artifact is written or none is.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use trade_catalogue::{reference_rows, write_reference_csv, write_reference_json};
use trade_ingest::load_trade_records;
use trade_model::{
    NormalizedRecord, ProcessingOptions, RawTradeRecord, SourceSpec, TradeFactRow, TradeFlow,
};
use trade_output::{
    ManifestInput, RunManifest, fact_frame, normalized_frame, write_atomically, write_frame_csv,
    write_manifest_json,
};
use trade_transform::{build_fact_table, harmonize};

use crate::types::{HarmonizeResult, MetricsResult, SideSummary};

/// A raw report and how to read it.
#[derive(Debug, Clone)]
pub struct SideInput {
    pub path: PathBuf,
    pub spec: SourceSpec,
}

impl SideInput {
    /// Input using the standard value column for `flow`.
    pub fn new(flow: TradeFlow, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let spec = SourceSpec::new(flow, path.display().to_string());
        Self { path, spec }
    }

    #[must_use]
    pub fn with_value_column(mut self, column: Option<String>) -> Self {
        if let Some(column) = column {
            self.spec = self.spec.with_value_column(column);
        }
        self
    }

    fn summary(&self, records: usize) -> SideSummary {
        SideSummary {
            flow: self.spec.flow,
            path: self.path.clone(),
            value_column: self.spec.value_column.clone(),
            records,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricsRequest {
    pub exports: SideInput,
    pub imports: SideInput,
    pub output: PathBuf,
    pub manifest: Option<PathBuf>,
    pub dry_run: bool,
    pub options: ProcessingOptions,
}

#[derive(Debug, Clone)]
pub struct HarmonizeRequest {
    pub input: SideInput,
    pub output: Option<PathBuf>,
    pub value_header: String,
    pub options: ProcessingOptions,
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Read one raw report into records.
pub fn ingest(side: &SideInput) -> Result<Vec<RawTradeRecord>> {
    let span = info_span!("ingest", flow = %side.spec.flow, path = %side.path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let records = load_trade_records(&side.path, &side.spec)
        .with_context(|| format!("ingest {} report", side.spec.flow))?;
    info!(
        flow = %side.spec.flow,
        record_count = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(records)
}

// ============================================================================
// Stage 2: Harmonize
// ============================================================================

/// Parse values and resolve periods for one side.
pub fn harmonize_side(
    side: &SideInput,
    records: &[RawTradeRecord],
    options: &ProcessingOptions,
) -> Result<Vec<NormalizedRecord>> {
    info_span!("harmonize", flow = %side.spec.flow).in_scope(|| {
        harmonize(records, &side.spec, options)
            .with_context(|| format!("harmonize {} report", side.spec.flow))
    })
}

// ============================================================================
// Stage 3: Metrics
// ============================================================================

pub fn derive_metrics(
    exports: &[NormalizedRecord],
    imports: &[NormalizedRecord],
    request: &MetricsRequest,
) -> Result<Vec<TradeFactRow>> {
    info_span!("metrics").in_scope(|| {
        build_fact_table(
            exports,
            imports,
            &request.exports.spec,
            &request.imports.spec,
            &request.options,
        )
        .context("derive trade metrics")
    })
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Written artifacts of the output stage.
#[derive(Debug, Default)]
pub struct OutputResult {
    pub fact_table: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
}

/// Write the fact table and, when requested, the manifest.
///
/// The manifest is only written after the fact table; if it fails, the fact
/// table is removed again.
pub fn output(
    request: &MetricsRequest,
    rows: &[TradeFactRow],
    inputs: Vec<ManifestInput>,
) -> Result<OutputResult> {
    let output_span = info_span!("output", path = %request.output.display());
    let _output_guard = output_span.enter();
    let output_start = Instant::now();

    let mut frame = fact_frame(rows).context("build fact table frame")?;
    let manifest = request.manifest.as_ref().map(|path| {
        (
            path,
            RunManifest::from_run(inputs, rows, &request.options, Some(&request.output)),
        )
    });

    if request.dry_run {
        info!(
            row_count = rows.len(),
            duration_ms = output_start.elapsed().as_millis(),
            "output skipped (dry run)"
        );
        return Ok(OutputResult::default());
    }

    write_frame_csv(&mut frame, &request.output)
        .with_context(|| format!("write fact table {}", request.output.display()))?;
    if let Some((path, manifest)) = &manifest
        && let Err(error) = write_manifest_json(path, manifest)
    {
        if let Err(cleanup) = fs::remove_file(&request.output) {
            warn!(path = %request.output.display(), error = %cleanup, "failed to remove fact table");
        }
        return Err(error).with_context(|| format!("write manifest {}", path.display()));
    }

    info!(
        row_count = rows.len(),
        manifest = manifest.is_some(),
        duration_ms = output_start.elapsed().as_millis(),
        "output complete"
    );
    Ok(OutputResult {
        fact_table: Some(request.output.clone()),
        manifest: manifest.map(|(path, _)| path.clone()),
    })
}

// ============================================================================
// Runs
// ============================================================================

/// Run every stage for one exports report and one imports report.
pub fn run_metrics(request: &MetricsRequest) -> Result<MetricsResult> {
    let run_span = info_span!("metrics_run", dry_run = request.dry_run);
    let _run_guard = run_span.enter();

    let raw_exports = ingest(&request.exports)?;
    let raw_imports = ingest(&request.imports)?;
    let exports = harmonize_side(&request.exports, &raw_exports, &request.options)?;
    let imports = harmonize_side(&request.imports, &raw_imports, &request.options)?;
    let rows = derive_metrics(&exports, &imports, request)?;

    let export_summary = request.exports.summary(exports.len());
    let import_summary = request.imports.summary(imports.len());
    let inputs = vec![
        ManifestInput::new(&request.exports.spec, exports.len()),
        ManifestInput::new(&request.imports.spec, imports.len()),
    ];
    let written = output(request, &rows, inputs)?;

    Ok(MetricsResult {
        exports: export_summary,
        imports: import_summary,
        rows,
        output: written.fact_table,
        manifest: written.manifest,
    })
}

/// Default destination of a processed side file: `<stem>_processed.csv`
/// next to the input.
pub fn default_processed_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    input.with_file_name(format!("{stem}_processed.csv"))
}

/// Normalize one report and write its processed side file.
pub fn run_harmonize(request: &HarmonizeRequest) -> Result<HarmonizeResult> {
    let records = ingest(&request.input)?;
    let normalized = harmonize_side(&request.input, &records, &request.options)?;
    let output = request
        .output
        .clone()
        .unwrap_or_else(|| default_processed_path(&request.input.path));

    info_span!("output", path = %output.display()).in_scope(|| -> Result<()> {
        let mut frame = normalized_frame(&normalized, &request.value_header)
            .context("build processed frame")?;
        write_frame_csv(&mut frame, &output)
            .with_context(|| format!("write processed file {}", output.display()))
    })?;
    info!(
        flow = %request.input.spec.flow,
        record_count = normalized.len(),
        path = %output.display(),
        "harmonize output complete"
    );

    Ok(HarmonizeResult {
        side: request.input.summary(normalized.len()),
        output,
    })
}

// ============================================================================
// Catalogue
// ============================================================================

/// File format of the exported HTS reference sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogueFormat {
    Csv,
    Json,
}

impl CatalogueFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Default destination of the reference sheet in the working directory.
pub fn default_catalogue_path(format: CatalogueFormat) -> PathBuf {
    PathBuf::from(format!(
        "strategic_hts_codes_reference.{}",
        format.extension()
    ))
}

/// Write the HTS reference sheet to `path`.
///
/// The sheet is staged next to `path` and only renamed into place once it is
/// complete.
pub fn export_catalogue(path: &Path, format: CatalogueFormat) -> Result<()> {
    write_atomically(path, |file| -> Result<()> {
        let mut writer = BufWriter::new(file);
        match format {
            CatalogueFormat::Csv => write_reference_csv(&mut writer)?,
            CatalogueFormat::Json => write_reference_json(&mut writer)?,
        }
        writer.flush()?;
        Ok(())
    })
    .with_context(|| format!("write catalogue {}", path.display()))?;
    info!(
        path = %path.display(),
        code_count = reference_rows().len(),
        "catalogue written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processed_path_sits_next_to_input() {
        assert_eq!(
            default_processed_path(Path::new("data/nafta-exports.csv")),
            Path::new("data/nafta-exports_processed.csv")
        );
    }

    #[test]
    fn value_column_override_is_optional() {
        let side = SideInput::new(TradeFlow::Imports, "imports.csv").with_value_column(None);
        assert_eq!(side.spec.value_column, "Customs Value (Gen) ($US)");
        let side = side.with_value_column(Some("General Imports".to_string()));
        assert_eq!(side.spec.value_column, "General Imports");
        assert_eq!(side.spec.artifact, "imports.csv");
    }
}
