use std::path::PathBuf;

use anyhow::Result;

use trade_cli::pipeline::{
    CatalogueFormat, HarmonizeRequest, MetricsRequest, SideInput, default_catalogue_path,
    export_catalogue, run_harmonize, run_metrics,
};
use trade_cli::types::{HarmonizeResult, MetricsResult};
use trade_model::{DuplicateKeyPolicy, PeriodMode, ProcessingOptions, TradeFlow};

use crate::cli::{CatalogueArgs, HarmonizeArgs, MetricsArgs, ProcessingArgs};

/// Map the shared processing flags onto pipeline options.
fn processing_options(args: ProcessingArgs) -> ProcessingOptions {
    ProcessingOptions::default()
        .with_period_mode(if args.strict_periods {
            PeriodMode::Strict
        } else {
            PeriodMode::Lenient
        })
        .with_duplicate_keys(if args.allow_duplicate_keys {
            DuplicateKeyPolicy::Allow
        } else {
            DuplicateKeyPolicy::Reject
        })
}

pub fn run_metrics_command(args: &MetricsArgs) -> Result<MetricsResult> {
    let request = MetricsRequest {
        exports: SideInput::new(TradeFlow::Exports, &args.exports)
            .with_value_column(args.exports_value_column.clone()),
        imports: SideInput::new(TradeFlow::Imports, &args.imports)
            .with_value_column(args.imports_value_column.clone()),
        output: args.output.clone(),
        manifest: args.manifest.clone(),
        dry_run: args.dry_run,
        options: processing_options(args.processing),
    };
    run_metrics(&request)
}

pub fn run_harmonize_command(args: &HarmonizeArgs) -> Result<HarmonizeResult> {
    let request = HarmonizeRequest {
        input: SideInput::new(args.flow.into(), &args.input)
            .with_value_column(args.value_column.clone()),
        output: args.output.clone(),
        value_header: args.value_header.clone(),
        options: processing_options(args.processing),
    };
    run_harmonize(&request)
}

pub fn run_catalogue_command(args: &CatalogueArgs) -> Result<PathBuf> {
    let format: CatalogueFormat = args.format.into();
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| default_catalogue_path(format));
    export_catalogue(&path, format)?;
    Ok(path)
}
