//! CLI argument definitions for the trade metrics tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use trade_cli::pipeline::CatalogueFormat;
use trade_model::TradeFlow;

#[derive(Parser)]
#[command(
    name = "trade-metrics",
    version,
    about = "Trade metrics - Join exports and imports reports into a trade fact table",
    long_about = "Join an exports report and an imports report into one fact table per\n\
                  (period, country) with trade balance, volume, export/import ratio,\n\
                  trade shares and revealed comparative advantage."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the trade fact table from an exports and an imports report.
    Metrics(MetricsArgs),

    /// Normalize one report into its processed side file.
    Harmonize(HarmonizeArgs),

    /// Export the strategic HTS code reference sheet.
    Catalogue(CatalogueArgs),
}

/// Flags shared by every command that reads trade reports.
#[derive(Args, Clone, Copy)]
pub struct ProcessingArgs {
    /// Require exact month names and valid calendar periods.
    ///
    /// By default a month token outside the calendar is read as an annual
    /// period and logged as a warning.
    #[arg(long = "strict-periods")]
    pub strict_periods: bool,

    /// Keep repeated (Time, Country) records and pair them in the join.
    ///
    /// By default a side that reports the same period and country twice
    /// aborts the run.
    #[arg(long = "allow-duplicate-keys")]
    pub allow_duplicate_keys: bool,
}

#[derive(Parser)]
pub struct MetricsArgs {
    /// Exports report (CSV with Time, Country and a value column).
    #[arg(value_name = "EXPORTS")]
    pub exports: PathBuf,

    /// Imports report (CSV with Time, Country and a value column).
    #[arg(value_name = "IMPORTS")]
    pub imports: PathBuf,

    /// Fact table destination.
    #[arg(long = "output", value_name = "PATH", default_value = "trade_metrics.csv")]
    pub output: PathBuf,

    /// Also write a JSON run manifest to this path.
    #[arg(long = "manifest", value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Run every stage and print the summary without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Value column of the exports report.
    #[arg(long = "exports-value-column", value_name = "NAME")]
    pub exports_value_column: Option<String>,

    /// Value column of the imports report.
    #[arg(long = "imports-value-column", value_name = "NAME")]
    pub imports_value_column: Option<String>,

    #[command(flatten)]
    pub processing: ProcessingArgs,
}

#[derive(Parser)]
pub struct HarmonizeArgs {
    /// Raw report to normalize.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Which side of the ledger the report describes.
    #[arg(long = "flow", value_enum)]
    pub flow: FlowArg,

    /// Destination (default: <INPUT stem>_processed.csv next to the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Value column of the raw report (default depends on --flow).
    #[arg(long = "value-column", value_name = "NAME")]
    pub value_column: Option<String>,

    /// Header of the value column in the processed file.
    #[arg(long = "value-header", value_name = "NAME", default_value = "Value ($US)")]
    pub value_header: String,

    #[command(flatten)]
    pub processing: ProcessingArgs,
}

#[derive(Parser)]
pub struct CatalogueArgs {
    /// Destination (default: strategic_hts_codes_reference.<format>).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Reference sheet format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: CatalogueFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FlowArg {
    Exports,
    Imports,
}

impl From<FlowArg> for TradeFlow {
    fn from(flow: FlowArg) -> Self {
        match flow {
            FlowArg::Exports => TradeFlow::Exports,
            FlowArg::Imports => TradeFlow::Imports,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CatalogueFormatArg {
    Csv,
    Json,
}

impl From<CatalogueFormatArg> for CatalogueFormat {
    fn from(format: CatalogueFormatArg) -> Self {
        match format {
            CatalogueFormatArg::Csv => CatalogueFormat::Csv,
            CatalogueFormatArg::Json => CatalogueFormat::Json,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
