use std::path::PathBuf;

use trade_model::{TradeFactRow, TradeFlow};

/// One input report of a run.
#[derive(Debug, Clone)]
pub struct SideSummary {
    pub flow: TradeFlow,
    pub path: PathBuf,
    pub value_column: String,
    pub records: usize,
}

#[derive(Debug)]
pub struct MetricsResult {
    pub exports: SideSummary,
    pub imports: SideSummary,
    pub rows: Vec<TradeFactRow>,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
}

impl MetricsResult {
    pub fn singular_ratio_rows(&self) -> usize {
        self.rows.iter().filter(|row| row.has_singular_ratio()).count()
    }

    pub fn singular_rca_rows(&self) -> usize {
        self.rows.iter().filter(|row| row.has_singular_rca()).count()
    }
}

#[derive(Debug)]
pub struct HarmonizeResult {
    pub side: SideSummary,
    pub output: PathBuf,
}
