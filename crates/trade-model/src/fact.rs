use serde::{Deserialize, Serialize};

use crate::period::TemporalKey;

/// Output columns of the fact table, in order.
pub const FACT_COLUMNS: [&str; 14] = [
    "Time",
    "Date",
    "Year",
    "Month",
    "Month_Num",
    "Country",
    "Exports",
    "Imports",
    "Trade_Balance",
    "Trade_Volume",
    "Export_Import_Ratio",
    "Export_Share",
    "Import_Share",
    "RCA_Index",
];

/// One (period, country) row of the joined trade fact table.
///
/// `None` means the value is missing because a side had no record for the
/// key. Ratios keep IEEE semantics, so a present value may be infinite or NaN
/// when a denominator is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeFactRow {
    pub time: String,
    pub key: TemporalKey,
    pub country: String,
    pub exports: Option<f64>,
    pub imports: Option<f64>,
    pub trade_balance: Option<f64>,
    pub trade_volume: Option<f64>,
    pub export_import_ratio: Option<f64>,
    pub export_share: Option<f64>,
    pub import_share: Option<f64>,
    pub rca_index: Option<f64>,
}

impl TradeFactRow {
    /// True when the export/import ratio is present but not finite.
    pub fn has_singular_ratio(&self) -> bool {
        self.export_import_ratio.is_some_and(|value| !value.is_finite())
    }

    /// True when the RCA index is present but not finite.
    pub fn has_singular_rca(&self) -> bool {
        self.rca_index.is_some_and(|value| !value.is_finite())
    }
}
