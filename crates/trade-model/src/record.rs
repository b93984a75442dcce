use serde::{Deserialize, Serialize};

use crate::period::TemporalKey;

/// Header of the period label column in every trade report.
pub const TIME_COLUMN: &str = "Time";

/// Header of the partner country column in every trade report.
pub const COUNTRY_COLUMN: &str = "Country";

/// One line item of a raw trade report, reduced to the columns the pipeline reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTradeRecord {
    /// 1-based data row within the source artifact.
    pub row: usize,
    pub time: String,
    pub country: String,
    /// Value cell as written in the report, e.g. `"1,234,567"`.
    pub value: String,
}

/// A raw record with its value parsed and its period resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Period label as reported, kept verbatim.
    pub time: String,
    pub key: TemporalKey,
    pub country: String,
    pub value: f64,
}
