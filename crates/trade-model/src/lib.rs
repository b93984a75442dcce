//! Data model for the trade metrics pipeline.

pub mod error;
pub mod fact;
pub mod flow;
pub mod options;
pub mod period;
pub mod record;

pub use error::{Result, TradeError};
pub use fact::{FACT_COLUMNS, TradeFactRow};
pub use flow::TradeFlow;
pub use options::{DuplicateKeyPolicy, PeriodMode, ProcessingOptions, SourceSpec};
pub use period::{
    ANNUAL, ANNUAL_ORDINAL, MONTH_ORDINALS, TemporalKey, canonical_month, month_ordinal,
};
pub use record::{COUNTRY_COLUMN, NormalizedRecord, RawTradeRecord, TIME_COLUMN};
