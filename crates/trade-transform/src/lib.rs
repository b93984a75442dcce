//! Trade report transformation.
//!
//! - **normalization**: period labels and monetary strings
//! - **harmonize**: raw report records to normalized records for one side
//! - **metrics**: exports/imports outer join and derived indicators
//! - **annual**: per-country annual series from the fact table

pub mod annual;
pub mod harmonize;
pub mod metrics;
pub mod normalization;

pub use annual::{AnnualPoint, CountrySeries, annual_series};
pub use harmonize::harmonize;
pub use metrics::build_fact_table;
pub use normalization::{
    PeriodError, PeriodResolution, normalize_period, parse_trade_value, resolve_period,
};
