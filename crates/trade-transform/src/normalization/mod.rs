//! Normalization functions for raw trade report cells.
//!
//! - **period**: free-form period labels to [`trade_model::TemporalKey`]
//! - **numeric**: comma-grouped monetary strings to `f64`

pub mod numeric;
pub mod period;

pub use numeric::parse_trade_value;
pub use period::{PeriodError, PeriodResolution, normalize_period, resolve_period};
