//! Record harmonization: one raw report side to normalized records.

use std::time::Instant;

use tracing::{info, warn};

use trade_model::{
    NormalizedRecord, ProcessingOptions, RawTradeRecord, Result, SourceSpec, TradeError,
};

use crate::normalization::{PeriodError, parse_trade_value, resolve_period};

/// Parses values and resolves periods for every record of one side.
///
/// The input is left untouched. The first unparseable value or unresolvable
/// period aborts the whole side; a record is never skipped or zeroed, since
/// that would silently change the per-period totals behind the share columns.
pub fn harmonize(
    records: &[RawTradeRecord],
    spec: &SourceSpec,
    options: &ProcessingOptions,
) -> Result<Vec<NormalizedRecord>> {
    let start = Instant::now();
    let mut normalized = Vec::with_capacity(records.len());
    let mut fallbacks = 0usize;
    for record in records {
        let value = parse_trade_value(&record.value).ok_or_else(|| TradeError::ValueParse {
            artifact: spec.artifact.clone(),
            row: record.row,
            column: spec.value_column.clone(),
            value: record.value.clone(),
        })?;
        let resolution =
            resolve_period(&record.time, options.period_mode).map_err(|error| match error {
                PeriodError::UnknownMonth { token } => TradeError::PeriodParse {
                    artifact: spec.artifact.clone(),
                    row: record.row,
                    label: record.time.clone(),
                    token,
                },
                PeriodError::NotCalendarDate => TradeError::InvalidPeriod {
                    artifact: spec.artifact.clone(),
                    row: record.row,
                    label: record.time.clone(),
                },
            })?;
        if let Some(token) = &resolution.unresolved_token {
            fallbacks += 1;
            warn!(
                artifact = %spec.artifact,
                row = record.row,
                label = %record.time,
                token = %token,
                "unrecognized month token, treating period as Annual"
            );
        }
        normalized.push(NormalizedRecord {
            time: record.time.clone(),
            key: resolution.key,
            country: record.country.clone(),
            value,
        });
    }
    info!(
        flow = %spec.flow,
        artifact = %spec.artifact,
        record_count = normalized.len(),
        annual_fallbacks = fallbacks,
        duration_ms = start.elapsed().as_millis(),
        "harmonize complete"
    );
    Ok(normalized)
}
