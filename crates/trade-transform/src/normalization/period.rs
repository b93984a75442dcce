//! Reporting period normalization.
//!
//! Trade reports label each line with a free-form period such as
//! `"March 2021"` or `"2021"`. The year is the first run of four digits; the
//! month is the word directly before a whitespace-separated four-digit year.
//! A label without such a word is an annual period. A label without any
//! four-digit run keeps the whole label as its year.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use trade_model::{PeriodMode, TemporalKey, canonical_month};

static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{4})").expect("valid year pattern"));

static MONTH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s+[0-9]{4}").expect("valid month pattern"));

/// Why a period label could not be resolved in strict mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    #[error("unknown month '{token}'")]
    UnknownMonth { token: String },
    #[error("period does not form a calendar date")]
    NotCalendarDate,
}

/// A resolved period plus the token that was discarded, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodResolution {
    pub key: TemporalKey,
    /// Month-position token that matched no calendar month and was read as
    /// `Annual`. Only set in lenient mode.
    pub unresolved_token: Option<String>,
}

/// Normalizes a period label with the lenient rules.
///
/// `"March 2021"` gives `2021-03-01`, `"2021"` gives an annual key, and
/// `"Blah 2021"` also gives an annual key (see [`resolve_period`]).
pub fn normalize_period(label: &str) -> TemporalKey {
    resolve_lenient(label).key
}

/// Normalizes a period label under `mode`.
///
/// Lenient mode matches month names ignoring case and reads an unknown token
/// as `Annual`, reporting it in [`PeriodResolution::unresolved_token`]. A label
/// such as `"Blah 2021"` therefore aliases the true annual record for 2021.
///
/// Strict mode requires an exact month name and a valid calendar date.
pub fn resolve_period(label: &str, mode: PeriodMode) -> Result<PeriodResolution, PeriodError> {
    match mode {
        PeriodMode::Lenient => Ok(resolve_lenient(label)),
        PeriodMode::Strict => resolve_strict(label),
    }
}

fn resolve_lenient(label: &str) -> PeriodResolution {
    let year = extract_year(label);
    match extract_month_token(label) {
        None => PeriodResolution {
            key: TemporalKey::annual(year),
            unresolved_token: None,
        },
        Some(token) => match canonical_month(token) {
            Some(month) => PeriodResolution {
                key: monthly_or_annual(year, month),
                unresolved_token: None,
            },
            None => PeriodResolution {
                key: TemporalKey::annual(year),
                unresolved_token: Some(token.to_string()),
            },
        },
    }
}

fn resolve_strict(label: &str) -> Result<PeriodResolution, PeriodError> {
    let year = extract_year(label);
    let key = match extract_month_token(label) {
        None => TemporalKey::annual(year),
        Some(token) => {
            TemporalKey::from_parts(year, token).ok_or_else(|| PeriodError::UnknownMonth {
                token: token.to_string(),
            })?
        }
    };
    if key.calendar_date().is_none() {
        return Err(PeriodError::NotCalendarDate);
    }
    Ok(PeriodResolution {
        key,
        unresolved_token: None,
    })
}

fn extract_year(label: &str) -> String {
    YEAR_PATTERN
        .captures(label)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| label.to_string(), |m| m.as_str().to_string())
}

fn extract_month_token(label: &str) -> Option<&str> {
    MONTH_PATTERN
        .captures(label)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn monthly_or_annual(year: String, month: &str) -> TemporalKey {
    // canonical_month only returns names from the ordinal table
    TemporalKey::from_parts(year.clone(), month).unwrap_or_else(|| TemporalKey::annual(year))
}
