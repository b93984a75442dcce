//! Canonical temporal keys for trade reporting periods.
//!
//! A reporting period is either a calendar month ("March 2021") or a whole
//! year ("2021"). Both are reduced to a [`TemporalKey`] so that exports and
//! imports reported for the same period line up at the join step.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Month label used for whole-year periods.
pub const ANNUAL: &str = "Annual";

/// Ordinal used for whole-year periods.
pub const ANNUAL_ORDINAL: &str = "00";

/// Calendar month names with their two-digit ordinals, plus the annual marker.
pub const MONTH_ORDINALS: [(&str, &str); 13] = [
    ("January", "01"),
    ("February", "02"),
    ("March", "03"),
    ("April", "04"),
    ("May", "05"),
    ("June", "06"),
    ("July", "07"),
    ("August", "08"),
    ("September", "09"),
    ("October", "10"),
    ("November", "11"),
    ("December", "12"),
    (ANNUAL, ANNUAL_ORDINAL),
];

static ORDINAL_BY_MONTH: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| MONTH_ORDINALS.iter().copied().collect());

/// Looks up the two-digit ordinal for an exact month name.
///
/// Returns `None` for anything outside the calendar table; callers decide
/// whether that is an error.
pub fn month_ordinal(name: &str) -> Option<&'static str> {
    ORDINAL_BY_MONTH.get(name).copied()
}

/// Resolves a month name ignoring case and returns its canonical spelling.
pub fn canonical_month(name: &str) -> Option<&'static str> {
    MONTH_ORDINALS
        .iter()
        .find(|(month, _)| month.eq_ignore_ascii_case(name))
        .map(|(month, _)| *month)
}

/// Structured key for a reporting period.
///
/// `month_ordinal` is `"00"` exactly when `month` is [`ANNUAL`]; `date` is the
/// bare year for annual keys and `YYYY-MM-01` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TemporalKey {
    pub year: String,
    pub month: String,
    pub month_ordinal: String,
    pub date: String,
}

impl TemporalKey {
    /// Builds a key for a whole-year period.
    pub fn annual(year: impl Into<String>) -> Self {
        let year = year.into();
        Self {
            date: year.clone(),
            year,
            month: ANNUAL.to_string(),
            month_ordinal: ANNUAL_ORDINAL.to_string(),
        }
    }

    /// Builds a key from a year and an exact month name from [`MONTH_ORDINALS`].
    ///
    /// Returns `None` when the month is not in the calendar table.
    pub fn from_parts(year: impl Into<String>, month: &str) -> Option<Self> {
        let ordinal = month_ordinal(month)?;
        if ordinal == ANNUAL_ORDINAL {
            return Some(Self::annual(year));
        }
        let year = year.into();
        Some(Self {
            date: format!("{year}-{ordinal}-01"),
            year,
            month: month.to_string(),
            month_ordinal: ordinal.to_string(),
        })
    }

    pub fn is_annual(&self) -> bool {
        self.month == ANNUAL
    }

    /// First calendar day of the period (January 1st for annual keys).
    ///
    /// `None` when the year is not numeric, which happens for labels that
    /// carry no four-digit year.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let year: i32 = self.year.parse().ok()?;
        let month: u32 = if self.is_annual() {
            1
        } else {
            self.month_ordinal.parse().ok()?
        };
        NaiveDate::from_ymd_opt(year, month, 1)
    }
}
