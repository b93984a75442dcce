//! Numeric normalization utilities.

/// Parses a report value such as `"1,234,567.89"`.
///
/// Thousands separators are removed before parsing. Returns `None` for empty
/// cells, non-numeric text and non-finite results; callers treat `None` as a
/// fatal parse error rather than a zero.
pub fn parse_trade_value(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|ch| *ch != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}
