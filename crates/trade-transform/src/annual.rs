//! Annual view of the fact table, as consumed by trend charts.

use std::collections::BTreeMap;

use trade_model::TradeFactRow;

/// One year of a country's annual indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnualPoint {
    pub year: String,
    pub trade_balance: Option<f64>,
    pub export_import_ratio: Option<f64>,
    pub rca_index: Option<f64>,
}

/// Annual indicators for one country, in year order.
#[derive(Debug, Clone, PartialEq)]
pub struct CountrySeries {
    pub country: String,
    pub points: Vec<AnnualPoint>,
}

/// Keeps `Month = "Annual"` rows and groups them per country.
///
/// Non-finite ratios are passed through; plotting code decides how to show them.
pub fn annual_series(rows: &[TradeFactRow]) -> Vec<CountrySeries> {
    let mut by_country: BTreeMap<&str, Vec<AnnualPoint>> = BTreeMap::new();
    for row in rows.iter().filter(|row| row.key.is_annual()) {
        by_country
            .entry(row.country.as_str())
            .or_default()
            .push(AnnualPoint {
                year: row.key.year.clone(),
                trade_balance: row.trade_balance,
                export_import_ratio: row.export_import_ratio,
                rca_index: row.rca_index,
            });
    }
    by_country
        .into_iter()
        .map(|(country, mut points)| {
            points.sort_by(|a, b| a.year.cmp(&b.year));
            CountrySeries {
                country: country.to_string(),
                points,
            }
        })
        .collect()
}
