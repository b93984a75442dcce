//! Conversion of pipeline rows into polars frames.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};

use trade_model::{COUNTRY_COLUMN, FACT_COLUMNS, NormalizedRecord, TIME_COLUMN, TradeFactRow};

/// Period columns shared by the fact table and the harmonized side files.
const PERIOD_COLUMNS: [&str; 5] = [TIME_COLUMN, "Date", "Year", "Month", "Month_Num"];

fn text_column<'a>(name: &str, values: impl Iterator<Item = &'a str>) -> Column {
    Series::new(name.into(), values.collect::<Vec<&str>>()).into_column()
}

fn float_column(name: &str, values: impl Iterator<Item = Option<f64>>) -> Column {
    Series::new(name.into(), values.collect::<Vec<Option<f64>>>()).into_column()
}

/// Builds the fact table frame with the columns of [`FACT_COLUMNS`], in order.
///
/// Missing indicators become nulls; infinite and NaN ratios are kept as is.
pub fn fact_frame(rows: &[TradeFactRow]) -> PolarsResult<DataFrame> {
    let [
        time,
        date,
        year,
        month,
        month_num,
        country,
        exports,
        imports,
        balance,
        volume,
        ratio,
        export_share,
        import_share,
        rca,
    ] = FACT_COLUMNS;
    DataFrame::new(vec![
        text_column(time, rows.iter().map(|r| r.time.as_str())),
        text_column(date, rows.iter().map(|r| r.key.date.as_str())),
        text_column(year, rows.iter().map(|r| r.key.year.as_str())),
        text_column(month, rows.iter().map(|r| r.key.month.as_str())),
        text_column(month_num, rows.iter().map(|r| r.key.month_ordinal.as_str())),
        text_column(country, rows.iter().map(|r| r.country.as_str())),
        float_column(exports, rows.iter().map(|r| r.exports)),
        float_column(imports, rows.iter().map(|r| r.imports)),
        float_column(balance, rows.iter().map(|r| r.trade_balance)),
        float_column(volume, rows.iter().map(|r| r.trade_volume)),
        float_column(ratio, rows.iter().map(|r| r.export_import_ratio)),
        float_column(export_share, rows.iter().map(|r| r.export_share)),
        float_column(import_share, rows.iter().map(|r| r.import_share)),
        float_column(rca, rows.iter().map(|r| r.rca_index)),
    ])
}

/// Builds the harmonized frame for one side: the period columns, `Country`
/// and the parsed value under `value_header`.
pub fn normalized_frame(records: &[NormalizedRecord], value_header: &str) -> PolarsResult<DataFrame> {
    let [time, date, year, month, month_num] = PERIOD_COLUMNS;
    DataFrame::new(vec![
        text_column(time, records.iter().map(|r| r.time.as_str())),
        text_column(date, records.iter().map(|r| r.key.date.as_str())),
        text_column(year, records.iter().map(|r| r.key.year.as_str())),
        text_column(month, records.iter().map(|r| r.key.month.as_str())),
        text_column(month_num, records.iter().map(|r| r.key.month_ordinal.as_str())),
        text_column(COUNTRY_COLUMN, records.iter().map(|r| r.country.as_str())),
        float_column(value_header, records.iter().map(|r| Some(r.value))),
    ])
}
