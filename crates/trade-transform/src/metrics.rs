//! Trade metrics engine.
//!
//! Joins the normalized exports and imports of a run into one fact row per
//! (period, country) and derives the trade indicators:
//!
//! - `Trade_Balance = Exports - Imports`
//! - `Trade_Volume = Exports + Imports`
//! - `Export_Import_Ratio = Exports / Imports`
//! - `Export_Share`/`Import_Share`: the row's value over the total of its
//!   side for rows with the same `Time` label
//! - `RCA_Index = Export_Share / Import_Share`
//!
//! A side without a record for a key leaves its column missing, and every
//! indicator that reads a missing operand is missing too. Divisions follow
//! IEEE semantics: `x / 0` is infinite and `0 / 0` is NaN. No row is dropped.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use tracing::{debug, info};

use trade_model::{
    DuplicateKeyPolicy, NormalizedRecord, ProcessingOptions, Result, SourceSpec, TradeError,
    TradeFactRow,
};

/// Composite join key. `Month_Num` is carried but not compared, since it
/// follows from `Month`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct JoinKey<'a> {
    time: &'a str,
    date: &'a str,
    year: &'a str,
    month: &'a str,
    country: &'a str,
}

impl<'a> JoinKey<'a> {
    fn of(record: &'a NormalizedRecord) -> Self {
        Self {
            time: &record.time,
            date: &record.key.date,
            year: &record.key.year,
            month: &record.key.month,
            country: &record.country,
        }
    }
}

/// Builds the fact table from one normalized set per side.
///
/// `export_spec` and `import_spec` name the artifacts in duplicate-key errors.
/// Rows come back sorted by country, year, month ordinal and period label.
pub fn build_fact_table(
    exports: &[NormalizedRecord],
    imports: &[NormalizedRecord],
    export_spec: &SourceSpec,
    import_spec: &SourceSpec,
    options: &ProcessingOptions,
) -> Result<Vec<TradeFactRow>> {
    let start = Instant::now();
    if options.duplicate_keys == DuplicateKeyPolicy::Reject {
        ensure_unique_keys(exports, export_spec)?;
        ensure_unique_keys(imports, import_spec)?;
    }

    let mut rows = outer_join(exports, imports);
    for row in &mut rows {
        derive_pairwise(row);
    }
    apply_period_shares(&mut rows);
    rows.sort_by(|a, b| {
        (&a.country, &a.key.year, &a.key.month_ordinal, &a.time).cmp(&(
            &b.country,
            &b.key.year,
            &b.key.month_ordinal,
            &b.time,
        ))
    });

    let exports_only = rows.iter().filter(|row| row.imports.is_none()).count();
    let imports_only = rows.iter().filter(|row| row.exports.is_none()).count();
    info!(
        row_count = rows.len(),
        exports_only,
        imports_only,
        duration_ms = start.elapsed().as_millis(),
        "metrics complete"
    );
    Ok(rows)
}

fn ensure_unique_keys(records: &[NormalizedRecord], spec: &SourceSpec) -> Result<()> {
    let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for record in records {
        *counts
            .entry((record.time.as_str(), record.country.as_str()))
            .or_insert(0) += 1;
    }
    match counts.into_iter().find(|(_, count)| *count > 1) {
        Some(((time, country), count)) => Err(TradeError::DuplicateKey {
            artifact: spec.artifact.clone(),
            time: time.to_string(),
            country: country.to_string(),
            count,
        }),
        None => Ok(()),
    }
}

fn group_by_key(records: &[NormalizedRecord]) -> BTreeMap<JoinKey<'_>, Vec<&NormalizedRecord>> {
    let mut groups: BTreeMap<JoinKey<'_>, Vec<&NormalizedRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(JoinKey::of(record)).or_default().push(record);
    }
    groups
}

/// Full outer join. A key with `m` export and `n` import records yields
/// `m * n` rows; a key on one side only yields one row per record.
fn outer_join(exports: &[NormalizedRecord], imports: &[NormalizedRecord]) -> Vec<TradeFactRow> {
    let export_groups = group_by_key(exports);
    let import_groups = group_by_key(imports);
    let keys: BTreeSet<&JoinKey<'_>> = export_groups.keys().chain(import_groups.keys()).collect();

    let mut rows = Vec::with_capacity(keys.len());
    for key in keys {
        let left = export_groups.get(key).map(Vec::as_slice).unwrap_or_default();
        let right = import_groups.get(key).map(Vec::as_slice).unwrap_or_default();
        match (left.is_empty(), right.is_empty()) {
            (false, false) => {
                for export in left {
                    for import in right {
                        rows.push(fact_row(export, Some(export.value), Some(import.value)));
                    }
                }
            }
            (false, true) => {
                rows.extend(left.iter().map(|export| fact_row(export, Some(export.value), None)));
            }
            (true, false) => {
                rows.extend(right.iter().map(|import| fact_row(import, None, Some(import.value))));
            }
            (true, true) => {}
        }
    }
    debug!(
        export_keys = export_groups.len(),
        import_keys = import_groups.len(),
        joined_rows = rows.len(),
        "outer join"
    );
    rows
}

fn fact_row(source: &NormalizedRecord, exports: Option<f64>, imports: Option<f64>) -> TradeFactRow {
    TradeFactRow {
        time: source.time.clone(),
        key: source.key.clone(),
        country: source.country.clone(),
        exports,
        imports,
        trade_balance: None,
        trade_volume: None,
        export_import_ratio: None,
        export_share: None,
        import_share: None,
        rca_index: None,
    }
}

/// Applies `op` when both operands are present.
fn combine(a: Option<f64>, b: Option<f64>, op: impl Fn(f64, f64) -> f64) -> Option<f64> {
    a.zip(b).map(|(a, b)| op(a, b))
}

fn derive_pairwise(row: &mut TradeFactRow) {
    row.trade_balance = combine(row.exports, row.imports, |e, i| e - i);
    row.trade_volume = combine(row.exports, row.imports, |e, i| e + i);
    row.export_import_ratio = combine(row.exports, row.imports, |e, i| e / i);
}

/// Fills the share columns and the RCA index.
///
/// Totals are grouped by the full `Time` label, so monthly and annual rows
/// of the same year never share a denominator. Missing values are left out of
/// the totals.
fn apply_period_shares(rows: &mut [TradeFactRow]) {
    let mut totals: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    for row in rows.iter() {
        let entry = totals.entry(row.time.clone()).or_insert((0.0, 0.0));
        entry.0 += row.exports.unwrap_or(0.0);
        entry.1 += row.imports.unwrap_or(0.0);
    }
    for row in rows.iter_mut() {
        let (export_total, import_total) = totals.get(&row.time).copied().unwrap_or((0.0, 0.0));
        row.export_share = row.exports.map(|value| value / export_total);
        row.import_share = row.imports.map(|value| value / import_total);
        row.rca_index = combine(row.export_share, row.import_share, |e, i| e / i);
    }
}
