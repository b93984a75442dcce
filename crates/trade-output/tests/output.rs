//! Tests for fact table output.

use std::fs;

use trade_model::{
    FACT_COLUMNS, ProcessingOptions, SourceSpec, TemporalKey, TradeFactRow, TradeFlow,
};
use trade_output::{ManifestInput, RunManifest, fact_frame, write_frame_csv, write_manifest_json};

fn row(country: &str, exports: Option<f64>, imports: Option<f64>) -> TradeFactRow {
    let ratio = exports.zip(imports).map(|(e, i)| e / i);
    TradeFactRow {
        time: "2021".to_string(),
        key: TemporalKey::annual("2021"),
        country: country.to_string(),
        exports,
        imports,
        trade_balance: exports.zip(imports).map(|(e, i)| e - i),
        trade_volume: exports.zip(imports).map(|(e, i)| e + i),
        export_import_ratio: ratio,
        export_share: exports.map(|_| 0.5),
        import_share: imports.map(|_| 0.5),
        rca_index: exports.zip(imports).map(|_| 1.0),
    }
}

#[test]
fn fact_frame_has_canonical_columns() {
    let df = fact_frame(&[row("Canada", Some(1000.0), Some(500.0))]).unwrap();
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, FACT_COLUMNS.to_vec());
    assert_eq!(df.height(), 1);
    let balance = df.column("Trade_Balance").unwrap().f64().unwrap();
    assert_eq!(balance.get(0), Some(500.0));
}

#[test]
fn missing_values_are_nulls() {
    let df = fact_frame(&[row("Japan", Some(40.0), None)]).unwrap();
    let imports = df.column("Imports").unwrap().f64().unwrap();
    assert_eq!(imports.get(0), None);
    let ratio = df.column("Export_Import_Ratio").unwrap().f64().unwrap();
    assert_eq!(ratio.get(0), None);
}

#[test]
fn csv_encodes_missing_and_infinite_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("trade_metrics.csv");
    let mut df = fact_frame(&[
        row("Canada", Some(100.0), Some(0.0)),
        row("Japan", Some(40.0), None),
    ])
    .unwrap();
    write_frame_csv(&mut df, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], FACT_COLUMNS.join(","));

    let canada: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(canada[5], "Canada");
    assert_eq!(canada[10], "inf");

    let japan: Vec<&str> = lines[2].split(',').collect();
    assert_eq!(japan[5], "Japan");
    assert_eq!(japan[7], "");
    assert_eq!(japan[10], "");
}

#[test]
fn manifest_counts_singular_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("manifest.json");
    let rows = vec![
        row("Canada", Some(100.0), Some(0.0)),
        row("Japan", Some(40.0), None),
        row("Mexico", Some(10.0), Some(5.0)),
    ];
    let inputs = vec![
        ManifestInput::new(&SourceSpec::new(TradeFlow::Exports, "exports.csv"), 3),
        ManifestInput::new(&SourceSpec::new(TradeFlow::Imports, "imports.csv"), 2),
    ];
    let manifest = RunManifest::from_run(inputs, &rows, &ProcessingOptions::default(), None);
    write_manifest_json(&path, &manifest).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["schema"], "trade-metrics.run-manifest");
    assert_eq!(json["fact_row_count"], 3);
    assert_eq!(json["exports_only_rows"], 1);
    assert_eq!(json["imports_only_rows"], 0);
    assert_eq!(json["singular_ratio_rows"], 1);
    assert_eq!(json["singular_rca_rows"], 0);
    assert_eq!(json["inputs"][1]["value_column"], "Customs Value (Gen) ($US)");
    assert_eq!(json["period_mode"], "Lenient");
}
