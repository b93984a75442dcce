//! Integration tests for the pipeline module.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use trade_cli::pipeline::{
    CatalogueFormat, HarmonizeRequest, MetricsRequest, SideInput, export_catalogue,
    run_harmonize, run_metrics,
};
use trade_model::{ProcessingOptions, TradeFlow};

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

fn request(dir: &TempDir, exports: &str, imports: &str) -> MetricsRequest {
    MetricsRequest {
        exports: SideInput::new(TradeFlow::Exports, write_file(dir, "exports.csv", exports)),
        imports: SideInput::new(TradeFlow::Imports, write_file(dir, "imports.csv", imports)),
        output: dir.path().join("out").join("trade_metrics.csv"),
        manifest: Some(dir.path().join("out").join("manifest.json")),
        dry_run: false,
        options: ProcessingOptions::default(),
    }
}

/// Reads the written fact table into (header, rows of cells).
fn read_table(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let text = fs::read_to_string(path).expect("read output");
    let mut lines = text.lines();
    let header = lines
        .next()
        .expect("header")
        .split(',')
        .map(String::from)
        .collect();
    let rows = lines
        .map(|line| line.split(',').map(String::from).collect())
        .collect();
    (header, rows)
}

#[test]
fn single_country_report_end_to_end() {
    let dir = TempDir::new().expect("temp dir");
    let request = request(
        &dir,
        "Time,Country,Value ($US)\n2021,Canada,\"1,000\"\n",
        "Time,Country,Customs Value (Gen) ($US),\n2021,Canada,500,\n",
    );
    let result = run_metrics(&request).expect("run metrics");

    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.exports.records, 1);
    assert_eq!(result.output.as_ref(), Some(&request.output));

    let (header, rows) = read_table(&request.output);
    assert_eq!(header[0], "Time");
    assert_eq!(header[13], "RCA_Index");
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(&row[..6], ["2021", "2021", "2021", "Annual", "00", "Canada"]);
    let numbers: Vec<f64> = row[6..].iter().map(|cell| cell.parse().unwrap()).collect();
    assert_eq!(numbers, vec![1000.0, 500.0, 500.0, 1500.0, 2.0, 1.0, 1.0, 1.0]);

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(request.manifest.as_ref().unwrap()).unwrap())
            .unwrap();
    assert_eq!(manifest["fact_row_count"], 1);
    assert_eq!(manifest["inputs"][0]["flow"], "exports");
}

#[test]
fn bad_value_writes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let request = request(
        &dir,
        "Time,Country,Value ($US)\n2021,Canada,abc\n",
        "Time,Country,Customs Value (Gen) ($US)\n2021,Canada,500\n",
    );
    let error = run_metrics(&request).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("harmonize exports report"));
    assert!(message.contains("row 1"));
    assert!(message.contains("'abc'"));
    assert!(!request.output.exists());
    assert!(!request.manifest.as_ref().unwrap().exists());
}

#[test]
fn bad_value_after_blank_row_reports_its_file_row() {
    let dir = TempDir::new().expect("temp dir");
    let request = request(
        &dir,
        "Time,Country,Value ($US)\n2021,Canada,1\n,,\n2021,Mexico,abc\n",
        "Time,Country,Customs Value (Gen) ($US)\n2021,Canada,500\n",
    );
    let message = format!("{:#}", run_metrics(&request).unwrap_err());
    assert!(message.contains("row 3"), "{message}");
    assert!(message.contains("'abc'"));
}

#[test]
fn missing_country_column_is_schema_error() {
    let dir = TempDir::new().expect("temp dir");
    let request = request(
        &dir,
        "Time,Value ($US)\n2021,1000\n",
        "Time,Country,Customs Value (Gen) ($US)\n2021,Canada,500\n",
    );
    let error = run_metrics(&request).unwrap_err();
    assert!(format!("{error:#}").contains("Country"));
    assert!(!request.output.exists());
}

#[test]
fn dry_run_computes_without_writing() {
    let dir = TempDir::new().expect("temp dir");
    let mut request = request(
        &dir,
        "Time,Country,Value ($US)\n2021,Canada,100\n2021,Japan,40\n",
        "Time,Country,Customs Value (Gen) ($US)\n2021,Canada,0\n",
    );
    request.dry_run = true;
    let result = run_metrics(&request).expect("dry run");

    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.singular_ratio_rows(), 1);
    assert!(result.output.is_none());
    assert!(!request.output.exists());
}

#[test]
fn one_sided_rows_have_empty_cells() {
    let dir = TempDir::new().expect("temp dir");
    let request = request(
        &dir,
        "Time,Country,Value ($US)\n2021,Japan,40\n",
        "Time,Country,Customs Value (Gen) ($US)\n2021,Germany,20\n",
    );
    run_metrics(&request).expect("run metrics");

    let (_, rows) = read_table(&request.output);
    assert_eq!(rows.len(), 2);
    // Germany sorts before Japan.
    assert_eq!(rows[0][5], "Germany");
    assert_eq!(rows[0][6], "");
    assert_eq!(rows[1][5], "Japan");
    assert_eq!(rows[1][7], "");
    assert_eq!(rows[1][8], "");
}

#[test]
fn harmonize_writes_processed_side_file() {
    let dir = TempDir::new().expect("temp dir");
    let input = SideInput::new(
        TradeFlow::Imports,
        write_file(
            &dir,
            "nafta-imports.csv",
            "Time,Country,Customs Value (Gen) ($US),\nMarch 2021,Mexico,\"21,500\",\n",
        ),
    );
    let request = HarmonizeRequest {
        input,
        output: None,
        value_header: "Value ($US)".to_string(),
        options: ProcessingOptions::default(),
    };
    let result = run_harmonize(&request).expect("harmonize");

    assert_eq!(result.output, dir.path().join("nafta-imports_processed.csv"));
    assert_eq!(result.side.records, 1);
    let (header, rows) = read_table(&result.output);
    assert_eq!(
        header,
        ["Time", "Date", "Year", "Month", "Month_Num", "Country", "Value ($US)"]
    );
    assert_eq!(&rows[0][..6], ["March 2021", "2021-03-01", "2021", "March", "03", "Mexico"]);
    assert_eq!(rows[0][6].parse::<f64>().unwrap(), 21500.0);
}

#[test]
fn failed_manifest_removes_fact_table() {
    let dir = TempDir::new().expect("temp dir");
    let request = request(
        &dir,
        "Time,Country,Value ($US)\n2021,Canada,\"1,000\"\n",
        "Time,Country,Customs Value (Gen) ($US),\n2021,Canada,500,\n",
    );
    let manifest = request.manifest.clone().unwrap();
    fs::create_dir_all(&manifest).expect("manifest dir");
    fs::write(manifest.join("occupied.txt"), "x").expect("occupant");

    let error = run_metrics(&request).unwrap_err();

    assert!(error.to_string().contains("write manifest"));
    assert!(!request.output.exists());
    let out = dir.path().join("out");
    assert!(!out.join("trade_metrics.csv.partial").exists());
    assert!(!out.join("manifest.json.partial").exists());
    assert!(manifest.join("occupied.txt").exists());
}

#[test]
fn catalogue_export_writes_reference_sheet() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("reference").join("codes.json");

    export_catalogue(&path, CatalogueFormat::Json).expect("export catalogue");

    let rows: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(!rows.as_array().unwrap().is_empty());
    assert!(!dir.path().join("reference").join("codes.json.partial").exists());
}

#[test]
fn failed_catalogue_export_leaves_no_partial_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("codes.csv");
    fs::create_dir(&path).expect("blocking dir");
    fs::write(path.join("occupied.txt"), "x").expect("occupant");

    let error = export_catalogue(&path, CatalogueFormat::Csv).unwrap_err();

    assert!(error.to_string().contains("write catalogue"));
    assert!(path.is_dir());
    assert!(!dir.path().join("codes.csv.partial").exists());
}
