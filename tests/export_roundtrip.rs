//! Export Integration Tests
//!
//! Writes the standard dataset to a scratch directory and parses both files
//! back: CSV through the library reader, XLSX through calamine.

use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

use coastal_synth::config::OutputConfig;
use coastal_synth::export::{read_csv, write_all, write_summary, ExportError};
use coastal_synth::{generate_seeded, Dataset, DatasetSummary, COLUMN_NAMES};

fn output_in(dir: &Path) -> OutputConfig {
    OutputConfig {
        dir: dir.to_path_buf(),
        ..OutputConfig::default()
    }
}

fn standard() -> Dataset {
    generate_seeded(320, 42).unwrap()
}

/// Header plus numeric rows of the first worksheet.
fn read_xlsx(path: &Path, sheet: &str) -> (Vec<String>, Vec<Vec<f64>>) {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("open xlsx");
    assert_eq!(workbook.sheet_names(), vec![sheet.to_string()]);
    let range = workbook.worksheet_range(sheet).expect("read sheet");

    let mut rows = range.rows();
    let header = rows
        .next()
        .expect("header row")
        .iter()
        .map(|c| match c {
            Data::String(s) => s.clone(),
            other => panic!("non-string header cell {other:?}"),
        })
        .collect();
    let body = rows
        .map(|row| {
            row.iter()
                .map(|c| match c {
                    Data::Float(f) => *f,
                    Data::Int(i) => *i as f64,
                    other => panic!("non-numeric cell {other:?}"),
                })
                .collect()
        })
        .collect();
    (header, body)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(1.0)
}

// ============================================================================
// CSV
// ============================================================================

#[test]
fn csv_has_header_and_n_rows() {
    let dir = tempfile::tempdir().unwrap();
    let files = write_all(&standard(), &output_in(dir.path())).unwrap();

    assert_eq!(
        files.csv.file_name().unwrap(),
        "synthetic_coastal_erosion_dataset.csv"
    );
    let text = std::fs::read_to_string(&files.csv).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 321);
    assert_eq!(lines[0], COLUMN_NAMES.join(","));
    assert!(lines[1].starts_with("3.0,"));
    assert!(lines[320].starts_with("6.5,"));
}

#[test]
fn csv_reads_back_identical() {
    let dir = tempfile::tempdir().unwrap();
    let ds = standard();
    let files = write_all(&ds, &output_in(dir.path())).unwrap();
    assert_eq!(read_csv(&files.csv).unwrap(), ds);
}

// ============================================================================
// XLSX
// ============================================================================

#[test]
fn xlsx_has_header_and_n_rows() {
    let dir = tempfile::tempdir().unwrap();
    let files = write_all(&standard(), &output_in(dir.path())).unwrap();

    let (header, rows) = read_xlsx(&files.xlsx, "Sheet1");
    assert_eq!(header, COLUMN_NAMES.to_vec());
    assert_eq!(rows.len(), 320);
    assert!(rows.iter().all(|r| r.len() == COLUMN_NAMES.len()));
}

#[test]
fn csv_and_xlsx_hold_the_same_table() {
    let dir = tempfile::tempdir().unwrap();
    let files = write_all(&standard(), &output_in(dir.path())).unwrap();

    let from_csv = read_csv(&files.csv).unwrap();
    let (_, from_xlsx) = read_xlsx(&files.xlsx, "Sheet1");

    assert_eq!(from_csv.len(), from_xlsx.len());
    for (record, row) in from_csv.iter().zip(&from_xlsx) {
        for (a, b) in record.values().iter().zip(row) {
            assert!(close(*a, *b), "csv {a} != xlsx {b}");
        }
    }
}

#[test]
fn custom_sheet_name_and_nested_dir() {
    let dir = tempfile::tempdir().unwrap();
    let output = OutputConfig {
        dir: dir.path().join("a").join("b"),
        sheet_name: "erosion".to_string(),
        ..OutputConfig::default()
    };
    let files = write_all(&generate_seeded(25, 3).unwrap(), &output).unwrap();
    assert!(files.csv.exists());
    let (_, rows) = read_xlsx(&files.xlsx, "erosion");
    assert_eq!(rows.len(), 25);
}

// ============================================================================
// Failure ordering
// ============================================================================

#[test]
fn csv_failure_skips_xlsx() {
    let dir = tempfile::tempdir().unwrap();
    let output = output_in(dir.path());
    // a directory where the CSV file should go makes the CSV write fail
    std::fs::create_dir(output.csv_path()).unwrap();

    let err = write_all(&standard(), &output).unwrap_err();
    assert!(matches!(err, ExportError::Csv(_)), "got {err:?}");
    assert!(!output.xlsx_path().exists());
}

// ============================================================================
// Summary sidecar
// ============================================================================

#[test]
fn summary_json_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.json");
    let ds = standard();
    write_summary(&ds.summary(), &path).unwrap();

    let parsed: DatasetSummary =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed.rows, 320);
    assert_eq!(parsed.at_risk, ds.at_risk_count());
    let shore = parsed.column("shoreline_2000_m").unwrap();
    assert_eq!((shore.min, shore.max, shore.mean), (0.0, 0.0, 0.0));
    assert_eq!(parsed.column("lon").unwrap().min, 3.0);
}
