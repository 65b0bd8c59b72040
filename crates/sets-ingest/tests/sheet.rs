use std::fs;

use sets_ingest::{IngestError, SheetSource, TableReader, load_sheet};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn loads_csv_verbatim() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        &dir,
        "stock.csv",
        "Set,Barcode 1,Barcode 2\nSET-0001, 1234567,2234567\nSET-0002,3334567\n",
    );
    let sheet = load_sheet(&SheetSource::new(&path)).expect("load csv");
    assert_eq!(sheet.row_count(), 3);

    let rows: Vec<_> = TableReader::new(&sheet).rows().collect();
    assert_eq!(rows[0].cells(), ["SET-0001", " 1234567", "2234567"]);
    assert_eq!(rows[1].cells(), ["SET-0002", "3334567"]);
}

#[test]
fn csv_rows_truncate_at_empty_cell() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "stock.csv", "Set,A,B,C\nSET-0001,1234567,,7654321\n");
    let sheet = load_sheet(&SheetSource::new(&path)).expect("load csv");
    let rows: Vec<_> = TableReader::new(&sheet).rows().collect();
    assert_eq!(rows[0].cells(), ["SET-0001", "1234567"]);
}

#[test]
fn missing_file_is_not_submitted() {
    let dir = TempDir::new().expect("temp dir");
    let source = SheetSource::new(dir.path().join("absent.xlsx"));
    let error = source.ensure_submitted().unwrap_err();
    assert!(matches!(error, IngestError::NotSubmitted { .. }));
    assert!(error.is_missing_input());
    assert_eq!(error.user_message(), "Table was not submitted");
}

#[test]
fn zero_byte_file_is_empty() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "stock.xlsx", "");
    let error = SheetSource::new(&path).ensure_submitted().unwrap_err();
    assert!(matches!(error, IngestError::EmptyFile { .. }));
    assert!(error.is_missing_input());
}

#[test]
fn submitted_file_reports_size() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "stock.csv", "Set\n");
    assert_eq!(SheetSource::new(&path).ensure_submitted().unwrap(), 4);
}

#[test]
fn corrupt_workbook_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "stock.xlsx", "this is not a zip archive");
    let error = load_sheet(&SheetSource::new(&path)).unwrap_err();
    assert!(matches!(error, IngestError::Workbook { .. }));
    assert_eq!(error.user_message(), "Submitted table could not be read");
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "stock.txt", "Set\nSET-0001\n");
    let error = load_sheet(&SheetSource::new(&path)).unwrap_err();
    assert!(matches!(error, IngestError::UnsupportedFormat { .. }));
}
