//! Loading a worksheet into memory as text.
//!
//! Cell values are coerced to strings exactly once, here, so the rest of the
//! pipeline works with a single known type.

use std::fs;
use std::path::{Path, PathBuf};

use calamine::{Data, Range, Reader, open_workbook_auto};
use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Where a sheet comes from: a file on disk and, for workbooks, an optional
/// worksheet name (the first worksheet is used otherwise).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSource {
    pub path: PathBuf,
    pub sheet: Option<String>,
}

impl SheetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheet: None,
        }
    }

    #[must_use]
    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }

    /// Check that a non-empty file was submitted, returning its size in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::NotSubmitted`] when the file does not exist and
    /// [`IngestError::EmptyFile`] when it has zero bytes.
    pub fn ensure_submitted(&self) -> Result<u64> {
        let metadata = match fs::metadata(&self.path) {
            Ok(metadata) => metadata,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Err(IngestError::NotSubmitted {
                    path: self.path.clone(),
                });
            }
            Err(source) => {
                return Err(IngestError::FileRead {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if !metadata.is_file() {
            return Err(IngestError::NotSubmitted {
                path: self.path.clone(),
            });
        }
        if metadata.len() == 0 {
            return Err(IngestError::EmptyFile {
                path: self.path.clone(),
            });
        }
        Ok(metadata.len())
    }
}

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    /// Any workbook calamine can open (xlsx, xlsm, xlsb, xls, ods).
    Workbook,
    Csv,
}

impl SheetFormat {
    /// Detect the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match extension.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Self::Workbook),
            "csv" => Ok(Self::Csv),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// A fully materialized worksheet. Row 0 is the sheet's first row and
/// column 0 is its first column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    rows: Vec<Vec<String>>,
}

impl Sheet {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Build a sheet from a calamine range.
    ///
    /// Calamine ranges start at the first used cell, so leading rows and
    /// columns are padded back in.
    pub fn from_range(range: &Range<Data>) -> Self {
        let Some((start_row, start_col)) = range.start() else {
            return Self::default();
        };
        let mut rows: Vec<Vec<String>> = vec![Vec::new(); start_row as usize];
        for row in range.rows() {
            let mut cells = vec![String::new(); start_col as usize];
            cells.extend(row.iter().map(cell_to_string));
            rows.push(cells);
        }
        Self { rows }
    }
}

impl<S: Into<String>> FromIterator<Vec<S>> for Sheet {
    fn from_iter<I: IntoIterator<Item = Vec<S>>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}

/// Coerce a spreadsheet cell to its text form.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) | Data::DateTimeIso(value) | Data::DurationIso(value) => {
            value.clone()
        }
        Data::Int(value) => value.to_string(),
        Data::Float(value) => format_float(*value),
        Data::Bool(true) => "TRUE".to_string(),
        // False reads as a blank cell.
        Data::Bool(false) => String::new(),
        other => other.to_string(),
    }
}

/// Whole floats print without a fractional part, which is how barcodes typed
/// into numeric cells come back from a workbook.
fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Load the whole sheet named by `source` into memory.
///
/// # Errors
///
/// Returns an [`IngestError`] if the format is unsupported or the file cannot
/// be opened or parsed.
pub fn load_sheet(source: &SheetSource) -> Result<Sheet> {
    let sheet = match SheetFormat::from_path(&source.path)? {
        SheetFormat::Workbook => load_workbook(&source.path, source.sheet.as_deref())?,
        SheetFormat::Csv => load_csv(&source.path)?,
    };
    debug!(
        path = %source.path.display(),
        row_count = sheet.row_count(),
        "sheet loaded"
    );
    Ok(sheet)
}

fn load_workbook(path: &Path, sheet_name: Option<&str>) -> Result<Sheet> {
    let mut workbook = open_workbook_auto(path).map_err(|error| IngestError::Workbook {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    let names = workbook.sheet_names();
    let name = match sheet_name {
        Some(name) => {
            if !names.iter().any(|candidate| candidate == name) {
                return Err(IngestError::SheetNotFound {
                    path: path.to_path_buf(),
                    sheet: name.to_string(),
                });
            }
            name.to_string()
        }
        None => names
            .first()
            .cloned()
            .ok_or_else(|| IngestError::NoWorksheet {
                path: path.to_path_buf(),
            })?,
    };
    let range = workbook
        .worksheet_range(&name)
        .map_err(|error| IngestError::Workbook {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
    debug!(path = %path.display(), worksheet = %name, "reading worksheet");
    Ok(Sheet::from_range(&range))
}

fn load_csv(path: &Path) -> Result<Sheet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(Sheet::new(rows))
}
