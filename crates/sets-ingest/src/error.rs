//! Error types for sheet ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that prevent a sheet from being read.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Submission Errors ===
    /// No file exists at the given path.
    #[error("table not submitted: {path} does not exist")]
    NotSubmitted { path: PathBuf },

    /// The file exists but holds no bytes.
    #[error("table is empty: {path}")]
    EmptyFile { path: PathBuf },

    /// Failed to inspect or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// The file extension does not name a supported sheet format.
    #[error("unsupported table format '{extension}': {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// The workbook could not be opened or parsed.
    #[error("failed to open workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// The workbook contains no worksheets.
    #[error("workbook has no worksheets: {path}")]
    NoWorksheet { path: PathBuf },

    /// The requested worksheet does not exist.
    #[error("worksheet '{sheet}' not found in {path}")]
    SheetNotFound { path: PathBuf, sheet: String },

    /// Failed to parse a CSV record.
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl IngestError {
    /// Message suitable for the person who submitted the table.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotSubmitted { .. } => "Table was not submitted".to_string(),
            Self::EmptyFile { .. } => "Submitted table is empty".to_string(),
            Self::UnsupportedFormat { extension, .. } => {
                format!("Tables of type '{extension}' are not supported")
            }
            Self::SheetNotFound { sheet, .. } => format!("Worksheet '{sheet}' was not found"),
            Self::FileRead { .. }
            | Self::Workbook { .. }
            | Self::NoWorksheet { .. }
            | Self::Csv { .. } => "Submitted table could not be read".to_string(),
        }
    }

    /// True when the failure means nothing usable was submitted.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::NotSubmitted { .. } | Self::EmptyFile { .. })
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
