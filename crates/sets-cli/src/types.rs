use std::path::PathBuf;

use serde::Serialize;

use sets_cli::transport::Delivery;
use sets_model::Diagnostics;

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub source: PathBuf,
    /// Where the document was written; `None` for dry runs and `--stdout`.
    pub output: Option<PathBuf>,
    pub min_length: usize,
    pub rows_read: usize,
    pub rows_dropped: usize,
    pub set_count: usize,
    pub barcode_count: usize,
    pub diagnostics: Diagnostics,
    pub delivery: Option<Delivery>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub source: PathBuf,
    pub min_length: usize,
    /// Non-empty data rows.
    pub rows_checked: usize,
    pub rows_dropped: usize,
    pub set_count: usize,
    pub diagnostics: Diagnostics,
}
