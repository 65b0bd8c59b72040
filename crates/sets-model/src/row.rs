use serde::{Deserialize, Serialize};

/// Cell values of one sheet row, truncated at the first empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: Vec<String>,
}

impl RawRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn into_cells(self) -> Vec<String> {
        self.cells
    }
}

impl From<Vec<String>> for RawRow {
    fn from(cells: Vec<String>) -> Self {
        Self::new(cells)
    }
}

impl<'a> FromIterator<&'a str> for RawRow {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(str::to_string).collect())
    }
}

/// A validated inventory set: a unique identifier and its retained barcodes.
///
/// Barcodes keep the column order of the source row. The list may be empty
/// when every barcode candidate of the row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Set {
    id: String,
    barcodes: Vec<String>,
}

impl Set {
    pub fn new(id: impl Into<String>, barcodes: Vec<String>) -> Self {
        Self {
            id: id.into(),
            barcodes,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn barcodes(&self) -> &[String] {
        &self.barcodes
    }

    /// The barcode flagged as primary, if the set has any.
    pub fn primary(&self) -> Option<&str> {
        self.barcodes.first().map(String::as_str)
    }
}
