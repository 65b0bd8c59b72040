//! Row reading: header skip and early truncation.

use sets_model::RawRow;

use crate::sheet::Sheet;

/// Walks the data rows of a [`Sheet`].
#[derive(Debug, Clone, Copy)]
pub struct TableReader<'a> {
    sheet: &'a Sheet,
}

impl<'a> TableReader<'a> {
    pub fn new(sheet: &'a Sheet) -> Self {
        Self { sheet }
    }

    /// Lazily yield one [`RawRow`] per row after the header.
    ///
    /// The first row is always skipped. Rows that are empty after truncation
    /// are still yielded; callers drop them before validation.
    pub fn rows(&self) -> impl Iterator<Item = RawRow> + 'a {
        self.sheet
            .rows()
            .iter()
            .skip(1)
            .map(|cells| truncate_row(cells))
    }
}

/// Whether a cell ends its row: blank, or a zero.
///
/// Numeric zero cells coerce to `"0"`, so they end the row as well.
pub fn is_empty_cell(cell: &str) -> bool {
    cell.is_empty() || cell == "0"
}

/// Keep the cells before the first empty one. Later cells are never inspected.
pub fn truncate_row(cells: &[String]) -> RawRow {
    RawRow::new(
        cells
            .iter()
            .take_while(|cell| !is_empty_cell(cell))
            .cloned()
            .collect(),
    )
}
