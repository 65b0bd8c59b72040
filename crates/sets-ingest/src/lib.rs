//! Sheet ingestion for barcode set tables.
//!
//! A workbook or CSV file is loaded whole into a string-typed [`Sheet`];
//! [`TableReader`] then walks its rows, skipping the header and truncating
//! each row at its first empty cell (blank or zero).

pub mod error;
pub mod reader;
pub mod sheet;

pub use error::{IngestError, Result};
pub use reader::{TableReader, is_empty_cell, truncate_row};
pub use sheet::{Sheet, SheetFormat, SheetSource, cell_to_string, load_sheet};
