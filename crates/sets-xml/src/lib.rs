//! Barcode set document generation.
//!
//! Validated sets are folded into a [`Document`] by [`DocumentBuilder`], then
//! written as pretty-printed XML:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <sets>
//!   <set id="SET-0001">
//!     <items>
//!       <barcode primary="true">1234567</barcode>
//!       <barcode>2234567</barcode>
//!     </items>
//!   </set>
//! </sets>
//! ```

mod document;
mod error;
mod writer;

pub use document::{BarcodeNode, Document, DocumentBuilder, SetNode, build_document};
pub use error::{DocumentError, Result};
pub use writer::{document_to_string, write_document, write_document_file};
