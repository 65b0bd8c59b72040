//! Row validation for barcode set tables.
//!
//! ## Rules
//!
//! - **Identifier** (first cell): at or below the minimum length, or already
//!   accepted earlier in the run → the whole row is dropped.
//! - **Barcode** (every later cell): at or below the minimum length → only
//!   that cell is dropped.
//!
//! Violations are collected as [`Diagnostics`]; nothing here is fatal.

mod validator;

pub use validator::{RowOutcome, RowValidator, Validated, validate_rows};

pub use sets_model::{Diagnostics, ValidationOptions};
