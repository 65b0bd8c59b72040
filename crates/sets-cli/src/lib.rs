//! Library components of the barcode sets converter.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod transport;
