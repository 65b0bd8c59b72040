use serde::{Deserialize, Serialize};

/// Values at or below this many bytes are rejected by default.
pub const DEFAULT_MIN_LENGTH: usize = 6;

/// Rules applied while turning raw rows into sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Identifiers and barcodes must be strictly longer than this.
    pub min_length: usize,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl ValidationOptions {
    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Returns true when `value` is too short to be an identifier or barcode.
    pub fn is_short(&self, value: &str) -> bool {
        value.len() <= self.min_length
    }
}
