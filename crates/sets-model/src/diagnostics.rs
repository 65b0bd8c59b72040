//! Non-fatal rule violations collected during one run.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Deduplicated record of duplicate identifiers and short values.
///
/// Values appear in the order they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    duplicate_ids: Vec<String>,
    short_values: Vec<String>,
}

impl Diagnostics {
    pub fn duplicate_ids(&self) -> &[String] {
        &self.duplicate_ids
    }

    pub fn short_values(&self) -> &[String] {
        &self.short_values
    }

    pub fn is_empty(&self) -> bool {
        self.duplicate_ids.is_empty() && self.short_values.is_empty()
    }

    /// Number of distinct offending values across both categories.
    pub fn violation_count(&self) -> usize {
        self.duplicate_ids.len() + self.short_values.len()
    }

    /// Render one line per non-empty category.
    ///
    /// Returns an empty string when nothing was recorded.
    pub fn to_text(&self, min_length: usize) -> String {
        let mut lines = Vec::new();
        if !self.duplicate_ids.is_empty() {
            lines.push(format!(
                "Duplicate set IDs encountered: {}",
                self.duplicate_ids.join(", ")
            ));
        }
        if !self.short_values.is_empty() {
            lines.push(format!(
                "Values of {min_length} characters or fewer encountered: {}",
                self.short_values.join(", ")
            ));
        }
        lines.join("\n")
    }
}

#[derive(Debug, Default)]
struct OrderedSet {
    values: Vec<String>,
    seen: HashSet<String>,
}

impl OrderedSet {
    fn insert(&mut self, value: &str) -> bool {
        if self.seen.contains(value) {
            return false;
        }
        self.seen.insert(value.to_string());
        self.values.push(value.to_string());
        true
    }
}

/// Accumulates violations for a single run and yields an immutable [`Diagnostics`].
#[derive(Debug, Default)]
pub struct DiagnosticsBuilder {
    duplicate_ids: OrderedSet,
    short_values: OrderedSet,
}

impl DiagnosticsBuilder {
    /// Returns true if the value was not recorded before.
    pub fn record_duplicate_id(&mut self, value: &str) -> bool {
        self.duplicate_ids.insert(value)
    }

    /// Returns true if the value was not recorded before.
    pub fn record_short_value(&mut self, value: &str) -> bool {
        self.short_values.insert(value)
    }

    pub fn build(self) -> Diagnostics {
        Diagnostics {
            duplicate_ids: self.duplicate_ids.values,
            short_values: self.short_values.values,
        }
    }
}
