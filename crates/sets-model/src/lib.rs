pub mod diagnostics;
pub mod options;
pub mod row;

pub use diagnostics::{Diagnostics, DiagnosticsBuilder};
pub use options::{DEFAULT_MIN_LENGTH, ValidationOptions};
pub use row::{RawRow, Set};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_counts() {
        let mut builder = DiagnosticsBuilder::default();
        builder.record_duplicate_id("SET-0001");
        builder.record_short_value("123");
        builder.record_short_value("45");
        let diagnostics = builder.build();
        assert_eq!(diagnostics.duplicate_ids().len(), 1);
        assert_eq!(diagnostics.short_values().len(), 2);
        assert_eq!(diagnostics.violation_count(), 3);
        assert!(!diagnostics.is_empty());
    }

    #[test]
    fn diagnostics_serializes() {
        let mut builder = DiagnosticsBuilder::default();
        builder.record_short_value("12");
        let json = serde_json::to_string(&builder.build()).expect("serialize diagnostics");
        assert_eq!(json, r#"{"duplicate_ids":[],"short_values":["12"]}"#);
    }
}
