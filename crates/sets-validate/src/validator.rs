use std::collections::HashSet;

use tracing::{debug, trace};

use sets_model::{Diagnostics, DiagnosticsBuilder, RawRow, Set, ValidationOptions};

/// What happened to a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// The row became a set with this many barcodes.
    Accepted { id: String, barcodes: usize },
    /// The identifier was too short; the row was dropped.
    ShortId(String),
    /// The identifier was already used by an earlier row; the row was dropped.
    DuplicateId(String),
    /// The row had no cells.
    Empty,
}

enum RowState {
    ExpectId,
    ExpectBarcode { id: String, barcodes: Vec<String> },
}

/// Result of validating a whole table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validated {
    pub sets: Vec<Set>,
    pub diagnostics: Diagnostics,
    pub rows_seen: usize,
    pub rows_dropped: usize,
}

/// Turns raw rows into sets for one run.
///
/// Identifier uniqueness is tracked per validator, so each run needs a fresh
/// one.
#[derive(Debug)]
pub struct RowValidator {
    options: ValidationOptions,
    seen_ids: HashSet<String>,
    diagnostics: DiagnosticsBuilder,
    sets: Vec<Set>,
    rows_seen: usize,
    rows_dropped: usize,
}

impl RowValidator {
    pub fn new(options: ValidationOptions) -> Self {
        Self {
            options,
            seen_ids: HashSet::new(),
            diagnostics: DiagnosticsBuilder::default(),
            sets: Vec::new(),
            rows_seen: 0,
            rows_dropped: 0,
        }
    }

    /// Validate one row, keeping the resulting set if there is one.
    pub fn push_row(&mut self, row: RawRow) -> RowOutcome {
        self.rows_seen += 1;
        let mut state = RowState::ExpectId;
        for cell in row.into_cells() {
            state = match state {
                RowState::ExpectId => {
                    if self.options.is_short(&cell) {
                        trace!(value = %cell, "short identifier, dropping row");
                        self.diagnostics.record_short_value(&cell);
                        self.rows_dropped += 1;
                        return RowOutcome::ShortId(cell);
                    }
                    if self.seen_ids.contains(&cell) {
                        trace!(value = %cell, "duplicate identifier, dropping row");
                        self.diagnostics.record_duplicate_id(&cell);
                        self.rows_dropped += 1;
                        return RowOutcome::DuplicateId(cell);
                    }
                    self.seen_ids.insert(cell.clone());
                    RowState::ExpectBarcode {
                        id: cell,
                        barcodes: Vec::new(),
                    }
                }
                RowState::ExpectBarcode { id, mut barcodes } => {
                    if self.options.is_short(&cell) {
                        trace!(set_id = %id, value = %cell, "short barcode skipped");
                        self.diagnostics.record_short_value(&cell);
                    } else {
                        barcodes.push(cell);
                    }
                    RowState::ExpectBarcode { id, barcodes }
                }
            };
        }
        match state {
            RowState::ExpectId => {
                self.rows_dropped += 1;
                RowOutcome::Empty
            }
            RowState::ExpectBarcode { id, barcodes } => {
                let outcome = RowOutcome::Accepted {
                    id: id.clone(),
                    barcodes: barcodes.len(),
                };
                self.sets.push(Set::new(id, barcodes));
                outcome
            }
        }
    }

    /// Finish the run, yielding the sets in row order and the diagnostics.
    pub fn finish(self) -> Validated {
        let validated = Validated {
            sets: self.sets,
            diagnostics: self.diagnostics.build(),
            rows_seen: self.rows_seen,
            rows_dropped: self.rows_dropped,
        };
        debug!(
            rows_seen = validated.rows_seen,
            rows_dropped = validated.rows_dropped,
            set_count = validated.sets.len(),
            duplicate_count = validated.diagnostics.duplicate_ids().len(),
            short_count = validated.diagnostics.short_values().len(),
            "validation complete"
        );
        validated
    }
}

/// Validate all rows with a fresh [`RowValidator`].
pub fn validate_rows<I>(rows: I, options: ValidationOptions) -> Validated
where
    I: IntoIterator<Item = RawRow>,
{
    let mut validator = RowValidator::new(options);
    for row in rows {
        validator.push_row(row);
    }
    validator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> RawRow {
        values.iter().copied().collect()
    }

    #[test]
    fn outcome_reports_each_rule() {
        let mut validator = RowValidator::new(ValidationOptions::default());
        assert_eq!(
            validator.push_row(row(&["SET-0001", "1234567", "12"])),
            RowOutcome::Accepted {
                id: "SET-0001".to_string(),
                barcodes: 1
            }
        );
        assert_eq!(
            validator.push_row(row(&["SET-0001", "2234567"])),
            RowOutcome::DuplicateId("SET-0001".to_string())
        );
        assert_eq!(
            validator.push_row(row(&["ID2", "3334567"])),
            RowOutcome::ShortId("ID2".to_string())
        );
        assert_eq!(validator.push_row(RawRow::default()), RowOutcome::Empty);

        let validated = validator.finish();
        assert_eq!(validated.rows_seen, 4);
        assert_eq!(validated.rows_dropped, 3);
        assert_eq!(validated.sets.len(), 1);
    }

    #[test]
    fn short_identifier_does_not_reserve_the_id() {
        let validated = validate_rows(
            [row(&["123456", "1234567"]), row(&["123456", "2234567"])],
            ValidationOptions::default(),
        );
        assert!(validated.sets.is_empty());
        assert!(validated.diagnostics.duplicate_ids().is_empty());
        assert_eq!(validated.diagnostics.short_values(), ["123456"]);
    }
}
