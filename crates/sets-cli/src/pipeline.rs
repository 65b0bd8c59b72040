//! Sheet → validated sets → document.
//!
//! Every run reads the whole sheet, validates it with a fresh validator, and
//! builds the document. Nothing is shared between runs.

use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, info_span, warn};

use sets_ingest::{IngestError, Sheet, SheetSource, TableReader, load_sheet};
use sets_model::{Diagnostics, ValidationOptions};
use sets_validate::{Validated, validate_rows};
use sets_xml::{Document, DocumentError, build_document, document_to_string};

/// Shown when the document could not be built; details go to the log.
pub const MALFORMED_CONTENT_MESSAGE: &str =
    "The submitted table has content that could not be understood";

/// Shown after a clean run.
pub const SUCCESS_MESSAGE: &str = "File uploaded successfully";

/// Prefix for the message shown when the run produced diagnostics.
pub const WARNING_PREFIX: &str = "File uploaded, but:";

/// Fatal pipeline failures.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Nothing usable was submitted, or the sheet could not be read.
    #[error(transparent)]
    Input(#[from] IngestError),

    /// The document could not be built from the validated sets.
    #[error("malformed document: {0}")]
    MalformedDocument(#[from] DocumentError),
}

impl PipelineError {
    /// Message for the person who submitted the table.
    pub fn user_message(&self) -> String {
        match self {
            Self::Input(error) => error.user_message(),
            Self::MalformedDocument(_) => MALFORMED_CONTENT_MESSAGE.to_string(),
        }
    }
}

/// Parameters injected into every run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    pub validation: ValidationOptions,
}

impl PipelineOptions {
    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.validation = self.validation.with_min_length(min_length);
        self
    }
}

/// Everything a successful run produces.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub document: Document,
    /// Serialized document.
    pub xml: String,
    pub diagnostics: Diagnostics,
    /// One line per violation category; empty when there were none.
    pub diagnostic_text: String,
    /// Data rows read after the header, including empty ones.
    pub rows_read: usize,
    /// Non-empty rows that did not become a set.
    pub rows_dropped: usize,
}

impl PipelineOutput {
    pub fn has_warnings(&self) -> bool {
        !self.diagnostic_text.is_empty()
    }

    /// The outcome line shown to the submitter.
    pub fn outcome_message(&self) -> String {
        if self.has_warnings() {
            format!("{WARNING_PREFIX}\n{}", self.diagnostic_text)
        } else {
            SUCCESS_MESSAGE.to_string()
        }
    }
}

/// Stateless orchestrator of one conversion.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    /// Load the sheet named by `source` and convert it.
    ///
    /// # Errors
    ///
    /// Fails with [`PipelineError::Input`] before any parsing if the file is
    /// missing or empty, or if it cannot be read, and with
    /// [`PipelineError::MalformedDocument`] if the document cannot be built.
    pub fn run(&self, source: &SheetSource) -> Result<PipelineOutput, PipelineError> {
        let span = info_span!("run", path = %source.path.display());
        let _guard = span.enter();
        let sheet = self.load(source)?;
        self.run_sheet(&sheet)
    }

    /// Load and validate without building a document.
    pub fn check(&self, source: &SheetSource) -> Result<Validated, PipelineError> {
        let span = info_span!("check", path = %source.path.display());
        let _guard = span.enter();
        let sheet = self.load(source)?;
        Ok(self.validate_sheet(&sheet).0)
    }

    /// Convert an already loaded sheet.
    pub fn run_sheet(&self, sheet: &Sheet) -> Result<PipelineOutput, PipelineError> {
        let (validated, rows_read) = self.validate_sheet(sheet);

        let build_start = Instant::now();
        let document = build_document(&validated.sets)?;
        let xml = document_to_string(&document)?;
        debug!(
            set_count = document.set_count(),
            barcode_count = document.barcode_count(),
            bytes = xml.len(),
            duration_ms = build_start.elapsed().as_millis(),
            "document built"
        );

        let diagnostic_text = validated
            .diagnostics
            .to_text(self.options.validation.min_length);
        if !diagnostic_text.is_empty() {
            warn!(
                duplicate_count = validated.diagnostics.duplicate_ids().len(),
                short_count = validated.diagnostics.short_values().len(),
                "{diagnostic_text}"
            );
        }

        Ok(PipelineOutput {
            document,
            xml,
            diagnostics: validated.diagnostics,
            diagnostic_text,
            rows_read,
            rows_dropped: validated.rows_dropped,
        })
    }

    fn load(&self, source: &SheetSource) -> Result<Sheet, PipelineError> {
        let size = source.ensure_submitted()?;
        let load_start = Instant::now();
        let sheet = load_sheet(source)?;
        info!(
            bytes = size,
            row_count = sheet.row_count(),
            duration_ms = load_start.elapsed().as_millis(),
            "sheet loaded"
        );
        Ok(sheet)
    }

    fn validate_sheet(&self, sheet: &Sheet) -> (Validated, usize) {
        let mut rows_read = 0usize;
        let rows = TableReader::new(sheet)
            .rows()
            .inspect(|_| rows_read += 1)
            .filter(|row| !row.is_empty());
        let validated = validate_rows(rows, self.options.validation);
        info!(
            rows_read,
            set_count = validated.sets.len(),
            rows_dropped = validated.rows_dropped,
            "rows validated"
        );
        (validated, rows_read)
    }
}
