use std::path::PathBuf;

use thiserror::Error;

/// The document could not be built or written.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A value contains a character XML 1.0 does not allow.
    #[error("{field} '{value}' contains a character not allowed in XML (U+{code:04X}) at position {position}")]
    InvalidCharacter {
        field: &'static str,
        value: String,
        code: u32,
        position: usize,
    },

    /// Serializing the tree failed.
    #[error("failed to write document: {0}")]
    Write(#[from] std::io::Error),

    /// The serialized document was not valid UTF-8.
    #[error("serialized document is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// Creating the output file failed.
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;
