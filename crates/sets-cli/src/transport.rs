//! Delivery of the generated document.
//!
//! A [`Transport`] takes a local file and a remote name, replaces any remote
//! file of that name, and reports the outcome as a value. Failures here never
//! change the pipeline's result.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum TransportError {
    /// The file to deliver does not exist.
    #[error("local file not found: {path}")]
    LocalFileMissing { path: PathBuf },

    /// The remote name is not a plain file name.
    #[error("invalid remote file name '{0}'")]
    InvalidRemoteName(String),

    /// The destination cannot be reached.
    #[error("destination unavailable: {path}")]
    DestinationUnavailable { path: PathBuf },

    /// Copying the file failed.
    #[error("failed to transfer {from} to {to}: {source}")]
    Transfer {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A completed delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delivery {
    pub remote_name: String,
    /// Human-readable location of the delivered file.
    pub location: String,
    pub bytes: u64,
    pub delivered_at: DateTime<Utc>,
}

/// A sink the document is handed to.
pub trait Transport {
    /// Short description of the destination for logs.
    fn describe(&self) -> String;

    /// Deliver `local_path` as `remote_name`, overwriting an existing file.
    fn deliver(&self, local_path: &Path, remote_name: &str) -> Result<Delivery, TransportError>;
}

/// Delivers into a directory, such as a mounted exchange share.
#[derive(Debug, Clone)]
pub struct DirectoryTransport {
    target_dir: PathBuf,
}

impl DirectoryTransport {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
        }
    }
}

impl Transport for DirectoryTransport {
    fn describe(&self) -> String {
        format!("directory {}", self.target_dir.display())
    }

    fn deliver(&self, local_path: &Path, remote_name: &str) -> Result<Delivery, TransportError> {
        if !local_path.is_file() {
            return Err(TransportError::LocalFileMissing {
                path: local_path.to_path_buf(),
            });
        }
        if !is_plain_file_name(remote_name) {
            return Err(TransportError::InvalidRemoteName(remote_name.to_string()));
        }
        if !self.target_dir.is_dir() {
            return Err(TransportError::DestinationUnavailable {
                path: self.target_dir.clone(),
            });
        }
        let destination = self.target_dir.join(remote_name);
        let bytes = fs::copy(local_path, &destination).map_err(|source| {
            TransportError::Transfer {
                from: local_path.to_path_buf(),
                to: destination.clone(),
                source,
            }
        })?;
        info!(
            local_path = %local_path.display(),
            remote_name,
            bytes,
            "document delivered"
        );
        Ok(Delivery {
            remote_name: remote_name.to_string(),
            location: destination.display().to_string(),
            bytes,
            delivered_at: Utc::now(),
        })
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
