//! Run configuration.
//!
//! Settings come from an optional TOML file; every field has a default so an
//! empty file (or none at all) is valid:
//!
//! ```toml
//! [validation]
//! min_length = 6
//!
//! [output]
//! file_name = "sets.xml"
//! dir = "/var/spool/sets"
//!
//! [transport]
//! target_dir = "/mnt/exchange/inbox"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sets_model::DEFAULT_MIN_LENGTH;

use crate::pipeline::PipelineOptions;

/// Name of the generated document when none is configured.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "sets.xml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub validation: ValidationConfig,
    pub output: OutputConfig,
    pub transport: TransportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Identifiers and barcodes must be longer than this many bytes.
    pub min_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name of the document, locally and at the destination.
    pub file_name: String,
    /// Local staging directory (system temp directory when unset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_OUTPUT_FILE_NAME.to_string(),
            dir: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Directory the document is delivered into. No delivery when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Read and validate a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// holds invalid values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.validation.min_length == 0 {
            return Err(ConfigError::Invalid(
                "validation.min_length must be at least 1".to_string(),
            ));
        }
        let name = self.output.file_name.as_str();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "output.file_name must be a plain file name, got '{name}'"
            )));
        }
        Ok(())
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output.dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Where the document is staged before delivery.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir().join(&self.output.file_name)
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions::default().with_min_length(self.validation.min_length)
    }
}
