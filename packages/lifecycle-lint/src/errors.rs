//! Error types for lifecycle-lint
//!
//! Only the host layers (parsing, configuration, file I/O) fail; the
//! analyzer core reports outcomes as values and never returns `Result`.

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lifecycle-lint operations
#[derive(Debug, Error)]
pub enum LintError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading a specific source file failed
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error (language setup failed or no tree produced)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Report serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LintError {
    pub fn parse(msg: impl Into<String>) -> Self {
        LintError::Parse(msg.into())
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LintError::Read {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for lifecycle-lint operations
pub type Result<T> = std::result::Result<T, LintError>;
