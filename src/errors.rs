//! Shared error types for autocompare.
//!
//! The comparison core itself never fails: unparseable values degrade to a
//! tie. Errors only arise at the edges, when records, catalogs or
//! configuration are loaded, when a data source cannot resolve a selection,
//! or when a depreciation projection is asked for with impossible inputs.

use std::path::PathBuf;
use thiserror::Error;

use crate::source::SourceError;

/// Main error type for autocompare operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A vehicle record broke one or more model invariants
    #[error("Invalid vehicle record '{id}': {}", .violations.join("; "))]
    Validation { id: String, violations: Vec<String> },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Depreciation projection inputs out of range
    #[error("Projection error: {0}")]
    Projection(String),

    /// The data source could not provide a record
    #[error(transparent)]
    Source(#[from] SourceError),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Create a validation error for the record with the given id
    pub fn validation(id: impl Into<String>, violations: Vec<String>) -> Self {
        Self::Validation {
            id: id.into(),
            violations,
        }
    }

    /// Whether the user can fix this by editing their input files
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::Configuration(_)
                | Self::Projection(_)
                | Self::Json(_)
                | Self::Toml(_)
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
