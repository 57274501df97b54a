//! Error types for examtag.
//!
//! This module defines all error types used throughout the examtag crate,
//! carrying enough context (file path, record index) to point at the exact
//! piece of input that failed.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for examtag operations.
#[derive(Error, Debug)]
pub enum Error {
    // === File Errors ===
    /// Failed to read a question file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a question file back.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// Path to the file that could not be written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A question file contained malformed JSON.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path to the malformed file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// A question file's top level was not a JSON array.
    #[error("{path} does not contain a top-level JSON array")]
    NotAnArray {
        /// Path to the offending file.
        path: PathBuf,
    },

    // === Record Errors ===
    /// An array element was not a JSON object.
    #[error("record {index} in {path} is not a JSON object")]
    NotAnObject {
        /// Path to the file holding the record.
        path: PathBuf,
        /// Zero-based position of the record in the array.
        index: usize,
    },

    /// A record had no `year` field.
    #[error("record {index} in {path} has no \"year\" field")]
    MissingYear {
        /// Path to the file holding the record.
        path: PathBuf,
        /// Zero-based position of the record in the array.
        index: usize,
    },

    /// A record's `year` field was not a string.
    #[error("record {index} in {path} has a non-string \"year\" field")]
    YearNotString {
        /// Path to the file holding the record.
        path: PathBuf,
        /// Zero-based position of the record in the array.
        index: usize,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O and Serialization Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for examtag operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a file read error.
    #[must_use]
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a file write error.
    #[must_use]
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error.
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Create a missing-`year` record error.
    #[must_use]
    pub fn missing_year(path: impl Into<PathBuf>, index: usize) -> Self {
        Self::MissingYear {
            path: path.into(),
            index,
        }
    }

    /// Create a non-string-`year` record error.
    #[must_use]
    pub fn year_not_string(path: impl Into<PathBuf>, index: usize) -> Self {
        Self::YearNotString {
            path: path.into(),
            index,
        }
    }

    /// Check if this error points at a single bad record (as opposed to
    /// a whole-file or environment failure).
    #[must_use]
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            Self::NotAnObject { .. } | Self::MissingYear { .. } | Self::YearNotString { .. }
        )
    }
}
