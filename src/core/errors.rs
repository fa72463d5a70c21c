//! Shared error types for the ingestion pipeline

use crate::core::Level;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for metridex operations
#[derive(Debug, Error)]
pub enum Error {
    /// The commit a run should attach to was never recorded; the upstream
    /// acquisition step did not run
    #[error("no commit with revision {revision} recorded for {url}")]
    CommitNotFound { url: String, revision: String },

    /// No VCS system is recorded for the repository URL
    #[error("no VCS system recorded for {url}")]
    VcsSystemNotFound { url: String },

    /// A required report file is absent from the output directory
    #[error("no {level} report matches {pattern} in {dir}")]
    ReportMissing {
        level: Level,
        pattern: String,
        dir: PathBuf,
    },

    /// A report row lacks an identity column
    #[error("report row lacks required column {column:?}")]
    MissingColumn { column: &'static str },

    /// A retained metric column failed to parse as a number; the report
    /// comes from an incompatible tool version
    #[error("metric column {column:?} holds non-numeric value {value:?}")]
    MalformedMetric { column: String, value: String },

    /// An order hint that does not read as an integer
    #[error("entity {id}: order hint {value:?} is not an integer")]
    MalformedOrderHint { id: String, value: String },

    /// An entity references a parent that is not part of the merged set
    #[error("{level} entity {id} references unknown parent {parent}")]
    DanglingParent {
        id: String,
        level: Level,
        parent: String,
    },

    /// An entity the traversal never reached; the merged set is not a forest
    #[error("{level} entity {id} is unreachable from the roots")]
    UnreachableEntity { id: String, level: Level },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// CSV-layer errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Pattern errors
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),
}

impl Error {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
