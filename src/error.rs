//! Error types for the audit pipeline

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Input file not readable: {path}: {source}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Range request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Range service returned HTTP {status}")]
    Upstream { status: reqwest::StatusCode },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Failed to write report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AuditError {
    /// Whether the failure only affects the current password.
    ///
    /// Network and upstream failures are skipped by the pipeline; everything
    /// else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AuditError::Network(_) | AuditError::Upstream { .. })
    }
}

impl From<reqwest::Error> for AuditError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => AuditError::Upstream { status },
            None => AuditError::Network(err),
        }
    }
}
