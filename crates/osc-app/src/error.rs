//! Error types for the osc-app service layer.

use std::path::PathBuf;

/// Unified error for CLI and library frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid parameters: {0}")]
    Parameters(#[from] osc_core::OscError),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Failed to write {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for osc-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<osc_project::ProjectError> for AppError {
    fn from(err: osc_project::ProjectError) -> Self {
        AppError::Session(err.to_string())
    }
}

impl From<osc_traces::ExportError> for AppError {
    fn from(err: osc_traces::ExportError) -> Self {
        AppError::Export(err.to_string())
    }
}
