//! Error types for the gf-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// gives the CLI a single error interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to write configuration file: {path}")]
    ConfigFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration validation failed: {0}")]
    Validation(String),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Export error: {0}")]
    Report(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for gf-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<gf_project::ProjectError> for AppError {
    fn from(err: gf_project::ProjectError) -> Self {
        match err {
            gf_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Config(other.to_string()),
        }
    }
}

impl From<gf_project::ValidationError> for AppError {
    fn from(err: gf_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<gf_solver::SolverError> for AppError {
    fn from(err: gf_solver::SolverError) -> Self {
        AppError::Solver(err.to_string())
    }
}

impl From<gf_report::ReportError> for AppError {
    fn from(err: gf_report::ReportError) -> Self {
        AppError::Report(err.to_string())
    }
}
