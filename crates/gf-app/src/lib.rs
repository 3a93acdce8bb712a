//! Shared application service layer for gelflow.
//!
//! Centralizes configuration handling, sweep execution with exports, and
//! result queries for the command-line front end.

pub mod error;
pub mod progress;
pub mod project_service;
pub mod query;
pub mod run_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use progress::{RunProgressEvent, RunStage, SweepProgress};
pub use project_service::{
    SpeciesReport, default_config, hydrogel_constrictivity, hydrogel_report, load_config,
    sample_positions, save_config, validate_config,
};
pub use query::{RunSummary, first_step_reaching, get_run_summary, sample_series};
pub use run_service::{
    ExportFailure, RunOptions, RunRequest, RunResponse, RunTimingSummary, build_contour_plot,
    probe, run_sweep, run_sweep_with_exporter, run_sweep_with_progress,
};
