//! Error types for solver operations.

use gf_core::error::GfError;
use thiserror::Error;

/// Errors raised while setting up a diffusion problem or sweep.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid configuration: {what}")]
    InvalidConfiguration { what: String },

    #[error("Sample point {label} at (x={x}, y={y}) is outside the interior of a {size}x{size} grid")]
    SamplePointOutOfBounds {
        label: char,
        x: f64,
        y: f64,
        size: usize,
    },

    #[error("Invalid sweep bounds: start={start}, end={end}, step={step} ({reason})")]
    InvalidSweep {
        start: usize,
        end: usize,
        step: usize,
        reason: &'static str,
    },

    #[error("Numeric error: {0}")]
    Numeric(#[from] GfError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl SolverError {
    pub fn invalid(what: impl Into<String>) -> Self {
        SolverError::InvalidConfiguration { what: what.into() }
    }
}
