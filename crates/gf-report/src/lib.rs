//! gf-report: image and table output for sweep results.
//!
//! Both writers sit outside the numeric core: they only read a relaxed
//! [`gf_solver::Field`] or a finished [`gf_solver::SweepRecord`].

pub mod colormap;
pub mod plot;
pub mod table;

pub use colormap::ColourMap;
pub use plot::{ContourImageExporter, ContourPlot, StepExporter, image_file_name};
pub use table::{render_table, write_table};

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("Plot error writing {path}: {message}")]
    Plot {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Image too large: {width}x{height} pixels")]
    ImageTooLarge { width: u64, height: u64 },
}
