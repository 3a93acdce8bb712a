//! Delimited text export of a sweep record.

use std::fs;
use std::path::{Path, PathBuf};

use gf_solver::SweepRecord;

use crate::{ReportError, ReportResult};

/// One line per sweep step: `iterations,A,B,C,D`.
pub fn render_table(record: &SweepRecord) -> String {
    let mut out = String::new();
    for entry in record.iter() {
        let [a, b, c, d] = *entry.samples.values();
        out.push_str(&format!("{},{},{},{},{}\n", entry.iterations, a, b, c, d));
    }
    out
}

/// Write the table to `path`.
///
/// The content goes to a sibling `.partial` file first and is renamed into
/// place, so a failed write never leaves a truncated table behind.
pub fn write_table(path: &Path, record: &SweepRecord) -> ReportResult<()> {
    let io_err = |path: &Path, source: std::io::Error| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let staging = staging_path(path);
    if let Err(source) = fs::write(&staging, render_table(record)) {
        let _ = fs::remove_file(&staging);
        return Err(io_err(&staging, source));
    }
    if let Err(source) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(io_err(path, source));
    }

    tracing::debug!(path = %path.display(), rows = record.len(), "sweep table written");
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}
