//! In-place Gauss-Seidel neighbour averaging.
//!
//! Every pass visits interior cells row by row (ascending), columns ascending
//! within a row, and overwrites each cell with the mean of its four lattice
//! neighbours as they stand at that moment. Cells already visited in the same
//! pass contribute their new values. Edges are never written.

use crate::field::Field;

/// Progress event emitted after each completed pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelaxProgressEvent {
    pub pass: usize,
    pub total_passes: usize,
}

/// Run exactly `passes` relaxation passes. Zero passes leaves the field as is.
pub fn relax(field: &mut Field, passes: usize) {
    relax_impl(field, passes, None);
}

/// Same as [`relax`], invoking `progress` after every pass.
pub fn relax_with_progress(
    field: &mut Field,
    passes: usize,
    progress: &mut dyn FnMut(RelaxProgressEvent),
) {
    relax_impl(field, passes, Some(progress));
}

fn relax_impl(
    field: &mut Field,
    passes: usize,
    mut progress: Option<&mut dyn FnMut(RelaxProgressEvent)>,
) {
    let n = field.size();
    let v = field.as_matrix_mut();

    for pass in 0..passes {
        for i in 1..n - 1 {
            for j in 1..n - 1 {
                // Summation order is part of the numeric trajectory.
                v[(i, j)] = 0.25 * (v[(i + 1, j)] + v[(i - 1, j)] + v[(i, j + 1)] + v[(i, j - 1)]);
            }
        }
        if let Some(cb) = progress.as_mut() {
            cb(RelaxProgressEvent {
                pass: pass + 1,
                total_passes: passes,
            });
        }
    }
}
