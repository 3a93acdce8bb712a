//! Square scalar field with fixed edge values.

use gf_core::{Real, ensure_finite};
use nalgebra::DMatrix;

use crate::boundary::BoundarySpec;
use crate::error::{SolverError, SolverResult};

/// Smallest grid with at least one interior cell.
pub const MIN_GRID_SIZE: usize = 3;

/// Reject sizes with no interior or whose N x N storage cannot be addressed.
///
/// Does not allocate.
pub fn check_grid_size(size: usize) -> SolverResult<()> {
    if size < MIN_GRID_SIZE {
        return Err(SolverError::invalid(format!(
            "grid size must be at least {MIN_GRID_SIZE}, got {size}"
        )));
    }
    let bytes = size
        .checked_mul(size)
        .and_then(|cells| cells.checked_mul(std::mem::size_of::<Real>()))
        .filter(|&b| b <= isize::MAX as usize);
    if bytes.is_none() {
        return Err(SolverError::invalid(format!(
            "grid size {size} is too large to store"
        )));
    }
    Ok(())
}

/// Dense N x N concentration field.
///
/// Indexed `(row, col)` with row = y (row 0 is the bottom edge) and
/// col = x (column 0 is the left edge). The shape is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    values: DMatrix<Real>,
}

impl Field {
    /// Fill the interior with `guess` and stamp the edges.
    ///
    /// Edges are applied top, bottom, right, left, so the left column wins
    /// every corner it touches and the right column wins the remaining two.
    pub fn initialize(size: usize, guess: Real, boundary: &BoundarySpec) -> SolverResult<Self> {
        check_grid_size(size)?;
        ensure_finite(guess, "interior guess")?;
        boundary.validate()?;

        let last = size - 1;
        let mut values = DMatrix::from_element(size, size, guess);
        values.row_mut(last).fill(boundary.top);
        values.row_mut(0).fill(boundary.bottom);
        values.column_mut(last).fill(boundary.right);
        values.column_mut(0).fill(boundary.left);

        tracing::debug!(size, guess, ?boundary, "field initialized");
        Ok(Self { values })
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.values.nrows()
    }

    /// Value at `(row, col)`.
    ///
    /// Panics if the index is outside the grid, like slice indexing.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Real {
        self.values[(row, col)]
    }

    /// Checked lookup.
    pub fn try_get(&self, row: usize, col: usize) -> Option<Real> {
        self.values.get((row, col)).copied()
    }

    pub fn is_boundary(&self, row: usize, col: usize) -> bool {
        let last = self.size() - 1;
        row == 0 || col == 0 || row == last || col == last
    }

    /// Read-only view of the underlying matrix.
    pub fn as_matrix(&self) -> &DMatrix<Real> {
        &self.values
    }

    pub(crate) fn as_matrix_mut(&mut self) -> &mut DMatrix<Real> {
        &mut self.values
    }

    /// Smallest and largest cell values.
    pub fn min_max(&self) -> (Real, Real) {
        (self.values.min(), self.values.max())
    }

    /// Copy of row `row`, left to right.
    pub fn row(&self, row: usize) -> Vec<Real> {
        self.values.row(row).iter().copied().collect()
    }

    /// Copy of column `col`, bottom to top.
    pub fn column(&self, col: usize) -> Vec<Real> {
        self.values.column(col).iter().copied().collect()
    }
}
