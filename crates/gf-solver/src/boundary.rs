use gf_core::{Real, ensure_finite};

use crate::error::SolverResult;

/// Constant values stamped on the four edges of the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySpec {
    pub top: Real,
    pub bottom: Real,
    pub left: Real,
    pub right: Real,
}

impl BoundarySpec {
    pub fn new(top: Real, bottom: Real, left: Real, right: Real) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Same value on every edge.
    pub fn uniform(value: Real) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn validate(&self) -> SolverResult<()> {
        ensure_finite(self.top, "boundary.top")?;
        ensure_finite(self.bottom, "boundary.bottom")?;
        ensure_finite(self.left, "boundary.left")?;
        ensure_finite(self.right, "boundary.right")?;
        Ok(())
    }

    pub fn min(&self) -> Real {
        self.top.min(self.bottom).min(self.left).min(self.right)
    }

    pub fn max(&self) -> Real {
        self.top.max(self.bottom).max(self.left).max(self.right)
    }
}

impl Default for BoundarySpec {
    /// Open top, left and right faces at full concentration; sealed bottom.
    fn default() -> Self {
        Self::new(100.0, 0.0, 100.0, 100.0)
    }
}
