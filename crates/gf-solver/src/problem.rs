//! Fixed inputs shared by every step of a sweep.

use gf_core::{Real, ensure_finite};

use crate::boundary::BoundarySpec;
use crate::error::SolverResult;
use crate::field::{Field, check_grid_size};
use crate::relax::relax;
use crate::sample::{DEFAULT_RADIUS_FRACTION, SamplePoints, Samples};

/// Grid size, edge values, interior guess and measurement points.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffusionProblem {
    size: usize,
    interior_guess: Real,
    boundary: BoundarySpec,
    radius_fraction: Real,
    sample_points: SamplePoints,
}

impl DiffusionProblem {
    pub fn new(
        size: usize,
        interior_guess: Real,
        boundary: BoundarySpec,
        radius_fraction: Real,
    ) -> SolverResult<Self> {
        ensure_finite(interior_guess, "interior guess")?;
        boundary.validate()?;
        check_grid_size(size)?;
        let sample_points = SamplePoints::on_circle(size, radius_fraction)?;
        Ok(Self {
            size,
            interior_guess,
            boundary,
            radius_fraction,
            sample_points,
        })
    }

    /// 60x60 channel, concentration 100 on top/left/right, 0 on the bottom,
    /// empty gel at start.
    pub fn reference() -> SolverResult<Self> {
        Self::new(60, 0.0, BoundarySpec::default(), DEFAULT_RADIUS_FRACTION)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn interior_guess(&self) -> Real {
        self.interior_guess
    }

    pub fn boundary(&self) -> &BoundarySpec {
        &self.boundary
    }

    pub fn radius_fraction(&self) -> Real {
        self.radius_fraction
    }

    /// Probe radius in cells.
    pub fn probe_radius(&self) -> Real {
        self.radius_fraction * self.size as Real
    }

    pub fn sample_points(&self) -> &SamplePoints {
        &self.sample_points
    }

    /// Fresh field at the initial guess.
    pub fn initial_field(&self) -> SolverResult<Field> {
        Field::initialize(self.size, self.interior_guess, &self.boundary)
    }

    /// Build a fresh field, relax it `passes` times and sample it.
    pub fn solve(&self, passes: usize) -> SolverResult<(Field, Samples)> {
        let mut field = self.initial_field()?;
        relax(&mut field, passes);
        let samples = self.sample_points.read(&field)?;
        Ok((field, samples))
    }
}
