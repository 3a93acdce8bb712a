//! Measurement points around the probe.
//!
//! ```text
//!         B
//!     A   O   C
//!         D
//! ```
//!
//! `O` is the probe at the centre of the channel cross-section. The four points
//! sit on a circle of radius `radius_fraction * N`, with coordinates truncated
//! toward zero.

use std::fmt;

use gf_core::{Real, truncate_to_index};

use crate::error::{SolverError, SolverResult};
use crate::field::Field;

/// Probe radius as a fraction of the grid side.
pub const DEFAULT_RADIUS_FRACTION: Real = 0.416;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleLabel {
    /// 180°, left of the probe
    A,
    /// 90°, above the probe
    B,
    /// 0°, right of the probe
    C,
    /// 270°, below the probe
    D,
}

impl SampleLabel {
    pub const ALL: [SampleLabel; 4] = [SampleLabel::A, SampleLabel::B, SampleLabel::C, SampleLabel::D];

    pub fn index(self) -> usize {
        match self {
            SampleLabel::A => 0,
            SampleLabel::B => 1,
            SampleLabel::C => 2,
            SampleLabel::D => 3,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            SampleLabel::A => 'A',
            SampleLabel::B => 'B',
            SampleLabel::C => 'C',
            SampleLabel::D => 'D',
        }
    }

    /// Unit offset `(dx, dy)` from the centre.
    fn direction(self) -> (Real, Real) {
        match self {
            SampleLabel::A => (-1.0, 0.0),
            SampleLabel::B => (0.0, 1.0),
            SampleLabel::C => (1.0, 0.0),
            SampleLabel::D => (0.0, -1.0),
        }
    }
}

impl fmt::Display for SampleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Integer lattice point, `x` = column and `y` = row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: usize,
    pub y: usize,
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four measurement points A, B, C, D for one grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePoints {
    points: [GridPoint; 4],
    grid_size: usize,
}

impl SamplePoints {
    /// Place the points on a circle of radius `radius_fraction * size`
    /// centred at `(size / 2, size / 2)`.
    ///
    /// Every point must land strictly inside the grid, otherwise a sample
    /// would read a fixed edge value instead of the relaxed field.
    pub fn on_circle(size: usize, radius_fraction: Real) -> SolverResult<Self> {
        if !(radius_fraction.is_finite() && radius_fraction > 0.0) {
            return Err(SolverError::invalid(format!(
                "probe radius fraction must be positive and finite, got {radius_fraction}"
            )));
        }

        let n = size as Real;
        let centre = n / 2.0;
        let radius = radius_fraction * n;

        let mut points = [GridPoint { x: 0, y: 0 }; 4];
        for label in SampleLabel::ALL {
            let (dx, dy) = label.direction();
            let x = centre + dx * radius;
            let y = centre + dy * radius;
            let out_of_bounds = || SolverError::SamplePointOutOfBounds {
                label: label.as_char(),
                x,
                y,
                size,
            };
            let xi = truncate_to_index(x, "sample x").map_err(|_| out_of_bounds())?;
            let yi = truncate_to_index(y, "sample y").map_err(|_| out_of_bounds())?;
            if !is_interior(xi, size) || !is_interior(yi, size) {
                return Err(out_of_bounds());
            }
            points[label.index()] = GridPoint { x: xi, y: yi };
        }

        let [a, b, c, d] = points;
        tracing::debug!(
            size,
            radius_fraction,
            a = %a,
            b = %b,
            c = %c,
            d = %d,
            "sample positions"
        );
        Ok(Self {
            points,
            grid_size: size,
        })
    }

    pub fn point(&self, label: SampleLabel) -> GridPoint {
        self.points[label.index()]
    }

    pub fn points(&self) -> &[GridPoint; 4] {
        &self.points
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Exact cell lookup at `(row = y, col = x)` for each point.
    pub fn read(&self, field: &Field) -> SolverResult<Samples> {
        if field.size() != self.grid_size {
            return Err(SolverError::invalid(format!(
                "sample points were laid out for a {0}x{0} grid, field is {1}x{1}",
                self.grid_size,
                field.size()
            )));
        }
        let mut values = [0.0; 4];
        for (value, p) in values.iter_mut().zip(&self.points) {
            *value = field.get(p.y, p.x);
        }
        Ok(Samples(values))
    }
}

fn is_interior(coord: usize, size: usize) -> bool {
    coord >= 1 && coord + 2 <= size
}

/// Readings at A, B, C, D, in that order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Samples(pub [Real; 4]);

impl Samples {
    pub fn get(&self, label: SampleLabel) -> Real {
        self.0[label.index()]
    }

    pub fn values(&self) -> &[Real; 4] {
        &self.0
    }

    pub fn min(&self) -> Real {
        self.0.iter().copied().fold(Real::INFINITY, Real::min)
    }

    pub fn max(&self) -> Real {
        self.0.iter().copied().fold(Real::NEG_INFINITY, Real::max)
    }
}

impl fmt::Display for Samples {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A={:.6} B={:.6} C={:.6} D={:.6}",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}
