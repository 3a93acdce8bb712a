//! Finite-difference relaxation solver for steady-state diffusion in a square
//! hydrogel channel around a cylindrical probe.
//!
//! The field is a scalar concentration on an N x N lattice. Edges hold fixed
//! values, the interior starts at a uniform guess and is relaxed in place with
//! Gauss-Seidel neighbour averaging for a caller-chosen number of passes.
//! Four points on a circle around the probe are then sampled.
//!
//! Index convention everywhere: `(row, col) = (y, x)`, row 0 at the bottom.

pub mod boundary;
pub mod error;
pub mod field;
pub mod problem;
pub mod relax;
pub mod sample;
pub mod sweep;

pub use boundary::BoundarySpec;
pub use error::{SolverError, SolverResult};
pub use field::{Field, MIN_GRID_SIZE, check_grid_size};
pub use problem::DiffusionProblem;
pub use relax::{RelaxProgressEvent, relax, relax_with_progress};
pub use sample::{GridPoint, SampleLabel, SamplePoints, Samples, DEFAULT_RADIUS_FRACTION};
pub use sweep::{SweepDefinition, SweepEntry, SweepRecord, execute_sweep, execute_sweep_with};
