//! gf-core: stable foundation for gelflow.
//!
//! Contains:
//! - units (uom SI types + constructors for hydrogel metadata)
//! - numeric (Real + float checks)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::GfError;
pub use numeric::*;
pub use units::*;
