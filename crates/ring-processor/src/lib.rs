//! Core processing for ring-image cubes.
//!
//! Covers the numeric/geometric heart of the workspace: the cube entity
//! ([`cube::RingCube`]), the label-derived coordinate mapping
//! ([`mapping::RingMapping`]), robust display stretching
//! ([`stretch::compute_stretch`]), and radial-mean structure isolation
//! ([`residual::subtract_radial_mean`]).

pub mod cube;
pub mod mapping;
pub mod residual;
pub mod stretch;

pub use cube::RingCube;
pub use mapping::RingMapping;
pub use residual::subtract_radial_mean;
pub use stretch::{compute_stretch, DisplayStretch, DEFAULT_HIGH_PERCENTILE, DEFAULT_LOW_PERCENTILE};
