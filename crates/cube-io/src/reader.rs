//! Cube reader collaborator contract.
//!
//! Decoding the raster file format is outside this workspace. Consumers
//! depend on the [`CubeReader`] trait; implementations decode a file eagerly
//! and hand back the label tree, the raw sample grid, and the sentinel codes
//! reserved by the format.

use crate::label::Label;
use ring_common::{Raster, RingResult};
use std::path::Path;

/// Fully-decoded contents of a cube file.
#[derive(Debug, Clone)]
pub struct CubeData {
    /// The attached metadata label.
    pub label: Label,
    /// Raw stored samples, row = radius bin, column = longitude bin.
    pub samples: Raster,
    /// Reserved sample codes meaning null or saturated.
    pub special_values: Vec<f32>,
}

/// Decoder for cube files.
///
/// `open` reads the whole file up front; there is no streaming interface.
/// Failures to decode surface as `UnreadableCube`, and label access problems
/// as `MissingKeyword`.
pub trait CubeReader {
    fn open(&self, path: &Path) -> RingResult<CubeData>;
}
