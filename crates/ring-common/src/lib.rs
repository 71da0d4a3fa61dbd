//! Common types shared across the ring-imaging workspace.

pub mod error;
pub mod raster;

pub use error::{RingError, RingResult};
pub use raster::Raster;
