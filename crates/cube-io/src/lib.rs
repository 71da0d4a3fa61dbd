//! Cube file access for calibrated, map-projected ring imagery.
//!
//! This crate covers the I/O boundary of the workspace:
//! - the label data model and keyword lookup ([`label`])
//! - special-pixel sentinel handling ([`special`])
//! - compression-type detection ([`compression`])
//! - the cube-reader collaborator contract ([`reader`])
//! - catalog listing of candidate cube files ([`catalog`])
//!
//! Decoding the raster file format itself is left to [`reader::CubeReader`]
//! implementations; everything here consumes already-parsed values.

pub mod catalog;
pub mod compression;
pub mod label;
pub mod reader;
pub mod special;

pub use catalog::CubeCatalog;
pub use compression::{detect_compression, is_lossy, CompressionKind};
pub use label::{Label, LabelEntry, LabelValue};
pub use reader::{CubeData, CubeReader};
pub use special::{default_sentinels, replace_special_values};
