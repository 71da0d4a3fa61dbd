//! Common fixtures: labels, in-memory cubes, and catalog trees.

use crate::generators::create_ring_raster;
use cube_io::{CubeData, CubeReader, Label, LabelValue};
use ring_common::{Raster, RingError, RingResult};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Mapping bounds used by the standard test label.
///
/// Radii are stored label-style (micrometers); longitudes in degrees.
pub const TEST_MIN_RADIUS: f64 = 74_000_000.0;
pub const TEST_MAX_RADIUS: f64 = 92_000_000.0;
pub const TEST_MIN_LONGITUDE: f64 = 130.0;
pub const TEST_MAX_LONGITUDE: f64 = 145.0;
pub const TEST_RESOLUTION: f64 = 500.0;
pub const TEST_IMAGE_TIME: &str = "2005-10-29T10:46:33.712";

/// Build a complete cube label with mapping and instrument groups.
pub fn ring_label() -> Label {
    ring_label_with_compression("LOSSLESS")
}

/// Build a complete cube label with the given compression-type value.
pub fn ring_label_with_compression(compression: &str) -> Label {
    Label::new().with_group(
        "IsisCube",
        Label::new()
            .with_group(
                "Mapping",
                Label::new()
                    .with_value("MinimumRingRadius", LabelValue::Real(TEST_MIN_RADIUS))
                    .with_value("MaximumRingRadius", LabelValue::Real(TEST_MAX_RADIUS))
                    .with_value("MinimumRingLongitude", LabelValue::Real(TEST_MIN_LONGITUDE))
                    .with_value("MaximumRingLongitude", LabelValue::Real(TEST_MAX_LONGITUDE))
                    .with_value(
                        "PixelResolution",
                        LabelValue::Quantity {
                            value: TEST_RESOLUTION,
                            unit: "m/pixel".to_string(),
                        },
                    ),
            )
            .with_group(
                "Instrument",
                Label::new()
                    .with_value("ImageTime", LabelValue::Text(TEST_IMAGE_TIME.to_string()))
                    .with_value("INST_CMPRS_TYPE", LabelValue::Text(compression.to_string())),
            ),
    )
}

/// Cube contents with the standard test label and a ring-like raster.
pub fn ring_cube_data(width: usize, height: usize) -> CubeData {
    CubeData {
        label: ring_label(),
        samples: create_ring_raster(width, height),
        special_values: cube_io::default_sentinels(),
    }
}

/// Cube contents with a caller-supplied raster and the standard test label.
pub fn cube_data_with_samples(samples: Raster) -> CubeData {
    CubeData {
        label: ring_label(),
        samples,
        special_values: cube_io::default_sentinels(),
    }
}

/// In-memory [`CubeReader`] for tests and examples.
///
/// Opens only the paths it was seeded with; everything else fails with
/// `UnreadableCube`, mirroring a decoder hitting a malformed file.
#[derive(Debug, Default)]
pub struct MemoryCubeReader {
    cubes: HashMap<PathBuf, CubeData>,
}

impl MemoryCubeReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the reader with cube contents for a path (builder form).
    pub fn with_cube(mut self, path: impl Into<PathBuf>, data: CubeData) -> Self {
        self.cubes.insert(path.into(), data);
        self
    }

    /// Seed the reader with cube contents for a path.
    pub fn insert(&mut self, path: impl Into<PathBuf>, data: CubeData) {
        self.cubes.insert(path.into(), data);
    }
}

impl CubeReader for MemoryCubeReader {
    fn open(&self, path: &Path) -> RingResult<CubeData> {
        self.cubes
            .get(path)
            .cloned()
            .ok_or_else(|| RingError::UnreadableCube(path.display().to_string()))
    }
}

/// Create an on-disk catalog tree under `root` with the given observation
/// names, one `<name>/<name>.map.cal.cub` placeholder file each.
///
/// Returns the created cube paths in the order given.
pub fn create_catalog_tree(root: &Path, names: &[&str]) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(names.len());
    for name in names {
        let dir = root.join("opus").join(name);
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("{name}.map.cal.cub"));
        fs::write(&path, b"")?;
        paths.push(path);
    }
    Ok(paths)
}
