//! The ring-image cube entity.

use crate::mapping::RingMapping;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use cube_io::{detect_compression, replace_special_values, CompressionKind, CubeReader, Label};
use ring_common::{Raster, RingResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Label path of the instrument timestamp.
const IMAGE_TIME_PATH: [&str; 3] = ["IsisCube", "Instrument", "ImageTime"];

/// A calibrated, map-projected ring image with its coordinate mapping.
///
/// Constructed by opening a file path through a [`CubeReader`]; read-only
/// for the rest of its lifetime. All label-derived attributes are resolved
/// eagerly, so a malformed label fails the open rather than a later render.
#[derive(Debug, Clone)]
pub struct RingCube {
    path: PathBuf,
    label: Label,
    samples: Raster,
    special_values: Vec<f32>,
    mapping: RingMapping,
    compression: CompressionKind,
    image_time: String,
}

impl RingCube {
    /// Open a cube file through the reader collaborator.
    pub fn open(path: impl Into<PathBuf>, reader: &dyn CubeReader) -> RingResult<Self> {
        let path = path.into();
        let data = reader.open(&path)?;
        let mapping = RingMapping::from_label(&data.label)?;
        let compression = detect_compression(&data.label)?;
        let image_time = data
            .label
            .keyword(&IMAGE_TIME_PATH)?
            .as_text()
            .unwrap_or_default()
            .to_string();

        debug!(
            path = %path.display(),
            width = data.samples.width(),
            height = data.samples.height(),
            "opened ring cube"
        );

        Ok(Self {
            path,
            label: data.label,
            samples: data.samples,
            special_values: data.special_values,
            mapping,
            compression,
            image_time,
        })
    }

    /// Path the cube was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The attached metadata label.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Raw stored samples, sentinels included.
    pub fn samples(&self) -> &Raster {
        &self.samples
    }

    /// The label-derived coordinate mapping.
    pub fn mapping(&self) -> &RingMapping {
        &self.mapping
    }

    /// Onboard compression recorded for the image.
    pub fn compression(&self) -> CompressionKind {
        self.compression
    }

    /// Raw instrument timestamp string from the label.
    pub fn image_time(&self) -> &str {
        &self.image_time
    }

    /// Instrument timestamp parsed as UTC, when it parses.
    pub fn image_time_utc(&self) -> Option<DateTime<Utc>> {
        let s = self.image_time.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|ndt| Utc.from_utc_datetime(&ndt))
    }

    /// The calibrated image: stored samples with sentinel codes replaced by
    /// NaN.
    ///
    /// Computed per call and never cached; callers needing the image
    /// repeatedly should hold their own copy.
    pub fn image(&self) -> Raster {
        replace_special_values(&self.samples, &self.special_values)
    }

    /// The central half of the image, a quarter margin trimmed on each side.
    pub fn inner_zoom(&self) -> Raster {
        let image = self.image();
        let top = image.height() / 4;
        let left = image.width() / 4;
        let height = 3 * image.height() / 4 - top;
        let width = 3 * image.width() / 4 - left;
        // The window is inside the image by construction
        image
            .crop(top, left, height, width)
            .unwrap_or_else(|_| unreachable!("central window"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use cube_io::special::NULL_BITS;
    use test_utils::{cube_data_with_samples, ring_cube_data, MemoryCubeReader, TEST_IMAGE_TIME};

    const CUBE_PATH: &str = "/data/opus/N1467345444/N1467345444.map.cal.cub";

    fn open_test_cube() -> RingCube {
        let reader = MemoryCubeReader::new().with_cube(CUBE_PATH, ring_cube_data(16, 8));
        RingCube::open(CUBE_PATH, &reader).unwrap()
    }

    #[test]
    fn test_open_resolves_metadata_eagerly() {
        let cube = open_test_cube();
        assert_eq!(cube.mapping().min_radius, 74.0);
        assert_eq!(cube.compression(), CompressionKind::Lossless);
        assert_eq!(cube.image_time(), TEST_IMAGE_TIME);
    }

    #[test]
    fn test_image_time_parses_to_utc() {
        let cube = open_test_cube();
        let t = cube.image_time_utc().unwrap();
        assert_eq!(t.hour(), 10);
        assert_eq!(t.minute(), 46);
    }

    #[test]
    fn test_image_replaces_sentinels() {
        let null = f32::from_bits(NULL_BITS);
        let samples = Raster::new(2, 2, vec![0.5, null, 0.7, 0.9]).unwrap();
        let reader = MemoryCubeReader::new().with_cube(CUBE_PATH, cube_data_with_samples(samples));
        let cube = RingCube::open(CUBE_PATH, &reader).unwrap();

        let image = cube.image();
        assert!(image.get(0, 1).is_nan());
        assert_eq!(image.get(1, 1), 0.9);
        // Raw samples keep the sentinel
        assert!(!cube.samples().get(0, 1).is_nan());
    }

    #[test]
    fn test_inner_zoom_is_central_half() {
        let cube = open_test_cube();
        let zoom = cube.inner_zoom();
        assert_eq!(zoom.width(), 8);
        assert_eq!(zoom.height(), 4);
        assert_eq!(zoom.get(0, 0), cube.image().get(2, 4));
    }

    #[test]
    fn test_open_unreadable_path_fails() {
        let reader = MemoryCubeReader::new();
        assert!(RingCube::open("/no/such.cub", &reader).is_err());
    }
}
