//! Ring-plane coordinate mapping derived from cube labels.

use cube_io::Label;
use ring_common::RingResult;
use serde::{Deserialize, Serialize};

/// Label path of the mapping group.
const MAPPING_GROUP: [&str; 2] = ["IsisCube", "Mapping"];

/// Stored radii are in micrometers; reported radii in megameters.
const RADIUS_SCALE: f64 = 1_000_000.0;

/// Physical extent and resolution of a map-projected ring image.
///
/// Rows of the associated raster span `min_radius..max_radius` (megameters),
/// columns span `min_longitude..max_longitude` (degrees). Built once at cube
/// load time and immutable afterwards; the source metadata is trusted, so
/// bound ordering is not re-validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingMapping {
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub resolution_value: f64,
    pub resolution_unit: String,
}

impl RingMapping {
    /// Derive the mapping from a cube label.
    ///
    /// Radius keywords are converted from stored micrometers to megameters;
    /// longitudes pass through unchanged. Any missing keyword is fatal;
    /// there are no synthetic defaults.
    pub fn from_label(label: &Label) -> RingResult<Self> {
        let min_radius = read_mapping_value(label, "MinimumRingRadius")? / RADIUS_SCALE;
        let max_radius = read_mapping_value(label, "MaximumRingRadius")? / RADIUS_SCALE;
        let min_longitude = read_mapping_value(label, "MinimumRingLongitude")?;
        let max_longitude = read_mapping_value(label, "MaximumRingLongitude")?;

        let resolution = label.keyword(&["IsisCube", "Mapping", "PixelResolution"])?;
        let resolution_value = resolution.as_f64().ok_or_else(|| {
            ring_common::RingError::invalid_parameter(
                "PixelResolution",
                "keyword value is not numeric",
            )
        })?;
        // A bare numeric resolution has no unit to report
        let resolution_unit = resolution.unit().unwrap_or("").to_string();

        Ok(Self {
            min_longitude,
            max_longitude,
            min_radius,
            max_radius,
            resolution_value,
            resolution_unit,
        })
    }

    /// Plot extent in the fixed order `[min_lon, max_lon, min_rad, max_rad]`.
    pub fn extent(&self) -> [f64; 4] {
        [
            self.min_longitude,
            self.max_longitude,
            self.min_radius,
            self.max_radius,
        ]
    }
}

fn read_mapping_value(label: &Label, keyword: &str) -> RingResult<f64> {
    let path = [MAPPING_GROUP[0], MAPPING_GROUP[1], keyword];
    let value = label.keyword(&path)?;
    value.as_f64().ok_or_else(|| {
        ring_common::RingError::invalid_parameter(keyword, "keyword value is not numeric")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_io::LabelValue;
    use test_utils::{ring_label, TEST_MAX_LONGITUDE, TEST_MIN_LONGITUDE};

    #[test]
    fn test_radius_conversion_to_megameters() {
        let mapping = RingMapping::from_label(&ring_label()).unwrap();
        // 74_000_000 um stored -> 74.0 Mm
        assert_eq!(mapping.min_radius, 74.0);
        assert_eq!(mapping.max_radius, 92.0);
    }

    #[test]
    fn test_longitudes_pass_through() {
        let mapping = RingMapping::from_label(&ring_label()).unwrap();
        assert_eq!(mapping.min_longitude, TEST_MIN_LONGITUDE);
        assert_eq!(mapping.max_longitude, TEST_MAX_LONGITUDE);
    }

    #[test]
    fn test_resolution_split_into_value_and_unit() {
        let mapping = RingMapping::from_label(&ring_label()).unwrap();
        assert_eq!(mapping.resolution_value, 500.0);
        assert_eq!(mapping.resolution_unit, "m/pixel");
    }

    #[test]
    fn test_bare_numeric_resolution_has_empty_unit() {
        let label = Label::new().with_group(
            "IsisCube",
            Label::new().with_group(
                "Mapping",
                Label::new()
                    .with_value("MinimumRingRadius", LabelValue::Real(74_000_000.0))
                    .with_value("MaximumRingRadius", LabelValue::Real(92_000_000.0))
                    .with_value("MinimumRingLongitude", LabelValue::Real(0.0))
                    .with_value("MaximumRingLongitude", LabelValue::Real(10.0))
                    .with_value("PixelResolution", LabelValue::Real(2.0)),
            ),
        );
        let mapping = RingMapping::from_label(&label).unwrap();
        assert_eq!(mapping.resolution_value, 2.0);
        assert_eq!(mapping.resolution_unit, "");
    }

    #[test]
    fn test_missing_keyword_is_fatal() {
        let label = Label::new().with_group(
            "IsisCube",
            Label::new().with_group(
                "Mapping",
                Label::new().with_value("MinimumRingRadius", LabelValue::Real(74_000_000.0)),
            ),
        );
        let err = RingMapping::from_label(&label).unwrap_err();
        assert!(err.to_string().contains("MaximumRingRadius"));
    }

    #[test]
    fn test_extent_order() {
        let mapping = RingMapping::from_label(&ring_label()).unwrap();
        assert_eq!(mapping.extent(), [130.0, 145.0, 74.0, 92.0]);
    }

    #[test]
    fn test_mapping_serializes() {
        let mapping = RingMapping::from_label(&ring_label()).unwrap();
        let json = serde_json::to_string(&mapping).unwrap();
        let back: RingMapping = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mapping);
    }
}
