//! End-to-end tests for the open -> extract -> stretch -> residual pipeline.

use cube_io::{CubeData, Label, LabelValue};
use ring_common::{Raster, RingError};
use ring_processor::{compute_stretch, subtract_radial_mean, RingCube};
use test_utils::{assert_approx_eq, ring_cube_data, MemoryCubeReader};

const CUBE_PATH: &str = "/data/opus/N1467345444/N1467345444.map.cal.cub";

#[test]
fn test_full_pipeline_on_ring_cube() {
    let reader = MemoryCubeReader::new().with_cube(CUBE_PATH, ring_cube_data(64, 32));
    let cube = RingCube::open(CUBE_PATH, &reader).unwrap();

    let image = cube.image();
    let stretch = compute_stretch(&image, 2.0, 98.0).unwrap();
    assert!(stretch.low <= stretch.high);

    let residual = subtract_radial_mean(&image);
    assert_eq!(residual.width(), image.width());
    assert_eq!(residual.height(), image.height());

    // The radial gradient is gone: every residual row is centered on zero
    for row in residual.rows() {
        let mean: f64 = row.iter().map(|&v| v as f64).sum::<f64>() / row.len() as f64;
        assert_approx_eq!(mean, 0.0, 1e-5);
    }
}

#[test]
fn test_sentinel_replaced_example_residual() {
    // Raster [[1, 2, NaN], [4, 5, 6]], sentinel-replaced already
    let image = Raster::new(3, 2, vec![1.0, 2.0, f32::NAN, 4.0, 5.0, 6.0]).unwrap();
    let residual = subtract_radial_mean(&image);

    let expected = [[-0.5, 0.5, f32::NAN], [-1.0, 0.0, 1.0]];
    for (row, expected_row) in expected.iter().enumerate() {
        for (col, &want) in expected_row.iter().enumerate() {
            let got = residual.get(row, col);
            if want.is_nan() {
                assert!(got.is_nan(), "({row}, {col}) should be NaN");
            } else {
                assert_approx_eq!(got, want, 1e-6);
            }
        }
    }
}

#[test]
fn test_label_without_resolution_fails_open() {
    // Mapping group missing PixelResolution
    let label = Label::new().with_group(
        "IsisCube",
        Label::new()
            .with_group(
                "Mapping",
                Label::new()
                    .with_value("MinimumRingRadius", LabelValue::Real(74_000_000.0))
                    .with_value("MaximumRingRadius", LabelValue::Real(92_000_000.0))
                    .with_value("MinimumRingLongitude", LabelValue::Real(130.0))
                    .with_value("MaximumRingLongitude", LabelValue::Real(145.0)),
            )
            .with_group(
                "Instrument",
                Label::new()
                    .with_value("ImageTime", LabelValue::Text("2005-10-29T10:46:33".into()))
                    .with_value("INST_CMPRS_TYPE", LabelValue::Text("LOSSY".into())),
            ),
    );
    let data = CubeData {
        label,
        samples: Raster::filled(4, 4, 0.5),
        special_values: cube_io::default_sentinels(),
    };
    let reader = MemoryCubeReader::new().with_cube(CUBE_PATH, data);

    let err = RingCube::open(CUBE_PATH, &reader).unwrap_err();
    match err {
        RingError::MissingKeyword(path) => assert!(path.contains("PixelResolution")),
        other => panic!("expected MissingKeyword, got {other:?}"),
    }
}

#[test]
fn test_distinct_cubes_are_independent() {
    // A failing cube must not affect another cube's pipeline
    let good = ring_cube_data(8, 4);
    let reader = MemoryCubeReader::new().with_cube(CUBE_PATH, good);

    assert!(RingCube::open("/data/opus/X/X.map.cal.cub", &reader).is_err());

    let cube = RingCube::open(CUBE_PATH, &reader).unwrap();
    assert!(compute_stretch(&cube.image(), 2.0, 98.0).is_ok());
}
