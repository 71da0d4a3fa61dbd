//! Radial-mean structure isolation.
//!
//! Ring images carry a strong row-wise (radial) brightness gradient from
//! illumination and viewing geometry that masks weaker azimuthal structure
//! such as density waves and clumps. Subtracting each row's mean is a
//! zero-parameter way to expose that structure.

use ring_common::Raster;

/// Subtract the per-row mean from every row of the image.
///
/// The mean is computed over each row's finite values only. A row with no
/// finite values gets a NaN mean, which propagates NaN across the whole
/// output row; that is the accepted policy rather than an error. The output
/// has the same shape as the input.
pub fn subtract_radial_mean(image: &Raster) -> Raster {
    let mut data = Vec::with_capacity(image.len());
    for row in image.rows() {
        let mean = row_mean(row);
        data.extend(row.iter().map(|&v| v - mean));
    }
    // Shape is preserved, so the length check cannot fail
    Raster::new(image.width(), image.height(), data)
        .unwrap_or_else(|_| unreachable!("shape-preserving map"))
}

/// NaN-aware mean of one row; NaN when no finite value exists.
fn row_mean(row: &[f32]) -> f32 {
    let mut sum = 0.0f64;
    let mut count = 0usize;
    for &v in row {
        if v.is_finite() {
            sum += v as f64;
            count += 1;
        }
    }
    if count == 0 {
        f32::NAN
    } else {
        (sum / count as f64) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{assert_approx_eq, create_all_nan_raster, create_ring_raster};

    #[test]
    fn test_example_with_nan() {
        let image = Raster::new(3, 2, vec![1.0, 2.0, f32::NAN, 4.0, 5.0, 6.0]).unwrap();
        let residual = subtract_radial_mean(&image);

        assert_approx_eq!(residual.get(0, 0), -0.5, 1e-6);
        assert_approx_eq!(residual.get(0, 1), 0.5, 1e-6);
        assert!(residual.get(0, 2).is_nan());
        assert_approx_eq!(residual.get(1, 0), -1.0, 1e-6);
        assert_approx_eq!(residual.get(1, 1), 0.0, 1e-6);
        assert_approx_eq!(residual.get(1, 2), 1.0, 1e-6);
    }

    #[test]
    fn test_shape_preserved() {
        let image = create_ring_raster(24, 12);
        let residual = subtract_radial_mean(&image);
        assert_eq!(residual.width(), image.width());
        assert_eq!(residual.height(), image.height());
    }

    #[test]
    fn test_residual_rows_have_zero_mean() {
        let image = create_ring_raster(64, 16);
        let residual = subtract_radial_mean(&image);
        for row in residual.rows() {
            let finite: Vec<f32> = row.iter().copied().filter(|v| v.is_finite()).collect();
            let mean: f64 = finite.iter().map(|&v| v as f64).sum::<f64>() / finite.len() as f64;
            assert_approx_eq!(mean, 0.0, 1e-5);
        }
    }

    #[test]
    fn test_second_application_is_identity() {
        let image = create_ring_raster(32, 8);
        let once = subtract_radial_mean(&image);
        let twice = subtract_radial_mean(&once);
        for (a, b) in once.data().iter().zip(twice.data()) {
            assert_approx_eq!(*a, *b, 1e-5);
        }
    }

    #[test]
    fn test_all_nan_row_propagates() {
        let image = Raster::new(2, 2, vec![f32::NAN, f32::NAN, 1.0, 3.0]).unwrap();
        let residual = subtract_radial_mean(&image);
        assert!(residual.get(0, 0).is_nan());
        assert!(residual.get(0, 1).is_nan());
        assert_approx_eq!(residual.get(1, 0), -1.0, 1e-6);
        assert_approx_eq!(residual.get(1, 1), 1.0, 1e-6);
    }

    #[test]
    fn test_all_nan_image_stays_nan() {
        let residual = subtract_radial_mean(&create_all_nan_raster(3, 3));
        assert!(residual.data().iter().all(|v| v.is_nan()));
    }
}
