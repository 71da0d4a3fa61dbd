//! Raster generators for creating synthetic ring-like test data.
//!
//! These generators create predictable, verifiable sample patterns that can
//! be used across the test suite.

use ring_common::Raster;

/// Creates a raster with predictable values.
///
/// Each sample is `col * 1000 + row`, which makes it easy to verify that
/// data survives reads, crops, and resampling: `get(row, col)` must equal
/// `col * 1000 + row`.
pub fn create_index_raster(width: usize, height: usize) -> Raster {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f32);
        }
    }
    raster(width, height, data)
}

/// Creates a ring-like raster: a strong radial brightness gradient with a
/// weaker sinusoidal azimuthal wave on top.
///
/// Rows are radius bins, columns longitude bins, matching map-projected ring
/// imagery. The radial trend dominates, so subtracting each row's mean must
/// leave only the azimuthal wave.
pub fn create_ring_raster(width: usize, height: usize) -> Raster {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        let radial = 0.2 + 0.6 * (row as f32 / height.max(1) as f32);
        for col in 0..width {
            let phase = col as f32 / width.max(1) as f32 * std::f32::consts::TAU;
            let azimuthal = 0.02 * (3.0 * phase).sin();
            data.push(radial + azimuthal);
        }
    }
    raster(width, height, data)
}

/// Creates a raster where every sample on the main diagonal is NaN.
pub fn create_raster_with_nans(width: usize, height: usize) -> Raster {
    let mut r = create_ring_raster(width, height);
    for i in 0..height.min(width) {
        r.set(i, i, f32::NAN);
    }
    r
}

/// Creates a raster whose samples are all NaN.
pub fn create_all_nan_raster(width: usize, height: usize) -> Raster {
    Raster::filled(width, height, f32::NAN)
}

fn raster(width: usize, height: usize, data: Vec<f32>) -> Raster {
    // Generators always produce matching lengths
    Raster::new(width, height, data).unwrap_or_else(|_| unreachable!("generator shape"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_raster_values() {
        let r = create_index_raster(10, 5);
        assert_eq!(r.len(), 50);
        assert_eq!(r.get(0, 0), 0.0);
        assert_eq!(r.get(0, 1), 1000.0);
        assert_eq!(r.get(1, 0), 1.0);
        assert_eq!(r.get(3, 7), 7003.0);
    }

    #[test]
    fn test_ring_raster_radial_trend() {
        let r = create_ring_raster(16, 8);
        // Row means grow with radius
        let mean = |row: &[f32]| row.iter().sum::<f32>() / row.len() as f32;
        assert!(mean(r.row(7)) > mean(r.row(0)));
    }

    #[test]
    fn test_nan_raster_diagonal() {
        let r = create_raster_with_nans(6, 4);
        for i in 0..4 {
            assert!(r.get(i, i).is_nan());
        }
        assert!(!r.get(0, 1).is_nan());
    }
}
