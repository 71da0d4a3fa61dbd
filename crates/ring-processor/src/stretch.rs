//! Percentile-based display stretching.
//!
//! Raw min/max bounds are dominated by outliers and noise in planetary
//! imagery; clipping to low/high percentiles of the finite pixel population
//! gives a perceptually stable contrast range independent of absolute
//! calibration scale.

use ring_common::{Raster, RingError, RingResult};
use serde::{Deserialize, Serialize};

/// Default lower display percentile.
pub const DEFAULT_LOW_PERCENTILE: f64 = 2.0;
/// Default upper display percentile.
pub const DEFAULT_HIGH_PERCENTILE: f64 = 98.0;

/// Display value range for a single render.
///
/// Recomputed on every render request, never cached on the cube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayStretch {
    /// Pixel value mapped to the display's black point.
    pub low: f64,
    /// Pixel value mapped to the display's white point.
    pub high: f64,
}

/// Compute display bounds from the given percentiles over finite pixels.
///
/// Percentiles are linearly interpolated between order statistics. An image
/// with no finite pixels cannot be stretched and fails with
/// `NoValidPixels`; percentiles outside `0..=100` or in reversed order fail
/// with `InvalidParameter`.
pub fn compute_stretch(
    image: &Raster,
    low_percentile: f64,
    high_percentile: f64,
) -> RingResult<DisplayStretch> {
    for (name, p) in [
        ("low_percentile", low_percentile),
        ("high_percentile", high_percentile),
    ] {
        if !(0.0..=100.0).contains(&p) {
            return Err(RingError::invalid_parameter(name, "must be in 0..=100"));
        }
    }
    if low_percentile > high_percentile {
        return Err(RingError::invalid_parameter(
            "low_percentile",
            "must not exceed high_percentile",
        ));
    }

    let mut finite: Vec<f32> = image.finite_values().collect();
    if finite.is_empty() {
        return Err(RingError::NoValidPixels);
    }
    finite.sort_by(f32::total_cmp);

    Ok(DisplayStretch {
        low: percentile_of_sorted(&finite, low_percentile),
        high: percentile_of_sorted(&finite, high_percentile),
    })
}

/// Linearly interpolated percentile over an ascending-sorted slice.
fn percentile_of_sorted(sorted: &[f32], percentile: f64) -> f64 {
    let last = sorted.len() - 1;
    let rank = percentile / 100.0 * last as f64;
    let below = rank.floor() as usize;
    let above = rank.ceil() as usize;
    let low = sorted[below] as f64;
    let high = sorted[above.min(last)] as f64;
    low + (high - low) * (rank - below as f64)
}
