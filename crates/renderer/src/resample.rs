//! Resampling kernels for scaling image data into the plot area.
//!
//! All samplers take continuous source coordinates in grid space, where
//! `(0, 0)` is the center of the first sample and `(width - 1, height - 1)`
//! the center of the last. NaN samples stay NaN rather than bleeding into
//! neighbors: the smooth kernels fall back to a blunter sampler when their
//! support touches missing data.

use crate::options::Interpolation;
use ring_common::Raster;

/// Lanczos window half-width.
const LANCZOS_A: i64 = 3;

impl Interpolation {
    /// Sample the raster at continuous grid coordinates.
    pub fn sample(self, data: &Raster, x: f64, y: f64) -> f32 {
        match self {
            Interpolation::Nearest => sample_nearest(data, x, y),
            Interpolation::Bilinear => sample_bilinear(data, x, y),
            Interpolation::Cubic => sample_cubic(data, x, y),
            Interpolation::Lanczos => sample_lanczos(data, x, y),
        }
    }
}

/// Nearest-neighbor sampling.
pub fn sample_nearest(data: &Raster, x: f64, y: f64) -> f32 {
    let col = clamp_index(x.round(), data.width());
    let row = clamp_index(y.round(), data.height());
    data.get(row, col)
}

/// Bilinear sampling over the four surrounding samples.
///
/// Any NaN corner makes the result NaN, keeping missing regions sharp.
pub fn sample_bilinear(data: &Raster, x: f64, y: f64) -> f32 {
    let x0 = clamp_index(x.floor(), data.width());
    let y0 = clamp_index(y.floor(), data.height());
    let x1 = (x0 + 1).min(data.width() - 1);
    let y1 = (y0 + 1).min(data.height() - 1);

    let xf = (x - x0 as f64).clamp(0.0, 1.0) as f32;
    let yf = (y - y0 as f64).clamp(0.0, 1.0) as f32;

    let v00 = data.get(y0, x0);
    let v10 = data.get(y0, x1);
    let v01 = data.get(y1, x0);
    let v11 = data.get(y1, x1);

    if v00.is_nan() || v10.is_nan() || v01.is_nan() || v11.is_nan() {
        return f32::NAN;
    }

    let top = v00 * (1.0 - xf) + v10 * xf;
    let bottom = v01 * (1.0 - xf) + v11 * xf;
    top * (1.0 - yf) + bottom * yf
}

/// Bicubic (Catmull-Rom) sampling over a 4x4 neighborhood.
///
/// Falls back to bilinear when the neighborhood contains NaN.
pub fn sample_cubic(data: &Raster, x: f64, y: f64) -> f32 {
    let xi = x.floor() as i64;
    let yi = y.floor() as i64;
    let xf = (x - xi as f64) as f32;
    let yf = (y - yi as f64) as f32;

    let mut rows = [0.0f32; 4];
    for j in 0..4i64 {
        let mut taps = [0.0f32; 4];
        for i in 0..4i64 {
            let col = clamp_index((xi + i - 1) as f64, data.width());
            let row = clamp_index((yi + j - 1) as f64, data.height());
            let v = data.get(row, col);
            if v.is_nan() {
                return sample_bilinear(data, x, y);
            }
            taps[i as usize] = v;
        }
        rows[j as usize] = catmull_rom(taps, xf);
    }
    catmull_rom(rows, yf)
}

/// Lanczos-3 sampling over a 6x6 neighborhood.
///
/// Falls back to nearest-neighbor when the neighborhood contains non-finite
/// samples, so ringing never manufactures values next to missing data.
pub fn sample_lanczos(data: &Raster, x: f64, y: f64) -> f32 {
    let xi = x.floor() as i64;
    let yi = y.floor() as i64;

    let mut value = 0.0f64;
    let mut weight_sum = 0.0f64;
    for j in (yi - LANCZOS_A + 1)..=(yi + LANCZOS_A) {
        let wy = lanczos_kernel(y - j as f64);
        let row = clamp_index(j as f64, data.height());
        for i in (xi - LANCZOS_A + 1)..=(xi + LANCZOS_A) {
            let col = clamp_index(i as f64, data.width());
            let v = data.get(row, col);
            if !v.is_finite() {
                return sample_nearest(data, x, y);
            }
            let w = wy * lanczos_kernel(x - i as f64);
            value += v as f64 * w;
            weight_sum += w;
        }
    }
    if weight_sum == 0.0 {
        return sample_nearest(data, x, y);
    }
    (value / weight_sum) as f32
}

fn lanczos_kernel(t: f64) -> f64 {
    let a = LANCZOS_A as f64;
    if t.abs() >= a {
        return 0.0;
    }
    sinc(t) * sinc(t / a)
}

fn sinc(t: f64) -> f64 {
    if t == 0.0 {
        1.0
    } else {
        let pt = std::f64::consts::PI * t;
        pt.sin() / pt
    }
}

fn catmull_rom(p: [f32; 4], t: f32) -> f32 {
    let [p0, p1, p2, p3] = p;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t * t
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t * t * t)
}

fn clamp_index(v: f64, len: usize) -> usize {
    (v.max(0.0) as usize).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient() -> Raster {
        // 4x4, value = row * 10 + col
        let data: Vec<f32> = (0..4)
            .flat_map(|r| (0..4).map(move |c| (r * 10 + c) as f32))
            .collect();
        Raster::new(4, 4, data).unwrap()
    }

    #[test]
    fn test_all_kernels_hit_grid_points() {
        let data = gradient();
        for kernel in [
            Interpolation::Nearest,
            Interpolation::Bilinear,
            Interpolation::Cubic,
            Interpolation::Lanczos,
        ] {
            let v = kernel.sample(&data, 2.0, 1.0);
            assert!(
                (v - 12.0).abs() < 1e-3,
                "{kernel:?} at grid point gave {v}"
            );
        }
    }

    #[test]
    fn test_bilinear_midpoint() {
        let data = gradient();
        let v = sample_bilinear(&data, 0.5, 0.5);
        assert!((v - 5.5).abs() < 1e-6);
    }

    #[test]
    fn test_bilinear_nan_stays_nan() {
        let mut data = gradient();
        data.set(1, 1, f32::NAN);
        assert!(sample_bilinear(&data, 0.5, 0.5).is_nan());
    }

    #[test]
    fn test_cubic_falls_back_near_nan() {
        let mut data = gradient();
        data.set(0, 3, f32::NAN);
        // Neighborhood of (1.5, 1.5) touches (0, 3): bilinear fallback,
        // whose own 2x2 support is clean
        let v = sample_cubic(&data, 1.5, 1.5);
        assert!((v - 16.5).abs() < 1e-6);
    }

    #[test]
    fn test_lanczos_falls_back_near_nan() {
        let mut data = gradient();
        data.set(0, 0, f32::NAN);
        let v = sample_lanczos(&data, 1.4, 1.4);
        // Nearest fallback
        assert_eq!(v, 11.0);
    }

    #[test]
    fn test_lanczos_linear_ramp_is_preserved() {
        // Lanczos reproduces a linear ramp closely away from edges
        let data = gradient();
        let v = sample_lanczos(&data, 1.5, 1.5);
        assert!((v - 16.5).abs() < 0.2, "got {v}");
    }

    #[test]
    fn test_edge_clamping() {
        let data = gradient();
        assert_eq!(sample_nearest(&data, -2.0, -2.0), 0.0);
        assert_eq!(sample_nearest(&data, 10.0, 10.0), 33.0);
        assert!(!sample_bilinear(&data, -0.4, 3.4).is_nan());
    }
}
