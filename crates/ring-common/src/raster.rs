//! Row-major raster grid of floating-point samples.
//!
//! Rows correspond to radius bins and columns to longitude bins for
//! map-projected ring imagery. Missing data is carried as NaN so that
//! reductions can skip invalid samples without a separate mask array.

use crate::error::{RingError, RingResult};
use serde::{Deserialize, Serialize};

/// A 2-D grid of f32 samples in row-major order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl Raster {
    /// Create a raster from row-major sample data.
    ///
    /// Fails if `data.len() != width * height`.
    pub fn new(width: usize, height: usize, data: Vec<f32>) -> RingResult<Self> {
        if data.len() != width * height {
            return Err(RingError::invalid_parameter(
                "data",
                format!(
                    "expected {} samples for a {}x{} grid, got {}",
                    width * height,
                    width,
                    height,
                    data.len()
                ),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a raster filled with a constant value.
    pub fn filled(width: usize, height: usize, value: f32) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Number of columns (longitude bins).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows (radius bins).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the raster holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample at (row, col). Panics if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    /// Overwrite the sample at (row, col). Panics if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * self.width + col] = value;
    }

    /// One full row of samples.
    pub fn row(&self, row: usize) -> &[f32] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    /// Iterate over rows, top to bottom in storage order.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact(self.width)
    }

    /// The underlying row-major sample slice.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Iterate over finite (non-NaN, non-infinite) samples.
    pub fn finite_values(&self) -> impl Iterator<Item = f32> + '_ {
        self.data.iter().copied().filter(|v| v.is_finite())
    }

    /// Extract a rectangular sub-grid.
    ///
    /// `top`/`left` are the first row/column of the window; the window must
    /// lie fully inside the raster.
    pub fn crop(&self, top: usize, left: usize, height: usize, width: usize) -> RingResult<Self> {
        if top + height > self.height || left + width > self.width {
            return Err(RingError::invalid_parameter(
                "window",
                format!(
                    "{}x{} window at ({}, {}) exceeds {}x{} grid",
                    height, width, top, left, self.height, self.width
                ),
            ));
        }
        let mut data = Vec::with_capacity(width * height);
        for row in top..top + height {
            let start = row * self.width + left;
            data.extend_from_slice(&self.data[start..start + width]);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }
}
