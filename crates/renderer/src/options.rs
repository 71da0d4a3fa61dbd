//! Render configuration.

use ring_processor::{DEFAULT_HIGH_PERCENTILE, DEFAULT_LOW_PERCENTILE};
use serde::{Deserialize, Serialize};

/// Default figure width in pixels: a 10-inch figure at 150 DPI.
pub const DEFAULT_FIGURE_WIDTH: usize = 1500;

/// 4:3 figure dimensions from a width.
pub fn four_by_three(width: usize) -> (usize, usize) {
    (width, width * 3 / 4)
}

/// Resampling kernel used when scaling the image into the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    Nearest,
    Bilinear,
    Cubic,
    /// Sinc-windowed kernel, the smooth default.
    Lanczos,
}

impl Default for Interpolation {
    fn default() -> Self {
        Interpolation::Lanczos
    }
}

/// Options for a single render request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Lower display percentile.
    pub low_percentile: f64,
    /// Upper display percentile.
    pub high_percentile: f64,
    /// Resampling kernel.
    pub interpolation: Interpolation,
    /// Annotate axes with the mapping extent; pixel indices otherwise.
    pub set_extent: bool,
    /// Extra text appended to the title and the save file name.
    pub title_suffix: Option<String>,
    /// Figure width in pixels.
    pub width: usize,
    /// Figure height in pixels.
    pub height: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        let (width, height) = four_by_three(DEFAULT_FIGURE_WIDTH);
        Self {
            low_percentile: DEFAULT_LOW_PERCENTILE,
            high_percentile: DEFAULT_HIGH_PERCENTILE,
            interpolation: Interpolation::default(),
            set_extent: true,
            title_suffix: None,
            width,
            height,
        }
    }
}
