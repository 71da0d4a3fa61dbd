//! Grayscale figure canvas and PNG output.

use crate::font::{self, ADVANCE};
use crate::png::encode_grayscale_png;
use ring_common::{RingError, RingResult};
use std::path::Path;
use tracing::info;

/// Background shade (white).
pub const BACKGROUND: u8 = 255;
/// Foreground shade for axes and text (black).
pub const FOREGROUND: u8 = 0;

/// A composed grayscale figure, ready to encode or save.
#[derive(Debug, Clone)]
pub struct Figure {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Figure {
    /// Create a blank figure filled with the background shade.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw grayscale pixels, row-major from the top-left corner.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Set one pixel; coordinates outside the canvas are ignored.
    pub(crate) fn set(&mut self, x: i64, y: i64, shade: u8) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = shade;
        }
    }

    /// Horizontal line segment of the given thickness.
    pub(crate) fn hline(&mut self, x0: i64, x1: i64, y: i64, thickness: usize, shade: u8) {
        for t in 0..thickness as i64 {
            for x in x0..=x1 {
                self.set(x, y + t, shade);
            }
        }
    }

    /// Vertical line segment of the given thickness.
    pub(crate) fn vline(&mut self, x: i64, y0: i64, y1: i64, thickness: usize, shade: u8) {
        for t in 0..thickness as i64 {
            for y in y0..=y1 {
                self.set(x + t, y, shade);
            }
        }
    }

    /// Rectangle outline.
    pub(crate) fn rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, shade: u8) {
        self.hline(x0, x1, y0, 1, shade);
        self.hline(x0, x1, y1, 1, shade);
        self.vline(x0, y0, y1, 1, shade);
        self.vline(x1, y0, y1, 1, shade);
    }

    /// Draw text with its top-left corner at (x, y).
    pub(crate) fn draw_text(&mut self, text: &str, x: i64, y: i64, scale: usize, shade: u8) {
        let scale = scale.max(1) as i64;
        for (index, c) in text.chars().enumerate() {
            let columns = font::glyph(c);
            let origin_x = x + (index * ADVANCE) as i64 * scale;
            for (gx, column) in columns.iter().enumerate() {
                for gy in 0..font::GLYPH_HEIGHT {
                    if column & (1 << gy) == 0 {
                        continue;
                    }
                    for i in 0..scale {
                        for j in 0..scale {
                            self.set(
                                origin_x + gx as i64 * scale + i,
                                y + gy as i64 * scale + j,
                                shade,
                            );
                        }
                    }
                }
            }
        }
    }

    /// Draw text rotated 90 degrees counter-clockwise, reading bottom to
    /// top, with (x, y) the top-left corner of the rotated run.
    pub(crate) fn draw_text_rotated(&mut self, text: &str, x: i64, y: i64, scale: usize, shade: u8) {
        let scale = scale.max(1) as i64;
        let chars: Vec<char> = text.chars().collect();
        let run = (chars.len() * ADVANCE) as i64 * scale;
        for (index, c) in chars.iter().enumerate() {
            let columns = font::glyph(*c);
            // Last character ends up at the top
            let origin_y = y + run - ((index + 1) * ADVANCE) as i64 * scale;
            for (gx, column) in columns.iter().enumerate() {
                for gy in 0..font::GLYPH_HEIGHT {
                    if column & (1 << gy) == 0 {
                        continue;
                    }
                    for i in 0..scale {
                        for j in 0..scale {
                            // (gx, gy) -> (gy, advance - gx)
                            self.set(
                                x + gy as i64 * scale + j,
                                origin_y + (ADVANCE as i64 - 1 - gx as i64) * scale + i,
                                shade,
                            );
                        }
                    }
                }
            }
        }
    }

    /// Encode the figure as a grayscale PNG.
    pub fn encode_png(&self) -> RingResult<Vec<u8>> {
        encode_grayscale_png(&self.pixels, self.width, self.height)
    }

    /// Encode and write the figure to a file.
    ///
    /// The PNG is produced fully in memory first, so a failed encode leaves
    /// no file behind.
    pub fn save(&self, path: &Path) -> RingResult<()> {
        let bytes = self.encode_png()?;
        std::fs::write(path, &bytes).map_err(RingError::Io)?;
        info!(path = %path.display(), bytes = bytes.len(), "saved figure");
        Ok(())
    }
}
