//! Figure rendering for ring-image cubes.
//!
//! Composes a calibrated image (or a derived array such as the radial-mean
//! residual) with its ring-plane extent, a percentile contrast stretch, axis
//! ticks and labels, and a title into a grayscale figure that can be saved
//! as a PNG next to the source cube.

pub mod figure;
pub mod font;
pub mod options;
pub mod png;
pub mod resample;
pub mod ticks;

pub use figure::Figure;
pub use options::{four_by_three, Interpolation, RenderOptions, DEFAULT_FIGURE_WIDTH};

use figure::{BACKGROUND, FOREGROUND};
use rayon::prelude::*;
use ring_common::{Raster, RingError, RingResult};
use ring_processor::{compute_stretch, subtract_radial_mean, DisplayStretch, RingCube};
use std::path::{Path, PathBuf};
use tracing::debug;

/// X axis caption.
const LONGITUDE_LABEL: &str = "Longitude [deg]";
/// Y axis caption.
const RADIUS_LABEL: &str = "Radius [Mm]";

// Figure layout, in pixels
const MARGIN_LEFT: usize = 90;
const MARGIN_RIGHT: usize = 25;
const MARGIN_TOP: usize = 50;
const MARGIN_BOTTOM: usize = 80;
const TICK_LENGTH: i64 = 6;
const TICK_PAD: i64 = 5;
const MIN_PLOT_SIZE: usize = 32;

/// Text scale for tick labels and axis captions.
const LABEL_SCALE: usize = 2;
/// Text scale for the title.
const TITLE_SCALE: usize = 2;
/// Tick count target per axis.
const TICK_TARGET: usize = 6;

/// Render a cube into a figure.
///
/// With `data` unset the cube's extracted image is drawn; pass a derived
/// array (residual, crop) to draw that instead. The display range comes
/// from the options' percentiles over the drawn array, and the axes carry
/// the mapping extent unless `set_extent` is disabled, in which case they
/// show pixel indices.
pub fn render(
    cube: &RingCube,
    data: Option<&Raster>,
    options: &RenderOptions,
) -> RingResult<Figure> {
    let owned;
    let image = match data {
        Some(image) => image,
        None => {
            owned = cube.image();
            &owned
        }
    };

    let plot_width = options
        .width
        .checked_sub(MARGIN_LEFT + MARGIN_RIGHT)
        .filter(|w| *w >= MIN_PLOT_SIZE)
        .ok_or_else(|| RingError::invalid_parameter("width", "figure too narrow to plot"))?;
    let plot_height = options
        .height
        .checked_sub(MARGIN_TOP + MARGIN_BOTTOM)
        .filter(|h| *h >= MIN_PLOT_SIZE)
        .ok_or_else(|| RingError::invalid_parameter("height", "figure too short to plot"))?;

    // Stretch first: an image with no valid pixels must fail before any
    // drawing happens
    let stretch = compute_stretch(image, options.low_percentile, options.high_percentile)?;

    debug!(
        path = %cube.path().display(),
        width = options.width,
        height = options.height,
        interpolation = ?options.interpolation,
        "rendering figure"
    );

    let mut fig = Figure::new(options.width, options.height);
    draw_image_area(&mut fig, image, &stretch, options, plot_width, plot_height);
    draw_axes(&mut fig, cube, image, options, plot_width, plot_height);
    draw_title(&mut fig, &title_for(cube, options.title_suffix.as_deref()));

    Ok(fig)
}

/// Render and save next to the source cube.
///
/// The output name is the cube path with everything after the first `.`
/// replaced by `png`, with `_{suffix}` inserted when a title suffix is set.
/// Encoding happens fully in memory; nothing is written unless every prior
/// step succeeded.
pub fn render_to_file(
    cube: &RingCube,
    data: Option<&Raster>,
    options: &RenderOptions,
) -> RingResult<PathBuf> {
    let fig = render(cube, data, options)?;
    let path = output_path(cube.path(), options.title_suffix.as_deref());
    fig.save(&path)?;
    Ok(path)
}

/// Render the radial-mean residual of the cube's image.
pub fn render_subtracted(cube: &RingCube, options: &RenderOptions) -> RingResult<Figure> {
    let residual = subtract_radial_mean(&cube.image());
    render(cube, Some(&residual), options)
}

/// Render the radial-mean residual and save next to the source cube.
pub fn render_subtracted_to_file(
    cube: &RingCube,
    options: &RenderOptions,
) -> RingResult<PathBuf> {
    let residual = subtract_radial_mean(&cube.image());
    render_to_file(cube, Some(&residual), options)
}

/// Title line: file stem, integer resolution with unit, optional suffix.
pub fn title_for(cube: &RingCube, suffix: Option<&str>) -> String {
    let mapping = cube.mapping();
    let mut title = format!(
        "{}, Resolution: {} {}",
        title_stem(cube.path()),
        mapping.resolution_value as i64,
        mapping.resolution_unit
    );
    if let Some(suffix) = suffix {
        title.push_str(", ");
        title.push_str(suffix);
    }
    title
}

/// Save path for a cube figure: stem before the first `.`, png extension,
/// optional suffix token.
pub fn output_path(cube_path: &Path, suffix: Option<&str>) -> PathBuf {
    let stem = title_stem(cube_path);
    let name = match suffix {
        Some(suffix) => format!("{stem}_{suffix}.png"),
        None => format!("{stem}.png"),
    };
    match cube_path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

/// File name up to the first extension separator.
fn title_stem(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.split('.').next())
        .unwrap_or("")
        .to_string()
}

/// Resample the image into the plot area and apply the grayscale stretch.
fn draw_image_area(
    fig: &mut Figure,
    image: &Raster,
    stretch: &DisplayStretch,
    options: &RenderOptions,
    plot_width: usize,
    plot_height: usize,
) {
    let interpolation = options.interpolation;
    let source_width = image.width() as f64;
    let source_height = image.height() as f64;
    let width = options.width;

    fig.pixels_mut()
        .par_chunks_mut(width)
        .enumerate()
        .skip(MARGIN_TOP)
        .take(plot_height)
        .for_each(|(y, row)| {
            let v = (y - MARGIN_TOP) as f64 + 0.5;
            // Lower-left origin: the first image row lands at the bottom
            let src_y = (1.0 - v / plot_height as f64) * source_height - 0.5;
            for x in 0..plot_width {
                let u = x as f64 + 0.5;
                let src_x = u / plot_width as f64 * source_width - 0.5;
                let value = interpolation.sample(image, src_x, src_y);
                row[MARGIN_LEFT + x] = shade_for(value, stretch);
            }
        });
}

/// Map a sample to a display shade; NaN renders as background.
fn shade_for(value: f32, stretch: &DisplayStretch) -> u8 {
    if !value.is_finite() {
        return BACKGROUND;
    }
    let span = stretch.high - stretch.low;
    if span <= 0.0 {
        return 128;
    }
    let normalized = ((value as f64 - stretch.low) / span).clamp(0.0, 1.0);
    (normalized * 255.0).round() as u8
}

/// Draw the plot frame, ticks, tick labels, and axis captions.
fn draw_axes(
    fig: &mut Figure,
    cube: &RingCube,
    image: &Raster,
    options: &RenderOptions,
    plot_width: usize,
    plot_height: usize,
) {
    let left = MARGIN_LEFT as i64;
    let top = MARGIN_TOP as i64;
    let right = left + plot_width as i64 - 1;
    let bottom = top + plot_height as i64 - 1;

    fig.rect(left - 1, top - 1, right + 1, bottom + 1, FOREGROUND);

    let (x_range, y_range) = if options.set_extent {
        let extent = cube.mapping().extent();
        ((extent[0], extent[1]), (extent[2], extent[3]))
    } else {
        (
            (0.0, (image.width().max(1) - 1) as f64),
            (0.0, (image.height().max(1) - 1) as f64),
        )
    };

    // X ticks along the bottom edge
    let decimals = ticks::tick_decimals(x_range.0, x_range.1, TICK_TARGET);
    for tick in ticks::nice_ticks(x_range.0, x_range.1, TICK_TARGET) {
        let frac = (tick - x_range.0) / (x_range.1 - x_range.0);
        let x = left + (frac * (plot_width - 1) as f64).round() as i64;
        fig.vline(x, bottom + 2, bottom + 1 + TICK_LENGTH, 1, FOREGROUND);

        let label = ticks::format_tick(tick, decimals);
        let label_x = x - font::text_width(&label, LABEL_SCALE) as i64 / 2;
        fig.draw_text(
            &label,
            label_x,
            bottom + 2 + TICK_LENGTH + TICK_PAD,
            LABEL_SCALE,
            FOREGROUND,
        );
    }

    // Y ticks along the left edge
    let decimals = ticks::tick_decimals(y_range.0, y_range.1, TICK_TARGET);
    for tick in ticks::nice_ticks(y_range.0, y_range.1, TICK_TARGET) {
        let frac = (tick - y_range.0) / (y_range.1 - y_range.0);
        let y = bottom - (frac * (plot_height - 1) as f64).round() as i64;
        fig.hline(left - 1 - TICK_LENGTH, left - 2, y, 1, FOREGROUND);

        let label = ticks::format_tick(tick, decimals);
        let label_x = left - 1 - TICK_LENGTH - TICK_PAD - font::text_width(&label, LABEL_SCALE) as i64;
        let label_y = y - font::text_height(LABEL_SCALE) as i64 / 2;
        fig.draw_text(&label, label_x, label_y, LABEL_SCALE, FOREGROUND);
    }

    // Axis captions
    let caption_x =
        left + plot_width as i64 / 2 - font::text_width(LONGITUDE_LABEL, LABEL_SCALE) as i64 / 2;
    let caption_y = bottom + 2 + TICK_LENGTH + TICK_PAD + font::text_height(LABEL_SCALE) as i64 + 8;
    fig.draw_text(LONGITUDE_LABEL, caption_x, caption_y, LABEL_SCALE, FOREGROUND);

    let run = RADIUS_LABEL.chars().count() * font::ADVANCE * LABEL_SCALE;
    let caption_y = top + plot_height as i64 / 2 - run as i64 / 2;
    fig.draw_text_rotated(RADIUS_LABEL, 6, caption_y, LABEL_SCALE, FOREGROUND);
}

/// Draw the title centered above the plot area.
fn draw_title(fig: &mut Figure, title: &str) {
    let x = fig.width() as i64 / 2 - font::text_width(title, TITLE_SCALE) as i64 / 2;
    let y = (MARGIN_TOP as i64 - font::text_height(TITLE_SCALE) as i64) / 2;
    fig.draw_text(title, x, y.max(2), TITLE_SCALE, FOREGROUND);
}
