//! Tick placement and label formatting for figure axes.
//!
//! Tick values land on round steps (1, 2, or 5 times a power of ten) and
//! labels are always plain decimal notation so absolute coordinate values
//! are shown, never an offset or exponent.

/// Compute tick values covering `[min, max]` with about `target` ticks.
///
/// Returns an empty list for a degenerate or non-finite range.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min || target == 0 {
        return Vec::new();
    }
    let step = nice_step((max - min) / target as f64);
    let first = (min / step).ceil() * step;

    let mut ticks = Vec::new();
    let mut k = 0u32;
    loop {
        let v = first + k as f64 * step;
        if v > max + step * 1e-9 {
            break;
        }
        // Snap values like 139.99999999 back onto the step grid
        ticks.push((v / step).round() * step);
        k += 1;
    }
    ticks
}

/// Decimal places needed to distinguish ticks at the given range/target.
pub fn tick_decimals(min: f64, max: f64, target: usize) -> usize {
    if !min.is_finite() || !max.is_finite() || max <= min || target == 0 {
        return 0;
    }
    let step = nice_step((max - min) / target as f64);
    if step >= 1.0 {
        0
    } else {
        (-step.log10()).ceil().max(0.0) as usize
    }
}

/// Format a tick value in plain decimal notation.
pub fn format_tick(value: f64, decimals: usize) -> String {
    let text = format!("{value:.decimals$}");
    // Avoid the awkward "-0" label
    if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        text.trim_start_matches('-').to_string()
    } else {
        text
    }
}

/// Round a raw step up to the next 1/2/5 x 10^k value.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}
