//! Rounding, snap distance, and cache-key helpers.

use super::{DISPLAY_PRECISION, SNAP_INCREMENT};

/// Round a value to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Distance from `value` to the nearest multiple of `increment`.
///
/// Returns 0 for a non-positive increment.
pub fn snap_distance(value: f64, increment: f64) -> f64 {
    if increment <= 0.0 {
        return 0.0;
    }
    let remainder = (value / increment).fract().abs() * increment;
    remainder.min(increment - remainder)
}

/// Distance from `value` to the nearest quarter-inch increment.
pub fn quarter_snap_distance(value: f64) -> f64 {
    snap_distance(value, SNAP_INCREMENT)
}

/// Build the easel cache key from rounded inputs.
///
/// Inputs are rounded to display precision so that keystroke-level noise
/// (8.0001 vs 8.0) maps to the same entry.
pub(crate) fn slot_cache_key(paper_w: f64, paper_h: f64, landscape: bool) -> String {
    format!(
        "{:.prec$}x{:.prec$}:{}",
        round_to(paper_w, DISPLAY_PRECISION),
        round_to(paper_h, DISPLAY_PRECISION),
        landscape,
        prec = DISPLAY_PRECISION as usize
    )
}
