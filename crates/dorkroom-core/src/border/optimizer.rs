//! Quarter-inch snap search for the minimum border.
//!
//! Blades on most easels are easiest to set on quarter-inch marks. Starting
//! from the user's minimum border, a bounded coarse-to-fine search looks for
//! a nearby value whose four resulting borders all land close to those
//! marks.

use super::offsets::borders_from_gaps;
use super::precision::{quarter_snap_distance, round_to};
use super::print_size::compute_print_size;
use super::{DISPLAY_PRECISION, EPSILON};

/// Distance searched on either side of the starting border, in inches.
const SEARCH_SPAN: f64 = 0.5;

/// Step sizes for the coarse-to-fine passes.
const STEP_SCHEDULE: [f64; 3] = [0.25, 0.05, 0.01];

/// Summed snap distance below which a candidate is accepted immediately.
const NEAR_ZERO_SCORE: f64 = 1e-3;

/// Find a minimum border near `start` whose borders snap to quarter-inch
/// marks.
///
/// Each candidate is scored by the summed distance of the four centered
/// border widths to their nearest quarter-inch increment; the best-scoring
/// candidate seen wins, with ties kept by the earlier (smaller) value. The
/// result is rounded to display precision and always lies within
/// `[start - span, start + span]`. When the ratio denominator is zero the
/// search cannot score anything, and `start` is returned unchanged.
pub fn calculate_optimal_min_border(
    paper_w: f64,
    paper_h: f64,
    ratio_w: f64,
    ratio_h: f64,
    start: f64,
) -> f64 {
    if ratio_h.abs() < EPSILON || !start.is_finite() {
        return start;
    }

    let lo = start - SEARCH_SPAN;
    let hi = start + SEARCH_SPAN;

    let mut best = start;
    let mut best_score = match snap_score(paper_w, paper_h, ratio_w, ratio_h, start) {
        Some(score) => score,
        None => f64::INFINITY,
    };
    if best_score < NEAR_ZERO_SCORE {
        return finish(start, lo, hi);
    }

    for (pass, &step) in STEP_SCHEDULE.iter().enumerate() {
        // First pass covers the whole window; later passes tighten around
        // the best candidate found so far.
        let (win_lo, win_hi) = if pass == 0 {
            (lo, hi)
        } else {
            let radius = STEP_SCHEDULE[pass - 1];
            ((best - radius).max(lo), (best + radius).min(hi))
        };

        let mut candidate = win_lo;
        while candidate <= win_hi + EPSILON {
            if let Some(score) = snap_score(paper_w, paper_h, ratio_w, ratio_h, candidate) {
                if score < NEAR_ZERO_SCORE {
                    return finish(candidate, lo, hi);
                }
                if score < best_score {
                    best_score = score;
                    best = candidate;
                }
            }
            candidate += step;
        }
    }

    finish(best, lo, hi)
}

/// Summed quarter-inch snap distance of the four centered borders, or None
/// when the candidate produces no valid print.
fn snap_score(
    paper_w: f64,
    paper_h: f64,
    ratio_w: f64,
    ratio_h: f64,
    candidate: f64,
) -> Option<f64> {
    if candidate < 0.0 {
        return None;
    }

    let print = compute_print_size(paper_w, paper_h, ratio_w, ratio_h, candidate);
    if print.width < EPSILON || print.height < EPSILON {
        return None;
    }

    let half_w = (paper_w - print.width) / 2.0;
    let half_h = (paper_h - print.height) / 2.0;
    let borders = borders_from_gaps(half_w, half_h, 0.0, 0.0);

    Some(
        quarter_snap_distance(borders.left)
            + quarter_snap_distance(borders.right)
            + quarter_snap_distance(borders.top)
            + quarter_snap_distance(borders.bottom),
    )
}

/// Round to display precision without leaving the search window.
fn finish(value: f64, lo: f64, hi: f64) -> f64 {
    round_to(value, DISPLAY_PRECISION).clamp(lo, hi)
}
