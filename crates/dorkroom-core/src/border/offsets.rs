//! Offset clamping, border distribution, and fit validation.

use super::EPSILON;

/// Whether offset clamping reserves the minimum border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderPolicy {
    /// Offsets may not push any border below the minimum.
    Strict,

    /// Offsets may consume the border entirely; only the paper edge limits
    /// them.
    Ignore,
}

/// Per-edge border widths, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BorderSet {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Result of clamping user offsets against the paper and border limits.
#[derive(Debug, Clone, PartialEq)]
pub struct ClampedOffsets {
    /// Symmetric horizontal gap on each side of a centered print
    pub half_w: f64,

    /// Symmetric vertical gap above and below a centered print
    pub half_h: f64,

    /// Clamped horizontal offset
    pub h: f64,

    /// Clamped vertical offset
    pub v: f64,

    /// Set when clamping changed either offset
    pub warning: Option<String>,
}

/// Clamp desired print offsets to their physical limits.
///
/// `half_w`/`half_h` are the symmetric gaps left once the print is centered;
/// an offset moves the print within those gaps. Under
/// [`BorderPolicy::Strict`] the offset additionally may not push any border
/// below `min_border`. A human-readable warning is returned when clamping
/// occurred.
#[allow(clippy::too_many_arguments)]
pub fn clamp_offsets(
    paper_w: f64,
    paper_h: f64,
    print_w: f64,
    print_h: f64,
    min_border: f64,
    offset_h: f64,
    offset_v: f64,
    policy: BorderPolicy,
) -> ClampedOffsets {
    let half_w = (paper_w - print_w) / 2.0;
    let half_h = (paper_h - print_h) / 2.0;

    let (max_h, max_v) = match policy {
        BorderPolicy::Ignore => (half_w.max(0.0), half_h.max(0.0)),
        BorderPolicy::Strict => (
            (half_w - min_border).max(0.0),
            (half_h - min_border).max(0.0),
        ),
    };

    let h = offset_h.clamp(-max_h, max_h);
    let v = offset_v.clamp(-max_v, max_v);

    let clamped = (h - offset_h).abs() > EPSILON || (v - offset_v).abs() > EPSILON;
    let warning = if clamped {
        Some(match policy {
            BorderPolicy::Ignore => {
                "Offsets were adjusted to keep the print on the paper.".to_string()
            }
            BorderPolicy::Strict => {
                "Offsets were adjusted to honour the minimum border.".to_string()
            }
        })
    } else {
        None
    };

    ClampedOffsets {
        half_w,
        half_h,
        h,
        v,
        warning,
    }
}

/// Distribute the symmetric gaps into four border widths under an offset.
///
/// A positive horizontal offset moves the print toward the right edge, a
/// positive vertical offset moves it toward the top. No validation; callers
/// supply offsets already clamped by [`clamp_offsets`].
pub fn borders_from_gaps(half_w: f64, half_h: f64, offset_h: f64, offset_v: f64) -> BorderSet {
    BorderSet {
        left: half_w + offset_h,
        right: half_w - offset_h,
        top: half_h - offset_v,
        bottom: half_h + offset_v,
    }
}

/// Whether a print at the given offsets stays entirely on the paper.
///
/// True iff all four derived border widths are non-negative.
pub fn validate_print_fits(
    paper_w: f64,
    paper_h: f64,
    print_w: f64,
    print_h: f64,
    offset_h: f64,
    offset_v: f64,
) -> bool {
    let half_w = (paper_w - print_w) / 2.0;
    let half_h = (paper_h - print_h) / 2.0;
    let borders = borders_from_gaps(half_w, half_h, offset_h, offset_v);

    borders.left >= -EPSILON
        && borders.right >= -EPSILON
        && borders.top >= -EPSILON
        && borders.bottom >= -EPSILON
}
