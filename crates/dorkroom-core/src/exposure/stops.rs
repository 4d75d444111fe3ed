//! Stop arithmetic and print resize exposure scaling.

/// Exposure time after adjusting by a number of stops.
///
/// Each stop doubles or halves the time. Non-positive base times yield 0
/// rather than erroring, matching the live-editing input policy used across
/// the calculators.
pub fn time_for_stops(base_seconds: f64, stops: f64) -> f64 {
    if base_seconds <= 0.0 {
        return 0.0;
    }
    base_seconds * 2f64.powf(stops)
}

/// Stop difference between two exposure times.
///
/// Positive when `to_seconds` is the longer exposure. Non-positive times
/// yield 0.
pub fn stops_between(from_seconds: f64, to_seconds: f64) -> f64 {
    if from_seconds <= 0.0 || to_seconds <= 0.0 {
        return 0.0;
    }
    (to_seconds / from_seconds).log2()
}

/// Exposure scaled for a resized print.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResizedExposure {
    /// New exposure time in seconds
    pub seconds: f64,

    /// The stop change the new time represents
    pub stops: f64,
}

/// Scale an enlarger exposure when changing print size.
///
/// Light falls off with projected area, so the exposure scales by the area
/// ratio of the new print to the old. Degenerate dimensions or times yield
/// the zero result.
pub fn resize_exposure(
    old_w: f64,
    old_h: f64,
    new_w: f64,
    new_h: f64,
    base_seconds: f64,
) -> ResizedExposure {
    if old_w <= 0.0 || old_h <= 0.0 || new_w <= 0.0 || new_h <= 0.0 || base_seconds <= 0.0 {
        return ResizedExposure::default();
    }

    let area_ratio = (new_w * new_h) / (old_w * old_h);
    ResizedExposure {
        seconds: base_seconds * area_ratio,
        stops: area_ratio.log2(),
    }
}
