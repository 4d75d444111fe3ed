//! Exposure values over the aperture/shutter/ISO triangle.
//!
//! EV here follows the ISO-100-referenced convention: EV = log2(N^2 / t),
//! offset by log2(ISO / 100) when metering at another speed.

/// Full-stop aperture series.
pub const FULL_STOP_APERTURES: [f64; 13] = [
    1.0, 1.4, 2.0, 2.8, 4.0, 5.6, 8.0, 11.0, 16.0, 22.0, 32.0, 45.0, 64.0,
];

/// Full-stop shutter speeds in seconds, 1/8000 through 30s.
pub const FULL_STOP_SHUTTER_SECONDS: [f64; 19] = [
    1.0 / 8000.0,
    1.0 / 4000.0,
    1.0 / 2000.0,
    1.0 / 1000.0,
    1.0 / 500.0,
    1.0 / 250.0,
    1.0 / 125.0,
    1.0 / 60.0,
    1.0 / 30.0,
    1.0 / 15.0,
    1.0 / 8.0,
    1.0 / 4.0,
    1.0 / 2.0,
    1.0,
    2.0,
    4.0,
    8.0,
    15.0,
    30.0,
];

/// Full-stop ISO speeds.
pub const FULL_STOP_ISOS: [u32; 9] = [25, 50, 100, 200, 400, 800, 1600, 3200, 6400];

/// Exposure value for an aperture and shutter time at ISO 100.
///
/// Non-positive inputs yield 0.
pub fn exposure_value(aperture: f64, shutter_seconds: f64) -> f64 {
    if aperture <= 0.0 || shutter_seconds <= 0.0 {
        return 0.0;
    }
    (aperture * aperture / shutter_seconds).log2()
}

/// Exposure value normalized to ISO 100 for a metering at `iso`.
pub fn exposure_value_at_iso(aperture: f64, shutter_seconds: f64, iso: f64) -> f64 {
    if aperture <= 0.0 || shutter_seconds <= 0.0 || iso <= 0.0 {
        return 0.0;
    }
    exposure_value(aperture, shutter_seconds) - (iso / 100.0).log2()
}

/// Shutter time in seconds that hits `ev` at the given aperture.
///
/// Non-positive apertures yield 0.
pub fn shutter_for(ev: f64, aperture: f64) -> f64 {
    if aperture <= 0.0 {
        return 0.0;
    }
    aperture * aperture / 2f64.powf(ev)
}

/// Aperture that hits `ev` at the given shutter time.
///
/// Non-positive times yield 0.
pub fn aperture_for(ev: f64, shutter_seconds: f64) -> f64 {
    if shutter_seconds <= 0.0 {
        return 0.0;
    }
    (2f64.powf(ev) * shutter_seconds).sqrt()
}

/// Closest full-stop aperture to an arbitrary value.
///
/// Compared on the stop scale so that the midpoint between marks sits where
/// a photographer expects it. Non-positive input falls back to the widest
/// cataloged stop.
pub fn nearest_standard_aperture(aperture: f64) -> f64 {
    nearest_on_log_scale(&FULL_STOP_APERTURES, aperture)
}

/// Closest full-stop shutter speed to an arbitrary time in seconds.
pub fn nearest_standard_shutter(shutter_seconds: f64) -> f64 {
    nearest_on_log_scale(&FULL_STOP_SHUTTER_SECONDS, shutter_seconds)
}

fn nearest_on_log_scale(table: &[f64], value: f64) -> f64 {
    if value <= 0.0 {
        return table[0];
    }

    let target = value.ln();
    let mut best = table[0];
    let mut best_dist = f64::INFINITY;
    for &entry in table {
        let dist = (entry.ln() - target).abs();
        if dist < best_dist {
            best_dist = dist;
            best = entry;
        }
    }
    best
}
