//! Exposure calculator commands.

use dorkroom_core::border::round_to;
use dorkroom_core::exposure::{
    aperture_for, exposure_value, exposure_value_at_iso, nearest_standard_aperture,
    nearest_standard_shutter, resize_exposure, shutter_for, stops_between, time_for_stops,
};

use crate::parsers::{parse_dimensions, parse_shutter};

/// Adjust an exposure time by a number of stops, or report the stop
/// difference between two times.
pub fn cmd_stops(time: f64, stops: Option<f64>, to_time: Option<f64>) -> Result<(), String> {
    if time <= 0.0 {
        return Err(format!("Base time must be positive, got: {}", time));
    }

    match (stops, to_time) {
        (Some(stops), None) => {
            let adjusted = time_for_stops(time, stops);
            println!("Base time:    {}s", time);
            println!("Adjustment:   {:+} stops", stops);
            println!("New time:     {}s", round_to(adjusted, 2));
            Ok(())
        }
        (None, Some(to_time)) => {
            if to_time <= 0.0 {
                return Err(format!("Target time must be positive, got: {}", to_time));
            }
            let stops = stops_between(time, to_time);
            println!("From:         {}s", time);
            println!("To:           {}s", to_time);
            println!("Difference:   {:+} stops", round_to(stops, 2));
            Ok(())
        }
        _ => Err("Provide either --stops or --to-time (exactly one)".to_string()),
    }
}

/// Scale an enlarger exposure for a new print size.
pub fn cmd_resize(from: String, to: String, time: f64) -> Result<(), String> {
    if time <= 0.0 {
        return Err(format!("Base time must be positive, got: {}", time));
    }

    let (old_w, old_h) = parse_dimensions(&from)?;
    let (new_w, new_h) = parse_dimensions(&to)?;
    let resized = resize_exposure(old_w, old_h, new_w, new_h, time);

    println!("From print:   {}x{} in at {}s", old_w, old_h, time);
    println!("To print:     {}x{} in", new_w, new_h);
    println!("New time:     {}s", round_to(resized.seconds, 2));
    println!("Change:       {:+} stops", round_to(resized.stops, 2));
    Ok(())
}

/// Compute an exposure value, or solve for the missing side of the
/// aperture/shutter pair at a target EV.
pub fn cmd_ev(
    aperture: Option<f64>,
    shutter: Option<String>,
    iso: f64,
    target_ev: Option<f64>,
) -> Result<(), String> {
    if iso <= 0.0 {
        return Err(format!("ISO must be positive, got: {}", iso));
    }

    let shutter_seconds = match &shutter {
        Some(s) => Some(parse_shutter(s)?),
        None => None,
    };

    match (aperture, shutter_seconds, target_ev) {
        (Some(aperture), Some(seconds), None) => {
            if aperture <= 0.0 {
                return Err(format!("Aperture must be positive, got: {}", aperture));
            }
            println!("Aperture:     f/{}", aperture);
            println!("Shutter:      {}s", round_to(seconds, 4));
            println!(
                "EV (ISO 100): {}",
                round_to(exposure_value(aperture, seconds), 1)
            );
            if (iso - 100.0).abs() > f64::EPSILON {
                println!(
                    "EV (ISO {}): {}",
                    iso,
                    round_to(exposure_value_at_iso(aperture, seconds, iso), 1)
                );
            }
            Ok(())
        }
        (Some(aperture), None, Some(ev)) => {
            if aperture <= 0.0 {
                return Err(format!("Aperture must be positive, got: {}", aperture));
            }
            let seconds = shutter_for(ev, aperture);
            println!("EV:           {}", ev);
            println!("Aperture:     f/{}", aperture);
            println!("Shutter:      {}s", round_to(seconds, 4));
            println!(
                "Nearest std:  {}s",
                round_to(nearest_standard_shutter(seconds), 4)
            );
            Ok(())
        }
        (None, Some(seconds), Some(ev)) => {
            let aperture = aperture_for(ev, seconds);
            println!("EV:           {}", ev);
            println!("Shutter:      {}s", round_to(seconds, 4));
            println!("Aperture:     f/{}", round_to(aperture, 1));
            println!(
                "Nearest std:  f/{}",
                nearest_standard_aperture(aperture)
            );
            Ok(())
        }
        _ => Err(
            "Provide --aperture and --shutter to compute EV, or --ev plus one of them to solve the other"
                .to_string(),
        ),
    }
}
