//! Lens equivalency command.

use dorkroom_core::border::round_to;
use dorkroom_core::lens::{crop_factor, equivalent_focal_length, find_format, FILM_FORMATS};

/// Convert a focal length between film formats.
pub fn cmd_lens(focal: f64, from: String, to: String) -> Result<(), String> {
    if focal <= 0.0 {
        return Err(format!("Focal length must be positive, got: {}", focal));
    }

    let from_format = find_format(&from).ok_or_else(|| unknown_format(&from))?;
    let to_format = find_format(&to).ok_or_else(|| unknown_format(&to))?;

    let equivalent = equivalent_focal_length(focal, from_format, to_format);
    let factor = crop_factor(to_format, from_format);

    println!(
        "{}mm on {} ({}x{}mm)",
        focal, from_format.name, from_format.frame_w, from_format.frame_h
    );
    println!(
        "  = {}mm on {} ({}x{}mm)",
        round_to(equivalent, 1),
        to_format.name,
        to_format.frame_w,
        to_format.frame_h
    );
    println!("Crop factor:  {}", round_to(factor, 2));
    Ok(())
}

fn unknown_format(name: &str) -> String {
    let known: Vec<&str> = FILM_FORMATS.iter().map(|f| f.name).collect();
    format!(
        "Unknown format '{}'. Known formats: {}",
        name,
        known.join(", ")
    )
}
