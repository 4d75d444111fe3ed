//! Exposure arithmetic
//!
//! Stop-based exposure adjustments for the enlarger and exposure value math
//! for the camera.
//!
//! This module is organized into submodules:
//! - `stops`: stop arithmetic and print resize exposure scaling
//! - `ev`: exposure values over the aperture/shutter/ISO triangle

mod ev;
mod stops;


// Re-export public items from submodules
pub use ev::{
    aperture_for, exposure_value, exposure_value_at_iso, nearest_standard_aperture,
    nearest_standard_shutter, shutter_for, FULL_STOP_APERTURES, FULL_STOP_ISOS,
    FULL_STOP_SHUTTER_SECONDS,
};
pub use stops::{resize_exposure, stops_between, time_for_stops, ResizedExposure};
