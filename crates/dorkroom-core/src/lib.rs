//! Dorkroom Core Library
//!
//! Calculation engine for film photography: print border geometry and
//! easel fitting, exposure arithmetic, lens equivalency, and development
//! recipes.

pub mod border;
pub mod config;
pub mod exposure;
pub mod lens;
pub mod recipes;

// Re-export commonly used types
pub use border::{
    blade_readings, borders_from_gaps, calculate_optimal_min_border, clamp_offsets,
    compute_print_size, resolve_easel_slot, validate_print_fits, BladeReadings, BorderPolicy,
    BorderSet, ClampedOffsets, EaselCache, EaselFit, PrintSize, SlotSize,
};
pub use exposure::{
    exposure_value, exposure_value_at_iso, resize_exposure, stops_between, time_for_stops,
    ResizedExposure,
};
pub use lens::{crop_factor, equivalent_focal_length, find_format, FilmFormat};
pub use recipes::ExposureRecipe;
