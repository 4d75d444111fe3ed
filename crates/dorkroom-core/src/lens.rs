//! Lens focal-length equivalency across film formats.
//!
//! Field of view tracks the frame diagonal, so equivalency between formats
//! is the ratio of their diagonals. Frame sizes are the nominal image areas
//! photographers quote, in millimetres.

/// A film (or sensor) format with its nominal frame size in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilmFormat {
    /// Display name (e.g. "35mm", "6x7")
    pub name: &'static str,

    /// Frame width in millimetres
    pub frame_w: f64,

    /// Frame height in millimetres
    pub frame_h: f64,
}

impl FilmFormat {
    /// Frame diagonal in millimetres.
    pub fn diagonal(&self) -> f64 {
        (self.frame_w * self.frame_w + self.frame_h * self.frame_h).sqrt()
    }
}

/// Formats the calculator knows about, smallest frame first.
pub const FILM_FORMATS: [FilmFormat; 9] = [
    FilmFormat {
        name: "half-frame",
        frame_w: 24.0,
        frame_h: 18.0,
    },
    FilmFormat {
        name: "aps-c",
        frame_w: 23.5,
        frame_h: 15.6,
    },
    FilmFormat {
        name: "35mm",
        frame_w: 36.0,
        frame_h: 24.0,
    },
    FilmFormat {
        name: "645",
        frame_w: 56.0,
        frame_h: 41.5,
    },
    FilmFormat {
        name: "6x6",
        frame_w: 56.0,
        frame_h: 56.0,
    },
    FilmFormat {
        name: "6x7",
        frame_w: 56.0,
        frame_h: 67.0,
    },
    FilmFormat {
        name: "6x9",
        frame_w: 56.0,
        frame_h: 84.0,
    },
    FilmFormat {
        name: "4x5",
        frame_w: 102.0,
        frame_h: 127.0,
    },
    FilmFormat {
        name: "8x10",
        frame_w: 203.0,
        frame_h: 254.0,
    },
];

/// Look up a format by name, case-insensitively.
pub fn find_format(name: &str) -> Option<&'static FilmFormat> {
    FILM_FORMATS
        .iter()
        .find(|f| f.name.eq_ignore_ascii_case(name.trim()))
}

/// Crop factor of `format` relative to `reference`.
///
/// APS-C against 35mm gives the familiar ~1.5; medium and large formats
/// give factors below 1. Degenerate diagonals yield 0.
pub fn crop_factor(format: &FilmFormat, reference: &FilmFormat) -> f64 {
    let diagonal = format.diagonal();
    if diagonal <= 0.0 {
        return 0.0;
    }
    reference.diagonal() / diagonal
}

/// Focal length on `to` with the same field of view as `focal_mm` on `from`.
///
/// Non-positive focal lengths and degenerate source formats yield 0.
pub fn equivalent_focal_length(focal_mm: f64, from: &FilmFormat, to: &FilmFormat) -> f64 {
    let from_diagonal = from.diagonal();
    if focal_mm <= 0.0 || from_diagonal <= 0.0 {
        return 0.0;
    }
    focal_mm * to.diagonal() / from_diagonal
}

// =============================================================================
// Tests
// =============================================================================
