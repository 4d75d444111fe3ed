//! Default calculator values and their validation/sanitization.

use serde::Deserialize;

/// Defaults applied when the border calculator starts with no user input.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CalculatorDefaults {
    /// Paper width in inches
    pub paper_width: f64,

    /// Paper height in inches
    pub paper_height: f64,

    /// Aspect ratio numerator
    pub ratio_width: f64,

    /// Aspect ratio denominator
    pub ratio_height: f64,

    /// Minimum border in inches
    pub min_border: f64,

    /// Bound on the easel resolver memo cache
    pub easel_cache_capacity: usize,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        Self {
            paper_width: 8.0,
            paper_height: 10.0,
            ratio_width: 3.0,
            ratio_height: 2.0,
            min_border: 0.5,
            easel_cache_capacity: 100,
        }
    }
}

impl CalculatorDefaults {
    pub(crate) fn sanitize(&mut self) {
        self.paper_width = self.paper_width.max(1.0);
        self.paper_height = self.paper_height.max(1.0);
        self.ratio_width = self.ratio_width.max(0.1);
        self.ratio_height = self.ratio_height.max(0.1);
        // Border may be zero (borderless) but never negative, and never more
        // than half the short paper edge
        let max_border = self.paper_width.min(self.paper_height) / 2.0;
        self.min_border = self.min_border.clamp(0.0, max_border);
        self.easel_cache_capacity = self.easel_cache_capacity.max(1);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_clamps_out_of_range_values() {
        let mut defaults = CalculatorDefaults {
            paper_width: -4.0,
            paper_height: 0.0,
            ratio_width: 0.0,
            ratio_height: -1.0,
            min_border: -0.5,
            easel_cache_capacity: 0,
        };
        defaults.sanitize();

        assert_eq!(defaults.paper_width, 1.0);
        assert_eq!(defaults.paper_height, 1.0);
        assert_eq!(defaults.ratio_width, 0.1);
        assert_eq!(defaults.ratio_height, 0.1);
        assert_eq!(defaults.min_border, 0.0);
        assert_eq!(defaults.easel_cache_capacity, 1);
    }

    #[test]
    fn test_sanitize_caps_border_at_half_short_edge() {
        let mut defaults = CalculatorDefaults {
            min_border: 12.0,
            ..CalculatorDefaults::default()
        };
        defaults.sanitize();
        assert_eq!(defaults.min_border, 4.0, "half the 8in short edge");
    }

    #[test]
    fn test_defaults_pass_sanitize_unchanged() {
        let mut defaults = CalculatorDefaults::default();
        let before = defaults.clone();
        defaults.sanitize();
        assert_eq!(defaults.paper_width, before.paper_width);
        assert_eq!(defaults.min_border, before.min_border);
    }
}
