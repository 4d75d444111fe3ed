//! Parsing functions for CLI arguments.

/// Parse a paper or print size in format "WxH"
///
/// # Arguments
/// * `dim_str` - A string in format "WxH" in inches (e.g., "8x10")
///
/// # Returns
/// A `(width, height)` tuple as f64 values
pub fn parse_dimensions(dim_str: &str) -> Result<(f64, f64), String> {
    let parts: Vec<&str> = dim_str.split(['x', 'X']).collect();
    if parts.len() != 2 {
        return Err(format!(
            "Size must be in format WxH (e.g., 8x10), got: {}",
            dim_str
        ));
    }

    let w = parts[0]
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid width: {}", parts[0]))?;
    let h = parts[1]
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid height: {}", parts[1]))?;

    if w <= 0.0 || h <= 0.0 {
        return Err(format!("Dimensions must be positive, got: {}x{}", w, h));
    }

    Ok((w, h))
}

/// Parse an aspect ratio in format "W:H" (or "WxH")
///
/// # Arguments
/// * `ratio_str` - A string in format "W:H" (e.g., "3:2", "6x7")
///
/// # Returns
/// A `(numerator, denominator)` tuple as f64 values
pub fn parse_ratio(ratio_str: &str) -> Result<(f64, f64), String> {
    let parts: Vec<&str> = ratio_str.split([':', 'x', 'X']).collect();
    if parts.len() != 2 {
        return Err(format!(
            "Ratio must be in format W:H (e.g., 3:2), got: {}",
            ratio_str
        ));
    }

    let w = parts[0]
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid ratio numerator: {}", parts[0]))?;
    let h = parts[1]
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid ratio denominator: {}", parts[1]))?;

    if w <= 0.0 || h <= 0.0 {
        return Err(format!("Ratio terms must be positive, got: {}:{}", w, h));
    }

    Ok((w, h))
}

/// Parse a shutter speed into seconds
///
/// Accepts fractional notation ("1/125"), plain seconds ("0.5"), or seconds
/// with a trailing "s" ("2s").
pub fn parse_shutter(shutter_str: &str) -> Result<f64, String> {
    let trimmed = shutter_str.trim().trim_end_matches(['s', 'S']);

    let seconds = if let Some((num, den)) = trimmed.split_once('/') {
        let num = num
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("Invalid shutter numerator: {}", num))?;
        let den = den
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("Invalid shutter denominator: {}", den))?;
        if den <= 0.0 {
            return Err(format!("Shutter denominator must be positive, got: {}", den));
        }
        num / den
    } else {
        trimmed
            .parse::<f64>()
            .map_err(|_| format!("Invalid shutter speed: {}", shutter_str))?
    };

    if seconds <= 0.0 {
        return Err(format!("Shutter speed must be positive, got: {}", shutter_str));
    }

    Ok(seconds)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_dimensions("8x10").unwrap(), (8.0, 10.0));
        assert_eq!(parse_dimensions("11 X 14").unwrap(), (11.0, 14.0));
        assert_eq!(parse_dimensions("8.5x11").unwrap(), (8.5, 11.0));
        assert!(parse_dimensions("8").is_err());
        assert!(parse_dimensions("8x10x12").is_err());
        assert!(parse_dimensions("0x10").is_err());
        assert!(parse_dimensions("-8x10").is_err());
    }

    #[test]
    fn test_parse_ratio() {
        assert_eq!(parse_ratio("3:2").unwrap(), (3.0, 2.0));
        assert_eq!(parse_ratio("6x7").unwrap(), (6.0, 7.0));
        assert!(parse_ratio("3:0").is_err());
        assert!(parse_ratio("3").is_err());
        assert!(parse_ratio("three:two").is_err());
    }

    #[test]
    fn test_parse_shutter() {
        assert!((parse_shutter("1/125").unwrap() - 1.0 / 125.0).abs() < 1e-12);
        assert!((parse_shutter("0.5").unwrap() - 0.5).abs() < 1e-12);
        assert!((parse_shutter("2s").unwrap() - 2.0).abs() < 1e-12);
        assert!((parse_shutter(" 1/60 ").unwrap() - 1.0 / 60.0).abs() < 1e-12);
        assert!(parse_shutter("1/0").is_err());
        assert!(parse_shutter("-2").is_err());
        assert!(parse_shutter("fast").is_err());
    }
}
