//! Print border calculator command.

use dorkroom_core::border::{
    blade_readings, borders_from_gaps, calculate_optimal_min_border, clamp_offsets,
    compute_print_size, resolve_easel_slot, round_to, BorderPolicy, EaselCache,
};
use dorkroom_core::verbose_println;

use crate::parsers::{parse_dimensions, parse_ratio};

/// Compute and print the full border layout for one paper/ratio pair.
///
/// Falls back to the configured defaults for any argument the user leaves
/// out.
#[allow(clippy::too_many_arguments)]
pub fn cmd_border(
    paper: Option<String>,
    ratio: Option<String>,
    min_border: Option<f64>,
    offset_h: f64,
    offset_v: f64,
    landscape: bool,
    ignore_min_border: bool,
    optimize: bool,
) -> Result<(), String> {
    dorkroom_core::config::log_config_usage();
    let defaults = &dorkroom_core::config::calculator_config_handle()
        .config
        .defaults;

    let (paper_w, paper_h) = match paper {
        Some(s) => parse_dimensions(&s)?,
        None => (defaults.paper_width, defaults.paper_height),
    };
    let (ratio_w, ratio_h) = match ratio {
        Some(s) => parse_ratio(&s)?,
        None => (defaults.ratio_width, defaults.ratio_height),
    };
    let mut min_border = min_border.unwrap_or(defaults.min_border);
    if min_border < 0.0 {
        return Err(format!("Minimum border cannot be negative: {}", min_border));
    }

    if optimize {
        let optimal = calculate_optimal_min_border(paper_w, paper_h, ratio_w, ratio_h, min_border);
        verbose_println!(
            "[dorkroom] Optimizer moved the minimum border {} -> {}",
            min_border,
            optimal
        );
        min_border = optimal;
    }

    let print = compute_print_size(paper_w, paper_h, ratio_w, ratio_h, min_border);
    if print.width <= 0.0 || print.height <= 0.0 {
        return Err(format!(
            "No {}:{} print fits {}x{} paper inside a {}\" border",
            ratio_w, ratio_h, paper_w, paper_h, min_border
        ));
    }

    let policy = if ignore_min_border {
        BorderPolicy::Ignore
    } else {
        BorderPolicy::Strict
    };
    let clamped = clamp_offsets(
        paper_w,
        paper_h,
        print.width,
        print.height,
        min_border,
        offset_h,
        offset_v,
        policy,
    );
    let borders = borders_from_gaps(clamped.half_w, clamped.half_h, clamped.h, clamped.v);
    let readings = blade_readings(print.width, print.height, clamped.h, clamped.v);

    let mut cache = EaselCache::with_capacity(defaults.easel_cache_capacity);
    let fit = resolve_easel_slot(&mut cache, paper_w, paper_h, landscape);

    println!("Paper:        {}x{} in", paper_w, paper_h);
    println!("Ratio:        {}:{}", ratio_w, ratio_h);
    println!("Min border:   {}\"", round_to(min_border, 2));
    println!();
    println!(
        "Print size:   {} x {} in",
        round_to(print.width, 2),
        round_to(print.height, 2)
    );
    println!(
        "Borders:      L {}  R {}  T {}  B {}",
        round_to(borders.left, 2),
        round_to(borders.right, 2),
        round_to(borders.top, 2),
        round_to(borders.bottom, 2)
    );
    println!(
        "Blades:       L {}  R {}  T {}  B {}",
        round_to(readings.left, 2),
        round_to(readings.right, 2),
        round_to(readings.top, 2),
        round_to(readings.bottom, 2)
    );
    println!();

    if fit.is_non_standard_paper_size {
        println!(
            "Easel:        none (non-standard paper, use the {}x{} sheet as the opening)",
            fit.effective_slot.width, fit.effective_slot.height
        );
    } else {
        println!(
            "Easel:        {}x{} (slot {}x{})",
            fit.easel.width, fit.easel.height, fit.effective_slot.width, fit.effective_slot.height
        );
    }

    if let Some(warning) = &clamped.warning {
        println!();
        println!("Warning: {}", warning);
    }

    Ok(())
}
