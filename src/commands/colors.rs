use anyhow::Result;
use holiplan_core::color::{DEFAULT_DISTINCT_THRESHOLD, Theme, assign_colors, minimum_distance};
use owo_colors::OwoColorize;

use crate::render::swatch;

pub fn run(ids: &[String], theme: Theme) -> Result<()> {
    let colors = assign_colors(ids, theme);

    for (id, color) in &colors {
        println!("{} {}", swatch(&format!("{id:<12}"), color), color.dimmed());
    }

    let palette: Vec<&String> = colors.values().collect();
    let distance = minimum_distance(palette.as_slice());
    if distance.is_finite() {
        let line = format!("Minimum distance: {distance:.3}");
        if distance >= DEFAULT_DISTINCT_THRESHOLD {
            println!("{}", line.dimmed());
        } else {
            println!("{}", format!("{line} (some colors may look alike)").yellow());
        }
    }

    Ok(())
}
