use anyhow::Result;
use holiplan_core::catalog::{locations_by_country, popular_locations};
use holiplan_core::LocationConfig;
use owo_colors::OwoColorize;

fn render_entry(location: &LocationConfig) -> String {
    let region = location
        .region_code
        .as_deref()
        .map(|code| format!(" {}", code.dimmed()))
        .unwrap_or_default();
    format!("   {:<10} {}{}", location.id.cyan(), location.name, region)
}

pub fn run(popular: bool) -> Result<()> {
    if popular {
        println!("{}", "Popular locations".bold());
        for location in popular_locations() {
            println!("{}", render_entry(location));
        }
        return Ok(());
    }

    let groups = locations_by_country();
    for (i, (country, locations)) in groups.iter().enumerate() {
        println!("{}", country.bold());
        for location in locations {
            println!("{}", render_entry(location));
        }

        if i < groups.len() - 1 {
            println!();
        }
    }

    Ok(())
}
