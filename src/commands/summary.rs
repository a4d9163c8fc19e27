use anyhow::Result;
use holiplan_core::vacation::{compute_vacation_summary, csv};
use owo_colors::OwoColorize;

use super::Planner;
use crate::render::Render;

pub async fn run(
    planner: &Planner,
    year: i32,
    location_ids: &[String],
    calendar_ids: &[String],
    as_csv: bool,
) -> Result<()> {
    let dates = planner.store.load_vacation(year)?;
    if dates.is_empty() && !as_csv {
        println!(
            "{}",
            format!("No dates planned for {year}. Add some with `holiplan plan add`.").dimmed()
        );
        return Ok(());
    }

    let selection = planner.selection(location_ids, calendar_ids)?;
    let grid = planner.build_grid(year, &selection).await;
    let summary = compute_vacation_summary(&dates, &grid, &selection.locations, &selection.calendars);

    if as_csv {
        println!("{}", csv::summary_csv(&summary));
    } else {
        println!("{}", summary.render());
    }

    Ok(())
}
