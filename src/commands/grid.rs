use anyhow::Result;

use super::Planner;
use crate::render::{render_holiday_list, render_legend, render_year_grid};

pub async fn run(
    planner: &Planner,
    year: i32,
    location_ids: &[String],
    calendar_ids: &[String],
    details: bool,
) -> Result<()> {
    let selection = planner.selection(location_ids, calendar_ids)?;
    let grid = planner.build_grid(year, &selection).await;
    let planned = planner.store.load_vacation(year)?;

    println!("{}", render_legend(&grid));
    println!();
    println!("{}", render_year_grid(&grid, &planned));

    if details {
        println!();
        println!("{}", render_holiday_list(&grid));
    }

    Ok(())
}
