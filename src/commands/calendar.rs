//! Custom calendar library management.

use std::path::Path;

use anyhow::{Result, bail};
use holiplan_core::custom_calendar::{
    CustomCalendar, calendar_from_location, example_calendar, validate_custom_calendar,
};
use owo_colors::OwoColorize;

use super::{Planner, read_json_file, resolve_locations};
use crate::render::Render;
use crate::store::Store;
use crate::utils::tui::create_spinner;

fn load_valid(path: &Path) -> Result<CustomCalendar> {
    let document = read_json_file(path)?;

    match validate_custom_calendar(&document) {
        Ok(calendar) => Ok(calendar),
        Err(errors) => {
            println!("{}", format!("{} is not a valid calendar:", path.display()).red());
            println!("{}", errors.render());
            Err(errors.into())
        }
    }
}

pub fn validate(path: &Path) -> Result<()> {
    let calendar = load_valid(path)?;
    println!("{} {}", "✓".green(), calendar.render());
    Ok(())
}

/// Add a calendar file to the library, or replace the stored one with `replace`.
pub fn import(store: &Store, path: &Path, replace: bool) -> Result<()> {
    let calendar = load_valid(path)?;
    let mut library = store.load_calendars()?;

    let line = calendar.render();
    if replace && library.get(&calendar.meta.id).is_some() {
        library.update(calendar)?;
        println!("{} {}", "~".yellow(), line);
    } else {
        library.add(calendar)?;
        println!("{} {}", "+".green(), line);
    }

    store.save_calendars(&library)
}

pub fn list(store: &Store) -> Result<()> {
    let library = store.load_calendars()?;

    if library.is_empty() {
        println!(
            "{}",
            "No custom calendars. Import one with `holiplan calendar import <file>`.".dimmed()
        );
        return Ok(());
    }

    for calendar in library.iter() {
        println!("{}", calendar.render());
    }
    Ok(())
}

pub fn remove(store: &Store, id: &str) -> Result<()> {
    let mut library = store.load_calendars()?;

    let Some(removed) = library.remove(id) else {
        bail!("Calendar '{id}' not found");
    };
    store.save_calendars(&library)?;

    println!("{} {}", "-".red(), removed.render());
    Ok(())
}

/// Print (and optionally import) an editable copy of a location's official holidays.
pub async fn from_location(planner: &Planner, location_id: &str, year: i32, import: bool) -> Result<()> {
    let location = resolve_locations(&[location_id.to_string()])?.remove(0);

    let spinner = create_spinner(format!("Fetching holidays for {}", location.name));
    let calendar = calendar_from_location(planner.cache(), &location, year).await;
    spinner.finish_and_clear();

    if calendar.holidays.is_empty() {
        tracing::warn!(location = location_id, year, "no official holidays found");
    }

    if import {
        let mut library = planner.store.load_calendars()?;
        println!("{} {}", "+".green(), calendar.render());
        library.add(calendar)?;
        planner.store.save_calendars(&library)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&calendar)?);
    }

    Ok(())
}

pub fn example() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&example_calendar())?);
    Ok(())
}
