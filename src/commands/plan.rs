//! Editing the planned vacation dates of a year.
//!
//! Only validity matters for selection, so these commands use a grid without
//! any holiday columns and never touch the network.

use anyhow::{Result, bail};
use chrono::{Datelike, NaiveDate};
use holiplan_core::dates::weekday_name;
use holiplan_core::grid::YearGrid;
use holiplan_core::vacation::{RangeMode, VacationDates, csv, selection};
use owo_colors::OwoColorize;

use crate::store::Store;

fn ensure_year(date: NaiveDate, year: i32) -> Result<()> {
    if date.year() != year {
        bail!("{date} is not in {year}");
    }
    Ok(())
}

fn report(before: &VacationDates, after: &VacationDates) {
    let added = after.difference(before).count();
    let removed = before.difference(after).count();

    if added > 0 {
        println!("{}", format!("+ {added} date(s) planned").green());
    }
    if removed > 0 {
        println!("{}", format!("- {removed} date(s) removed").red());
    }
    if added == 0 && removed == 0 {
        println!("{}", "No changes".dimmed());
    }
    println!("{} planned in total", after.len());
}

pub fn add(store: &Store, year: i32, from: NaiveDate, to: Option<NaiveDate>) -> Result<()> {
    let grid = YearGrid::assemble(year, &[], &[]);
    let before = store.load_vacation(year)?;

    let after = selection::add_range(&before, from, to.unwrap_or(from), &grid);
    store.save_vacation(year, &after)?;

    report(&before, &after);
    Ok(())
}

pub fn toggle(store: &Store, year: i32, date: NaiveDate) -> Result<()> {
    ensure_year(date, year)?;
    let before = store.load_vacation(year)?;

    let after = selection::toggle_date(&before, date);
    store.save_vacation(year, &after)?;

    report(&before, &after);
    Ok(())
}

pub fn toggle_range(store: &Store, year: i32, from: NaiveDate, to: NaiveDate) -> Result<()> {
    let grid = YearGrid::assemble(year, &[], &[]);
    let before = store.load_vacation(year)?;

    let toggle = selection::toggle_range(&before, from, to, &grid);
    store.save_vacation(year, &toggle.dates)?;

    let verb = match toggle.mode {
        RangeMode::Add => "Selected",
        RangeMode::Remove => "Deselected",
    };
    println!("{verb} {} day(s)", toggle.affected.len());
    report(&before, &toggle.dates);
    Ok(())
}

pub fn clear(store: &Store, year: i32) -> Result<()> {
    let before = store.load_vacation(year)?;
    let after = selection::clear();
    store.save_vacation(year, &after)?;

    report(&before, &after);
    Ok(())
}

pub fn list(store: &Store, year: i32, as_csv: bool) -> Result<()> {
    let dates = store.load_vacation(year)?;

    if as_csv {
        println!("{}", csv::vacation_dates_csv(&dates));
        return Ok(());
    }

    if dates.is_empty() {
        println!("{}", format!("No dates planned for {year}").dimmed());
        return Ok(());
    }

    for date in &dates {
        println!("{} {}", date, weekday_name(*date).dimmed());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plan_commands_persist() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());

        add(&store, 2026, date(2026, 8, 3), Some(date(2026, 8, 7))).unwrap();
        assert_eq!(store.load_vacation(2026).unwrap().len(), 5);

        toggle(&store, 2026, date(2026, 8, 5)).unwrap();
        assert!(!store.load_vacation(2026).unwrap().contains(&date(2026, 8, 5)));

        // 4 of 5 selected: the range is deselected
        toggle_range(&store, 2026, date(2026, 8, 7), date(2026, 8, 3)).unwrap();
        assert!(store.load_vacation(2026).unwrap().is_empty());

        add(&store, 2026, date(2026, 12, 24), None).unwrap();
        clear(&store, 2026).unwrap();
        assert!(store.load_vacation(2026).unwrap().is_empty());
    }

    #[test]
    fn test_toggle_outside_year_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());

        assert!(toggle(&store, 2026, date(2027, 1, 1)).is_err());
    }
}
