//! Editing the set of planned dates. Every operation returns a new set.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::VacationDates;
use crate::dates::dates_between;
use crate::grid::YearGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeMode {
    Add,
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeToggle {
    pub dates: VacationDates,
    pub mode: RangeMode,
    /// Every valid date of the range, whether or not it changed.
    pub affected: Vec<NaiveDate>,
}

/// Dates between `start` and `end` (either order) that are real days of the grid's year.
fn valid_range(start: NaiveDate, end: NaiveDate, grid: &YearGrid) -> Vec<NaiveDate> {
    dates_between(start, end)
        .into_iter()
        .filter(|&d| grid.get_date(d).is_some_and(|day| day.is_valid))
        .collect()
}

pub fn toggle_date(dates: &VacationDates, date: NaiveDate) -> VacationDates {
    let mut next = dates.clone();
    if !next.remove(&date) {
        next.insert(date);
    }
    next
}

pub fn add_range(dates: &VacationDates, start: NaiveDate, end: NaiveDate, grid: &YearGrid) -> VacationDates {
    let mut next = dates.clone();
    next.extend(valid_range(start, end, grid));
    next
}

/// Select the range, or deselect it when more than half of it is already selected.
pub fn toggle_range(dates: &VacationDates, start: NaiveDate, end: NaiveDate, grid: &YearGrid) -> RangeToggle {
    let affected = valid_range(start, end, grid);
    let selected = affected.iter().filter(|d| dates.contains(d)).count();

    let mode = if selected * 2 > affected.len() {
        RangeMode::Remove
    } else {
        RangeMode::Add
    };

    let mut next = dates.clone();
    for date in &affected {
        match mode {
            RangeMode::Add => {
                next.insert(*date);
            }
            RangeMode::Remove => {
                next.remove(date);
            }
        }
    }

    RangeToggle {
        dates: next,
        mode,
        affected,
    }
}

pub fn clear() -> VacationDates {
    VacationDates::new()
}
