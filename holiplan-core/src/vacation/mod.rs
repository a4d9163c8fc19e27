//! Vacation planning: how many vacation days a set of planned dates costs in
//! each location, once weekends and holidays are excluded.

mod analyzer;
pub mod csv;
pub mod selection;

pub use analyzer::{
    compute_location_intervals, compute_location_stats, compute_vacation_summary,
    group_consecutive_dates, group_dates_into_intervals,
};
pub use selection::{RangeMode, RangeToggle};

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::custom_calendar::CustomCalendar;
use crate::location::LocationConfig;

/// The planned dates, kept sorted.
pub type VacationDates = BTreeSet<NaiveDate>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Required,
    Weekend,
    Holiday,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationDateDetail {
    pub date: NaiveDate,
    /// English weekday name, e.g. `Monday`
    pub weekday: String,
    pub status: DayStatus,
    pub reason: String,
}

/// A run of consecutive days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub start_weekday: String,
    pub end_weekday: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationStats {
    pub location_id: String,
    pub location_name: String,
    pub color: String,
    pub planned_count: usize,
    pub weekend_excluded_count: usize,
    pub holiday_excluded_count: usize,
    pub required_vacation_days: usize,
    pub required_dates: Vec<VacationDateDetail>,
    pub excluded_dates: Vec<VacationDateDetail>,
    pub required_intervals: Vec<DateInterval>,
    pub excluded_intervals: Vec<DateInterval>,
}

/// One consecutive block of planned dates, broken down for a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_days: usize,
    pub required_days: usize,
    pub excluded_weekends: usize,
    pub excluded_holidays: usize,
    pub excluded_details: Vec<VacationDateDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationLocationSummary {
    pub location_id: String,
    pub location_name: String,
    pub color: String,
    pub total_planned: usize,
    pub total_required: usize,
    pub total_excluded: usize,
    pub intervals: Vec<VacationInterval>,
}

/// The lowest or highest required day count and every location that has it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredExtreme {
    pub count: usize,
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationSummary {
    pub total_planned_dates: usize,
    pub min_required: RequiredExtreme,
    pub max_required: RequiredExtreme,
    pub stats_by_location: Vec<VacationStats>,
    pub intervals_by_location: Vec<VacationLocationSummary>,
}

/// One grid column to analyze: an official location or a custom calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarTarget {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl From<&LocationConfig> for CalendarTarget {
    fn from(location: &LocationConfig) -> Self {
        CalendarTarget {
            id: location.id.clone(),
            name: location.name.clone(),
            color: location.color.clone(),
        }
    }
}

impl From<&CustomCalendar> for CalendarTarget {
    fn from(calendar: &CustomCalendar) -> Self {
        CalendarTarget {
            id: calendar.location_id(),
            name: calendar.meta.name.clone(),
            color: calendar.meta.default_color.clone(),
        }
    }
}
