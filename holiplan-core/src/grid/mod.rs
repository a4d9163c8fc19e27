//! The 12 × 31 year grid: one cell per (month, day-of-month) position, each
//! carrying per-location weekend and holiday information.

mod builder;
mod latest;
mod render;

pub use builder::GridBuilder;
pub use latest::{GridTicket, LatestGrid};
pub use render::{CellRenderModel, DayType, MarkerSize, MarkerType, compute_cell_render_model};

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::custom_calendar::CustomCalendar;
use crate::dates::{days_in_month, format_iso, is_global_weekend};
use crate::error::HoliplanError;
use crate::holiday::{Holiday, HolidayKind, HolidaySourceKind};
use crate::location::LocationConfig;
use crate::weekend::WeekendDays;

pub const GRID_MONTHS: u32 = 12;
pub const GRID_DAYS: u32 = 31;
pub const GRID_CELLS: usize = (GRID_MONTHS * GRID_DAYS) as usize;

/// Position of a cell: zero-based month, one-based day. Written as `"month-day"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridKey {
    month: u32,
    day: u32,
}

impl GridKey {
    pub fn new(month: u32, day: u32) -> Option<Self> {
        (month < GRID_MONTHS && (1..=GRID_DAYS).contains(&day)).then_some(GridKey { month, day })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        GridKey {
            month: date.month0(),
            day: date.day(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    fn index(&self) -> usize {
        (self.month * GRID_DAYS + self.day - 1) as usize
    }
}

impl fmt::Display for GridKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.month, self.day)
    }
}

impl FromStr for GridKey {
    type Err = HoliplanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HoliplanError::InvalidGridKey(s.to_string());
        let (month, day) = s.split_once('-').ok_or_else(invalid)?;
        let month = month.parse().map_err(|_| invalid())?;
        let day = day.parse().map_err(|_| invalid())?;
        GridKey::new(month, day).ok_or_else(invalid)
    }
}

/// One location's (or custom calendar's) view of a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLocationInfo {
    pub location_id: String,
    pub location_name: String,
    pub color: String,
    pub is_weekend: bool,
    pub is_holiday: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday_type: Option<HolidayKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub half_day: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub source: HolidaySourceKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayInfo {
    /// `None` for positions like February 30th.
    pub date: Option<NaiveDate>,
    /// Formatted position, even when it is not a real date.
    pub date_iso: String,
    pub is_valid: bool,
    pub is_global_weekend: bool,
    pub locations: Vec<DayLocationInfo>,
}

impl DayInfo {
    pub fn location(&self, location_id: &str) -> Option<&DayLocationInfo> {
        self.locations.iter().find(|l| l.location_id == location_id)
    }

    pub fn holiday_count(&self) -> usize {
        self.locations.iter().filter(|l| l.is_holiday).count()
    }
}

/// One grid column before assembly: identity, weekend rule and holidays by date.
struct Column<'a> {
    id: String,
    name: &'a str,
    color: &'a str,
    weekend: WeekendDays,
    source: HolidaySourceKind,
    holidays: HashMap<NaiveDate, Holiday>,
}

impl Column<'_> {
    fn cell(&self, date: Option<NaiveDate>) -> DayLocationInfo {
        let holiday = date.and_then(|d| self.holidays.get(&d));

        let holiday_name = holiday.map(|h| match self.source {
            HolidaySourceKind::Official => h.display_name().to_string(),
            HolidaySourceKind::Custom => h.name.clone(),
        });

        DayLocationInfo {
            location_id: self.id.clone(),
            location_name: self.name.to_string(),
            color: self.color.to_string(),
            is_weekend: date.is_some_and(|d| self.weekend.is_weekend(d)),
            is_holiday: holiday.is_some(),
            holiday_name,
            holiday_type: holiday.map(|h| h.kind),
            half_day: holiday.and_then(|h| h.half_day),
            notes: holiday.and_then(|h| h.notes.clone()),
            source: self.source,
        }
    }
}

/// Index holidays by date; on a shared date the later entry wins.
fn by_date(holidays: impl IntoIterator<Item = Holiday>) -> HashMap<NaiveDate, Holiday> {
    holidays.into_iter().map(|h| (h.date, h)).collect()
}

/// A complete year: exactly [`GRID_CELLS`] cells in row-major (month, day) order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearGrid {
    year: i32,
    days: Vec<DayInfo>,
}

impl YearGrid {
    /// Assemble a grid from each official location's country holidays and the
    /// custom calendars, in that column order.
    ///
    /// Country holidays are narrowed per location with [`Holiday::applies_to`].
    pub fn assemble(
        year: i32,
        official: &[(LocationConfig, Vec<Holiday>)],
        calendars: &[CustomCalendar],
    ) -> Self {
        let mut columns: Vec<Column> = official
            .iter()
            .map(|(location, holidays)| Column {
                id: location.id.clone(),
                name: &location.name,
                color: &location.color,
                weekend: location.weekend_days,
                source: HolidaySourceKind::Official,
                holidays: by_date(holidays.iter().filter(|h| h.applies_to(location)).cloned()),
            })
            .collect();

        columns.extend(calendars.iter().map(|calendar| Column {
            id: calendar.location_id(),
            name: &calendar.meta.name,
            color: &calendar.meta.default_color,
            weekend: calendar.weekend_days(),
            source: HolidaySourceKind::Custom,
            holidays: by_date(calendar.holidays_for_year(year)),
        }));

        let mut days = Vec::with_capacity(GRID_CELLS);
        for month in 0..GRID_MONTHS {
            let month_len = days_in_month(year, month);
            for day in 1..=GRID_DAYS {
                let date = if day <= month_len {
                    NaiveDate::from_ymd_opt(year, month + 1, day)
                } else {
                    None
                };

                days.push(DayInfo {
                    date,
                    date_iso: format_iso(year, month, day),
                    is_valid: date.is_some(),
                    is_global_weekend: date.is_some_and(is_global_weekend),
                    locations: columns.iter().map(|c| c.cell(date)).collect(),
                });
            }
        }

        tracing::debug!(
            year,
            columns = columns.len(),
            "assembled year grid"
        );

        YearGrid { year, days }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn get(&self, key: GridKey) -> Option<&DayInfo> {
        self.days.get(key.index())
    }

    /// Look up a cell by its `"month-day"` key.
    pub fn get_by_key(&self, key: &str) -> Option<&DayInfo> {
        key.parse().ok().and_then(|k| self.get(k))
    }

    /// Cell for `date`; nothing when `date` belongs to another year.
    pub fn get_date(&self, date: NaiveDate) -> Option<&DayInfo> {
        if date.year() != self.year {
            return None;
        }
        self.get(GridKey::from_date(date))
    }

    /// The 31 cells of a zero-based month.
    pub fn month(&self, month: u32) -> &[DayInfo] {
        let start = (month * GRID_DAYS) as usize;
        self.days
            .get(start..start + GRID_DAYS as usize)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (GridKey, &DayInfo)> {
        self.days.iter().enumerate().map(|(i, day)| {
            let i = i as u32;
            (
                GridKey {
                    month: i / GRID_DAYS,
                    day: i % GRID_DAYS + 1,
                },
                day,
            )
        })
    }
}
