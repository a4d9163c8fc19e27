//! User-authored calendars with their own holidays and weekend rules.
//!
//! The JSON document shape is:
//!
//! ```json
//! {
//!   "meta": { "id": "acme", "name": "ACME Corp", "defaultColor": "#7B61FF" },
//!   "rules": { "weekend": ["SATURDAY", "SUNDAY"] },
//!   "holidays": [{ "date": "2026-07-15", "name": "Founders Day", "type": "COMPANY_HOLIDAY" }]
//! }
//! ```

mod library;
mod template;
mod validate;

pub use library::CalendarLibrary;
pub use template::calendar_from_location;
pub use validate::{FieldError, ValidationErrors, validate_custom_calendar};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::holiday::{Holiday, HolidayKind, HolidaySourceKind};
use crate::weekend::{DayName, WeekendDays};

/// Country code placed on holidays that come from custom calendars.
pub const CUSTOM_COUNTRY_CODE: &str = "CUSTOM";

/// Prefix that keeps custom calendar ids apart from official location ids in the grid.
pub const CUSTOM_LOCATION_PREFIX: &str = "custom-";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCalendarMeta {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    pub default_color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomCalendarRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekend: Option<Vec<DayName>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCalendarHoliday {
    pub date: NaiveDate,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HolidayKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub half_day: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomCalendar {
    pub meta: CustomCalendarMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<CustomCalendarRules>,
    pub holidays: Vec<CustomCalendarHoliday>,
}

impl CustomCalendar {
    /// Weekend from `rules.weekend`, Saturday + Sunday when absent or empty.
    pub fn weekend_days(&self) -> WeekendDays {
        self.rules
            .as_ref()
            .and_then(|r| r.weekend.as_deref())
            .map(WeekendDays::from_day_names)
            .unwrap_or_default()
    }

    /// Id of this calendar's column in the year grid.
    pub fn location_id(&self) -> String {
        format!("{}{}", CUSTOM_LOCATION_PREFIX, self.meta.id)
    }

    /// This calendar's holidays falling in `year`.
    pub fn holidays_for_year(&self, year: i32) -> Vec<Holiday> {
        self.holidays
            .iter()
            .filter(|h| h.date.year() == year)
            .map(|h| Holiday {
                date: h.date,
                name: h.name.clone(),
                local_name: h.name.clone(),
                country_code: CUSTOM_COUNTRY_CODE.to_string(),
                counties: None,
                kind: h.kind,
                source: HolidaySourceKind::Custom,
                calendar_id: Some(self.meta.id.clone()),
                half_day: h.half_day,
                notes: h.notes.clone(),
            })
            .collect()
    }
}

/// A documented sample calendar, handy as an import template.
pub fn example_calendar() -> CustomCalendar {
    let date = |m, d| NaiveDate::from_ymd_opt(2026, m, d).unwrap_or_default();

    CustomCalendar {
        meta: CustomCalendarMeta {
            id: "my-company-calendar".to_string(),
            name: "My Company Calendar".to_string(),
            description: Some("Company-specific holidays and events".to_string()),
            timezone: Some("Europe/Berlin".to_string()),
            default_color: "#7B61FF".to_string(),
        },
        rules: Some(CustomCalendarRules {
            weekend: Some(vec![DayName::Saturday, DayName::Sunday]),
        }),
        holidays: vec![
            CustomCalendarHoliday {
                date: date(1, 1),
                name: "New Year's Day".to_string(),
                kind: HolidayKind::PublicHoliday,
                half_day: Some(false),
                notes: Some("Office closed".to_string()),
            },
            CustomCalendarHoliday {
                date: date(12, 24),
                name: "Christmas Eve".to_string(),
                kind: HolidayKind::CompanyHoliday,
                half_day: Some(true),
                notes: None,
            },
            CustomCalendarHoliday {
                date: date(7, 15),
                name: "Company Foundation Day".to_string(),
                kind: HolidayKind::CompanyHoliday,
                half_day: Some(false),
                notes: Some("Annual celebration".to_string()),
            },
        ],
    }
}
