//! Custom calendar templates cloned from an official location.

use super::{CustomCalendar, CustomCalendarHoliday, CustomCalendarMeta, CustomCalendarRules};
use crate::holiday::HolidayKind;
use crate::location::LocationConfig;
use crate::source::HolidayCache;
use crate::weekend::DayName;

const TEMPLATE_COLOR: &str = "#7B61FF";

/// Copy a location's official holidays for `year` into an editable custom calendar.
///
/// A failed fetch yields a calendar with no holidays.
pub async fn calendar_from_location(
    cache: &HolidayCache,
    location: &LocationConfig,
    year: i32,
) -> CustomCalendar {
    let official = cache.holidays(&location.country_code, year).await;

    let weekend = if location.weekend_days.is_standard() {
        vec![DayName::Saturday, DayName::Sunday]
    } else {
        location.weekend_days.day_names()
    };

    let holidays = official
        .iter()
        .filter(|h| h.applies_to(location))
        .map(|h| CustomCalendarHoliday {
            date: h.date,
            name: h.display_name().to_string(),
            kind: HolidayKind::PublicHoliday,
            half_day: Some(false),
            notes: (h.name != h.local_name).then(|| h.name.clone()),
        })
        .collect();

    CustomCalendar {
        meta: CustomCalendarMeta {
            id: format!("{}-{}-copy", location.id, year),
            name: format!("{} ({})", location.name, year),
            description: Some(format!("Holidays from {} for {}", location.name, year)),
            timezone: Some("UTC".to_string()),
            default_color: TEMPLATE_COLOR.to_string(),
        },
        rules: Some(CustomCalendarRules {
            weekend: Some(weekend),
        }),
        holidays,
    }
}
