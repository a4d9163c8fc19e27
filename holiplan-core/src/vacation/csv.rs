//! CSV exports of planned dates and of the per-location summary.

use super::{RequiredExtreme, VacationDates, VacationSummary};
use crate::dates::weekday_name;

const SUMMARY_HEADER: &str =
    "Region/Calendar,Planned Dates,Excluded (Weekends),Excluded (Holidays),Vacation Days Required";

fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn extreme_cell(extreme: &RequiredExtreme) -> String {
    quoted(&format!("{} ({})", extreme.count, extreme.locations.join(", ")))
}

/// `Date,Weekday` rows in chronological order.
pub fn vacation_dates_csv(dates: &VacationDates) -> String {
    std::iter::once("Date,Weekday".to_string())
        .chain(dates.iter().map(|d| format!("{},{}", d, weekday_name(*d))))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn summary_csv(summary: &VacationSummary) -> String {
    let mut lines = vec![SUMMARY_HEADER.to_string()];

    lines.extend(summary.stats_by_location.iter().map(|s| {
        format!(
            "{},{},{},{},{}",
            quoted(&s.location_name),
            s.planned_count,
            s.weekend_excluded_count,
            s.holiday_excluded_count,
            s.required_vacation_days
        )
    }));

    lines.push(String::new());
    lines.push(format!("Total Planned Dates,{}", summary.total_planned_dates));
    lines.push(format!("Minimum Required,{}", extreme_cell(&summary.min_required)));
    lines.push(format!("Maximum Required,{}", extreme_cell(&summary.max_required)));

    lines.join("\n")
}
