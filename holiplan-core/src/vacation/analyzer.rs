use chrono::NaiveDate;

use super::{
    CalendarTarget, DateInterval, DayStatus, RequiredExtreme, VacationDateDetail, VacationDates,
    VacationInterval, VacationLocationSummary, VacationStats, VacationSummary,
};
use crate::custom_calendar::CustomCalendar;
use crate::dates::{next_day, weekday_name};
use crate::grid::{DayLocationInfo, YearGrid};
use crate::location::LocationConfig;

/// The target's view of `date`, if the date is a real day of the grid's year.
fn resolve<'a>(grid: &'a YearGrid, target_id: &str, date: NaiveDate) -> Option<&'a DayLocationInfo> {
    grid.get_date(date)
        .filter(|day| day.is_valid)
        .and_then(|day| day.location(target_id))
}

fn status_of(info: &DayLocationInfo) -> DayStatus {
    if info.is_weekend {
        DayStatus::Weekend
    } else if info.is_holiday {
        DayStatus::Holiday
    } else {
        DayStatus::Required
    }
}

fn is_next_day(previous: NaiveDate, next: NaiveDate) -> bool {
    next_day(previous) == Some(next)
}

/// Group details into runs of consecutive days, in chronological order.
pub fn group_dates_into_intervals(details: &[VacationDateDetail]) -> Vec<DateInterval> {
    let mut sorted: Vec<&VacationDateDetail> = details.iter().collect();
    sorted.sort_by_key(|d| d.date);

    let mut intervals: Vec<DateInterval> = Vec::new();
    for detail in sorted {
        match intervals.last_mut() {
            Some(current) if is_next_day(current.end, detail.date) => {
                current.end = detail.date;
                current.end_weekday = detail.weekday.clone();
                current.count += 1;
            }
            _ => intervals.push(DateInterval {
                start: detail.date,
                end: detail.date,
                start_weekday: detail.weekday.clone(),
                end_weekday: detail.weekday.clone(),
                count: 1,
            }),
        }
    }
    intervals
}

/// Split sorted dates into maximal runs of consecutive days.
pub fn group_consecutive_dates(dates: &VacationDates) -> Vec<Vec<NaiveDate>> {
    let mut runs: Vec<Vec<NaiveDate>> = Vec::new();
    for &date in dates {
        match runs.last_mut() {
            Some(run) if run.last().is_some_and(|&prev| is_next_day(prev, date)) => run.push(date),
            _ => runs.push(vec![date]),
        }
    }
    runs
}

/// Classify every planned date for one target.
///
/// Dates the grid cannot resolve (another year, or no column for the target)
/// still count towards `planned_count` but are otherwise ignored.
pub fn compute_location_stats(target: &CalendarTarget, dates: &VacationDates, grid: &YearGrid) -> VacationStats {
    let mut required_dates = Vec::new();
    let mut excluded_dates = Vec::new();
    let mut weekend_excluded_count = 0;
    let mut holiday_excluded_count = 0;

    for &date in dates {
        let Some(info) = resolve(grid, &target.id, date) else {
            continue;
        };

        let status = status_of(info);
        let reason = match status {
            DayStatus::Weekend => {
                weekend_excluded_count += 1;
                "Weekend".to_string()
            }
            DayStatus::Holiday => {
                holiday_excluded_count += 1;
                format!(
                    "Holiday: {}",
                    info.holiday_name.as_deref().unwrap_or("Public Holiday")
                )
            }
            DayStatus::Required => "Working day".to_string(),
        };

        let detail = VacationDateDetail {
            date,
            weekday: weekday_name(date),
            status,
            reason,
        };

        if status == DayStatus::Required {
            required_dates.push(detail);
        } else {
            excluded_dates.push(detail);
        }
    }

    VacationStats {
        location_id: target.id.clone(),
        location_name: target.name.clone(),
        color: target.color.clone(),
        planned_count: dates.len(),
        weekend_excluded_count,
        holiday_excluded_count,
        required_vacation_days: required_dates.len(),
        required_intervals: group_dates_into_intervals(&required_dates),
        excluded_intervals: group_dates_into_intervals(&excluded_dates),
        required_dates,
        excluded_dates,
    }
}

fn interval_stats(run: &[NaiveDate], target_id: &str, grid: &YearGrid) -> Option<VacationInterval> {
    let (&start, &end) = (run.first()?, run.last()?);

    let mut interval = VacationInterval {
        start,
        end,
        total_days: run.len(),
        required_days: 0,
        excluded_weekends: 0,
        excluded_holidays: 0,
        excluded_details: Vec::new(),
    };

    for &date in run {
        let Some(info) = resolve(grid, target_id, date) else {
            continue;
        };

        let status = status_of(info);
        let reason = match status {
            DayStatus::Required => {
                interval.required_days += 1;
                continue;
            }
            DayStatus::Weekend => {
                interval.excluded_weekends += 1;
                "Weekend".to_string()
            }
            DayStatus::Holiday => {
                interval.excluded_holidays += 1;
                info.holiday_name.clone().unwrap_or_else(|| "Holiday".to_string())
            }
        };

        interval.excluded_details.push(VacationDateDetail {
            date,
            weekday: weekday_name(date),
            status,
            reason,
        });
    }

    Some(interval)
}

/// Break the planned dates into consecutive blocks and classify each block for one target.
pub fn compute_location_intervals(
    target: &CalendarTarget,
    dates: &VacationDates,
    grid: &YearGrid,
) -> VacationLocationSummary {
    let intervals: Vec<VacationInterval> = group_consecutive_dates(dates)
        .iter()
        .filter_map(|run| interval_stats(run, &target.id, grid))
        .collect();

    VacationLocationSummary {
        location_id: target.id.clone(),
        location_name: target.name.clone(),
        color: target.color.clone(),
        total_planned: dates.len(),
        total_required: intervals.iter().map(|i| i.required_days).sum(),
        total_excluded: intervals
            .iter()
            .map(|i| i.excluded_weekends + i.excluded_holidays)
            .sum(),
        intervals,
    }
}

fn extreme(stats: &[VacationStats], count: Option<usize>) -> RequiredExtreme {
    let Some(count) = count else {
        return RequiredExtreme::default();
    };

    RequiredExtreme {
        count,
        locations: stats
            .iter()
            .filter(|s| s.required_vacation_days == count)
            .map(|s| s.location_name.clone())
            .collect(),
    }
}

/// Analyze the planned dates for every official location, then every custom calendar.
pub fn compute_vacation_summary(
    dates: &VacationDates,
    grid: &YearGrid,
    locations: &[LocationConfig],
    calendars: &[CustomCalendar],
) -> VacationSummary {
    let targets: Vec<CalendarTarget> = locations
        .iter()
        .map(CalendarTarget::from)
        .chain(calendars.iter().map(CalendarTarget::from))
        .collect();

    let stats_by_location: Vec<VacationStats> = targets
        .iter()
        .map(|t| compute_location_stats(t, dates, grid))
        .collect();
    let intervals_by_location = targets
        .iter()
        .map(|t| compute_location_intervals(t, dates, grid))
        .collect();

    let required = stats_by_location.iter().map(|s| s.required_vacation_days);
    let min_required = extreme(&stats_by_location, required.clone().min());
    let max_required = extreme(&stats_by_location, required.max());

    tracing::debug!(
        planned = dates.len(),
        targets = targets.len(),
        min = min_required.count,
        max = max_required.count,
        "computed vacation summary"
    );

    VacationSummary {
        total_planned_dates: dates.len(),
        min_required,
        max_required,
        stats_by_location,
        intervals_by_location,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::location_by_id;
    use crate::custom_calendar::{CustomCalendarMeta, CustomCalendarRules};
    use crate::holiday::Holiday;
    use crate::weekend::DayName;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn german_holidays() -> Vec<Holiday> {
        vec![
            Holiday::official(date(2026, 1, 1), "New Year's Day", "Neujahr", "DE", None),
            Holiday::official(
                date(2026, 1, 6),
                "Epiphany",
                "Heilige Drei Könige",
                "DE",
                Some(vec!["DE-BY".into()]),
            ),
        ]
    }

    fn gulf_calendar() -> CustomCalendar {
        CustomCalendar {
            meta: CustomCalendarMeta {
                id: "gulf".into(),
                name: "Gulf Office".into(),
                description: None,
                timezone: None,
                default_color: "#118ed4".into(),
            },
            rules: Some(CustomCalendarRules {
                weekend: Some(vec![DayName::Friday, DayName::Saturday]),
            }),
            holidays: Vec::new(),
        }
    }

    fn grid() -> YearGrid {
        let bavaria = location_by_id("de-by").unwrap().clone();
        let berlin = location_by_id("de-be").unwrap().clone();
        YearGrid::assemble(
            2026,
            &[(bavaria, german_holidays()), (berlin, german_holidays())],
            &[gulf_calendar()],
        )
    }

    /// Thursday 1 January to Tuesday 6 January, plus Friday 9 January.
    fn planned() -> VacationDates {
        let mut dates: VacationDates = (1..=6).map(|d| date(2026, 1, d)).collect();
        dates.insert(date(2026, 1, 9));
        dates
    }

    fn bavaria() -> CalendarTarget {
        CalendarTarget::from(location_by_id("de-by").unwrap())
    }

    #[test]
    fn test_group_dates_into_intervals() {
        let detail = |d: NaiveDate| VacationDateDetail {
            date: d,
            weekday: weekday_name(d),
            status: DayStatus::Required,
            reason: "Working day".into(),
        };
        let details = vec![
            detail(date(2026, 3, 2)),
            detail(date(2025, 12, 31)),
            detail(date(2026, 1, 1)),
            detail(date(2026, 2, 28)),
            detail(date(2026, 3, 1)),
        ];

        let intervals = group_dates_into_intervals(&details);
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].start, date(2025, 12, 31));
        assert_eq!(intervals[0].end, date(2026, 1, 1));
        assert_eq!(intervals[0].start_weekday, "Wednesday");
        assert_eq!(intervals[0].end_weekday, "Thursday");
        assert_eq!(intervals[1].count, 3);

        assert!(group_dates_into_intervals(&[]).is_empty());
    }

    #[test]
    fn test_group_consecutive_dates() {
        let runs = group_consecutive_dates(&planned());
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 6);
        assert_eq!(runs[1], vec![date(2026, 1, 9)]);
    }

    #[test]
    fn test_location_stats() {
        let stats = compute_location_stats(&bavaria(), &planned(), &grid());

        assert_eq!(stats.location_name, "Germany — Bavaria");
        assert_eq!(stats.planned_count, 7);
        assert_eq!(stats.weekend_excluded_count, 2);
        assert_eq!(stats.holiday_excluded_count, 2);
        assert_eq!(stats.required_vacation_days, 3);

        let required: Vec<_> = stats.required_dates.iter().map(|d| d.date).collect();
        assert_eq!(required, vec![date(2026, 1, 2), date(2026, 1, 5), date(2026, 1, 9)]);
        assert_eq!(stats.required_dates[0].reason, "Working day");
        assert_eq!(stats.required_dates[0].weekday, "Friday");

        assert_eq!(stats.excluded_dates[0].reason, "Holiday: Neujahr");
        assert_eq!(stats.excluded_dates[1].reason, "Weekend");
        assert_eq!(stats.excluded_dates[3].reason, "Holiday: Heilige Drei Könige");

        assert_eq!(stats.required_intervals.len(), 3);
        let excluded_runs: Vec<_> = stats.excluded_intervals.iter().map(|i| i.count).collect();
        assert_eq!(excluded_runs, vec![1, 2, 1]);
    }

    #[test]
    fn test_unresolvable_dates_only_count_as_planned() {
        let mut dates = planned();
        dates.insert(date(2025, 12, 31));

        let stats = compute_location_stats(&bavaria(), &dates, &grid());
        assert_eq!(stats.planned_count, 8);
        assert_eq!(stats.required_vacation_days, 3);
        assert!(
            stats.required_vacation_days + stats.weekend_excluded_count + stats.holiday_excluded_count
                <= stats.planned_count
        );

        let missing = CalendarTarget {
            id: "nowhere".into(),
            name: "Nowhere".into(),
            color: String::new(),
        };
        let stats = compute_location_stats(&missing, &dates, &grid());
        assert_eq!(stats.planned_count, 8);
        assert_eq!(stats.required_vacation_days, 0);
        assert!(stats.excluded_dates.is_empty());
    }

    #[test]
    fn test_location_intervals() {
        let summary = compute_location_intervals(&bavaria(), &planned(), &grid());

        assert_eq!(summary.total_planned, 7);
        assert_eq!(summary.total_required, 3);
        assert_eq!(summary.total_excluded, 4);
        assert_eq!(summary.intervals.len(), 2);

        let first = &summary.intervals[0];
        assert_eq!(first.start, date(2026, 1, 1));
        assert_eq!(first.end, date(2026, 1, 6));
        assert_eq!(first.total_days, 6);
        assert_eq!(first.required_days, 2);
        assert_eq!(first.excluded_weekends, 2);
        assert_eq!(first.excluded_holidays, 2);
        let reasons: Vec<_> = first.excluded_details.iter().map(|d| d.reason.as_str()).collect();
        assert_eq!(reasons, vec!["Neujahr", "Weekend", "Weekend", "Heilige Drei Könige"]);
    }

    #[test]
    fn test_interval_total_days_include_unresolvable_dates() {
        let mut dates = planned();
        dates.insert(date(2025, 12, 31));

        let summary = compute_location_intervals(&bavaria(), &dates, &grid());
        let first = &summary.intervals[0];
        assert_eq!(first.start, date(2025, 12, 31));
        assert_eq!(first.total_days, 7);
        assert_eq!(
            first.required_days + first.excluded_weekends + first.excluded_holidays,
            6
        );
    }

    #[test]
    fn test_summary_extremes() {
        let locations = vec![
            location_by_id("de-by").unwrap().clone(),
            location_by_id("de-be").unwrap().clone(),
        ];
        let summary = compute_vacation_summary(&planned(), &grid(), &locations, &[gulf_calendar()]);

        assert_eq!(summary.total_planned_dates, 7);
        assert_eq!(summary.stats_by_location.len(), 3);
        assert_eq!(summary.intervals_by_location.len(), 3);

        let required: Vec<_> = summary
            .stats_by_location
            .iter()
            .map(|s| (s.location_id.as_str(), s.required_vacation_days))
            .collect();
        assert_eq!(required, vec![("de-by", 3), ("de-be", 4), ("custom-gulf", 4)]);

        assert_eq!(summary.min_required.count, 3);
        assert_eq!(summary.min_required.locations, vec!["Germany — Bavaria"]);
        assert_eq!(summary.max_required.count, 4);
        assert_eq!(
            summary.max_required.locations,
            vec!["Germany — Berlin", "Gulf Office"]
        );
    }

    #[test]
    fn test_summary_without_targets() {
        let summary = compute_vacation_summary(&planned(), &grid(), &[], &[]);
        assert_eq!(summary.total_planned_dates, 7);
        assert_eq!(summary.min_required, RequiredExtreme::default());
        assert_eq!(summary.max_required, RequiredExtreme::default());
    }
}
