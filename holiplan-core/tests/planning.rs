use std::sync::Arc;

use chrono::NaiveDate;
use holiplan_core::catalog::location_by_id;
use holiplan_core::color::{Theme, assign_colors};
use holiplan_core::custom_calendar::{CalendarLibrary, calendar_from_location, validate_custom_calendar};
use holiplan_core::grid::{GridBuilder, LatestGrid, MarkerType, compute_cell_render_model};
use holiplan_core::source::{HolidayCache, StaticHolidaySource};
use holiplan_core::vacation::{VacationDates, compute_vacation_summary, csv, selection};
use holiplan_core::{Holiday, HolidayKind, LocationConfig};
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn source() -> StaticHolidaySource {
    StaticHolidaySource::new()
        .with_holidays(
            "DE",
            2026,
            vec![
                Holiday::official(date(2026, 1, 1), "New Year's Day", "Neujahr", "DE", None),
                Holiday::official(
                    date(2026, 1, 6),
                    "Epiphany",
                    "Heilige Drei Könige",
                    "DE",
                    Some(vec!["DE-BY".into()]),
                ),
                Holiday::official(date(2026, 4, 3), "Good Friday", "Karfreitag", "DE", None),
                Holiday::official(date(2026, 4, 6), "Easter Monday", "Ostermontag", "DE", None),
            ],
        )
        .with_holidays(
            "CY",
            2026,
            vec![
                Holiday::official(date(2026, 1, 1), "New Year's Day", "Πρωτοχρονιά", "CY", None),
                Holiday::official(date(2026, 4, 13), "Easter Monday", "Δευτέρα του Πάσχα", "CY", None),
            ],
        )
}

/// Selected locations with their assigned colors.
fn selected(ids: &[&str], theme: Theme) -> Vec<LocationConfig> {
    let colors = assign_colors(ids.iter().copied(), theme);
    ids.iter()
        .map(|id| {
            let location = location_by_id(id).unwrap().clone();
            let color = colors[*id].clone();
            location.with_color(color)
        })
        .collect()
}

fn company_calendar() -> holiplan_core::custom_calendar::CustomCalendar {
    validate_custom_calendar(&json!({
        "meta": { "id": "acme", "name": "ACME", "defaultColor": "#7B61FF" },
        "holidays": [
            { "date": "2026-04-07", "name": "Spring Break", "type": "COMPANY_HOLIDAY" }
        ]
    }))
    .unwrap()
}

#[tokio::test]
async fn test_plan_easter_week() {
    let cache = Arc::new(HolidayCache::new(Arc::new(source())));
    let builder = GridBuilder::new(cache);
    let locations = selected(&["de-by", "cy", "ru"], Theme::Light);

    let mut library = CalendarLibrary::new();
    library.add(company_calendar()).unwrap();

    let grid = builder
        .build_year_grid(2026, &locations, library.as_slice())
        .await;
    assert_eq!(grid.len(), 372);

    // Friday 3 April to Friday 10 April
    let dates = selection::add_range(&VacationDates::new(), date(2026, 4, 3), date(2026, 4, 10), &grid);
    assert_eq!(dates.len(), 8);

    let summary = compute_vacation_summary(&dates, &grid, &locations, library.as_slice());
    let required: Vec<_> = summary
        .stats_by_location
        .iter()
        .map(|s| (s.location_id.as_str(), s.required_vacation_days))
        .collect();

    // de-by: Good Friday and Easter Monday off; cy: Easter Monday is the 13th;
    // ru: no data, every weekday counts; acme: only Spring Break.
    assert_eq!(
        required,
        vec![("de-by", 4), ("cy", 6), ("ru", 6), ("custom-acme", 5)]
    );
    assert_eq!(summary.min_required.count, 4);
    assert_eq!(summary.min_required.locations, vec!["Germany — Bavaria"]);
    assert_eq!(summary.max_required.count, 6);
    assert_eq!(summary.max_required.locations, vec!["Cyprus", "Russia"]);

    for stats in &summary.stats_by_location {
        assert!(!stats.color.is_empty());
        assert!(
            stats.required_vacation_days + stats.weekend_excluded_count + stats.holiday_excluded_count
                <= stats.planned_count
        );
    }

    let report = csv::summary_csv(&summary);
    assert!(report.ends_with("Maximum Required,\"6 (Cyprus, Russia)\""));
}

#[tokio::test]
async fn test_render_models_follow_holiday_counts() {
    let builder = GridBuilder::new(Arc::new(HolidayCache::new(Arc::new(source()))));
    let locations = selected(&["de-by", "de-be", "cy"], Theme::Dark);

    let grid = builder.build_year_grid(2026, &locations, &[]).await;

    let new_year = compute_cell_render_model(grid.get_by_key("0-1"));
    assert_eq!(new_year.holiday_count, 3);
    assert_eq!(new_year.marker_type, MarkerType::Pie);

    let epiphany = compute_cell_render_model(grid.get_date(date(2026, 1, 6)));
    assert_eq!(epiphany.marker_type, MarkerType::Solid);
}

#[tokio::test]
async fn test_superseded_grid_is_not_published() {
    let builder = GridBuilder::new(Arc::new(HolidayCache::new(Arc::new(source()))));
    let latest = LatestGrid::new();
    let locations = selected(&["cy"], Theme::Light);

    let first = latest.begin();
    let second = latest.begin();

    let (old, new) = tokio::join!(
        builder.build_year_grid(2025, &locations, &[]),
        builder.build_year_grid(2026, &locations, &[]),
    );

    assert!(latest.publish(second, new));
    assert!(!latest.publish(first, old));
    assert_eq!(latest.current().unwrap().year(), 2026);
}

#[tokio::test]
async fn test_calendar_copied_from_location() {
    let cache = HolidayCache::new(Arc::new(source()));
    let berlin = location_by_id("de-be").unwrap();

    let calendar = calendar_from_location(&cache, berlin, 2026).await;
    assert_eq!(calendar.meta.id, "de-be-2026-copy");
    assert_eq!(calendar.meta.name, "Germany — Berlin (2026)");
    // Epiphany is Bavarian only
    assert_eq!(calendar.holidays.len(), 3);
    assert_eq!(calendar.holidays[0].name, "Neujahr");
    assert_eq!(calendar.holidays[0].notes.as_deref(), Some("New Year's Day"));
    assert!(calendar.holidays.iter().all(|h| h.kind == HolidayKind::PublicHoliday));

    // the copy is itself a valid import document
    let document = serde_json::to_value(&calendar).unwrap();
    assert_eq!(validate_custom_calendar(&document).unwrap(), calendar);
}
