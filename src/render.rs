//! Terminal rendering of grids, locations and vacation results using owo_colors.

use chrono::Month;
use holiplan_core::color::{contrast_text_color, parse_rgb};
use holiplan_core::custom_calendar::{CustomCalendar, ValidationErrors};
use holiplan_core::grid::{DayType, MarkerType, YearGrid, compute_cell_render_model};
use holiplan_core::vacation::{VacationDates, VacationStats, VacationSummary};
use holiplan_core::LocationConfig;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// `text` on a `bg_hex` background with readable foreground.
pub fn swatch(text: &str, bg_hex: &str) -> String {
    let Some([r, g, b]) = parse_rgb(bg_hex) else {
        return text.to_string();
    };
    let [fr, fg, fb] = parse_rgb(contrast_text_color(bg_hex)).unwrap_or([255, 255, 255]);
    format!(" {text} ").truecolor(fr, fg, fb).on_truecolor(r, g, b).to_string()
}

/// `text` in the `hex` foreground color.
pub fn paint(text: &str, hex: &str) -> String {
    match parse_rgb(hex) {
        Some([r, g, b]) => text.truecolor(r, g, b).to_string(),
        None => text.to_string(),
    }
}

impl Render for LocationConfig {
    fn render(&self) -> String {
        let mut line = format!("{} {}", paint("●", &self.color), self.name);
        if !self.weekend_days.is_standard() {
            let days: Vec<_> = self.weekend_days.day_names().iter().map(|d| d.as_str()).collect();
            line.push_str(&format!(" {}", format!("(weekend: {})", days.join(", ")).dimmed()));
        }
        line
    }
}

impl Render for CustomCalendar {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            paint("●", &self.meta.default_color),
            self.meta.name,
            format!("[{}] {} holidays", self.meta.id, self.holidays.len()).dimmed()
        )
    }
}

impl Render for ValidationErrors {
    fn render(&self) -> String {
        self.iter()
            .map(|e| format!("   {} {}", e.field.red(), e.message))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn month_label(month: u32) -> String {
    let name = u8::try_from(month + 1)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("???");
    name.chars().take(3).collect()
}

/// The 12 × 31 grid: one row per month, planned dates highlighted.
pub fn render_year_grid(grid: &YearGrid, planned: &VacationDates) -> String {
    let mut lines = Vec::new();

    let header: String = (1..=31).map(|d| format!("{d:>3}")).collect();
    lines.push(format!("{:<4}{}", grid.year(), header).dimmed().to_string());

    for month in 0..12 {
        let mut row = format!("{:<4}", month_label(month));

        for day in grid.month(month) {
            let model = compute_cell_render_model(Some(day));
            let cell = match (model.day_type, model.marker_type) {
                (DayType::Invalid, _) => "   ".to_string(),
                (DayType::Weekend, MarkerType::None) => "  -".dimmed().to_string(),
                (DayType::Workday, MarkerType::None) => "  ·".dimmed().to_string(),
                (_, MarkerType::Solid) => {
                    let color = day
                        .locations
                        .iter()
                        .find(|l| l.is_holiday)
                        .map(|l| l.color.as_str())
                        .unwrap_or_default();
                    format!("  {}", paint("●", color))
                }
                (_, MarkerType::Pie) => format!("{:>3}", model.holiday_count).bold().to_string(),
                (_, MarkerType::Wheel) => "  *".bold().to_string(),
            };

            let is_planned = day.date.is_some_and(|d| planned.contains(&d));
            if is_planned {
                row.push_str(&cell.reversed().to_string());
            } else {
                row.push_str(&cell);
            }
        }

        lines.push(row);
    }

    lines.join("\n")
}

/// Colored legend for every grid column.
pub fn render_legend(grid: &YearGrid) -> String {
    let Some((_, day)) = grid.iter().next() else {
        return String::new();
    };

    day.locations
        .iter()
        .map(|l| swatch(&l.location_name, &l.color))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Every holiday of the year, one line per (date, column).
pub fn render_holiday_list(grid: &YearGrid) -> String {
    let mut lines = Vec::new();

    for (_, day) in grid.iter() {
        let Some(date) = day.date else { continue };

        for info in day.locations.iter().filter(|l| l.is_holiday) {
            let mut line = format!(
                "{} {:<9} {} {}",
                date,
                date.format("%A"),
                paint("●", &info.color),
                info.holiday_name.as_deref().unwrap_or("Holiday")
            );
            line.push_str(&format!(" {}", format!("({})", info.location_name).dimmed()));
            if info.half_day == Some(true) {
                line.push_str(&format!(" {}", "half day".yellow()));
            }
            if let Some(notes) = &info.notes {
                line.push_str(&format!(" {}", format!("- {notes}").dimmed()));
            }
            lines.push(line);
        }
    }

    if lines.is_empty() {
        return "   No holidays".dimmed().to_string();
    }
    lines.join("\n")
}

impl Render for VacationStats {
    fn render(&self) -> String {
        let mut lines = vec![format!(
            "{} {} {}",
            swatch(&self.location_name, &self.color),
            format!("{} required", self.required_vacation_days).bold(),
            format!(
                "({} planned, {} weekend, {} holiday)",
                self.planned_count, self.weekend_excluded_count, self.holiday_excluded_count
            )
            .dimmed()
        )];

        for interval in &self.required_intervals {
            let range = if interval.count == 1 {
                format!("{} {}", interval.start, interval.start_weekday)
            } else {
                format!(
                    "{} {} → {} {}",
                    interval.start, interval.start_weekday, interval.end, interval.end_weekday
                )
            };
            lines.push(format!("   {} {}", "+".green(), range));
        }

        for detail in &self.excluded_dates {
            lines.push(format!(
                "   {} {} {}",
                "-".dimmed(),
                detail.date.dimmed(),
                detail.reason.dimmed()
            ));
        }

        lines.join("\n")
    }
}

impl Render for VacationSummary {
    fn render(&self) -> String {
        if self.stats_by_location.is_empty() {
            return "No locations selected".dimmed().to_string();
        }

        let mut blocks: Vec<String> = self.stats_by_location.iter().map(|s| s.render()).collect();

        blocks.push(format!(
            "{} {}\n{} {} {}\n{} {} {}",
            "Planned dates:".bold(),
            self.total_planned_dates,
            "Minimum required:".bold(),
            self.min_required.count,
            format!("({})", self.min_required.locations.join(", ")).dimmed(),
            "Maximum required:".bold(),
            self.max_required.count,
            format!("({})", self.max_required.locations.join(", ")).dimmed(),
        ));

        blocks.join("\n\n")
    }
}
