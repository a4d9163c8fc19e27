pub mod calendar;
pub mod colors;
pub mod config;
pub mod grid;
pub mod locations;
pub mod plan;
pub mod summary;

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use holiplan_core::catalog::location_by_id;
use holiplan_core::color::{Theme, assign_colors};
use holiplan_core::custom_calendar::{CalendarLibrary, CustomCalendar};
use holiplan_core::grid::{GridBuilder, YearGrid};
use holiplan_core::source::HolidayCache;
use holiplan_core::{HoliplanError, LocationConfig};
use holiplan_provider_nager::NagerClient;

use crate::config::HoliplanConfig;
use crate::store::Store;
use crate::utils::tui::create_spinner;

/// Color used when an id somehow has no assigned color.
const FALLBACK_COLOR: &str = "#888888";

/// Config, storage and the holiday-fetching grid builder for one invocation.
pub struct Planner {
    pub config: HoliplanConfig,
    pub store: Store,
    builder: GridBuilder,
}

/// Locations and custom calendars to show, with their display colors.
pub struct Selection {
    pub locations: Vec<LocationConfig>,
    pub calendars: Vec<CustomCalendar>,
}

impl Planner {
    pub fn load() -> Result<Self> {
        let config = HoliplanConfig::load()?;
        let store = Store::new(config.data_path());

        let client = NagerClient::with_base_url(&config.api_base_url)?;
        let cache = Arc::new(HolidayCache::new(Arc::new(client)));

        Ok(Planner {
            config,
            store,
            builder: GridBuilder::new(cache),
        })
    }

    pub fn cache(&self) -> &HolidayCache {
        self.builder.cache()
    }

    pub fn library(&self) -> Result<CalendarLibrary> {
        self.store.load_calendars()
    }

    /// Resolve `-l` / `--calendar` flags, falling back to the configured
    /// locations and every stored calendar, then assign display colors.
    pub fn selection(&self, location_ids: &[String], calendar_ids: &[String]) -> Result<Selection> {
        let ids = if location_ids.is_empty() {
            self.config.locations.as_slice()
        } else {
            location_ids
        };
        let locations = resolve_locations(ids)?;

        let library = self.library()?;
        let calendars = if calendar_ids.is_empty() {
            library.as_slice().to_vec()
        } else {
            calendar_ids
                .iter()
                .map(|id| {
                    library
                        .get(id)
                        .cloned()
                        .ok_or_else(|| HoliplanError::CalendarNotFound(id.clone()))
                })
                .collect::<Result<_, _>>()?
        };

        Ok(colorize(locations, calendars, self.config.theme))
    }

    /// Build the year grid, fetching holidays behind a spinner.
    pub async fn build_grid(&self, year: i32, selection: &Selection) -> YearGrid {
        let spinner = create_spinner(format!("Fetching holidays for {year}"));
        let grid = self
            .builder
            .build_year_grid(year, &selection.locations, &selection.calendars)
            .await;
        spinner.finish_and_clear();
        grid
    }
}

pub fn resolve_locations(ids: &[String]) -> Result<Vec<LocationConfig>> {
    ids.iter()
        .map(|id| {
            location_by_id(id)
                .cloned()
                .ok_or_else(|| HoliplanError::LocationNotFound(id.clone()).into())
        })
        .collect()
}

/// Assign one set of distinct colors across locations and calendars.
fn colorize(locations: Vec<LocationConfig>, calendars: Vec<CustomCalendar>, theme: Theme) -> Selection {
    let ids = locations
        .iter()
        .map(|l| l.id.clone())
        .chain(calendars.iter().map(|c| c.location_id()));
    let colors = assign_colors(ids, theme);
    let color_of = |id: &str| {
        colors
            .get(id)
            .cloned()
            .unwrap_or_else(|| FALLBACK_COLOR.to_string())
    };

    Selection {
        locations: locations
            .into_iter()
            .map(|l| {
                let color = color_of(&l.id);
                l.with_color(color)
            })
            .collect(),
        calendars: calendars
            .into_iter()
            .map(|mut c| {
                c.meta.default_color = color_of(&c.location_id());
                c
            })
            .collect(),
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    Ok(holiplan_core::dates::parse_iso(s)?)
}

/// Read and parse a JSON document from disk.
pub fn read_json_file(path: &std::path::Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("{} is not valid JSON", path.display()))
}
