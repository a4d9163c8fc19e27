use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;

use super::YearGrid;
use crate::custom_calendar::CustomCalendar;
use crate::location::LocationConfig;
use crate::source::HolidayCache;

/// Builds year grids, fetching official holidays through a shared cache.
#[derive(Clone)]
pub struct GridBuilder {
    cache: Arc<HolidayCache>,
}

impl GridBuilder {
    pub fn new(cache: Arc<HolidayCache>) -> Self {
        GridBuilder { cache }
    }

    pub fn cache(&self) -> &HolidayCache {
        &self.cache
    }

    /// Build the grid for `year`. Columns are `locations` in order, then `calendars`.
    ///
    /// Holidays are fetched once per distinct country, concurrently. A country
    /// whose fetch fails simply has no holidays.
    pub async fn build_year_grid(
        &self,
        year: i32,
        locations: &[LocationConfig],
        calendars: &[CustomCalendar],
    ) -> YearGrid {
        let mut countries: Vec<&str> = locations.iter().map(|l| l.country_code.as_str()).collect();
        countries.sort_unstable();
        countries.dedup();

        tracing::info!(
            year,
            countries = countries.len(),
            calendars = calendars.len(),
            "building year grid"
        );

        let fetched = join_all(countries.iter().map(|country| self.cache.holidays(country, year))).await;
        let by_country: HashMap<&str, _> = countries.into_iter().zip(fetched).collect();

        let official: Vec<_> = locations
            .iter()
            .map(|location| {
                let holidays = by_country
                    .get(location.country_code.as_str())
                    .map(|h| h.as_ref().clone())
                    .unwrap_or_default();
                (location.clone(), holidays)
            })
            .collect();

        YearGrid::assemble(year, &official, calendars)
    }
}
