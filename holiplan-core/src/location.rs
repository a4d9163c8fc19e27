//! Official locations: countries and sub-country regions.

use serde::{Deserialize, Serialize};

use crate::weekend::WeekendDays;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Country,
    Region,
}

/// A country or region whose holidays come from an official source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub id: String,
    pub name: String,
    /// ISO 3166-1 alpha-2 code used to fetch holidays, e.g. "DE"
    pub country_code: String,
    /// ISO 3166-2 subdivision, e.g. "DE-BY". None covers the whole country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    #[serde(default)]
    pub weekend_days: WeekendDays,
    /// Display color; empty until one is assigned.
    #[serde(default)]
    pub color: String,
    pub kind: LocationKind,
}

impl LocationConfig {
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Country part of the display name ("Germany — Bavaria" -> "Germany").
    pub fn country_name(&self) -> &str {
        self.name
            .split(" — ")
            .next()
            .unwrap_or(self.name.as_str())
    }
}
