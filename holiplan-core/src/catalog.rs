//! Built-in catalogue of European official locations.
//!
//! The list mirrors the countries and subdivisions covered by the Nager.Date API.

use std::sync::LazyLock;

use crate::location::LocationConfig;

/// Locations selected on first run when nothing has been configured.
pub const DEFAULT_SELECTED_LOCATIONS: [&str; 3] = ["cy", "de-by", "ru"];

const POPULAR_LOCATION_IDS: [&str; 15] = [
    "cy", "de-by", "de-be", "de-nw", "ru", "gb-eng", "gb-sct", "fr", "es-md", "es-ct", "it",
    "nl", "at-9", "ch-zh", "pl",
];

static LOCATIONS_JSON: &str = include_str!("../data/locations.json");

static EUROPEAN_LOCATIONS: LazyLock<Vec<LocationConfig>> = LazyLock::new(|| {
    serde_json::from_str(LOCATIONS_JSON).unwrap_or_else(|e| {
        tracing::error!("Embedded location catalogue is malformed: {e}");
        Vec::new()
    })
});

/// All catalogue locations, countries and regions interleaved by country.
pub fn european_locations() -> &'static [LocationConfig] {
    &EUROPEAN_LOCATIONS
}

pub fn location_by_id(id: &str) -> Option<&'static LocationConfig> {
    european_locations().iter().find(|loc| loc.id == id)
}

/// Group locations by country name, keeping catalogue order.
pub fn locations_by_country() -> Vec<(&'static str, Vec<&'static LocationConfig>)> {
    let mut grouped: Vec<(&'static str, Vec<&'static LocationConfig>)> = Vec::new();

    for location in european_locations() {
        let country = location.country_name();
        match grouped.iter_mut().find(|(name, _)| *name == country) {
            Some((_, members)) => members.push(location),
            None => grouped.push((country, vec![location])),
        }
    }

    grouped
}

/// Curated subset for quick selection.
pub fn popular_locations() -> Vec<&'static LocationConfig> {
    european_locations()
        .iter()
        .filter(|loc| POPULAR_LOCATION_IDS.contains(&loc.id.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::LocationKind;

    #[test]
    fn test_catalogue_parses() {
        assert_eq!(european_locations().len(), 120);
    }

    #[test]
    fn test_location_ids_are_unique() {
        let mut ids: Vec<_> = european_locations().iter().map(|l| &l.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), european_locations().len());
    }

    #[test]
    fn test_lookup_region() {
        let bavaria = location_by_id("de-by").unwrap();
        assert_eq!(bavaria.country_code, "DE");
        assert_eq!(bavaria.region_code.as_deref(), Some("DE-BY"));
        assert_eq!(bavaria.kind, LocationKind::Region);
        assert!(bavaria.weekend_days.is_standard());
        assert!(location_by_id("atlantis").is_none());
    }

    #[test]
    fn test_defaults_exist_in_catalogue() {
        for id in DEFAULT_SELECTED_LOCATIONS {
            assert!(location_by_id(id).is_some(), "missing {id}");
        }
        assert_eq!(popular_locations().len(), POPULAR_LOCATION_IDS.len());
    }

    #[test]
    fn test_group_by_country() {
        let grouped = locations_by_country();
        let (_, germany) = grouped.iter().find(|(name, _)| *name == "Germany").unwrap();
        assert!(germany.iter().all(|l| l.country_code == "DE"));
        assert!(germany.len() > 10);
    }
}
