//! Holiday records from official sources and custom calendars.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::location::LocationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolidayKind {
    PublicHoliday,
    Observance,
    CompanyHoliday,
    Other,
}

impl HolidayKind {
    pub const ALL: [HolidayKind; 4] = [
        HolidayKind::PublicHoliday,
        HolidayKind::Observance,
        HolidayKind::CompanyHoliday,
        HolidayKind::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HolidayKind::PublicHoliday => "PUBLIC_HOLIDAY",
            HolidayKind::Observance => "OBSERVANCE",
            HolidayKind::CompanyHoliday => "COMPANY_HOLIDAY",
            HolidayKind::Other => "OTHER",
        }
    }
}

impl FromStr for HolidayKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HolidayKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("Invalid holiday type: {s}"))
    }
}

impl fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a holiday came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidaySourceKind {
    Official,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    pub local_name: String,
    pub country_code: String,
    /// Regions the holiday is limited to. None or empty means the whole country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counties: Option<Vec<String>>,
    pub kind: HolidayKind,
    pub source: HolidaySourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub half_day: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Holiday {
    /// An official public holiday, as reported by a holiday provider.
    pub fn official(
        date: NaiveDate,
        name: impl Into<String>,
        local_name: impl Into<String>,
        country_code: impl Into<String>,
        counties: Option<Vec<String>>,
    ) -> Self {
        Holiday {
            date,
            name: name.into(),
            local_name: local_name.into(),
            country_code: country_code.into(),
            counties,
            kind: HolidayKind::PublicHoliday,
            source: HolidaySourceKind::Official,
            calendar_id: None,
            half_day: None,
            notes: None,
        }
    }

    /// Whether this holiday is observed at `location`.
    ///
    /// A location without a region code sees every holiday of its country.
    /// A regional location sees nationwide holidays plus those listing its region.
    pub fn applies_to(&self, location: &LocationConfig) -> bool {
        let Some(region) = location.region_code.as_deref() else {
            return true;
        };
        match self.counties.as_deref() {
            None | Some([]) => true,
            Some(counties) => counties.iter().any(|c| c == region),
        }
    }

    /// Local name, falling back to the English name.
    pub fn display_name(&self) -> &str {
        if self.local_name.is_empty() {
            &self.name
        } else {
            &self.local_name
        }
    }
}
