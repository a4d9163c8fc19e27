//! Weekend definitions.
//!
//! Official locations list their weekend as weekday numbers (0 = Sunday),
//! custom calendars as uppercase day names. Both end up as [`WeekendDays`].

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// An uppercase day name as used in custom calendar rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayName {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayName {
    /// All day names, Sunday first.
    pub const ALL: [DayName; 7] = [
        DayName::Sunday,
        DayName::Monday,
        DayName::Tuesday,
        DayName::Wednesday,
        DayName::Thursday,
        DayName::Friday,
        DayName::Saturday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DayName::Sunday => "SUNDAY",
            DayName::Monday => "MONDAY",
            DayName::Tuesday => "TUESDAY",
            DayName::Wednesday => "WEDNESDAY",
            DayName::Thursday => "THURSDAY",
            DayName::Friday => "FRIDAY",
            DayName::Saturday => "SATURDAY",
        }
    }

    pub fn weekday(self) -> Weekday {
        match self {
            DayName::Sunday => Weekday::Sun,
            DayName::Monday => Weekday::Mon,
            DayName::Tuesday => Weekday::Tue,
            DayName::Wednesday => Weekday::Wed,
            DayName::Thursday => Weekday::Thu,
            DayName::Friday => Weekday::Fri,
            DayName::Saturday => Weekday::Sat,
        }
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        DayName::ALL[weekday.num_days_from_sunday() as usize]
    }
}

impl FromStr for DayName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayName::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("Invalid day name: {s}"))
    }
}

impl fmt::Display for DayName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of weekdays treated as non-working days.
///
/// Stored as a bitmask indexed by day number (bit 0 = Sunday). On the wire it is
/// a list of day numbers, e.g. `[0, 6]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<u8>", into = "Vec<u8>")]
pub struct WeekendDays(u8);

impl Default for WeekendDays {
    /// Saturday and Sunday.
    fn default() -> Self {
        WeekendDays::from_day_numbers([0, 6])
    }
}

impl WeekendDays {
    /// Build from day numbers (0 = Sunday .. 6 = Saturday); other numbers are ignored.
    pub fn from_day_numbers(days: impl IntoIterator<Item = u8>) -> Self {
        WeekendDays(
            days.into_iter()
                .filter(|d| *d < 7)
                .fold(0, |mask, d| mask | (1 << d)),
        )
    }

    /// Build from custom calendar day names. An empty list means Saturday and Sunday.
    pub fn from_day_names(days: &[DayName]) -> Self {
        if days.is_empty() {
            return WeekendDays::default();
        }
        WeekendDays::from_day_numbers(
            days.iter()
                .map(|d| d.weekday().num_days_from_sunday() as u8),
        )
    }

    pub fn contains(&self, weekday: Weekday) -> bool {
        self.0 & (1 << weekday.num_days_from_sunday()) != 0
    }

    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.contains(date.weekday())
    }

    pub fn day_numbers(&self) -> Vec<u8> {
        (0..7).filter(|d| self.0 & (1 << d) != 0).collect()
    }

    pub fn day_names(&self) -> Vec<DayName> {
        self.day_numbers()
            .into_iter()
            .map(|d| DayName::ALL[d as usize])
            .collect()
    }

    /// True for the plain Saturday + Sunday weekend.
    pub fn is_standard(&self) -> bool {
        *self == WeekendDays::default()
    }
}

impl From<Vec<u8>> for WeekendDays {
    fn from(days: Vec<u8>) -> Self {
        WeekendDays::from_day_numbers(days)
    }
}

impl From<WeekendDays> for Vec<u8> {
    fn from(days: WeekendDays) -> Self {
        days.day_numbers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weekend_is_saturday_sunday() {
        let weekend = WeekendDays::default();
        assert!(weekend.contains(Weekday::Sat));
        assert!(weekend.contains(Weekday::Sun));
        assert!(!weekend.contains(Weekday::Fri));
        assert_eq!(weekend.day_numbers(), vec![0, 6]);
    }

    #[test]
    fn test_empty_day_names_fall_back_to_default() {
        assert!(WeekendDays::from_day_names(&[]).is_standard());
    }

    #[test]
    fn test_friday_saturday_weekend() {
        let weekend = WeekendDays::from_day_names(&[DayName::Friday, DayName::Saturday]);
        assert!(weekend.contains(Weekday::Fri));
        assert!(!weekend.contains(Weekday::Sun));
        assert_eq!(weekend.day_names(), vec![DayName::Friday, DayName::Saturday]);
    }

    #[test]
    fn test_serializes_as_day_numbers() {
        let weekend: WeekendDays = serde_json::from_str("[5, 6, 9]").unwrap();
        assert_eq!(serde_json::to_string(&weekend).unwrap(), "[5,6]");
    }

    #[test]
    fn test_day_name_parsing() {
        assert_eq!("MONDAY".parse::<DayName>().unwrap(), DayName::Monday);
        assert!("Monday".parse::<DayName>().is_err());
        assert_eq!(
            serde_json::to_string(&DayName::Saturday).unwrap(),
            "\"SATURDAY\""
        );
    }
}
