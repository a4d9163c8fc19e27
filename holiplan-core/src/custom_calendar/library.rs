//! An ordered collection of custom calendars keyed by `meta.id`.

use serde::{Deserialize, Serialize};

use super::CustomCalendar;
use crate::error::{HoliplanError, HoliplanResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarLibrary {
    calendars: Vec<CustomCalendar>,
}

impl CalendarLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a calendar. Fails if the id is already taken.
    pub fn add(&mut self, calendar: CustomCalendar) -> HoliplanResult<()> {
        if self.get(&calendar.meta.id).is_some() {
            return Err(HoliplanError::DuplicateCalendar(calendar.meta.id));
        }
        self.calendars.push(calendar);
        Ok(())
    }

    /// Replace the calendar with the same id, keeping its position.
    pub fn update(&mut self, calendar: CustomCalendar) -> HoliplanResult<()> {
        let slot = self
            .calendars
            .iter_mut()
            .find(|c| c.meta.id == calendar.meta.id)
            .ok_or_else(|| HoliplanError::CalendarNotFound(calendar.meta.id.clone()))?;
        *slot = calendar;
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Option<CustomCalendar> {
        let index = self.calendars.iter().position(|c| c.meta.id == id)?;
        Some(self.calendars.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&CustomCalendar> {
        self.calendars.iter().find(|c| c.meta.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomCalendar> {
        self.calendars.iter()
    }

    pub fn as_slice(&self) -> &[CustomCalendar] {
        &self.calendars
    }

    pub fn len(&self) -> usize {
        self.calendars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty()
    }
}

impl From<Vec<CustomCalendar>> for CalendarLibrary {
    fn from(calendars: Vec<CustomCalendar>) -> Self {
        CalendarLibrary { calendars }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::custom_calendar::example_calendar;

    fn calendar(id: &str) -> CustomCalendar {
        let mut calendar = example_calendar();
        calendar.meta.id = id.to_string();
        calendar
    }

    #[test]
    fn test_add_rejects_duplicate_ids() {
        let mut library = CalendarLibrary::new();
        library.add(calendar("acme")).unwrap();

        let err = library.add(calendar("acme")).unwrap_err();
        assert!(matches!(err, HoliplanError::DuplicateCalendar(id) if id == "acme"));
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut library = CalendarLibrary::from(vec![calendar("a"), calendar("b")]);

        let mut renamed = calendar("a");
        renamed.meta.name = "Renamed".to_string();
        library.update(renamed).unwrap();

        assert_eq!(library.as_slice()[0].meta.name, "Renamed");
        assert!(matches!(
            library.update(calendar("zzz")),
            Err(HoliplanError::CalendarNotFound(_))
        ));
    }

    #[test]
    fn test_remove() {
        let mut library = CalendarLibrary::from(vec![calendar("a"), calendar("b")]);
        assert!(library.remove("a").is_some());
        assert!(library.remove("a").is_none());
        assert_eq!(library.iter().map(|c| c.meta.id.as_str()).collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let library = CalendarLibrary::from(vec![calendar("a")]);
        let json = serde_json::to_value(&library).unwrap();
        assert!(json.is_array());
        let back: CalendarLibrary = serde_json::from_value(json).unwrap();
        assert_eq!(back, library);
    }
}
