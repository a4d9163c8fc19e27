//! JSON files under the data directory: planned vacation dates per year and
//! the custom calendar library.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use holiplan_core::custom_calendar::CalendarLibrary;
use holiplan_core::vacation::VacationDates;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

const VACATION_FILE: &str = "vacation.json";
const CALENDARS_FILE: &str = "custom_calendars.json";

/// Planned dates keyed by year.
type VacationFile = BTreeMap<i32, VacationDates>;

pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Store { dir: dir.into() }
    }

    fn read_json<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T> {
        let path = self.dir.join(name);
        if !path.exists() {
            return Ok(T::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("Could not parse {}", path.display()))
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(value)?;
        write_atomic(&self.dir.join(name), content.as_bytes())
    }

    pub fn load_vacation(&self, year: i32) -> Result<VacationDates> {
        let mut file: VacationFile = self.read_json(VACATION_FILE)?;
        Ok(file.remove(&year).unwrap_or_default())
    }

    /// Replace the planned dates of `year`, leaving other years untouched.
    pub fn save_vacation(&self, year: i32, dates: &VacationDates) -> Result<()> {
        let mut file: VacationFile = self.read_json(VACATION_FILE)?;
        if dates.is_empty() {
            file.remove(&year);
        } else {
            file.insert(year, dates.clone());
        }

        self.write_json(VACATION_FILE, &file)?;
        tracing::debug!(year, count = dates.len(), "saved vacation dates");
        Ok(())
    }

    pub fn load_calendars(&self) -> Result<CalendarLibrary> {
        self.read_json(CALENDARS_FILE)
    }

    pub fn save_calendars(&self, library: &CalendarLibrary) -> Result<()> {
        self.write_json(CALENDARS_FILE, library)?;
        tracing::debug!(count = library.len(), "saved custom calendars");
        Ok(())
    }
}

/// Write through a temporary file in the same directory, then rename over `path`.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = path.parent().context("File has no parent directory")?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.persist(path)
        .with_context(|| format!("Could not write {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use holiplan_core::custom_calendar::example_calendar;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_missing_files_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("data"));

        assert!(store.load_vacation(2026).unwrap().is_empty());
        assert!(store.load_calendars().unwrap().is_empty());
    }

    #[test]
    fn test_years_are_stored_independently() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());

        let this_year: VacationDates = [date(2026, 8, 3), date(2026, 8, 4)].into();
        let next_year: VacationDates = [date(2027, 1, 4)].into();
        store.save_vacation(2026, &this_year).unwrap();
        store.save_vacation(2027, &next_year).unwrap();

        assert_eq!(store.load_vacation(2026).unwrap(), this_year);
        assert_eq!(store.load_vacation(2027).unwrap(), next_year);

        store.save_vacation(2026, &VacationDates::new()).unwrap();
        assert!(store.load_vacation(2026).unwrap().is_empty());
        assert_eq!(store.load_vacation(2027).unwrap(), next_year);
    }

    #[test]
    fn test_vacation_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        store
            .save_vacation(2026, &[date(2026, 12, 24)].into())
            .unwrap();

        let raw = std::fs::read_to_string(dir.path().join(VACATION_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({ "2026": ["2026-12-24"] }));
    }

    #[test]
    fn test_calendar_library_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());

        let mut library = CalendarLibrary::new();
        library.add(example_calendar()).unwrap();
        store.save_calendars(&library).unwrap();

        let loaded = store.load_calendars().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get("my-company-calendar"), Some(&example_calendar()));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(VACATION_FILE), "{not json").unwrap();

        let store = Store::new(dir.path());
        assert!(store.load_vacation(2026).is_err());
    }
}
