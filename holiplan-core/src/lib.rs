//! Core types and algorithms for holiplan.
//!
//! This crate is shared by the CLI and the holiday providers:
//! - `grid` builds the 12×31 year grid of weekend/holiday flags per location
//! - `vacation` turns a set of planned dates into required vacation days
//! - `color` assigns distinct, theme-aware colors to active calendars
//! - `custom_calendar` validates and manages user-authored calendars
//! - `source` defines the holiday-fetch collaborator and its cache

pub mod catalog;
pub mod color;
pub mod custom_calendar;
pub mod dates;
pub mod error;
pub mod grid;
pub mod holiday;
pub mod location;
pub mod source;
pub mod vacation;
pub mod weekend;

pub use error::{HoliplanError, HoliplanResult};
pub use holiday::{Holiday, HolidayKind, HolidaySourceKind};
pub use location::{LocationConfig, LocationKind};
pub use weekend::{DayName, WeekendDays};
