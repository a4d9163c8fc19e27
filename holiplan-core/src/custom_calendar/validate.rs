//! Schema validation for imported custom calendar documents.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::CustomCalendar;
use crate::dates::{is_iso_shape, parse_iso};
use crate::holiday::HolidayKind;
use crate::weekend::DayName;

/// One problem found in a custom calendar document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Path to the offending value, e.g. `holidays[2].date`
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every problem found in a document, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid custom calendar ({} error(s))", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

fn non_empty_str(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty())
}

/// Optional string fields may be missing or null, but nothing else.
fn check_optional_str(obj: &Map<String, Value>, key: &str, field: String, errors: &mut Vec<FieldError>) {
    match obj.get(key) {
        None | Some(Value::Null) | Some(Value::String(_)) => {}
        Some(_) => errors.push(FieldError::new(field, format!("{key} must be a string"))),
    }
}

fn validate_meta(meta: Option<&Value>, errors: &mut Vec<FieldError>) {
    let Some(meta) = meta.and_then(Value::as_object) else {
        errors.push(FieldError::new("meta", "meta object is required"));
        return;
    };

    if !non_empty_str(meta.get("id")) {
        errors.push(FieldError::new(
            "meta.id",
            "meta.id is required and must be a non-empty string",
        ));
    }

    if !non_empty_str(meta.get("name")) {
        errors.push(FieldError::new(
            "meta.name",
            "meta.name is required and must be a non-empty string",
        ));
    }

    if !meta
        .get("defaultColor")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty())
    {
        errors.push(FieldError::new(
            "meta.defaultColor",
            "meta.defaultColor is required",
        ));
    }

    check_optional_str(meta, "description", "meta.description".into(), errors);
    check_optional_str(meta, "timezone", "meta.timezone".into(), errors);
}

fn validate_rules(rules: Option<&Value>, errors: &mut Vec<FieldError>) {
    let rules = match rules {
        None | Some(Value::Null) => return,
        Some(Value::Object(rules)) => rules,
        Some(_) => {
            errors.push(FieldError::new("rules", "rules must be an object"));
            return;
        }
    };

    match rules.get("weekend") {
        None | Some(Value::Null) => {}
        Some(Value::Array(days)) => {
            let valid: Vec<&str> = DayName::ALL.iter().map(|d| d.as_str()).collect();
            for day in days {
                let ok = day.as_str().is_some_and(|d| valid.contains(&d));
                if !ok {
                    errors.push(FieldError::new(
                        "rules.weekend",
                        format!(
                            "Invalid day name: {}. Must be one of: {}",
                            day,
                            valid.join(", ")
                        ),
                    ));
                }
            }
        }
        Some(_) => errors.push(FieldError::new(
            "rules.weekend",
            "rules.weekend must be an array of day names",
        )),
    }
}

fn validate_holiday(index: usize, holiday: &Value, errors: &mut Vec<FieldError>) {
    let prefix = format!("holidays[{index}]");

    let Some(h) = holiday.as_object() else {
        errors.push(FieldError::new(prefix, "Invalid holiday object"));
        return;
    };

    match h.get("date").and_then(Value::as_str) {
        Some(date) if is_iso_shape(date) => {
            if parse_iso(date).is_err() {
                errors.push(FieldError::new(
                    format!("{prefix}.date"),
                    format!("Invalid date: {date}"),
                ));
            }
        }
        _ => errors.push(FieldError::new(
            format!("{prefix}.date"),
            "date must be in YYYY-MM-DD format",
        )),
    }

    if !non_empty_str(h.get("name")) {
        errors.push(FieldError::new(format!("{prefix}.name"), "name is required"));
    }

    let kind_ok = h
        .get("type")
        .and_then(Value::as_str)
        .is_some_and(|t| t.parse::<HolidayKind>().is_ok());
    if !kind_ok {
        let valid: Vec<&str> = HolidayKind::ALL.iter().map(|k| k.as_str()).collect();
        errors.push(FieldError::new(
            format!("{prefix}.type"),
            format!("type must be one of: {}", valid.join(", ")),
        ));
    }

    match h.get("halfDay") {
        None | Some(Value::Null) | Some(Value::Bool(_)) => {}
        Some(_) => errors.push(FieldError::new(
            format!("{prefix}.halfDay"),
            "halfDay must be a boolean",
        )),
    }

    check_optional_str(h, "notes", format!("{prefix}.notes"), errors);
}

/// Validate a parsed JSON document and convert it into a [`CustomCalendar`].
///
/// All problems are collected rather than stopping at the first one.
pub fn validate_custom_calendar(json: &Value) -> Result<CustomCalendar, ValidationErrors> {
    let Some(obj) = json.as_object() else {
        return Err(ValidationErrors(vec![FieldError::new(
            "root",
            "Invalid JSON object",
        )]));
    };

    let mut errors = Vec::new();

    validate_meta(obj.get("meta"), &mut errors);
    validate_rules(obj.get("rules"), &mut errors);

    match obj.get("holidays").and_then(Value::as_array) {
        Some(holidays) => {
            for (index, holiday) in holidays.iter().enumerate() {
                validate_holiday(index, holiday, &mut errors);
            }
        }
        None => errors.push(FieldError::new("holidays", "holidays array is required")),
    }

    if !errors.is_empty() {
        return Err(ValidationErrors(errors));
    }

    serde_json::from_value(json.clone())
        .map_err(|e| ValidationErrors(vec![FieldError::new("root", e.to_string())]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(result: Result<CustomCalendar, ValidationErrors>) -> Vec<String> {
        result
            .unwrap_err()
            .iter()
            .map(|e| e.field.clone())
            .collect()
    }

    #[test]
    fn test_valid_document() {
        let doc = json!({
            "meta": { "id": "acme", "name": "ACME", "defaultColor": "#7B61FF", "timezone": "UTC" },
            "rules": { "weekend": ["FRIDAY", "SATURDAY"] },
            "holidays": [
                { "date": "2026-07-15", "name": "Founders Day", "type": "COMPANY_HOLIDAY", "halfDay": true },
                { "date": "2026-12-31", "name": "Year end", "type": "OTHER", "notes": "Skeleton crew" }
            ]
        });

        let calendar = validate_custom_calendar(&doc).unwrap();
        assert_eq!(calendar.meta.id, "acme");
        assert_eq!(calendar.holidays.len(), 2);
        assert_eq!(calendar.holidays[0].half_day, Some(true));
        assert_eq!(calendar.holidays[0].kind, HolidayKind::CompanyHoliday);
    }

    #[test]
    fn test_root_must_be_object() {
        assert_eq!(fields(validate_custom_calendar(&json!([1, 2]))), vec!["root"]);
    }

    #[test]
    fn test_missing_sections() {
        assert_eq!(
            fields(validate_custom_calendar(&json!({}))),
            vec!["meta", "holidays"]
        );
    }

    #[test]
    fn test_meta_fields_are_checked() {
        let doc = json!({
            "meta": { "id": "  ", "name": 5 },
            "holidays": []
        });
        assert_eq!(
            fields(validate_custom_calendar(&doc)),
            vec!["meta.id", "meta.name", "meta.defaultColor"]
        );
    }

    #[test]
    fn test_every_holiday_error_is_collected() {
        let doc = json!({
            "meta": { "id": "x", "name": "X", "defaultColor": "#000000" },
            "holidays": [
                { "date": "2026-02-30", "name": "Bad day", "type": "PUBLIC_HOLIDAY" },
                { "date": "26-1-1", "name": "", "type": "HOLIDAY", "halfDay": "yes" },
                "not an object"
            ]
        });

        let errors = validate_custom_calendar(&doc).unwrap_err();
        let found: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            found,
            vec![
                "holidays[0].date",
                "holidays[1].date",
                "holidays[1].name",
                "holidays[1].type",
                "holidays[1].halfDay",
                "holidays[2]",
            ]
        );
        assert_eq!(errors.0[0].message, "Invalid date: 2026-02-30");
    }

    #[test]
    fn test_weekend_day_names_are_uppercase() {
        let doc = json!({
            "meta": { "id": "x", "name": "X", "defaultColor": "#000000" },
            "rules": { "weekend": ["Saturday", "SUNDAY"] },
            "holidays": []
        });
        let errors = validate_custom_calendar(&doc).unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert_eq!(errors.0[0].field, "rules.weekend");
        assert!(errors.0[0].message.starts_with("Invalid day name: \"Saturday\""));
    }

    #[test]
    fn test_weekend_must_be_array() {
        let doc = json!({
            "meta": { "id": "x", "name": "X", "defaultColor": "#000000" },
            "rules": { "weekend": "SATURDAY" },
            "holidays": []
        });
        assert_eq!(fields(validate_custom_calendar(&doc)), vec!["rules.weekend"]);
    }
}
