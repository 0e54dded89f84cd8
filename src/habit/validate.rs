//! Validation for habit creation payloads.
//!
//! The create endpoint accepts an untyped JSON body so every violated field
//! can be reported in a single pass, rather than failing on the first
//! deserialization mismatch.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

use super::{Cadence, CreateHabit, TIMESTAMP_FORMAT};

/// Field-keyed validation failures, serialized as
/// `{"errors": {"<field>": "<message>"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    fn add(&mut self, field: &str, message: &str) {
        self.errors.insert(field.to_string(), message.to_string());
    }
}

/// Checks a candidate payload against the habit contract and either returns
/// the normalized creation value (defaults applied) or every violated field.
pub fn parse_create(payload: &Value) -> Result<CreateHabit, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let Some(body) = payload.as_object() else {
        errors.add("body", "request body must be a JSON object");
        return Err(errors);
    };

    let name = match body.get("name") {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                errors.add("name", "name must be a non-empty string");
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Some(_) => {
            errors.add("name", "name must be a non-empty string");
            None
        }
        None => {
            errors.add("name", "name is required");
            None
        }
    };

    let cadence = match body.get("cadence") {
        Some(Value::String(s)) => match Cadence::from_str(s) {
            Some(cadence) => Some(cadence),
            None => {
                errors.add("cadence", "cadence must be one of: daily, weekly");
                None
            }
        },
        Some(_) => {
            errors.add("cadence", "cadence must be one of: daily, weekly");
            None
        }
        None => Some(Cadence::Daily),
    };

    let target = match body.get("target") {
        Some(value) => match parse_target(value) {
            Some(target) => Some(target),
            None => {
                errors.add("target", "target must be a positive integer");
                None
            }
        },
        None => Some(1),
    };

    let start_date = match body.get("startDate") {
        Some(value) => match coerce_timestamp(value) {
            Some(ts) => Some(ts),
            None => {
                errors.add("startDate", "startDate must be a valid timestamp");
                None
            }
        },
        None => Some(Utc::now().format(TIMESTAMP_FORMAT).to_string()),
    };

    let notes = match body.get("notes") {
        Some(Value::String(s)) => Some(Some(s.clone())),
        Some(Value::Null) | None => Some(None),
        Some(_) => {
            errors.add("notes", "notes must be a string");
            None
        }
    };

    // Every None above recorded an error for its field.
    match (name, cadence, target, start_date, notes) {
        (Some(name), Some(cadence), Some(target), Some(start_date), Some(notes)) => {
            Ok(CreateHabit {
                name,
                cadence,
                target,
                start_date,
                notes,
            })
        }
        _ => Err(errors),
    }
}

fn parse_target(value: &Value) -> Option<i64> {
    let target = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    target.filter(|t| *t > 0)
}

/// Coerces a client-supplied start date to the canonical UTC layout.
/// Accepts RFC 3339, a plain `YYYY-MM-DD` date (midnight UTC), or epoch
/// milliseconds.
fn coerce_timestamp(value: &Value) -> Option<String> {
    let instant = match value {
        Value::String(s) => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                Some(dt.with_timezone(&Utc))
            } else {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|naive| naive.and_utc())
            }
        }
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    };

    instant.map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_payload_gets_defaults() {
        let habit = parse_create(&json!({ "name": "Read" })).unwrap();
        assert_eq!(habit.name, "Read");
        assert_eq!(habit.cadence, Cadence::Daily);
        assert_eq!(habit.target, 1);
        assert_eq!(habit.notes, None);
        assert!(!habit.start_date.is_empty());
    }

    #[test]
    fn name_is_required() {
        let errors = parse_create(&json!({})).unwrap_err();
        assert_eq!(errors.errors.get("name").unwrap(), "name is required");
    }

    #[test]
    fn empty_and_blank_names_rejected() {
        for name in ["", "   "] {
            let errors = parse_create(&json!({ "name": name })).unwrap_err();
            assert!(errors.errors.contains_key("name"));
        }
    }

    #[test]
    fn name_is_trimmed() {
        let habit = parse_create(&json!({ "name": "  Read  " })).unwrap();
        assert_eq!(habit.name, "Read");
    }

    #[test]
    fn cadence_outside_enum_rejected() {
        let errors = parse_create(&json!({ "name": "Gym", "cadence": "monthly" })).unwrap_err();
        assert!(errors.errors.contains_key("cadence"));
    }

    #[test]
    fn cadence_weekly_accepted() {
        let habit = parse_create(&json!({ "name": "Gym", "cadence": "weekly" })).unwrap();
        assert_eq!(habit.cadence, Cadence::Weekly);
    }

    #[test]
    fn target_must_be_a_positive_integer() {
        for target in [json!(0), json!(-2), json!(1.5), json!("abc"), json!(true)] {
            let errors =
                parse_create(&json!({ "name": "Gym", "target": target.clone() })).unwrap_err();
            assert!(errors.errors.contains_key("target"), "accepted {target}");
        }
    }

    #[test]
    fn numeric_string_target_parses() {
        let habit = parse_create(&json!({ "name": "Gym", "target": "3" })).unwrap();
        assert_eq!(habit.target, 3);
    }

    #[test]
    fn start_date_coercions() {
        let rfc3339 = parse_create(&json!({
            "name": "Read",
            "startDate": "2026-08-01T06:30:00.000Z"
        }))
        .unwrap();
        assert_eq!(rfc3339.start_date, "2026-08-01T06:30:00.000Z");

        let date_only = parse_create(&json!({ "name": "Read", "startDate": "2026-08-01" })).unwrap();
        assert_eq!(date_only.start_date, "2026-08-01T00:00:00.000Z");

        let epoch_millis = parse_create(&json!({ "name": "Read", "startDate": 1785542400000i64 }))
            .unwrap();
        assert_eq!(epoch_millis.start_date, "2026-08-01T00:00:00.000Z");
    }

    #[test]
    fn unparseable_start_date_rejected() {
        let errors =
            parse_create(&json!({ "name": "Read", "startDate": "next tuesday" })).unwrap_err();
        assert!(errors.errors.contains_key("startDate"));
    }

    #[test]
    fn all_violations_reported_in_one_pass() {
        let errors = parse_create(&json!({
            "name": "",
            "cadence": "monthly",
            "target": 0,
            "notes": 7
        }))
        .unwrap_err();

        let fields: Vec<&str> = errors.errors.keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["cadence", "name", "notes", "target"]);
    }

    #[test]
    fn non_object_body_rejected() {
        let errors = parse_create(&json!([1, 2, 3])).unwrap_err();
        assert!(errors.errors.contains_key("body"));
    }
}
