//! Boundary validation for booking payloads.
//!
//! Handlers receive raw JSON and run it through these checks before the
//! store sees it, so schema failures become field-level 400 responses
//! instead of deserializer rejections.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::booking::{BookingInput, BookingStatus, BookingUpdate};
use crate::errors::{FieldErrors, ModelError};

#[derive(Clone, Copy)]
enum Kind {
    Text,
    Integer,
    Status,
}

const FIELDS: [(&str, Kind); 5] = [
    ("customer_name", Kind::Text),
    ("pickup", Kind::Text),
    ("destination", Kind::Text),
    ("fare", Kind::Integer),
    ("status", Kind::Status),
];

/// Validate a create payload: all five fields present and well-typed.
pub fn validate_input(payload: &Value) -> Result<BookingInput, ModelError> {
    check(payload, true)
}

/// Validate an update payload: any subset of fields, `null` meaning "not supplied".
pub fn validate_update(payload: &Value) -> Result<BookingUpdate, ModelError> {
    check(payload, false)
}

fn check<T: DeserializeOwned>(payload: &Value, required: bool) -> Result<T, ModelError> {
    let obj = as_object(payload)?;
    let mut errors = FieldErrors::new();
    for (name, kind) in FIELDS {
        match obj.get(name) {
            None | Some(Value::Null) => {
                if required {
                    errors.insert(name.to_string(), format!("'{name}' is a required property"));
                }
            }
            Some(value) => {
                if let Some(msg) = check_kind(value, kind) {
                    errors.insert(name.to_string(), msg);
                }
            }
        }
    }
    if !errors.is_empty() {
        return Err(ModelError::validation(errors));
    }
    serde_json::from_value(payload.clone()).map_err(|e| {
        let mut errors = FieldErrors::new();
        errors.insert("payload".into(), e.to_string());
        ModelError::validation(errors)
    })
}

fn as_object(payload: &Value) -> Result<&Map<String, Value>, ModelError> {
    payload.as_object().ok_or_else(|| {
        let mut errors = FieldErrors::new();
        errors.insert("payload".into(), "payload must be a JSON object".into());
        ModelError::validation(errors)
    })
}

fn check_kind(value: &Value, kind: Kind) -> Option<String> {
    match kind {
        Kind::Text if !value.is_string() => Some(format!("{value} is not of type 'string'")),
        Kind::Integer if value.as_i64().is_none() => Some(format!("{value} is not of type 'integer'")),
        Kind::Status => match value.as_str().and_then(BookingStatus::parse) {
            Some(_) => None,
            None => {
                let allowed: Vec<&str> = BookingStatus::ALL.iter().map(|s| s.as_str()).collect();
                Some(format!("{value} is not one of {allowed:?}"))
            }
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn complete_input_passes() {
        let input = validate_input(&json!({
            "customer_name": "A",
            "pickup": "X",
            "destination": "Y",
            "fare": 1000,
            "status": "pending"
        }))
        .unwrap();
        assert_eq!(input.fare, 1000);
        assert_eq!(input.status, BookingStatus::Pending);
    }

    #[test]
    fn missing_fields_are_reported_individually() {
        let err = validate_input(&json!({"customer_name": "A", "fare": 10})).unwrap_err();
        let errors = err.field_errors();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key("pickup"));
        assert!(errors.contains_key("destination"));
        assert!(errors.contains_key("status"));
    }

    #[test]
    fn wrong_types_and_enum_values_are_rejected() {
        let err = validate_input(&json!({
            "customer_name": 7,
            "pickup": "X",
            "destination": "Y",
            "fare": "cheap",
            "status": "lost"
        }))
        .unwrap_err();
        let errors = err.field_errors();
        assert!(errors["customer_name"].contains("string"));
        assert!(errors["fare"].contains("integer"));
        assert!(errors["status"].contains("pending"));
    }

    #[test]
    fn fractional_fare_is_not_an_integer() {
        let err = validate_update(&json!({"fare": 10.5})).unwrap_err();
        assert!(err.field_errors().contains_key("fare"));
    }

    #[test]
    fn update_accepts_any_subset_and_nulls() {
        let upd = validate_update(&json!({"status": "completed", "pickup": null})).unwrap();
        assert_eq!(upd.status, Some(BookingStatus::Completed));
        assert_eq!(upd.pickup, None);
        assert_eq!(validate_update(&json!({})).unwrap(), BookingUpdate::default());
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(validate_input(&json!([1, 2])).is_err());
        assert!(validate_update(&json!("status")).is_err());
    }
}
