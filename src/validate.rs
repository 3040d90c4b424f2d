//! Pure payload validation
//!
//! Validation is a typed result returned synchronously, decoupled from the
//! transport layer: handlers decide how a `ValidationError` maps to a
//! response.

use serde_json::Value;
use thiserror::Error;

/// Validation failure kinds, with user-facing messages
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Payload is not a JSON object, or is an empty object
    #[error("Invalid JSON payload")]
    NotAnObject,

    /// One or more required keys are absent
    #[error("Missing keys: {0}")]
    MissingKeys(String),

    /// A required value is empty or not a string
    #[error("All fields must be non-empty strings")]
    EmptyOrNonString,
}

/// Check that `payload` is a non-empty JSON object in which every key in
/// `required_keys` is present and holds a non-empty string.
///
/// No type coercion is performed: an integer value for a required key fails
/// validation even if its text form would be acceptable.
pub fn validate_payload(payload: &Value, required_keys: &[&str]) -> Result<(), ValidationError> {
    let obj = match payload.as_object() {
        Some(obj) if !obj.is_empty() => obj,
        _ => return Err(ValidationError::NotAnObject),
    };

    let missing: Vec<&str> = required_keys
        .iter()
        .copied()
        .filter(|key| !obj.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingKeys(missing.join(", ")));
    }

    for key in required_keys {
        match obj.get(*key) {
            Some(Value::String(s)) if !s.is_empty() => {}
            _ => return Err(ValidationError::EmptyOrNonString),
        }
    }

    Ok(())
}

/// Extract a string field from a validated payload.
///
/// Absent or non-string values fall back to the empty string, which is the
/// create path's default for optional fields.
pub fn string_field(payload: &Value, key: &str) -> String {
    payload
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CREATE_KEYS: &[&str] = &["first_name", "birth_year"];
    const UPDATE_KEYS: &[&str] = &["user_id", "first_name", "last_name", "birth_year"];

    #[test]
    fn accepts_complete_payload() {
        let payload = json!({"first_name": "Alan", "birth_year": "1912"});
        assert_eq!(validate_payload(&payload, CREATE_KEYS), Ok(()));
    }

    #[test]
    fn rejects_non_object() {
        assert_eq!(
            validate_payload(&json!([1, 2, 3]), CREATE_KEYS),
            Err(ValidationError::NotAnObject)
        );
        assert_eq!(
            validate_payload(&json!(null), CREATE_KEYS),
            Err(ValidationError::NotAnObject)
        );
        assert_eq!(
            validate_payload(&json!({}), CREATE_KEYS),
            Err(ValidationError::NotAnObject)
        );
    }

    #[test]
    fn reports_missing_keys_in_required_order() {
        let payload = json!({"last_name": "Turing"});
        assert_eq!(
            validate_payload(&payload, UPDATE_KEYS),
            Err(ValidationError::MissingKeys(
                "user_id, first_name, birth_year".to_string()
            ))
        );
    }

    #[test]
    fn rejects_empty_string_value() {
        let payload = json!({"first_name": "", "birth_year": "1912"});
        assert_eq!(
            validate_payload(&payload, CREATE_KEYS),
            Err(ValidationError::EmptyOrNonString)
        );
    }

    #[test]
    fn rejects_non_string_value() {
        let payload = json!({"first_name": "Alan", "birth_year": 1912});
        assert_eq!(
            validate_payload(&payload, CREATE_KEYS),
            Err(ValidationError::EmptyOrNonString)
        );
    }

    #[test]
    fn optional_fields_are_not_checked() {
        // last_name is absent but not required on create
        let payload = json!({"first_name": "Alan", "birth_year": "1912"});
        assert_eq!(validate_payload(&payload, CREATE_KEYS), Ok(()));
        assert_eq!(string_field(&payload, "last_name"), "");
    }

    #[test]
    fn string_field_reads_present_values() {
        let payload = json!({"first_name": "Alan"});
        assert_eq!(string_field(&payload, "first_name"), "Alan");
    }
}
