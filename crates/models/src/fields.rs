//! Field-level helpers shared by the entity input types.

use serde::{Deserialize, Deserializer};

use crate::errors::ModelError;

/// Deserialize a present field as `Some(value)`, keeping JSON `null` as `Some(None)`.
/// Use with `#[serde(default)]` so an absent field stays `None`.
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

pub fn validate_text(field: &str, value: &str, max_len: usize) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::invalid(format!("{field} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(ModelError::invalid(format!("{field} must be at most {max_len} characters")));
    }
    Ok(())
}

pub fn validate_optional_text(field: &str, value: Option<&str>, max_len: usize) -> Result<(), ModelError> {
    match value {
        Some(v) if v.chars().count() > max_len => {
            Err(ModelError::invalid(format!("{field} must be at most {max_len} characters")))
        }
        _ => Ok(()),
    }
}

pub fn validate_amount(field: &str, value: f64) -> Result<(), ModelError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ModelError::invalid(format!("{field} must be a non-negative number")));
    }
    Ok(())
}

/// A non-nullable column cannot be patched to `null`.
pub fn reject_null<T>(field: &str, value: &Option<Option<T>>) -> Result<(), ModelError> {
    if matches!(value, Some(None)) {
        return Err(ModelError::invalid(format!("{field} may not be null")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        phone: Option<Option<String>>,
    }

    #[test]
    fn distinguishes_absent_null_and_value() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"phone": null}"#).unwrap();
        let value: Patch = serde_json::from_str(r#"{"phone": "555"}"#).unwrap();
        assert_eq!(absent.phone, None);
        assert_eq!(null.phone, Some(None));
        assert_eq!(value.phone, Some(Some("555".to_string())));
    }

    #[test]
    fn text_rules() {
        assert!(validate_text("name", "  ", 10).is_err());
        assert!(validate_text("name", "abcdefghijk", 10).is_err());
        assert!(validate_text("name", "ok", 10).is_ok());
        assert!(validate_amount("price", -0.5).is_err());
        assert!(validate_amount("price", f64::NAN).is_err());
        assert!(reject_null::<String>("email", &Some(None)).is_err());
        assert!(reject_null::<String>("email", &None).is_ok());
    }
}
