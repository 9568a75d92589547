//! Offset pagination shared by the list endpoints.

use serde::Deserialize;

use crate::errors::ServiceError;

pub const DEFAULT_LIMIT: u64 = 100;
/// Largest `skip`/`limit` the SQL drivers can bind (a signed 64-bit integer).
pub const MAX_WINDOW: u64 = i64::MAX as u64;

/// `skip`/`limit` window over a table in primary-key order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 { DEFAULT_LIMIT }

impl ListParams {
    pub fn new(skip: Option<u64>, limit: Option<u64>) -> Self {
        Self { skip: skip.unwrap_or(0), limit: limit.unwrap_or(DEFAULT_LIMIT) }
    }

    /// Reject windows the database layer cannot bind; callers check this
    /// before building a query.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.skip > MAX_WINDOW {
            return Err(ServiceError::Validation(format!("skip must be at most {MAX_WINDOW}")));
        }
        if self.limit > MAX_WINDOW {
            return Err(ServiceError::Validation(format!("limit must be at most {MAX_WINDOW}")));
        }
        Ok(())
    }
}

impl Default for ListParams {
    fn default() -> Self { Self { skip: 0, limit: DEFAULT_LIMIT } }
}

#[cfg(test)]
mod tests {
    use super::{ListParams, MAX_WINDOW};
    use crate::errors::ServiceError;

    #[test]
    fn default_values_are_sane() {
        let d = ListParams::default();
        assert_eq!(d.skip, 0);
        assert_eq!(d.limit, 100);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let p: ListParams = serde_json::from_str(r#"{"skip": 5}"#).unwrap();
        assert_eq!(p, ListParams { skip: 5, limit: 100 });
        assert_eq!(ListParams::new(None, Some(2)), ListParams { skip: 0, limit: 2 });
    }

    #[test]
    fn windows_beyond_i64_are_rejected() {
        assert!(ListParams { skip: MAX_WINDOW, limit: MAX_WINDOW }.validate().is_ok());
        let err = ListParams { skip: 0, limit: MAX_WINDOW + 1 }.validate().unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m.starts_with("limit")));
        let err = ListParams { skip: u64::MAX, limit: 10 }.validate().unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m.starts_with("skip")));
    }
}
