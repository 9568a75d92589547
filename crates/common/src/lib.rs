use thiserror::Error;

pub mod types;
pub mod utils;

pub use types::ServiceKind;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown log format: {0}")]
    UnknownLogFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok(ServiceKind::Order);
        assert_eq!(h.status, "ok");
        assert_eq!(h.service, "order-service");
    }

    #[test]
    fn health_serializes_status_and_service() {
        let v = serde_json::to_value(types::Health::ok(ServiceKind::Customer)).unwrap();
        assert_eq!(v, serde_json::json!({"status": "ok", "service": "customer-service"}));
    }
}
