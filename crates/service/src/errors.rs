use sea_orm::{DbErr, SqlErr, TransactionError};
use thiserror::Error;
use tracing::{error, warn};

/// Failures surfaced by the resource services.
///
/// `Conflict` and `Internal` carry the message shown to callers; the underlying
/// driver error is logged where it is classified and never leaves this crate.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(err: models::errors::ModelError) -> Self {
        match err {
            models::errors::ModelError::Validation(msg) => Self::Validation(msg),
        }
    }
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Classify a storage error. Unique-constraint violations become `Conflict`
    /// when the operation has a conflict message; everything else is `Internal`.
    pub fn from_db(err: DbErr, conflict: Option<&str>, internal: &str) -> Self {
        // sql_err() normalizes Postgres 23505 and SQLite 2067/1555 to one variant
        if let (Some(SqlErr::UniqueConstraintViolation(detail)), Some(msg)) = (err.sql_err(), conflict) {
            warn!(%detail, "unique constraint violated");
            return Self::Conflict(msg.to_string());
        }
        error!(error = %err, "storage operation failed");
        Self::Internal(internal.to_string())
    }

    /// Classify a failed `update`. The row vanishing after it was read (a
    /// concurrent delete) is `NotFound`, not a storage failure.
    pub fn from_update(err: DbErr, entity: &str, conflict: &str, internal: &str) -> Self {
        match err {
            DbErr::RecordNotUpdated => Self::not_found(entity),
            other => Self::from_db(other, Some(conflict), internal),
        }
    }

    /// Flatten the result of a closure transaction. Errors raised inside the
    /// closure pass through; begin/commit failures are classified like any
    /// other storage error.
    pub fn from_txn(err: TransactionError<ServiceError>, conflict: Option<&str>, internal: &str) -> Self {
        match err {
            TransactionError::Transaction(e) => e,
            TransactionError::Connection(e) => Self::from_db(e, conflict, internal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    #[test]
    fn non_constraint_errors_are_internal() {
        let err = ServiceError::from_db(DbErr::Custom("socket closed".into()), Some("dup"), "Could not create thing.");
        assert!(matches!(err, ServiceError::Internal(ref m) if m == "Could not create thing."));
    }

    #[test]
    fn internal_message_hides_driver_detail() {
        let err = ServiceError::from_db(DbErr::Conn(RuntimeErr::Internal("password auth failed for user x".into())), None, "Could not delete order");
        assert_eq!(err.to_string(), "Could not delete order");
    }

    #[test]
    fn record_not_updated_is_not_found() {
        let err = ServiceError::from_update(DbErr::RecordNotUpdated, "Product", "Product already exists", "Could not update product");
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Product not found"));
        let err = ServiceError::from_update(DbErr::Custom("disk I/O error".into()), "Product", "dup", "Could not update product");
        assert!(matches!(err, ServiceError::Internal(ref m) if m == "Could not update product"));
    }

    #[test]
    fn transaction_errors_pass_through() {
        let err = ServiceError::from_txn(TransactionError::Transaction(ServiceError::not_found("Customer")), None, "x");
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Customer not found"));
    }

    #[test]
    fn model_errors_become_validation() {
        let err: ServiceError = models::errors::ModelError::invalid("invalid email").into();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == "invalid email"));
    }
}
