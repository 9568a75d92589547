//! Service layer: one resource service per table, built around an injected
//! `DatabaseConnection`.
//! - Mutations run inside a scoped transaction (commit on success, rollback otherwise).
//! - Storage failures are classified into `ServiceError` variants; driver
//!   messages are logged, not returned.
//! - `schema` provisions tables at startup, outside the request path.

pub mod errors;
pub mod pagination;
pub mod schema;
pub mod customer_service;
pub mod order_service;
pub mod product_service;
#[cfg(test)]
pub mod test_support;

pub use customer_service::CustomerService;
pub use order_service::OrderService;
pub use product_service::ProductService;
