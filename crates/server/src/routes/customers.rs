use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use models::customer::{self, CreateCustomer, UpdateCustomer};
use serde::Deserialize;
use service::{pagination::ListParams, CustomerService};

use crate::errors::ApiError;
use crate::extract::{ValidJson, ValidPath, ValidQuery};

type CustomerState = Arc<CustomerService>;

/// `GET /customers/` query string.
#[derive(Debug, Default, Deserialize)]
pub struct CustomerQuery {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
}

pub fn router(svc: CustomerService) -> Router {
    Router::new()
        .route("/customers", get(list).post(create))
        .route("/customers/", get(list).post(create))
        .route("/customers/:customer_id", get(get_one).put(update).delete(remove))
        .with_state(Arc::new(svc))
}

#[utoipa::path(
    post, path = "/customers/", tag = "customers",
    request_body = crate::openapi::CreateCustomerDoc,
    responses(
        (status = 201, body = crate::openapi::CustomerDoc),
        (status = 400, description = "Email already registered.", body = crate::openapi::ErrorDoc),
        (status = 422, body = crate::openapi::ErrorDoc),
    )
)]
pub async fn create(
    State(svc): State<CustomerState>,
    ValidJson(input): ValidJson<CreateCustomer>,
) -> Result<(StatusCode, Json<customer::Model>), ApiError> {
    let created = svc.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/customers/", tag = "customers",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows, default 100"),
        ("search" = Option<String>, Query, description = "Case-insensitive match on first name, last name or email"),
    ),
    responses((status = 200, body = [crate::openapi::CustomerDoc]))
)]
pub async fn list(
    State(svc): State<CustomerState>,
    ValidQuery(q): ValidQuery<CustomerQuery>,
) -> Result<Json<Vec<customer::Model>>, ApiError> {
    let rows = svc.list(ListParams::new(q.skip, q.limit), q.search.as_deref()).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/customers/{customer_id}", tag = "customers",
    params(("customer_id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, body = crate::openapi::CustomerDoc),
        (status = 404, body = crate::openapi::ErrorDoc),
    )
)]
pub async fn get_one(
    State(svc): State<CustomerState>,
    ValidPath(id): ValidPath<i32>,
) -> Result<Json<customer::Model>, ApiError> {
    Ok(Json(svc.get(id).await?))
}

#[utoipa::path(
    put, path = "/customers/{customer_id}", tag = "customers",
    params(("customer_id" = i32, Path, description = "Customer ID")),
    request_body = crate::openapi::UpdateCustomerDoc,
    responses(
        (status = 200, body = crate::openapi::CustomerDoc),
        (status = 400, description = "Updated email already exists", body = crate::openapi::ErrorDoc),
        (status = 404, body = crate::openapi::ErrorDoc),
    )
)]
pub async fn update(
    State(svc): State<CustomerState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(patch): ValidJson<UpdateCustomer>,
) -> Result<Json<customer::Model>, ApiError> {
    Ok(Json(svc.update(id, patch).await?))
}

#[utoipa::path(
    delete, path = "/customers/{customer_id}", tag = "customers",
    params(("customer_id" = i32, Path, description = "Customer ID")),
    responses((status = 204, description = "Deleted"), (status = 404, body = crate::openapi::ErrorDoc))
)]
pub async fn remove(State(svc): State<CustomerState>, ValidPath(id): ValidPath<i32>) -> Result<StatusCode, ApiError> {
    svc.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
