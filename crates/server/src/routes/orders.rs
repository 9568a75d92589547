use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use models::order::{self, CreateOrder};
use service::{pagination::ListParams, OrderService};

use crate::errors::ApiError;
use crate::extract::{ValidJson, ValidPath, ValidQuery};

type OrderState = Arc<OrderService>;

/// Orders are create/read/delete only; `PUT` on an order answers 405.
pub fn router(svc: OrderService) -> Router {
    Router::new()
        .route("/orders", get(list).post(create))
        .route("/orders/", get(list).post(create))
        .route("/orders/:order_id", get(get_one).delete(remove))
        .with_state(Arc::new(svc))
}

#[utoipa::path(
    post, path = "/orders/", tag = "orders",
    request_body = crate::openapi::CreateOrderDoc,
    responses((status = 201, body = crate::openapi::OrderDoc), (status = 422, body = crate::openapi::ErrorDoc))
)]
pub async fn create(
    State(svc): State<OrderState>,
    ValidJson(input): ValidJson<CreateOrder>,
) -> Result<(StatusCode, Json<order::Model>), ApiError> {
    let created = svc.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/orders/", tag = "orders",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows, default 100"),
    ),
    responses((status = 200, body = [crate::openapi::OrderDoc]))
)]
pub async fn list(
    State(svc): State<OrderState>,
    ValidQuery(params): ValidQuery<ListParams>,
) -> Result<Json<Vec<order::Model>>, ApiError> {
    Ok(Json(svc.list(params).await?))
}

#[utoipa::path(
    get, path = "/orders/{order_id}", tag = "orders",
    params(("order_id" = i32, Path, description = "Order ID")),
    responses((status = 200, body = crate::openapi::OrderDoc), (status = 404, body = crate::openapi::ErrorDoc))
)]
pub async fn get_one(State(svc): State<OrderState>, ValidPath(id): ValidPath<i32>) -> Result<Json<order::Model>, ApiError> {
    Ok(Json(svc.get(id).await?))
}

#[utoipa::path(
    delete, path = "/orders/{order_id}", tag = "orders",
    params(("order_id" = i32, Path, description = "Order ID")),
    responses((status = 204, description = "Deleted"), (status = 404, body = crate::openapi::ErrorDoc))
)]
pub async fn remove(State(svc): State<OrderState>, ValidPath(id): ValidPath<i32>) -> Result<StatusCode, ApiError> {
    svc.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
