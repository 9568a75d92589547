use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use models::product::{self, CreateProduct, UpdateProduct};
use service::{pagination::ListParams, ProductService};

use crate::errors::ApiError;
use crate::extract::{ValidJson, ValidPath, ValidQuery};

type ProductState = Arc<ProductService>;

pub fn router(svc: ProductService) -> Router {
    Router::new()
        .route("/products", get(list).post(create))
        .route("/products/", get(list).post(create))
        .route("/products/:product_id", get(get_one).put(update).delete(remove))
        .with_state(Arc::new(svc))
}

#[utoipa::path(
    post, path = "/products/", tag = "products",
    request_body = crate::openapi::CreateProductDoc,
    responses(
        (status = 201, body = crate::openapi::ProductDoc),
        (status = 400, description = "Product already exists", body = crate::openapi::ErrorDoc),
        (status = 422, body = crate::openapi::ErrorDoc),
    )
)]
pub async fn create(
    State(svc): State<ProductState>,
    ValidJson(input): ValidJson<CreateProduct>,
) -> Result<(StatusCode, Json<product::Model>), ApiError> {
    let created = svc.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/products/", tag = "products",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows, default 100"),
    ),
    responses((status = 200, body = [crate::openapi::ProductDoc]))
)]
pub async fn list(
    State(svc): State<ProductState>,
    ValidQuery(params): ValidQuery<ListParams>,
) -> Result<Json<Vec<product::Model>>, ApiError> {
    Ok(Json(svc.list(params).await?))
}

#[utoipa::path(
    get, path = "/products/{product_id}", tag = "products",
    params(("product_id" = i32, Path, description = "Product ID")),
    responses((status = 200, body = crate::openapi::ProductDoc), (status = 404, body = crate::openapi::ErrorDoc))
)]
pub async fn get_one(State(svc): State<ProductState>, ValidPath(id): ValidPath<i32>) -> Result<Json<product::Model>, ApiError> {
    Ok(Json(svc.get(id).await?))
}

#[utoipa::path(
    put, path = "/products/{product_id}", tag = "products",
    params(("product_id" = i32, Path, description = "Product ID")),
    request_body = crate::openapi::UpdateProductDoc,
    responses(
        (status = 200, body = crate::openapi::ProductDoc),
        (status = 400, description = "Product already exists", body = crate::openapi::ErrorDoc),
        (status = 404, body = crate::openapi::ErrorDoc),
    )
)]
pub async fn update(
    State(svc): State<ProductState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(patch): ValidJson<UpdateProduct>,
) -> Result<Json<product::Model>, ApiError> {
    Ok(Json(svc.update(id, patch).await?))
}

#[utoipa::path(
    delete, path = "/products/{product_id}", tag = "products",
    params(("product_id" = i32, Path, description = "Product ID")),
    responses((status = 204, description = "Deleted"), (status = 404, body = crate::openapi::ErrorDoc))
)]
pub async fn remove(State(svc): State<ProductState>, ValidPath(id): ValidPath<i32>) -> Result<StatusCode, ApiError> {
    svc.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
