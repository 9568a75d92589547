use axum::{extract::State, routing::get, Json, Router};
use common::types::{Health, Welcome};
use common::ServiceKind;
use sea_orm::DatabaseConnection;
use service::{CustomerService, OrderService, ProductService};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::openapi;

pub mod customers;
pub mod orders;
pub mod products;

#[utoipa::path(get, path = "/health", tag = "meta", responses((status = 200, body = crate::openapi::HealthResponse)))]
pub async fn health(State(kind): State<ServiceKind>) -> Json<Health> {
    Json(Health::ok(kind))
}

#[utoipa::path(get, path = "/", tag = "meta", responses((status = 200, body = crate::openapi::WelcomeResponse)))]
pub async fn root(State(kind): State<ServiceKind>) -> Json<Welcome> {
    Json(Welcome { message: kind.welcome_message() })
}

/// Build the router for the `kind` service: meta routes, its resource routes
/// and `/openapi.json`, wrapped in CORS and request tracing.
pub fn build_router(kind: ServiceKind, db: DatabaseConnection, cors: CorsLayer) -> Router {
    let meta = Router::new()
        .route("/health", get(health))
        .route("/", get(root))
        .route("/openapi.json", get(openapi_json))
        .with_state(kind);

    // each process serves exactly one resource over the shared connection pool
    let resource = match kind {
        ServiceKind::Customer => customers::router(CustomerService::new(db)),
        ServiceKind::Order => orders::router(OrderService::new(db)),
        ServiceKind::Product => products::router(ProductService::new(db)),
    };

    meta.merge(resource)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx responses are logged as failures
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

async fn openapi_json(State(kind): State<ServiceKind>) -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::document(kind))
}
