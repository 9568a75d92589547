use common::ServiceKind;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String, pub service: String }

#[derive(ToSchema)]
pub struct WelcomeResponse { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub detail: String }

#[derive(ToSchema)]
pub struct CustomerDoc {
    pub customer_id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub shipping_address: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct CreateCustomerDoc {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub shipping_address: Option<String>,
}

/// Every field optional; `null` clears `phone_number` and `shipping_address`.
#[derive(ToSchema)]
pub struct UpdateCustomerDoc {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub shipping_address: Option<String>,
}

#[derive(ToSchema)]
pub struct OrderDoc {
    pub order_id: i32,
    pub customer_id: i32,
    pub total_amount: f64,
    pub status: String,
    pub shipping_address: Option<String>,
    pub created_at: String,
}

#[derive(ToSchema)]
pub struct CreateOrderDoc {
    pub customer_id: i32,
    pub total_amount: f64,
    /// Defaults to `pending`.
    pub status: Option<String>,
    pub shipping_address: Option<String>,
}

#[derive(ToSchema)]
pub struct ProductDoc {
    pub product_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock_quantity: i32,
    pub image_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct CreateProductDoc {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock_quantity: Option<i32>,
    pub image_url: Option<String>,
}

#[derive(ToSchema)]
pub struct UpdateProductDoc {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock_quantity: Option<i32>,
    pub image_url: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::root,
        crate::routes::customers::create,
        crate::routes::customers::list,
        crate::routes::customers::get_one,
        crate::routes::customers::update,
        crate::routes::customers::remove,
    ),
    components(schemas(HealthResponse, WelcomeResponse, ErrorDoc, CustomerDoc, CreateCustomerDoc, UpdateCustomerDoc)),
    tags((name = "meta"), (name = "customers"))
)]
pub struct CustomerApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::root,
        crate::routes::orders::create,
        crate::routes::orders::list,
        crate::routes::orders::get_one,
        crate::routes::orders::remove,
    ),
    components(schemas(HealthResponse, WelcomeResponse, ErrorDoc, OrderDoc, CreateOrderDoc)),
    tags((name = "meta"), (name = "orders"))
)]
pub struct OrderApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::root,
        crate::routes::products::create,
        crate::routes::products::list,
        crate::routes::products::get_one,
        crate::routes::products::update,
        crate::routes::products::remove,
    ),
    components(schemas(HealthResponse, WelcomeResponse, ErrorDoc, ProductDoc, CreateProductDoc, UpdateProductDoc)),
    tags((name = "meta"), (name = "products"))
)]
pub struct ProductApiDoc;

/// OpenAPI document served at `/openapi.json` by the `kind` service.
pub fn document(kind: ServiceKind) -> utoipa::openapi::OpenApi {
    let mut doc = match kind {
        ServiceKind::Customer => CustomerApiDoc::openapi(),
        ServiceKind::Order => OrderApiDoc::openapi(),
        ServiceKind::Product => ProductApiDoc::openapi(),
    };
    doc.info.title = format!("{} Service", kind.display_name());
    doc.info.version = env!("CARGO_PKG_VERSION").to_string();
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_document_has_no_put() {
        let doc = document(ServiceKind::Order);
        let item = doc.paths.paths.get("/orders/{order_id}").expect("order item path");
        assert!(item.operations.contains_key(&utoipa::openapi::PathItemType::Get));
        assert!(!item.operations.contains_key(&utoipa::openapi::PathItemType::Put));
    }

    #[test]
    fn each_service_documents_only_its_resource() {
        for kind in ServiceKind::ALL {
            let doc = document(kind);
            assert_eq!(doc.info.title, format!("{} Service", kind.display_name()));
            for path in doc.paths.paths.keys() {
                let own = path.starts_with(&format!("/{}", kind.resource()));
                assert!(own || path == "/" || path == "/health", "{path} leaked into {kind}");
            }
        }
    }
}
