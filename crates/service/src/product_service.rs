use chrono::Utc;
use sea_orm::{
    prelude::DateTimeWithTimeZone, ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use tracing::info;

use models::product::{self, CreateProduct, UpdateProduct};
use crate::{errors::ServiceError, pagination::ListParams};

const ENTITY: &str = "Product";
const CONFLICT: &str = "Product already exists";
const CREATE_FAILED: &str = "Could not create product";
const UPDATE_FAILED: &str = "Could not update product";
const DELETE_FAILED: &str = "Could not delete product";
const READ_FAILED: &str = "Could not read products";

/// CRUD over the `products` table.
#[derive(Clone)]
pub struct ProductService {
    db: DatabaseConnection,
}

impl ProductService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Insert a product. A duplicate name is a `Conflict`.
    pub async fn create(&self, input: CreateProduct) -> Result<product::Model, ServiceError> {
        input.validate()?;
        let am = input.into_active_model(Utc::now().into());
        let created = self
            .db
            .transaction::<_, product::Model, ServiceError>(|txn| {
                Box::pin(async move {
                    am.insert(txn).await.map_err(|e| ServiceError::from_db(e, Some(CONFLICT), CREATE_FAILED))
                })
            })
            .await
            .map_err(|e| ServiceError::from_txn(e, Some(CONFLICT), CREATE_FAILED))?;
        info!(product_id = created.product_id, name = %created.name, "created product");
        Ok(created)
    }

    pub async fn list(&self, params: ListParams) -> Result<Vec<product::Model>, ServiceError> {
        params.validate()?;
        product::Entity::find()
            .order_by_asc(product::Column::ProductId)
            .offset(params.skip)
            .limit(params.limit)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::from_db(e, None, READ_FAILED))
    }

    pub async fn get(&self, id: i32) -> Result<product::Model, ServiceError> {
        product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::from_db(e, None, READ_FAILED))?
            .ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    /// Apply the fields present in `patch`; renaming onto an existing name is a `Conflict`.
    pub async fn update(&self, id: i32, patch: UpdateProduct) -> Result<product::Model, ServiceError> {
        patch.validate()?;
        let now: DateTimeWithTimeZone = Utc::now().into();
        let updated = self
            .db
            .transaction::<_, product::Model, ServiceError>(move |txn| {
                Box::pin(async move {
                    let mut am: product::ActiveModel = product::Entity::find_by_id(id)
                        .one(txn)
                        .await
                        .map_err(|e| ServiceError::from_db(e, None, UPDATE_FAILED))?
                        .ok_or_else(|| ServiceError::not_found(ENTITY))?
                        .into();
                    patch.apply(&mut am);
                    am.updated_at = Set(now);
                    am.update(txn).await.map_err(|e| ServiceError::from_update(e, ENTITY, CONFLICT, UPDATE_FAILED))
                })
            })
            .await
            .map_err(|e| ServiceError::from_txn(e, Some(CONFLICT), UPDATE_FAILED))?;
        info!(product_id = id, "updated product");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.db
            .transaction::<_, (), ServiceError>(move |txn| {
                Box::pin(async move {
                    let res = product::Entity::delete_by_id(id)
                        .exec(txn)
                        .await
                        .map_err(|e| ServiceError::from_db(e, None, DELETE_FAILED))?;
                    if res.rows_affected == 0 {
                        return Err(ServiceError::not_found(ENTITY));
                    }
                    Ok(())
                })
            })
            .await
            .map_err(|e| ServiceError::from_txn(e, None, DELETE_FAILED))?;
        info!(product_id = id, "deleted product");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use sea_orm::ConnectionTrait;

    fn new_product(name: &str, price: f64) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            description: Some("stoneware".to_string()),
            price,
            stock_quantity: 12,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn product_crud_service() -> Result<(), anyhow::Error> {
        let svc = ProductService::new(get_db().await);

        let created = svc.create(new_product("Mug", 9.5)).await?;
        assert_eq!(svc.get(created.product_id).await?, created);

        let patch: UpdateProduct = serde_json::from_str(r#"{"stock_quantity": 3}"#)?;
        let updated = svc.update(created.product_id, patch).await?;
        assert_eq!(updated.stock_quantity, 3);
        assert_eq!(updated.name, "Mug");
        assert_eq!(updated.price, 9.5);
        assert_eq!(updated.description, created.description);

        svc.delete(created.product_id).await?;
        assert!(matches!(svc.get(created.product_id).await, Err(ServiceError::NotFound(ref m)) if m == "Product not found"));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_name_is_conflict() -> Result<(), anyhow::Error> {
        let svc = ProductService::new(get_db().await);
        let mug = svc.create(new_product("Mug", 9.5)).await?;
        let err = svc.create(new_product("Mug", 1.0)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(ref m) if m == "Product already exists"));

        let plate = svc.create(new_product("Plate", 12.0)).await?;
        let patch: UpdateProduct = serde_json::from_str(r#"{"name": "Mug"}"#)?;
        let err = svc.update(plate.product_id, patch).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        let all = svc.list(ListParams::default()).await?;
        assert_eq!(all.iter().map(|p| p.product_id).collect::<Vec<_>>(), vec![mug.product_id, plate.product_id]);
        assert_eq!(all[1].name, "Plate");
        Ok(())
    }

    #[tokio::test]
    async fn missing_id_is_not_found_for_every_operation() {
        let svc = ProductService::new(get_db().await);
        assert!(matches!(svc.get(999_999).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.update(999_999, UpdateProduct::default()).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(999_999).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn negative_price_is_validation_error() {
        let svc = ProductService::new(get_db().await);
        let err = svc.create(new_product("Bowl", -1.0)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn row_vanishing_during_update_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await;
        let svc = ProductService::new(db.clone());
        let mug = svc.create(new_product("Mug", 9.5)).await?;
        db.execute_unprepared("CREATE TRIGGER skip_updates BEFORE UPDATE ON products BEGIN SELECT RAISE(IGNORE); END;")
            .await?;

        let patch: UpdateProduct = serde_json::from_str(r#"{"price": 11.0}"#)?;
        let err = svc.update(mug.product_id, patch).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Product not found"));
        Ok(())
    }

    #[tokio::test]
    async fn oversized_window_is_validation_error() {
        let svc = ProductService::new(get_db().await);
        let err = svc.list(ListParams { skip: 0, limit: u64::MAX }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
