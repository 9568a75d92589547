use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, TransactionTrait};
use tracing::info;

use models::order::{self, CreateOrder};
use crate::{errors::ServiceError, pagination::ListParams};

const ENTITY: &str = "Order";
const CREATE_FAILED: &str = "Could not create order";
const DELETE_FAILED: &str = "Could not delete order";
const READ_FAILED: &str = "Could not read orders";

/// Create, read and delete over the `orders` table. Orders have no update.
#[derive(Clone)]
pub struct OrderService {
    db: DatabaseConnection,
}

impl OrderService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// `customer_id` is stored as given; the customer is not looked up.
    pub async fn create(&self, input: CreateOrder) -> Result<order::Model, ServiceError> {
        input.validate()?;
        let am = input.into_active_model(Utc::now().into());
        let created = self
            .db
            .transaction::<_, order::Model, ServiceError>(|txn| {
                Box::pin(async move { am.insert(txn).await.map_err(|e| ServiceError::from_db(e, None, CREATE_FAILED)) })
            })
            .await
            .map_err(|e| ServiceError::from_txn(e, None, CREATE_FAILED))?;
        info!(order_id = created.order_id, customer_id = created.customer_id, "created order");
        Ok(created)
    }

    pub async fn list(&self, params: ListParams) -> Result<Vec<order::Model>, ServiceError> {
        params.validate()?;
        order::Entity::find()
            .order_by_asc(order::Column::OrderId)
            .offset(params.skip)
            .limit(params.limit)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::from_db(e, None, READ_FAILED))
    }

    pub async fn get(&self, id: i32) -> Result<order::Model, ServiceError> {
        order::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::from_db(e, None, READ_FAILED))?
            .ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.db
            .transaction::<_, (), ServiceError>(move |txn| {
                Box::pin(async move {
                    let res = order::Entity::delete_by_id(id)
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
        info!(order_id = id, "deleted order");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn new_order(customer_id: i32, total: f64) -> CreateOrder {
        CreateOrder {
            customer_id,
            total_amount: total,
            status: order::DEFAULT_STATUS.to_string(),
            shipping_address: Some("221B Baker St".to_string()),
        }
    }

    #[tokio::test]
    async fn create_get_delete_cycle() -> Result<(), anyhow::Error> {
        let svc = OrderService::new(get_db().await);
        let created = svc.create(new_order(42, 99.5)).await?;
        assert_eq!(svc.get(created.order_id).await?, created);
        assert_eq!(created.status, "pending");

        svc.delete(created.order_id).await?;
        assert!(matches!(svc.get(created.order_id).await, Err(ServiceError::NotFound(ref m)) if m == "Order not found"));
        assert!(matches!(svc.delete(created.order_id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn customer_reference_is_not_validated() -> Result<(), anyhow::Error> {
        let svc = OrderService::new(get_db().await);
        let created = svc.create(new_order(999_999, 1.0)).await?;
        assert_eq!(created.customer_id, 999_999);
        Ok(())
    }

    #[tokio::test]
    async fn list_respects_window() -> Result<(), anyhow::Error> {
        let svc = OrderService::new(get_db().await);
        for i in 1..=5 {
            svc.create(new_order(i, f64::from(i) * 10.0)).await?;
        }
        let page = svc.list(ListParams { skip: 0, limit: 2 }).await?;
        assert_eq!(page.iter().map(|o| o.customer_id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(svc.list(ListParams::default()).await?.len(), 5);
        Ok(())
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let svc = OrderService::new(get_db().await);
        assert!(matches!(svc.get(999_999).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(999_999).await, Err(ServiceError::NotFound(_))));
    }
}
