use chrono::Utc;
use sea_orm::{
    prelude::DateTimeWithTimeZone,
    sea_query::{Expr, Func},
    ActiveModelTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use tracing::info;

use models::customer::{self, CreateCustomer, UpdateCustomer};
use crate::{errors::ServiceError, pagination::ListParams};

const ENTITY: &str = "Customer";
const CREATE_CONFLICT: &str = "Email already registered.";
const CREATE_FAILED: &str = "Could not create customer.";
const UPDATE_CONFLICT: &str = "Updated email already exists";
const UPDATE_FAILED: &str = "Could not update customer";
const DELETE_FAILED: &str = "Could not delete customer";
const READ_FAILED: &str = "Could not read customers";

/// CRUD over the `customers` table.
#[derive(Clone)]
pub struct CustomerService {
    db: DatabaseConnection,
}

impl CustomerService {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Insert a customer. A duplicate email is a `Conflict`.
    pub async fn create(&self, input: CreateCustomer) -> Result<customer::Model, ServiceError> {
        input.validate()?;
        let am = input.into_active_model(Utc::now().into());
        let created = self
            .db
            .transaction::<_, customer::Model, ServiceError>(|txn| {
                Box::pin(async move {
                    am.insert(txn).await.map_err(|e| ServiceError::from_db(e, Some(CREATE_CONFLICT), CREATE_FAILED))
                })
            })
            .await
            .map_err(|e| ServiceError::from_txn(e, Some(CREATE_CONFLICT), CREATE_FAILED))?;
        info!(customer_id = created.customer_id, "created customer");
        Ok(created)
    }

    /// List customers in id order. A non-empty `search` matches first name,
    /// last name or email as a case-insensitive substring.
    pub async fn list(&self, params: ListParams, search: Option<&str>) -> Result<Vec<customer::Model>, ServiceError> {
        params.validate()?;
        let mut finder = customer::Entity::find();
        if let Some(term) = search.filter(|s| !s.is_empty()) {
            // lower(col) LIKE %term%: case-insensitive on both Postgres and SQLite
            let pattern = format!("%{}%", term.to_lowercase());
            let ci_like = |col: customer::Column| Expr::expr(Func::lower(Expr::col(col))).like(pattern.as_str());
            finder = finder.filter(
                Condition::any()
                    .add(ci_like(customer::Column::FirstName))
                    .add(ci_like(customer::Column::LastName))
                    .add(ci_like(customer::Column::Email)),
            );
        }
        finder
            .order_by_asc(customer::Column::CustomerId)
            .offset(params.skip)
            .limit(params.limit)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::from_db(e, None, READ_FAILED))
    }

    pub async fn get(&self, id: i32) -> Result<customer::Model, ServiceError> {
        customer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::from_db(e, None, READ_FAILED))?
            .ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    /// Apply the fields present in `patch`; everything else is left as stored.
    pub async fn update(&self, id: i32, patch: UpdateCustomer) -> Result<customer::Model, ServiceError> {
        patch.validate()?;
        let now: DateTimeWithTimeZone = Utc::now().into();
        let updated = self
            .db
            .transaction::<_, customer::Model, ServiceError>(move |txn| {
                Box::pin(async move {
                    let mut am: customer::ActiveModel = customer::Entity::find_by_id(id)
                        .one(txn)
                        .await
                        .map_err(|e| ServiceError::from_db(e, None, UPDATE_FAILED))?
                        .ok_or_else(|| ServiceError::not_found(ENTITY))?
                        .into();
                    // only fields present in the body become Set; the rest stay Unchanged
                    patch.apply(&mut am);
                    am.updated_at = Set(now);
                    am.update(txn).await.map_err(|e| ServiceError::from_update(e, ENTITY, UPDATE_CONFLICT, UPDATE_FAILED))
                })
            })
            .await
            .map_err(|e| ServiceError::from_txn(e, Some(UPDATE_CONFLICT), UPDATE_FAILED))?;
        info!(customer_id = id, "updated customer");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.db
            .transaction::<_, (), ServiceError>(move |txn| {
                Box::pin(async move {
                    let res = customer::Entity::delete_by_id(id)
                        .exec(txn)
                        .await
                        .map_err(|e| ServiceError::from_db(e, None, DELETE_FAILED))?;
                    // nothing deleted means the id never existed (or is already gone)
                    if res.rows_affected == 0 {
                        return Err(ServiceError::not_found(ENTITY));
                    }
                    Ok(())
                })
            })
            .await
            .map_err(|e| ServiceError::from_txn(e, None, DELETE_FAILED))?;
        info!(customer_id = id, "deleted customer");
        Ok(())
    }
}
