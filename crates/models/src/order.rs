use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::fields::{validate_amount, validate_text};

pub const DEFAULT_STATUS: &str = "pending";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub order_id: i32,
    pub customer_id: i32,
    pub total_amount: f64,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub shipping_address: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn default_status() -> String { DEFAULT_STATUS.to_string() }

/// Body of `POST /orders/`. Orders are immutable once placed.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub customer_id: i32,
    pub total_amount: f64,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub shipping_address: Option<String>,
}

impl CreateOrder {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.customer_id <= 0 {
            return Err(ModelError::invalid("customer_id must be positive"));
        }
        validate_amount("total_amount", self.total_amount)?;
        validate_text("status", &self.status, 50)?;
        Ok(())
    }

    pub fn into_active_model(self, now: DateTimeWithTimeZone) -> ActiveModel {
        ActiveModel {
            customer_id: Set(self.customer_id),
            total_amount: Set(self.total_amount),
            status: Set(self.status),
            shipping_address: Set(self.shipping_address),
            created_at: Set(now),
            ..Default::default()
        }
    }
}
