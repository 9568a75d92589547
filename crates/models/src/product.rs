use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::fields::{double_option, reject_null, validate_amount, validate_optional_text, validate_text};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub product_id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub price: f64,
    pub stock_quantity: i32,
    pub image_url: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    validate_text("name", name, 255)
}

pub fn validate_stock(stock: i32) -> Result<(), ModelError> {
    if stock < 0 {
        return Err(ModelError::invalid("stock_quantity must be >= 0"));
    }
    Ok(())
}

/// Body of `POST /products/`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub stock_quantity: i32,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CreateProduct {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_name(&self.name)?;
        validate_amount("price", self.price)?;
        validate_stock(self.stock_quantity)?;
        validate_optional_text("image_url", self.image_url.as_deref(), 512)?;
        Ok(())
    }

    pub fn into_active_model(self, now: DateTimeWithTimeZone) -> ActiveModel {
        ActiveModel {
            name: Set(self.name),
            description: Set(self.description),
            price: Set(self.price),
            stock_quantity: Set(self.stock_quantity),
            image_url: Set(self.image_url),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }
}

/// Body of `PUT /products/{id}`; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    #[serde(default, deserialize_with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub stock_quantity: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
}

impl UpdateProduct {
    pub fn validate(&self) -> Result<(), ModelError> {
        reject_null("name", &self.name)?;
        reject_null("price", &self.price)?;
        reject_null("stock_quantity", &self.stock_quantity)?;
        if let Some(Some(name)) = &self.name {
            validate_name(name)?;
        }
        if let Some(Some(price)) = self.price {
            validate_amount("price", price)?;
        }
        if let Some(Some(stock)) = self.stock_quantity {
            validate_stock(stock)?;
        }
        if let Some(url) = &self.image_url {
            validate_optional_text("image_url", url.as_deref(), 512)?;
        }
        Ok(())
    }

    /// Copy the explicitly sent fields onto `am`. Call [`Self::validate`] first.
    pub fn apply(self, am: &mut ActiveModel) {
        if let Some(Some(name)) = self.name {
            am.name = Set(name);
        }
        if let Some(description) = self.description {
            am.description = Set(description);
        }
        if let Some(Some(price)) = self.price {
            am.price = Set(price);
        }
        if let Some(Some(stock)) = self.stock_quantity {
            am.stock_quantity = Set(stock);
        }
        if let Some(image_url) = self.image_url {
            am.image_url = Set(image_url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults_stock_to_zero() {
        let p: CreateProduct = serde_json::from_str(r#"{"name": "Mug", "price": 4.5}"#).unwrap();
        assert_eq!(p.stock_quantity, 0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn update_validation() {
        let patch: UpdateProduct = serde_json::from_str(r#"{"price": null}"#).unwrap();
        assert!(patch.validate().is_err());
        let patch: UpdateProduct = serde_json::from_str(r#"{"stock_quantity": -3}"#).unwrap();
        assert!(patch.validate().is_err());
        let patch: UpdateProduct = serde_json::from_str(r#"{"description": null, "price": 2.0}"#).unwrap();
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn apply_clears_nullable_description() {
        let patch: UpdateProduct = serde_json::from_str(r#"{"description": null}"#).unwrap();
        let mut am = ActiveModel { ..Default::default() };
        patch.apply(&mut am);
        assert_eq!(am.description, Set(None));
        assert!(am.name.is_not_set());
        assert!(am.price.is_not_set());
    }
}
