use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::fields::{double_option, reject_null, validate_optional_text, validate_text};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub customer_id: i32,
    #[sea_orm(unique)]
    pub email: String,
    /// Stored exactly as received; never returned to callers.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub shipping_address: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    validate_text("email", email, 255)?;
    if !email.contains('@') {
        return Err(ModelError::invalid("invalid email"));
    }
    Ok(())
}

pub fn validate_name(field: &str, name: &str) -> Result<(), ModelError> {
    validate_text(field, name, 255)
}

/// Body of `POST /customers/`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomer {
    pub email: String,
    #[serde(alias = "password_hash")]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub shipping_address: Option<String>,
}

impl CreateCustomer {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_email(&self.email)?;
        validate_text("password", &self.password, 255)?;
        validate_name("first_name", &self.first_name)?;
        validate_name("last_name", &self.last_name)?;
        validate_optional_text("phone_number", self.phone_number.as_deref(), 50)?;
        Ok(())
    }

    pub fn into_active_model(self, now: DateTimeWithTimeZone) -> ActiveModel {
        ActiveModel {
            email: Set(self.email),
            password_hash: Set(self.password),
            first_name: Set(self.first_name),
            last_name: Set(self.last_name),
            phone_number: Set(self.phone_number),
            shipping_address: Set(self.shipping_address),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }
}

/// Body of `PUT /customers/{id}`; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCustomer {
    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub last_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub shipping_address: Option<Option<String>>,
}

impl UpdateCustomer {
    pub fn validate(&self) -> Result<(), ModelError> {
        reject_null("email", &self.email)?;
        reject_null("first_name", &self.first_name)?;
        reject_null("last_name", &self.last_name)?;
        if let Some(Some(email)) = &self.email {
            validate_email(email)?;
        }
        if let Some(Some(name)) = &self.first_name {
            validate_name("first_name", name)?;
        }
        if let Some(Some(name)) = &self.last_name {
            validate_name("last_name", name)?;
        }
        if let Some(phone) = &self.phone_number {
            validate_optional_text("phone_number", phone.as_deref(), 50)?;
        }
        Ok(())
    }

    /// Copy the explicitly sent fields onto `am`. Call [`Self::validate`] first.
    pub fn apply(self, am: &mut ActiveModel) {
        if let Some(Some(email)) = self.email {
            am.email = Set(email);
        }
        if let Some(Some(first_name)) = self.first_name {
            am.first_name = Set(first_name);
        }
        if let Some(Some(last_name)) = self.last_name {
            am.last_name = Set(last_name);
        }
        if let Some(phone_number) = self.phone_number {
            am.phone_number = Set(phone_number);
        }
        if let Some(shipping_address) = self.shipping_address {
            am.shipping_address = Set(shipping_address);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> CreateCustomer {
        CreateCustomer {
            email: "ann@example.com".into(),
            password: "hash".into(),
            first_name: "Ann".into(),
            last_name: "Zuberi".into(),
            phone_number: None,
            shipping_address: None,
        }
    }

    #[test]
    fn create_validation() {
        assert!(input().validate().is_ok());
        let mut bad = input();
        bad.email = "not-an-email".into();
        assert_eq!(bad.validate(), Err(ModelError::invalid("invalid email")));
        let mut bad = input();
        bad.last_name = " ".into();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn password_alias_is_accepted() {
        let c: CreateCustomer = serde_json::from_value(serde_json::json!({
            "email": "a@x.com", "password_hash": "h", "first_name": "A", "last_name": "B"
        }))
        .unwrap();
        assert_eq!(c.password, "h");
    }

    #[test]
    fn update_rejects_null_on_required_field() {
        let patch: UpdateCustomer = serde_json::from_str(r#"{"email": null}"#).unwrap();
        assert!(patch.validate().is_err());
        let patch: UpdateCustomer = serde_json::from_str(r#"{"phone_number": null}"#).unwrap();
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn apply_touches_only_sent_fields() {
        let patch: UpdateCustomer = serde_json::from_str(r#"{"first_name": "X", "phone_number": null}"#).unwrap();
        let mut am = ActiveModel { ..Default::default() };
        patch.apply(&mut am);
        assert_eq!(am.first_name, Set("X".to_string()));
        assert_eq!(am.phone_number, Set(None));
        assert!(am.email.is_not_set());
        assert!(am.last_name.is_not_set());
        assert!(am.shipping_address.is_not_set());
    }

    #[test]
    fn password_hash_is_not_serialized() {
        let now = chrono::Utc::now().into();
        let model = Model {
            customer_id: 1,
            email: "a@x.com".into(),
            password_hash: "secret".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            phone_number: None,
            shipping_address: None,
            created_at: now,
            updated_at: now,
        };
        let v = serde_json::to_value(&model).unwrap();
        assert!(v.get("password_hash").is_none());
        assert_eq!(v["customer_id"], 1);
    }
}
