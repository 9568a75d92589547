//! Create `customers` table.
//!
//! Email carries a unique constraint; duplicate inserts surface as
//! unique-constraint violations to the service layer.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(pk_auto(Customer::CustomerId))
                    .col(string_len(Customer::Email, 255).unique_key().not_null())
                    .col(string_len(Customer::PasswordHash, 255).not_null())
                    .col(string_len(Customer::FirstName, 255).not_null())
                    .col(string_len(Customer::LastName, 255).not_null())
                    .col(string_len_null(Customer::PhoneNumber, 50))
                    .col(text_null(Customer::ShippingAddress))
                    .col(timestamp_with_time_zone(Customer::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Customer::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Customer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Customer {
    #[sea_orm(iden = "customers")]
    Table,
    CustomerId,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    PhoneNumber,
    ShippingAddress,
    CreatedAt,
    UpdatedAt,
}
