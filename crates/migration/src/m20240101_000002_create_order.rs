//! Create `orders` table.
//!
//! `customer_id` is a plain indexed column: the order service does not
//! own customers, so no foreign key is declared.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::OrderId))
                    .col(integer(Order::CustomerId).not_null())
                    .col(double(Order::TotalAmount).not_null())
                    .col(string_len(Order::Status, 50).not_null())
                    .col(text_null(Order::ShippingAddress))
                    .col(timestamp_with_time_zone(Order::CreatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_orders_customer")
                    .table(Order::Table)
                    .col(Order::CustomerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Order::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Order {
    #[sea_orm(iden = "orders")]
    Table,
    OrderId,
    CustomerId,
    TotalAmount,
    Status,
    ShippingAddress,
    CreatedAt,
}
