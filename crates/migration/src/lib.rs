//! Migrator registering one migration per service table.
//!
//! Every migration creates its table with `IF NOT EXISTS`, so a service can
//! also provision just its own table through [`ensure_tables`] without going
//! through the `seaql_migrations` bookkeeping table.
pub use sea_orm_migration::prelude::*;

use sea_orm_migration::sea_orm::DatabaseConnection;

mod m20240101_000001_create_customer;
mod m20240101_000002_create_order;
mod m20240101_000003_create_product;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        ResourceTable::ALL.iter().map(|t| t.migration()).collect()
    }
}

/// Tables owned by the individual services.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceTable {
    Customers,
    Orders,
    Products,
}

impl ResourceTable {
    pub const ALL: [ResourceTable; 3] = [ResourceTable::Customers, ResourceTable::Orders, ResourceTable::Products];

    pub fn name(self) -> &'static str {
        match self {
            ResourceTable::Customers => "customers",
            ResourceTable::Orders => "orders",
            ResourceTable::Products => "products",
        }
    }

    fn migration(self) -> Box<dyn MigrationTrait> {
        match self {
            ResourceTable::Customers => Box::new(m20240101_000001_create_customer::Migration),
            ResourceTable::Orders => Box::new(m20240101_000002_create_order::Migration),
            ResourceTable::Products => Box::new(m20240101_000003_create_product::Migration),
        }
    }
}

/// Create the given tables (and their indexes) if they are missing.
pub async fn ensure_tables(db: &DatabaseConnection, tables: &[ResourceTable]) -> Result<(), DbErr> {
    let manager = SchemaManager::new(db);
    for table in tables {
        table.migration().up(&manager).await?;
    }
    Ok(())
}
