#![cfg(test)]
use migration::ResourceTable;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// A private in-memory SQLite database with no tables.
///
/// One pooled connection: every connection to `sqlite::memory:` would
/// otherwise see its own empty database.
pub async fn empty_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    Database::connect(opts).await.expect("connect sqlite")
}

/// In-memory database with every service table provisioned.
pub async fn get_db() -> DatabaseConnection {
    let db = empty_db().await;
    migration::ensure_tables(&db, &ResourceTable::ALL).await.expect("provision tables");
    db
}
