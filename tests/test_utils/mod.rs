//! Test utilities for database testing.
//!
//! Provides in-memory and file-backed SQLite stores with migrations
//! applied, plus direct row helpers for fixtures.

use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;

use sip_api::config::AppConfig;
use sip_api::db::open_store;

/// Sets up an in-memory SQLite database with all migrations applied.
#[allow(dead_code)]
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Opens a file-backed store rooted under `dir`, exercising the real
/// open path (directory creation, migrations, ping).
#[allow(dead_code)]
pub async fn setup_file_store(dir: &Path) -> Result<DatabaseConnection> {
    let config = file_store_config(dir);
    let db = open_store(&config).await?;
    Ok(db)
}

/// Config pointing the store at `dir`.
#[allow(dead_code)]
pub fn file_store_config(dir: &Path) -> AppConfig {
    AppConfig {
        data_dir: dir.to_path_buf(),
        ..AppConfig::default()
    }
}

/// Counts rows in `table` with plain SQL, bypassing the entities.
#[allow(dead_code)]
pub async fn count_rows(db: &DatabaseConnection, table: &str) -> Result<i64> {
    let stmt = Statement::from_string(
        db.get_database_backend(),
        format!("SELECT COUNT(*) AS n FROM {table}"),
    );
    let row = db
        .query_one(stmt)
        .await?
        .ok_or_else(|| anyhow::anyhow!("count query returned no row"))?;
    Ok(row.try_get::<i64>("", "n")?)
}
