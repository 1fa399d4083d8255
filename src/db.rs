//! SQLite store lifecycle for the SIP API.
//!
//! The store is opened explicitly at startup and handed to the parts
//! that need it. Opening creates the data directory and database file
//! if missing, applies migrations, and verifies the connection with a
//! ping. There is no lazy global handle.

use std::fs;
use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

use crate::config::AppConfig;
use crate::error::StoreError;

/// Opens the SQLite store described by `cfg`.
///
/// Creates `cfg.data_dir` and the database file when absent, applies
/// pending migrations, and pings the connection. A location that cannot
/// be prepared or connected to is reported as
/// [`StoreError::StorageUnavailable`], which callers treat as fatal.
pub async fn open_store(cfg: &AppConfig) -> Result<DatabaseConnection, StoreError> {
    fs::create_dir_all(&cfg.data_dir).map_err(|err| StoreError::StorageUnavailable {
        path: cfg.data_dir.display().to_string(),
        message: err.to_string(),
    })?;

    let url = cfg.database_url();
    let mut opt = ConnectOptions::new(&url);
    opt.max_connections(cfg.db_max_connections)
        .acquire_timeout(Duration::from_millis(cfg.db_acquire_timeout_ms))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt)
        .await
        .map_err(|err| StoreError::StorageUnavailable {
            path: cfg.db_path().display().to_string(),
            message: err.to_string(),
        })?;

    Migrator::up(&db, None).await?;
    ping(&db).await?;

    log::info!("opened sqlite store at {}", cfg.db_path().display());
    Ok(db)
}

/// Closes the store, releasing the underlying pool.
pub async fn close_store(db: DatabaseConnection) -> Result<(), StoreError> {
    db.close().await?;
    log::info!("closed sqlite store");
    Ok(())
}

/// Verifies the connection is usable with a trivial query.
async fn ping(db: &DatabaseConnection) -> Result<(), StoreError> {
    let stmt = Statement::from_string(db.get_database_backend(), "SELECT 1".to_string());
    db.query_one(stmt).await?;
    Ok(())
}
