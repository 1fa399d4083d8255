//! Integration tests for the explicit store lifecycle.

use anyhow::Result;
use std::fs;

use sip_api::db::{close_store, open_store};
use sip_api::error::StoreError;
use sip_api::seeds::seed_reference_data;

#[path = "test_utils/mod.rs"]
mod test_utils;

#[tokio::test]
async fn opening_creates_directory_and_database_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let data_dir = dir.path().join("nested").join("data");
    let config = test_utils::file_store_config(&data_dir);

    let db = open_store(&config).await?;

    assert!(data_dir.is_dir());
    assert!(data_dir.join("sip.db").is_file());
    // Schema is in place straight away.
    assert_eq!(test_utils::count_rows(&db, "organisations").await?, 0);

    close_store(db).await?;
    Ok(())
}

#[tokio::test]
async fn reopening_preserves_rows() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = test_utils::file_store_config(dir.path());

    let db = open_store(&config).await?;
    seed_reference_data(&db).await?;
    close_store(db).await?;

    // Opening again re-applies migrations against populated tables.
    let db = open_store(&config).await?;
    assert_eq!(test_utils::count_rows(&db, "organisations").await?, 5);
    assert_eq!(test_utils::count_rows(&db, "vendors").await?, 5);
    assert_eq!(test_utils::count_rows(&db, "organisation_vendors").await?, 9);

    close_store(db).await?;
    Ok(())
}

#[tokio::test]
async fn an_unusable_location_reports_storage_unavailable() -> Result<()> {
    let dir = tempfile::tempdir()?;

    // A plain file where the data directory should go.
    let blocked = dir.path().join("blocked");
    fs::write(&blocked, b"not a directory")?;

    let config = test_utils::file_store_config(&blocked);
    let err = open_store(&config).await.unwrap_err();

    assert!(matches!(err, StoreError::StorageUnavailable { .. }));
    Ok(())
}

#[tokio::test]
async fn a_closed_store_rejects_further_work() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let db = test_utils::setup_file_store(dir.path()).await?;

    close_store(db.clone()).await?;

    // The transaction cannot even begin on the closed pool; that is
    // still reported as a seed failure.
    let err = seed_reference_data(&db).await.unwrap_err();
    assert!(matches!(err, StoreError::SeedFailed { .. }));
    Ok(())
}
