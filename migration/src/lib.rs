//! Database migrations for the SIP API.
//!
//! This module contains all database migrations using SeaORM Migration.
//! Every table and index is created with `if_not_exists`, so re-applying
//! the full set against an initialized database preserves existing data.

pub use sea_orm_migration::prelude::*;

mod m2026_07_01_000001_create_tenants;
mod m2026_07_01_000002_create_organisations;
mod m2026_07_01_000003_create_vendors;
mod m2026_07_01_000004_create_organisation_vendors;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2026_07_01_000001_create_tenants::Migration),
            Box::new(m2026_07_01_000002_create_organisations::Migration),
            Box::new(m2026_07_01_000003_create_vendors::Migration),
            Box::new(m2026_07_01_000004_create_organisation_vendors::Migration),
        ]
    }
}
