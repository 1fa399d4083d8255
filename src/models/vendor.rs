//! Vendor entity model
//!
//! This module contains the SeaORM entity model for the vendors table,
//! external suppliers that organisations may depend on.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Vendor entity, scoped to exactly one tenant
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vendors")]
pub struct Model {
    /// Unique identifier for the vendor (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Owning tenant identifier (defaults to "default" at the schema level)
    pub tenant_id: String,

    /// Display name of the vendor
    pub name: String,

    /// Optional ISO-style country code (e.g., "US")
    pub country_code: Option<String>,

    /// Timestamp when the vendor was first inserted
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
