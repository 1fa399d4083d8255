//! Organisation-vendor link entity model
//!
//! Join table for the many-to-many relationship between organisations and
//! vendors. The composite primary key allows at most one link per pair;
//! the seed procedure replaces the whole set on every run.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// A single organisation-to-vendor dependency link
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "organisation_vendors")]
pub struct Model {
    /// Organisation side of the link (composite primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub organisation_id: String,

    /// Vendor side of the link (composite primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub vendor_id: String,

    /// Optional free-text role label (e.g., "cloud", "identity")
    pub role: Option<String>,

    /// Timestamp when the link was inserted
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
