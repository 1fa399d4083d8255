//! Organisation entity model
//!
//! This module contains the SeaORM entity model for the organisations
//! table, the core unit of analysis. The three maturity scores are
//! independent, nullable, and conventionally on a 0-100 scale; they are
//! static seed values, never computed here.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Organisation entity, scoped to exactly one tenant
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "organisations")]
pub struct Model {
    /// Unique identifier for the organisation (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Owning tenant identifier (defaults to "default" at the schema level)
    pub tenant_id: String,

    /// Display name of the organisation
    pub name: String,

    /// Optional sector label (e.g., "Energy", "Finance")
    pub sector: Option<String>,

    /// Optional ISO-style country code (e.g., "GB")
    pub country_code: Option<String>,

    /// Sovereignty maturity score
    pub sovereignty_score: Option<f64>,

    /// Data maturity score
    pub data_maturity_score: Option<f64>,

    /// AI maturity score
    pub ai_maturity_score: Option<f64>,

    /// Timestamp when the organisation was first inserted
    pub created_at: DateTimeWithTimeZone,

    /// Timestamp refreshed on every upsert
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
