//! # Organisation Repository
//!
//! Read access to organisations, scoped by tenant and ordered by name.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::error::StoreError;
use crate::models::organisation::{Column, Entity as Organisation, Model as OrganisationModel};

/// Repository for organisation queries.
pub struct OrganisationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrganisationRepository<'a> {
    /// Create a new repository borrowing the given connection.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List the organisations belonging to `tenant_id`, sorted by name.
    ///
    /// An unknown tenant yields an empty list rather than an error.
    pub async fn list_by_tenant(
        &self,
        tenant_id: &str,
    ) -> Result<Vec<OrganisationModel>, StoreError> {
        let organisations = Organisation::find()
            .filter(Column::TenantId.eq(tenant_id))
            .order_by_asc(Column::Name)
            .all(self.db)
            .await?;

        Ok(organisations)
    }
}
