//! # Vendor Repository
//!
//! Read access to vendors, scoped by tenant and ordered by name.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::error::StoreError;
use crate::models::vendor::{Column, Entity as Vendor, Model as VendorModel};

/// Repository for vendor queries.
pub struct VendorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VendorRepository<'a> {
    /// Create a new repository borrowing the given connection.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List the vendors belonging to `tenant_id`, sorted by name.
    pub async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<VendorModel>, StoreError> {
        let vendors = Vendor::find()
            .filter(Column::TenantId.eq(tenant_id))
            .order_by_asc(Column::Name)
            .all(self.db)
            .await?;

        Ok(vendors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ActiveModelTrait, Database, Set};

    use crate::models::{tenant, vendor};

    async fn setup_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    async fn insert_vendor(db: &DatabaseConnection, id: &str, tenant_id: &str, name: &str) {
        vendor::ActiveModel {
            id: Set(id.to_string()),
            tenant_id: Set(tenant_id.to_string()),
            name: Set(name.to_string()),
            country_code: Set(Some("US".to_string())),
            created_at: Set(Utc::now().into()),
        }
        .insert(db)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn lists_vendors_sorted_and_scoped() {
        let db = setup_db().await;
        tenant::ActiveModel {
            id: Set("default".to_string()),
            name: Set("Default tenant".to_string()),
            created_at: Set(Utc::now().into()),
        }
        .insert(&db)
        .await
        .unwrap();

        insert_vendor(&db, "vendor-2", "default", "Zeta Cloud").await;
        insert_vendor(&db, "vendor-1", "default", "Acme Hosting").await;

        let repo = VendorRepository::new(&db);
        let rows = repo.list_by_tenant("default").await.unwrap();
        let names: Vec<&str> = rows.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Acme Hosting", "Zeta Cloud"]);

        assert!(repo.list_by_tenant("elsewhere").await.unwrap().is_empty());
    }
}
