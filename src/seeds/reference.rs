//! Reference dataset seeding
//!
//! Seeds the store with the fixed demo dataset of organisations,
//! vendors, and the links between them. Seeding is transactional and
//! idempotent: organisations and vendors are upserted in place, links
//! are replaced wholesale, and any failure rolls the whole run back.

use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, Set, TransactionTrait,
};

use crate::error::StoreError;
use crate::models::{organisation, organisation_vendor, tenant, vendor};
use crate::models::{Organisation, OrganisationVendor, Tenant, Vendor};

/// Tenant that owns the reference dataset.
pub const DEFAULT_TENANT: &str = "default";

/// A dataset to seed: one tenant plus its organisations, vendors, and links.
#[derive(Debug, Clone)]
pub struct SeedDataset {
    pub tenant_id: String,
    pub tenant_name: String,
    pub organisations: Vec<OrganisationSeed>,
    pub vendors: Vec<VendorSeed>,
    pub links: Vec<LinkSeed>,
}

#[derive(Debug, Clone)]
pub struct OrganisationSeed {
    pub id: String,
    pub name: String,
    pub sector: String,
    pub country_code: String,
    pub sovereignty_score: f64,
    pub data_maturity_score: f64,
    pub ai_maturity_score: f64,
}

#[derive(Debug, Clone)]
pub struct VendorSeed {
    pub id: String,
    pub name: String,
    pub country_code: String,
}

#[derive(Debug, Clone)]
pub struct LinkSeed {
    pub organisation_id: String,
    pub vendor_id: String,
    pub role: String,
}

/// Row counts written by a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub organisations: usize,
    pub vendors: usize,
    pub links: usize,
}

fn org(
    id: &str,
    name: &str,
    sector: &str,
    sovereignty: f64,
    data_maturity: f64,
    ai_maturity: f64,
) -> OrganisationSeed {
    OrganisationSeed {
        id: id.to_string(),
        name: name.to_string(),
        sector: sector.to_string(),
        country_code: "GB".to_string(),
        sovereignty_score: sovereignty,
        data_maturity_score: data_maturity,
        ai_maturity_score: ai_maturity,
    }
}

fn vendor_seed(id: &str, name: &str, country_code: &str) -> VendorSeed {
    VendorSeed {
        id: id.to_string(),
        name: name.to_string(),
        country_code: country_code.to_string(),
    }
}

fn link(organisation_id: &str, vendor_id: &str, role: &str) -> LinkSeed {
    LinkSeed {
        organisation_id: organisation_id.to_string(),
        vendor_id: vendor_id.to_string(),
        role: role.to_string(),
    }
}

/// The fixed demo dataset: five organisations, five vendors, nine links.
pub fn reference_dataset() -> SeedDataset {
    SeedDataset {
        tenant_id: DEFAULT_TENANT.to_string(),
        tenant_name: "Default tenant".to_string(),
        organisations: vec![
            org("org-1", "National Energy Corp", "Energy", 72.0, 65.0, 45.0),
            org(
                "org-2",
                "Central Health Authority",
                "Healthcare",
                85.0,
                70.0,
                55.0,
            ),
            org("org-3", "Metro Transport Ltd", "Transport", 58.0, 50.0, 38.0),
            org("org-4", "Finance Regulator", "Finance", 92.0, 88.0, 62.0),
            org(
                "org-5",
                "City Council Digital",
                "Government",
                68.0,
                55.0,
                42.0,
            ),
        ],
        vendors: vec![
            vendor_seed("vendor-1", "CloudCorp US", "US"),
            vendor_seed("vendor-2", "DataHost EU", "DE"),
            vendor_seed("vendor-3", "IdentityProvider UK", "GB"),
            vendor_seed("vendor-4", "Analytics Global", "US"),
            vendor_seed("vendor-5", "SecureStack UK", "GB"),
        ],
        links: vec![
            link("org-1", "vendor-1", "cloud"),
            link("org-1", "vendor-4", "analytics"),
            link("org-2", "vendor-2", "cloud"),
            link("org-2", "vendor-3", "identity"),
            link("org-3", "vendor-1", "cloud"),
            link("org-4", "vendor-5", "infrastructure"),
            link("org-4", "vendor-3", "identity"),
            link("org-5", "vendor-2", "cloud"),
            link("org-5", "vendor-3", "identity"),
        ],
    }
}

/// Seeds the reference dataset into the store.
pub async fn seed_reference_data(db: &DatabaseConnection) -> Result<SeedSummary, StoreError> {
    seed_dataset(db, &reference_dataset()).await
}

/// Seeds an arbitrary dataset inside a single transaction.
///
/// On any failure the store keeps whatever state it had before the
/// call and the error is reported as [`StoreError::SeedFailed`].
pub async fn seed_dataset(
    db: &DatabaseConnection,
    dataset: &SeedDataset,
) -> Result<SeedSummary, StoreError> {
    let txn = db.begin().await.map_err(StoreError::seed_failed)?;

    match apply_dataset(&txn, dataset).await {
        Ok(summary) => {
            txn.commit().await.map_err(StoreError::seed_failed)?;
            log::info!(
                "seed complete: {} organisations, {} vendors, {} links",
                summary.organisations,
                summary.vendors,
                summary.links
            );
            Ok(summary)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                log::error!("seed rollback failed: {rollback_err}");
            }
            Err(StoreError::seed_failed(err))
        }
    }
}

async fn apply_dataset(
    txn: &DatabaseTransaction,
    dataset: &SeedDataset,
) -> Result<SeedSummary, DbErr> {
    let now = Utc::now();

    // Ensure the owning tenant exists without touching it when it does.
    let existing = Tenant::find_by_id(dataset.tenant_id.as_str()).one(txn).await?;
    if existing.is_none() {
        let row = tenant::ActiveModel {
            id: Set(dataset.tenant_id.clone()),
            name: Set(dataset.tenant_name.clone()),
            created_at: Set(now.into()),
        };
        Tenant::insert(row).exec_without_returning(txn).await?;
    }

    if !dataset.organisations.is_empty() {
        let rows = dataset.organisations.iter().map(|o| organisation::ActiveModel {
            id: Set(o.id.clone()),
            tenant_id: Set(dataset.tenant_id.clone()),
            name: Set(o.name.clone()),
            sector: Set(Some(o.sector.clone())),
            country_code: Set(Some(o.country_code.clone())),
            sovereignty_score: Set(Some(o.sovereignty_score)),
            data_maturity_score: Set(Some(o.data_maturity_score)),
            ai_maturity_score: Set(Some(o.ai_maturity_score)),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        });

        // Upsert in place: existing rows keep created_at, everything else
        // is overwritten and updated_at advances.
        Organisation::insert_many(rows)
            .on_conflict(
                OnConflict::column(organisation::Column::Id)
                    .update_columns([
                        organisation::Column::TenantId,
                        organisation::Column::Name,
                        organisation::Column::Sector,
                        organisation::Column::CountryCode,
                        organisation::Column::SovereigntyScore,
                        organisation::Column::DataMaturityScore,
                        organisation::Column::AiMaturityScore,
                        organisation::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(txn)
            .await?;
    }

    if !dataset.vendors.is_empty() {
        let rows = dataset.vendors.iter().map(|v| vendor::ActiveModel {
            id: Set(v.id.clone()),
            tenant_id: Set(dataset.tenant_id.clone()),
            name: Set(v.name.clone()),
            country_code: Set(Some(v.country_code.clone())),
            created_at: Set(now.into()),
        });

        Vendor::insert_many(rows)
            .on_conflict(
                OnConflict::column(vendor::Column::Id)
                    .update_columns([
                        vendor::Column::TenantId,
                        vendor::Column::Name,
                        vendor::Column::CountryCode,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(txn)
            .await?;
    }

    // Links are replaced wholesale rather than diffed.
    OrganisationVendor::delete_many().exec(txn).await?;

    if !dataset.links.is_empty() {
        let rows = dataset.links.iter().map(|l| organisation_vendor::ActiveModel {
            organisation_id: Set(l.organisation_id.clone()),
            vendor_id: Set(l.vendor_id.clone()),
            role: Set(Some(l.role.clone())),
            created_at: Set(now.into()),
        });
        OrganisationVendor::insert_many(rows)
            .exec_without_returning(txn)
            .await?;
    }

    Ok(SeedSummary {
        organisations: dataset.organisations.len(),
        vendors: dataset.vendors.len(),
        links: dataset.links.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn reference_dataset_is_internally_consistent() {
        let dataset = reference_dataset();
        assert_eq!(dataset.tenant_id, DEFAULT_TENANT);
        assert_eq!(dataset.organisations.len(), 5);
        assert_eq!(dataset.vendors.len(), 5);
        assert_eq!(dataset.links.len(), 9);

        let org_ids: HashSet<&str> = dataset.organisations.iter().map(|o| o.id.as_str()).collect();
        let vendor_ids: HashSet<&str> = dataset.vendors.iter().map(|v| v.id.as_str()).collect();
        for l in &dataset.links {
            assert!(org_ids.contains(l.organisation_id.as_str()));
            assert!(vendor_ids.contains(l.vendor_id.as_str()));
        }
    }

    #[test]
    fn finance_regulator_scores_match_the_briefing() {
        let dataset = reference_dataset();
        let regulator = dataset
            .organisations
            .iter()
            .find(|o| o.id == "org-4")
            .unwrap();
        assert_eq!(regulator.name, "Finance Regulator");
        assert_eq!(regulator.sector, "Finance");
        assert_eq!(regulator.sovereignty_score, 92.0);
        assert_eq!(regulator.data_maturity_score, 88.0);
        assert_eq!(regulator.ai_maturity_score, 62.0);
    }
}
