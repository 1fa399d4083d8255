//! # Vendors API Handlers
//!
//! This module contains handlers for the vendors endpoints.

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::models::vendor;
use crate::repositories::VendorRepository;
use crate::seeds::DEFAULT_TENANT;
use crate::server::AppState;

/// Query parameters for the vendors listing
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ListVendorsQuery {
    /// Tenant to list vendors for (defaults to "default")
    pub tenant: Option<String>,
}

/// Vendor as returned by the read API
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct VendorRecord {
    /// Stable identifier (e.g. "vendor-1")
    pub id: String,
    /// Owning tenant
    pub tenant_id: String,
    /// Display name
    #[schema(example = "CloudCorp US")]
    pub name: String,
    /// ISO country code, if known
    pub country_code: Option<String>,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

impl From<vendor::Model> for VendorRecord {
    fn from(model: vendor::Model) -> Self {
        Self {
            id: model.id,
            tenant_id: model.tenant_id,
            name: model.name,
            country_code: model.country_code,
            created_at: model.created_at.to_rfc3339(),
        }
    }
}

/// List vendors for a tenant, sorted by name.
#[utoipa::path(
    get,
    path = "/api/vendors",
    params(ListVendorsQuery),
    responses(
        (status = 200, description = "Vendors sorted by name", body = Vec<VendorRecord>),
        (status = 500, description = "Storage failure", body = ApiError)
    ),
    tag = "vendors"
)]
pub async fn list_vendors(
    State(state): State<AppState>,
    Query(query): Query<ListVendorsQuery>,
) -> Result<Json<Vec<VendorRecord>>, ApiError> {
    // An empty tenant value falls back to the default tenant as well.
    let tenant = match query.tenant.as_deref() {
        Some(tenant) if !tenant.is_empty() => tenant,
        _ => DEFAULT_TENANT,
    };

    let repo = VendorRepository::new(&state.db);
    let vendors = repo.list_by_tenant(tenant).await?;

    Ok(Json(vendors.into_iter().map(VendorRecord::from).collect()))
}
