//! # Organisations API Handlers
//!
//! This module contains handlers for the organisations endpoints.

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::models::organisation;
use crate::repositories::OrganisationRepository;
use crate::seeds::DEFAULT_TENANT;
use crate::server::AppState;

/// Query parameters for the organisations listing
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ListOrganisationsQuery {
    /// Tenant to list organisations for (defaults to "default")
    pub tenant: Option<String>,
}

/// Organisation as returned by the read API
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrganisationRecord {
    /// Stable identifier (e.g. "org-1")
    pub id: String,
    /// Owning tenant
    pub tenant_id: String,
    /// Display name
    #[schema(example = "National Energy Corp")]
    pub name: String,
    /// Industry sector, if known
    pub sector: Option<String>,
    /// ISO country code, if known
    pub country_code: Option<String>,
    /// Sovereignty posture score (0-100)
    pub sovereignty_score: Option<f64>,
    /// Data maturity score (0-100)
    pub data_maturity_score: Option<f64>,
    /// AI maturity score (0-100)
    pub ai_maturity_score: Option<f64>,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// Last update timestamp (RFC 3339)
    pub updated_at: String,
}

impl From<organisation::Model> for OrganisationRecord {
    fn from(model: organisation::Model) -> Self {
        Self {
            id: model.id,
            tenant_id: model.tenant_id,
            name: model.name,
            sector: model.sector,
            country_code: model.country_code,
            sovereignty_score: model.sovereignty_score,
            data_maturity_score: model.data_maturity_score,
            ai_maturity_score: model.ai_maturity_score,
            created_at: model.created_at.to_rfc3339(),
            updated_at: model.updated_at.to_rfc3339(),
        }
    }
}

/// List organisations for a tenant, sorted by name.
#[utoipa::path(
    get,
    path = "/api/organisations",
    params(ListOrganisationsQuery),
    responses(
        (status = 200, description = "Organisations sorted by name", body = Vec<OrganisationRecord>),
        (status = 500, description = "Storage failure", body = ApiError)
    ),
    tag = "organisations"
)]
pub async fn list_organisations(
    State(state): State<AppState>,
    Query(query): Query<ListOrganisationsQuery>,
) -> Result<Json<Vec<OrganisationRecord>>, ApiError> {
    // An empty tenant value falls back to the default tenant as well.
    let tenant = match query.tenant.as_deref() {
        Some(tenant) if !tenant.is_empty() => tenant,
        _ => DEFAULT_TENANT,
    };

    let repo = OrganisationRepository::new(&state.db);
    let organisations = repo.list_by_tenant(tenant).await?;

    Ok(Json(
        organisations
            .into_iter()
            .map(OrganisationRecord::from)
            .collect(),
    ))
}
