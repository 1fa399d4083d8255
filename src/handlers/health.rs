//! # Health Handler
//!
//! Liveness endpoint for the SIP API.

use axum::response::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health payload returned by the liveness endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `true` when the service can answer at all
    pub ok: bool,
    /// Fixed service identifier
    #[schema(example = "sip-api")]
    pub service: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            ok: true,
            service: "sip-api".to_string(),
        }
    }
}

/// Liveness probe. Does not touch the store.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
