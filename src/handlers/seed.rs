//! # Seed Handler
//!
//! Triggers a transactional seed of the reference dataset.

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::seeds::seed_reference_data;
use crate::server::AppState;

/// Acknowledgement returned after a successful seed run.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SeedResponse {
    pub ok: bool,
    #[schema(example = "Database seeded.")]
    pub message: String,
}

/// Seed the store with the reference dataset.
///
/// Safe to call repeatedly; a failed run leaves the store untouched.
#[utoipa::path(
    post,
    path = "/api/seed",
    responses(
        (status = 200, description = "Dataset seeded", body = SeedResponse),
        (status = 500, description = "Seed failed and was rolled back", body = ApiError)
    ),
    tag = "seed"
)]
pub async fn seed_database(State(state): State<AppState>) -> Result<Json<SeedResponse>, ApiError> {
    seed_reference_data(&state.db).await?;

    Ok(Json(SeedResponse {
        ok: true,
        message: "Database seeded.".to_string(),
    }))
}
