//! HTTP server assembly: router, shared state, OpenAPI document.

use axum::{
    Router,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::handlers;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Builds the router: the four API routes, Swagger UI, CORS and tracing.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/organisations", get(handlers::list_organisations))
        .route("/api/vendors", get(handlers::list_vendors))
        .route("/api/seed", post(handlers::seed_database))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Serves the app on the configured address until ctrl-c.
///
/// Returns once shutdown completes so the caller can close the store.
pub async fn run_server(config: AppConfig, db: DatabaseConnection) -> anyhow::Result<()> {
    let state = AppState { db };
    let app = create_app(state);

    let addr = config
        .bind_addr()
        .map_err(|e| anyhow::anyhow!("invalid server address: {e}"))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {} (profile {})", addr, config.profile);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
    }
}

/// OpenAPI document served at `/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health,
        crate::handlers::organisations::list_organisations,
        crate::handlers::vendors::list_vendors,
        crate::handlers::seed::seed_database,
    ),
    components(
        schemas(
            crate::handlers::health::HealthResponse,
            crate::handlers::organisations::OrganisationRecord,
            crate::handlers::vendors::VendorRecord,
            crate::handlers::seed::SeedResponse,
            crate::error::ApiError,
        )
    ),
    info(
        title = "SIP API",
        description = "Read API and seeding for the sovereign intelligence platform demo",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
