use axum::extract::State;
use axum::routing::get;
use axum::Router;
use cafecrunch_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(health))]
pub struct HealthApiDoc;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub database_latency_ms: u64,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Health check",
    description = "Probe the database and report round-trip latency",
    responses(
        (status = 200, body = HealthResponse),
        (status = 500, description = "Database unreachable")
    )
)]
pub async fn health(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    let latency_ms = state.service.health().await.map_err(|e| {
        tracing::error!("Health check failed: {}", e);
        ApiError::InternalServerError(format!("Health check failed: {}", e))
    })?;

    Ok(Response::OK(HealthResponse {
        status: "ok".to_string(),
        database_latency_ms: latency_ms,
    }))
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/health", root_path), get(health))
}
