use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use backend_application::commands::seed_commands;
use backend_application::queries::alert_queries;
use backend_application::AppState;
use backend_domain::AlertStats;

use crate::error::HttpError;
use crate::handlers::ApiResponse;

#[derive(Serialize)]
pub struct SeedResponse {
    pub count: usize,
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn initialize(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SeedResponse>>, HttpError> {
    let count = seed_commands::seed_if_empty(&state).await?;
    Ok(ApiResponse::ok(SeedResponse { count }))
}

pub async fn stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<AlertStats>>, HttpError> {
    let stats = alert_queries::compute_stats(&state).await?;
    Ok(ApiResponse::ok(stats))
}
