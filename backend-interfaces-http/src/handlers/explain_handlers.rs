use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use backend_application::commands::explain_commands;
use backend_application::AppState;
use backend_domain::Alert;

use crate::handlers::ApiResponse;

#[derive(Deserialize)]
pub struct ExplainRequest {
    pub alert: Alert,
}

#[derive(Serialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

/// Provider failure never surfaces here; the only client-visible error
/// is a malformed alert payload, rejected during extraction.
pub async fn explain(
    State(state): State<AppState>,
    Json(payload): Json<ExplainRequest>,
) -> Json<ApiResponse<ExplainResponse>> {
    let explanation = explain_commands::explain_alert(&state, &payload.alert).await;
    ApiResponse::ok(ExplainResponse { explanation })
}
