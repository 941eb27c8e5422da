use axum::extract::{Path, State};
use axum::Json;

use backend_application::commands::alert_commands;
use backend_application::queries::alert_queries;
use backend_application::AppState;
use backend_domain::{Alert, NewAlert, StatusUpdate};

use crate::error::HttpError;
use crate::handlers::ApiResponse;

pub async fn list_alerts(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Alert>>>, HttpError> {
    let alerts = alert_queries::list_alerts(&state).await?;
    Ok(ApiResponse::ok(alerts))
}

pub async fn get_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Alert>>, HttpError> {
    let alert = alert_queries::get_alert(&state, &id).await?;
    Ok(ApiResponse::ok(alert))
}

pub async fn create_alert(
    State(state): State<AppState>,
    Json(payload): Json<NewAlert>,
) -> Result<Json<ApiResponse<Alert>>, HttpError> {
    let alert = alert_commands::create_alert(&state, payload).await?;
    Ok(ApiResponse::ok(alert))
}

pub async fn update_alert_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdate>,
) -> Result<Json<ApiResponse<Alert>>, HttpError> {
    let alert = alert_commands::update_alert_status(&state, &id, payload.status).await?;
    Ok(ApiResponse::ok(alert))
}
