use axum::Router;

use backend_application::AppState;

use crate::handlers::{alert_handlers, explain_handlers, ops_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", axum::routing::get(ops_handlers::health))
        .route(
            "/alerts",
            axum::routing::get(alert_handlers::list_alerts)
                .post(alert_handlers::create_alert),
        )
        .route("/alerts/:id", axum::routing::get(alert_handlers::get_alert))
        .route(
            "/alerts/:id/status",
            axum::routing::put(alert_handlers::update_alert_status),
        )
        .route(
            "/xai/explain",
            axum::routing::post(explain_handlers::explain),
        )
        .route(
            "/initialize",
            axum::routing::post(ops_handlers::initialize),
        )
        .route("/stats", axum::routing::get(ops_handlers::stats))
        .with_state(state)
}
