pub mod alert_handlers;
pub mod explain_handlers;
pub mod ops_handlers;

use axum::Json;
use serde::Serialize;

/// Success envelope shared by every endpoint: `{success: true, data}`.
/// Failures are produced by `HttpError` as `{success: false, error}`.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}
