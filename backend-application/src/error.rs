use thiserror::Error;

use backend_domain::InvalidTransition;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("alert '{0}' not found")]
    NotFound(String),
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),
    #[error("alert '{0}' was modified concurrently, retry with fresh data")]
    Conflict(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
