use chrono::Utc;
use tracing::info;

use crate::store::{alert_key, encode_alert, ALERT_PREFIX};
use crate::{AppError, AppState};
use backend_domain::sample_alerts;

/// Seeds the sample corpus into an empty alert namespace.
///
/// A non-empty namespace makes this a no-op returning the existing
/// count. Each record is written with set-if-absent, so two callers
/// racing the empty check cannot double-write a key.
pub async fn seed_if_empty(state: &AppState) -> Result<usize, AppError> {
    let existing = state
        .store
        .scan_by_prefix(ALERT_PREFIX)
        .await
        .map_err(AppError::Internal)?;
    if !existing.is_empty() {
        return Ok(existing.len());
    }

    let samples = sample_alerts(Utc::now(), &state.config.default_currency);
    let mut written = 0;
    for alert in &samples {
        let value = encode_alert(alert)?;
        let stored = state
            .store
            .compare_and_set(&alert_key(&alert.id), None, value)
            .await
            .map_err(AppError::Internal)?;
        if stored {
            written += 1;
        }
    }

    info!("seeded {} sample alerts", written);
    Ok(written)
}
