use chrono::Utc;
use tracing::info;

use crate::store::{alert_key, decode_alert, encode_alert};
use crate::{AppError, AppState};
use backend_domain::services::transitions::{apply_transition, TransitionOutcome};
use backend_domain::utils::{case_id, time_token};
use backend_domain::{Alert, AlertStatus, NewAlert};

/// Creates a new alert with `status = pending`. Fills the id, the
/// opaque identifiers and the lifecycle timestamps when the payload
/// omits them; persists with set-if-absent so ids stay unique.
pub async fn create_alert(state: &AppState, payload: NewAlert) -> Result<Alert, AppError> {
    let now = Utc::now();

    let amount = payload
        .amount
        .filter(|value| *value > 0.0)
        .ok_or_else(|| AppError::Validation("amount must be a positive number".to_string()))?;
    let previous_avg_amount = payload
        .previous_avg_amount
        .filter(|value| *value > 0.0)
        .ok_or_else(|| {
            AppError::Validation("previousAvgAmount must be a positive number".to_string())
        })?;
    let customer_name = required_text(payload.customer_name, "customerName")?;
    let merchant_name = required_text(payload.merchant_name, "merchantName")?;

    let risk_score = payload.risk_score.unwrap_or(0.0);
    if !(0.0..=1.0).contains(&risk_score) {
        return Err(AppError::Validation(
            "riskScore must be between 0 and 1".to_string(),
        ));
    }
    if payload.anomaly_type.is_empty() {
        return Err(AppError::Validation(
            "anomalyType must contain at least one tag".to_string(),
        ));
    }

    let id = normalize_optional_text(payload.id).unwrap_or_else(|| case_id(now));
    let token = time_token(now);
    let alert = Alert {
        id: id.clone(),
        transaction_id: normalize_optional_text(payload.transaction_id)
            .unwrap_or_else(|| format!("TXN-{}", token)),
        timestamp: payload.timestamp.unwrap_or(now),
        created_at: Some(now),
        updated_at: None,
        amount,
        currency: normalize_optional_text(payload.currency)
            .unwrap_or_else(|| state.config.default_currency.clone()),
        customer_name,
        customer_id: normalize_optional_text(payload.customer_id)
            .unwrap_or_else(|| format!("CUST-{}", token)),
        risk_score,
        status: AlertStatus::Pending,
        location: normalize_optional_text(payload.location).unwrap_or_default(),
        merchant_name,
        anomaly_type: payload.anomaly_type,
        ip_address: normalize_optional_text(payload.ip_address).unwrap_or_default(),
        device_id: normalize_optional_text(payload.device_id)
            .unwrap_or_else(|| format!("DEV-{}", token)),
        previous_avg_amount,
        location_distance: payload.location_distance.unwrap_or(0.0).max(0.0),
    };

    let value = encode_alert(&alert)?;
    let stored = state
        .store
        .compare_and_set(&alert_key(&alert.id), None, value)
        .await
        .map_err(AppError::Internal)?;
    if !stored {
        return Err(AppError::Conflict(alert.id));
    }

    info!("created alert {}", alert.id);
    Ok(alert)
}

/// Read-modify-write through the transition table. Persists with
/// compare-and-set against the snapshot that was read; a lost race
/// surfaces as `Conflict` so the caller retries with fresh data.
pub async fn update_alert_status(
    state: &AppState,
    id: &str,
    requested: AlertStatus,
) -> Result<Alert, AppError> {
    let key = alert_key(id);
    let snapshot = state
        .store
        .get(&key)
        .await
        .map_err(AppError::Internal)?
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;
    let mut alert = decode_alert(snapshot.clone())?;

    match apply_transition(alert.status, requested)? {
        TransitionOutcome::Noop => Ok(alert),
        TransitionOutcome::Applied(next) => {
            alert.status = next;
            alert.updated_at = Some(Utc::now());
            let value = encode_alert(&alert)?;
            let stored = state
                .store
                .compare_and_set(&key, Some(&snapshot), value)
                .await
                .map_err(AppError::Internal)?;
            if !stored {
                return Err(AppError::Conflict(id.to_string()));
            }
            info!("updated alert {} status to {}", id, next);
            Ok(alert)
        }
    }
}

fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    normalize_optional_text(value)
        .ok_or_else(|| AppError::Validation(format!("{} must not be empty", field)))
}

fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{new_alert_payload, test_state};
    use backend_domain::AnomalyKind;

    #[tokio::test]
    async fn create_fills_defaults_and_starts_pending() {
        let state = test_state();
        let alert = create_alert(&state, new_alert_payload()).await.unwrap();
        assert!(alert.id.starts_with("CASE-"));
        assert!(alert.transaction_id.starts_with("TXN-"));
        assert_eq!(alert.status, AlertStatus::Pending);
        assert_eq!(alert.currency, "NAD");
        assert!(alert.created_at.is_some());
        assert!(alert.updated_at.is_none());
    }

    #[tokio::test]
    async fn create_rejects_missing_amount() {
        let state = test_state();
        let mut payload = new_alert_payload();
        payload.amount = None;
        let err = create_alert(&state, payload).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn create_rejects_blank_customer_name() {
        let state = test_state();
        let mut payload = new_alert_payload();
        payload.customer_name = Some("   ".to_string());
        let err = create_alert(&state, payload).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn create_rejects_out_of_range_risk_score() {
        let state = test_state();
        let mut payload = new_alert_payload();
        payload.risk_score = Some(1.2);
        let err = create_alert(&state, payload).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn create_rejects_duplicate_id() {
        let state = test_state();
        let mut payload = new_alert_payload();
        payload.id = Some("CASE-DUP".to_string());
        create_alert(&state, payload.clone()).await.unwrap();
        let err = create_alert(&state, payload).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn status_walks_pending_review_resolved() {
        let state = test_state();
        let mut payload = new_alert_payload();
        payload.id = Some("CASE-WALK".to_string());
        create_alert(&state, payload).await.unwrap();

        let reviewed = update_alert_status(&state, "CASE-WALK", AlertStatus::UnderReview)
            .await
            .unwrap();
        assert_eq!(reviewed.status, AlertStatus::UnderReview);
        assert!(reviewed.updated_at.is_some());

        let resolved = update_alert_status(&state, "CASE-WALK", AlertStatus::Resolved)
            .await
            .unwrap();
        assert_eq!(resolved.status, AlertStatus::Resolved);
    }

    #[tokio::test]
    async fn terminal_status_rejects_reopening() {
        let state = test_state();
        let mut payload = new_alert_payload();
        payload.id = Some("CASE-TERM".to_string());
        create_alert(&state, payload).await.unwrap();
        update_alert_status(&state, "CASE-TERM", AlertStatus::Resolved)
            .await
            .unwrap();

        let err = update_alert_status(&state, "CASE-TERM", AlertStatus::Pending)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidTransition(_)));
    }

    #[tokio::test]
    async fn reapplying_frozen_is_a_noop() {
        let state = test_state();
        let mut payload = new_alert_payload();
        payload.id = Some("CASE-ICE".to_string());
        create_alert(&state, payload).await.unwrap();
        let frozen = update_alert_status(&state, "CASE-ICE", AlertStatus::Frozen)
            .await
            .unwrap();

        let again = update_alert_status(&state, "CASE-ICE", AlertStatus::Frozen)
            .await
            .unwrap();
        assert_eq!(again.status, AlertStatus::Frozen);
        assert_eq!(again.updated_at, frozen.updated_at);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let state = test_state();
        let err = update_alert_status(&state, "CASE-NOPE", AlertStatus::Frozen)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn create_rejects_empty_anomaly_set() {
        let state = test_state();
        let mut payload = new_alert_payload();
        payload.anomaly_type = Vec::<AnomalyKind>::new();
        let err = create_alert(&state, payload).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
