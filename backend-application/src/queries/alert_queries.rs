use tracing::error;

use crate::store::{alert_key, decode_alert, ALERT_PREFIX};
use crate::{AppError, AppState};
use backend_domain::{Alert, AlertStats, AlertStatus};

/// Every alert in the namespace, in canonical queue order:
/// descending risk score, ties broken by descending transaction time.
pub async fn list_alerts(state: &AppState) -> Result<Vec<Alert>, AppError> {
    let values = state
        .store
        .scan_by_prefix(ALERT_PREFIX)
        .await
        .map_err(|err| {
            error!("failed to scan alerts: {}", err);
            AppError::Internal(err)
        })?;
    let mut alerts = values
        .into_iter()
        .map(decode_alert)
        .collect::<Result<Vec<_>, _>>()?;
    alerts.sort_by(|a, b| {
        b.risk_score
            .total_cmp(&a.risk_score)
            .then_with(|| b.timestamp.cmp(&a.timestamp))
    });
    Ok(alerts)
}

pub async fn get_alert(state: &AppState, id: &str) -> Result<Alert, AppError> {
    let value = state
        .store
        .get(&alert_key(id))
        .await
        .map_err(AppError::Internal)?
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;
    decode_alert(value)
}

/// Derived aggregate over the whole namespace; nothing is persisted.
pub async fn compute_stats(state: &AppState) -> Result<AlertStats, AppError> {
    let alerts = list_alerts(state).await?;
    let mut stats = AlertStats {
        total: alerts.len(),
        ..AlertStats::default()
    };
    for alert in &alerts {
        match alert.status {
            AlertStatus::Pending => {
                stats.pending += 1;
                stats.total_at_risk += alert.amount;
            }
            AlertStatus::UnderReview => stats.under_review += 1,
            AlertStatus::Resolved => stats.resolved += 1,
            AlertStatus::Frozen => stats.frozen += 1,
        }
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::seed_commands::seed_if_empty;
    use crate::store::encode_alert;
    use crate::testing::test_state;
    use backend_domain::sample_alerts;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn list_orders_by_risk_then_recency() {
        let state = test_state();
        let now = Utc::now();
        let mut alerts = sample_alerts(now, "NAD");
        // give two alerts identical risk scores, different timestamps
        alerts[0].risk_score = 0.88;
        alerts[0].timestamp = now - Duration::minutes(60);
        alerts[1].risk_score = 0.88;
        alerts[1].timestamp = now - Duration::minutes(5);
        for alert in &alerts {
            state
                .store
                .set(&alert_key(&alert.id), encode_alert(alert).unwrap())
                .await
                .unwrap();
        }

        let listed = list_alerts(&state).await.unwrap();
        let scores: Vec<f64> = listed.iter().map(|a| a.risk_score).collect();
        let mut sorted = scores.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));
        assert_eq!(scores, sorted);

        let first_tied = listed.iter().position(|a| a.risk_score == 0.88).unwrap();
        assert_eq!(listed[first_tied].id, alerts[1].id, "later timestamp sorts first");
    }

    #[tokio::test]
    async fn get_unknown_is_not_found() {
        let state = test_state();
        let err = get_alert(&state, "CASE-MISSING").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn stats_match_the_seeded_corpus() {
        let state = test_state();
        seed_if_empty(&state).await.unwrap();

        let stats = compute_stats(&state).await.unwrap();
        assert_eq!(stats.total, 8);
        assert_eq!(stats.pending, 4);
        assert_eq!(stats.under_review, 1);
        assert_eq!(stats.resolved, 2);
        assert_eq!(stats.frozen, 1);
        // pending sample amounts: 47,500 + 89,300 + 22,800 + 38,900
        assert_eq!(stats.total_at_risk, 198_500.0);
    }

    #[tokio::test]
    async fn stats_over_empty_namespace_are_zero() {
        let state = test_state();
        let stats = compute_stats(&state).await.unwrap();
        assert_eq!(stats, AlertStats::default());
    }
}
