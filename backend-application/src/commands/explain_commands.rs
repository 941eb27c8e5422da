use tracing::warn;

use crate::AppState;
use backend_domain::services::explainer::{build_prompt, fallback_explanation};
use backend_domain::Alert;

/// Produces the analyst-facing rationale for an alert.
///
/// Tries the external generator first; any failure (unconfigured,
/// unreachable, timeout, empty response) is logged and replaced with
/// the deterministic fallback. This never fails.
pub async fn explain_alert(state: &AppState, alert: &Alert) -> String {
    let prompt = build_prompt(alert);
    match state.explainer.generate(&prompt).await {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            warn!("explanation provider returned empty text for {}", alert.id);
            fallback_explanation(alert)
        }
        Err(err) => {
            warn!("explanation provider failed for {}: {}", alert.id, err);
            fallback_explanation(alert)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{state_with_provider, test_state, CannedProvider};
    use backend_domain::sample_alerts;
    use chrono::Utc;

    #[tokio::test]
    async fn provider_failure_falls_back_deterministically() {
        // test_state wires a provider that always errors
        let state = test_state();
        let alerts = sample_alerts(Utc::now(), "NAD");
        let case_003 = alerts.iter().find(|a| a.id == "CASE-003").unwrap();

        let text = explain_alert(&state, case_003).await;
        assert!(!text.is_empty());
        assert!(text.contains("7x"));
        assert!(text.contains("3200km"));
        assert!(text.contains("Immediate account freeze"));
    }

    #[tokio::test]
    async fn provider_text_is_passed_through() {
        let state = state_with_provider(CannedProvider(
            "The transaction is 7x the typical amount. That pattern matches takeover fraud. Freeze the account.".to_string(),
        ));
        let alerts = sample_alerts(Utc::now(), "NAD");
        let text = explain_alert(&state, &alerts[0]).await;
        assert!(text.starts_with("The transaction is 7x"));
    }

    #[tokio::test]
    async fn empty_provider_text_falls_back() {
        let state = state_with_provider(CannedProvider("   ".to_string()));
        let alerts = sample_alerts(Utc::now(), "NAD");
        let text = explain_alert(&state, &alerts[0]).await;
        assert!(!text.trim().is_empty());
    }
}
