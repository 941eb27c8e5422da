// Explanation text assembly
//
// Two callers: the prompt goes to the external generator, the fallback
// composer runs when that generator is unavailable. The fallback is
// deterministic so analysts see a stable rationale offline.

use crate::entities::Alert;
use crate::utils::{format_amount, format_distance};
use crate::value_objects::{AnomalyKind, RiskTier};

/// Scores at or above this call for an immediate freeze rather than
/// customer contact. Sits above the High tier boundary.
pub const FREEZE_THRESHOLD: f64 = 0.90;

/// Multiplier over the customer's historical average that makes the
/// amount itself worth a clause.
const AMOUNT_MULTIPLE_TRIGGER: f64 = 3.0;

/// Kilometers from the customer's usual locations that make the
/// distance worth a clause.
const DISTANCE_TRIGGER_KM: f64 = 500.0;

/// Prompt sent to the external text generator. Requests exactly three
/// sentences: anomalies with numbers, why suspicious, recommended action.
pub fn build_prompt(alert: &Alert) -> String {
    let tags = alert
        .anomaly_type
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "You are Aura, an Explainable AI assistant for a banking fraud detection system. \
Analyze this transaction and provide a clear, actionable explanation for fraud analysts.\n\
\n\
Transaction Details:\n\
- Amount: {currency} {amount} (Customer's typical amount: {currency} {avg})\n\
- Location: {location} ({distance}km from typical locations)\n\
- Merchant: {merchant}\n\
- Time: {time}\n\
- Risk Score: {score:.0}%\n\
- Anomaly Types: {tags}\n\
\n\
Provide a THREE-SENTENCE explanation that:\n\
1. Identifies the primary anomalies with specific numbers (e.g., \"5x typical amount, 800km location anomaly\")\n\
2. Explains why this pattern is suspicious\n\
3. Suggests the immediate analyst action (freeze account, contact customer, or monitor)\n\
\n\
Be concise, specific, and action-oriented.",
        currency = alert.currency,
        amount = format_amount(alert.amount),
        avg = format_amount(alert.previous_avg_amount),
        location = alert.location,
        distance = format_distance(alert.location_distance),
        merchant = alert.merchant_name,
        time = alert.timestamp.to_rfc3339(),
        score = alert.risk_score * 100.0,
        tags = tags,
    )
}

/// Deterministic rule-based rationale. Always produces a non-empty
/// string with exactly one recommended-action sentence, even when no
/// anomaly clause applies.
pub fn fallback_explanation(alert: &Alert) -> String {
    let mut clauses = Vec::new();

    if alert.amount > alert.previous_avg_amount * AMOUNT_MULTIPLE_TRIGGER {
        let multiple = (alert.amount / alert.previous_avg_amount).round() as i64;
        clauses.push(format!(
            "Transaction amount ({currency} {amount}) is {multiple}x the customer's typical spending of {currency} {avg}",
            currency = alert.currency,
            amount = format_amount(alert.amount),
            multiple = multiple,
            avg = format_amount(alert.previous_avg_amount),
        ));
    }

    if alert.location_distance > DISTANCE_TRIGGER_KM {
        clauses.push(format!(
            "{}km geographical anomaly detected from usual transaction locations",
            format_distance(alert.location_distance)
        ));
    }

    if alert.anomaly_type.contains(&AnomalyKind::UnusualTime) {
        clauses.push("Transaction occurred outside normal activity hours".to_string());
    }

    let action = recommended_action(alert.risk_score);
    if clauses.is_empty() {
        format!("{}.", action)
    } else {
        format!("{}. {}.", clauses.join(". "), action)
    }
}

/// Action severity follows the risk tiers; only the freeze cut-off is
/// local to the explainer.
pub fn recommended_action(risk_score: f64) -> &'static str {
    if risk_score >= FREEZE_THRESHOLD {
        "Immediate account freeze recommended pending customer verification"
    } else if RiskTier::classify(risk_score) == RiskTier::High {
        "Contact customer immediately to verify transaction authenticity"
    } else {
        "Monitor account for additional suspicious activity within next 24 hours"
    }
}
