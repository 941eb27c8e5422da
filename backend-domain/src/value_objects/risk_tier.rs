// Risk tier value object
// Single source of the severity thresholds; the explanation
// generator derives its recommended action from the same tiers.

use serde::{Deserialize, Serialize};

pub const HIGH_RISK_THRESHOLD: f64 = 0.85;
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Maps a risk score in [0,1] to a severity tier.
    /// Boundaries are inclusive on the lower bound.
    pub fn classify(score: f64) -> RiskTier {
        if score >= HIGH_RISK_THRESHOLD {
            RiskTier::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }

    /// Display treatment used by alert queue views.
    pub fn display_treatment(&self) -> &'static str {
        match self {
            RiskTier::Low => "success",
            RiskTier::Medium => "warning",
            RiskTier::High => "error",
        }
    }
}
