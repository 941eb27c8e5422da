// Anomaly tag vocabulary attached to an alert

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    HighAmount,
    UnusualLocation,
    UnusualTime,
    NewMerchant,
    Velocity,
}

impl AnomalyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyKind::HighAmount => "high_amount",
            AnomalyKind::UnusualLocation => "unusual_location",
            AnomalyKind::UnusualTime => "unusual_time",
            AnomalyKind::NewMerchant => "new_merchant",
            AnomalyKind::Velocity => "velocity",
        }
    }
}
