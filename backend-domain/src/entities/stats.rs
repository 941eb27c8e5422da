// Aggregate desk statistics, derived from the alert namespace on demand

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertStats {
    pub total: usize,
    pub pending: usize,
    pub under_review: usize,
    pub resolved: usize,
    pub frozen: usize,
    /// Sum of `amount` over alerts still in `pending` status.
    pub total_at_risk: f64,
}
