// Alert entity
// One transaction flagged as potentially fraudulent. Records are the
// audit trail: there is no delete operation anywhere in the system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{AlertStatus, AnomalyKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub transaction_id: String,
    /// Transaction time. Never changes after creation.
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub amount: f64,
    pub currency: String,
    pub customer_name: String,
    pub customer_id: String,
    pub risk_score: f64,
    pub status: AlertStatus,
    pub location: String,
    pub merchant_name: String,
    pub anomaly_type: Vec<AnomalyKind>,
    pub ip_address: String,
    pub device_id: String,
    pub previous_avg_amount: f64,
    /// Kilometers from the customer's typical transaction locations.
    pub location_distance: f64,
}

/// Analyst- or client-supplied payload for creating an alert.
/// Missing identifiers and lifecycle fields are filled in on create.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub risk_score: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub merchant_name: Option<String>,
    #[serde(default)]
    pub anomaly_type: Vec<AnomalyKind>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub previous_avg_amount: Option<f64>,
    #[serde(default)]
    pub location_distance: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdate {
    pub status: AlertStatus,
}
