// Alert namespace in the key-value collaborator

use serde_json::Value;

use crate::AppError;
use backend_domain::Alert;

pub const ALERT_PREFIX: &str = "alert:";

pub fn alert_key(id: &str) -> String {
    format!("{}{}", ALERT_PREFIX, id)
}

pub fn encode_alert(alert: &Alert) -> Result<Value, AppError> {
    serde_json::to_value(alert).map_err(|err| AppError::Internal(err.into()))
}

pub fn decode_alert(value: Value) -> Result<Alert, AppError> {
    serde_json::from_value(value).map_err(|err| AppError::Internal(err.into()))
}
