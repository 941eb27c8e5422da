// Runtime configuration carried in AppState

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub default_currency: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_endpoint: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3240".to_string(),
            default_currency: "NAD".to_string(),
            gemini_api_key: None,
            gemini_model: "gemini-pro".to_string(),
            gemini_endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
        }
    }
}
