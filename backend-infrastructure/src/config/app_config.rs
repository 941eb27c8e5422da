use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::RuntimeConfig;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub default_currency: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_endpoint: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
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

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("AURA_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        if !file_path.exists() {
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            config.normalize();
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(file_path).await?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        if let Some(api_key) = &self.gemini_api_key {
            if api_key.trim().is_empty() {
                self.gemini_api_key = None;
            }
        }
        self.gemini_endpoint = self.gemini_endpoint.trim_end_matches('/').to_string();
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.default_currency.trim().is_empty() {
            return Err(anyhow!("default_currency must not be empty"));
        }
        if self.gemini_model.trim().is_empty() {
            return Err(anyhow!("gemini_model must not be empty"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            default_currency: self.default_currency.clone(),
            gemini_api_key: self.gemini_api_key.clone(),
            gemini_model: self.gemini_model.clone(),
            gemini_endpoint: self.gemini_endpoint.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("AURA_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("AURA_DEFAULT_CURRENCY") {
            self.default_currency = value;
        }
        if let Ok(value) = env::var("AURA_GEMINI_API_KEY") {
            self.gemini_api_key = Some(value);
        }
        if let Ok(value) = env::var("AURA_GEMINI_MODEL") {
            self.gemini_model = value;
        }
        if let Ok(value) = env::var("AURA_GEMINI_ENDPOINT") {
            self.gemini_endpoint = value;
        }
        if let Ok(value) = env::var("AURA_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("AURA_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}
