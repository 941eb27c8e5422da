use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use backend_domain::ports::ExplanationProvider;
use backend_domain::RuntimeConfig;

/// Gemini-backed explanation provider. The request is bounded by the
/// configured timeout; expiry is just another generate() error and the
/// application layer falls back.
pub struct GeminiExplanationProvider {
    client: Client,
    api_key: String,
    url: String,
}

impl GeminiExplanationProvider {
    pub fn new(config: &RuntimeConfig, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds.max(3)))
            .build()?;
        let url = format!(
            "{}/models/{}:generateContent",
            config.gemini_endpoint.trim_end_matches('/'),
            config.gemini_model
        );
        Ok(Self {
            client,
            api_key,
            url,
        })
    }
}

#[async_trait]
impl ExplanationProvider for GeminiExplanationProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "temperature": 0.7,
                "maxOutputTokens": 300,
            }
        });

        let response = self
            .client
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: serde_json::Value = response.json().await?;
        let text = payload
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|value| value.as_str())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| anyhow::anyhow!("generator response missing candidate text"))?;
        Ok(text.to_string())
    }
}

/// Stands in when no API key is configured; every call fails so the
/// deterministic fallback is used.
#[derive(Default)]
pub struct DisabledExplanationProvider;

#[async_trait]
impl ExplanationProvider for DisabledExplanationProvider {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        anyhow::bail!("explanation provider not configured")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_built_from_endpoint_and_model() {
        let config = RuntimeConfig::default();
        let provider = GeminiExplanationProvider::new(&config, "key".to_string()).unwrap();
        assert_eq!(
            provider.url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[tokio::test]
    async fn disabled_provider_always_fails() {
        let provider = DisabledExplanationProvider;
        assert!(provider.generate("anything").await.is_err());
    }
}
