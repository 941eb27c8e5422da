use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use backend_application::AppState;
use backend_domain::ports::ExplanationProvider;
use backend_infrastructure::{
    AppConfig, DisabledExplanationProvider, GeminiExplanationProvider, InMemoryKvStore,
};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();

        let explainer: Arc<dyn ExplanationProvider> = match &runtime_config.gemini_api_key {
            Some(api_key) => {
                info!("explanation provider: gemini ({})", runtime_config.gemini_model);
                Arc::new(GeminiExplanationProvider::new(
                    &runtime_config,
                    api_key.clone(),
                )?)
            }
            None => {
                info!("explanation provider not configured, fallback explanations only");
                Arc::new(DisabledExplanationProvider)
            }
        };

        let state = AppState {
            config: runtime_config,
            store: Arc::new(InMemoryKvStore::new()),
            explainer,
        };

        Ok(Self { state })
    }
}
