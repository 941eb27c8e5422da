use std::sync::Arc;

use backend_domain::ports::{ExplanationProvider, KeyValueStore};
use backend_domain::RuntimeConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub store: Arc<dyn KeyValueStore>,
    pub explainer: Arc<dyn ExplanationProvider>,
}
