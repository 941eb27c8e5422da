// Test doubles for the ports; the real adapters live in
// backend-infrastructure, which this crate must not depend on.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::AppState;
use backend_domain::ports::{ExplanationProvider, KeyValueStore};
use backend_domain::{AnomalyKind, NewAlert, RuntimeConfig};

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, Value>>,
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<Value>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> anyhow::Result<()> {
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn scan_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<Value>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(_, value)| value.clone())
            .collect())
    }

    async fn compare_and_set(
        &self,
        key: &str,
        expected: Option<&Value>,
        value: Value,
    ) -> anyhow::Result<bool> {
        let mut entries = self.entries.lock().unwrap();
        let current = entries.get(key);
        let matches = match (current, expected) {
            (None, None) => true,
            (Some(stored), Some(expected)) => stored == expected,
            _ => false,
        };
        if matches {
            entries.insert(key.to_string(), value);
        }
        Ok(matches)
    }
}

/// Always fails, exercising the fallback path deterministically.
pub struct FailingProvider;

#[async_trait]
impl ExplanationProvider for FailingProvider {
    async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
        anyhow::bail!("explanation provider offline")
    }
}

pub struct CannedProvider(pub String);

#[async_trait]
impl ExplanationProvider for CannedProvider {
    async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
        Ok(self.0.clone())
    }
}

pub fn test_state() -> AppState {
    state_with_provider(FailingProvider)
}

pub fn state_with_provider<P: ExplanationProvider + 'static>(provider: P) -> AppState {
    AppState {
        config: RuntimeConfig::default(),
        store: Arc::new(MemoryStore::default()),
        explainer: Arc::new(provider),
    }
}

pub fn new_alert_payload() -> NewAlert {
    NewAlert {
        amount: Some(9800.0),
        customer_name: Some("Helvi Iipinge".to_string()),
        merchant_name: Some("Okahandja Traders".to_string()),
        previous_avg_amount: Some(2100.0),
        risk_score: Some(0.82),
        location: Some("Windhoek, Namibia".to_string()),
        anomaly_type: vec![AnomalyKind::HighAmount],
        ..NewAlert::default()
    }
}
