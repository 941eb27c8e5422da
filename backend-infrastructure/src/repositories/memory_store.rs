// In-memory key-value adapter
//
// Default store collaborator for development and single-node desks.
// Durability is explicitly out of scope; swapping in a persistent
// store means implementing the same port elsewhere.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use backend_domain::ports::KeyValueStore;

#[derive(Default)]
pub struct InMemoryKvStore {
    entries: RwLock<BTreeMap<String, Value>>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKvStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<Value>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> anyhow::Result<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn scan_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<Value>> {
        Ok(self
            .entries
            .read()
            .await
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(_, value)| value.clone())
            .collect())
    }

    // The write lock covers check and insert, so the comparison is atomic.
    async fn compare_and_set(
        &self,
        key: &str,
        expected: Option<&Value>,
        value: Value,
    ) -> anyhow::Result<bool> {
        let mut entries = self.entries.write().await;
        let matches = match (entries.get(key), expected) {
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
