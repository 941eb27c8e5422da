use async_trait::async_trait;
use serde_json::Value;

/// Key-value collaborator backing the alert store facade.
///
/// Durability, indexing and transactions are the implementor's concern.
/// `compare_and_set` with `expected: None` means set-only-if-absent; with
/// `Some(snapshot)` it rejects writes when the stored value no longer
/// matches the snapshot, which callers surface as a conflict.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<Value>>;
    async fn set(&self, key: &str, value: Value) -> anyhow::Result<()>;
    async fn scan_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<Value>>;
    async fn compare_and_set(
        &self,
        key: &str,
        expected: Option<&Value>,
        value: Value,
    ) -> anyhow::Result<bool>;
}
