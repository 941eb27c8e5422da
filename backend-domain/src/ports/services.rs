use async_trait::async_trait;

/// External natural-language generator consumed as a black box.
///
/// Any error (unreachable, non-2xx, timeout, unconfigured) means the
/// caller composes the deterministic fallback instead; the error itself
/// never reaches the analyst.
#[async_trait]
pub trait ExplanationProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}
