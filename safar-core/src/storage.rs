use async_trait::async_trait;

/// String-keyed, string-valued storage capability backing the local
/// submission backup, with the semantics of browser local storage:
/// origin-scoped, no schema, values replaced wholesale.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`; `None` when the key was never written.
    async fn get(
        &self,
        key: &str,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>>;

    /// Write `value` under `key`, replacing any existing value.
    async fn set(
        &self,
        key: &str,
        value: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
