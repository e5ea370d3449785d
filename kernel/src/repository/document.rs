use async_trait::async_trait;
use serde_json::Value;
use shared::error::AppResult;

/// Remote document database keyed by slash-separated paths. Documents are
/// opaque JSON; the store defines the persistence format.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Writes the document at `path`, replacing any existing content.
    async fn put(&self, path: &str, document: &Value) -> AppResult<()>;

    /// Merges `document` into the existing document at `path`; fields not
    /// present in `document` are left untouched.
    async fn put_merge(&self, path: &str, document: &Value) -> AppResult<()>;

    async fn get(&self, path: &str) -> AppResult<Option<Value>>;
}
