use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Uploads a base64 data URL at `path` and returns the download URL.
    async fn upload(&self, path: &str, data_url: &str) -> AppResult<String>;
}
