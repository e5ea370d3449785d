use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ImagePicker: Send + Sync {
    /// Prompts for a photo and resolves with its base64 data URL.
    /// `None` means the user cancelled the capture; that is not an error.
    async fn capture(&self, prompt_title: &str) -> AppResult<Option<String>>;
}
