use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use kernel::repository::image::ImagePicker;
use shared::error::{AppError, AppResult};
use std::path::PathBuf;

/// `ImagePicker` for the headless shell: reads a local file and yields it
/// as a base64 data URL. With no source configured it behaves like a
/// cancelled capture.
#[derive(Debug, Default)]
pub struct FileImagePicker {
    source: Option<PathBuf>,
}

impl FileImagePicker {
    pub fn new(source: Option<PathBuf>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl ImagePicker for FileImagePicker {
    async fn capture(&self, prompt_title: &str) -> AppResult<Option<String>> {
        let Some(path) = &self.source else {
            tracing::debug!(prompt_title, "capture cancelled: no image source configured");
            return Ok(None);
        };

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AppError::UnprocessableEntity(format!("image source unreadable: {e}"))
        })?;
        let content_type = match path.extension().and_then(|ext| ext.to_str()) {
            Some("png") => "image/png",
            Some("webp") => "image/webp",
            _ => "image/jpeg",
        };
        Ok(Some(format!(
            "data:{content_type};base64,{}",
            general_purpose::STANDARD.encode(bytes)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unset_source_resolves_as_cancelled() {
        let picker = FileImagePicker::default();
        assert_eq!(picker.capture("imagen").await.unwrap(), None);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let picker = FileImagePicker::new(Some(PathBuf::from("/nonexistent.png")));
        assert!(picker.capture("imagen").await.is_err());
    }
}
