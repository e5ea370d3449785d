use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use kernel::repository::blob::BlobStore;
use reqwest::{header::CONTENT_TYPE, Client};
use shared::{
    config::StorageConfig,
    error::{AppError, AppResult},
};

/// `BlobStore` over the Firebase Storage media upload endpoint.
pub struct FirebaseStorageClient {
    http: Client,
    base_url: String,
    bucket: String,
}

impl FirebaseStorageClient {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bucket: config.bucket.clone(),
        }
    }

    fn download_url(&self, path: &str) -> String {
        format!(
            "{}/v0/b/{}/o/{}?alt=media",
            self.base_url,
            self.bucket,
            path.replace('/', "%2F")
        )
    }
}

#[async_trait]
impl BlobStore for FirebaseStorageClient {
    async fn upload(&self, path: &str, data_url: &str) -> AppResult<String> {
        let (content_type, bytes) = parse_data_url(data_url)?;

        let response = self
            .http
            .post(format!("{}/v0/b/{}/o", self.base_url, self.bucket))
            .query(&[("uploadType", "media"), ("name", path)])
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::BlobStoreError(format!(
                "upload failed with status {}",
                response.status()
            )));
        }
        Ok(self.download_url(path))
    }
}

/// Splits `data:{mime};base64,{payload}` into content type and raw bytes.
fn parse_data_url(data_url: &str) -> AppResult<(String, Vec<u8>)> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| AppError::BlobStoreError("not a data URL".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| AppError::BlobStoreError("data URL has no payload".to_string()))?;
    let content_type = match header.strip_suffix(";base64") {
        Some("") => "application/octet-stream".to_string(),
        Some(mime) => mime.to_string(),
        None => return Err(AppError::BlobStoreError("data URL is not base64".to_string())),
    };
    let bytes = general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| AppError::BlobStoreError(format!("invalid base64 payload: {e}")))?;
    Ok((content_type, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_png_data_url() {
        let (content_type, bytes) = parse_data_url("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(content_type, "image/png");
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn defaults_the_content_type_when_missing() {
        let (content_type, _) = parse_data_url("data:;base64,aGVsbG8=").unwrap();
        assert_eq!(content_type, "application/octet-stream");
    }

    #[test]
    fn rejects_non_base64_data_urls() {
        assert!(parse_data_url("data:text/plain,hello").is_err());
        assert!(parse_data_url("http://example.com/a.png").is_err());
    }
}
