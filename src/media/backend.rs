//! Object storage backend — trait plus the HTTP implementation.

use async_trait::async_trait;
use secrecy::ExposeSecret;
use tracing::debug;

use crate::config::StorageConfig;
use crate::error::MediaError;

/// Backend-agnostic object storage interface.
///
/// The remote service owns all protocol detail — auth refresh, timeouts,
/// retries. This layer only shapes requests and maps failures into
/// [`MediaError`].
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `payload` under `key` in `bucket`, declaring `content_type`.
    /// An existing object under the same key is overwritten.
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        payload: &[u8],
        content_type: &str,
    ) -> Result<(), MediaError>;

    /// Public, unauthenticated retrieval URL for a stored object.
    async fn public_url(&self, bucket: &str, key: &str) -> Result<String, MediaError>;

    /// Remove the given keys from `bucket`.
    async fn remove(&self, bucket: &str, keys: &[String]) -> Result<(), MediaError>;
}

/// [`ObjectStorage`] over the storage service's REST API.
pub struct HttpObjectStorage {
    config: StorageConfig,
    client: reqwest::Client,
}

impl HttpObjectStorage {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/object/{bucket}/{key}", self.config.base_url)
    }

    fn bearer(&self) -> &str {
        self.config.api_key.expose_secret()
    }
}

#[async_trait]
impl ObjectStorage for HttpObjectStorage {
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        payload: &[u8],
        content_type: &str,
    ) -> Result<(), MediaError> {
        let resp = self
            .client
            .post(self.object_url(bucket, key))
            .bearer_auth(self.bearer())
            .header(reqwest::header::CONTENT_TYPE, content_type)
            // Upsert keeps key collisions a silent overwrite.
            .header("x-upsert", "true")
            .body(payload.to_vec())
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(MediaError::backend(
                "upload",
                format!("{status}: {body}"),
            ));
        }

        debug!(bucket, key, bytes = payload.len(), "Object uploaded");
        Ok(())
    }

    async fn public_url(&self, bucket: &str, key: &str) -> Result<String, MediaError> {
        // The public URL is derived, not fetched; the backend serves it
        // under a fixed prefix.
        Ok(format!(
            "{}/object/public/{bucket}/{key}",
            self.config.base_url
        ))
    }

    async fn remove(&self, bucket: &str, keys: &[String]) -> Result<(), MediaError> {
        let resp = self
            .client
            .delete(format!("{}/object/{bucket}", self.config.base_url))
            .bearer_auth(self.bearer())
            .json(&serde_json::json!({ "prefixes": keys }))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(MediaError::backend(
                "remove",
                format!("{status}: {body}"),
            ));
        }

        debug!(bucket, count = keys.len(), "Objects removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_url_joins_bucket_and_key() {
        let storage = HttpObjectStorage::new(StorageConfig::new(
            "https://storage.example.com/storage/v1",
            "key",
        ));
        assert_eq!(
            storage.object_url("kitchen-media", "123-abc.jpg"),
            "https://storage.example.com/storage/v1/object/kitchen-media/123-abc.jpg"
        );
    }

    #[tokio::test]
    async fn public_url_uses_public_prefix() {
        let storage = HttpObjectStorage::new(StorageConfig::new(
            "https://storage.example.com/storage/v1",
            "key",
        ));
        let url = storage
            .public_url("kitchen-media", "123-abc.jpg")
            .await
            .unwrap();
        assert_eq!(
            url,
            "https://storage.example.com/storage/v1/object/public/kitchen-media/123-abc.jpg"
        );
    }
}
