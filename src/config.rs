//! Configuration types.

use secrecy::SecretString;

use crate::error::ConfigError;

/// Default bucket for restaurant media uploads.
pub const DEFAULT_MEDIA_BUCKET: &str = "kitchen-media";

/// Object storage backend configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Base URL of the storage API, e.g. `https://xyz.example.co/storage/v1`.
    pub base_url: String,
    /// Bearer key for the storage API.
    pub api_key: SecretString,
    /// Bucket that holds uploaded media.
    pub bucket: String,
}

impl StorageConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: SecretString::from(api_key.into()),
            bucket: DEFAULT_MEDIA_BUCKET.to_string(),
        }
    }

    /// Override the target bucket.
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    /// Load from `KITCHEN_STORAGE_URL`, `KITCHEN_STORAGE_KEY` and the
    /// optional `KITCHEN_STORAGE_BUCKET`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("KITCHEN_STORAGE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("KITCHEN_STORAGE_URL".to_string()))?;
        let api_key = std::env::var("KITCHEN_STORAGE_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("KITCHEN_STORAGE_KEY".to_string()))?;

        let mut config = Self::new(base_url, api_key);
        if let Ok(bucket) = std::env::var("KITCHEN_STORAGE_BUCKET") {
            config.bucket = bucket;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_bucket() {
        let config = StorageConfig::new("https://storage.example.com", "key");
        assert_eq!(config.bucket, DEFAULT_MEDIA_BUCKET);
        assert_eq!(config.base_url, "https://storage.example.com");
    }

    #[test]
    fn with_bucket_overrides() {
        let config =
            StorageConfig::new("https://storage.example.com", "key").with_bucket("avatars");
        assert_eq!(config.bucket, "avatars");
    }
}
