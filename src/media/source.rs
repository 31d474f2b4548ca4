//! Local file source — reads an image off the device as base64 text.

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::error::MediaError;

/// Reads a locally referenced file and hands it back base64-encoded.
///
/// The pipeline deliberately consumes base64 text rather than raw bytes: the
/// platform file APIs this crate fronts deliver picked images that way, and
/// the mock sources in tests do the same.
#[async_trait]
pub trait FileSource: Send + Sync {
    /// Read the file at `local_ref` fully into memory, base64 (STANDARD)
    /// encoded.
    async fn read_base64(&self, local_ref: &str) -> Result<String, MediaError>;
}

/// [`FileSource`] backed by the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct LocalFileSource;

#[async_trait]
impl FileSource for LocalFileSource {
    async fn read_base64(&self, local_ref: &str) -> Result<String, MediaError> {
        // Picked images come through as file:// URIs on device.
        let path = local_ref.strip_prefix("file://").unwrap_or(local_ref);
        let bytes = tokio::fs::read(path).await.map_err(|e| MediaError::Read {
            local_ref: local_ref.to_string(),
            reason: e.to_string(),
        })?;
        Ok(BASE64.encode(bytes))
    }
}
