//! Image upload pipeline — local file in, public URL out.

use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::Utc;
use rand::{Rng, distributions::Alphanumeric};
use tracing::{error, info};

use super::backend::ObjectStorage;
use super::source::FileSource;
use crate::config::DEFAULT_MEDIA_BUCKET;
use crate::error::MediaError;

/// Content type declared for every upload. The pipeline does not sniff the
/// actual image format.
const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// Length of the random suffix in derived storage keys.
const KEY_SUFFIX_LEN: usize = 8;

/// Stateless upload/delete pipeline over a [`FileSource`] and an
/// [`ObjectStorage`] backend.
///
/// Each call is independent; concurrent uploads share nothing but the remote
/// bucket namespace. There is no retry, no chunking, and no cancellation at
/// this layer.
pub struct MediaPipeline {
    source: Arc<dyn FileSource>,
    backend: Arc<dyn ObjectStorage>,
    bucket: String,
}

impl MediaPipeline {
    /// Build a pipeline targeting the default `kitchen-media` bucket.
    pub fn new(source: Arc<dyn FileSource>, backend: Arc<dyn ObjectStorage>) -> Self {
        Self::with_bucket(source, backend, DEFAULT_MEDIA_BUCKET)
    }

    pub fn with_bucket(
        source: Arc<dyn FileSource>,
        backend: Arc<dyn ObjectStorage>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            source,
            backend,
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Upload the image at `local_ref` and return its public URL.
    ///
    /// Steps: derive a fresh storage key, read the file as base64 text,
    /// decode to raw bytes, upload as `image/jpeg`, then resolve the public
    /// URL. The first failing step aborts the rest; every failure comes back
    /// as `Err`, never as a panic.
    pub async fn upload_image(&self, local_ref: &str) -> Result<String, MediaError> {
        let key = derive_key();

        let encoded = match self.source.read_base64(local_ref).await {
            Ok(encoded) => encoded,
            Err(e) => {
                error!(local_ref, error = %e, "Image read failed");
                return Err(e);
            }
        };

        let payload = match BASE64.decode(encoded.as_bytes()) {
            Ok(payload) => payload,
            Err(e) => {
                error!(local_ref, error = %e, "Image content is not valid base64");
                return Err(MediaError::Decode(e));
            }
        };

        if let Err(e) = self
            .backend
            .upload(&self.bucket, &key, &payload, IMAGE_CONTENT_TYPE)
            .await
        {
            error!(bucket = %self.bucket, key, error = %e, "Image upload failed");
            return Err(e);
        }

        let url = match self.backend.public_url(&self.bucket, &key).await {
            Ok(url) => url,
            Err(e) => {
                error!(bucket = %self.bucket, key, error = %e, "Public URL lookup failed");
                return Err(e);
            }
        };

        info!(bucket = %self.bucket, key, url, "Image uploaded");
        Ok(url)
    }

    /// Delete a previously uploaded object by key.
    ///
    /// No existence check is made first, and any public URL handed out for
    /// the key keeps pointing at the now-missing object. Backend errors are
    /// passed through verbatim.
    pub async fn delete_image(&self, path: &str) -> Result<(), MediaError> {
        match self
            .backend
            .remove(&self.bucket, &[path.to_string()])
            .await
        {
            Ok(()) => {
                info!(bucket = %self.bucket, path, "Image deleted");
                Ok(())
            }
            Err(e) => {
                error!(bucket = %self.bucket, path, error = %e, "Image delete failed");
                Err(e)
            }
        }
    }
}

/// Derive a per-call storage key: unix millis, a random alphanumeric suffix,
/// and a fixed `.jpg` extension.
///
/// Uniqueness is best-effort; the backend upserts, so a collision overwrites
/// silently rather than erroring.
fn derive_key() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(KEY_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{}-{}.jpg", Utc::now().timestamp_millis(), suffix)
}
