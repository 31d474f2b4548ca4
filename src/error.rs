//! Error types for kitchen-core.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Media error: {0}")]
    Media(#[from] MediaError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Media pipeline errors.
///
/// Upload failures fall into two buckets: the local side (file unreadable or
/// its content not valid base64) and the backend side (storage rejected the
/// request). A failed public-URL lookup is a backend failure like any other.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Failed to read local file {local_ref}: {reason}")]
    Read { local_ref: String, reason: String },

    #[error("Failed to decode file content: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Storage backend {op} failed: {reason}")]
    Backend { op: String, reason: String },

    #[error("HTTP error: {0}")]
    Http(String),
}

impl MediaError {
    /// Build a backend failure from an operation name and the backend's
    /// error text.
    pub fn backend(op: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Backend {
            op: op.into(),
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for MediaError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_display_keeps_reason_verbatim() {
        let err = MediaError::backend("remove", "Object not found");
        assert_eq!(
            err.to_string(),
            "Storage backend remove failed: Object not found"
        );
    }

    #[test]
    fn read_error_names_the_file() {
        let err = MediaError::Read {
            local_ref: "file:///tmp/photo.jpg".to_string(),
            reason: "No such file or directory".to_string(),
        };
        assert!(err.to_string().contains("file:///tmp/photo.jpg"));
    }

    #[test]
    fn media_error_wraps_into_top_level() {
        let err: Error = MediaError::backend("upload", "denied").into();
        assert!(matches!(err, Error::Media(_)));
    }
}
