//! Local filesystem image host.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use cadence_core::error::UploadError;
use cadence_core::ports::ImageHost;

/// Writes images into a directory and publishes them under a base URL.
///
/// Serving the directory is up to whoever owns `base_url`.
#[derive(Debug, Clone)]
pub struct LocalImageHost {
    base_path: PathBuf,
    base_url: String,
}

impl LocalImageHost {
    pub fn new(base_path: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            base_url: base_url.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Public URL for a stored key.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }

    /// Map a key back to its file, refusing anything this host could not have written.
    pub fn resolve(&self, key: &str) -> Option<PathBuf> {
        let stem = key.strip_suffix(".jpg")?;
        Uuid::parse_str(stem).ok()?;
        Some(self.base_path.join(key))
    }

    fn generate_key() -> String {
        format!("{}.jpg", Uuid::new_v4())
    }
}

#[async_trait]
impl ImageHost for LocalImageHost {
    async fn upload(&self, data: &[u8], content_type: &str) -> Result<String, UploadError> {
        let key = Self::generate_key();
        let path = self.base_path.join(&key);

        tokio::fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| UploadError::Storage(format!("Failed to create directory: {e}")))?;

        tokio::fs::write(&path, data)
            .await
            .map_err(|e| UploadError::Storage(format!("Failed to write file: {e}")))?;

        tracing::debug!(key = %key, size = data.len(), content_type, "Stored image locally");
        Ok(self.public_url(&key))
    }
}
