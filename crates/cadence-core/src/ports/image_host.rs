use async_trait::async_trait;

use crate::error::UploadError;

/// Image host - stores an image blob and hands back a durable public URL.
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Upload already-validated image bytes. Single attempt, no retries.
    async fn upload(&self, data: &[u8], content_type: &str) -> Result<String, UploadError>;
}
