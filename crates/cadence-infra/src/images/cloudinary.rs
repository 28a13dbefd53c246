//! Cloudinary image host using unsigned upload presets.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use cadence_core::error::UploadError;
use cadence_core::ports::ImageHost;

pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Cloudinary account settings.
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    /// Name of an unsigned upload preset configured in the Cloudinary console.
    pub upload_preset: String,
    pub folder: Option<String>,
    pub api_base: String,
    pub timeout: Duration,
}

impl CloudinaryConfig {
    pub fn new(cloud_name: impl Into<String>, upload_preset: impl Into<String>) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            upload_preset: upload_preset.into(),
            folder: None,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UploadResult {
    secure_url: String,
}

/// Uploads images to Cloudinary and returns their `secure_url`.
pub struct CloudinaryImageHost {
    config: CloudinaryConfig,
    client: reqwest::Client,
}

impl CloudinaryImageHost {
    pub fn new(config: CloudinaryConfig) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn upload_endpoint(&self) -> String {
        format!(
            "{}/{}/image/upload",
            self.config.api_base.trim_end_matches('/'),
            self.config.cloud_name
        )
    }
}

#[async_trait]
impl ImageHost for CloudinaryImageHost {
    async fn upload(&self, data: &[u8], content_type: &str) -> Result<String, UploadError> {
        let part = Part::bytes(data.to_vec())
            .file_name("upload.jpg")
            .mime_str(content_type)
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let mut form = Form::new()
            .part("file", part)
            .text("upload_preset", self.config.upload_preset.clone());
        if let Some(folder) = &self.config.folder {
            form = form.text("folder", folder.clone());
        }

        let response = self
            .client
            .post(self.upload_endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Rejected(format!("{status}: {body}")));
        }

        let result: UploadResult = response
            .json()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        tracing::debug!(url = %result.secure_url, size = data.len(), "Uploaded image to Cloudinary");
        Ok(result.secure_url)
    }
}
