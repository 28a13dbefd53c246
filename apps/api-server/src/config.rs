//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use cadence_infra::database::DatabaseConfig;
#[cfg(feature = "cloudinary")]
use cadence_infra::images::CloudinaryConfig;

use crate::telemetry::TelemetryConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[cfg(feature = "cloudinary")]
    #[error("{0} must be set when IMAGE_HOST={1}")]
    Missing(&'static str, String),

    #[error("Unknown IMAGE_HOST '{0}' (expected 'local' or 'cloudinary')")]
    UnknownImageHost(String),

    #[error("Invalid value for {0}: '{1}'")]
    Invalid(&'static str, String),
}

/// Where uploaded images go.
#[derive(Debug, Clone)]
pub enum ImageHostConfig {
    Local { dir: PathBuf, public_url: String },
    #[cfg(feature = "cloudinary")]
    Cloudinary(CloudinaryConfig),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub run_migrations: bool,
    pub images: ImageHostConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid("PORT", raw))?,
            None => 8080,
        };

        let database = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .map(|url| DatabaseConfig {
                url,
                max_connections: lookup("DB_MAX_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(20),
                min_connections: lookup("DB_MIN_CONNECTIONS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(2),
                connect_timeout: Duration::from_secs(10),
            });

        let run_migrations = lookup("RUN_MIGRATIONS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let images = Self::image_host(&lookup, &host, port)?;

        Ok(Self {
            host,
            port,
            database,
            run_migrations,
            images,
            telemetry: TelemetryConfig::from_lookup(&lookup),
        })
    }

    fn image_host<F>(lookup: &F, host: &str, port: u16) -> Result<ImageHostConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let kind = lookup("IMAGE_HOST").unwrap_or_else(|| "local".to_string());

        match kind.to_lowercase().as_str() {
            "local" => Ok(ImageHostConfig::Local {
                dir: lookup("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("./uploads")),
                public_url: lookup("UPLOAD_PUBLIC_URL")
                    .unwrap_or_else(|| format!("http://{host}:{port}/uploads")),
            }),
            #[cfg(feature = "cloudinary")]
            "cloudinary" => {
                let cloud_name = lookup("CLOUDINARY_CLOUD_NAME")
                    .ok_or_else(|| ConfigError::Missing("CLOUDINARY_CLOUD_NAME", kind.clone()))?;
                let preset = lookup("CLOUDINARY_UPLOAD_PRESET")
                    .ok_or_else(|| ConfigError::Missing("CLOUDINARY_UPLOAD_PRESET", kind.clone()))?;

                let mut config = CloudinaryConfig::new(cloud_name, preset);
                config.folder = lookup("CLOUDINARY_FOLDER").filter(|f| !f.is_empty());
                Ok(ImageHostConfig::Cloudinary(config))
            }
            _ => Err(ConfigError::UnknownImageHost(kind)),
        }
    }
}
