//! Application state - shared across all handlers.

use std::sync::Arc;

use cadence_core::ports::{ImageHost, PostRepository};
use cadence_infra::database::InMemoryPostRepository;
use cadence_infra::images::LocalImageHost;

#[cfg(feature = "postgres")]
use cadence_infra::database::{DatabaseConfig, DatabaseConnections, PostgresPostRepository};

use crate::config::{AppConfig, ImageHostConfig};

/// Shared application state.
///
/// Every handle is created once at boot and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub images: Arc<dyn ImageHost>,
    /// Set when images are stored on local disk and served by this process.
    pub local_images: Option<Arc<LocalImageHost>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let posts = Self::post_repository(config).await;

        let (images, local_images): (Arc<dyn ImageHost>, Option<Arc<LocalImageHost>>) =
            match &config.images {
                ImageHostConfig::Local { dir, public_url } => {
                    tracing::info!(dir = %dir.display(), %public_url, "Storing images on local disk");
                    let host = Arc::new(LocalImageHost::new(dir.clone(), public_url.clone()));
                    (host.clone(), Some(host))
                }
                #[cfg(feature = "cloudinary")]
                ImageHostConfig::Cloudinary(cloudinary) => {
                    tracing::info!(cloud = %cloudinary.cloud_name, "Storing images on Cloudinary");
                    let host = cadence_infra::images::CloudinaryImageHost::new(cloudinary.clone())?;
                    (Arc::new(host), None)
                }
            };

        tracing::info!("Application state initialized");

        Ok(Self {
            posts,
            images,
            local_images,
        })
    }

    #[cfg(feature = "postgres")]
    async fn post_repository(config: &AppConfig) -> Arc<dyn PostRepository> {
        let Some(db_config) = config.database.as_ref() else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Arc::new(InMemoryPostRepository::new());
        };

        match Self::connect(db_config, config.run_migrations).await {
            Ok(connections) => Arc::new(PostgresPostRepository::new(connections.main)),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Arc::new(InMemoryPostRepository::new())
            }
        }
    }

    #[cfg(feature = "postgres")]
    async fn connect(
        db_config: &DatabaseConfig,
        run_migrations: bool,
    ) -> Result<DatabaseConnections, migration::DbErr> {
        use migration::{Migrator, MigratorTrait};

        let connections = DatabaseConnections::init(db_config).await?;
        if run_migrations {
            Migrator::up(&connections.main, None).await?;
            tracing::info!("Migrations applied");
        }
        Ok(connections)
    }

    #[cfg(not(feature = "postgres"))]
    async fn post_repository(_config: &AppConfig) -> Arc<dyn PostRepository> {
        tracing::info!("Running without postgres feature - using in-memory repository");
        Arc::new(InMemoryPostRepository::new())
    }
}
