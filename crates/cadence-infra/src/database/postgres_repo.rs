//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{EntityTrait, QueryOrder};

use cadence_core::domain::Post;
use cadence_core::error::RepoError;
use cadence_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .order_by_desc(post::Column::ScheduledAt)
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(count = rows.len(), "Loaded posts");
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
