use async_trait::async_trait;

use crate::domain::Post;
use crate::error::RepoError;

/// Generic repository trait for append-only entities.
#[async_trait]
pub trait BaseRepository<T>: Send + Sync {
    /// Persist a new entity and return it as stored.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post> {
    /// Every post, most-future first. Each call is an independent snapshot.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;
}
