//! In-memory post repository - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use cadence_core::domain::Post;
use cadence_core::error::RepoError;
use cadence_core::ports::{BaseRepository, PostRepository};

/// Post store backed by a `Vec` behind an async `RwLock`.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post> for InMemoryPostRepository {
    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;

        if posts.iter().any(|p| p.id == post.id) {
            return Err(RepoError::Constraint(format!("post {} already exists", post.id)));
        }

        posts.push(post.clone());
        Ok(post)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let mut snapshot = self.posts.read().await.clone();
        snapshot.sort_by(|a, b| {
            b.scheduled_at
                .cmp(&a.scheduled_at)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(snapshot)
    }
}
