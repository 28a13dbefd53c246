use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::{PostStatus, derive_status};

/// Post entity - a caption, an optional image, and the instant it is scheduled for.
///
/// There is no stored status: see [`Post::status_at`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub caption: String,
    pub image_url: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for a post that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub caption: String,
    pub image_url: Option<String>,
    pub scheduled_at: DateTime<Utc>,
}

impl Post {
    /// Create a post from validated input, stamping id and timestamps.
    pub fn new(input: NewPost) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            caption: input.caption,
            image_url: input.image_url,
            scheduled_at: input.scheduled_at,
            created_at: now,
            updated_at: now,
        }
    }

    /// Display status relative to `now`.
    pub fn status_at(&self, now: DateTime<Utc>) -> PostStatus {
        derive_status(now, self.scheduled_at)
    }
}
