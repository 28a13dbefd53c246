use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display-only lifecycle label of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    Upcoming,
    Past,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Upcoming => "UPCOMING",
            PostStatus::Past => "PAST",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Past` only when `scheduled_at` is strictly before `now`.
pub fn derive_status(now: DateTime<Utc>, scheduled_at: DateTime<Utc>) -> PostStatus {
    if scheduled_at < now {
        PostStatus::Past
    } else {
        PostStatus::Upcoming
    }
}
