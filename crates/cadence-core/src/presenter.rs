//! Splits a post listing into its upcoming and past buckets.

use chrono::{DateTime, Utc};

use crate::domain::{Post, PostStatus};

/// Posts bucketed by status, all judged against the same instant.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    pub now: DateTime<Utc>,
    pub upcoming: Vec<Post>,
    pub past: Vec<Post>,
}

impl Timeline {
    /// Partition `posts` using a single `now` for the whole batch.
    ///
    /// Relative order inside each bucket is the input order.
    pub fn partition(posts: impl IntoIterator<Item = Post>, now: DateTime<Utc>) -> Self {
        let (upcoming, past): (Vec<Post>, Vec<Post>) = posts
            .into_iter()
            .partition(|post| post.status_at(now) == PostStatus::Upcoming);

        Self {
            now,
            upcoming,
            past,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.past.is_empty()
    }

    pub fn len(&self) -> usize {
        self.upcoming.len() + self.past.len()
    }
}
