//! Domain entities - the core business objects.

mod post;
mod status;

pub use post::{NewPost, Post};
pub use status::{PostStatus, derive_status};
