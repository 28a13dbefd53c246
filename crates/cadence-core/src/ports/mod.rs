//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod image_host;
mod repository;

pub use image_host::ImageHost;
pub use repository::{BaseRepository, PostRepository};
