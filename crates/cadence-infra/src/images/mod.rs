//! Image hosts - local filesystem and Cloudinary.

mod local;

#[cfg(feature = "cloudinary")]
mod cloudinary;

pub use local::LocalImageHost;

#[cfg(feature = "cloudinary")]
pub use cloudinary::{CloudinaryConfig, CloudinaryImageHost};
