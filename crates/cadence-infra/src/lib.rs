//! # Cadence Infrastructure
//!
//! Concrete implementations of the ports defined in `cadence-core`.
//! This crate contains the post store and the image hosts.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory store and local images only
//! - `postgres` - PostgreSQL post store via SeaORM
//! - `cloudinary` - Cloudinary image host via reqwest

pub mod database;
pub mod images;

pub use database::{DatabaseConfig, InMemoryPostRepository};
pub use images::LocalImageHost;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresPostRepository};

#[cfg(feature = "cloudinary")]
pub use images::{CloudinaryConfig, CloudinaryImageHost};
