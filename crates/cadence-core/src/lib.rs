//! # Cadence Core
//!
//! The domain layer of the post scheduler.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod presenter;
pub mod validation;

pub use error::{RepoError, UploadError, ValidationError};
