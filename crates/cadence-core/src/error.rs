//! Domain-level error types.

use thiserror::Error;

/// Client input problems. The display text is safe to return to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Caption is required")]
    CaptionRequired,

    #[error("Caption must be at most {max} characters")]
    CaptionTooLong { max: usize },

    #[error("Scheduled date is required")]
    DateRequired,

    #[error("Scheduled date must be in the future")]
    DateNotFuture,

    #[error("Image URL must be an absolute http(s) URL of at most 2048 characters")]
    InvalidImageUrl,

    #[error("No file provided")]
    FileMissing,

    #[error("Only JPEG images are allowed")]
    UnsupportedType,

    #[error("File size must be less than 3MB")]
    TooLarge,
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Image host failures.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Image host request failed: {0}")]
    Transport(String),

    #[error("Image host rejected the upload: {0}")]
    Rejected(String),

    #[error("Image storage failed: {0}")]
    Storage(String),
}
