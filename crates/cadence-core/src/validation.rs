//! Input validation for post creation and image uploads.
//!
//! Everything here runs before any side effect, so a rejected request never
//! touches the store or the image host.

use chrono::{DateTime, NaiveDateTime, Utc};
use url::Url;

use crate::domain::NewPost;
use crate::error::ValidationError;

/// Maximum caption length, counted in characters.
pub const MAX_CAPTION_CHARS: usize = 500;

/// Largest accepted image, in bytes (3 MiB, inclusive).
pub const MAX_IMAGE_BYTES: usize = 3 * 1024 * 1024;

/// The only accepted image type.
pub const ACCEPTED_IMAGE_TYPE: &str = "image/jpeg";

/// Longest accepted image URL, matching the `posts.image_url` column.
pub const MAX_IMAGE_URL_CHARS: usize = 2048;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Unvalidated post fields as they arrive from a form.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub caption: Option<String>,
    pub scheduled_at: Option<String>,
    pub image_url: Option<String>,
}

/// Check a draft against `now` and turn it into a [`NewPost`].
pub fn validate_new_post(draft: PostDraft, now: DateTime<Utc>) -> Result<NewPost, ValidationError> {
    let caption = draft
        .caption
        .filter(|c| !c.is_empty())
        .ok_or(ValidationError::CaptionRequired)?;

    if caption.chars().count() > MAX_CAPTION_CHARS {
        return Err(ValidationError::CaptionTooLong {
            max: MAX_CAPTION_CHARS,
        });
    }

    let scheduled_at = draft
        .scheduled_at
        .as_deref()
        .and_then(parse_scheduled_at)
        .ok_or(ValidationError::DateRequired)?;

    if scheduled_at <= now {
        return Err(ValidationError::DateNotFuture);
    }

    let image_url = match draft.image_url.map(|u| u.trim().to_string()) {
        Some(url) if url.is_empty() => None,
        Some(url) => Some(validate_image_url(url)?),
        None => None,
    };

    Ok(NewPost {
        caption,
        image_url,
        scheduled_at,
    })
}

/// Parse a submitted timestamp.
///
/// RFC 3339 values keep their offset; values without an offset (what an
/// HTML `datetime-local` input produces) are read as UTC.
pub fn parse_scheduled_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn validate_image_url(raw: String) -> Result<String, ValidationError> {
    if raw.chars().count() > MAX_IMAGE_URL_CHARS {
        return Err(ValidationError::InvalidImageUrl);
    }

    match Url::parse(&raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(raw),
        _ => Err(ValidationError::InvalidImageUrl),
    }
}

/// Check the declared type and size of an uploaded image.
pub fn validate_image_upload(content_type: &str, size_bytes: usize) -> Result<(), ValidationError> {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    if !essence.eq_ignore_ascii_case(ACCEPTED_IMAGE_TYPE) {
        return Err(ValidationError::UnsupportedType);
    }

    if size_bytes > MAX_IMAGE_BYTES {
        return Err(ValidationError::TooLarge);
    }

    Ok(())
}
