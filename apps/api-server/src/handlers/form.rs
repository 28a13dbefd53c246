//! Multipart form parsing shared by the post and upload endpoints.

use std::collections::HashMap;
use std::convert::Infallible;

use actix_web::{HttpRequest, http::header, web};

use crate::middleware::error::AppError;

/// Cap on a whole form body; large enough for a maximum-size image plus the other fields.
pub const MAX_FORM_BYTES: usize = 6 * 1024 * 1024;

const NOT_MULTIPART: &str = "Expected a multipart/form-data body";
const MALFORMED: &str = "Invalid multipart form body";

/// A file part of a multipart form.
#[derive(Debug, Clone)]
pub struct FilePart {
    pub file_name: Option<String>,
    /// Declared type, `application/octet-stream` when the client sent none.
    pub content_type: String,
    pub data: web::Bytes,
}

/// A fully buffered multipart form. Repeated names keep their first value.
#[derive(Debug, Default)]
pub struct MultipartForm {
    texts: HashMap<String, String>,
    files: HashMap<String, FilePart>,
}

impl MultipartForm {
    /// Parse an already-buffered request body.
    pub async fn parse(req: &HttpRequest, body: web::Bytes) -> Result<Self, AppError> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::BadRequest(NOT_MULTIPART.to_string()))?;

        let boundary = multer::parse_boundary(content_type)
            .map_err(|_| AppError::BadRequest(NOT_MULTIPART.to_string()))?;

        let stream = futures::stream::once(async move { Ok::<_, Infallible>(body) });
        let mut multipart = multer::Multipart::new(stream, boundary);
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(malformed)? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            if let Some(file_name) = field.file_name().map(str::to_owned) {
                let content_type = field
                    .content_type()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let data = field.bytes().await.map_err(malformed)?;

                // Browsers send an empty, unnamed part for an untouched file input.
                if file_name.is_empty() && data.is_empty() {
                    continue;
                }

                form.files.entry(name).or_insert(FilePart {
                    file_name: Some(file_name),
                    content_type,
                    data,
                });
            } else {
                let text = field.text().await.map_err(malformed)?;
                form.texts.entry(name).or_insert(text);
            }
        }

        Ok(form)
    }

    pub fn take_text(&mut self, name: &str) -> Option<String> {
        self.texts.remove(name)
    }

    pub fn take_file(&mut self, name: &str) -> Option<FilePart> {
        self.files.remove(name)
    }
}

fn malformed(err: multer::Error) -> AppError {
    tracing::debug!(error = %err, "Malformed multipart body");
    AppError::BadRequest(MALFORMED.to_string())
}
