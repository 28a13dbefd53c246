//! Serves images stored by the local image host.

use actix_web::{HttpResponse, http::header, web};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /uploads/{key}
pub async fn serve_upload(
    state: web::Data<AppState>,
    key: web::Path<String>,
) -> AppResult<HttpResponse> {
    let not_found = || AppError::NotFound("Image not found".to_string());

    let host = state.local_images.as_ref().ok_or_else(not_found)?;
    let path = host.resolve(&key).ok_or_else(not_found)?;

    let data = match tokio::fs::read(&path).await {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(not_found()),
        Err(e) => return Err(AppError::internal("Failed to read image", e)),
    };

    Ok(HttpResponse::Ok()
        .content_type("image/jpeg")
        .insert_header((header::CACHE_CONTROL, "public, max-age=31536000, immutable"))
        .body(data))
}
