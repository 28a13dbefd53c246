//! Image upload.

use actix_web::{HttpRequest, HttpResponse, web};

use cadence_core::ValidationError;
use cadence_core::validation::validate_image_upload;
use cadence_shared::dto::UploadResponse;

use super::form::MultipartForm;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/upload
///
/// Validates the `image` part and hands it to the configured image host.
pub async fn upload_image(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let mut form = MultipartForm::parse(&req, body).await?;
    let file = form.take_file("image").ok_or(ValidationError::FileMissing)?;

    validate_image_upload(&file.content_type, file.data.len())?;

    let image_url = state
        .images
        .upload(&file.data, &file.content_type)
        .await
        .map_err(|e| AppError::internal("Failed to upload image", e))?;

    tracing::info!(size = file.data.len(), %image_url, "Image uploaded");

    Ok(HttpResponse::Ok().json(UploadResponse { image_url }))
}
