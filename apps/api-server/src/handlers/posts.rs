//! Post listing and creation.

use actix_web::{HttpRequest, HttpResponse, web};
use chrono::{DateTime, Utc};

use cadence_core::domain::Post;
use cadence_core::validation::{PostDraft, validate_new_post};
use cadence_shared::dto::PostResponse;

use super::form::MultipartForm;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Wire shape of a post, with the status derived against `now`.
pub fn post_response(post: &Post, now: DateTime<Utc>) -> PostResponse {
    PostResponse {
        id: post.id,
        caption: post.caption.clone(),
        image_url: post.image_url.clone(),
        scheduled_at: post.scheduled_at,
        status: post.status_at(now).as_str().to_string(),
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .list_all()
        .await
        .map_err(|e| AppError::internal("Failed to fetch posts", e))?;

    let now = Utc::now();
    let body: Vec<PostResponse> = posts.iter().map(|p| post_response(p, now)).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let mut form = MultipartForm::parse(&req, body).await?;
    let draft = PostDraft {
        caption: form.take_text("caption"),
        scheduled_at: form.take_text("scheduledAt"),
        image_url: form.take_text("imageUrl"),
    };

    let input = validate_new_post(draft, Utc::now())?;

    let post = state
        .posts
        .insert(Post::new(input))
        .await
        .map_err(|e| AppError::internal("Failed to create post", e))?;

    tracing::info!(
        post_id = %post.id,
        scheduled_at = %post.scheduled_at,
        has_image = post.image_url.is_some(),
        "Post scheduled"
    );

    Ok(HttpResponse::Ok().json(post_response(&post, Utc::now())))
}
