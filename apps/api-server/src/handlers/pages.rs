//! Server-rendered page.

use actix_web::{HttpResponse, http::StatusCode, web};
use chrono::Utc;

use cadence_core::presenter::Timeline;

use crate::state::AppState;
use crate::view;

/// GET /
pub async fn index(state: web::Data<AppState>) -> HttpResponse {
    let (status, html) = match state.posts.list_all().await {
        Ok(posts) => {
            let timeline = Timeline::partition(posts, Utc::now());
            (StatusCode::OK, view::render_index(Some(&timeline)))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch posts for page");
            (StatusCode::INTERNAL_SERVER_ERROR, view::render_index(None))
        }
    };

    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(html)
}
