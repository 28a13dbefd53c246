//! HTTP handlers and route configuration.

mod form;
mod health;
mod media;
mod pages;
mod posts;
mod upload;

#[cfg(test)]
mod tests;

use actix_web::web;

use form::MAX_FORM_BYTES;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_FORM_BYTES))
        .route("/", web::get().to(pages::index))
        .route("/uploads/{key}", web::get().to(media::serve_upload))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .route("/posts", web::get().to(posts::list_posts))
                .route("/posts", web::post().to(posts::create_post))
                .route("/upload", web::post().to(upload::upload_image)),
        );
}
