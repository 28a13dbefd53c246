use std::sync::{Arc, Mutex};

use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde_json::Value;

use cadence_core::domain::{NewPost, Post};
use cadence_core::error::{RepoError, UploadError};
use cadence_core::ports::{BaseRepository, ImageHost, PostRepository};
use cadence_core::validation::MAX_IMAGE_BYTES;
use cadence_infra::database::InMemoryPostRepository;
use cadence_infra::images::LocalImageHost;

use super::configure_routes;
use crate::state::AppState;

const BOUNDARY: &str = "cadence-test-boundary";

/// Records uploads and answers with a fixed URL, or fails every call.
#[derive(Default)]
struct StubImageHost {
    uploads: Mutex<Vec<(usize, String)>>,
    fail: bool,
}

#[async_trait]
impl ImageHost for StubImageHost {
    async fn upload(&self, data: &[u8], content_type: &str) -> Result<String, UploadError> {
        if self.fail {
            return Err(UploadError::Transport("connection reset".to_string()));
        }
        self.uploads
            .lock()
            .unwrap()
            .push((data.len(), content_type.to_string()));
        Ok("https://img.example.com/stub.jpg".to_string())
    }
}

struct FailingRepo;

#[async_trait]
impl BaseRepository<Post> for FailingRepo {
    async fn insert(&self, _post: Post) -> Result<Post, RepoError> {
        Err(RepoError::Connection("db at 10.1.2.3 refused".to_string()))
    }
}

#[async_trait]
impl PostRepository for FailingRepo {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        Err(RepoError::Connection("db at 10.1.2.3 refused".to_string()))
    }
}

enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    },
}

fn multipart(parts: &[Part<'_>]) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                        .as_bytes(),
                );
            }
            Part::File {
                name,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"photo\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

fn post_form(uri: &str, parts: &[Part<'_>]) -> test::TestRequest {
    let (content_type, body) = multipart(parts);
    test::TestRequest::post()
        .uri(uri)
        .insert_header(("content-type", content_type))
        .set_payload(body)
}

fn state_with(posts: Arc<dyn PostRepository>, images: Arc<dyn ImageHost>) -> AppState {
    AppState {
        posts,
        images,
        local_images: None,
    }
}

async fn call(state: AppState, req: test::TestRequest) -> ServiceResponse {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;
    test::call_service(&app, req.to_request()).await
}

fn stored(caption: &str, scheduled_at: chrono::DateTime<Utc>) -> Post {
    Post::new(NewPost {
        caption: caption.to_string(),
        image_url: None,
        scheduled_at,
    })
}

fn in_future(days: i64) -> String {
    (Utc::now() + Duration::days(days)).to_rfc3339()
}

#[actix_web::test]
async fn list_on_empty_store_is_empty_array() {
    let state = state_with(
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(StubImageHost::default()),
    );

    let resp = call(state, test::TestRequest::get().uri("/api/posts")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!([]));
}

#[actix_web::test]
async fn list_derives_status_and_orders_most_future_first() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let now = Utc::now();
    repo.insert(stored("yesterday", now - Duration::days(1))).await.unwrap();
    repo.insert(stored("tomorrow", now + Duration::days(1))).await.unwrap();

    let state = state_with(repo, Arc::new(StubImageHost::default()));
    let resp = call(state, test::TestRequest::get().uri("/api/posts")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let posts = body.as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["caption"], "tomorrow");
    assert_eq!(posts[0]["status"], "UPCOMING");
    assert_eq!(posts[1]["caption"], "yesterday");
    assert_eq!(posts[1]["status"], "PAST");
    assert!(posts[1]["imageUrl"].is_null());
}

#[actix_web::test]
async fn create_persists_valid_post() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let state = state_with(repo.clone(), Arc::new(StubImageHost::default()));
    let scheduled = in_future(3);

    let resp = call(
        state,
        post_form(
            "/api/posts",
            &[
                Part::Text("caption", "Launch day"),
                Part::Text("scheduledAt", &scheduled),
                Part::Text("imageUrl", "https://img.example.com/launch.jpg"),
            ],
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["caption"], "Launch day");
    assert_eq!(body["status"], "UPCOMING");
    assert_eq!(body["imageUrl"], "https://img.example.com/launch.jpg");
    assert!(body["id"].is_string());

    let posts = repo.list_all().await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].caption, "Launch day");
}

#[actix_web::test]
async fn create_with_empty_caption_persists_nothing() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let state = state_with(repo.clone(), Arc::new(StubImageHost::default()));
    let scheduled = in_future(1);

    let resp = call(
        state,
        post_form(
            "/api/posts",
            &[Part::Text("caption", ""), Part::Text("scheduledAt", &scheduled)],
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Caption is required");
    assert!(repo.list_all().await.unwrap().is_empty());
}

#[actix_web::test]
async fn create_rejects_current_and_past_dates() {
    for scheduled in [Utc::now().to_rfc3339(), in_future(-2)] {
        let repo = Arc::new(InMemoryPostRepository::new());
        let state = state_with(repo.clone(), Arc::new(StubImageHost::default()));

        let resp = call(
            state,
            post_form(
                "/api/posts",
                &[Part::Text("caption", "hi"), Part::Text("scheduledAt", &scheduled)],
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Scheduled date must be in the future");
        assert!(repo.list_all().await.unwrap().is_empty());
    }
}

#[actix_web::test]
async fn create_rejects_missing_date_and_long_caption() {
    let state = state_with(
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(StubImageHost::default()),
    );
    let resp = call(state, post_form("/api/posts", &[Part::Text("caption", "hi")])).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Scheduled date is required");

    let long = "x".repeat(501);
    let scheduled = in_future(1);
    let state = state_with(
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(StubImageHost::default()),
    );
    let resp = call(
        state,
        post_form(
            "/api/posts",
            &[Part::Text("caption", &long), Part::Text("scheduledAt", &scheduled)],
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn create_rejects_overlong_image_url() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let state = state_with(repo.clone(), Arc::new(StubImageHost::default()));
    let scheduled = in_future(1);
    let url = format!("https://img.example.com/{}.jpg", "a".repeat(3000));

    let resp = call(
        state,
        post_form(
            "/api/posts",
            &[
                Part::Text("caption", "hi"),
                Part::Text("scheduledAt", &scheduled),
                Part::Text("imageUrl", &url),
            ],
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "Image URL must be an absolute http(s) URL of at most 2048 characters"
    );
    assert!(repo.list_all().await.unwrap().is_empty());
}

#[actix_web::test]
async fn create_rejects_non_multipart_body() {
    let state = state_with(
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(StubImageHost::default()),
    );
    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"caption":"hi"}"#);

    let resp = call(state, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn storage_failures_return_generic_errors() {
    let state = state_with(Arc::new(FailingRepo), Arc::new(StubImageHost::default()));
    let resp = call(state.clone(), test::TestRequest::get().uri("/api/posts")).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "error": "Failed to fetch posts" }));

    let scheduled = in_future(1);
    let resp = call(
        state,
        post_form(
            "/api/posts",
            &[Part::Text("caption", "hi"), Part::Text("scheduledAt", &scheduled)],
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "error": "Failed to create post" }));
}

#[actix_web::test]
async fn upload_accepts_jpeg_at_exact_limit() {
    let host = Arc::new(StubImageHost::default());
    let state = state_with(Arc::new(InMemoryPostRepository::new()), host.clone());
    let data = vec![0xFF_u8; MAX_IMAGE_BYTES];

    let resp = call(
        state,
        post_form(
            "/api/upload",
            &[Part::File {
                name: "image",
                content_type: "image/jpeg",
                data: &data,
            }],
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["imageUrl"], "https://img.example.com/stub.jpg");
    assert_eq!(
        host.uploads.lock().unwrap().as_slice(),
        &[(MAX_IMAGE_BYTES, "image/jpeg".to_string())]
    );
}

#[actix_web::test]
async fn upload_rejects_one_byte_over_limit() {
    let host = Arc::new(StubImageHost::default());
    let state = state_with(Arc::new(InMemoryPostRepository::new()), host.clone());
    let data = vec![0xFF_u8; MAX_IMAGE_BYTES + 1];

    let resp = call(
        state,
        post_form(
            "/api/upload",
            &[Part::File {
                name: "image",
                content_type: "image/jpeg",
                data: &data,
            }],
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "File size must be less than 3MB");
    assert!(host.uploads.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn upload_rejects_png_and_missing_file() {
    let host = Arc::new(StubImageHost::default());
    let state = state_with(Arc::new(InMemoryPostRepository::new()), host.clone());

    let resp = call(
        state.clone(),
        post_form(
            "/api/upload",
            &[Part::File {
                name: "image",
                content_type: "image/png",
                data: b"\x89PNG",
            }],
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Only JPEG images are allowed");

    let resp = call(state, post_form("/api/upload", &[Part::Text("caption", "no file")])).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No file provided");

    assert!(host.uploads.lock().unwrap().is_empty());
}

#[actix_web::test]
async fn upload_host_failure_is_generic_500() {
    let host = Arc::new(StubImageHost {
        fail: true,
        ..Default::default()
    });
    let state = state_with(Arc::new(InMemoryPostRepository::new()), host);

    let resp = call(
        state,
        post_form(
            "/api/upload",
            &[Part::File {
                name: "image",
                content_type: "image/jpeg",
                data: b"\xFF\xD8\xFF",
            }],
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "error": "Failed to upload image" }));
}

#[actix_web::test]
async fn locally_hosted_upload_is_served_back() {
    let dir = tempfile::tempdir().unwrap();
    let local = Arc::new(LocalImageHost::new(dir.path(), "http://localhost/uploads"));
    let state = AppState {
        posts: Arc::new(InMemoryPostRepository::new()),
        images: local.clone(),
        local_images: Some(local),
    };

    let resp = call(
        state.clone(),
        post_form(
            "/api/upload",
            &[Part::File {
                name: "image",
                content_type: "image/jpeg",
                data: b"\xFF\xD8\xFFbytes",
            }],
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let url = body["imageUrl"].as_str().unwrap();
    let path = url.strip_prefix("http://localhost").unwrap().to_string();

    let resp = call(state.clone(), test::TestRequest::get().uri(&path)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("content-type").unwrap(), "image/jpeg");
    assert_eq!(&test::read_body(resp).await[..], b"\xFF\xD8\xFFbytes");

    let resp = call(state, test::TestRequest::get().uri("/uploads/secrets.txt")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn page_shows_empty_state_then_sections() {
    let repo = Arc::new(InMemoryPostRepository::new());
    let state = state_with(repo.clone(), Arc::new(StubImageHost::default()));

    let resp = call(state.clone(), test::TestRequest::get().uri("/")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("No posts scheduled yet."));
    assert!(!html.contains("Upcoming Posts ("));

    let now = Utc::now();
    repo.insert(stored("yesterday", now - Duration::days(1))).await.unwrap();
    repo.insert(stored("tomorrow", now + Duration::days(1))).await.unwrap();

    let resp = call(state, test::TestRequest::get().uri("/")).await;
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(!html.contains("No posts scheduled yet."));
    assert!(html.contains("Upcoming Posts (1)"));
    assert!(html.contains("Past Posts (1)"));
}

#[actix_web::test]
async fn page_reports_load_failure() {
    let state = state_with(Arc::new(FailingRepo), Arc::new(StubImageHost::default()));
    let resp = call(state, test::TestRequest::get().uri("/")).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn health_reports_ok() {
    let state = state_with(
        Arc::new(InMemoryPostRepository::new()),
        Arc::new(StubImageHost::default()),
    );
    let resp = call(state, test::TestRequest::get().uri("/api/health")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}
