//! HTTP tests for the admin user routes, run in-process with in-memory stores.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use common::{make_user, InMemoryAlbumStore, InMemoryUserStore, RecordingJobQueue};
use photark_api_users::{admin_users_router, AdminUsersState};
use photark_auth::AuthClaims;
use photark_core::UserId;
use std::sync::Arc;
use tower::util::ServiceExt;

struct TestApp {
    app: Router,
    users: Arc<InMemoryUserStore>,
}

fn test_app() -> TestApp {
    let users = Arc::new(InMemoryUserStore::default());
    let albums = Arc::new(InMemoryAlbumStore::default());
    let jobs = Arc::new(RecordingJobQueue::default());
    let state = AdminUsersState::new(users.clone(), albums, jobs);
    TestApp {
        app: admin_users_router(state),
        users,
    }
}

fn admin_claims() -> AuthClaims {
    AuthClaims::builder()
        .subject(UserId::new().to_string())
        .email("admin@example.com")
        .is_admin(true)
        .expires_in_secs(3600)
        .build()
}

fn request(method: Method, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let mut request = builder.body(body).unwrap();
    request.extensions_mut().insert(admin_claims());
    request
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_unauthenticated_request_is_401() {
    let t = test_app();

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = t.app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let problem = body_json(response).await;
    assert_eq!(problem["status"], 401);
    assert_eq!(problem["title"], "Unauthorized");
}

#[tokio::test]
async fn test_non_admin_request_is_403() {
    let t = test_app();

    let claims = AuthClaims::builder()
        .subject(UserId::new().to_string())
        .email("user@example.com")
        .is_admin(false)
        .expires_in_secs(3600)
        .build();
    let mut request = Request::builder().uri("/").body(Body::empty()).unwrap();
    request.extensions_mut().insert(claims);

    let response = t.app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_returns_201_with_standard_view() {
    let t = test_app();

    let response = t
        .app
        .oneshot(request(
            Method::POST,
            "/",
            Some(serde_json::json!({
                "email": "a@x.com",
                "password": "password-1",
                "name": "A",
                "notify": false,
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["name"], "A");
    assert_eq!(body["avatarColor"], "primary");
    // Standard view: no operator-only fields.
    assert!(body.get("isAdmin").is_none());
    assert!(body.get("status").is_none());
    assert!(body.get("quotaSizeInBytes").is_none());
}

#[tokio::test]
async fn test_create_with_invalid_body_is_400_problem() {
    let t = test_app();

    let response = t
        .app
        .oneshot(request(
            Method::POST,
            "/",
            Some(serde_json::json!({
                "email": "not-an-email",
                "password": "password-1",
                "name": "A",
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let problem = body_json(response).await;
    assert_eq!(problem["status"], 400);
    assert_eq!(problem["errors"][0]["field"], "email");
}

#[tokio::test]
async fn test_create_duplicate_email_is_409() {
    let t = test_app();
    t.users.insert(make_user("taken@x.com", false));

    let response = t
        .app
        .oneshot(request(
            Method::POST,
            "/",
            Some(serde_json::json!({
                "email": "taken@x.com",
                "password": "password-1",
                "name": "A",
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_get_unknown_user_is_404() {
    let t = test_app();

    let response = t
        .app
        .oneshot(request(
            Method::GET,
            &format!("/{}", UserId::new()),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_user_id_is_400() {
    let t = test_app();

    let response = t
        .app
        .oneshot(request(Method::GET, "/not-a-uuid", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_admin_user_is_403() {
    let t = test_app();
    let id = t.users.insert(make_user("admin2@x.com", true));

    let response = t
        .app
        .oneshot(request(Method::DELETE, &format!("/{id}"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let problem = body_json(response).await;
    assert_eq!(problem["detail"], "Cannot delete admin user");
}

#[tokio::test]
async fn test_delete_accepts_missing_body() {
    let t = test_app();
    let id = t.users.insert(make_user("a@x.com", false));

    let response = t
        .app
        .oneshot(request(Method::DELETE, &format!("/{id}"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let stored = t.users.stored(id).unwrap();
    assert_eq!(stored.status, photark_db::UserStatus::Deleted);
}

#[tokio::test]
async fn test_delete_rejects_malformed_body() {
    let t = test_app();
    let id = t.users.insert(make_user("a@x.com", false));

    let mut request = Request::builder()
        .method(Method::DELETE)
        .uri(format!("/{id}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"force\":"))
        .unwrap();
    request.extensions_mut().insert(admin_claims());

    let response = t.app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The truncated body must not fall back to a soft delete.
    let stored = t.users.stored(id).unwrap();
    assert_eq!(stored.status, photark_db::UserStatus::Active);
}

#[tokio::test]
async fn test_update_changes_fields() {
    let t = test_app();
    let id = t.users.insert(make_user("a@x.com", false));

    let response = t
        .app
        .oneshot(request(
            Method::PUT,
            &format!("/{id}"),
            Some(serde_json::json!({"name": "Renamed", "avatarColor": "green"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Renamed");
    assert_eq!(body["avatarColor"], "green");
}

#[tokio::test]
async fn test_create_delete_restore_lifecycle() {
    let t = test_app();

    // Create with notify and a forced password change.
    let response = t
        .app
        .clone()
        .oneshot(request(
            Method::POST,
            "/",
            Some(serde_json::json!({
                "email": "a@x.com",
                "password": "p1-password",
                "name": "A",
                "shouldChangePassword": true,
                "notify": true,
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["email"], "a@x.com");
    assert!(created.get("isAdmin").is_none());
    let id = created["id"].as_str().unwrap().to_string();

    // Soft delete.
    let response = t
        .app
        .clone()
        .oneshot(request(
            Method::DELETE,
            &format!("/{id}"),
            Some(serde_json::json!({"force": false})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Deleted user only visible with withDeleted.
    let response = t
        .app
        .clone()
        .oneshot(request(Method::GET, "/?withDeleted=false", None))
        .await
        .unwrap();
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 0);

    let response = t
        .app
        .clone()
        .oneshot(request(Method::GET, "/?withDeleted=true", None))
        .await
        .unwrap();
    let listed = body_json(response).await;
    assert_eq!(listed[0]["status"], "deleted");
    assert!(!listed[0]["deletedAt"].is_null());

    // Restore.
    let response = t
        .app
        .clone()
        .oneshot(request(Method::POST, &format!("/{id}/restore"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = t
        .app
        .clone()
        .oneshot(request(Method::GET, &format!("/{id}"), None))
        .await
        .unwrap();
    let fetched = body_json(response).await;
    assert_eq!(fetched["status"], "active");
    assert!(fetched["deletedAt"].is_null());
}
