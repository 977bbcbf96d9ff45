use axum::{Router, body::Body, routing::get};
use http::{Request, StatusCode, header};
use tower::ServiceExt as _;
use uuid::Uuid;

use brewlog_auth::{Identity, TokenValidator};
use brewlog_testing::{MockAuth, TEST_SECRET};

async fn whoami(identity: Identity) -> String {
    identity.user_id
}

fn app() -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .with_state(TokenValidator::new(TEST_SECRET))
}

fn request(auth: Option<String>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/whoami");
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn should_reject_request_without_bearer() {
    let response = app().oneshot(request(None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["type"], "UNAUTHORIZED");
    assert_eq!(json["error"]["status_code"], 401);
}

#[tokio::test]
async fn should_reject_garbage_token() {
    let response = app()
        .oneshot(request(Some("Bearer not-a-jwt".to_owned())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_extract_subject_from_minted_token() {
    let user_id = Uuid::new_v4();
    let auth = MockAuth::new(user_id).with_email("alice@example.com");

    let response = app()
        .oneshot(request(Some(format!("Bearer {}", auth.token()))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(body, user_id.to_string().as_bytes());
}
