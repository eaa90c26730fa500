mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use login_gate::routes::app_router;
use tower::ServiceExt;

#[tokio::test]
async fn test_unknown_path_returns_structured_404() {
    let app = app_router(common::create_test_state(), false);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["path"], "/does-not-exist");
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let app = app_router(common::create_test_state(), false);

    let response = app
        .oneshot(Request::builder().uri("/health/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
