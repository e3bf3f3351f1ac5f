use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

#[tokio::test]
async fn healthz_returns_ok() {
    let router = static_routes(Path::new("target/site"));
    let response = router
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_pkg_asset_is_not_found() {
    let router = static_routes(Path::new("/nonexistent-inkly-site"));
    let response = router
        .oneshot(Request::builder().uri("/pkg/inkly.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
