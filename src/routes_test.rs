use axum::body::{self, Body};
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn site_with_bundle() -> PathBuf {
    let root = std::env::temp_dir().join(format!("market-admin-site-{}", std::process::id()));
    std::fs::create_dir_all(root.join("pkg")).expect("pkg dir");
    std::fs::write(root.join("pkg").join("market-admin.css"), "body{}").expect("css");
    root
}

#[tokio::test]
async fn healthz_reports_ok() {
    let app = static_routes(Path::new("missing-site"));
    let request = Request::get("/healthz").body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn pkg_serves_files_from_site_root() {
    let root = site_with_bundle();
    let app = static_routes(&root);
    let request = Request::get("/pkg/market-admin.css").body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    assert_eq!(body.as_ref(), b"body{}");
}

#[tokio::test]
async fn missing_bundle_file_is_not_found() {
    let app = static_routes(Path::new("missing-site"));
    let request = Request::get("/pkg/nope.wasm").body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
