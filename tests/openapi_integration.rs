// tests/openapi_integration.rs
use axum::http::StatusCode;
use serde_json::json;

mod support;

use support::{get_json, make_test_router};

/// ヘルスチェックが ok を返すことを確認する
#[tokio::test]
async fn health_endpoint_reports_ok() {
    let (app, _repo) = make_test_router();
    let (status, json) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "status": "ok" }));
}

/// OpenAPI ドキュメントに記事エンドポイントが含まれることを確認する
#[tokio::test]
async fn openapi_document_is_served() {
    let (app, _repo) = make_test_router();
    let (status, json) = get_json(&app, "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);

    let articles = &json["paths"]["/articles"];
    assert!(articles.get("get").is_some());
    assert!(articles.get("post").is_some());
    assert!(json["paths"].get("/health").is_some());
    assert!(json["components"]["schemas"].get("ArticleListDto").is_some());
}
