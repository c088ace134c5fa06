// tests/support/helpers.rs
use super::mocks::SteppingClock;
use articles_api::application::ports::time::Clock;
use articles_api::application::services::ApplicationServices;
use articles_api::domain::article::{ArticleReadRepository, ArticleWriteRepository, NewArticle};
use articles_api::infrastructure::repositories::InMemoryArticleRepository;
use articles_api::presentation::http::{
    routes::build_router_with_rate_limiter, state::HttpState,
};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub fn build_test_state(
    write: Arc<dyn ArticleWriteRepository>,
    read: Arc<dyn ArticleReadRepository>,
) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(SteppingClock::default());
    let services = Arc::new(ApplicationServices::new(write, read, clock));
    HttpState::new(services)
}

pub fn router_for(state: HttpState) -> axum::Router {
    build_router_with_rate_limiter(state, &["http://localhost:3000".to_string()], false)
}

/// 空のインメモリストアを持つルーターとリポジトリを返す
pub fn make_test_router() -> (axum::Router, InMemoryArticleRepository) {
    let repo = InMemoryArticleRepository::new();
    let state = build_test_state(Arc::new(repo.clone()), Arc::new(repo.clone()));
    (router_for(state), repo)
}

/// 与えられた (タイトル, ステータス) で記事を順に作成したルーターを返す。
/// `created_at` は作成順に 1 分ずつ進む。
pub async fn make_seeded_router(seed: &[(&str, &str)]) -> axum::Router {
    let (app, repo) = make_test_router();
    for (n, (title, status)) in seed.iter().enumerate() {
        let article = NewArticle::validate(
            Some((*title).to_string()),
            Some(format!("body of {title}")),
            Some((*status).to_string()),
            SteppingClock::at(i64::try_from(n).unwrap()),
        )
        .expect("valid seed article");
        repo.insert(article).await.expect("seed insert");
    }
    app
}

pub async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let json: Value = serde_json::from_slice(&bytes).expect("expected valid json body");
    (status, json)
}

pub async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub async fn post_json(app: &axum::Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

/// クエリパラメータを URL エンコードして `/articles` の URI を組み立てる
pub fn articles_uri(params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return "/articles".to_string();
    }
    let query = serde_urlencoded::to_string(params).expect("encode query");
    format!("/articles?{query}")
}

pub fn titles(json: &Value) -> Vec<String> {
    json["articles"]
        .as_array()
        .expect("articles array")
        .iter()
        .map(|a| a["title"].as_str().unwrap_or_default().to_string())
        .collect()
}
