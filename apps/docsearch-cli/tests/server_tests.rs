use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;

use docsearch_cli::server::{bind, router, AppState};
use docsearch_core::config::Settings;
use docsearch_core::types::{IndexConfig, RawDocument, SearchHit};
use docsearch_text::{SearchEngine, SiteIndex};

fn server_with(settings: Settings) -> TestServer {
    let docs = vec![
        RawDocument::new("a", "Burgers", "<p>burgers equation</p>"),
        RawDocument::new("b", "Networks", "<p>neural network</p>"),
        RawDocument::new("c", "Flow", "viscous flow"),
    ];
    let engine = SearchEngine::new(SiteIndex::load(IndexConfig::default(), docs).unwrap());
    let state = AppState::new(Arc::new(engine), settings.search);
    TestServer::new(router(state)).unwrap()
}

fn server() -> TestServer {
    server_with(Settings::default())
}

#[tokio::test]
async fn search_returns_ranked_hits() {
    let server = server();
    let response = server.get("/search").add_query_param("q", "network burgers").await;

    response.assert_status_ok();
    let hits: Vec<SearchHit> = response.json();
    let locations: Vec<&str> = hits.iter().map(|h| h.location.as_str()).collect();
    assert_eq!(locations, vec!["a", "b"]);
    assert_eq!(hits[0].title, "Burgers");
    assert_eq!(hits[0].snippet, "burgers equation");
    // title and text both contain the term
    assert_eq!(hits[0].score, 2);
}

#[tokio::test]
async fn empty_query_is_an_empty_array() {
    let server = server();
    let hits: Vec<SearchHit> = server.get("/search").add_query_param("q", "").await.json();
    assert!(hits.is_empty());

    let missing: Vec<SearchHit> = server.get("/search").await.json();
    assert!(missing.is_empty());

    let stop_words: Vec<SearchHit> = server.get("/search").add_query_param("q", "the and").await.json();
    assert!(stop_words.is_empty());
}

#[tokio::test]
async fn limit_is_clamped_to_max() {
    let mut settings = Settings::default();
    settings.search.default_limit = 1;
    settings.search.max_limit = 2;
    let server = server_with(settings);

    let by_default: Vec<SearchHit> = server.get("/search").add_query_param("q", "b f n").await.json();
    assert_eq!(by_default.len(), 1);

    let clamped: Vec<SearchHit> = server
        .get("/search")
        .add_query_param("q", "b f n")
        .add_query_param("limit", "50")
        .await
        .json();
    assert_eq!(clamped.len(), 2);
}

#[tokio::test]
async fn invalid_limit_is_a_json_bad_request() {
    let server = server();
    let response = server
        .get("/search")
        .add_query_param("q", "flow")
        .add_query_param("limit", "lots")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn health_reports_document_count() {
    let server = server();
    let body: serde_json::Value = server.get("/health").await.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["documents"], 3);
}

#[tokio::test]
async fn binds_by_host_name() {
    let listener = bind("localhost", 0).await.expect("localhost resolves");
    assert!(listener.local_addr().unwrap().ip().is_loopback());
}
