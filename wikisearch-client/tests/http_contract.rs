//! HTTP contract tests for the search backend client.
//!
//! A local `wiremock` server stands in for the backend. These tests pin
//! the request shape (method, path, decoded query parameter, request count)
//! and the mapping of responses onto hits or [`SearchError`] variants.

use serde_json::json;
use wikisearch_client::{
    ArticleHit, ClientConfig, HttpBackend, Query, SearchBackend, SearchError, SearchScope,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> HttpBackend {
    HttpBackend::new(&ClientConfig::with_origin(server.uri())).expect("valid config")
}

// ────────────────────────────────────────────────────────────────────────────
// Request shape
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn issues_one_get_with_trimmed_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", "black cat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let query = Query::new("   black cat  ").expect("non-empty");
    let hits = backend.search(&query).await.expect("search succeeds");
    assert!(hits.is_empty());
}

#[tokio::test]
async fn reserved_characters_survive_encoding() {
    let server = MockServer::start().await;
    let raw = "AT&T + R&D = 100% ?#/";

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", raw))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([[1, "AT&T"]])))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let hits = backend
        .search(&Query::new(raw).expect("non-empty"))
        .await
        .expect("search succeeds");
    assert_eq!(hits, vec![ArticleHit::new(1, "AT&T")]);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let sent: Vec<(String, String)> = requests[0].url.query_pairs().into_owned().collect();
    assert_eq!(sent, vec![("query".to_string(), raw.to_string())]);
}

#[tokio::test]
async fn scope_selects_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search_anchor"))
        .and(query_param("query", "rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([[25_000, "Rust"]])))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig {
        scope: SearchScope::Anchor,
        ..ClientConfig::with_origin(server.uri())
    };
    let hits = wikisearch_client::search("rust", &config)
        .await
        .expect("search succeeds");
    assert_eq!(hits, vec![ArticleHit::new(25_000, "Rust")]);
}

#[tokio::test]
async fn blank_query_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let config = ClientConfig::with_origin(server.uri());
    let result = wikisearch_client::search(" \t ", &config).await;
    assert!(matches!(result, Err(SearchError::EmptyQuery)));
}

// ────────────────────────────────────────────────────────────────────────────
// Response mapping
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn decodes_hits_in_backend_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            [39201, "Cat"],
            ["6678", "Felidae"],
            [17, null]
        ])))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let hits = backend
        .search(&Query::new("cat").expect("non-empty"))
        .await
        .expect("search succeeds");
    assert_eq!(
        hits,
        vec![
            ArticleHit::new(39201, "Cat"),
            ArticleHit::new(6678, "Felidae"),
            ArticleHit::new(17, ""),
        ]
    );
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend
        .search(&Query::new("cat").expect("non-empty"))
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::Status(500)));
    assert!(!err.is_user_correctable());
}

#[tokio::test]
async fn not_found_maps_to_status() {
    let server = MockServer::start().await;

    let config = ClientConfig {
        scope: SearchScope::Body,
        ..ClientConfig::with_origin(server.uri())
    };
    let backend = HttpBackend::new(&config).expect("valid config");
    let err = backend
        .search(&Query::new("cat").expect("non-empty"))
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::Status(404)));
}

#[tokio::test]
async fn html_body_maps_to_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend
        .search(&Query::new("cat").expect("non-empty"))
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::Decode(_)));
}

#[tokio::test]
async fn unreachable_backend_maps_to_http_error() {
    // Bind an ephemeral port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    let uri = format!("http://127.0.0.1:{port}");

    let backend = HttpBackend::new(&ClientConfig::with_origin(uri)).expect("valid config");
    let err = backend
        .search(&Query::new("cat").expect("non-empty"))
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::Http(_)), "got {err:?}");
}
