//! UtilAPI lyrics Provider 集成测试（wiremock 模拟 API）

mod common;

use common::lyrics;
use serde_json::json;
use utilcli_provider::ProviderError;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn search_hits() -> serde_json::Value {
    json!({
        "status": "OK",
        "results": [
            { "title": "Yesterday", "artist": "The Beatles", "provider": "genius" },
            { "title": "Yesterday (Remastered)", "artist": "The Beatles", "provider": "ln" }
        ]
    })
}

#[tokio::test]
async fn test_search_then_fetch_plain_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/lyrics"))
        .and(query_param("q", "yesterday"))
        .and(query_param_is_missing("p"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_hits()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/lyrics/2"))
        .and(query_param("q", "yesterday"))
        .and(query_param("lyricsonly", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("Yesterday\nAll my troubles seemed so far away"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let env = require_ok!(lyrics(&server).search_lyrics("yesterday", None).await);
    let results = env.into_data().unwrap_or_default();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].provider_name, "genius");
    assert_eq!(results[1].body.index(), 2);

    let body = require_ok!(results[1].body.fetch().await);
    assert!(body.is_ok());
    assert!(
        body.data()
            .is_some_and(|text| text.starts_with("Yesterday\nAll my troubles"))
    );
}

#[tokio::test]
async fn test_search_sends_only_known_sources() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/lyrics"))
        .and(query_param("p", "genius"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_hits()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/lyrics"))
        .and(query_param("p", "azlyrics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_hits()))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/lyrics/1"))
        .and(query_param("p", "genius"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "lyrics": "Yesterday..."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let sources = vec!["azlyrics".to_string(), "genius".to_string()];
    let env = require_ok!(
        lyrics(&server)
            .search_lyrics("yesterday", Some(sources.as_slice()))
            .await
    );
    let results = env.into_data().unwrap_or_default();
    let first = require_some!(results.first());

    let body = require_ok!(first.body.fetch().await);
    assert_eq!(body.data().map(String::as_str), Some("Yesterday..."));
}

#[tokio::test]
async fn test_search_with_no_known_source_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let sources = vec!["azlyrics".to_string()];
    let err = lyrics(&server)
        .search_lyrics("yesterday", Some(sources.as_slice()))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::InvalidSource { .. }));
    assert!(err.is_expected());
}

#[tokio::test]
async fn test_search_refused_is_failed_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/lyrics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ERROR",
            "message": "No lyrics found"
        })))
        .mount(&server)
        .await;

    let env = require_ok!(lyrics(&server).search_lyrics("zzzz", None).await);
    assert!(!env.is_ok());
    assert_eq!(env.message(), Some("No lyrics found"));
}

#[tokio::test]
async fn test_fetch_refused_is_failed_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/lyrics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_hits()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/lyrics/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ERROR",
            "message": "Result expired"
        })))
        .mount(&server)
        .await;

    let env = require_ok!(lyrics(&server).search_lyrics("yesterday", None).await);
    let results = env.into_data().unwrap_or_default();
    let first = require_some!(results.first());

    let body = require_ok!(first.body.fetch().await);
    assert!(!body.is_ok());
    assert_eq!(body.message(), Some("Result expired"));
}

#[tokio::test]
async fn test_search_malformed_response_is_request_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/lyrics"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = lyrics(&server)
        .search_lyrics("yesterday", None)
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::RequestFailed { .. }));
}
