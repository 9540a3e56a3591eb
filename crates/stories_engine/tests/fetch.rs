use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use stories_engine::{FailureKind, FetchSettings, Fetcher, ReqwestFetcher, SearchHit};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> FetchSettings {
    FetchSettings {
        endpoint: format!("{}/api/v1/search", server.uri()),
        ..FetchSettings::default()
    }
}

#[tokio::test]
async fn fetcher_decodes_hits_and_sends_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .and(query_param("query", "react hooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": [
                {
                    "objectID": "42",
                    "title": "React hooks",
                    "url": "https://example.com/hooks",
                    "author": "dan",
                    "num_comments": 7,
                    "points": 120,
                    "created_at": "2019-02-06T00:00:00Z"
                },
                { "objectID": "43", "title": null, "points": null }
            ],
            "nbHits": 2
        })))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server));
    let hits = fetcher.search("react hooks").await.expect("search ok");

    assert_eq!(
        hits,
        vec![
            SearchHit {
                object_id: "42".to_string(),
                title: Some("React hooks".to_string()),
                url: Some("https://example.com/hooks".to_string()),
                author: Some("dan".to_string()),
                num_comments: Some(7),
                points: Some(120),
            },
            SearchHit {
                object_id: "43".to_string(),
                title: None,
                url: None,
                author: None,
                num_comments: None,
                points: None,
            },
        ]
    );
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server));
    let err = fetcher.search("react").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn fetcher_reports_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"results": []}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server));
    let err = fetcher.search("react").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedResponse);
}

#[tokio::test]
async fn fetcher_decodes_json_served_as_plain_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"hits":[{"objectID":"1","title":"React"}]}"#,
            "text/plain; charset=utf-8",
        ))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(settings_for(&server));
    let hits = fetcher.search("react").await.expect("search ok");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].object_id, "1");
    assert_eq!(hits[0].title.as_deref(), Some("React"));
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "hits": [] })),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let fetcher = ReqwestFetcher::new(settings);
    let err = fetcher.search("react").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"hits": [], "pad": "xxxx"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..settings_for(&server)
    };
    let fetcher = ReqwestFetcher::new(settings);
    let err = fetcher.search("react").await.unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 10, .. }
    ));
}

#[test]
fn search_url_encodes_query() {
    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = fetcher.search_url("rust & go").unwrap();
    assert_eq!(
        url.as_str(),
        "https://hn.algolia.com/api/v1/search?query=rust+%26+go"
    );
}

#[test]
fn invalid_endpoint_is_reported() {
    let fetcher = ReqwestFetcher::new(FetchSettings {
        endpoint: "not a url".to_string(),
        ..FetchSettings::default()
    });
    let err = fetcher.search_url("react").unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
