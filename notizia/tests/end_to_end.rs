use std::sync::Arc;

use httpmock::prelude::*;
use serde_json::json;

use notizia::{CacheConfig, FeedQuery, Notizia, NotiziaError};
use notizia_http::HttpConnector;

fn client_for(server: &MockServer) -> Notizia {
    let http = HttpConnector::builder()
        .endpoint(server.url("/analyze"))
        .build()
        .unwrap();
    Notizia::builder()
        .connector(Arc::new(http))
        .with_cache(&CacheConfig::default())
        .build()
        .unwrap()
}

#[tokio::test]
async fn identical_queries_cost_one_round_trip() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/analyze")
                .json_body(json!({"search": "ai | energy"}));
            then.status(200).json_body(json!({
                "articles": [{"title": "fusion milestone", "vader": {"compound": 0.5}}]
            }));
        })
        .await;

    let client = client_for(&server);
    let first = client.articles(&FeedQuery::search("ai, energy")).await.unwrap();
    let second = client.articles(&FeedQuery::search("ai,energy")).await.unwrap();

    assert_eq!(mock.hits_async().await, 1);
    assert_eq!(first, second);
    assert_eq!(first[0].title.as_deref(), Some("fusion milestone"));
}

#[tokio::test]
async fn http_failure_surfaces_and_key_stays_uncached() {
    let server = MockServer::start_async().await;
    let failing = server
        .mock_async(|when, then| {
            when.method(POST).path("/analyze");
            then.status(500).body("boom");
        })
        .await;

    let client = client_for(&server);
    let err = client.articles(&FeedQuery::country("us")).await.unwrap_err();
    assert_eq!(err, NotiziaError::http(500));

    // Endpoint recovers; the next trigger goes upstream instead of replaying
    // the failure from cache
    failing.delete_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/analyze");
            then.status(200).json_body(json!({"articles": []}));
        })
        .await;

    let articles = client.articles(&FeedQuery::country("us")).await.unwrap();
    assert!(articles.is_empty());
}
