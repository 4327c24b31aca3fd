use std::time::Duration;

use notizia_core::{ArticlesRequest, NotiziaConnector};
use notizia_middleware::ConnectorBuilder;
use notizia_mock::DynamicConnector;
use notizia_types::CacheConfig;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_identical_requests_share_one_upstream_call() {
    let raw = DynamicConnector::builder()
        .delay(Duration::from_millis(80))
        .articles_fn(|_| Ok(Vec::new()))
        .build();
    let wrapped = ConnectorBuilder::new(raw.clone())
        .with_cache(&CacheConfig::default())
        .build();

    let req = ArticlesRequest::Country("us".into());
    let tasks: Vec<_> = (0..4)
        .map(|_| {
            let conn = wrapped.clone();
            let req = req.clone();
            tokio::spawn(async move {
                conn.as_articles_provider()
                    .unwrap()
                    .articles(&req)
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut results = Vec::new();
    for t in tasks {
        results.push(t.await.unwrap());
    }

    assert_eq!(raw.calls(), 1, "concurrent identical triggers must coalesce");
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn distinct_keys_are_not_serialized_against_each_other() {
    let raw = DynamicConnector::builder()
        .delay(Duration::from_millis(50))
        .articles_fn(|_| Ok(Vec::new()))
        .build();
    let wrapped = ConnectorBuilder::new(raw.clone())
        .with_cache(&CacheConfig::default())
        .build();

    let us = {
        let conn = wrapped.clone();
        tokio::spawn(async move {
            conn.as_articles_provider()
                .unwrap()
                .articles(&ArticlesRequest::Country("us".into()))
                .await
                .unwrap();
        })
    };
    let de = {
        let conn = wrapped.clone();
        tokio::spawn(async move {
            conn.as_articles_provider()
                .unwrap()
                .articles(&ArticlesRequest::Country("de".into()))
                .await
                .unwrap();
        })
    };

    let started = std::time::Instant::now();
    us.await.unwrap();
    de.await.unwrap();

    assert_eq!(raw.calls(), 2);
    // Both ran while the other was in flight; a serialized run would take ~2x
    assert!(started.elapsed() < Duration::from_millis(95));
}
