use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use notizia_core::{ArticlesRequest, NotiziaConnector, NotiziaError};
use notizia_middleware::ConnectorBuilder;
use notizia_mock::DynamicConnector;
use notizia_types::CacheConfig;

#[tokio::test]
async fn errors_are_not_cached() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let attempts_in_fn = attempts.clone();
    let raw = DynamicConnector::builder()
        .articles_fn(move |_| {
            // First attempt fails, later ones succeed
            if attempts_in_fn.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(NotiziaError::http(502))
            } else {
                Ok(Vec::new())
            }
        })
        .build();
    let wrapped = ConnectorBuilder::new(raw.clone())
        .with_cache(&CacheConfig::default())
        .build();
    let provider = wrapped.as_articles_provider().unwrap();

    let req = ArticlesRequest::Country("us".into());
    let err = provider.articles(&req).await.unwrap_err();
    assert_eq!(err, NotiziaError::http(502));

    // A manual re-trigger reaches upstream again and its success is cached
    provider.articles(&req).await.unwrap();
    provider.articles(&req).await.unwrap();
    assert_eq!(raw.calls(), 2);
}

#[tokio::test]
async fn failure_leaves_earlier_success_in_place() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let attempts_in_fn = attempts.clone();
    let raw = DynamicConnector::builder()
        .articles_fn(move |_| {
            if attempts_in_fn.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(Vec::new())
            } else {
                Err(NotiziaError::Network("down".into()))
            }
        })
        .build();
    let cfg = CacheConfig {
        max_entries: 16,
        ttl: Some(std::time::Duration::from_millis(20)),
    };
    let wrapped = ConnectorBuilder::new(raw.clone()).with_cache(&cfg).build();
    let provider = wrapped.as_articles_provider().unwrap();

    let req = ArticlesRequest::Search("rust".into());
    provider.articles(&req).await.unwrap();

    // After expiry the refetch fails; the error surfaces rather than a stale merge
    tokio::time::sleep(std::time::Duration::from_millis(40)).await;
    let err = provider.articles(&req).await.unwrap_err();
    assert!(matches!(err, NotiziaError::Network(_)));
}
