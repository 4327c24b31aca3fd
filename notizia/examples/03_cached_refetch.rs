mod common;
use common::get_connector;
use notizia::{CacheConfig, FeedQuery, Notizia};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let connector = get_connector();
    let client = Notizia::builder()
        .connector(connector)
        .with_cache(&CacheConfig::default())
        .build()?;

    let query = FeedQuery::country("us");

    let started = std::time::Instant::now();
    let first = client.articles(&query).await?;
    println!("first fetch: {} article(s) in {:?}", first.len(), started.elapsed());

    // Identical selection: served from cache, no second round trip.
    let started = std::time::Instant::now();
    let second = client.articles(&query).await?;
    println!("re-fetch:    {} article(s) in {:?}", second.len(), started.elapsed());

    assert_eq!(first, second);
    Ok(())
}
