//! Notizia fetches sentiment-annotated news articles through pluggable
//! connectors.
//!
//! Overview
//! - Normalizes a user selection (country code or free-text search) into a
//!   canonical request that doubles as the cache key.
//! - Routes the request to a connector implementing the `notizia_core`
//!   contracts and returns the article list as-is: the response for a query
//!   is always a complete replacement, never a merge.
//! - Optionally layers a per-query cache with in-flight request coalescing,
//!   so repeated and concurrent identical triggers cost one upstream call.
//! - Renders article lists into a pure [`view::FeedView`] description that
//!   front-ends can print or map onto their own widgets.
//!
//! Key behaviors and trade-offs
//! - One fetch is one HTTP round trip: no retries, no timeouts unless the
//!   connector is built with one. Failures come back as [`NotiziaError`]
//!   values and the caller decides when to re-trigger.
//! - Successful responses are memoized per normalized query; errors never
//!   touch the cache, so a failed fetch leaves the previous good result
//!   available to identical later queries.
//!
//! Examples
//! Building a client over the HTTP connector with caching:
//! ```rust,ignore
//! use std::sync::Arc;
//! use notizia::{CacheConfig, FeedQuery, Notizia};
//!
//! let http = Arc::new(
//!     notizia_http::HttpConnector::builder()
//!         .endpoint("https://example.com/NewsSentimentAnalysis")
//!         .build()?,
//! );
//! let client = Notizia::builder()
//!     .connector(http)
//!     .with_cache(&CacheConfig::default())
//!     .build()?;
//!
//! let articles = client.articles(&FeedQuery::search("ai, climate")).await?;
//! println!("{}", notizia::view::FeedView::from_articles(&articles));
//! ```
//!
//! See `notizia/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod feed;
/// Pure rendering of article lists into card descriptions.
pub mod view;

pub use core::{Notizia, NotiziaBuilder};

pub use notizia_middleware::{CacheMiddleware, ConnectorBuilder};

// Re-export core types for convenience
pub use notizia_core::{
    Article,
    ArticlesRequest,
    CacheConfig,
    ClassifierScore,
    FeedConfig,
    FeedQuery,
    LexiconScore,
    NotiziaConnector,
    NotiziaError,
    Sentiment,
    SentimentSplit,
};
