//! notizia-core
//!
//! Core traits and re-exported types shared across the notizia ecosystem.
//!
//! - `connector`: the `NotiziaConnector` trait and the `ArticlesProvider`
//!   capability trait.
//! - `middleware`: the `Middleware` trait implemented by connector wrappers.
//!
//! Async runtime (Tokio)
//! ---------------------
//! This crate assumes the Tokio ecosystem as the async runtime: connector
//! methods are `async_trait` futures, and the middleware crate relies on
//! `tokio::sync` primitives. Code consuming these traits must run under a
//! Tokio 1.x runtime.
#![warn(missing_docs)]

/// The `NotiziaConnector` trait and capability provider traits.
pub mod connector;
/// Middleware trait implemented by connector wrappers.
pub mod middleware;

pub use connector::{ArticlesProvider, NotiziaConnector};
pub use middleware::Middleware;

pub use notizia_types::{
    Article, ArticlesRequest, CacheConfig, ClassifierScore, FeedConfig, FeedQuery, LexiconScore,
    NotiziaError, Sentiment, SentimentSplit, sentiment,
};
