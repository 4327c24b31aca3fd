//! Notizia-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod article;
mod config;
mod error;
mod query;
/// Sentiment classification and meter-formatting helpers.
pub mod sentiment;

pub use article::{Article, ClassifierScore, LexiconScore};
pub use config::{CacheConfig, FeedConfig};
pub use error::NotiziaError;
pub use query::{ArticlesRequest, FeedQuery};
pub use sentiment::{Sentiment, SentimentSplit};
