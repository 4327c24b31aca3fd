use async_trait::async_trait;

use notizia_types::{Article, ArticlesRequest, NotiziaError};

/// Focused role trait for connectors that provide sentiment-annotated articles.
#[async_trait]
pub trait ArticlesProvider: Send + Sync {
    /// Fetch the ordered article list for a normalized query.
    ///
    /// The returned list is the complete response for this request; callers
    /// never merge partial results across calls.
    async fn articles(&self, req: &ArticlesRequest) -> Result<Vec<Article>, NotiziaError>;
}

/// Main connector trait implemented by source crates. Exposes capability discovery.
#[async_trait]
pub trait NotiziaConnector: Send + Sync {
    /// A stable identifier, e.g. "notizia-http", "notizia-mock".
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise article capability by returning a usable trait object
    /// reference when supported.
    fn as_articles_provider(&self) -> Option<&dyn ArticlesProvider> {
        None
    }
}
