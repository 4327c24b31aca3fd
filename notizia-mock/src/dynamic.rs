use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use notizia_core::connector::{ArticlesProvider, NotiziaConnector};
use notizia_core::{Article, ArticlesRequest, NotiziaError};

type ArticlesFn = dyn Fn(&ArticlesRequest) -> Result<Vec<Article>, NotiziaError> + Send + Sync;

/// Scriptable connector used by integration tests.
///
/// Responses come from a closure, optionally after simulated latency; every
/// upstream call is counted so tests can assert on cache and coalescing
/// behavior.
pub struct DynamicConnector {
    name: &'static str,
    delay: Option<Duration>,
    articles_fn: Arc<ArticlesFn>,
    calls: AtomicUsize,
}

impl DynamicConnector {
    /// Start building a scripted connector.
    #[must_use]
    pub fn builder() -> DynamicConnectorBuilder {
        DynamicConnectorBuilder::default()
    }

    /// Number of `articles` calls that reached this connector.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Builder for [`DynamicConnector`].
pub struct DynamicConnectorBuilder {
    name: &'static str,
    delay: Option<Duration>,
    articles_fn: Arc<ArticlesFn>,
}

impl Default for DynamicConnectorBuilder {
    fn default() -> Self {
        Self {
            name: "notizia-dynamic",
            delay: None,
            articles_fn: Arc::new(|_| Ok(Vec::new())),
        }
    }
}

impl DynamicConnectorBuilder {
    /// Override the connector name reported to the orchestrator.
    #[must_use]
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Sleep this long before answering each call.
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Script the article response per request.
    #[must_use]
    pub fn articles_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&ArticlesRequest) -> Result<Vec<Article>, NotiziaError> + Send + Sync + 'static,
    {
        self.articles_fn = Arc::new(f);
        self
    }

    /// Finish building; wrap in `Arc` for registration.
    #[must_use]
    pub fn build(self) -> Arc<DynamicConnector> {
        Arc::new(DynamicConnector {
            name: self.name,
            delay: self.delay,
            articles_fn: self.articles_fn,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl NotiziaConnector for DynamicConnector {
    fn name(&self) -> &'static str {
        self.name
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_articles_provider(&self) -> Option<&dyn ArticlesProvider> {
        Some(self as &dyn ArticlesProvider)
    }
}

#[async_trait]
impl ArticlesProvider for DynamicConnector {
    async fn articles(&self, req: &ArticlesRequest) -> Result<Vec<Article>, NotiziaError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            sleep(delay).await;
        }
        (self.articles_fn)(req)
    }
}
