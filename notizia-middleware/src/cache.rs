use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::Mutex;

use notizia_core::connector::{ArticlesProvider, NotiziaConnector};
use notizia_core::{Article, ArticlesRequest, CacheConfig, Middleware, NotiziaError};

struct Entry {
    value: Arc<Vec<Article>>,
    expires_at: Option<Instant>,
}

/// LRU store for article lists, with optional per-entry TTL.
struct ArticleStore {
    inner: Mutex<LruCache<ArticlesRequest, Entry>>,
    ttl: Option<Duration>,
}

impl ArticleStore {
    fn new(cfg: &CacheConfig) -> Self {
        // A zero capacity collapses to one entry rather than panicking.
        let cap = std::num::NonZeroUsize::new(cfg.max_entries).unwrap_or(std::num::NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(cap)),
            ttl: cfg.ttl,
        }
    }

    async fn get(&self, key: &ArticlesRequest) -> Option<Arc<Vec<Article>>> {
        let mut guard = self.inner.lock().await;
        if let Some(entry) = guard.get(key)
            && entry.expires_at.is_none_or(|t| Instant::now() <= t)
        {
            return Some(Arc::clone(&entry.value));
        }
        // Absent or expired; pop so the next fetch repopulates
        guard.pop(key);
        None
    }

    async fn put(&self, key: ArticlesRequest, value: Arc<Vec<Article>>) {
        let expires_at = self.ttl.map(|ttl| Instant::now() + ttl);
        let mut guard = self.inner.lock().await;
        guard.put(key, Entry { value, expires_at });
    }
}

/// Declarative wrapper that applies caching when building a connector stack.
pub struct CacheMiddleware {
    cfg: CacheConfig,
}

impl CacheMiddleware {
    /// Capture a cache configuration for later application.
    #[must_use]
    pub const fn new(cfg: CacheConfig) -> Self {
        Self { cfg }
    }
}

impl Middleware for CacheMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn NotiziaConnector>) -> Arc<dyn NotiziaConnector> {
        let Self { cfg } = *self;
        Arc::new(CachingConnector::new(inner, &cfg))
    }

    fn name(&self) -> &'static str {
        "CachingMiddleware"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "max_entries": self.cfg.max_entries,
            "ttl_ms": self.cfg.ttl.map(|t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX)),
        })
    }
}

/// Connector wrapper that memoizes successful article responses per query.
///
/// Contract:
/// - The cached list for a key is exactly the last successful response body
///   for that key; errors pass through and never touch the store.
/// - Concurrent callers for the same key are coalesced: they serialize on a
///   per-key lock, the first populates the store, the rest hit it. Distinct
///   keys proceed independently.
pub struct CachingConnector {
    inner: Arc<dyn NotiziaConnector>,
    store: ArticleStore,
    locks: Mutex<HashMap<ArticlesRequest, Arc<Mutex<()>>>>,
}

impl CachingConnector {
    /// Wrap `inner` with a cache sized and aged per `cfg`.
    #[must_use]
    pub fn new(inner: Arc<dyn NotiziaConnector>, cfg: &CacheConfig) -> Self {
        Self {
            inner,
            store: ArticleStore::new(cfg),
            locks: Mutex::new(HashMap::new()),
        }
    }

    async fn entry_lock(&self, key: &ArticlesRequest) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        Arc::clone(
            locks
                .entry(key.clone())
                .or_insert_with(|| Arc::new(Mutex::new(()))),
        )
    }

    async fn release_entry_lock(&self, key: &ArticlesRequest, lock: &Arc<Mutex<()>>) {
        let mut locks = self.locks.lock().await;
        // Registry handle plus ours: nobody else is waiting on this key.
        // Cloning only happens under the registry mutex we hold, so the
        // count cannot grow before the remove.
        if Arc::strong_count(lock) == 2 {
            locks.remove(key);
        }
    }

    async fn fetch_through(&self, req: &ArticlesRequest) -> Result<Vec<Article>, NotiziaError> {
        if let Some(v) = self.store.get(req).await {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "notizia::cache", key = %req, "cache hit");
            return Ok((*v).clone());
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "notizia::cache", key = %req, "cache miss");
        let provider = self
            .inner
            .as_articles_provider()
            .ok_or_else(|| NotiziaError::unsupported("articles"))?;
        let value = provider.articles(req).await?;
        self.store
            .put(req.clone(), Arc::new(value.clone()))
            .await;
        Ok(value)
    }
}

#[async_trait]
impl ArticlesProvider for CachingConnector {
    async fn articles(&self, req: &ArticlesRequest) -> Result<Vec<Article>, NotiziaError> {
        let lock = self.entry_lock(req).await;
        let result = {
            let _guard = lock.lock().await;
            self.fetch_through(req).await
        };
        self.release_entry_lock(req, &lock).await;
        result
    }
}

#[async_trait]
impl NotiziaConnector for CachingConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    fn as_articles_provider(&self) -> Option<&dyn ArticlesProvider> {
        if self.inner.as_articles_provider().is_some() {
            Some(self as &dyn ArticlesProvider)
        } else {
            None
        }
    }
}
