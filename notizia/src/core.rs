use std::sync::Arc;

use notizia_core::connector::NotiziaConnector;
use notizia_core::{CacheConfig, FeedConfig, NotiziaError};
use notizia_middleware::ConnectorBuilder;

/// Client that routes article requests to its registered connector.
pub struct Notizia {
    pub(crate) connector: Arc<dyn NotiziaConnector>,
    pub(crate) cfg: FeedConfig,
}

impl std::fmt::Debug for Notizia {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notizia")
            .field("connector", &self.connector.name())
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing a `Notizia` client with custom configuration.
pub struct NotiziaBuilder {
    connector: Option<Arc<dyn NotiziaConnector>>,
    cache: Option<CacheConfig>,
    cfg: FeedConfig,
}

impl Default for NotiziaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NotiziaBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Starts with no connector; you must register exactly one via
    /// [`connector`](Self::connector). No cache layer is applied unless
    /// requested, and the default country for empty queries is `"us"`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cache: None,
            cfg: FeedConfig::default(),
        }
    }

    /// Register the connector that serves article requests.
    ///
    /// Registering a second connector replaces the first; the client talks
    /// to a single source.
    #[must_use]
    pub fn connector(mut self, c: Arc<dyn NotiziaConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Layer a per-query cache (with in-flight coalescing) over the connector.
    ///
    /// Behavior and trade-offs:
    /// - Repeated identical queries are served from memory; the cached list
    ///   for a key is exactly the last successful response for that key.
    /// - With the default config entries never expire, matching a
    ///   manually-triggered feed; set [`CacheConfig::ttl`] to trade freshness
    ///   for fewer requests on long-running processes.
    #[must_use]
    pub fn with_cache(mut self, cfg: &CacheConfig) -> Self {
        self.cache = Some(cfg.clone());
        self
    }

    /// Replace the whole feed configuration.
    #[must_use]
    pub fn config(mut self, cfg: FeedConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the country used when a query carries neither search nor country.
    #[must_use]
    pub fn default_country(mut self, code: impl Into<String>) -> Self {
        self.cfg.default_country = code.into();
        self
    }

    /// Build the `Notizia` client.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector has been registered.
    pub fn build(self) -> Result<Notizia, NotiziaError> {
        let Some(raw) = self.connector else {
            return Err(NotiziaError::InvalidArg(
                "no connector registered; add one via connector(...)".to_string(),
            ));
        };

        let connector = match self.cache {
            Some(cache_cfg) => ConnectorBuilder::new(raw).with_cache(&cache_cfg).build(),
            None => raw,
        };

        Ok(Notizia {
            connector,
            cfg: self.cfg,
        })
    }
}

impl Notizia {
    /// Start building a new `Notizia` instance.
    #[must_use]
    pub fn builder() -> NotiziaBuilder {
        NotiziaBuilder::new()
    }

    /// Name of the connector serving this client.
    #[must_use]
    pub fn connector_name(&self) -> &'static str {
        self.connector.name()
    }

    /// Feed configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &notizia_core::FeedConfig {
        &self.cfg
    }
}
