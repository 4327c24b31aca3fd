//! Builder for composing connectors with middleware layers.
//!
//! Middleware layers form an "onion" around the raw connector. The `layers`
//! vector stores middleware in outermost-first order, and `build()` applies
//! them in reverse so that `layers[0]` ends up wrapping everything else:
//!
//! ```text
//! builder.with_cache(..)
//!
//! Storage: [Cache]
//! Applied: Raw -> Cache
//! Result:  Cache(Raw)
//! ```

use std::sync::Arc;

use notizia_core::connector::NotiziaConnector;
use notizia_core::{CacheConfig, Middleware};

/// Generic middleware builder for composing a connector with layered wrappers.
pub struct ConnectorBuilder {
    raw: Arc<dyn NotiziaConnector>,
    /// Middleware layers in outermost-first order.
    layers: Vec<Box<dyn Middleware>>,
}

impl ConnectorBuilder {
    /// Create a new builder from a raw, unwrapped connector.
    #[must_use]
    pub fn new(raw: Arc<dyn NotiziaConnector>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Add or replace the caching layer.
    ///
    /// If cache middleware already exists, it is removed and replaced.
    #[must_use]
    pub fn with_cache(mut self, cfg: &CacheConfig) -> Self {
        self.layers.retain(|m| m.name() != "CachingMiddleware");
        self.layers
            .insert(0, Box::new(crate::cache::CacheMiddleware::new(cfg.clone())));
        self
    }

    /// Remove the caching layer if present.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.layers.retain(|m| m.name() != "CachingMiddleware");
        self
    }

    /// Add an arbitrary middleware layer at the outermost position.
    #[must_use]
    pub fn layer(mut self, layer: Box<dyn Middleware>) -> Self {
        self.layers.insert(0, layer);
        self
    }

    /// Build the wrapped connector according to the captured stack.
    ///
    /// Applies layers in reverse order (innermost to outermost) so the
    /// resulting connector processes requests outermost-first.
    #[must_use]
    pub fn build(self) -> Arc<dyn NotiziaConnector> {
        let mut acc: Arc<dyn NotiziaConnector> = Arc::clone(&self.raw);
        for m in self.layers.into_iter().rev() {
            acc = m.apply(acc);
        }
        acc
    }
}
