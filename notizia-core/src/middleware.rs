//! Middleware trait for wrapping `NotiziaConnector` implementations.

use std::sync::Arc;

use crate::connector::NotiziaConnector;

/// Trait implemented by connector middleware layers.
///
/// A middleware consumes an inner `NotiziaConnector` and returns a wrapped
/// connector that augments behavior (e.g., caching, request coalescing).
pub trait Middleware: Send + Sync {
    /// Apply this middleware to wrap an inner connector and return the wrapped connector.
    fn apply(self: Box<Self>, inner: Arc<dyn NotiziaConnector>) -> Arc<dyn NotiziaConnector>;

    /// Human-readable middleware name for introspection/logging.
    fn name(&self) -> &'static str;

    /// Opaque configuration snapshot for serialization/inspection.
    fn config_json(&self) -> serde_json::Value;
}
