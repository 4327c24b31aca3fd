//! Configuration types shared across the facade and middleware layers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global configuration for the `Notizia` feed client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Country code used when a query carries neither search text nor a country.
    pub default_country: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            default_country: "us".to_string(),
        }
    }
}

/// Configuration for the per-query article cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of distinct queries retained; least recently used
    /// entries are evicted beyond this.
    pub max_entries: usize,
    /// Optional time-to-live per entry. `None` means entries never expire
    /// and live for the whole process, matching the manual-refresh usage
    /// pattern of the feed.
    pub ttl: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 256,
            ttl: None,
        }
    }
}
