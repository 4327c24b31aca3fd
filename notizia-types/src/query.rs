use serde::{Deserialize, Serialize};

use crate::config::FeedConfig;

/// Raw user selection: a country code, a free-text search, or both.
///
/// `FeedQuery` is what callers construct; [`FeedQuery::normalize`] turns it
/// into the canonical [`ArticlesRequest`] that connectors and caches work
/// with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeedQuery {
    /// Two-letter country code, e.g. "us".
    pub country: Option<String>,
    /// Free-text search; comma- or pipe-separated terms are accepted.
    pub search: Option<String>,
}

impl FeedQuery {
    /// Query by country code.
    #[must_use]
    pub fn country(code: impl Into<String>) -> Self {
        Self {
            country: Some(code.into()),
            search: None,
        }
    }

    /// Query by free-text search.
    #[must_use]
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            country: None,
            search: Some(text.into()),
        }
    }

    /// Canonicalize into an [`ArticlesRequest`].
    ///
    /// Non-empty search text wins over the country selection. A
    /// comma-separated term list is rewritten to a `" | "`-joined one unless
    /// the text already contains a pipe, in which case it passes through
    /// untouched. With no search text the country is used, falling back to
    /// [`FeedConfig::default_country`].
    #[must_use]
    pub fn normalize(&self, cfg: &FeedConfig) -> ArticlesRequest {
        let search = self.search.as_deref().map_or("", str::trim);
        if search.is_empty() {
            let country = self
                .country
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .unwrap_or(&cfg.default_country);
            return ArticlesRequest::Country(country.to_string());
        }
        if search.contains(',') && !search.contains('|') {
            let joined = search
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" | ");
            return ArticlesRequest::Search(joined);
        }
        ArticlesRequest::Search(search.to_string())
    }
}

/// Canonical, normalized article query.
///
/// Serializes to exactly the JSON body the remote endpoint expects
/// (`{"country": ...}` or `{"search": ...}`), and doubles as the cache key:
/// two requests that compare equal are never fetched twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticlesRequest {
    /// Top headlines for a country code.
    Country(String),
    /// Free-text search, terms pipe-separated.
    Search(String),
}

impl std::fmt::Display for ArticlesRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Country(c) => write!(f, "country={c}"),
            Self::Search(s) => write!(f, "search={s}"),
        }
    }
}
