//! notizia-http
//!
//! Public connector that implements `NotiziaConnector` over a remote
//! JSON-over-HTTP sentiment-analysis endpoint. One request per call, no
//! retries; failures surface as `NotiziaError` values for the caller to
//! re-trigger manually.
#![warn(missing_docs)]

/// Builder for configuring the HTTP connector.
pub mod builder;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use notizia_core::connector::{ArticlesProvider, NotiziaConnector};
use notizia_core::{Article, ArticlesRequest, NotiziaError};

pub use builder::HttpConnectorBuilder;

/// Wire envelope of the endpoint response. The `articles` field may be
/// missing or null, which counts as an empty result rather than an error.
#[derive(Deserialize)]
struct ArticlesEnvelope {
    #[serde(default)]
    articles: Option<Vec<Article>>,
}

/// Connector backed by a remote sentiment-analysis endpoint.
#[derive(Debug)]
pub struct HttpConnector {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpConnector {
    /// Start configuring a connector.
    #[must_use]
    pub fn builder() -> HttpConnectorBuilder {
        HttpConnectorBuilder::new()
    }

    pub(crate) const fn from_parts(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    /// Endpoint this connector talks to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn transport_error(e: &reqwest::Error) -> NotiziaError {
        NotiziaError::Network(e.to_string())
    }
}

#[async_trait]
impl NotiziaConnector for HttpConnector {
    fn name(&self) -> &'static str {
        "notizia-http"
    }

    fn vendor(&self) -> &'static str {
        "NewsSentimentAnalysis"
    }

    fn as_articles_provider(&self) -> Option<&dyn ArticlesProvider> {
        Some(self as &dyn ArticlesProvider)
    }
}

#[async_trait]
impl ArticlesProvider for HttpConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "notizia::http", skip(self), fields(key = %req))
    )]
    async fn articles(&self, req: &ArticlesRequest) -> Result<Vec<Article>, NotiziaError> {
        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(req)
            .send()
            .await
            .map_err(|e| Self::transport_error(&e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(NotiziaError::http(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| Self::transport_error(&e))?;
        let envelope: ArticlesEnvelope =
            serde_json::from_str(&body).map_err(|e| NotiziaError::Parse(e.to_string()))?;

        let articles = envelope.articles.unwrap_or_default();
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "notizia::http", count = articles.len(), "fetched articles");
        Ok(articles)
    }
}
