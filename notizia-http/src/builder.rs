use std::time::Duration;

use url::Url;

use notizia_core::NotiziaError;

use crate::HttpConnector;

/// Builder for [`HttpConnector`].
///
/// The endpoint URL is the only required piece. No request timeout is set
/// unless asked for; a slow endpoint simply keeps the request in flight
/// until it settles.
#[derive(Default)]
pub struct HttpConnectorBuilder {
    endpoint: Option<String>,
    client: Option<reqwest::Client>,
    timeout: Option<Duration>,
}

impl HttpConnectorBuilder {
    /// Fresh builder with no endpoint configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint URL the connector will POST to.
    #[must_use]
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Supply a pre-configured `reqwest::Client`. Overrides `timeout`.
    #[must_use]
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Bound each request by a timeout. Ignored when a custom client is supplied.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finish building the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the endpoint is missing or not a valid URL,
    /// or when the HTTP client cannot be constructed.
    pub fn build(self) -> Result<HttpConnector, NotiziaError> {
        let raw = self
            .endpoint
            .ok_or_else(|| NotiziaError::InvalidArg("endpoint URL is required".to_string()))?;
        let endpoint = Url::parse(&raw)
            .map_err(|e| NotiziaError::InvalidArg(format!("invalid endpoint URL: {e}")))?;

        let http = match self.client {
            Some(client) => client,
            None => {
                let mut b = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    b = b.timeout(timeout);
                }
                b.build()
                    .map_err(|e| NotiziaError::InvalidArg(format!("http client: {e}")))?
            }
        };

        Ok(HttpConnector::from_parts(http, endpoint))
    }
}
