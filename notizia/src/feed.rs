use notizia_core::{Article, ArticlesRequest, FeedQuery, NotiziaError};

use crate::Notizia;

impl Notizia {
    /// Fetch sentiment-annotated articles for a user selection.
    ///
    /// The query is normalized first (search precedence, comma-to-pipe
    /// rewriting, default country), so two selections that normalize the
    /// same way share one cache entry.
    ///
    /// # Errors
    /// Returns an error if the connector does not provide articles or if the
    /// fetch fails at the HTTP, transport, or parse level.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "notizia::feed", skip(self, query))
    )]
    pub async fn articles(&self, query: &FeedQuery) -> Result<Vec<Article>, NotiziaError> {
        let req = query.normalize(&self.cfg);
        self.fetch_articles(&req).await
    }

    /// Fetch articles for an already-normalized request.
    ///
    /// # Errors
    /// Same failure surface as [`articles`](Self::articles).
    pub async fn fetch_articles(&self, req: &ArticlesRequest) -> Result<Vec<Article>, NotiziaError> {
        let provider = self
            .connector
            .as_articles_provider()
            .ok_or_else(|| NotiziaError::unsupported("articles"))?;
        provider.articles(req).await
    }
}
