use async_trait::async_trait;

use notizia_core::connector::{ArticlesProvider, NotiziaConnector};
use notizia_core::{Article, ArticlesRequest, NotiziaError};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicConnector, DynamicConnectorBuilder};

/// Mock connector for CI-safe examples. Provides deterministic data from static fixtures.
///
/// Magic query values steer the failure paths:
/// - search text `"FAIL"` returns a forced connector error;
/// - search text `"EMPTY"` or country `"zz"` returns an empty article list.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn maybe_fail(req: &ArticlesRequest) -> Result<(), NotiziaError> {
        if matches!(req, ArticlesRequest::Search(s) if s == "FAIL") {
            return Err(NotiziaError::connector(
                "notizia-mock",
                "forced failure: articles",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl NotiziaConnector for MockConnector {
    fn name(&self) -> &'static str {
        "notizia-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_articles_provider(&self) -> Option<&dyn ArticlesProvider> {
        Some(self as &dyn ArticlesProvider)
    }
}

#[async_trait]
impl ArticlesProvider for MockConnector {
    async fn articles(&self, req: &ArticlesRequest) -> Result<Vec<Article>, NotiziaError> {
        Self::maybe_fail(req)?;
        Ok(fixtures::articles(req))
    }
}
