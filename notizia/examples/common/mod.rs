use std::sync::Arc;

use notizia_core::NotiziaConnector;

/// Connector for the examples: the live HTTP endpoint when
/// `NOTIZIA_ENDPOINT` is set, the deterministic mock otherwise.
#[must_use]
pub fn get_connector() -> Arc<dyn NotiziaConnector> {
    match std::env::var("NOTIZIA_ENDPOINT") {
        Ok(endpoint) => Arc::new(
            notizia_http::HttpConnector::builder()
                .endpoint(endpoint)
                .build()
                .expect("valid NOTIZIA_ENDPOINT url"),
        ),
        Err(_) => {
            println!("--- (Using Mock Connector; set NOTIZIA_ENDPOINT for live data) ---");
            Arc::new(notizia_mock::MockConnector::new())
        }
    }
}
