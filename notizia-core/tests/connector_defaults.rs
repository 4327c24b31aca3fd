use notizia_core::{NotiziaConnector, NotiziaError};

struct BareConnector;

impl NotiziaConnector for BareConnector {
    fn name(&self) -> &'static str {
        "bare"
    }
}

#[test]
fn capability_accessor_defaults_to_none() {
    let c = BareConnector;
    assert!(c.as_articles_provider().is_none());
    assert_eq!(c.vendor(), "unknown");
}

#[test]
fn error_classification_for_manual_retry() {
    assert!(NotiziaError::http(502).is_transient());
    assert!(NotiziaError::Network("connection reset".into()).is_transient());
    assert!(NotiziaError::Parse("trailing garbage".into()).is_transient());
    assert!(!NotiziaError::unsupported("articles").is_transient());
    assert!(!NotiziaError::InvalidArg("empty query".into()).is_transient());
}

#[test]
fn errors_round_trip_through_serde() {
    let e = NotiziaError::connector("notizia-http", "boom");
    let json = serde_json::to_string(&e).unwrap();
    let back: NotiziaError = serde_json::from_str(&json).unwrap();
    assert_eq!(e, back);
}
