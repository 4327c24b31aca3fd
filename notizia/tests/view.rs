use chrono::{TimeZone, Utc};
use notizia::view::{ClassifierBadge, FeedView};
use notizia::{Article, ClassifierScore, LexiconScore, Sentiment};

fn article(compound: f64) -> Article {
    Article {
        title: Some("Quiet day on the wires".into()),
        url: Some("https://news.example/quiet".into()),
        source: Some("Example Wire".into()),
        published_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).single(),
        vader: Some(LexiconScore { compound }),
        distilbert: Some(ClassifierScore {
            label: Some("POSITIVE".into()),
            score: Some(0.97),
        }),
    }
}

#[test]
fn empty_list_renders_placeholder() {
    let view = FeedView::from_articles(&[]);
    assert!(view.is_empty());
    assert_eq!(view.to_string(), "No articles found.\n");
}

#[test]
fn card_carries_precomputed_sentiment() {
    let view = FeedView::from_articles(&[article(0.64)]);
    let card = &view.cards()[0];

    assert_eq!(card.sentiment, Sentiment::Positive);
    assert_eq!(card.meter.width, 32);
    assert!(!card.meter.negative);
    assert_eq!(card.lexicon_split.positive_pct(), 82);
    assert!(matches!(
        card.classifier,
        ClassifierBadge::Labeled { score: Some(_), .. }
    ));

    let text = view.to_string();
    assert!(text.contains("POSITIVE"));
    assert!(text.contains("Example Wire"));
    assert!(text.contains("May 01, 2024 09:30"));
}

#[test]
fn negative_compound_flips_meter_direction() {
    let view = FeedView::from_articles(&[article(-0.45)]);
    let card = &view.cards()[0];
    assert_eq!(card.sentiment, Sentiment::Negative);
    assert!(card.meter.negative);
    assert_eq!(card.meter.width, 23);
}

#[test]
fn missing_fields_fall_back_to_placeholders() {
    let view = FeedView::from_articles(&[Article::default()]);
    let card = &view.cards()[0];

    assert_eq!(card.title, "(no title)");
    assert_eq!(card.source, "Unknown source");
    assert_eq!(card.published, "");
    assert_eq!(card.sentiment, Sentiment::Neutral);
    assert_eq!(card.meter.width, 0);
    assert_eq!(card.classifier, ClassifierBadge::Pending);

    let text = view.to_string();
    assert!(text.contains("distilbert: PENDING"));
    // No trailing separator when the timestamp is absent
    assert!(text.contains("  Unknown source\n"));
}

#[test]
fn label_only_classifier_uses_fallback_split() {
    let a = Article {
        distilbert: Some(ClassifierScore {
            label: Some("NEGATIVE".into()),
            score: None,
        }),
        ..Article::default()
    };
    let view = FeedView::from_articles(&[a]);
    let ClassifierBadge::Labeled { split, score, .. } = &view.cards()[0].classifier else {
        panic!("label-only classifier should not be pending");
    };
    assert!(score.is_none());
    assert_eq!(split.positive_pct(), 10);
}

#[test]
fn cards_keep_response_order() {
    let mut first = article(0.3);
    first.title = Some("first".into());
    let mut second = article(-0.3);
    second.title = Some("second".into());

    let view = FeedView::from_articles(&[first, second]);
    assert_eq!(view.cards()[0].title, "first");
    assert_eq!(view.cards()[1].title, "second");
}
