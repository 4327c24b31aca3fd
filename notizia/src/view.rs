//! Pure rendering of article lists.
//!
//! [`FeedView::from_articles`] maps a fetched list onto card descriptions
//! with every sentiment figure pre-computed; nothing here does I/O. The
//! `Display` impl prints the cards for terminal use, and an empty list
//! renders the "no articles" placeholder instead of nothing. A view is a
//! full replacement of whatever was shown before, never a diff.

use notizia_core::sentiment::meter_width;
use notizia_core::{Article, Sentiment, SentimentSplit};

/// Ordered card list for one fetched article list.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedView {
    cards: Vec<ArticleCard>,
}

/// One rendered article: title, provenance, and both sentiment meters.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleCard {
    /// Headline, `"(no title)"` when the endpoint sent none.
    pub title: String,
    /// Link to the full story, when present.
    pub url: Option<String>,
    /// Publisher, `"Unknown source"` when absent.
    pub source: String,
    /// Formatted publication time, empty when absent.
    pub published: String,
    /// Badge classification of the lexicon compound.
    pub sentiment: Sentiment,
    /// Raw lexicon compound backing the meter.
    pub compound: f64,
    /// Lexicon meter in the card.
    pub meter: Meter,
    /// Lexicon positive/negative split.
    pub lexicon_split: SentimentSplit,
    /// Second meter, from the transformer classifier.
    pub classifier: ClassifierBadge,
}

/// Meter magnitude and direction for a compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meter {
    /// Filled cells, 0 through 50.
    pub width: u8,
    /// Whether the bar extends toward the negative side.
    pub negative: bool,
}

/// Classifier state for the second meter.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifierBadge {
    /// The classifier has not produced a label for this article yet.
    Pending,
    /// Label plus optional confidence and the derived positive split.
    Labeled {
        /// Class name as sent by the endpoint.
        label: String,
        /// Confidence, when numeric.
        score: Option<f64>,
        /// Positive/negative split (score passthrough or label fallback).
        split: SentimentSplit,
    },
}

impl FeedView {
    /// Build the card list for a fetched article list, in order.
    #[must_use]
    pub fn from_articles(articles: &[Article]) -> Self {
        Self {
            cards: articles.iter().map(ArticleCard::from_article).collect(),
        }
    }

    /// Cards in render order.
    #[must_use]
    pub fn cards(&self) -> &[ArticleCard] {
        &self.cards
    }

    /// Whether the placeholder would render instead of cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl ArticleCard {
    fn from_article(a: &Article) -> Self {
        let compound = a.compound();
        let lexicon_split = a.vader.unwrap_or_default().split();
        let classifier = match &a.distilbert {
            Some(c) if !c.is_pending() => ClassifierBadge::Labeled {
                label: c.label.clone().unwrap_or_default(),
                score: c.score,
                split: c.split(),
            },
            _ => ClassifierBadge::Pending,
        };
        Self {
            title: a.title.clone().unwrap_or_else(|| "(no title)".to_string()),
            url: a.url.clone(),
            source: a
                .source
                .clone()
                .unwrap_or_else(|| "Unknown source".to_string()),
            published: a
                .published_at
                .map(|t| t.format("%b %d, %Y %H:%M").to_string())
                .unwrap_or_default(),
            sentiment: Sentiment::from_compound(compound),
            compound,
            meter: Meter {
                width: meter_width(compound),
                negative: compound < 0.0,
            },
            lexicon_split,
            classifier,
        }
    }
}

impl std::fmt::Display for FeedView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cards.is_empty() {
            return writeln!(f, "No articles found.");
        }
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for ArticleCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        if let Some(url) = &self.url {
            writeln!(f, "  {url}")?;
        }
        if self.published.is_empty() {
            writeln!(f, "  {}", self.source)?;
        } else {
            writeln!(f, "  {} · {}", self.source, self.published)?;
        }

        let bar: String = "█".repeat(usize::from(self.meter.width));
        writeln!(
            f,
            "  {} {} {:+.3} ({}% positive)",
            self.sentiment,
            bar,
            self.compound,
            self.lexicon_split.positive_pct()
        )?;

        match &self.classifier {
            ClassifierBadge::Pending => writeln!(f, "  distilbert: PENDING"),
            ClassifierBadge::Labeled {
                label,
                score,
                split,
            } => match score {
                Some(s) => writeln!(
                    f,
                    "  distilbert: {label} ({s:.3}) · {}% positive",
                    split.positive_pct()
                ),
                None => writeln!(
                    f,
                    "  distilbert: {label} · {}% positive",
                    split.positive_pct()
                ),
            },
        }
    }
}
