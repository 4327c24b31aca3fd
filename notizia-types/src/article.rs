use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sentiment::SentimentSplit;

/// A single news article as returned by the sentiment endpoint.
///
/// Every field is optional on the wire; articles carry no identity beyond
/// their position in the response list and are immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Article {
    /// Headline text.
    pub title: Option<String>,
    /// Link to the full story.
    pub url: Option<String>,
    /// Publisher name.
    pub source: Option<String>,
    /// Publication timestamp.
    #[serde(rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
    /// Lexicon-based sentiment annotation, when the analyzer produced one.
    pub vader: Option<LexiconScore>,
    /// Transformer classifier annotation, when the analyzer produced one.
    pub distilbert: Option<ClassifierScore>,
}

impl Article {
    /// Lexicon compound score, defaulting to 0 (neutral) when absent.
    #[must_use]
    pub fn compound(&self) -> f64 {
        self.vader.as_ref().map_or(0.0, |v| v.compound)
    }
}

/// Lexicon analyzer output: a single compound score in roughly [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LexiconScore {
    /// Aggregate sentiment; more positive means more positive sentiment.
    pub compound: f64,
}

impl LexiconScore {
    /// Linear remap of the compound from [-1, 1] onto a positive/negative split.
    #[must_use]
    pub fn split(&self) -> SentimentSplit {
        SentimentSplit::from_positive((self.compound + 1.0) / 2.0)
    }
}

/// Transformer classifier output: a class label plus optional confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifierScore {
    /// Discrete class name, e.g. "POSITIVE".
    pub label: Option<String>,
    /// Confidence in the label, in [0, 1].
    pub score: Option<f64>,
}

impl ClassifierScore {
    /// Positive/negative split for the classifier output.
    ///
    /// A numeric score is taken directly as the positive probability. When
    /// the endpoint returned only a label, fall back to a coarse 0.9/0.1
    /// estimate from whether the label mentions "POS" (any case).
    #[must_use]
    pub fn split(&self) -> SentimentSplit {
        let positive = match self.score {
            Some(s) => s,
            None => {
                let positive_label = self
                    .label
                    .as_deref()
                    .is_some_and(|l| l.to_ascii_uppercase().contains("POS"));
                if positive_label { 0.9 } else { 0.1 }
            }
        };
        SentimentSplit::from_positive(positive)
    }

    /// Whether the classifier has produced anything at all for this article.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.label.is_none()
    }
}
