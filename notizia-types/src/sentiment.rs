//! Pure formatting functions that turn raw sentiment scores into display
//! primitives: a discrete classification, a meter width, and a
//! positive/negative probability split.

use serde::{Deserialize, Serialize};

/// Compound scores strictly above this value classify as positive.
pub const POSITIVE_THRESHOLD: f64 = 0.2;
/// Compound scores strictly below this value classify as negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.2;

/// Discrete sentiment classification derived from a lexicon compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    /// Compound strictly above [`POSITIVE_THRESHOLD`].
    Positive,
    /// Compound strictly below [`NEGATIVE_THRESHOLD`].
    Negative,
    /// Everything else, including the thresholds themselves.
    Neutral,
}

impl Sentiment {
    /// Classify a compound score. Thresholds are strict: exactly ±0.2 is neutral.
    #[must_use]
    pub fn from_compound(compound: f64) -> Self {
        if compound > POSITIVE_THRESHOLD {
            Self::Positive
        } else if compound < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
        };
        f.write_str(s)
    }
}

/// Map a compound score in [-1, 1] to a meter magnitude in [0, 50].
///
/// The sign is dropped; callers that care about direction should check the
/// sign of the compound separately.
#[must_use]
pub fn meter_width(compound: f64) -> u8 {
    let w = (compound.abs() * 50.0).round();
    if w >= 50.0 { 50 } else { w as u8 }
}

/// A positive/negative probability pair summing to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentSplit {
    /// Probability mass assigned to positive sentiment, in [0, 1].
    pub positive: f64,
    /// Probability mass assigned to negative sentiment, in [0, 1].
    pub negative: f64,
}

impl SentimentSplit {
    /// Build a split from the positive share; the negative share is the complement.
    #[must_use]
    pub fn from_positive(positive: f64) -> Self {
        Self {
            positive,
            negative: 1.0 - positive,
        }
    }

    /// Positive share as a whole percentage, clamped to [0, 100].
    #[must_use]
    pub fn positive_pct(&self) -> u8 {
        percentage(self.positive)
    }

    /// Negative share as a whole percentage, clamped to [0, 100].
    #[must_use]
    pub fn negative_pct(&self) -> u8 {
        percentage(self.negative)
    }
}

/// Round a fraction to a whole percentage, clamped to [0, 100].
#[must_use]
pub fn percentage(v: f64) -> u8 {
    let p = (v * 100.0).round();
    if p <= 0.0 {
        0
    } else if p >= 100.0 {
        100
    } else {
        p as u8
    }
}
