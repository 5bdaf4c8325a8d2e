//! Lexicon-based sentiment scoring.
//!
//! Stop words are removed first; the remaining words are matched against the
//! positive and negative lists.
//!
//! - Polarity: `(positive - negative) / (positive + negative + ε)`
//! - Subjectivity: `(positive + negative) / (words + ε)`
//!
//! `ε` keeps both ratios defined (and zero) for documents with no scored words.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

/// Guard added to every sentiment denominator.
pub const POLARITY_EPSILON: f64 = 0.000_001;

/// Sentiment counts and ratios for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentScores {
    /// Non-stop words found in the positive list.
    pub positive: usize,
    /// Non-stop words found in the negative list.
    pub negative: usize,
    /// Sentiment balance in (-1, 1).
    pub polarity: f64,
    /// Share of sentiment-bearing words among non-stop words.
    pub subjectivity: f64,
}

/// Score alphabetic, lower-cased words against the lexicon.
pub fn score_sentiment<S: AsRef<str>>(words: &[S], lexicon: &Lexicon) -> SentimentScores {
    let mut considered = 0usize;
    let mut positive = 0usize;
    let mut negative = 0usize;

    for word in words.iter().map(AsRef::as_ref) {
        if lexicon.is_stopword(word) {
            continue;
        }
        considered += 1;
        if lexicon.is_positive(word) {
            positive += 1;
        }
        if lexicon.is_negative(word) {
            negative += 1;
        }
    }

    let polarity =
        (positive as f64 - negative as f64) / ((positive + negative) as f64 + POLARITY_EPSILON);
    let subjectivity = (positive + negative) as f64 / (considered as f64 + POLARITY_EPSILON);

    SentimentScores {
        positive,
        negative,
        polarity,
        subjectivity,
    }
}
