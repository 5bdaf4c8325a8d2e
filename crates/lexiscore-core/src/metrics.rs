//! Per-document metrics.
//!
//! [`analyze`] tokenizes a document once, runs the sentiment and readability
//! scorers over the shared token stream, computes the remaining word-level
//! metrics inline, and assembles one [`MetricsRecord`].

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::readability::{self, ReadabilityScores};
use crate::sentiment::{self, SentimentScores};
use crate::syllables;
use crate::text::TokenStream;

/// First-person pronouns counted in the raw text.
static PERSONAL_PRONOUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(I|we|my|ours|us)\b").expect("valid regex"));

/// A document to score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Identifier, unique within a batch.
    pub id: String,
    /// Where the text came from (URL or path).
    pub url: String,
    /// Raw text. May be empty.
    pub text: String,
}

/// Metrics computed from the text alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextMetrics {
    /// Sentiment counts and ratios.
    pub sentiment: SentimentScores,
    /// Sentence-length and complexity metrics.
    pub readability: ReadabilityScores,
    /// Mean syllables per alphabetic word.
    pub syllable_per_word: f64,
    /// Matches of I, we, my, ours, us in the raw text.
    pub personal_pronouns: usize,
    /// Mean characters per alphabetic word.
    pub avg_word_length: f64,
}

/// One output row. Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MetricsRecord {
    /// Document identifier.
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    /// Document source locator.
    #[serde(rename = "URL")]
    pub url: String,
    /// Count of positive words.
    #[serde(rename = "POSITIVE SCORE")]
    pub positive_score: usize,
    /// Count of negative words.
    #[serde(rename = "NEGATIVE SCORE")]
    pub negative_score: usize,
    /// Sentiment balance in (-1, 1).
    #[serde(rename = "POLARITY SCORE")]
    pub polarity_score: f64,
    /// Share of sentiment-bearing words.
    #[serde(rename = "SUBJECTIVITY SCORE")]
    pub subjectivity_score: f64,
    /// Words per sentence.
    #[serde(rename = "AVG SENTENCE LENGTH")]
    pub avg_sentence_length: f64,
    /// Complex words as a fraction of all words.
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pub percentage_of_complex_words: f64,
    /// Gunning Fog index.
    #[serde(rename = "FOG INDEX")]
    pub fog_index: f64,
    /// Words per sentence; always equal to `avg_sentence_length`.
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    pub avg_number_of_words_per_sentence: f64,
    /// Words with more than two syllables.
    #[serde(rename = "COMPLEX WORD COUNT")]
    pub complex_word_count: usize,
    /// Alphabetic words.
    #[serde(rename = "WORD COUNT")]
    pub word_count: usize,
    /// Mean syllables per word.
    #[serde(rename = "SYLLABLE PER WORD")]
    pub syllable_per_word: f64,
    /// First-person pronoun matches.
    #[serde(rename = "PERSONAL PRONOUNS")]
    pub personal_pronouns: usize,
    /// Mean characters per word.
    #[serde(rename = "AVG WORD LENGTH")]
    pub avg_word_length: f64,
}

impl MetricsRecord {
    /// Output column names, in order.
    pub const COLUMNS: [&'static str; 15] = [
        "URL_ID",
        "URL",
        "POSITIVE SCORE",
        "NEGATIVE SCORE",
        "POLARITY SCORE",
        "SUBJECTIVITY SCORE",
        "AVG SENTENCE LENGTH",
        "PERCENTAGE OF COMPLEX WORDS",
        "FOG INDEX",
        "AVG NUMBER OF WORDS PER SENTENCE",
        "COMPLEX WORD COUNT",
        "WORD COUNT",
        "SYLLABLE PER WORD",
        "PERSONAL PRONOUNS",
        "AVG WORD LENGTH",
    ];

    /// Build a record from a document's identity and its computed metrics.
    pub fn new(url_id: impl Into<String>, url: impl Into<String>, metrics: &TextMetrics) -> Self {
        let TextMetrics {
            sentiment,
            readability,
            syllable_per_word,
            personal_pronouns,
            avg_word_length,
        } = *metrics;

        Self {
            url_id: url_id.into(),
            url: url.into(),
            positive_score: sentiment.positive,
            negative_score: sentiment.negative,
            polarity_score: sentiment.polarity,
            subjectivity_score: sentiment.subjectivity,
            avg_sentence_length: readability.avg_sentence_length,
            percentage_of_complex_words: readability.percentage_complex_words,
            fog_index: readability.fog_index,
            avg_number_of_words_per_sentence: readability.avg_sentence_length,
            complex_word_count: readability.complex_word_count,
            word_count: readability.word_count,
            syllable_per_word,
            personal_pronouns,
            avg_word_length,
        }
    }
}

/// Score one document.
#[tracing::instrument(skip_all, fields(id = %document.id, text_len = document.text.len()))]
pub fn analyze(document: &Document, lexicon: &Lexicon) -> MetricsRecord {
    let metrics = analyze_text(&document.text, lexicon);
    MetricsRecord::new(document.id.as_str(), document.url.as_str(), &metrics)
}

/// Compute every text metric for raw `text`.
///
/// Total over all input: empty text yields all-zero metrics.
pub fn analyze_text(text: &str, lexicon: &Lexicon) -> TextMetrics {
    let stream = TokenStream::new(text);
    let sentiment = sentiment::score_sentiment(&stream.words, lexicon);
    let readability = readability::score_readability(&stream.sentences, &stream.words);

    let word_count = stream.words.len();
    let (syllable_per_word, avg_word_length) = if word_count > 0 {
        let syllables: usize = stream
            .words
            .iter()
            .map(|w| syllables::count_syllables(w))
            .sum();
        let characters: usize = stream.words.iter().map(|w| w.chars().count()).sum();
        (
            syllables as f64 / word_count as f64,
            characters as f64 / word_count as f64,
        )
    } else {
        (0.0, 0.0)
    };

    TextMetrics {
        sentiment,
        readability,
        syllable_per_word,
        personal_pronouns: count_personal_pronouns(text),
        avg_word_length,
    }
}

/// Count case-insensitive whole-word matches of I, we, my, ours, us.
///
/// Scans the raw text rather than the token stream, so stop-word filtering
/// and contraction splitting do not hide a match ("I'm" counts).
pub fn count_personal_pronouns(text: &str) -> usize {
    PERSONAL_PRONOUNS.find_iter(text).count()
}
