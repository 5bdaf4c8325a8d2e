//! Sentiment word lists and stop words.
//!
//! A [`Lexicon`] is built once at startup and then only read. Share it by
//! reference (or behind an `Arc`) across every document in a batch.

use std::collections::HashSet;

use camino::Utf8Path;

use crate::error::LexiconLoadError;
use crate::stopwords;

/// Positive words, negative words, and stop words used for scoring.
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    extra_stopwords: HashSet<String>,
}

impl Lexicon {
    /// Load the positive and negative word lists from newline-delimited files.
    ///
    /// The built-in English stop words are always active.
    #[tracing::instrument(skip_all, fields(positive = %positive, negative = %negative))]
    pub fn load(positive: &Utf8Path, negative: &Utf8Path) -> Result<Self, LexiconLoadError> {
        let lexicon = Self {
            positive: read_word_list(positive)?,
            negative: read_word_list(negative)?,
            extra_stopwords: HashSet::new(),
        };
        tracing::info!(
            positive = lexicon.positive.len(),
            negative = lexicon.negative.len(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    /// Build a lexicon from in-memory word lists.
    ///
    /// Words are trimmed and lower-cased the same way file entries are.
    pub fn from_words<P, N, S>(positive: P, negative: N) -> Self
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            positive: normalize_all(positive),
            negative: normalize_all(negative),
            extra_stopwords: HashSet::new(),
        }
    }

    /// Add the words of a newline-delimited file to the stop-word set.
    pub fn with_extra_stopwords(mut self, path: &Utf8Path) -> Result<Self, LexiconLoadError> {
        let extra = read_word_list(path)?;
        tracing::debug!(path = %path, count = extra.len(), "extra stop words loaded");
        self.extra_stopwords.extend(extra);
        Ok(self)
    }

    /// Whether `word` is in the positive list.
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    /// Whether `word` is in the negative list.
    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    /// Whether `word` is a stop word (built-in English list or extra file).
    pub fn is_stopword(&self, word: &str) -> bool {
        stopwords::is_english_stopword(word) || self.extra_stopwords.contains(word)
    }

    /// Number of positive words.
    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    /// Number of negative words.
    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }
}

fn read_word_list(path: &Utf8Path) -> Result<HashSet<String>, LexiconLoadError> {
    let bytes = std::fs::read(path.as_std_path()).map_err(|source| LexiconLoadError {
        path: path.to_path_buf(),
        source,
    })?;
    // The widely used opinion lexicons ship in Latin-1.
    let text = String::from_utf8_lossy(&bytes);
    Ok(parse_word_list(&text))
}

/// Parse a newline-delimited word list.
///
/// Blank lines and `;` comment lines are skipped.
pub fn parse_word_list(text: &str) -> HashSet<String> {
    normalize_all(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with(';')),
    )
}

fn normalize_all<I, S>(words: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
