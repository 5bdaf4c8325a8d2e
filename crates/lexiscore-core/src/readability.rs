//! Readability scoring using the Gunning Fog index.
//!
//! Formula: `0.4 * (words/sentences + complex_words/words)`
//!
//! A complex word has more than two syllables (see [`syllables`]). The
//! complex-word share is a fraction in `[0, 1]`, not a percentage.
//!
//! Every ratio falls back to zero when its denominator is zero, and the Fog
//! index itself is zero whenever the average sentence length is zero.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::syllables;

/// Sentence-length and complexity metrics for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityScores {
    /// Alphabetic words per sentence.
    pub avg_sentence_length: f64,
    /// Complex words as a fraction of all alphabetic words.
    pub percentage_complex_words: f64,
    /// Gunning Fog index.
    pub fog_index: f64,
    /// Alphabetic words with more than two syllables.
    pub complex_word_count: usize,
    /// Alphabetic words.
    pub word_count: usize,
}

/// Score sentences and alphabetic words.
///
/// # Arguments
///
/// * `sentences` — Sentences of the document (only their number is used).
/// * `words` — Alphabetic, lower-cased words of the document.
pub fn score_readability<S, W>(sentences: &[S], words: &[W]) -> ReadabilityScores
where
    W: AsRef<str>,
{
    let word_count = words.len();
    let sentence_count = sentences.len();

    let avg_sentence_length = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        0.0
    };

    let complex_word_count = words
        .iter()
        .filter(|w| syllables::is_complex(w.as_ref()))
        .count();

    let percentage_complex_words = if word_count > 0 {
        complex_word_count as f64 / word_count as f64
    } else {
        0.0
    };

    let fog_index = if avg_sentence_length > 0.0 {
        0.4 * (avg_sentence_length + percentage_complex_words)
    } else {
        0.0
    };

    ReadabilityScores {
        avg_sentence_length,
        percentage_complex_words,
        fog_index,
        complex_word_count,
        word_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::TokenStream;

    #[test]
    fn two_sentences_ten_words_three_complex() {
        let sentences = ["one", "two"];
        let words = [
            "the", "wonderful", "cat", "sat", "beautiful", "dogs", "ran", "to", "an", "animal",
        ];
        let scores = score_readability(&sentences, &words);

        assert_eq!(scores.word_count, 10);
        assert_eq!(scores.complex_word_count, 3);
        assert_eq!(scores.avg_sentence_length, 5.0);
        assert_eq!(scores.percentage_complex_words, 0.3);
        assert!((scores.fog_index - 2.12).abs() < 1e-12);
    }

    #[test]
    fn empty_document_scores_zero() {
        let none: [&str; 0] = [];
        let scores = score_readability(&none, &none);
        assert_eq!(scores, ReadabilityScores::default());
    }

    #[test]
    fn sentences_without_words_gate_fog_index() {
        let sentences = ["...", "!!"];
        let none: [&str; 0] = [];
        let scores = score_readability(&sentences, &none);
        assert_eq!(scores.avg_sentence_length, 0.0);
        assert_eq!(scores.fog_index, 0.0);
    }

    #[test]
    fn simple_prose_has_low_fog() {
        let stream = TokenStream::new("The cat sat on the mat. The dog ran fast.");
        let scores = score_readability(&stream.sentences, &stream.words);
        assert_eq!(scores.word_count, 10);
        assert_eq!(scores.complex_word_count, 0);
        assert!((scores.fog_index - 2.0).abs() < 1e-12);
    }
}
