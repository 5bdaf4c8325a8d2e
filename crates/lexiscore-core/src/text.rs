//! Tokenization.
//!
//! Splits raw text into sentences and lower-cased word tokens, and filters
//! tokens down to alphabetic words, the unit every word-count metric uses.
//!
//! Word tokens follow Penn Treebank conventions closely enough for counting:
//! punctuation is split from words, English clitics (`n't`, `'s`, `'ll`, ...)
//! become their own tokens, and a period only detaches at the end of a
//! sentence, so `Dr.` or `e.g.` mid-sentence stay single non-alphabetic tokens.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Abbreviations that do not end a sentence when followed by a period.
static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "rev", "sr", "jr", "st", "capt", "col", "gen", "lt",
        "sgt", "gov", "sen", "rep", "etc", "vs", "e.g", "i.e", "cf", "viz", "al", "inc", "ltd",
        "co", "corp", "no", "vol", "fig", "approx", "dept", "est", "jan", "feb", "mar", "apr",
        "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "a.m", "p.m", "u.s", "u.k",
    ]
    .into_iter()
    .collect()
});

/// Clitic suffixes split off a word, longest first.
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'d", "'m"];

/// The tokens of one document, computed once and shared by every scorer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    /// Sentences in document order.
    pub sentences: Vec<String>,
    /// Every lower-cased word token, punctuation included.
    pub tokens: Vec<String>,
    /// Tokens made only of alphabetic characters.
    pub words: Vec<String>,
}

impl TokenStream {
    /// Tokenize `text` into sentences, tokens, and alphabetic words.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn new(text: &str) -> Self {
        let sentences = split_sentences(text);
        let mut tokens = Vec::new();
        for sentence in &sentences {
            tokenize_sentence(sentence, &mut tokens);
        }
        let words = alphabetic_words(&tokens);
        tracing::trace!(
            sentences = sentences.len(),
            tokens = tokens.len(),
            words = words.len(),
            "tokenized"
        );
        Self {
            sentences,
            tokens,
            words,
        }
    }
}

/// Split text into sentences.
///
/// A run of `.`, `!` or `?` (plus any closing quotes or brackets) ends a
/// sentence when whitespace or the end of text follows. A lone period does
/// not end one after a known abbreviation or a single-letter initial, and an
/// ellipsis does not end one when the next word starts in lower case.
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        if !is_sentence_terminator(chars[i]) {
            i += 1;
            continue;
        }

        let mut end = i + 1;
        while end < chars.len() && (is_sentence_terminator(chars[end]) || is_closer(chars[end])) {
            end += 1;
        }

        let followed_by_space = end == chars.len() || chars[end].is_whitespace();
        if followed_by_space && is_boundary(&chars, start, i, end) {
            push_sentence(&chars[start..end], &mut sentences);
            start = end;
        }
        i = end;
    }

    push_sentence(&chars[start..], &mut sentences);
    sentences
}

/// Split text into lower-cased word tokens.
pub fn tokenize_words(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for sentence in split_sentences(text) {
        tokenize_sentence(&sentence, &mut tokens);
    }
    tokens
}

/// Keep only tokens made entirely of alphabetic characters.
///
/// Numbers, punctuation, clitics like `n't`, and mixed tokens like `covid19`
/// or `well-known` are dropped.
pub fn alphabetic_words<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .filter(|t| is_alphabetic(t))
        .map(str::to_owned)
        .collect()
}

/// Whether a token is non-empty and made only of alphabetic characters.
pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

const fn is_closer(ch: char) -> bool {
    matches!(ch, '"' | '\'' | ')' | ']' | '}' | '\u{201d}' | '\u{2019}')
}

fn push_sentence(chars: &[char], sentences: &mut Vec<String>) {
    let sentence: String = chars.iter().collect();
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

fn is_boundary(chars: &[char], start: usize, terminator: usize, end: usize) -> bool {
    if end == chars.len() {
        return true;
    }

    let run = &chars[terminator..end];
    // ! and ? always end a sentence.
    if run.iter().any(|c| matches!(c, '!' | '?')) {
        return true;
    }

    let periods = run.iter().filter(|c| **c == '.').count();
    if periods > 1 {
        return !next_word_is_lowercase(chars, end);
    }

    let word = word_before(chars, start, terminator);
    if ABBREVIATIONS.contains(word.to_lowercase().as_str()) {
        return false;
    }
    let mut letters = word.chars();
    !matches!(
        (letters.next(), letters.next()),
        (Some(first), None) if first.is_uppercase()
    )
}

/// The word (letters, digits and inner periods) immediately before `pos`.
fn word_before(chars: &[char], start: usize, pos: usize) -> String {
    let mut begin = pos;
    while begin > start && (chars[begin - 1].is_alphanumeric() || chars[begin - 1] == '.') {
        begin -= 1;
    }
    chars[begin..pos].iter().collect()
}

/// Whether the first word after `from` starts in lower case.
///
/// Only whitespace and opening quotes or brackets are skipped, so the scan
/// never runs past the next token.
fn next_word_is_lowercase(chars: &[char], from: usize) -> bool {
    chars[from..]
        .iter()
        .find(|c| !c.is_whitespace() && !is_opener(**c))
        .is_some_and(|c| c.is_lowercase())
}

const fn is_opener(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '(' | '[' | '{' | '\u{201c}' | '\u{2018}')
}

fn tokenize_sentence(sentence: &str, out: &mut Vec<String>) {
    let chunks: Vec<&str> = sentence.split_whitespace().collect();
    let last = chunks.len().saturating_sub(1);
    for (idx, chunk) in chunks.iter().enumerate() {
        split_chunk(&chunk.to_lowercase(), idx == last, out);
    }
}

/// Split one whitespace-delimited chunk into tokens.
fn split_chunk(chunk: &str, sentence_final: bool, out: &mut Vec<String>) {
    let mut rest = chunk;

    while let Some(c) = rest.chars().next() {
        if c.is_alphanumeric() {
            break;
        }
        out.push(c.to_string());
        rest = &rest[c.len_utf8()..];
    }

    let mut trailing = Vec::new();
    while let Some(c) = rest.chars().next_back() {
        if c.is_alphanumeric() {
            break;
        }
        // A single period sticks to its word unless it ends the sentence.
        if c == '.' && !sentence_final && !trailing.contains(&'.') && !rest.ends_with("..") {
            break;
        }
        trailing.push(c);
        rest = &rest[..rest.len() - c.len_utf8()];
    }

    if !rest.is_empty() {
        split_clitic(rest, out);
    }
    out.extend(trailing.into_iter().rev().map(String::from));
}

fn split_clitic(word: &str, out: &mut Vec<String>) {
    if word == "cannot" {
        out.push("can".to_string());
        out.push("not".to_string());
        return;
    }
    for clitic in CLITICS {
        if let Some(stem) = word.strip_suffix(clitic)
            && !stem.is_empty()
        {
            out.push(stem.to_string());
            out.push((*clitic).to_string());
            return;
        }
    }
    out.push(word.to_string());
}
