//! Core library for lexiscore.
//!
//! Computes lexicon-based sentiment and readability metrics for documents.
//! Scoring is a pure function of a document's text and a shared, read-only
//! [`Lexicon`]; it never fails, and every division is guarded.
//!
//! # Modules
//!
//! - [`lexicon`] - Positive, negative, and stop word sets
//! - [`stopwords`] - Built-in English stop word list
//! - [`text`] - Sentence splitting and word tokenization
//! - [`syllables`] - Vowel-cluster syllable counting
//! - [`sentiment`] - Positive/negative counts, polarity, subjectivity
//! - [`readability`] - Sentence length, complex words, Fog index
//! - [`metrics`] - Per-document aggregation into a [`MetricsRecord`]
//! - [`batch`] - Parallel fetch-and-score over many documents
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use lexiscore_core::{Document, Lexicon, analyze};
//!
//! let lexicon = Lexicon::from_words(["love", "great"], ["awful"]);
//! let record = analyze(
//!     &Document {
//!         id: "1".into(),
//!         url: "https://example.com".into(),
//!         text: "I love this. It is great.".into(),
//!     },
//!     &lexicon,
//! );
//! assert_eq!(record.positive_score, 2);
//! assert_eq!(record.personal_pronouns, 1);
//! ```
#![deny(unsafe_code)]

pub mod batch;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod metrics;
pub mod readability;
pub mod sentiment;
pub mod stopwords;
pub mod syllables;
pub mod text;

pub use batch::{BatchEntry, BatchFailure, BatchReport, TextSource, run_batch};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{ConfigError, ConfigResult, FetchError, LexiconLoadError};
pub use lexicon::Lexicon;
pub use metrics::{Document, MetricsRecord, TextMetrics, analyze, analyze_text};
