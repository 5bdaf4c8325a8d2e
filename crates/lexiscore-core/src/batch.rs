//! Batch scoring.
//!
//! Fetches and scores a list of documents in parallel. Each document either
//! yields a [`MetricsRecord`] or a [`BatchFailure`]; a failure never stops the
//! batch and never produces a partial row. Records keep input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::lexicon::Lexicon;
use crate::metrics::{self, Document, MetricsRecord};

/// One input row: a document identifier and where to find its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Identifier, unique within the batch.
    #[serde(rename = "URL_ID")]
    pub id: String,
    /// Source locator.
    #[serde(rename = "URL")]
    pub url: String,
}

/// Retrieves the raw text of a document.
///
/// Implementations must be shareable across worker threads.
pub trait TextSource: Sync {
    /// Fetch the raw text behind `url`.
    fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

impl<F> TextSource for F
where
    F: Fn(&str) -> Result<String, FetchError> + Sync,
{
    fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        self(url)
    }
}

/// A document that could not be scored.
#[derive(Debug)]
pub struct BatchFailure {
    /// Identifier of the failed document.
    pub id: String,
    /// Its source locator.
    pub url: String,
    /// Why it failed.
    pub error: FetchError,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Records for every successful document, in input order.
    pub records: Vec<MetricsRecord>,
    /// Documents that failed, in input order.
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    /// Number of documents processed (scored plus failed).
    pub fn total(&self) -> usize {
        self.records.len() + self.failures.len()
    }

    /// Identifiers of the failed documents.
    pub fn failed_ids(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.id.as_str()).collect()
    }
}

/// Fetch and score every entry.
///
/// Runs on the current rayon pool. `on_done` is called once per entry, from
/// whichever worker handled it, with `true` when the entry was scored.
#[tracing::instrument(skip_all, fields(entries = entries.len()))]
pub fn run_batch<S, F>(
    entries: &[BatchEntry],
    source: &S,
    lexicon: &Lexicon,
    on_done: F,
) -> BatchReport
where
    S: TextSource + ?Sized,
    F: Fn(&BatchEntry, bool) + Sync,
{
    let outcomes: Vec<Result<MetricsRecord, BatchFailure>> = entries
        .par_iter()
        .map(|entry| {
            let outcome = score_entry(entry, source, lexicon);
            on_done(entry, outcome.is_ok());
            outcome
        })
        .collect();

    let mut report = BatchReport::default();
    for outcome in outcomes {
        match outcome {
            Ok(record) => report.records.push(record),
            Err(failure) => report.failures.push(failure),
        }
    }

    tracing::info!(
        scored = report.records.len(),
        failed = report.failures.len(),
        "batch complete"
    );
    report
}

fn score_entry<S>(
    entry: &BatchEntry,
    source: &S,
    lexicon: &Lexicon,
) -> Result<MetricsRecord, BatchFailure>
where
    S: TextSource + ?Sized,
{
    tracing::info!(id = %entry.id, url = %entry.url, "processing document");

    match source.fetch_text(&entry.url) {
        Ok(text) => {
            let document = Document {
                id: entry.id.clone(),
                url: entry.url.clone(),
                text,
            };
            Ok(metrics::analyze(&document, lexicon))
        }
        Err(error) => {
            tracing::warn!(id = %entry.id, url = %entry.url, error = %error, "document skipped");
            Err(BatchFailure {
                id: entry.id.clone(),
                url: entry.url.clone(),
                error,
            })
        }
    }
}
