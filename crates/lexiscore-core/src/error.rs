//! Error types for lexiscore-core.
//!
//! Scoring itself never fails. Errors only come from the edges: loading
//! configuration, loading word lists, and fetching document text.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A word list could not be read. Fatal at startup.
#[derive(Error, Debug)]
#[error("failed to read word list {path}")]
pub struct LexiconLoadError {
    /// The word list that failed to load.
    pub path: Utf8PathBuf,
    /// The underlying I/O failure.
    #[source]
    pub source: std::io::Error,
}

/// Errors raised while retrieving the raw text of one document.
///
/// A fetch failure is isolated to its document; the batch keeps going.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("request to {url} failed: {message}")]
    Request {
        /// Locator that was requested.
        url: String,
        /// Transport-level description of the failure.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Locator that was requested.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// A local source could not be read.
    #[error("failed to read {path}")]
    Io {
        /// Path of the local source.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The document exceeds the configured input size limit.
    #[error("{url} is {size} bytes (limit: {limit} bytes)")]
    TooLarge {
        /// Locator of the oversized document.
        url: String,
        /// Size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: usize,
    },

    /// The locator scheme is not supported by this build.
    #[error("unsupported source locator: {0}")]
    Unsupported(String),
}
