//! Command implementations.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use lexiscore_core::{Config, Lexicon};

pub mod batch;
pub mod info;
pub mod schema;
pub mod score;

/// Word list overrides shared by the scoring commands.
#[derive(Args, Debug, Default, Clone)]
pub struct LexiconArgs {
    /// Positive word list (overrides config)
    #[arg(long, value_name = "FILE")]
    pub positive: Option<Utf8PathBuf>,

    /// Negative word list (overrides config)
    #[arg(long, value_name = "FILE")]
    pub negative: Option<Utf8PathBuf>,

    /// Extra stop words added to the built-in English list
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<Utf8PathBuf>,
}

impl LexiconArgs {
    /// Load the lexicon, preferring flags over config over defaults.
    ///
    /// An unreadable word list is fatal: no document can be scored without it.
    pub fn load(&self, config: &Config) -> anyhow::Result<Lexicon> {
        let positive = self
            .positive
            .as_deref()
            .unwrap_or_else(|| config.positive_words());
        let negative = self
            .negative
            .as_deref()
            .unwrap_or_else(|| config.negative_words());

        let mut lexicon =
            Lexicon::load(positive, negative).context("failed to load sentiment lexicon")?;

        if let Some(stopwords) = self.stopwords.as_ref().or(config.stopwords.as_ref()) {
            lexicon = lexicon
                .with_extra_stopwords(stopwords)
                .context("failed to load stop words")?;
        }
        Ok(lexicon)
    }
}
