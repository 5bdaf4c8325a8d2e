//! Score command implementation

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use lexiscore_core::{Config, Document, MetricsRecord, analyze};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use super::LexiconArgs;
use crate::fetch;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Text or HTML file to score
    pub file: Utf8PathBuf,

    /// Identifier for the output row (default: the file stem)
    #[arg(long)]
    pub id: Option<String>,

    #[command(flatten)]
    pub lexicon: LexiconArgs,
}

/// Score a single local document and print its metrics.
#[instrument(name = "cmd_score", skip_all, fields(file = %args.file))]
pub fn cmd_score(args: ScoreArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let lexicon = args.lexicon.load(config)?;
    let text = fetch::read_local(&args.file, config.input_limit())
        .with_context(|| format!("failed to read {}", args.file))?;

    let id = args
        .id
        .clone()
        .or_else(|| args.file.file_stem().map(str::to_string))
        .unwrap_or_default();
    debug!(id = %id, chars = text.len(), "executing score command");

    let record = analyze(
        &Document {
            id,
            url: args.file.to_string(),
            text,
        },
        &lexicon,
    );

    if global_json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&record);
    }
    Ok(())
}

fn print_record(record: &MetricsRecord) {
    println!("{} {}", record.url_id.bold(), record.url.dimmed());
    println!();

    let rows: [(&str, String); 13] = [
        ("POSITIVE SCORE", record.positive_score.to_string()),
        ("NEGATIVE SCORE", record.negative_score.to_string()),
        ("POLARITY SCORE", format!("{:.4}", record.polarity_score)),
        ("SUBJECTIVITY SCORE", format!("{:.4}", record.subjectivity_score)),
        ("AVG SENTENCE LENGTH", format!("{:.2}", record.avg_sentence_length)),
        (
            "PERCENTAGE OF COMPLEX WORDS",
            format!("{:.4}", record.percentage_of_complex_words),
        ),
        ("FOG INDEX", format!("{:.2}", record.fog_index)),
        (
            "AVG NUMBER OF WORDS PER SENTENCE",
            format!("{:.2}", record.avg_number_of_words_per_sentence),
        ),
        ("COMPLEX WORD COUNT", record.complex_word_count.to_string()),
        ("WORD COUNT", record.word_count.to_string()),
        ("SYLLABLE PER WORD", format!("{:.2}", record.syllable_per_word)),
        ("PERSONAL PRONOUNS", record.personal_pronouns.to_string()),
        ("AVG WORD LENGTH", format!("{:.2}", record.avg_word_length)),
    ];

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in rows {
        println!("  {:<width$}  {}", label.dimmed(), value.cyan());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Config, Utf8PathBuf) {
        let tmp = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        fs::write(root.join("pos.txt"), "good\n").unwrap();
        fs::write(root.join("neg.txt"), "bad\n").unwrap();
        let doc = root.join("doc.txt");
        fs::write(&doc, "A good day. Not a bad one.").unwrap();

        let config = Config {
            positive_words: Some(root.join("pos.txt")),
            negative_words: Some(root.join("neg.txt")),
            ..Config::default()
        };
        (tmp, config, doc)
    }

    fn args(file: Utf8PathBuf) -> ScoreArgs {
        ScoreArgs {
            file,
            id: None,
            lexicon: LexiconArgs::default(),
        }
    }

    #[test]
    fn text_output_succeeds() {
        let (_tmp, config, doc) = setup();
        assert!(cmd_score(args(doc), false, &config).is_ok());
    }

    #[test]
    fn json_output_succeeds() {
        let (_tmp, config, doc) = setup();
        assert!(cmd_score(args(doc), true, &config).is_ok());
    }

    #[test]
    fn missing_document_fails() {
        let (_tmp, config, doc) = setup();
        let missing = doc.with_file_name("missing.txt");
        assert!(cmd_score(args(missing), false, &config).is_err());
    }
}
