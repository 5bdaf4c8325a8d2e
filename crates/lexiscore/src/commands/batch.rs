//! Batch command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use lexiscore_core::{BatchReport, Config, run_batch};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use super::LexiconArgs;
use crate::fetch::Fetcher;
use crate::table;

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// CSV file with URL_ID and URL columns
    pub input: Utf8PathBuf,

    /// Write the metrics table (JSON with --json) to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Worker threads (overrides config; default: one per CPU)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    #[command(flatten)]
    pub lexicon: LexiconArgs,
}

/// Fetch and score every document in the input table.
///
/// Documents that cannot be fetched are reported and left out of the output;
/// they do not fail the command.
#[instrument(name = "cmd_batch", skip_all, fields(input = %args.input))]
pub fn cmd_batch(
    args: BatchArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
) -> anyhow::Result<()> {
    debug!(output = ?args.output, json_output = global_json, "executing batch command");

    let lexicon = args.lexicon.load(config)?;
    let entries = table::read_entries(&args.input)?;
    let fetcher = Fetcher::new(config.fetch_timeout(), config.input_limit())
        .context("failed to build HTTP client")?;

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(entries.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} {msg}")?
                .progress_chars("=> "),
        );
        bar
    };

    let jobs = args.jobs.or(config.jobs);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.unwrap_or(0))
        .build()
        .context("failed to start worker pool")?;
    debug!(threads = pool.current_num_threads(), "worker pool ready");

    let report = pool.install(|| {
        run_batch(&entries, &fetcher, &lexicon, |entry, _| {
            progress.set_message(entry.id.clone());
            progress.inc(1);
        })
    });
    progress.finish_and_clear();

    match args.output {
        Some(ref path) => {
            let file = File::create(path.as_std_path())
                .with_context(|| format!("failed to create {path}"))?;
            write_report(BufWriter::new(file), &report, global_json)
                .with_context(|| format!("failed to write {path}"))?;
        }
        None => write_report(io::stdout().lock(), &report, global_json)?,
    }

    if !quiet {
        print_summary(&report, args.output.as_ref());
    }
    Ok(())
}

/// Records as a JSON array with `--json`, otherwise as a CSV table.
fn write_report<W: Write>(mut writer: W, report: &BatchReport, json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut writer, &report.records)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    } else {
        table::write_records(writer, &report.records)
    }
}

/// Summary goes to stderr so stdout stays a clean table.
fn print_summary(report: &BatchReport, output: Option<&Utf8PathBuf>) {
    let scored = report.records.len();
    let failed = report.failures.len();

    let status = if failed == 0 {
        "DONE:".green().to_string()
    } else {
        "DONE:".yellow().to_string()
    };
    eprintln!(
        "{status} {scored} of {} documents scored, {failed} failed",
        report.total()
    );
    if let Some(path) = output {
        eprintln!("  {}: {}", "Output".dimmed(), path.cyan());
    }
    for failure in &report.failures {
        eprintln!(
            "  {} {} ({}): {}",
            "FAILED".red(),
            failure.id.bold(),
            failure.url,
            failure.error
        );
    }
}
