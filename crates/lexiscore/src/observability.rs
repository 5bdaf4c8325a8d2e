//! Logging and tracing setup.
//!
//! Two sinks: human-readable events on stderr, and JSON lines in a log file.
//! The file sink is best-effort; if its directory cannot be created the CLI
//! runs with stderr logging only.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_PATH_ENV: &str = "LEXISCORE_LOG_PATH";
const LOG_DIR_ENV: &str = "LEXISCORE_LOG_DIR";
const LOG_FILE_PREFIX: &str = "lexiscore";
const LOG_FILE_SUFFIX: &str = "jsonl";

/// Where the JSONL log file goes.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file (no rotation). Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve log locations.
    ///
    /// Precedence: `LEXISCORE_LOG_PATH`, then `LEXISCORE_LOG_DIR`, then the
    /// configured directory, then `<platform data dir>/logs`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os(LOG_PATH_ENV).map(PathBuf::from);
        let log_dir = std::env::var_os(LOG_DIR_ENV)
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(|| {
                lexiscore_core::config::user_data_local_dir()
                    .map(|dir| dir.join("logs").into_std_path_buf())
            });
        Self { log_path, log_dir }
    }

    fn appender(&self) -> Option<RollingFileAppender> {
        if let Some(ref path) = self.log_path {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty())?;
            let file = path.file_name()?.to_str()?;
            std::fs::create_dir_all(dir).ok()?;
            return RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file)
                .build(dir)
                .ok();
        }

        let dir = self.log_dir.as_ref()?;
        std::fs::create_dir_all(dir).ok()?;
        RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(LOG_FILE_PREFIX)
            .filename_suffix(LOG_FILE_SUFFIX)
            .build(dir)
            .ok()
    }
}

/// Filter for the log file.
///
/// `RUST_LOG` wins; otherwise `-q` means errors only, `-v`/`-vv` raise the
/// level to debug/trace, and the configured level applies.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Filter for stderr: warnings by default, each `-v` one level more.
pub fn stderr_filter(quiet: bool, verbose: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes the file sink.
pub fn init_observability(
    config: &ObservabilityConfig,
    file_filter: EnvFilter,
    stderr_filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(stderr_filter);

    let (file_layer, guard) = match config.appender() {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(file_filter);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };
    let has_file_sink = file_layer.is_some();

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    if !has_file_sink {
        tracing::debug!("log file unavailable; logging to stderr only");
    }
    Ok(guard)
}
