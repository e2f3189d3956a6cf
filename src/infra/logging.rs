//! Tracing setup: a log file plus stderr outside the TUI.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "notecli=info";
const VERBOSE_LOG_FILTER: &str = "notecli=debug";
const LOG_FILE_NAME: &str = "notecli.log";

/// Logging options derived from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogConfig {
    pub verbose: bool,
    /// Suppresses stderr output so log lines never corrupt the terminal UI.
    pub tui_mode: bool,
}

/// Directory holding the log file: `<data_local_dir>/notecli`.
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("notecli")
}

/// Initializes the global subscriber.
///
/// Never fails: when the log file cannot be opened only stderr is used, and a
/// second call is ignored.
pub fn init(config: LogConfig) {
    let file_filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(if config.verbose {
                VERBOSE_LOG_FILTER
            } else {
                DEFAULT_LOG_FILTER
            })
        })
    };

    let file_layer = open_log_file().ok().map(|file| {
        tracing_subscriber::fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_filter(file_filter())
    });

    let console_layer = (!config.tui_mode).then(|| {
        let filter = if config.verbose {
            file_filter()
        } else {
            EnvFilter::new("warn")
        };
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .without_time()
            .with_filter(filter)
    });

    let _ = tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init();
}

fn open_log_file() -> io::Result<File> {
    let dir = log_dir();
    fs::create_dir_all(&dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
}
