//! Process-wide logging bootstrap.
//!
//! # Responsibility
//! - Start the `flexi_logger` backend once per process.
//! - Route logs to rotating files when a directory is configured, to stderr
//!   otherwise.
//!
//! # Invariants
//! - Initialization is idempotent for identical settings and never panics.
//! - Re-initialization with a different level or sink is rejected.
//! - Core log lines are metadata-only; memo text and names are never logged.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "memolink";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGING_STATE: OnceCell<ActiveLogging> = OnceCell::new();

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    /// Rotating files under an absolute directory.
    Directory(PathBuf),
}

/// Requested logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// One of `trace|debug|info|warn|error`, case-insensitive.
    pub level: String,
    /// Absolute directory for rolling files; `None` logs to stderr.
    pub log_dir: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

struct ActiveLogging {
    level: &'static str,
    sink: LogSink,
    _handle: LoggerHandle,
}

/// Initializes logging, or confirms the existing setup matches `settings`.
///
/// # Errors
/// - Unsupported level, relative/empty directory, or directory creation failure.
/// - Logging already active with a different level or sink.
/// - Backend start failure.
pub fn init_logging(settings: &LoggingSettings) -> Result<(), String> {
    let level = normalize_level(&settings.level)?;
    let sink = match settings.log_dir.as_deref() {
        Some(dir) => LogSink::Directory(normalize_log_dir(dir)?),
        None => LogSink::Stderr,
    };

    let active = LOGGING_STATE.get_or_try_init(|| start_backend(level, sink.clone()))?;
    if active.sink != sink {
        return Err(format!(
            "logging already initialized with sink {}; refusing to switch to {}",
            describe_sink(&active.sink),
            describe_sink(&sink)
        ));
    }
    if active.level != level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            active.level, level
        ));
    }
    Ok(())
}

/// Returns `(level, sink)` of the active logger, or `None` before init.
pub fn logging_status() -> Option<(&'static str, LogSink)> {
    LOGGING_STATE
        .get()
        .map(|active| (active.level, active.sink.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_backend(level: &'static str, sink: LogSink) -> Result<ActiveLogging, String> {
    let logger =
        Logger::try_with_str(level).map_err(|err| format!("invalid log level `{level}`: {err}"))?;

    let handle = match &sink {
        LogSink::Stderr => logger
            .log_to_stderr()
            .format_for_stderr(flexi_logger::default_format)
            .start(),
        LogSink::Directory(dir) => {
            std::fs::create_dir_all(dir).map_err(|err| {
                format!("failed to create log directory `{}`: {err}", dir.display())
            })?;
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(dir.as_path())
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
                .start()
        }
    }
    .map_err(|err| format!("failed to start logger: {err}"))?;

    log::info!(
        "event=logging_init module=core status=ok level={} sink={} version={}",
        level,
        describe_sink(&sink),
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogging {
        level,
        sink,
        _handle: handle,
    })
}

fn describe_sink(sink: &LogSink) -> String {
    match sink {
        LogSink::Stderr => "stderr".to_string(),
        LogSink::Directory(dir) => format!("`{}`", dir.display()),
    }
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}
