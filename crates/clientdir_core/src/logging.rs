//! Process-wide logger setup for the server and CLI binaries.
//!
//! # Responsibility
//! - Start one `flexi_logger` backend per process, writing either to rotating
//!   files or to stderr.
//! - Record panics as `event=panic_captured` lines before the default hook runs.
//!
//! # Invariants
//! - A second `init_logging` call with the same level and destination is a no-op.
//! - A second call with another level or destination fails; the first logger stays.
//! - Setup reports failures as `Err(String)` and never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "clientdir";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEPT_LOG_FILES: usize = 5;
const PANIC_MESSAGE_MAX_CHARS: usize = 160;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    level: &'static str,
    log_dir: Option<PathBuf>,
    _handle: LoggerHandle,
}

/// Starts logging at `level`.
///
/// `Some(dir)` writes rotating `clientdir_*.log` files under `dir` (created if
/// missing); `None` writes to stderr.
///
/// # Errors
/// - `level` is not one of `trace|debug|info|warn|error`.
/// - `log_dir` is blank, relative, or cannot be created.
/// - A logger is already running with a different level or destination.
/// - `flexi_logger` refuses to start.
pub fn init_logging(level: &str, log_dir: Option<&str>) -> Result<(), String> {
    let level = parse_level(level)?;
    let log_dir = log_dir.map(parse_log_dir).transpose()?;

    if let Some(active) = ACTIVE_LOGGER.get() {
        return ensure_matches(active, level, log_dir.as_deref());
    }

    let active = ACTIVE_LOGGER.get_or_try_init(|| -> Result<ActiveLogger, String> {
        let handle = start_backend(level, log_dir.as_deref())?;
        install_panic_hook();

        info!(
            "event=logging_init module=logging status=ok level={} destination={} platform={} build_mode={} version={}",
            level,
            destination_label(log_dir.as_deref()),
            std::env::consts::OS,
            if cfg!(debug_assertions) { "debug" } else { "release" },
            env!("CARGO_PKG_VERSION")
        );

        Ok(ActiveLogger {
            level,
            log_dir: log_dir.clone(),
            _handle: handle,
        })
    })?;

    // Another thread may have won the race with a different configuration.
    ensure_matches(active, level, log_dir.as_deref())
}

/// Returns `(level, log_dir)` of the running logger, or `None` before init.
pub fn logging_status() -> Option<(&'static str, Option<PathBuf>)> {
    ACTIVE_LOGGER
        .get()
        .map(|active| (active.level, active.log_dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Picks the level requested on the command line, or the build default.
pub fn effective_log_level(requested: Option<&str>) -> &str {
    requested.unwrap_or(default_log_level())
}

fn start_backend(level: &'static str, log_dir: Option<&Path>) -> Result<LoggerHandle, String> {
    let logger =
        Logger::try_with_str(level).map_err(|err| format!("bad log spec `{level}`: {err}"))?;

    let logger = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .map_err(|err| format!("cannot create log directory `{}`: {err}", dir.display()))?;
            logger
                .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
                .rotate(
                    Criterion::Size(ROTATE_AT_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(KEPT_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
        }
        None => logger
            .log_to_stderr()
            .format_for_stderr(flexi_logger::detailed_format),
    };

    logger
        .start()
        .map_err(|err| format!("logger backend did not start: {err}"))
}

fn ensure_matches(
    active: &ActiveLogger,
    level: &'static str,
    log_dir: Option<&Path>,
) -> Result<(), String> {
    if active.log_dir.as_deref() != log_dir {
        return Err(format!(
            "logger already writes to {}; cannot redirect to {}",
            destination_label(active.log_dir.as_deref()),
            destination_label(log_dir)
        ));
    }
    if active.level != level {
        return Err(format!(
            "logger already runs at `{}`; cannot change to `{}`",
            active.level, level
        ));
    }
    Ok(())
}

fn destination_label(log_dir: Option<&Path>) -> String {
    match log_dir {
        Some(dir) => format!("`{}`", dir.display()),
        None => "stderr".to_string(),
    }
}

/// Accepts level names case-insensitively; `warning` is an alias of `warn`.
fn parse_level(raw: &str) -> Result<&'static str, String> {
    const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

    let lowered = raw.trim().to_ascii_lowercase();
    let wanted = if lowered == "warning" { "warn" } else { lowered.as_str() };
    LEVELS
        .iter()
        .copied()
        .find(|level| *level == wanted)
        .ok_or_else(|| format!("unknown log level `{raw}`; use one of {}", LEVELS.join("|")))
}

fn parse_log_dir(raw: &str) -> Result<PathBuf, String> {
    let dir = PathBuf::from(raw.trim());
    if dir.as_os_str().is_empty() {
        return Err("log directory is blank".to_string());
    }
    if dir.is_relative() {
        return Err(format!("log directory `{}` is relative", dir.display()));
    }
    Ok(dir)
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map_or_else(|| "unknown".to_string(), |loc| format!("{}:{}", loc.file(), loc.line()));
        error!(
            "event=panic_captured module=logging status=error location={} message={}",
            location,
            panic_message(info)
        );
        default_hook(info);
    }));
}

fn panic_message(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = info.payload();
    let raw = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string payload>");

    // Payloads can carry client names; keep them to one short line.
    one_line(raw, PANIC_MESSAGE_MAX_CHARS)
}

fn one_line(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    if flattened.chars().count() <= max_chars {
        return flattened;
    }
    let mut clipped: String = flattened.chars().take(max_chars).collect();
    clipped.push_str("...");
    clipped
}
