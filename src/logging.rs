//! Logger bootstrap.
//!
//! The library only emits through the `log` facade. The binary picks a sink:
//! a file under `--log-dir`, stderr for batch mode, or nothing while the
//! screen owns the terminal.

use std::path::Path;

use anyhow::{bail, Context, Result};
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};

const LOG_FILE_BASENAME: &str = "tasklist";

/// Where log records go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink<'a> {
    File(&'a Path),
    Stderr,
    Off,
}

/// Normalize a user-supplied level name.
pub fn normalize_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => bail!("unsupported log level '{other}': expected trace|debug|info|warn|error|off"),
    }
}

/// Start the global logger. The returned handle must be kept alive for
/// buffered file output to be flushed.
pub fn init(level: &str, sink: Sink<'_>) -> Result<Option<LoggerHandle>> {
    let level = normalize_level(level)?;
    let logger = match sink {
        Sink::Off => return Ok(None),
        Sink::Stderr => Logger::try_with_str(level)?.log_to_stderr(),
        Sink::File(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            Logger::try_with_str(level)?
                .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
        }
    };
    let handle = logger.start().context("failed to start logger")?;
    log::info!("tasklist {} logging at {level}", env!("CARGO_PKG_VERSION"));
    Ok(Some(handle))
}
