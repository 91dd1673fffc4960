use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};

/// Start the file logger described by the config. The returned handle must
/// stay alive for the life of the process; buffered records are flushed when
/// it is flushed or dropped.
pub fn init(log_file: &str, log_level: &str) -> Result<LoggerHandle> {
    let logger = Logger::try_with_str(rust_level(log_level))
        .context("invalid log specification")?
        .log_to_file(file_spec(Path::new(log_file)))
        .append()
        .write_mode(WriteMode::BufferAndFlush)
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .context("failed to start logger")?;

    Ok(logger)
}

/// Map a configured level name onto a `log` level. The config layer already
/// normalizes unknown values to INFO; the fallback here mirrors that.
pub fn rust_level(level: &str) -> &'static str {
    match level.trim().to_uppercase().as_str() {
        "DEBUG" => "debug",
        "WARNING" => "warn",
        "ERROR" => "error",
        "CRITICAL" => "error",
        _ => "info",
    }
}

/// Build a FileSpec that writes to exactly the configured path, e.g.
/// `contact_manager.log` rather than a timestamped variant.
fn file_spec(path: &Path) -> FileSpec {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let basename = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("contactbook")
        .to_string();

    let mut spec = FileSpec::default()
        .directory(directory)
        .basename(basename)
        .suppress_timestamp();
    if let Some(suffix) = path.extension().and_then(|ext| ext.to_str()) {
        spec = spec.suffix(suffix);
    }
    spec
}
