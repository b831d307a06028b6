use crate::utils::error::{Result, ScaffoldError};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Owns the installed subscriber. Logging stops when the handle is dropped.
#[must_use = "logging is torn down as soon as the handle is dropped"]
pub struct LoggerHandle {
    _guard: DefaultGuard,
    log_file: Option<PathBuf>,
}

impl LoggerHandle {
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    pub fn shutdown(self) {
        tracing::debug!("Logger shut down");
    }
}

fn console_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("mlops_scaffold=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mlops_scaffold=info"))
    }
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ScaffoldError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ScaffoldError::CreateFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Console logging (compact or JSON) on stderr, plus an optional append-mode
/// log file that always records at DEBUG.
pub fn init_cli_logger(
    verbose: bool,
    format: LogFormat,
    log_file: Option<&Path>,
) -> Result<LoggerHandle> {
    let compact = (format == LogFormat::Compact).then(|| {
        fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(std::io::stderr)
            .compact()
            .with_filter(console_filter(verbose))
    });

    let json = (format == LogFormat::Json).then(|| {
        fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(std::io::stderr)
            .json()
            .with_filter(console_filter(verbose))
    });

    let file_layer = match log_file {
        Some(path) => {
            let file = open_log_file(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .with_filter(LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    let guard = tracing_subscriber::registry()
        .with(compact)
        .with(json)
        .with(file_layer)
        .set_default();

    Ok(LoggerHandle {
        _guard: guard,
        log_file: log_file.map(Path::to_path_buf),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_file_receives_events() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs").join("running_logs.log");

        let handle = init_cli_logger(false, LogFormat::Compact, Some(&log_path)).unwrap();
        assert_eq!(handle.log_file(), Some(log_path.as_path()));
        tracing::info!("hello from the scaffold logger");
        tracing::debug!("debug line for the file");
        handle.shutdown();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("hello from the scaffold logger"));
        assert!(content.contains("debug line for the file"));
    }

    #[test]
    fn test_log_file_is_appended() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("running_logs.log");
        std::fs::write(&log_path, "earlier run\n").unwrap();

        let handle = init_cli_logger(true, LogFormat::Json, Some(&log_path)).unwrap();
        tracing::info!("second run");
        drop(handle);

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.starts_with("earlier run\n"));
        assert!(content.contains("second run"));
    }
}
