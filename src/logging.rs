//! Logging setup
//!
//! Installs a global tracing subscriber writing to `slotpager.log` in the
//! config directory, so the terminal UI is never drawn over.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

pub const LOG_FILE: &str = "slotpager.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to prepare log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Start logging into `dir`, returning the log file path
///
/// `level` is used unless `RUST_LOG` is set.
pub fn init(dir: &Path, level: &str) -> Result<PathBuf, LoggingError> {
    std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| LoggingError::OpenFile {
            path: path.clone(),
            source,
        })?;

    let filter = parse_filter(level, std::env::var("RUST_LOG").ok())?;
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file));
    let subscriber = Registry::default().with(filter).with(file_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!("Logging initialized; log file at {}", path.display());
    Ok(path)
}

/// Filter from `RUST_LOG` when present and non-empty, else from `level`
fn parse_filter(level: &str, env_override: Option<String>) -> Result<EnvFilter, LoggingError> {
    let directives = env_override
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| level.to_string());
    Ok(EnvFilter::try_new(directives)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_used_without_override() {
        let filter = parse_filter("debug", None).unwrap();
        assert!(filter.to_string().contains("debug"));
    }

    #[test]
    fn test_env_override_wins() {
        let filter = parse_filter("warn", Some("slotpager=trace".to_string())).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("trace"));
        assert!(!rendered.contains("warn"));
    }

    #[test]
    fn test_blank_override_ignored() {
        let filter = parse_filter("error", Some("  ".to_string())).unwrap();
        assert!(filter.to_string().contains("error"));
    }

    #[test]
    fn test_bad_level_rejected() {
        assert!(matches!(
            parse_filter("slotpager=loud", None),
            Err(LoggingError::Filter(_))
        ));
    }
}
