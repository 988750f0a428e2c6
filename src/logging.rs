use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

// The TUI owns stdout, so every log line goes to a file.
pub fn init(level: &str, log_file: &Path) -> Result<(), LoggingInitError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|source| LoggingInitError::InvalidFilter { source })?;

    let file = open_log_file(log_file)?;

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .compact()
            .with_ansi(false)
            .with_writer(Mutex::new(file)),
    );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| LoggingInitError::SetGlobalDefault { source })?;

    Ok(())
}

fn open_log_file(path: &Path) -> Result<File, LoggingInitError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| LoggingInitError::OpenFile {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingInitError::OpenFile {
            path: path.to_path_buf(),
            source,
        })
}

pub fn default_log_path() -> PathBuf {
    state_dir().join("foundry").join("foundry.log")
}

fn state_dir() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".local").join("state"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

#[derive(Debug, Error)]
pub enum LoggingInitError {
    #[error("invalid filter config: {source}")]
    InvalidFilter {
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("cannot open log file {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to set global default subscriber: {source}")]
    SetGlobalDefault {
        #[source]
        source: tracing::subscriber::SetGlobalDefaultError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn default_log_path_prefers_xdg_state_home() {
        std::env::set_var("XDG_STATE_HOME", "/tmp/foundry-state");
        assert_eq!(
            default_log_path(),
            PathBuf::from("/tmp/foundry-state/foundry/foundry.log")
        );
        std::env::remove_var("XDG_STATE_HOME");
    }

    #[test]
    fn open_log_file_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("foundry.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
