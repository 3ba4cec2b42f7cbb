//! Tracing subscriber setup
//!
//! `RUST_LOG` overrides the level chosen on the command line.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::cli::LogSink;
use crate::error::{AppError, AppResult};

/// Installs the global subscriber for `sink`
///
/// Does nothing for [`LogSink::Off`].
pub fn init(level: Level, sink: &LogSink) -> AppResult<()> {
    let filter = build_env_filter(level);

    match sink {
        LogSink::Off => Ok(()),
        LogSink::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .without_time()
            .try_init()
            .map_err(|e| AppError::logging(e.to_string())),
        LogSink::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| AppError::logging(e.to_string()))
        }
    }
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG`
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_installs_nothing() {
        assert!(init(Level::DEBUG, &LogSink::Off).is_ok());
    }

    #[test]
    fn test_missing_log_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("calc.log");
        let result = init(Level::INFO, &LogSink::File(path));
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
