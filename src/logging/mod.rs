//! File-backed tracing setup.
//!
//! The alternate screen owns the terminal, so log output goes to a file
//! the user can follow with `tail -f` from another shell.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Failures while wiring up the tracing subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Could not create the directory that holds the log file.
    #[error("Failed to create log directory {path:?}: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The log path has no usable file name or parent directory.
    #[error("Unusable log file path: {0:?}")]
    BadPath(PathBuf),

    /// A global subscriber was already installed.
    #[error("Tracing subscriber already installed")]
    AlreadyInstalled,
}

/// Install the global tracing subscriber writing to `log_path`.
///
/// Honors `RUST_LOG`, defaulting to `info`. The log directory is created
/// on demand; ANSI styling is disabled since the sink is a plain file.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::BadPath(log_path.to_path_buf()))?;
    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::BadPath(log_path.to_path_buf()))?;

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::CreateDir {
        path: directory.to_path_buf(),
        source,
    })?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)
}
