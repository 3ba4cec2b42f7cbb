//! Error types for the application shell

use thiserror::Error;

use crate::input::ScriptError;

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Errors that stop the binary
///
/// Calculator errors are not here: division by zero is reported to the user
/// and the session goes on.
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal or log file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The batch script could not be parsed
    #[error("Invalid script: {0}")]
    Script(#[from] ScriptError),

    /// Batch output could not be serialized
    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The tracing subscriber could not be installed
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },

    /// Interactive mode was requested from a build without the terminal UI
    #[error("Interactive mode is not available in this build; use --keys")]
    InteractiveUnavailable,
}

impl AppError {
    /// Create a logging setup error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}
