use std::io;
use std::time::Duration;

/// Errors that can occur during robotrun operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unknown action type: {0}")]
    UnknownAction(String),

    #[error("Invalid parameter '{0}': expected NAME=VALUE")]
    InvalidParameter(String),
}

/// Result type alias for robotrun operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures observed while driving a child process.
///
/// These never escape [`ProcessExecutor::execute`](crate::process::ProcessExecutor::execute);
/// they are folded into the invocation result as a status tag plus an
/// `<exception>` block.
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("failed while waiting for process: {0}")]
    Wait(#[source] io::Error),

    #[error("process did not finish within {0:?}")]
    Timeout(Duration),

    #[error("failed to read process stream: {0}")]
    Stream(#[source] io::Error),

    #[error("empty command")]
    EmptyCommand,
}

impl ExecutionError {
    /// Status code recorded when this failure ends an invocation.
    pub fn tag(&self) -> &'static str {
        match self {
            ExecutionError::Launch { .. } | ExecutionError::EmptyCommand => "LaunchError",
            ExecutionError::Wait(_) => "WaitError",
            ExecutionError::Timeout(_) => "TimeoutError",
            ExecutionError::Stream(_) => "StreamError",
        }
    }
}
