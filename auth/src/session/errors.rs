use thiserror::Error;

/// Error type for session state operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Failed to read session: {0}")]
    ReadFailed(String),

    #[error("Failed to write session: {0}")]
    WriteFailed(String),
}
