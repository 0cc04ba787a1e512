//! Error types for the lifeline ecosystem.

use thiserror::Error;

/// Errors that can occur in lifeline operations.
///
/// Mutations surface `Validation` and `EventNotFound` synchronously and
/// leave the store unchanged when they fail. Feed projection never errors.
#[derive(Error, Debug)]
pub enum LifelineError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Timeline parse error: {0}")]
    TimelineParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for lifeline operations.
pub type LifelineResult<T> = Result<T, LifelineError>;
