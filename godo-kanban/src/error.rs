//! Error types for the board engine

use std::path::PathBuf;
use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur around the board model.
///
/// Missing ids and empty titles are not errors: commands report those as
/// [`Outcome::Unchanged`](crate::Outcome::Unchanged).
#[derive(Debug, Error)]
pub enum KanbanError {
    /// A drag was started while another one is in flight
    #[error("a {active} drag is already in progress")]
    DragInProgress { active: &'static str },

    /// A drop or hover arrived with no matching drag in flight
    #[error("no {expected} drag is in progress")]
    NoActiveDrag { expected: &'static str },

    /// Drag started from a control that does not pick items up
    #[error("drag cannot start from {origin}")]
    NotDraggable { origin: &'static str },

    /// Storage directory could not be used
    #[error("storage unavailable at {path}")]
    StorageUnavailable { path: PathBuf },

    /// Persisted data could not be understood
    #[error("malformed snapshot: {message}")]
    MalformedSnapshot { message: String },

    /// Lock is held by another process
    #[error("lock busy - another process owns this store")]
    LockBusy,

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KanbanError {
    /// Create a malformed snapshot error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedSnapshot {
            message: message.into(),
        }
    }

    /// Check if this is a retryable error
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::LockBusy)
    }
}

impl From<figment::Error> for KanbanError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
