//! # Framework Errors
//!
//! Errors raised by the collection plumbing itself, independent of any entity.
//! Domain clients translate these into their own error enums.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
    /// A batch write was refused as a whole; nothing from it was stored.
    #[error("Batch rejected at record {index}: {reason}")]
    BatchRejected { index: usize, reason: String },
}

impl FrameworkError {
    /// True when the failure means the collection could not be reached at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, FrameworkError::ActorClosed | FrameworkError::ActorDropped)
    }
}
