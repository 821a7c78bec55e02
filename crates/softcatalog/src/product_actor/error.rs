//! Error types for the Product actor.

use resource_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A batch write was refused; nothing from it was stored.
    #[error("Batch rejected at record {index}: {reason}")]
    BatchRejected { index: usize, reason: String },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::BatchRejected { index, reason } => {
                ProductError::BatchRejected { index, reason }
            }
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
