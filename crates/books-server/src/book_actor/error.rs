//! Error types for the Book actor.

use store_actor::FrameworkError;
use thiserror::Error;

/// Errors that can occur during book operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookError {
    /// No book with the given id is in the store.
    #[error("Book not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for BookError {
    fn from(msg: String) -> Self {
        BookError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for BookError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => BookError::NotFound(id),
            other => BookError::ActorCommunicationError(other.to_string()),
        }
    }
}
