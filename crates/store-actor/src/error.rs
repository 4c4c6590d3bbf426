//! # Store Errors
//!
//! Error types shared by every store actor and client.

/// Why a store request failed.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor has stopped; the request never reached it.
    #[error("Store is closed")]
    ActorClosed,
    /// The actor took the request but never answered.
    #[error("Store dropped the response")]
    ActorDropped,
    /// No record carries the requested id.
    #[error("No record with id {0}")]
    NotFound(String),
    /// Every id the counter can hand out has been used.
    #[error("Store has run out of ids")]
    IdsExhausted,
    /// A create/update/delete hook refused the change.
    #[error("Rejected by entity: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
