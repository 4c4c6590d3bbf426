//! HTTP surface of the Books Store.
//!
//! ```text
//! request ─▶ middleware pipeline ─▶ router ─▶ handler ─▶ BookClient ─▶ Book actor
//!            (logger, JSON body)
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::AppError;
pub use router::create_router;
pub use state::AppState;
