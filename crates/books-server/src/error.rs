use thiserror::Error;

use crate::book_actor::BookError;
use crate::config::ConfigError;

/// Reasons the server process can stop with an error.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("Failed to seed the store: {0}")]
    Seed(#[from] BookError),

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("Store shutdown failed: {0}")]
    Shutdown(#[from] tokio::task::JoinError),
}
