//! # Books Store
//!
//! An in-memory collection of books served over HTTP with create, read,
//! update and delete routes.
//!
//! ## Core Components
//!
//! - **[model]**: the [`Book`](model::Book) record and its create/update payloads.
//! - **[book_actor]**: the store. A [`ResourceActor`](store_actor::ResourceActor)
//!   owns the books in insertion order and handles one request at a time.
//! - **[clients]**: [`BookClient`](clients::BookClient), the typed handle the
//!   rest of the app uses to reach the store.
//! - **[http]**: middleware pipeline, router and handlers.
//! - **[lifecycle]**: starts, seeds and stops the store; tracing setup.
//! - **[config]**: environment-driven settings.
//!
//! ## Routes
//!
//! ```text
//! GET    /                 {"title":"Welcome to Books Store"}
//! GET    /books            [{"id":"1","title":"Book 1"}, ...]
//! GET    /books/:bookId    {"id","title"} | 404 {"message":"The Book is not Found"}
//! POST   /books            {"message":"New Book Added","data":[...]}
//! PUT    /update/:bookId   {"message":"Book with Id 1 is updated","data":{...}}
//! DELETE /delete/:bookId   {"message":"Book is successfully Deleted","bookDeleted":[...]}
//! ```
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info BOOKS_PORT=3000 cargo run -p books-server
//! ```

use tokio::{net::TcpListener, signal};
use tracing::{error, info};

pub mod book_actor;
pub mod clients;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod model;

use config::Config;
use error::ServerError;
use http::{create_router, AppState};
use lifecycle::BookSystem;

/// Starts the store, serves HTTP until Ctrl+C or SIGTERM, then shuts the
/// store down.
pub async fn start_server(config: Config) -> Result<(), ServerError> {
    info!("Starting store...");
    let system = BookSystem::start(config.channel_capacity).await?;

    let app = create_router(AppState::new(
        system.book_client.clone(),
        config.body_limit,
    ));

    let address = config.address();
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    system.shutdown().await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
