//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber for the server.
//!
//! ## Configuration
//!
//! Compact format without the crate/module prefix (`with_target(false)`); the
//! store logs carry an `entity_type` field instead. Levels come from `RUST_LOG`.
//!
//! ```bash
//! # Requests and store mutations
//! RUST_LOG=info cargo run -p books-server
//!
//! # Payloads and lookups as well
//! RUST_LOG=debug cargo run -p books-server
//!
//! # Only the store
//! RUST_LOG=store_actor=debug cargo run -p books-server
//! ```
//!
//! ## What Gets Traced
//!
//! - **Requests**: method and URI of every request (request logger stage)
//! - **Actor Lifecycle**: startup, seeding, shutdown and final store size
//! - **Store Operations**: List, Create, Get, Update, Delete with book ids
//! - **Errors**: not-found lookups, rejected payloads, failed hooks
//!
//! With `RUST_LOG=info` a create request looks like:
//!
//! ```text
//! INFO Request method=POST uri=/books
//! INFO Created entity_type="Book" id=3 size=3
//! ```

/// Installs the global subscriber. Call once, from `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
