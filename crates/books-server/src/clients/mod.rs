//! Type-safe wrappers around [`ResourceClient`](store_actor::ResourceClient).

pub mod book_client;

pub use book_client::*;
