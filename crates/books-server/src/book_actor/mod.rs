//! # Book Actor
//!
//! The resource store for books: a [`ResourceActor`] specialised to [`Book`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](store_actor::ActorEntity) implementation for [`Book`]
//! - [`error`] - [`BookError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use books_server::book_actor;
//! use books_server::model::BookCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = book_actor::new(8);
//!
//!     // No dependencies, so the context is ()
//!     tokio::spawn(actor.run(()));
//!
//!     let book = client.create_book(BookCreate::titled("Dune")).await?;
//!     assert_eq!(book.id.to_string(), "1");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::BookClient;
use crate::model::Book;
use store_actor::ResourceActor;

/// Creates a new Book actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Book>, BookClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, BookClient::new(generic_client))
}
