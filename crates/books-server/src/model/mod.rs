//! Pure data structures implementing the [`ActorEntity`](store_actor::ActorEntity) trait.

pub mod book;

pub use book::*;
