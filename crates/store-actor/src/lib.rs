//! # Store Actor
//!
//! Building blocks for keeping an ordered, in-memory collection of records
//! behind a Tokio actor and talking to it through a typed client.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the record type, its payloads and hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - owns the collection, processes requests
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed, cloneable access
//!
//! Business rules live in the entity; channels, ordering and id assignment
//! live in the actor.
//!
//! ## Concurrency Model
//!
//! - The actor runs in its own Tokio task and owns the collection outright
//! - Requests are processed **sequentially**, so each operation is atomic with
//!   respect to every other request and no locks are needed
//! - Clients are cheap clones of a channel sender and may be used from any task
//! - When the last client is dropped the actor's loop ends
//!
//! ## Ids
//!
//! The actor assigns ids from a counter that starts at 1 and never goes back,
//! so an id is never reused after its record is deleted.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from scripted expectations, for tests
//! of code layered on top of a client. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
