//! # ActorEntity Trait
//!
//! The contract a record type implements to be stored by the generic
//! [`ResourceActor`](crate::ResourceActor). It names the id and DTO types and
//! provides lifecycle hooks (`on_create`, `on_update`, `on_delete`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`; implement them only to add validation or side effects.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any stored record must implement to be managed by `ResourceActor`.
///
/// Associated types keep every operation typed: a `Book` actor only accepts
/// `BookCreate` and `BookUpdate` payloads.
///
/// # Async & Context
/// Hooks are async and receive the `Context` passed to
/// [`ResourceActor::run`](crate::ResourceActor::run), so dependencies are bound
/// when the actor starts rather than when it is constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier of a record. Built from the actor's `u32` counter on create.
    type Id: Eq + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a record.
    type Create: Send + Sync + Debug;

    /// Payload required to update a record.
    type Update: Send + Sync + Debug;

    /// Dependencies injected into every hook. Use `()` if there are none.
    type Context: Send + Sync;

    /// Error returned by the hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The record's identifier, used for lookups.
    fn id(&self) -> &Self::Id;

    /// Construct the record from its freshly assigned id and the create payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the record is built and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received for this record.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
