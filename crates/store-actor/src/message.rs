//! # Generic Messages
//!
//! Message types exchanged between a [`ResourceClient`](crate::ResourceClient)
//! and its [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot channel the actor answers on.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A request for the actor that owns a collection of `T`.
///
/// The variants are the collection's CRUD surface:
///
/// - **List**: every entity, in insertion order.
/// - **Create**: builds a new entity from [`ActorEntity::Create`] and appends it.
/// - **CreateAndList**: a Create whose answer also carries the collection as it
///   stands right after the insert, taken in the same turn.
/// - **Get**: the entity with the given id, if present.
/// - **Update**: applies [`ActorEntity::Update`] to an existing entity.
/// - **Delete**: removes an entity and hands it back.
///
/// Because the payload types come from `T`, a `Book` create payload can't be
/// sent to an actor that stores anything else.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    CreateAndList {
        params: T::Create,
        respond_to: Response<(T, Vec<T>)>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
}
