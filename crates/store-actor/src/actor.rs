//! # Generic Store Actor
//!
//! The `ResourceActor` owns an ordered, in-memory collection of entities and
//! processes requests for it one at a time.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This is the "server" half of the actor: it owns the `store` and the
/// receiving end of the channel. Requests are handled sequentially inside one
/// task, so every read-modify-write on the collection completes before the next
/// request is looked at. No `Mutex` or `RwLock` is involved.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use store_actor::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate(String);
/// #[derive(Debug)] struct NoteUpdate(String);
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Context = ();
///     type Error = NoteError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, p: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, text: p.0 })
///     }
///     async fn on_update(&mut self, u: NoteUpdate, _: &()) -> Result<(), Self::Error> {
///         self.text = u.0;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let note = client.create(NoteCreate("hello".into())).await.unwrap();
///     assert_eq!(note.id, 1);
///     assert_eq!(client.list().await.unwrap().len(), 1);
/// }
/// ```
///
/// # Implementation Details
///
/// The store is a `Vec` kept in insertion order; lookups are linear scans by
/// [`ActorEntity::id`]. Ids come from a `u32` counter that only moves forward,
/// so an id freed by a delete is never handed out again. After `u32::MAX`
/// creates answer [`FrameworkError::IdsExhausted`].
///
/// * **List**: clones the whole collection.
/// * **Create**: takes the next id, calls `T::from_create_params`, runs
///   `on_create`, appends the entity and returns it.
/// * **CreateAndList**: a Create that also returns a clone of the collection
///   from the same turn, so the snapshot always ends with the new entity.
/// * **Get**: clone of the first entity with a matching id, or `None`.
/// * **Update**: runs `on_update` on the matching entity and returns its new state.
/// * **Delete**: runs `on_delete`, removes the entity and returns it.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_id: Option<u32>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full,
    /// client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            next_id: Some(1),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    /// Hands out the next id. Once `u32::MAX` has been used the counter is
    /// spent and every later create fails.
    fn take_id(&mut self) -> Result<T::Id, FrameworkError> {
        let id = self.next_id.ok_or(FrameworkError::IdsExhausted)?;
        self.next_id = id.checked_add(1);
        Ok(T::Id::from(id))
    }

    async fn insert(
        &mut self,
        params: T::Create,
        context: &T::Context,
        entity_type: &str,
    ) -> Result<T, FrameworkError> {
        debug!(entity_type, ?params, "Create");
        let id = self.take_id().inspect_err(|_| {
            warn!(entity_type, "No ids left");
        })?;

        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::EntityError(Box::new(e))
        })?;
        if let Err(e) = item.on_create(context).await {
            warn!(entity_type, error = %e, "on_create failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        self.store.push(item.clone());
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(item)
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Create { params, respond_to } => {
                    let result = self.insert(params, &context, entity_type).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::CreateAndList { params, respond_to } => {
                    let result = self
                        .insert(params, &context, entity_type)
                        .await
                        .map(|item| (item, self.store.clone()));
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|index| self.store[index].clone());
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(index) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let item = &mut self.store[index];
                    if let Err(e) = item.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(item.clone()));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(index) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = self.store[index].on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let removed = self.store.remove(index);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(removed));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: u32,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Tag error")]
    struct TagError;

    #[async_trait]
    impl ActorEntity for Tag {
        type Id = u32;
        type Create = ();
        type Update = ();
        type Context = ();
        type Error = TagError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, _params: ()) -> Result<Self, Self::Error> {
            Ok(Self { id })
        }

        async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_last_id_is_issued_then_counter_is_spent() {
        let (mut actor, client) = ResourceActor::<Tag>::new(4);
        actor.next_id = Some(u32::MAX);
        tokio::spawn(actor.run(()));

        let last = client.create(()).await.unwrap();
        assert_eq!(last.id, u32::MAX);

        let spent = client.create(()).await;
        assert!(matches!(spent, Err(FrameworkError::IdsExhausted)));
        let spent = client.create_and_list(()).await;
        assert!(matches!(spent, Err(FrameworkError::IdsExhausted)));

        // The store itself keeps working.
        assert_eq!(client.list().await.unwrap(), vec![Tag { id: u32::MAX }]);
    }
}
