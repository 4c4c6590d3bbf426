//! [`ActorEntity`] implementation for [`Book`].

use super::BookError;
use crate::model::{Book, BookCreate, BookId, BookUpdate};
use async_trait::async_trait;
use store_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Book {
    type Id = BookId;
    type Create = BookCreate;
    type Update = BookUpdate;
    type Context = ();
    type Error = BookError;

    fn id(&self) -> &BookId {
        &self.id
    }

    /// Builds the book, deriving `"Books {id}"` when no title was given.
    fn from_create_params(id: BookId, params: BookCreate) -> Result<Self, Self::Error> {
        let title = params.title.unwrap_or_else(|| format!("Books {id}"));
        Ok(Self::new(id, title))
    }

    /// Replaces the title only when the update carries a non-empty one.
    async fn on_update(&mut self, update: BookUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(title) = update.title.filter(|title| !title.is_empty()) {
            self.title = title;
        }
        Ok(())
    }
}
