//! # Book Client
//!
//! High-level API for the Book actor. `list`, `get` and `delete` come from
//! [`ActorClient`]; creation and updates are book-specific.
use crate::book_actor::BookError;
use crate::model::{Book, BookCreate, BookId, BookUpdate};
use async_trait::async_trait;
use store_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Book actor.
#[derive(Clone)]
pub struct BookClient {
    inner: ResourceClient<Book>,
}

impl BookClient {
    pub fn new(inner: ResourceClient<Book>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_book(&self, params: BookCreate) -> Result<Book, BookError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Creates a book and returns it with the store as it stood right after
    /// the insert.
    #[instrument(skip(self))]
    pub async fn create_book_and_list(
        &self,
        params: BookCreate,
    ) -> Result<(Book, Vec<Book>), BookError> {
        debug!("Sending request");
        self.inner
            .create_and_list(params)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_book(&self, id: BookId, update: BookUpdate) -> Result<Book, BookError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Book> for BookClient {
    type Error = BookError;

    fn inner(&self) -> &ResourceClient<Book> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        BookError::from(e)
    }
}
