use crate::book_actor::BookError;
use crate::clients::BookClient;
use crate::model::{Book, BookCreate};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Titles the store is seeded with at start-up, in order.
pub const SEED_TITLES: [&str; 2] = ["Book 1", "Book 2"];

/// Owns the running Book actor.
///
/// `BookSystem` is responsible for:
/// - **Lifecycle Management**: spawning the actor and awaiting it on shutdown
/// - **Seeding**: loading the initial records through the regular create path
///
/// # Example
///
/// ```ignore
/// let system = BookSystem::start(32).await?;
/// let books = system.book_client.list().await?;
/// system.shutdown().await?;
/// ```
pub struct BookSystem {
    /// Client for interacting with the Book actor
    pub book_client: BookClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: JoinHandle<()>,
}

impl BookSystem {
    /// Spawns an empty Book actor.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(buffer_size: usize) -> Self {
        let (book_actor, book_client) = crate::book_actor::new(buffer_size);
        let handle = tokio::spawn(book_actor.run(()));

        Self {
            book_client,
            handle,
        }
    }

    /// Spawns the Book actor and seeds it with [`SEED_TITLES`].
    pub async fn start(buffer_size: usize) -> Result<Self, BookError> {
        let system = Self::new(buffer_size);
        system.seed(SEED_TITLES).await?;
        Ok(system)
    }

    /// Creates one book per title, in order, and returns them.
    pub async fn seed<'a>(
        &self,
        titles: impl IntoIterator<Item = &'a str>,
    ) -> Result<Vec<Book>, BookError> {
        let mut seeded = Vec::new();
        for title in titles {
            seeded.push(self.book_client.create_book(BookCreate::titled(title)).await?);
        }
        info!(count = seeded.len(), "Store seeded");
        Ok(seeded)
    }

    /// Gracefully shuts down the actor.
    ///
    /// Dropping the client closes the channel once every other clone (for
    /// example the one held by the HTTP router) is gone as well; the actor then
    /// leaves its loop and the task completes.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down store...");
        drop(self.book_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e);
        }

        info!("Store shutdown complete.");
        Ok(())
    }
}
