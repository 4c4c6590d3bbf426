use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Books. Serialised as a plain JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub String);

impl From<u32> for BookId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A book in the store.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](store_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](store_actor::ResourceActor).
///
/// See [`impl ActorEntity for Book`](#impl-ActorEntity-for-Book) for details on:
/// - Creation parameters ([`BookCreate`])
/// - Update parameters ([`BookUpdate`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
}

impl Book {
    pub fn new(id: impl Into<BookId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Payload for creating a book.
///
/// Without a title the store derives one from the assigned id (`"Books 3"`).
#[derive(Debug, Clone, Default)]
pub struct BookCreate {
    pub title: Option<String>,
}

impl BookCreate {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

/// Payload for updating a book. Absent or empty titles leave the book unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookUpdate {
    pub title: Option<String>,
}
