//! One handler per route. Each reads or writes the store through the
//! [`BookClient`](crate::clients::BookClient) held in [`AppState`].

use axum::{
    extract::{Path, State},
    http::{Method, Uri},
    Extension, Json,
};
use store_actor::ActorClient;
use tracing::{debug, info};

use super::dto::{
    BookAdded, BookDeleted, BookUpdated, Welcome, BOOK_ADDED, BOOK_DELETED, DELETE_NOT_FOUND,
    GET_NOT_FOUND, UPDATE_NOT_FOUND, WELCOME_TITLE,
};
use super::error::AppError;
use super::middleware::JsonBody;
use super::state::AppState;
use crate::model::{Book, BookCreate, BookId, BookUpdate};

pub async fn welcome() -> Json<Welcome> {
    Json(Welcome {
        title: WELCOME_TITLE.to_string(),
    })
}

pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, AppError> {
    Ok(Json(state.books.list().await?))
}

pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<Json<Book>, AppError> {
    state
        .books
        .get(BookId::from(book_id))
        .await
        .map_err(|e| AppError::from_book_error(e, GET_NOT_FOUND))?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(GET_NOT_FOUND.to_string()))
}

/// Adds a book with a server-derived title. The request body is ignored.
///
/// The insert and the listing returned as `data` happen in one store turn.
pub async fn add_book(State(state): State<AppState>) -> Result<Json<BookAdded>, AppError> {
    let (book, data) = state
        .books
        .create_book_and_list(BookCreate::default())
        .await?;
    info!(book_id = %book.id, size = data.len(), "Book added");

    Ok(Json(BookAdded {
        message: BOOK_ADDED.to_string(),
        data,
    }))
}

/// Replaces the title when the JSON body carries a non-empty string `title`.
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    body: Option<Extension<JsonBody>>,
) -> Result<Json<BookUpdated>, AppError> {
    let title = body
        .as_ref()
        .and_then(|Extension(body)| body.str_field("title"))
        .map(str::to_string);
    debug!(%book_id, ?title, "Update requested");

    let book = state
        .books
        .update_book(BookId::from(book_id.as_str()), BookUpdate { title })
        .await
        .map_err(|e| AppError::from_book_error(e, UPDATE_NOT_FOUND))?;

    Ok(Json(BookUpdated {
        message: format!("Book with Id {book_id} is updated"),
        data: book,
    }))
}

pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<Json<BookDeleted>, AppError> {
    let book = state
        .books
        .delete(BookId::from(book_id))
        .await
        .map_err(|e| AppError::from_book_error(e, DELETE_NOT_FOUND))?;
    info!(book_id = %book.id, "Book deleted");

    Ok(Json(BookDeleted {
        message: BOOK_DELETED.to_string(),
        book_deleted: vec![book],
    }))
}

/// Answers requests no route matched.
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("Cannot {method} {}", uri.path()))
}
