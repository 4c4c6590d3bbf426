use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::book_actor::BookError;

/// Failures an HTTP request can end in. Every variant renders as
/// `{"message": ...}` with the matching status code.
#[derive(Error, Debug, PartialEq)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Maps a store error, using `not_found` as the message for missing books.
    pub fn from_book_error(e: BookError, not_found: &str) -> Self {
        match e {
            BookError::NotFound(_) => AppError::NotFound(not_found.to_string()),
            other => AppError::from(other),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MalformedPayload { .. } => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Conversion for routes that do not look a book up by id (`GET /books`,
/// `POST /books`). A not-found from the store is unexpected there, so it is
/// an internal error; routes with an id use [`AppError::from_book_error`].
impl From<BookError> for AppError {
    fn from(e: BookError) -> Self {
        AppError::InternalError(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "message": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_not_found_uses_route_message() {
        let e = AppError::from_book_error(BookError::NotFound("4".into()), "The Book is not Found");
        assert_eq!(e, AppError::NotFound("The Book is not Found".to_string()));
        assert_eq!(e.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unexpected_not_found_is_internal() {
        let e = AppError::from(BookError::NotFound("4".into()));
        assert_eq!(e.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e, AppError::InternalError("Book not found: 4".to_string()));

        let e = AppError::from(BookError::ActorCommunicationError("Store is closed".into()));
        assert_eq!(e, AppError::InternalError("Actor communication error: Store is closed".to_string()));
    }
}
