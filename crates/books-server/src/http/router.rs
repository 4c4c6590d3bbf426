use axum::{
    middleware,
    routing::{delete, get, put},
    Router,
};

use super::handlers::{
    add_book, delete_book, get_book, list_books, route_not_found, update_book, welcome,
};
use super::middleware::run_pipeline;
use super::state::AppState;

/// Builds the Books Store router.
///
/// | Method | Path | Handler |
/// |---|---|---|
/// | GET | `/` | [`welcome`] |
/// | GET | `/books` | [`list_books`] |
/// | POST | `/books` | [`add_book`] |
/// | GET | `/books/:book_id` | [`get_book`] |
/// | PUT | `/update/:book_id` | [`update_book`] |
/// | DELETE | `/delete/:book_id` | [`delete_book`] |
///
/// Unknown paths and known paths with the wrong method both answer
/// `404 {"message":"Cannot {METHOD} {path}"}`. The middleware pipeline wraps
/// every route and the fallback.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome).fallback(route_not_found))
        .route(
            "/books",
            get(list_books).post(add_book).fallback(route_not_found),
        )
        .route("/books/:book_id", get(get_book).fallback(route_not_found))
        .route("/update/:book_id", put(update_book).fallback(route_not_found))
        .route("/delete/:book_id", delete(delete_book).fallback(route_not_found))
        .fallback(route_not_found)
        .layer(middleware::from_fn_with_state(
            state.pipeline.clone(),
            run_pipeline,
        ))
        .with_state(state)
}
