use std::sync::Arc;

use super::middleware::Pipeline;
use crate::clients::BookClient;

/// Everything the router hands to handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub books: BookClient,
    pub pipeline: Arc<Pipeline>,
}

impl AppState {
    /// State with the standard middleware pipeline.
    pub fn new(books: BookClient, body_limit: usize) -> Self {
        Self::with_pipeline(books, Pipeline::standard(body_limit))
    }

    pub fn with_pipeline(books: BookClient, pipeline: Pipeline) -> Self {
        Self {
            books,
            pipeline: Arc::new(pipeline),
        }
    }
}
