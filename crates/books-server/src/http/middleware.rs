//! # Middleware Pipeline
//!
//! Stages that run, in registration order, before the router hands a request
//! to its handler. Each stage either passes the (possibly rewritten) request on
//! with [`Flow::Continue`] or answers it with [`Flow::Respond`], which skips
//! every later stage and the handler.
//!
//! The pipeline is mounted as a single axum layer by [`run_pipeline`].

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header::CONTENT_LENGTH, header::CONTENT_TYPE, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::error::AppError;

/// Outcome of a stage.
pub enum Flow {
    Continue(Request),
    Respond(Response),
}

/// One step of the pipeline.
#[async_trait]
pub trait Stage: Send + Sync {
    fn name(&self) -> &'static str;

    async fn process(&self, request: Request) -> Flow;
}

/// Ordered list of stages.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stages every server runs: request logging, then JSON body parsing.
    pub fn standard(body_limit: usize) -> Self {
        Self::new()
            .with(RequestLogger)
            .with(JsonBodyParser::new(body_limit))
    }

    /// Appends a stage.
    pub fn with(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs the stages in order, stopping at the first one that responds.
    pub async fn run(&self, mut request: Request) -> Flow {
        for stage in &self.stages {
            match stage.process(request).await {
                Flow::Continue(next) => request = next,
                Flow::Respond(response) => {
                    debug!(stage = stage.name(), "Stage responded");
                    return Flow::Respond(response);
                }
            }
        }
        Flow::Continue(request)
    }
}

/// axum middleware that runs the pipeline and then the rest of the router.
pub async fn run_pipeline(
    State(pipeline): State<Arc<Pipeline>>,
    request: Request,
    next: Next,
) -> Response {
    match pipeline.run(request).await {
        Flow::Continue(request) => next.run(request).await,
        Flow::Respond(response) => response,
    }
}

/// Logs the method and URI of every request.
pub struct RequestLogger;

#[async_trait]
impl Stage for RequestLogger {
    fn name(&self) -> &'static str {
        "request_logger"
    }

    async fn process(&self, request: Request) -> Flow {
        info!(method = %request.method(), uri = %request.uri(), "Request");
        Flow::Continue(request)
    }
}

/// A JSON request body, parsed by [`JsonBodyParser`] and stored in the
/// request's extensions for handlers to pick up.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Value);

impl JsonBody {
    /// The string stored under `key`, if the body is an object that has one.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

/// Parses JSON request bodies.
///
/// Only requests whose `Content-Type` is JSON are touched. An empty body
/// parses as `{}`. Bodies over `limit` bytes are rejected with 413, and
/// anything that is not a JSON object or array with 400.
pub struct JsonBodyParser {
    limit: usize,
}

impl JsonBodyParser {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    fn parse(bytes: &[u8]) -> Result<Value, AppError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Object(Default::default()));
        }
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| AppError::MalformedPayload(e.to_string()))?;
        match value {
            Value::Object(_) | Value::Array(_) => Ok(value),
            _ => Err(AppError::MalformedPayload(
                "top-level value must be an object or array".to_string(),
            )),
        }
    }
}

/// Whether the headers declare a JSON body (`application/json` or `*/*+json`).
pub fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

fn declared_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

#[async_trait]
impl Stage for JsonBodyParser {
    fn name(&self) -> &'static str {
        "json_body_parser"
    }

    async fn process(&self, request: Request) -> Flow {
        if !is_json(request.headers()) {
            return Flow::Continue(request);
        }

        if declared_length(request.headers()).is_some_and(|len| len > self.limit) {
            warn!(limit = self.limit, "Rejected oversized body");
            return Flow::Respond(AppError::PayloadTooLarge.into_response());
        }

        let (mut parts, body) = request.into_parts();
        // Reading an in-memory body only fails once it passes the limit.
        let bytes = match to_bytes(body, self.limit).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(limit = self.limit, error = %e, "Rejected oversized body");
                return Flow::Respond(AppError::PayloadTooLarge.into_response());
            }
        };

        match Self::parse(&bytes) {
            Ok(value) => {
                debug!(body = %value, "Parsed JSON body");
                parts.extensions.insert(JsonBody(value));
                Flow::Continue(Request::from_parts(parts, Body::from(bytes)))
            }
            Err(e) => {
                warn!(error = %e, "Rejected body");
                Flow::Respond(e.into_response())
            }
        }
    }
}
