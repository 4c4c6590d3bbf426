use axum::body::{to_bytes, Body};
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use books_server::http::{create_router, AppState};
use books_server::lifecycle::BookSystem;
use serde_json::{json, Value};
use tower::ServiceExt;

const BODY_LIMIT: usize = 1024;

/// Router backed by a freshly seeded store.
async fn app() -> Router {
    let system = BookSystem::start(8).await.expect("Failed to start store");
    create_router(AppState::new(system.book_client.clone(), BODY_LIMIT))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).expect("Response is not JSON");
    (status, body)
}

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: Method, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

#[tokio::test]
async fn welcome_route() {
    let app = app().await;
    let (status, body) = send(&app, request(Method::GET, "/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "title": "Welcome to Books Store" }));
}

#[tokio::test]
async fn lists_seeded_books() {
    let app = app().await;
    let (status, body) = send(&app, request(Method::GET, "/books")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": "1", "title": "Book 1" },
            { "id": "2", "title": "Book 2" },
        ])
    );
}

#[tokio::test]
async fn gets_single_book() {
    let app = app().await;

    let (status, body) = send(&app, request(Method::GET, "/books/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": "2", "title": "Book 2" }));

    let (status, body) = send(&app, request(Method::GET, "/books/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "The Book is not Found" }));
}

#[tokio::test]
async fn post_adds_book_with_derived_title() {
    let app = app().await;

    // The body is ignored even when it carries a title.
    let (status, body) = send(
        &app,
        json_request(Method::POST, "/books", r#"{"title":"Ignored"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "New Book Added");
    let data = body["data"].as_array().expect("data is an array");
    assert_eq!(data.len(), 3);
    assert_eq!(data[2], json!({ "id": "3", "title": "Books 3" }));
}

#[tokio::test]
async fn put_updates_title() {
    let app = app().await;

    let (status, body) = send(
        &app,
        json_request(Method::PUT, "/update/1", r#"{"title":"Dune"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "Book with Id 1 is updated",
            "data": { "id": "1", "title": "Dune" },
        })
    );

    let (_, body) = send(&app, request(Method::GET, "/books/1")).await;
    assert_eq!(body["title"], "Dune");
}

#[tokio::test]
async fn put_without_usable_title_keeps_book() {
    let app = app().await;

    for req in [
        json_request(Method::PUT, "/update/2", r#"{"title":""}"#),
        json_request(Method::PUT, "/update/2", r#"{"title":42}"#),
        json_request(Method::PUT, "/update/2", ""),
        request(Method::PUT, "/update/2"),
    ] {
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Book with Id 2 is updated");
        assert_eq!(body["data"], json!({ "id": "2", "title": "Book 2" }));
    }
}

#[tokio::test]
async fn put_unknown_book() {
    let app = app().await;
    let (status, body) = send(
        &app,
        json_request(Method::PUT, "/update/7", r#"{"title":"x"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "The Book Is not Available" }));
}

#[tokio::test]
async fn delete_removes_book() {
    let app = app().await;

    let (status, body) = send(&app, request(Method::DELETE, "/delete/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "Book is successfully Deleted",
            "bookDeleted": [{ "id": "1", "title": "Book 1" }],
        })
    );

    let (status, _) = send(&app, request(Method::GET, "/books/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, request(Method::DELETE, "/delete/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Book is not found" }));
}

#[tokio::test]
async fn add_then_delete_scenario() {
    let app = app().await;

    let (_, body) = send(&app, request(Method::POST, "/books")).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["data"][2], json!({ "id": "3", "title": "Books 3" }));

    let (status, body) = send(&app, request(Method::DELETE, "/delete/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bookDeleted"], json!([{ "id": "2", "title": "Book 2" }]));

    let (status, _) = send(&app, request(Method::GET, "/books/2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, request(Method::GET, "/books")).await;
    assert_eq!(
        body,
        json!([
            { "id": "1", "title": "Book 1" },
            { "id": "3", "title": "Books 3" },
        ])
    );
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let app = app().await;

    send(&app, request(Method::DELETE, "/delete/2")).await;
    let (_, body) = send(&app, request(Method::POST, "/books")).await;

    assert_eq!(
        body["data"],
        json!([
            { "id": "1", "title": "Book 1" },
            { "id": "3", "title": "Books 3" },
        ])
    );
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let app = app().await;

    for payload in [r#"{"title":"#, r#""just a string""#, "42"] {
        let (status, body) = send(&app, json_request(Method::PUT, "/update/1", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {payload:?}");
        assert!(body["message"].is_string());
    }

    // Nothing reached the store.
    let (_, body) = send(&app, request(Method::GET, "/books/1")).await;
    assert_eq!(body["title"], "Book 1");
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let app = app().await;
    let title = "x".repeat(BODY_LIMIT);
    let payload = json!({ "title": title }).to_string();

    let (status, body) = send(&app, json_request(Method::PUT, "/update/1", payload)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body, json!({ "message": "Payload too large" }));
}

#[tokio::test]
async fn non_json_body_is_ignored() {
    let app = app().await;
    let req = Request::builder()
        .method(Method::PUT)
        .uri("/update/1")
        .header(CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"title":"Dune"}"#))
        .unwrap();

    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Book 1");
}

#[tokio::test]
async fn unknown_route() {
    let app = app().await;

    let (status, body) = send(&app, request(Method::GET, "/authors")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Cannot GET /authors" }));

    let (status, body) = send(&app, request(Method::POST, "/update/1/extra")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Cannot POST /update/1/extra" }));
}

#[tokio::test]
async fn wrong_method_on_known_path() {
    let app = app().await;

    for (method, uri) in [
        (Method::GET, "/update/1"),
        (Method::DELETE, "/books/1"),
        (Method::PUT, "/books"),
        (Method::POST, "/delete/1"),
    ] {
        let (status, body) = send(&app, request(method.clone(), uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(body, json!({ "message": format!("Cannot {method} {uri}") }));
    }

    // Nothing was touched.
    let (_, body) = send(&app, request(Method::GET, "/books")).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn concurrent_posts_each_see_their_own_insert() {
    let app = app().await;

    let mut handles = Vec::new();
    for _ in 0..20 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            send(&app, request(Method::POST, "/books")).await
        }));
    }

    for handle in handles {
        let (status, body) = handle.await.expect("Request task panicked");
        assert_eq!(status, StatusCode::OK);
        let data = body["data"].as_array().expect("data is an array");
        let last = data.last().expect("data is never empty");
        let id: usize = last["id"].as_str().unwrap().parse().unwrap();
        // Nothing is deleted, so the listing is exactly ids 1..=id.
        assert_eq!(data.len(), id);
        assert_eq!(last["title"], format!("Books {id}"));
    }
}
