//! End-to-end tests over the book routes, driven through the router
//! without a socket.
//!
//! `tower::ServiceExt::oneshot` feeds a request straight into the
//! assembled `Router`, so these tests cover routing, extraction, the
//! handlers and the response mapping in one go.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use reactive_recipe::api::{self, AppState};
use reactive_recipe::catalog::dto::BookResponse;
use reactive_recipe::catalog::model::BookSummary;
use reactive_recipe::catalog::store::SummaryStore;
use serde_json::json;
use tower::ServiceExt;

/// Ten seeded rows are plenty for routing tests; the server binary seeds
/// two million.
fn test_app() -> Router {
    api::router(AppState::new(SummaryStore::seed(10)))
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Failed to parse response body")
}

/// POST answers 201 Created, echoes the payload and assigns the first id.
#[tokio::test]
async fn post_v1_creates_a_book_with_the_first_id() {
    let payload = json!({
        "title": "New Book",
        "subtitle": "Fresh off the press",
        "author": "Grace",
        "isbn": "333-33-3333-333-3",
        "description": "A brand new entry for the catalog",
        "published_on": "2025-01-15",
    });

    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v1/books")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("Failed to build request"),
        )
        .await
        .expect("Failed to route request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let book: BookResponse = read_json(response).await;
    assert_eq!(book.book_id, 1);
    assert_eq!(book.title, "New Book");
    assert_eq!(book.author, "Grace");
}

/// GET serves the canned book under whatever id was requested.
#[tokio::test]
async fn get_v1_returns_the_canned_book() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/v1/books/53")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Failed to route request");

    assert_eq!(response.status(), StatusCode::OK);
    let book: BookResponse = read_json(response).await;
    assert_eq!(book.book_id, 53);
    assert_eq!(book.title, "Advanced Rust");
    assert_eq!(book.author, "Kevin");
}

/// PATCH takes the id from the path and merges only the fields present
/// in the body.
#[tokio::test]
async fn patch_v1_takes_the_id_from_the_path() {
    let payload = json!({
        "title": "Renamed",
        "description": "Now with a better title",
    });

    let response = test_app()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/v1/books/7")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("Failed to build request"),
        )
        .await
        .expect("Failed to route request");

    assert_eq!(response.status(), StatusCode::OK);
    let book: BookResponse = read_json(response).await;
    assert_eq!(book.book_id, 7);
    assert_eq!(book.title, "Renamed");
    assert_eq!(book.description, "Now with a better title");

    // Fields absent from the body keep their stored values.
    assert_eq!(book.subtitle, "Rust from Streams to Services");
    assert_eq!(book.author, "Kevin");
}

/// The v2 routes behave identically on the wire; only the internal
/// mapping layer moved.
#[tokio::test]
async fn v2_routes_match_v1_behavior_on_the_wire() {
    let app = test_app();

    let payload = json!({
        "title": "Second Generation",
        "subtitle": "Same wire, new plumbing",
        "author": "Nina",
        "isbn": "444-44-4444-444-4",
        "description": "Mapping moved into the service",
        "published_on": "2025-02-01",
    });
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/v2/books")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("Failed to build request"),
        )
        .await
        .expect("Failed to route request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let created: BookResponse = read_json(response).await;
    assert_eq!(created.book_id, 1);
    assert_eq!(created.title, "Second Generation");

    let patch = json!({ "subtitle": "Patched over v2" });
    let response = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/v2/books/11")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(patch.to_string()))
                .expect("Failed to build request"),
        )
        .await
        .expect("Failed to route request");

    assert_eq!(response.status(), StatusCode::OK);
    let patched: BookResponse = read_json(response).await;
    assert_eq!(patched.book_id, 11);
    assert_eq!(patched.subtitle, "Patched over v2");
    assert_eq!(patched.title, "Advanced Rust");
}

/// The controller lookup sleeps five seconds before touching the store.
/// Under the paused clock that costs nothing, and the seeded row comes
/// back intact.
#[tokio::test(start_paused = true)]
async fn controller_lookup_serves_the_seeded_row() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/v1/controller/books/7")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Failed to route request");

    assert_eq!(response.status(), StatusCode::OK);
    let summary: BookSummary = read_json(response).await;
    assert_eq!(
        summary,
        BookSummary {
            id: 7,
            name: "IT Book7".to_string(),
            price: 2000,
        }
    );
}

/// Ids outside the seeded range answer 404 with a JSON error body.
#[tokio::test(start_paused = true)]
async fn controller_lookup_answers_404_for_unknown_ids() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/v1/controller/books/999")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Failed to route request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let err: serde_json::Value = read_json(response).await;
    assert_eq!(err["error"], json!("Book not found: 999"));
}

/// The router-function route serves its inline book under any id.
#[tokio::test]
async fn router_function_serves_the_inline_book() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/v1/router/books/42")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Failed to route request");

    assert_eq!(response.status(), StatusCode::OK);
    let book: BookResponse = read_json(response).await;
    assert_eq!(book.book_id, 42);
    assert_eq!(book.title, "Advanced Streams");
    assert_eq!(book.author, "Tom");
}
