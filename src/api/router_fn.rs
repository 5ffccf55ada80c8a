//! A book route with no service behind it.
//!
//! The response is assembled inline in the handler, and the route carries
//! its own logging layer on top of the global one. This is the smallest
//! possible way to put a book on the wire, kept as a contrast to the
//! layered v1/v2 stacks.

use axum::extract::{Path, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use tracing::info;

use crate::api::AppState;
use crate::catalog::dto::BookResponse;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/v1/router/books/:book_id",
        get(get_book).layer(middleware::from_fn(log_route)),
    )
}

async fn get_book(Path(book_id): Path<u64>) -> Json<BookResponse> {
    let now = Utc::now();
    Json(BookResponse {
        book_id,
        title: "Advanced Streams".to_string(),
        subtitle: "Combinators in Anger".to_string(),
        author: "Tom".to_string(),
        isbn: "222-22-2222-222-2".to_string(),
        description: "Stream processing patterns, one route at a time".to_string(),
        published_on: "2021-11-08".to_string(),
        created_at: now,
        updated_at: now,
    })
}

/// Route-scoped layer: logs before the handler runs.
async fn log_route(request: Request, next: Next) -> Response {
    info!(path = %request.uri().path(), "Router function request");
    next.run(request).await
}
