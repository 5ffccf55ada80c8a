//! The slow seeded-store lookup.
//!
//! The handler sleeps five seconds before answering. That is the recipe:
//! an async sleep parks only this request's task, so a second client
//! hitting any other route gets served immediately while this one waits.
//! Try it with two terminals against `cargo run --bin book_server`.

use std::time::Duration;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::{info, instrument};

use crate::api::{ApiError, AppState};
use crate::catalog::model::BookSummary;

/// Artificial latency in front of the store read.
const LOOKUP_LATENCY: Duration = Duration::from_secs(5);

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/controller/books/:book_id", get(get_book))
}

#[instrument(skip(state))]
async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<u64>,
) -> Result<Json<BookSummary>, ApiError> {
    tokio::time::sleep(LOOKUP_LATENCY).await;
    let book = state
        .store
        .get(book_id)
        .cloned()
        .ok_or(ApiError::BookNotFound(book_id))?;
    info!(name = %book.name, "# book for response");
    Ok(Json(book))
}
