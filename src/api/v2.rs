//! Second-generation book endpoints: the service consumes payloads.
//!
//! Handlers here only extract and respond. Same routes as
//! [`v1`](super::v1) under the `/v2` prefix, same response bodies.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{patch, post};
use axum::{Json, Router};

use crate::api::AppState;
use crate::catalog::dto::{BookPatch, BookPost, BookResponse};
use crate::catalog::mapper;
use crate::catalog::service::BookCommands;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v2/books", post(post_book))
        .route("/v2/books/:book_id", patch(patch_book).get(get_book))
}

async fn post_book(
    State(state): State<AppState>,
    Json(payload): Json<BookPost>,
) -> (StatusCode, Json<BookResponse>) {
    let created = state.books_v2.create_book(payload).await;
    (StatusCode::CREATED, Json(mapper::book_to_response(created)))
}

async fn patch_book(
    State(state): State<AppState>,
    Path(book_id): Path<u64>,
    Json(mut payload): Json<BookPatch>,
) -> Json<BookResponse> {
    payload.book_id = book_id;
    let updated = state.books_v2.update_book(payload).await;
    Json(mapper::book_to_response(updated))
}

async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<u64>,
) -> Json<BookResponse> {
    let book = state.books_v2.find_book(book_id).await;
    Json(mapper::book_to_response(book))
}
