//! First-generation book endpoints: mapping happens in the handler.
//!
//! The handler converts payloads to entities with [`mapper`], calls the
//! entity-only v1 service and converts the result back. Compare with
//! [`v2`](super::v2), where both conversions moved into the service.

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
        .route("/v1/books", post(post_book))
        .route("/v1/books/:book_id", patch(patch_book).get(get_book))
}

async fn post_book(
    State(state): State<AppState>,
    Json(payload): Json<BookPost>,
) -> (StatusCode, Json<BookResponse>) {
    let book = mapper::post_to_book(payload);
    let created = state.books_v1.create_book(book).await;
    (StatusCode::CREATED, Json(mapper::book_to_response(created)))
}

async fn patch_book(
    State(state): State<AppState>,
    Path(book_id): Path<u64>,
    Json(mut payload): Json<BookPatch>,
) -> Json<BookResponse> {
    // The id always comes from the path, never the body.
    payload.book_id = book_id;
    let base = state.books_v1.find_book(book_id).await;
    let updated = state.books_v1.update_book(mapper::patch_onto(base, payload)).await;
    Json(mapper::book_to_response(updated))
}

async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<u64>,
) -> Json<BookResponse> {
    let book = state.books_v1.find_book(book_id).await;
    Json(mapper::book_to_response(book))
}
