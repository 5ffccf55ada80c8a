//! Second-generation book service: consumes payloads directly.
//!
//! The mapping step moved out of the handler and into the service. The
//! observable responses are identical to [`v1`](super::v1); only the
//! layering changed, which is the point of keeping both around.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::catalog::dto::{BookPatch, BookPost};
use crate::catalog::mapper;
use crate::catalog::model::Book;
use crate::catalog::service::{canned_book, BookCommands};

/// Payload-consuming book service with a process-local id sequence.
#[derive(Debug, Clone, Default)]
pub struct BookService {
    next_id: Arc<AtomicU64>,
}

impl BookService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookCommands for BookService {
    type Create = BookPost;
    type Update = BookPatch;

    #[instrument(skip(self, params))]
    async fn create_book(&self, params: BookPost) -> Book {
        debug!(?params, "create_book called");
        let mut book = mapper::post_to_book(params);
        book.id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        info!(book_id = %book.id, title = %book.title, "Created book");
        book
    }

    #[instrument(skip(self, params))]
    async fn update_book(&self, params: BookPatch) -> Book {
        debug!(?params, "update_book called");
        let base = canned_book(params.book_id);
        let book = mapper::patch_onto(base, params);
        info!(book_id = %book.id, "Updated book");
        book
    }

    #[instrument(skip(self))]
    async fn find_book(&self, book_id: u64) -> Book {
        info!(%book_id, "Serving canned book");
        canned_book(book_id)
    }
}
