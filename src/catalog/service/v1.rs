//! First-generation book service: speaks entities only.
//!
//! Handlers using this generation do the payload/entity mapping
//! themselves, so every method here takes or returns [`Book`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::catalog::model::Book;
use crate::catalog::service::{canned_book, BookCommands};

/// Echo-style book service with a process-local id sequence.
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
    type Create = Book;
    type Update = Book;

    #[instrument(skip(self, params))]
    async fn create_book(&self, mut params: Book) -> Book {
        debug!(?params, "create_book called");
        params.id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        info!(book_id = %params.id, title = %params.title, "Created book");
        params
    }

    #[instrument(skip(self, params))]
    async fn update_book(&self, mut params: Book) -> Book {
        debug!(?params, "update_book called");
        params.updated_at = Utc::now();
        info!(book_id = %params.id, "Updated book");
        params
    }

    #[instrument(skip(self))]
    async fn find_book(&self, book_id: u64) -> Book {
        info!(%book_id, "Serving canned book");
        canned_book(book_id)
    }
}
