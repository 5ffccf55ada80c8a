//! The HTTP surface over the Book catalog.
//!
//! Three ways to serve the same resource, kept side by side on purpose:
//!
//! - [`v1`] / [`v2`]: annotated-handler style CRUD, differing only in
//!   which layer owns payload mapping.
//! - [`lookup`]: a single slow read against the seeded store, the recipe
//!   for "a blocking-slow handler does not stall its neighbors".
//! - [`router_fn`]: a handler with no service behind it at all, plus a
//!   route-scoped logging layer.
//!
//! The [`filter::books_log`] middleware wraps the whole router and logs
//! path and status for every `books` request after it completes.

use std::sync::Arc;

use axum::middleware;
use axum::Router;

use crate::catalog::service::{v1 as v1_service, v2 as v2_service};
use crate::catalog::store::SummaryStore;

pub mod error;
pub mod filter;
pub mod lookup;
pub mod router_fn;
pub mod v1;
pub mod v2;

pub use error::ApiError;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SummaryStore>,
    pub books_v1: v1_service::BookService,
    pub books_v2: v2_service::BookService,
}

impl AppState {
    pub fn new(store: SummaryStore) -> Self {
        Self {
            store: Arc::new(store),
            books_v1: v1_service::BookService::new(),
            books_v2: v2_service::BookService::new(),
        }
    }
}

/// Assembles the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(v1::routes())
        .merge(v2::routes())
        .merge(lookup::routes())
        .merge(router_fn::routes())
        .layer(middleware::from_fn(filter::books_log))
        .with_state(state)
}
