//! The seeded in-memory summary table.
//!
//! Populated once at startup, read-only afterwards. Because nothing ever
//! writes after seeding, the map needs no lock; the server shares it
//! behind a plain `Arc`.

use std::collections::HashMap;
use std::time::Instant;

use tracing::info;

use crate::catalog::model::BookSummary;

/// Name of the environment variable overriding the seed row count.
pub const SEED_ENV: &str = "CATALOG_SEED";

/// Read-only map of book summaries keyed by id.
#[derive(Debug)]
pub struct SummaryStore {
    books: HashMap<u64, BookSummary>,
}

impl SummaryStore {
    /// Rows seeded when [`SEED_ENV`] is unset.
    pub const DEFAULT_SEED: u64 = 2_000_000;

    /// Builds the table with ids `1..=count`, each row named `IT Book{id}`
    /// at a price of 2000.
    pub fn seed(count: u64) -> Self {
        let started = Instant::now();
        let mut books = HashMap::with_capacity(count as usize);
        for id in 1..=count {
            books.insert(
                id,
                BookSummary {
                    id,
                    name: format!("IT Book{id}"),
                    price: 2000,
                },
            );
        }
        info!(
            rows = count,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Seeded book summaries"
        );
        Self { books }
    }

    /// Seeds [`Self::DEFAULT_SEED`] rows, or the count named by the
    /// `CATALOG_SEED` environment variable.
    pub fn seed_from_env() -> Self {
        let count = std::env::var(SEED_ENV)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(Self::DEFAULT_SEED);
        Self::seed(count)
    }

    pub fn get(&self, id: u64) -> Option<&BookSummary> {
        self.books.get(&id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_ids_are_dense_from_one() {
        let store = SummaryStore::seed(10);
        assert_eq!(store.len(), 10);
        assert_eq!(store.get(1).map(|b| b.name.as_str()), Some("IT Book1"));
        assert_eq!(store.get(10).map(|b| b.price), Some(2000));
        assert!(store.get(0).is_none());
        assert!(store.get(11).is_none());
    }
}
