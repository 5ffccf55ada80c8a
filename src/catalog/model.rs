//! Pure data structures for the Book catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a book in the catalog.
///
/// Identifiers are unique; nothing else is enforced. Timestamps are set
/// when the entity is built and refreshed by updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub isbn: String,
    pub description: String,
    pub published_on: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Creates a new Book with both timestamps set to now.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (0 until the service assigns one)
    /// * `title` / `subtitle` - Display titles
    /// * `author` - Author name
    /// * `isbn` - Catalog ISBN, not validated
    /// * `description` - Free-form description
    /// * `published_on` - Publication date as `YYYY-MM-DD`
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        description: impl Into<String>,
        published_on: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            subtitle: subtitle.into(),
            author: author.into(),
            isbn: isbn.into(),
            description: description.into(),
            published_on: published_on.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// One row of the seeded summary table served by the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: u64,
    pub name: String,
    pub price: u32,
}
