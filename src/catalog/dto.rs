//! Request and response payloads for the book endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload for `POST /v{1,2}/books`.
#[derive(Debug, Clone, Deserialize)]
pub struct BookPost {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub isbn: String,
    pub description: String,
    pub published_on: String,
}

/// Payload for `PATCH /v{1,2}/books/:book_id`.
///
/// `book_id` never comes from the body; the handler injects it from the
/// path after deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookPatch {
    #[serde(skip)]
    pub book_id: u64,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
}

/// Response body shared by every book endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookResponse {
    pub book_id: u64,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub isbn: String,
    pub description: String,
    pub published_on: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
