//! Hand-written conversions between payloads and the [`Book`] entity.
//!
//! Plain functions, no trait machinery. The v1 endpoints call these from
//! the handler; the v2 service generation calls them internally.

use chrono::Utc;

use crate::catalog::dto::{BookPatch, BookPost, BookResponse};
use crate::catalog::model::Book;

/// Builds an unsaved [`Book`] (id 0) from a create payload.
pub fn post_to_book(post: BookPost) -> Book {
    Book::new(
        0,
        post.title,
        post.subtitle,
        post.author,
        post.isbn,
        post.description,
        post.published_on,
    )
}

/// Applies the set fields of a patch onto an existing book.
///
/// # Fields Updated
/// - `title`, `subtitle`, `description` when present
/// - `updated_at` is always refreshed
pub fn patch_onto(mut base: Book, patch: BookPatch) -> Book {
    base.id = patch.book_id;
    if let Some(title) = patch.title {
        base.title = title;
    }
    if let Some(subtitle) = patch.subtitle {
        base.subtitle = subtitle;
    }
    if let Some(description) = patch.description {
        base.description = description;
    }
    base.updated_at = Utc::now();
    base
}

/// Converts an entity into the shared response shape.
pub fn book_to_response(book: Book) -> BookResponse {
    BookResponse {
        book_id: book.id,
        title: book.title,
        subtitle: book.subtitle,
        author: book.author,
        isbn: book.isbn,
        description: book.description,
        published_on: book.published_on,
        created_at: book.created_at,
        updated_at: book.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_leaves_unset_fields_alone() {
        let base = Book::new(0, "T", "S", "A", "I", "D", "2022-03-22");
        let patch = BookPatch {
            book_id: 7,
            title: Some("T2".to_string()),
            ..Default::default()
        };
        let patched = patch_onto(base, patch);
        assert_eq!(patched.id, 7);
        assert_eq!(patched.title, "T2");
        assert_eq!(patched.subtitle, "S");
        assert_eq!(patched.description, "D");
    }
}
