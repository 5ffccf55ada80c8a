//! Two generations of the book service behind one trait.
//!
//! The generations differ in *where* payload mapping happens:
//!
//! - [`v1`]: the handler maps payloads to [`Book`] entities and the
//!   service speaks entities only.
//! - [`v2`]: the service consumes the payloads directly and owns the
//!   mapping step.
//!
//! [`BookCommands`] captures the shared shape. The associated types are
//! what let both generations share the trait while taking different
//! parameter types.

use async_trait::async_trait;

use crate::catalog::model::Book;

pub mod v1;
pub mod v2;

/// The operations every book service generation offers.
#[async_trait]
pub trait BookCommands {
    /// Parameter type for creation.
    type Create;
    /// Parameter type for updates.
    type Update;

    /// Registers a book and returns it with an assigned id.
    async fn create_book(&self, params: Self::Create) -> Book;

    /// Applies an update and returns the updated book.
    async fn update_book(&self, params: Self::Update) -> Book;

    /// Returns the catalog's canned book under the given id.
    async fn find_book(&self, book_id: u64) -> Book;
}

/// The canned book every find operation serves.
///
/// There is no storage behind the CRUD endpoints; reads return this row
/// with the requested id stamped on.
pub(crate) fn canned_book(book_id: u64) -> Book {
    Book::new(
        book_id,
        "Advanced Rust",
        "Rust from Streams to Services",
        "Kevin",
        "111-11-1111-111-1",
        "Intermediate Rust, mastered through worked examples",
        "2022-03-22",
    )
}
