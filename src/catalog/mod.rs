//! The Book catalog behind the HTTP recipes.
//!
//! A deliberately thin CRUD slice. There is no database and no validation;
//! services echo what they are given or return canned rows, because the
//! point of the HTTP recipes is the plumbing (routing, extraction, the
//! async handler surface), not persistence.
//!
//! # Main Components
//!
//! - [`model`] - the [`Book`](model::Book) entity and the seeded
//!   [`BookSummary`](model::BookSummary) row
//! - [`dto`] - request/response payloads
//! - [`mapper`] - hand-written payload/entity conversions
//! - [`service`] - two service generations behind one
//!   [`BookCommands`](service::BookCommands) trait
//! - [`store`] - the in-memory summary table, seeded once at startup

pub mod dto;
pub mod mapper;
pub mod model;
pub mod service;
pub mod store;

pub use dto::*;
pub use model::*;
pub use store::*;
