//! Small stream functions written to be tested.
//!
//! The demo binaries print what pipelines do; this module holds the pieces
//! whose behavior is pinned down by the integration tests instead. Each
//! function takes its input stream as a parameter rather than building it
//! internally, which is what makes the virtual-time and mock-stream tests
//! possible: the test controls the source, the function only transforms it.
//!
//! # Main Components
//!
//! - [`general`] - pure transformations (pacing, division, capitalization)
//! - [`timed`] - functions driven by an interval the caller provides
//! - [`standby`] - primary/fallback selection between two futures
//! - [`context`] - task-local scoped values read from inside a stream

pub mod context;
pub mod error;
pub mod general;
pub mod standby;
pub mod timed;

pub use error::*;
pub use general::*;
pub use standby::*;
pub use timed::*;
