//! Runtime bootstrap shared by the demo binaries, the server and the tests.
//!
//! This module contains the one piece of infrastructure every entry point
//! needs before doing anything else:
//!
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod tracing;

pub use tracing::*;
