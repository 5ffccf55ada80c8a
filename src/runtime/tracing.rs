//! # Observability & Tracing
//!
//! Every demo binary and the book server call [`setup_tracing`] first thing
//! in `main`. The demos in this crate have no other output channel: what a
//! pipeline did, and on which thread it did it, is told entirely through
//! the log.
//!
//! ## Configuration
//!
//! - **Structured logging** with the `tracing` crate
//! - **Configurable log levels** via the `RUST_LOG` environment variable,
//!   falling back to `info` so a plain `cargo run --bin <demo>` prints
//! - **Thread names and ids** on every line, because the scheduler and
//!   backpressure recipes are about *where* work runs
//!
//! ## Usage Examples
//!
//! ```bash
//! # Default: info level
//! cargo run --bin schedulers
//!
//! # Show the per-signal logs in the debugging demo
//! RUST_LOG=debug cargo run --bin debugging
//!
//! # Filter to one module
//! RUST_LOG=reactive_recipe::api=debug cargo run --bin book_server
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the tracing/logging infrastructure for the application.
///
/// Honors `RUST_LOG` when set and defaults to `info` otherwise. Thread
/// names and ids are included in every line; several demos exist only to
/// show work hopping between threads.
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Demo started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_thread_names(true)
        .with_thread_ids(true)
        .init();
}
