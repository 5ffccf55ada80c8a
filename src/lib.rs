#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Reactive Streams Recipe
//!
//! > **A Recipe collection for asynchronous streams in Rust.**
//!
//! This crate is a guided tour of the async stream ecosystem: `tokio` for the
//! runtime, channels and time, `futures` for stream and future combinators,
//! `tokio-stream` for the adapters that connect the two, and `axum` for a thin
//! HTTP surface on top. Nothing here implements a runtime or a queue. Every
//! recipe *uses* the ecosystem the way application code does, so you can read
//! a recipe, run it, and lift the pattern into your own project.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Demos are programs, not snippets
//! Each topic lives in its own binary under `src/bin/`. A demo has a `main`,
//! sets up logging, runs a handful of scenes in order and prints what happens.
//! Run one with:
//!
//! ```bash
//! RUST_LOG=info cargo run --bin transforming
//! ```
//!
//! ### Logs are the output
//! The interesting part of a stream pipeline is *when* and *where* things
//! happen. All demos log through `tracing` with thread names switched on, so
//! the scheduler recipes show you which worker ran which stage.
//!
//! ### The library is the testable core
//! Stream functions with assertable behavior live in [`flows`], the Book
//! domain behind the HTTP recipes lives in [`catalog`] and [`api`]. The
//! integration tests under `tests/` exercise them with the ecosystem's test
//! support: paused-clock virtual time, mock streams and poll harnesses.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Bootstrap ([`runtime`])
//! Tracing setup shared by every demo binary, the server and the tests.
//!
//! ### 2. The Datasets ([`data`])
//! Canned sample data: BTC yearly top prices, vaccine shipments, book
//! inventories, morse codes. Demos and tests pull from here so their output
//! is deterministic.
//!
//! ### 3. The Flows ([`flows`])
//! Small stream functions written to be tested: pacing, division with a
//! failure mode, capitalization, time-triggered reports, standby fallback,
//! task-local secrets. The `tests/` directory shows how to pin their behavior
//! down with virtual time and poll harnesses.
//!
//! ### 4. The Catalog ([`catalog`], [`api`])
//! A deliberately thin Book CRUD slice: model, DTOs, hand-written mappers,
//! two service generations and a two-million-row in-memory summary store,
//! exposed through `axum` routers. Start it with:
//!
//! ```bash
//! RUST_LOG=info cargo run --bin book_server
//! ```
//!
//! ## 📚 Where to Start
//!
//! If streams are new to you, read the demos in this order: `creating`,
//! `filtering`, `transforming`, then `backpressure` and `schedulers`. The
//! rest are independent of each other.

pub mod api;
pub mod catalog;
pub mod data;
pub mod flows;
pub mod runtime;
