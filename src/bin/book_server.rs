//! # Book Server
//!
//! The one binary in this crate that stays up: seeds the summary store,
//! assembles the router and serves it. Everything interesting lives in
//! the `api` and `catalog` modules; this file only wires them together.
//!
//! `PORT` overrides the listen port, `CATALOG_SEED` the number of seeded
//! summary rows. Try it with:
//!
//! ```text
//! curl localhost:8080/v1/books/1
//! curl localhost:8080/v1/controller/books/12345
//! ```

use reactive_recipe::api::{self, AppState};
use reactive_recipe::catalog::store::SummaryStore;
use reactive_recipe::runtime::setup_tracing;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let store = SummaryStore::seed_from_env();
    let state = AppState::new(store);
    let app = api::router(state);

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await.map_err(|e| e.to_string())?;
    info!(%addr, "Book server listening");

    axum::serve(listener, app).await.map_err(|e| e.to_string())?;
    Ok(())
}
