//! # Cold vs Hot Sequences
//!
//! A *cold* stream is a value, not a process. Building one does nothing;
//! every consumer that drives it gets the full sequence from the top. A
//! *hot* stream is a process already underway: consumers share it, and a
//! late consumer only sees what is emitted after it joined.
//!
//! Scenes:
//! 1. **Cold**: two consumers drive the same stream constructor and both
//!    see every country.
//! 2. **Hot**: a broadcast concert feed; the listener arriving mid-show
//!    has missed the opening songs.
//! 3. **Cached**: a `Shared` future memoizes one slow lookup so the second
//!    await returns instantly with the same value.

use std::time::Duration;

use chrono::Local;
use futures::{stream, FutureExt, StreamExt};
use reactive_recipe::runtime::setup_tracing;
use tokio::sync::broadcast;
use tokio::time::sleep;
use tokio_stream::wrappers::BroadcastStream;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("===== scene: cold sequence =====");
    cold_sequence().await;

    info!("===== scene: hot sequence =====");
    hot_sequence().await?;

    info!("===== scene: cached lookup =====");
    cached_lookup().await;

    Ok(())
}

/// Each consumer drives its own copy of the pipeline, so both see the
/// whole sequence no matter how late they start.
async fn cold_sequence() {
    let countries = || stream::iter(["KOREA", "JAPAN", "CHINA"]).map(str::to_lowercase);

    countries()
        .for_each(|country| async move { info!(subscriber = 1, %country, "Received") })
        .await;

    sleep(Duration::from_millis(500)).await;

    countries()
        .for_each(|country| async move { info!(subscriber = 2, %country, "Received") })
        .await;
}

/// One shared performance. The first listener hears everything; the one
/// who tunes in after a second has missed the first acts.
async fn hot_sequence() -> Result<(), String> {
    const SINGERS: [&str; 5] = [
        "Singer A",
        "Singer B",
        "Singer C",
        "Singer D",
        "Singer E",
    ];

    let (stage, first_seat) = broadcast::channel(16);

    let performance = {
        let stage = stage.clone();
        tokio::spawn(async move {
            for singer in SINGERS {
                sleep(Duration::from_millis(400)).await;
                // Fails only when every listener is gone; fine to ignore here.
                let _ = stage.send(singer);
            }
        })
    };

    let early_listener = tokio::spawn(
        BroadcastStream::new(first_seat)
            .filter_map(|taped| async move { taped.ok() })
            .for_each(|singer| async move { info!(subscriber = 1, %singer, "Is singing") }),
    );

    // Join mid-show: the first two acts are already over.
    sleep(Duration::from_millis(1_000)).await;
    let late_listener = tokio::spawn(
        BroadcastStream::new(stage.subscribe())
            .filter_map(|taped| async move { taped.ok() })
            .for_each(|singer| async move { info!(subscriber = 2, %singer, "Is singing") }),
    );

    // Dropping the local sender lets both streams end once the show does.
    drop(stage);

    for handle in [performance, early_listener, late_listener] {
        handle.await.map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Pretends to ask a remote clock for the current time.
async fn fetch_current_time() -> String {
    sleep(Duration::from_millis(500)).await;
    Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

/// `Shared` turns one future into a cache: the first await pays the
/// 500 ms, the second gets the memoized value immediately.
async fn cached_lookup() {
    let cached = fetch_current_time().shared();

    let first = cached.clone().await;
    info!(datetime = %first, "# Subscribed and fetched");

    sleep(Duration::from_secs(2)).await;

    let second = cached.await;
    info!(datetime = %second, "# Subscribed again, answered from cache");
}
