//! # Measuring Time Inside a Pipeline
//!
//! Two ways to put a clock on a stream: the gap between consecutive
//! elements, and the latency of each call in a repeated fetch. Both use
//! `Instant` captured at the right moment, because by the time a value
//! reaches `for_each` the interesting interval is already over.

use std::time::Duration;

use chrono::Local;
use futures::{future, stream, StreamExt};
use reactive_recipe::runtime::setup_tracing;
use tokio::time::{sleep, Instant};
use tracing::info;

#[tokio::main]
async fn main() {
    setup_tracing();

    info!("===== scene: elapsed between elements =====");
    elapsed_between_elements().await;

    info!("===== scene: latency of a repeated fetch =====");
    timed_repeated_fetch().await;
}

/// `scan` carries the timestamp of the previous element, so each pair
/// comes out as (gap since last element, value). The first gap measures
/// from subscription, which is why it matches the pacing too.
async fn elapsed_between_elements() {
    let paced = stream::iter(1..=5).then(|n| async move {
        sleep(Duration::from_millis(300)).await;
        n
    });

    paced
        .scan(Instant::now(), |last_seen, n| {
            let gap_ms = last_seen.elapsed().as_millis() as u64;
            *last_seen = Instant::now();
            future::ready(Some((gap_ms, n)))
        })
        .for_each(|(gap_ms, n)| async move { info!(gap_ms, n, "# onNext") })
        .await;
}

async fn fetch_current_time(call: u32) -> String {
    // Simulated upstream with call-dependent latency.
    let latency = 60 + (u64::from(call) * 37) % 90;
    sleep(Duration::from_millis(latency)).await;
    Local::now().format("%H:%M:%S%.3f").to_string()
}

/// The first call plus four repeats, each timed individually. The clock
/// starts before the await, not inside the fetch, so queueing would be
/// counted too.
async fn timed_repeated_fetch() {
    stream::iter(1u32..=5)
        .then(|call| async move {
            let started = Instant::now();
            let stamp = fetch_current_time(call).await;
            (call, started.elapsed().as_millis() as u64, stamp)
        })
        .for_each(|(call, latency_ms, stamp)| async move {
            info!(call, latency_ms, time = %stamp, "# onNext");
        })
        .await;
}
