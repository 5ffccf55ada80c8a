//! # Side Effects and Signal Taps
//!
//! Pipelines are easiest to debug when you can watch them without
//! changing them. `inspect` taps a stage, building a stream is separate
//! from driving it, and RAII guards stand in for "run this when the
//! whole thing winds down" hooks.

use std::time::Duration;

use futures::{stream, StreamExt};
use reactive_recipe::runtime::setup_tracing;
use tokio::time::sleep;
use tracing::info;

#[tokio::main]
async fn main() {
    setup_tracing();

    info!("===== scene: taps around a filter =====");
    taps_around_filter().await;

    info!("===== scene: building is not driving =====");
    build_vs_drive().await;

    info!("===== scene: cleanup guards fire in reverse =====");
    cleanup_guards_in_reverse().await;

    info!("===== scene: manual demand =====");
    manual_demand().await;

    info!("===== scene: completion signal =====");
    completion_signal().await;
}

/// The same element seen before and after a filter. Evens show up at
/// the first tap and never again.
async fn taps_around_filter() {
    stream::iter(1..=10)
        .inspect(|n| info!(n, "# before filter"))
        .filter(|n| futures::future::ready(n % 2 == 1))
        .inspect(|n| info!(n, "# after filter"))
        .map(|n| n * 10)
        .for_each(|n| async move { info!(n, "# onNext") })
        .await;
}

/// Assembly runs the closures that build the stream; nothing flows
/// until the stream is awaited. The sleep sits between the two logs to
/// make the gap visible.
async fn build_vs_drive() {
    let pipeline = {
        info!("# assembling the pipeline (nothing emitted yet)");
        stream::iter(1..=3).inspect(|n| info!(n, "# emitted"))
    };

    info!("# pipeline built, waiting before driving it");
    sleep(Duration::from_millis(300)).await;

    pipeline.for_each(|n| async move { info!(n, "# onNext") }).await;
}

struct CleanupGuard(&'static str);

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        info!(label = self.0, "# cleanup");
    }
}

/// Guards declared first drop last. `inner` was declared second, so its
/// cleanup log comes first once the scope ends.
async fn cleanup_guards_in_reverse() {
    let _outer = CleanupGuard("outer");
    let _inner = CleanupGuard("inner");

    stream::iter(1..=3)
        .for_each(|n| async move { info!(n, "# onNext") })
        .await;

    info!("# stream completed, leaving the scope");
}

/// No combinator drives this one. Each `next().await` is one unit of
/// demand, logged before the element it produces.
async fn manual_demand() {
    let mut numbers = stream::iter(1..=5);

    loop {
        info!("# request(1)");
        match numbers.next().await {
            Some(n) => info!(n, "# onNext"),
            None => {
                info!("# onComplete");
                break;
            }
        }
    }
}

/// `for_each` resolving is the completion signal; anything after the
/// await runs exactly once, with no element in hand.
async fn completion_signal() {
    stream::iter(["alpha", "beta", "gamma"])
        .for_each(|word| async move { info!(word, "# onNext") })
        .await;

    info!("# onComplete, notifying the operator");
}
