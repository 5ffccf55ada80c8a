//! # Backpressure
//!
//! Bounded channels are how tokio says "no". A producer that must
//! `send().await` into a full channel is paused; a producer that refuses
//! to wait must decide what to do with the element that did not fit.
//! These scenes walk the standard policies:
//!
//! 1. **Demand pacing**: capacity 1, the consumer sets the tempo.
//! 2. **Error on overflow**: `try_send` fails, the producer gives up.
//! 3. **Drop newest**: `try_send` fails, the element is logged and lost.
//! 4. **Keep latest**: a `watch` channel always holds only the newest value.
//! 5. **Bounded ring, drop latest**: a two-slot buffer refuses incomers.
//! 6. **Bounded ring, drop oldest**: `broadcast` lag reports what was lost.

use std::collections::VecDeque;
use std::time::Duration;

use reactive_recipe::runtime::setup_tracing;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::{broadcast, watch};
use tokio::time::{self, sleep};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("===== scene: demand pacing =====");
    demand_pacing().await?;

    info!("===== scene: error on overflow =====");
    error_on_overflow().await?;

    info!("===== scene: drop newest on overflow =====");
    drop_on_overflow().await?;

    info!("===== scene: keep only the latest =====");
    keep_latest().await?;

    info!("===== scene: ring buffer, drop latest =====");
    ring_drop_latest().await?;

    info!("===== scene: ring buffer, drop oldest =====");
    ring_drop_oldest().await?;

    Ok(())
}

/// Capacity 1 means the producer cannot run ahead: every `send` resolves
/// only after the consumer has made room. The producer's log lines land
/// in lockstep with the consumer's.
async fn demand_pacing() -> Result<(), String> {
    let (tx, mut rx) = mpsc::channel::<i32>(1);

    let producer = tokio::spawn(async move {
        for n in 1..=5 {
            if tx.send(n).await.is_err() {
                break;
            }
            info!(n, "# Accepted by the channel");
        }
    });

    while let Some(n) = rx.recv().await {
        sleep(Duration::from_millis(300)).await;
        info!(n, "# Consumed");
    }

    producer.await.map_err(|e| e.to_string())
}

/// A millisecond producer against a five-millisecond consumer. With
/// `try_send` and no tolerance for loss, the only option left on a full
/// channel is to fail the whole flow.
async fn error_on_overflow() -> Result<(), String> {
    let (tx, mut rx) = mpsc::channel::<u64>(8);

    let producer = tokio::spawn(async move {
        let mut ticks = time::interval(Duration::from_millis(1));
        let mut seq = 0u64;
        loop {
            ticks.tick().await;
            match tx.try_send(seq) {
                Ok(()) => seq += 1,
                Err(TrySendError::Full(rejected)) => {
                    error!(rejected, "Overflow with no policy, failing the flow");
                    break;
                }
                Err(TrySendError::Closed(_)) => break,
            }
        }
    });

    while let Some(n) = rx.recv().await {
        sleep(Duration::from_millis(5)).await;
        info!(n, "# Consumed");
    }

    producer.await.map_err(|e| e.to_string())
}

/// Same race, different policy: the element that finds the channel full
/// is logged and forgotten, and the flow keeps going. The consumer's
/// sequence shows the gaps.
async fn drop_on_overflow() -> Result<(), String> {
    let (tx, mut rx) = mpsc::channel::<u64>(4);

    let producer = tokio::spawn(async move {
        let mut ticks = time::interval(Duration::from_millis(1));
        for seq in 0..60u64 {
            ticks.tick().await;
            match tx.try_send(seq) {
                Ok(()) => {}
                Err(TrySendError::Full(dropped)) => warn!(dropped, "# Dropped"),
                Err(TrySendError::Closed(_)) => break,
            }
        }
    });

    while let Some(n) = rx.recv().await {
        sleep(Duration::from_millis(5)).await;
        info!(n, "# Consumed");
    }

    producer.await.map_err(|e| e.to_string())
}

/// `watch` is the keep-latest policy as a primitive: it stores exactly one
/// value and overwrites it freely. A slow consumer wakes up, reads
/// whatever is newest and never sees the intermediate values.
async fn keep_latest() -> Result<(), String> {
    let (tx, mut rx) = watch::channel(0u64);

    let producer = tokio::spawn(async move {
        for seq in 1..=50u64 {
            sleep(Duration::from_millis(2)).await;
            if tx.send(seq).is_err() {
                break;
            }
        }
    });

    while rx.changed().await.is_ok() {
        let latest = *rx.borrow_and_update();
        info!(latest, "# Consumed the newest value");
        sleep(Duration::from_millis(25)).await;
    }

    producer.await.map_err(|e| e.to_string())
}

/// A hand-rolled two-slot ring in front of a demand-paced consumer:
/// elements arriving while both slots are taken are rejected at the door.
async fn ring_drop_latest() -> Result<(), String> {
    let (out_tx, mut out_rx) = mpsc::channel::<u64>(1);

    let forwarder = tokio::spawn(async move {
        let mut queue: VecDeque<u64> = VecDeque::with_capacity(2);
        let mut ticks = time::interval_at(
            time::Instant::now() + Duration::from_millis(200),
            Duration::from_millis(200),
        );
        let mut seq = 0u64;
        loop {
            tokio::select! {
                _ = ticks.tick(), if seq < 10 => {
                    if queue.len() == 2 {
                        warn!(dropped = seq, "** Ring full: rejected the incoming element **");
                    } else {
                        info!(buffered = seq, "# Buffered");
                        queue.push_back(seq);
                    }
                    seq += 1;
                }
                permit = out_tx.reserve(), if !queue.is_empty() => {
                    let Ok(permit) = permit else { break };
                    if let Some(n) = queue.pop_front() {
                        permit.send(n);
                    }
                }
                else => break,
            }
        }
    });

    while let Some(n) = out_rx.recv().await {
        info!(n, "# Consumed from ring");
        sleep(Duration::from_millis(600)).await;
    }

    forwarder.await.map_err(|e| e.to_string())
}

/// `broadcast` keeps the newest `capacity` elements and advances over the
/// oldest when a receiver falls behind. The lag error even reports how
/// many were skipped.
async fn ring_drop_oldest() -> Result<(), String> {
    let (tx, mut feed) = broadcast::channel::<u64>(2);

    let producer = tokio::spawn(async move {
        for seq in 0..12u64 {
            sleep(Duration::from_millis(200)).await;
            if tx.send(seq).is_err() {
                break;
            }
        }
    });

    loop {
        match feed.recv().await {
            Ok(n) => {
                info!(n, "# Consumed from ring");
                sleep(Duration::from_millis(600)).await;
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!(skipped, "** Ring advanced: oldest elements dropped **");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }

    producer.await.map_err(|e| e.to_string())
}
