//! # Sinks: Feeding Streams by Hand
//!
//! Combinators cover pipelines that start from something already
//! stream-shaped. When the source is imperative code, a thread pool, a
//! callback, a channel is the bridge: push into the sending half from
//! anywhere, consume the receiving half as a stream. Each tokio channel
//! flavor is one publishing contract:
//!
//! 1. **mpsc + blocking task**: results pushed from synchronous code.
//! 2. **mpsc + plain threads**: many producers, emission is thread-safe.
//! 3. **oneshot**: exactly one value; a second send does not compile.
//! 4. **mpsc as unicast**: the receiver is owned, so there is one consumer.
//! 5. **broadcast as multicast**: late receivers miss earlier values.
//! 6. **watch as replay-latest**: late receivers start from the newest value.

use std::time::Duration;

use futures::StreamExt;
use reactive_recipe::runtime::setup_tracing;
use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tokio::time::sleep;
use tokio_stream::wrappers::{BroadcastStream, ReceiverStream, WatchStream};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("===== scene: bridge from a blocking task =====");
    bridge_from_blocking().await?;

    info!("===== scene: emit from plain threads =====");
    emit_from_threads().await?;

    info!("===== scene: single shot =====");
    single_shot().await;

    info!("===== scene: unicast =====");
    unicast().await?;

    info!("===== scene: multicast =====");
    multicast().await?;

    info!("===== scene: replay the latest =====");
    replay_latest().await?;

    Ok(())
}

/// Heavy synchronous work runs on the blocking pool and pushes each
/// result through the channel; the async side decorates and consumes the
/// results as an ordinary stream.
async fn bridge_from_blocking() -> Result<(), String> {
    let (tx, rx) = mpsc::channel::<String>(8);

    let worker = tokio::task::spawn_blocking(move || {
        for n in 1..=5 {
            std::thread::sleep(Duration::from_millis(100));
            if tx.blocking_send(format!("task {n} result")).is_err() {
                break;
            }
        }
    });

    ReceiverStream::new(rx)
        .map(|report| format!("{report} success!"))
        .for_each(|report| async move { info!(%report, "# Received") })
        .await;

    worker.await.map_err(|e| e.to_string())
}

/// Three plain threads share one cloned sender. The channel serializes
/// their emissions; the consumer sees an interleaving, never a torn value.
async fn emit_from_threads() -> Result<(), String> {
    let (tx, rx) = mpsc::channel::<String>(8);

    let mut workers = Vec::new();
    for worker_id in 1..=3u64 {
        let tx = tx.clone();
        workers.push(std::thread::spawn(move || {
            for step in 1..=2 {
                std::thread::sleep(Duration::from_millis(80 * worker_id));
                if tx.blocking_send(format!("worker {worker_id} step {step}")).is_err() {
                    break;
                }
            }
        }));
    }
    // Only the clones keep the channel open now.
    drop(tx);

    let consumer = tokio::spawn(
        ReceiverStream::new(rx)
            .for_each(|message| async move { info!(%message, "# Received") }),
    );

    tokio::task::spawn_blocking(move || {
        for worker in workers {
            let _ = worker.join();
        }
    })
    .await
    .map_err(|e| e.to_string())?;

    consumer.await.map_err(|e| e.to_string())
}

/// `oneshot` is the single-value contract made structural: `send`
/// consumes the sender, so "emit twice" is not a runtime error, it is
/// code that does not exist.
async fn single_shot() {
    let (tx, rx) = oneshot::channel::<&str>();

    tokio::spawn(async move {
        sleep(Duration::from_millis(100)).await;
        let _ = tx.send("Hello tokio");
        // tx was moved by send; the channel is spent.
    });

    match rx.await {
        Ok(message) => info!(%message, "# Received the single value"),
        Err(_) => warn!("Sender dropped without a value"),
    }
}

/// The mpsc receiver is an owned value, not a subscription: handing it to
/// a consumer moves it, and a second consumer cannot be constructed.
async fn unicast() -> Result<(), String> {
    let (tx, rx) = mpsc::channel::<i32>(8);
    tx.send(1).await.map_err(|e| e.to_string())?;
    tx.send(2).await.map_err(|e| e.to_string())?;
    drop(tx);

    ReceiverStream::new(rx)
        .for_each(|n| async move { info!(n, subscriber = 1, "# Received") })
        .await;
    Ok(())
}

/// Broadcast delivers each value to the receivers existing at send time.
/// The receiver created after 1 and 2 were sent only ever sees 3.
async fn multicast() -> Result<(), String> {
    let (tx, first) = broadcast::channel::<i32>(8);

    tx.send(1).map_err(|e| e.to_string())?;
    tx.send(2).map_err(|e| e.to_string())?;

    let second = tx.subscribe();
    tx.send(3).map_err(|e| e.to_string())?;
    drop(tx);

    let early = tokio::spawn(
        BroadcastStream::new(first)
            .filter_map(|item| async move { item.ok() })
            .for_each(|n| async move { info!(n, subscriber = 1, "# Received") }),
    );
    let late = tokio::spawn(
        BroadcastStream::new(second)
            .filter_map(|item| async move { item.ok() })
            .for_each(|n| async move { info!(n, subscriber = 2, "# Received") }),
    );

    early.await.map_err(|e| e.to_string())?;
    late.await.map_err(|e| e.to_string())
}

/// `watch` replays exactly one element: the newest. Values sent before a
/// receiver joins collapse into whatever is current at join time.
async fn replay_latest() -> Result<(), String> {
    let (tx, rx) = watch::channel(1);
    tx.send(2).map_err(|e| e.to_string())?;
    tx.send(3).map_err(|e| e.to_string())?;

    // Joined after 1..3 were sent: starts at 3, the rest are gone.
    let early = tokio::spawn(
        WatchStream::new(rx)
            .for_each(|value| async move { info!(value, subscriber = 1, "# Sees") }),
    );
    let late = tokio::spawn(
        WatchStream::new(tx.subscribe())
            .for_each(|value| async move { info!(value, subscriber = 2, "# Sees") }),
    );

    sleep(Duration::from_millis(100)).await;
    tx.send(4).map_err(|e| e.to_string())?;
    sleep(Duration::from_millis(100)).await;
    drop(tx);

    early.await.map_err(|e| e.to_string())?;
    late.await.map_err(|e| e.to_string())
}
