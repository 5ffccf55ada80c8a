//! # Multicasting with a Connect Gate
//!
//! One producer, many subscribers, and three policies for when the
//! producer actually starts: an explicit connect signal, automatically
//! once enough subscribers are present, and reference counting where
//! the feed lives exactly as long as someone is listening.

use std::sync::Arc;
use std::time::Duration;

use reactive_recipe::runtime::setup_tracing;
use tokio::sync::{broadcast, Notify};
use tokio::time::sleep;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("===== scene: explicit connect =====");
    explicit_connect().await?;

    info!("===== scene: auto-connect at two subscribers =====");
    auto_connect_at_two().await?;

    info!("===== scene: reference-counted feed =====");
    ref_counted_feed().await?;

    Ok(())
}

fn subscriber(name: &'static str, mut rx: broadcast::Receiver<i64>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Ok(n) = rx.recv().await {
            info!(subscriber = name, n, "# onNext");
        }
        info!(subscriber = name, "# onComplete");
    })
}

/// Subscribers attach first and see nothing; every value waits behind
/// the gate. Both subscribers then see the same odd numbers because
/// they were present before connect.
async fn explicit_connect() -> Result<(), String> {
    let (tx, first_rx) = broadcast::channel::<i64>(16);
    drop(first_rx);
    let gate = Arc::new(Notify::new());

    let producer = {
        let tx = tx.clone();
        let gate = gate.clone();
        tokio::spawn(async move {
            gate.notified().await;
            info!("# connected, emitting");
            for n in [1, 3, 5, 7] {
                let _ = tx.send(n);
                sleep(Duration::from_millis(100)).await;
            }
        })
    };

    let first = subscriber("first", tx.subscribe());
    info!("# first subscriber attached, feed still idle");
    sleep(Duration::from_millis(200)).await;

    let second = subscriber("second", tx.subscribe());
    info!("# second subscriber attached, feed still idle");
    sleep(Duration::from_millis(200)).await;

    info!("# connect()");
    gate.notify_one();

    producer.await.map_err(|e| e.to_string())?;
    drop(tx);
    first.await.map_err(|e| e.to_string())?;
    second.await.map_err(|e| e.to_string())?;
    Ok(())
}

/// Nobody calls connect here. The producer watches the subscriber
/// count and starts on its own the moment the second one attaches.
async fn auto_connect_at_two() -> Result<(), String> {
    let (tx, first_rx) = broadcast::channel::<i64>(16);
    drop(first_rx);

    let producer = {
        let tx = tx.clone();
        tokio::spawn(async move {
            while tx.receiver_count() < 2 {
                sleep(Duration::from_millis(50)).await;
            }
            info!("# two subscribers present, auto-connecting");
            for n in 1..=5 {
                let _ = tx.send(n);
                sleep(Duration::from_millis(100)).await;
            }
        })
    };

    let first = subscriber("first", tx.subscribe());
    info!("# first subscriber attached, waiting for one more");
    sleep(Duration::from_millis(300)).await;

    let second = subscriber("second", tx.subscribe());
    info!("# second subscriber attached");

    producer.await.map_err(|e| e.to_string())?;
    drop(tx);
    first.await.map_err(|e| e.to_string())?;
    second.await.map_err(|e| e.to_string())?;
    Ok(())
}

/// The feed runs only while the subscriber count is above zero. When
/// the first subscriber walks away the feed stops and resets; the next
/// subscriber gets a fresh run starting at one, not a resumed one.
async fn ref_counted_feed() -> Result<(), String> {
    let (tx, first_rx) = broadcast::channel::<i64>(16);
    drop(first_rx);

    let producer = {
        let tx = tx.clone();
        tokio::spawn(async move {
            for run in 1..=2 {
                while tx.receiver_count() == 0 {
                    sleep(Duration::from_millis(50)).await;
                }
                info!(run, "# subscriber arrived, feed starting from scratch");
                let mut n = 0;
                while tx.receiver_count() > 0 {
                    n += 1;
                    let _ = tx.send(n);
                    sleep(Duration::from_millis(100)).await;
                }
                info!(run, last_emitted = n, "# no subscribers left, feed stopped");
            }
        })
    };

    let take_three = |name: &'static str, mut rx: broadcast::Receiver<i64>| {
        tokio::spawn(async move {
            for _ in 0..3 {
                if let Ok(n) = rx.recv().await {
                    info!(subscriber = name, n, "# onNext");
                }
            }
            info!(subscriber = name, "# cancelling");
        })
    };

    let first = take_three("first", tx.subscribe());
    first.await.map_err(|e| e.to_string())?;

    sleep(Duration::from_millis(300)).await;

    let second = take_three("second", tx.subscribe());
    second.await.map_err(|e| e.to_string())?;

    producer.await.map_err(|e| e.to_string())?;
    Ok(())
}
