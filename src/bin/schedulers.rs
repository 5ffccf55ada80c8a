//! # Schedulers: Where Work Runs
//!
//! Combinators say what happens to each element; tasks and runtimes decide
//! *where*. Watch the thread ids in the log output, they are the story:
//!
//! 1. **Spawn the pipeline**: the whole chain runs on a worker, not here.
//! 2. **Channel hop**: production stays put, consumption moves.
//! 3. **Fan out**: spawned per-element work lands across the pool;
//!    `for_each_concurrent` is concurrent but stays on one task.
//! 4. **No hop at all**: a pure chain never leaves the calling task.
//! 5. **Two hops**: each channel boundary is its own stage with its own task.
//! 6. **Blocking offload**: sync work goes to the blocking pool and comes back.
//! 7. **Dedicated runtime, reused**: two chains share one extra thread.
//! 8. **Fresh thread each**: every chain gets its own named thread.

use std::time::Duration;

use futures::{stream, StreamExt};
use reactive_recipe::runtime::setup_tracing;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{info, warn};

/// Current thread id and name, the way every scene logs it.
fn whoami() -> String {
    let current = std::thread::current();
    format!("{:?}/{}", current.id(), current.name().unwrap_or("unnamed"))
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("===== scene: spawn the whole pipeline =====");
    spawn_whole_pipeline().await?;

    info!("===== scene: channel hop moves downstream =====");
    channel_hop().await?;

    info!("===== scene: fan out across the pool =====");
    fan_out().await?;

    info!("===== scene: no hop at all =====");
    no_hop().await;

    info!("===== scene: two hops, three stages =====");
    two_hops().await?;

    info!("===== scene: blocking offload =====");
    blocking_offload().await;

    info!("===== scene: dedicated runtime, reused =====");
    reused_single_thread().await?;

    info!("===== scene: fresh thread per chain =====");
    fresh_thread_each().await?;

    Ok(())
}

/// Spawning moves everything: source, operators and consumer all run on
/// whichever worker picks up the task.
async fn spawn_whole_pipeline() -> Result<(), String> {
    info!(thread = %whoami(), "Building the pipeline here");

    tokio::spawn(async move {
        stream::iter([1, 3, 5, 7])
            .inspect(|n| info!(n, thread = %whoami(), "# Produced"))
            .map(|n| n * 10)
            .for_each(|n| async move { info!(n, thread = %whoami(), "# Consumed") })
            .await;
    })
    .await
    .map_err(|e| e.to_string())
}

/// Production logs from the current task; everything after the channel
/// logs from the spawned one. The channel is the boundary.
async fn channel_hop() -> Result<(), String> {
    let (tx, rx) = mpsc::channel::<i32>(8);

    let downstream = tokio::spawn(
        ReceiverStream::new(rx)
            .for_each(|n| async move { info!(n, thread = %whoami(), "# Consumed after the hop") }),
    );

    for n in [1, 3, 5, 7] {
        info!(n, thread = %whoami(), "# Produced");
        tx.send(n).await.map_err(|e| e.to_string())?;
    }
    drop(tx);

    downstream.await.map_err(|e| e.to_string())
}

/// Per-element spawns truly parallelize: the log shows several worker
/// threads and a completion order the scheduler chose. The second half
/// bounds concurrency to 4 with `for_each_concurrent`, which interleaves
/// on a single task: same thread in every line.
async fn fan_out() -> Result<(), String> {
    let handles: Vec<_> = (1..=19)
        .step_by(2)
        .map(|n| {
            tokio::spawn(async move {
                sleep(Duration::from_millis(50)).await;
                info!(n, thread = %whoami(), "# Handled on the pool");
            })
        })
        .collect();
    for handle in handles {
        handle.await.map_err(|e| e.to_string())?;
    }

    stream::iter((1..=19).step_by(2))
        .for_each_concurrent(4, |n| async move {
            sleep(Duration::from_millis(50)).await;
            info!(n, thread = %whoami(), "# Handled concurrently, one task");
        })
        .await;
    Ok(())
}

/// Without a spawn or a channel there is nothing to move the work: every
/// stage runs inline on the calling task.
async fn no_hop() {
    stream::iter([1, 3, 5, 7])
        .inspect(|n| info!(n, thread = %whoami(), "# source"))
        .filter(|n| futures::future::ready(*n > 3))
        .inspect(|n| info!(n, thread = %whoami(), "# after filter"))
        .map(|n| n * 10)
        .for_each(|n| async move { info!(n, thread = %whoami(), "# after map") })
        .await;
}

/// Three stages, two channel boundaries: source on the current task, the
/// filter on its own task, the map-and-consume on a third.
async fn two_hops() -> Result<(), String> {
    let (tx_filter, rx_filter) = mpsc::channel::<i32>(8);
    let (tx_map, rx_map) = mpsc::channel::<i32>(8);

    let filter_stage = tokio::spawn(async move {
        let mut feed = ReceiverStream::new(rx_filter);
        while let Some(n) = feed.next().await {
            info!(n, thread = %whoami(), "# filter stage");
            if n > 3 && tx_map.send(n).await.is_err() {
                break;
            }
        }
    });

    let map_stage = tokio::spawn(
        ReceiverStream::new(rx_map)
            .map(|n| n * 10)
            .for_each(|n| async move { info!(n, thread = %whoami(), "# map stage") }),
    );

    for n in [1, 3, 5, 7] {
        info!(n, thread = %whoami(), "# source");
        tx_filter.send(n).await.map_err(|e| e.to_string())?;
    }
    drop(tx_filter);

    filter_stage.await.map_err(|e| e.to_string())?;
    map_stage.await.map_err(|e| e.to_string())
}

/// Synchronous parsing does not belong on the async workers. Each file
/// hops to the blocking pool for the sync part and the results are
/// consumed back on the runtime.
async fn blocking_offload() {
    stream::iter(["cats.csv", "dogs.csv", "lions.csv"])
        .then(|file| async move {
            tokio::task::spawn_blocking(move || {
                std::thread::sleep(Duration::from_millis(100));
                info!(file, thread = %whoami(), "# Parsed on the blocking pool");
                format!("{file}: 3 rows")
            })
            .await
        })
        .for_each(|parsed| async move {
            match parsed {
                Ok(parsed) => info!(%parsed, thread = %whoami(), "# Back on the runtime"),
                Err(e) => warn!(error = %e, "Parser task failed"),
            }
        })
        .await;
}

/// One extra runtime on one extra thread, used twice. Both chains log the
/// same thread id: the thread outlives the chains that borrow it.
async fn reused_single_thread() -> Result<(), String> {
    tokio::task::spawn_blocking(|| -> Result<(), String> {
        let single = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| e.to_string())?;

        single.block_on(async {
            info!(chain = 1, thread = %whoami(), "# Running on the dedicated runtime");
        });
        single.block_on(async {
            info!(chain = 2, thread = %whoami(), "# Same thread, reused");
        });
        Ok(())
    })
    .await
    .map_err(|e| e.to_string())?
}

/// The throwaway variant: each chain gets a named thread with its own
/// current-thread runtime, and the thread ends with the chain.
async fn fresh_thread_each() -> Result<(), String> {
    let mut chains = Vec::new();
    for chain in 1..=2 {
        let handle = std::thread::Builder::new()
            .name(format!("new-single-{chain}"))
            .spawn(move || -> Result<(), String> {
                let rt = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .map_err(|e| e.to_string())?;
                rt.block_on(async move {
                    info!(chain, thread = %whoami(), "# Running on a fresh thread");
                });
                Ok(())
            })
            .map_err(|e| e.to_string())?;
        chains.push(handle);
    }

    tokio::task::spawn_blocking(move || -> Result<(), String> {
        for chain in chains {
            chain
                .join()
                .map_err(|_| "runtime thread panicked".to_string())??;
        }
        Ok(())
    })
    .await
    .map_err(|e| e.to_string())?
}
