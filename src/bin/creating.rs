//! # Creating Streams
//!
//! Every pipeline starts with a source. The scenes run through the common
//! constructors, roughly in order of how often you reach for them:
//!
//! 1. An empty `Option` completes without emitting.
//! 2. `iter` over a ready collection.
//! 3. `iter` over a lazy iterator chain.
//! 4. Integer ranges, plain and as index walks over a table.
//! 5. Eager vs deferred evaluation of the source value.
//! 6. Lazy fallbacks: compute the default only if it is needed.
//! 7. A file read as a stream of lines, closed by RAII (`using` style).
//! 8. `unfold` as the stateful generator: counter, times table, year walk.
//! 9. A demand-paced producer over a small channel.
//! 10. Bridging a callback listener into a stream.

use std::time::Duration;

use chrono::Local;
use futures::{stream, StreamExt};
use reactive_recipe::data::{btc_top_prices_by_year, BTC_TOP_PRICES_PER_YEAR, COINS, COIN_NAMES};
use reactive_recipe::runtime::setup_tracing;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::sleep;
use tokio_stream::wrappers::{LinesStream, ReceiverStream};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("===== scene: empty option =====");
    from_empty_option().await;

    info!("===== scene: from a collection =====");
    from_collection().await;

    info!("===== scene: from a lazy iterator =====");
    from_lazy_iterator().await;

    info!("===== scene: ranges =====");
    ranges().await;

    info!("===== scene: eager vs deferred =====");
    eager_vs_deferred().await;

    info!("===== scene: lazy fallback =====");
    lazy_fallback().await;

    info!("===== scene: lines with RAII cleanup =====");
    with_resource().await?;

    info!("===== scene: generate with state =====");
    generate_with_state().await;

    info!("===== scene: demand-paced emission =====");
    demand_paced_emit().await?;

    info!("===== scene: listener bridge =====");
    listener_bridge().await?;

    Ok(())
}

/// `Option` is an iterator of zero or one elements, so `None` makes a
/// stream that only completes.
async fn from_empty_option() {
    stream::iter(None::<i32>)
        .for_each(|n| async move { info!(n, "# onNext") })
        .await;
    info!("# onComplete without a single element");
}

/// The everyday source: a collection that already exists.
async fn from_collection() {
    stream::iter(COINS)
        .for_each(|(name, price)| async move { info!(name, price, "# onNext") })
        .await;
}

/// `iter` also takes lazy iterator chains; the filter below runs as the
/// stream is polled, not up front.
async fn from_lazy_iterator() {
    let majors = COIN_NAMES
        .into_iter()
        .filter(|name| matches!(*name, "BTC" | "ETH"));
    stream::iter(majors)
        .for_each(|name| async move { info!(name, "# onNext") })
        .await;
}

/// Plain ranges, and a range used as an index walk over the BTC table
/// (the last five entries).
async fn ranges() {
    stream::iter(5..15)
        .for_each(|n| async move { info!(n, "# onNext") })
        .await;

    stream::iter(7usize..12)
        .map(|idx| BTC_TOP_PRICES_PER_YEAR[idx])
        .for_each(|(year, price)| async move { info!(year, price, "# onNext") })
        .await;
}

/// The eager source captured its value at build time; the deferred one
/// reads the clock when polled, two seconds later.
async fn eager_vs_deferred() {
    let eager = stream::iter([Local::now()]);
    let deferred = stream::once(async { Local::now() });

    sleep(Duration::from_secs(2)).await;

    eager
        .for_each(|t| async move {
            info!(time = %t.format("%H:%M:%S%.3f"), "# eager, captured at build time")
        })
        .await;
    deferred
        .for_each(|t| async move {
            info!(time = %t.format("%H:%M:%S%.3f"), "# deferred, read at poll time")
        })
        .await;
}

/// A noisy default so the log shows when it actually runs.
fn say_default() -> String {
    info!("# say_default ran");
    "Hi there".to_string()
}

/// Computing the default before checking emptiness wastes the work every
/// time. Wrapping it in a closure defers it to the empty case only.
async fn lazy_fallback() {
    // Eager: say_default runs although the stream was not empty.
    let greetings: Vec<String> = stream::iter(["Hello"]).map(String::from).collect().await;
    let eager_default = say_default();
    let chosen = if greetings.is_empty() { vec![eager_default] } else { greetings };
    info!(?chosen, "# with the eager default");

    // Lazy: the closure only runs for the empty source.
    let filled: Vec<String> = stream::iter(["Hello"]).map(String::from).collect().await;
    let chosen = if filled.is_empty() { vec![say_default()] } else { filled };
    info!(?chosen, "# non-empty source, default never ran");

    let empty: Vec<String> = stream::iter(Vec::<&str>::new()).map(String::from).collect().await;
    let chosen = if empty.is_empty() { vec![say_default()] } else { empty };
    info!(?chosen, "# empty source, default ran exactly once");
}

/// A file consumed as a stream of lines. The handle lives exactly as long
/// as the stream; dropping the stream closes the file, no finally block.
async fn with_resource() -> Result<(), String> {
    let path = std::env::temp_dir().join("reactive_recipe_lines.txt");
    tokio::fs::write(&path, "first line\nsecond line\nthird line\n")
        .await
        .map_err(|e| e.to_string())?;

    let file = tokio::fs::File::open(&path).await.map_err(|e| e.to_string())?;
    LinesStream::new(BufReader::new(file).lines())
        .for_each(|line| async move {
            match line {
                Ok(line) => info!(%line, "# onNext"),
                Err(e) => warn!(error = %e, "Read failed"),
            }
        })
        .await;

    tokio::fs::remove_file(&path).await.map_err(|e| e.to_string())
}

/// `unfold` is the generator loop as a value: take the state, emit one
/// element, hand back the next state, `None` to complete.
async fn generate_with_state() {
    stream::unfold(0, |state| async move {
        if state > 10 {
            None
        } else {
            Some((state, state + 1))
        }
    })
    .for_each(|n| async move { info!(n, "# onNext") })
    .await;
    info!("# counter done");

    stream::unfold((3, 1), |(dan, step)| async move {
        if step > 9 {
            None
        } else {
            Some(((dan, step, dan * step), (dan, step + 1)))
        }
    })
    .for_each(|(dan, step, product)| async move { info!("# {} x {} = {}", dan, step, product) })
    .await;
    info!("# times table done");

    let prices = btc_top_prices_by_year();
    stream::unfold(2019u16, move |year| {
        let price = prices.get(&year).copied().unwrap_or(0);
        async move {
            if year > 2021 {
                None
            } else {
                Some(((year, price), year + 1))
            }
        }
    })
    .for_each(|(year, price)| async move { info!(year, price, "# onNext") })
    .await;
    info!("# year walk done");
}

/// The producer may be willing to emit ten values, but the two-slot
/// channel only accepts what the consumer has made room for. Watch how
/// "Accepted" lines trail the consumer's bursts.
async fn demand_paced_emit() -> Result<(), String> {
    let (tx, mut rx) = mpsc::channel::<i32>(2);

    let producer = tokio::spawn(async move {
        for n in 1..=10 {
            if tx.send(n).await.is_err() {
                break;
            }
            info!(n, "# Accepted, channel had room");
        }
    });

    'consume: loop {
        for _ in 0..2 {
            match rx.recv().await {
                Some(n) => info!(n, "# onNext"),
                None => break 'consume,
            }
        }
        // Demand pauses; the producer stalls at the full channel.
        sleep(Duration::from_millis(300)).await;
    }

    producer.await.map_err(|e| e.to_string())
}

/// A callback-style price feed, the kind older libraries hand you.
#[derive(Default)]
struct PriceFeed {
    listener: Option<Box<dyn Fn(i64) + Send>>,
}

impl PriceFeed {
    fn set_listener(&mut self, listener: impl Fn(i64) + Send + 'static) {
        self.listener = Some(Box::new(listener));
    }

    fn publish(&self, price: i64) {
        if let Some(listener) = &self.listener {
            listener(price);
        }
    }
}

/// The bridge is one closure: the listener pushes into a channel, the
/// channel's receiving half is the stream. Dropping the feed drops the
/// sender and completes the stream.
async fn listener_bridge() -> Result<(), String> {
    let (tx, rx) = mpsc::channel::<i64>(8);

    let mut feed = PriceFeed::default();
    feed.set_listener(move |price| {
        // A full channel here would mean dropping a tick; fine for a feed.
        let _ = tx.try_send(price);
    });

    let consumer = tokio::spawn(
        ReceiverStream::new(rx).for_each(|price| async move { info!(price, "# onNext") }),
    );

    // The consumer is already waiting; prices start half a second later.
    sleep(Duration::from_millis(500)).await;
    for price in [2_000_000, 2_050_000, 2_100_000] {
        feed.publish(price);
        sleep(Duration::from_millis(100)).await;
    }
    drop(feed);

    consumer.await.map_err(|e| e.to_string())
}
