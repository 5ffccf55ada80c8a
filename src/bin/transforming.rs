//! # Transforming and Combining
//!
//! The middle of every pipeline: reshaping elements one at a time,
//! expanding one element into many, and joining independent sources. The
//! combining scenes are the ones where timing matters; `merge` output is
//! ordered by the clock, `zip` output by position, and `join!` by nothing
//! at all (it only says "both finished").

use std::collections::HashMap;
use std::time::Duration;

use futures::stream::FuturesUnordered;
use futures::{future, stream, StreamExt};
use reactive_recipe::data::{
    decode_morse, hourly_infections, mrna_shipments, recovery_sites, subunit_shipments,
    viral_vector_shipments, BTC_TOP_PRICES_PER_YEAR, MORSE_CODES,
};
use reactive_recipe::runtime::setup_tracing;
use tokio::time::sleep;
use tracing::info;

#[tokio::main]
async fn main() {
    setup_tracing();

    info!("===== scene: map =====");
    map_shapes().await;

    info!("===== scene: profit rate =====");
    profit_rate().await;

    info!("===== scene: flat_map =====");
    flat_map_expansion().await;

    info!("===== scene: unordered inner streams =====");
    flat_map_unordered_tables().await;

    info!("===== scene: chain keeps order =====");
    chain_in_order().await;

    info!("===== scene: merge follows the clock =====");
    merge_by_time().await;

    info!("===== scene: merge a list of delayed futures =====");
    merge_recovery_feed().await;

    info!("===== scene: zip =====");
    zip_sources().await;

    info!("===== scene: join waits for both =====");
    join_then_signal().await;

    info!("===== scene: collect to a Vec =====");
    collect_morse_word().await;

    info!("===== scene: collect to a map =====");
    collect_morse_table().await;
}

/// One-to-one reshaping, twice over the same elements.
async fn map_shapes() {
    stream::iter(1..=5)
        .map(|n| format!("{n}-Circle"))
        .map(|shape| shape.replace("Circle", "Rectangle"))
        .for_each(|shape| async move { info!(%shape, "# onNext") })
        .await;
}

/// Bought at fifty million, measured against the 2021 top.
async fn profit_rate() {
    let buy_price = 50_000_000i64;

    stream::iter(BTC_TOP_PRICES_PER_YEAR)
        .filter(|(year, _)| future::ready(*year == 2021))
        .map(move |(_, top)| (top - buy_price) as f64 / buy_price as f64 * 100.0)
        .for_each(|rate| async move { info!(profit_rate = %format!("{rate:.1}%"), "# onNext") })
        .await;
}

/// Each outer element expands into its own inner stream; with plain
/// `flat_map` the inners run one after another, so order is preserved.
async fn flat_map_expansion() {
    stream::iter(["Good", "Bad"])
        .flat_map(|feeling| {
            stream::iter(["Morning", "Afternoon", "Evening"])
                .map(move |time_of_day| format!("{feeling} {time_of_day}"))
        })
        .for_each(|greeting| async move { info!(%greeting, "# onNext") })
        .await;
}

/// Up to four inner streams polled concurrently: the times tables come
/// out interleaved, which is the price of the added throughput.
async fn flat_map_unordered_tables() {
    stream::iter(2..=9)
        .flat_map_unordered(4, |dan| {
            stream::iter(1..=9)
                .then(move |step| async move {
                    sleep(Duration::from_millis(5)).await;
                    (dan, step, dan * step)
                })
                .boxed()
        })
        .for_each(|(dan, step, product)| async move { info!("# {} x {} = {}", dan, step, product) })
        .await;
}

/// `chain` starts the second source only after the first completes.
async fn chain_in_order() {
    stream::iter([1, 2, 3])
        .chain(stream::iter([4, 5]))
        .for_each(|n| async move { info!(n, "# onNext") })
        .await;

    stream::iter(viral_vector_shipments())
        .chain(stream::iter(mrna_shipments()))
        .chain(stream::iter(subunit_shipments()))
        .for_each(|(brand, doses)| async move { info!(brand = %brand, doses, "# onNext") })
        .await;
}

/// Two paced sources merged into one: elements come out in arrival
/// order, so the slower source's values land between the faster one's.
async fn merge_by_time() {
    let lows = stream::iter([1, 2, 3]).then(|n| async move {
        sleep(Duration::from_millis(300)).await;
        n
    });
    let highs = stream::iter([10, 20]).then(|n| async move {
        sleep(Duration::from_millis(500)).await;
        n
    });

    tokio_stream::StreamExt::merge(Box::pin(lows), Box::pin(highs))
        .for_each(|n| async move { info!(n, "# onNext") })
        .await;
}

/// A whole list of delayed answers raced together. South comes back
/// first despite being last in the list; the log order is recovery
/// order.
async fn merge_recovery_feed() {
    let recoveries: FuturesUnordered<_> = recovery_sites()
        .into_iter()
        .map(|(site, delay_ms, message)| async move {
            sleep(Duration::from_millis(delay_ms)).await;
            (site, message)
        })
        .collect();

    recoveries
        .for_each(|(site, message)| async move { info!(site, %message, "# onNext") })
        .await;
}

/// Zip pairs by position: plain tuples, a combinator, and a three-way
/// zip summing the same hour across three cities.
async fn zip_sources() {
    stream::iter([1, 2, 3])
        .zip(stream::iter([4, 5, 6]))
        .for_each(|pair| async move { info!(?pair, "# onNext") })
        .await;

    stream::iter([1, 2, 3])
        .zip(stream::iter([4, 5, 6]))
        .map(|(a, b)| a * b)
        .for_each(|product| async move { info!(product, "# onNext") })
        .await;

    let seoul = stream::iter(hourly_infections("seoul"));
    let incheon = stream::iter(hourly_infections("incheon"));
    let suwon = stream::iter(hourly_infections("suwon"));

    seoul
        .zip(incheon)
        .zip(suwon)
        .map(|(((hour, s), (_, i)), (_, u))| (hour, s + i + u))
        .for_each(|(hour, total)| async move { info!(hour, total, "# onNext") })
        .await;
}

/// `join!` emits no values, only the fact of joint completion; the mail
/// goes out when both restarts are done, whichever finished first.
async fn join_then_signal() {
    let app_server = async {
        sleep(Duration::from_millis(600)).await;
        info!("# Application server restarted");
    };
    let db_server = async {
        sleep(Duration::from_millis(800)).await;
        info!("# DB server restarted");
    };

    tokio::join!(app_server, db_server);
    info!("# All targets restarted, sending the notification mail");
}

/// Collecting closes a stream back into a value: three codes into a
/// word.
async fn collect_morse_word() {
    let letters: Vec<char> = stream::iter(["...", "---", "..."])
        .filter_map(|code| future::ready(decode_morse(code)))
        .collect()
        .await;

    let word: String = letters.into_iter().collect();
    info!(%word, "# decoded");
}

/// Collecting into a map: code to letter for the whole alphabet, then a
/// couple of lookups to prove it.
async fn collect_morse_table() {
    let table: HashMap<&str, char> = stream::iter(MORSE_CODES.into_iter().enumerate())
        .map(|(idx, code)| (code, (b'a' + idx as u8) as char))
        .collect()
        .await;

    for code in ["-.-", ".", "...-", "..", "-."] {
        if let Some(letter) = table.get(code) {
            info!(code, letter = %letter, "# looked up");
        }
    }
}
