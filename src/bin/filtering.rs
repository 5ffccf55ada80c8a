//! # Filtering and Selecting
//!
//! Choosing which elements survive: by predicate, by asynchronous
//! predicate, by count, by elapsed time, by position from the end, or by
//! a stop condition. The BTC yearly-top table is the workhorse here; its
//! crossings of the 20,000,000 mark give every selection something to
//! bite on.

use std::collections::VecDeque;
use std::time::Duration;

use futures::{future, stream, StreamExt};
use reactive_recipe::data::{doses_by_vaccine, Vaccine, BTC_TOP_PRICES_PER_YEAR};
use reactive_recipe::runtime::setup_tracing;
use tokio::time::{self, sleep, Instant};
use tokio_stream::wrappers::IntervalStream;
use tracing::info;

/// A fresh tick stream: one sequence number every 300 ms, first after
/// 300 ms.
fn ticks() -> impl futures::Stream<Item = usize> {
    let period = Duration::from_millis(300);
    IntervalStream::new(time::interval_at(Instant::now() + period, period))
        .enumerate()
        .map(|(seq, _)| seq)
}

#[tokio::main]
async fn main() {
    setup_tracing();

    info!("===== scene: filter =====");
    filter_sync().await;

    info!("===== scene: filter with an async predicate =====");
    filter_async().await;

    info!("===== scene: take and skip by count on a ticking source =====");
    take_and_skip_by_count().await;

    info!("===== scene: skip by elapsed time =====");
    skip_by_time().await;

    info!("===== scene: take until a deadline =====");
    take_by_time().await;

    info!("===== scene: filter then skip =====");
    filter_then_skip().await;

    info!("===== scene: keep the last two =====");
    take_last_two().await;

    info!("===== scene: stop conditions, inclusive and exclusive =====");
    stop_conditions().await;

    info!("===== scene: first element only =====");
    first_only().await;
}

/// Odd numbers from 1..=20, then the years whose top crossed twenty
/// million.
async fn filter_sync() {
    stream::iter(1..=20)
        .filter(|n| future::ready(n % 2 != 0))
        .for_each(|n| async move { info!(n, "# onNext") })
        .await;

    stream::iter(BTC_TOP_PRICES_PER_YEAR)
        .filter(|(_, price)| future::ready(*price > 20_000_000))
        .for_each(|(year, price)| async move { info!(year, price, "# onNext") })
        .await;
}

/// The predicate itself awaits: each brand's stock level is "fetched"
/// before deciding. Brands with at least three million doses survive.
async fn filter_async() {
    let doses = doses_by_vaccine();
    let brands = [
        Vaccine::AstraZeneca,
        Vaccine::Janssen,
        Vaccine::Pfizer,
        Vaccine::Moderna,
        Vaccine::Novavax,
    ];

    stream::iter(brands)
        .filter(|brand| {
            let available = doses.get(brand).copied().unwrap_or(0);
            async move {
                sleep(Duration::from_millis(50)).await;
                available >= 3_000_000
            }
        })
        .for_each(|brand| async move { info!(vaccine = %brand, "# onNext") })
        .await;
}

/// `take(3)` ends the infinite ticking at three elements; `skip(2)` on a
/// fresh ticker discards the first two and keeps the next three.
async fn take_and_skip_by_count() {
    ticks()
        .take(3)
        .for_each(|seq| async move { info!(seq, "# onNext, take(3)") })
        .await;

    ticks()
        .skip(2)
        .take(3)
        .for_each(|seq| async move { info!(seq, "# onNext, skip(2)") })
        .await;
}

/// Skips whatever arrives during the first second; the elapsed check runs
/// as each element is polled.
async fn skip_by_time() {
    let start = Instant::now();
    ticks()
        .skip_while(move |_| future::ready(start.elapsed() < Duration::from_secs(1)))
        .take(3)
        .for_each(|seq| async move { info!(seq, "# onNext, after the first second") })
        .await;
}

/// `take_until` races the stream against a deadline future; whatever
/// ticked before the one-second mark is all there is.
async fn take_by_time() {
    ticks()
        .take_until(sleep(Duration::from_millis(1_000)))
        .for_each(|seq| async move { info!(seq, "# onNext, before the deadline") })
        .await;
}

/// Selection stages compose left to right: first the predicate, then the
/// skip. Expect the two most recent crossing years only.
async fn filter_then_skip() {
    stream::iter(BTC_TOP_PRICES_PER_YEAR)
        .filter(|(_, price)| future::ready(*price >= 20_000_000))
        .skip(2)
        .for_each(|(year, price)| async move { info!(year, price, "# onNext") })
        .await;
}

/// There is no peeking at the end of a stream; keeping the last two means
/// folding them through a two-slot window until completion.
async fn take_last_two() {
    let last_two = stream::iter(BTC_TOP_PRICES_PER_YEAR)
        .fold(VecDeque::with_capacity(2), |mut window, entry| async move {
            if window.len() == 2 {
                window.pop_front();
            }
            window.push_back(entry);
            window
        })
        .await;

    for (year, price) in last_two {
        info!(year, price, "# onNext");
    }
}

/// Inclusive stop: emit through the first year over twenty million, then
/// end. Exclusive stop: `take_while` drops the boundary element itself.
async fn stop_conditions() {
    stream::iter(BTC_TOP_PRICES_PER_YEAR)
        .scan(false, |stopped, (year, price)| {
            let emit = !*stopped;
            if price > 20_000_000 {
                *stopped = true;
            }
            future::ready(if emit { Some((year, price)) } else { None })
        })
        .for_each(|(year, price)| async move { info!(year, price, "# onNext, inclusive") })
        .await;

    stream::iter(BTC_TOP_PRICES_PER_YEAR)
        .take_while(|(_, price)| future::ready(*price < 20_000_000))
        .for_each(|(year, price)| async move { info!(year, price, "# onNext, exclusive") })
        .await;
}

/// `next()` is "give me one": the rest of the sequence is never touched.
async fn first_only() {
    let mut feed = stream::iter(BTC_TOP_PRICES_PER_YEAR);
    if let Some((year, price)) = feed.next().await {
        info!(year, price, "# onNext, and nothing more");
    }
}
