//! # Windowing, Buffering and Grouping
//!
//! Cutting one stream into many: fixed-size windows, windows bounded by
//! both size and time, and grouping by a key. The time-bounded scene is
//! the interesting one; the same chunk size produces full windows while
//! the producer is fast and short windows once it slows down.

use std::collections::HashMap;
use std::time::Duration;

use futures::{stream, StreamExt};
use reactive_recipe::data::{royalty_books, MONTHLY_BOOK_SALES_2021};
use reactive_recipe::runtime::setup_tracing;
use tokio::time::sleep;
use tracing::info;

#[tokio::main]
async fn main() {
    setup_tracing();

    info!("===== scene: count windows =====");
    count_windows().await;

    info!("===== scene: quarterly sales =====");
    quarterly_sales().await;

    info!("===== scene: buffers of ten =====");
    buffers_of_ten().await;

    info!("===== scene: windows bounded by size and time =====");
    time_bounded_windows().await;

    info!("===== scene: titles grouped by author =====");
    titles_by_author().await;

    info!("===== scene: royalties per author =====");
    royalties_per_author().await;
}

/// Eleven elements in windows of four: two full windows and a short
/// tail. The tail is emitted on completion, not dropped.
async fn count_windows() {
    stream::iter(1..=11)
        .chunks(4)
        .enumerate()
        .for_each(|(index, window)| async move {
            info!(window = index + 1, ?window, "# currentWindow");
        })
        .await;
}

/// Twelve monthly figures, windows of three, one sum per window. That
/// is a quarterly report in three combinators.
async fn quarterly_sales() {
    stream::iter(MONTHLY_BOOK_SALES_2021)
        .chunks(3)
        .map(|months| months.iter().sum::<i64>())
        .enumerate()
        .for_each(|(index, total)| async move {
            info!(quarter = index + 1, total, "# onNext");
        })
        .await;
}

/// Buffering is windowing that hands you a `Vec` instead of a stream.
/// Ninety-five elements make nine full buffers and one of five.
async fn buffers_of_ten() {
    stream::iter(1..=95)
        .chunks(10)
        .for_each(|buffer| async move {
            info!(
                len = buffer.len(),
                first = buffer.first().copied().unwrap_or_default(),
                last = buffer.last().copied().unwrap_or_default(),
                "# buffer"
            );
        })
        .await;
}

/// A window closes at three elements or 400ms, whichever comes first.
/// The producer emits every 100ms for the first nine elements, then
/// every 300ms; the windows shrink when the pacing changes.
async fn time_bounded_windows() {
    let paced = stream::iter(1..=12).then(|n| async move {
        let gap = if n <= 9 { 100 } else { 300 };
        sleep(Duration::from_millis(gap)).await;
        n
    });

    tokio_stream::StreamExt::chunks_timeout(paced, 3, Duration::from_millis(400))
        .for_each(|window| async move { info!(?window, "# onNext") })
        .await;
}

/// Grouping by key: every title filed under its author, logged in
/// author order so successive runs agree.
async fn titles_by_author() {
    let grouped: HashMap<String, Vec<String>> = stream::iter(royalty_books())
        .fold(HashMap::new(), |mut acc, book| async move {
            let label = format!("{}({})", book.title, book.author);
            acc.entry(book.author).or_insert_with(Vec::new).push(label);
            acc
        })
        .await;

    let mut authors: Vec<_> = grouped.into_iter().collect();
    authors.sort_by(|a, b| a.0.cmp(&b.0));
    for (author, titles) in authors {
        info!(author = %author, titles = ?titles, "# grouped");
    }
}

/// Group, then reduce inside each group: ten percent of sales per
/// author across all of their titles.
async fn royalties_per_author() {
    let royalties: HashMap<String, i64> = stream::iter(royalty_books())
        .fold(HashMap::new(), |mut acc, book| async move {
            *acc.entry(book.author).or_insert(0) += book.price * book.stock / 10;
            acc
        })
        .await;

    let mut authors: Vec<_> = royalties.into_iter().collect();
    authors.sort_by(|a, b| a.0.cmp(&b.0));
    for (author, royalty) in authors {
        info!("# {}'s royalty: {}", author, royalty);
    }
}
