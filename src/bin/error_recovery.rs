//! # Error Recovery
//!
//! An `Err` flowing through a `try_` combinator ends the pipeline, so
//! every recovery strategy is about where to stop that from happening:
//! substitute a value, switch to another source, drop the bad element
//! and keep going, or give the whole sequence another attempt.

use std::collections::HashSet;
use std::time::Duration;

use futures::{future, stream, StreamExt, TryStreamExt};
use reactive_recipe::data::{
    mrna_shipments, royalty_books, subunit_shipments, viral_vector_shipments, InventoryBook,
    Vaccine,
};
use reactive_recipe::runtime::setup_tracing;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    setup_tracing();

    info!("===== scene: an error ends the stream =====");
    error_ends_the_stream().await;

    info!("===== scene: bad input mid-stream =====");
    bad_input_mid_stream().await;

    info!("===== scene: substitute a fallback value =====");
    fallback_pen_name().await;

    info!("===== scene: substitute by error kind =====");
    fallback_by_error_kind().await;

    info!("===== scene: switch to a fallback source =====");
    fallback_source().await;

    info!("===== scene: drop the bad element and continue =====");
    drop_and_continue().await;

    info!("===== scene: timeout, then retry the sequence =====");
    timeout_then_retry().await;
}

/// The first `Err` stops `try_for_each` cold. Six is divisible by
/// three, so eight and ten are never seen.
async fn error_ends_the_stream() {
    let outcome = stream::iter(1..=5)
        .map(|n| {
            let doubled = n * 2;
            if doubled % 3 == 0 {
                Err(format!("{doubled} is divisible by 3"))
            } else {
                Ok(doubled)
            }
        })
        .try_for_each(|n| {
            info!(n, "# onNext");
            future::ready(Ok(()))
        })
        .await;

    if let Err(err) = outcome {
        error!(%err, "# onError");
    }
}

/// Same shape with data that goes bad mid-stream: the digit kills the
/// pipeline and the trailing 'd' is never uppercased.
async fn bad_input_mid_stream() {
    let outcome = stream::iter(['a', 'b', 'c', '3', 'd'])
        .map(|c| {
            if c.is_alphabetic() {
                Ok(c.to_ascii_uppercase())
            } else {
                Err(format!("'{c}' is not a letter"))
            }
        })
        .try_for_each(|upper| {
            info!(%upper, "# onNext");
            future::ready(Ok(()))
        })
        .await;

    if let Err(err) = outcome {
        error!(%err, "# onError");
    }
}

/// One inventory row has no pen name. Substituting a placeholder keeps
/// the other six rows flowing instead of ending the stream at row
/// three.
async fn fallback_pen_name() {
    stream::iter(royalty_books())
        .map(|book| {
            let author = book.author.clone();
            book.pen_name.ok_or(author)
        })
        .map(|looked_up| {
            looked_up.unwrap_or_else(|author| {
                warn!(%author, "# missing pen name, substituting");
                "No Pen Name".to_string()
            })
        })
        .for_each(|pen_name| async move { info!(%pen_name, "# onNext") })
        .await;
}

#[derive(Debug, Error)]
enum PenNameError {
    #[error("{author} has no pen name")]
    Missing { author: String },
    #[error("pen name for {author} is not printable")]
    NotPrintable { author: String },
}

fn uppercase_pen_name(book: &InventoryBook) -> Result<String, PenNameError> {
    let pen_name = book.pen_name.as_deref().ok_or_else(|| PenNameError::Missing {
        author: book.author.clone(),
    })?;
    if !pen_name.chars().all(|c| c.is_ascii_graphic() || c == ' ') {
        return Err(PenNameError::NotPrintable {
            author: book.author.clone(),
        });
    }
    Ok(pen_name.to_uppercase())
}

/// The substitute can depend on which error occurred. Each kind gets
/// its own replacement string, the way chained typed fallbacks do.
async fn fallback_by_error_kind() {
    stream::iter(royalty_books())
        .map(|book| uppercase_pen_name(&book))
        .map(|converted| match converted {
            Ok(pen_name) => pen_name,
            Err(err @ PenNameError::Missing { .. }) => {
                warn!(%err, "# substituting");
                "no pen name".to_string()
            }
            Err(err @ PenNameError::NotPrintable { .. }) => {
                warn!(%err, "# substituting");
                "illegal pen name".to_string()
            }
        })
        .for_each(|pen_name| async move { info!(%pen_name, "# onNext") })
        .await;
}

fn titles_from_cache(keyword: &str) -> Vec<String> {
    royalty_books()
        .into_iter()
        .filter(|book| book.title.contains(keyword))
        .map(|book| book.title)
        .collect()
}

async fn titles_from_database(keyword: &str) -> Vec<String> {
    sleep(Duration::from_millis(200)).await;
    let mut shelf = royalty_books();
    shelf.push(InventoryBook::new(
        "Domain-Driven Streams",
        "Joy",
        Some("ddd-man"),
        35_000,
        200,
    ));
    shelf
        .into_iter()
        .filter(|book| book.title.contains(keyword))
        .map(|book| book.title)
        .collect()
}

/// Recovery can swap in a whole other source, not just a value. The
/// keyword is missing from the cached shelf, so the request falls
/// through to the slower database, which does stock the title.
async fn fallback_source() {
    let keyword = "Domain-Driven";

    let cached = titles_from_cache(keyword);
    let titles = if cached.is_empty() {
        warn!(keyword, "# not in the cache, falling back to the database");
        titles_from_database(keyword).await
    } else {
        cached
    };

    stream::iter(titles)
        .for_each(|title| async move { info!(%title, "# onNext") })
        .await;
}

/// The gentlest strategy: log the offending element, emit nothing for
/// it, and let the rest of the sequence through.
async fn drop_and_continue() {
    stream::iter([1i64, 2, 4, 0, 6, 12])
        .filter_map(|divisor| {
            future::ready(match 12i64.checked_div(divisor) {
                Some(quotient) => Some((divisor, quotient)),
                None => {
                    warn!(divisor, "# dropped, cannot divide by zero");
                    None
                }
            })
        })
        .for_each(|(divisor, quotient)| async move { info!(divisor, quotient, "# onNext") })
        .await;
}

/// Each shipment must arrive within 300ms. The first attempt slows
/// down after two shipments and times out; the second attempt runs at
/// full speed and completes. Items seen before the timeout show up
/// twice, so the final report dedupes by brand.
async fn timeout_then_retry() {
    let per_item = Duration::from_millis(300);
    let mut collected: Vec<(Vaccine, u64)> = Vec::new();

    for attempt in 1u32..=2 {
        info!(attempt, "# requesting the shipment feed");

        let pairs: Vec<(Vaccine, u64)> = viral_vector_shipments()
            .into_iter()
            .chain(mrna_shipments())
            .chain(subunit_shipments())
            .collect();

        let paced = stream::iter(pairs.into_iter().enumerate()).then(move |(idx, pair)| async move {
            let gap = if attempt == 1 && idx >= 2 { 600 } else { 100 };
            sleep(Duration::from_millis(gap)).await;
            pair
        });

        let mut guarded = Box::pin(tokio_stream::StreamExt::timeout(paced, per_item));
        let mut timed_out = false;
        while let Some(next) = guarded.next().await {
            match next {
                Ok((brand, doses)) => {
                    info!(brand = %brand, doses, "# onNext");
                    collected.push((brand, doses));
                }
                Err(_) => {
                    warn!(attempt, "# timed out waiting for the next shipment");
                    timed_out = true;
                    break;
                }
            }
        }

        if !timed_out {
            break;
        }
    }

    let mut seen = HashSet::new();
    let distinct: Vec<String> = collected
        .into_iter()
        .filter(|(brand, _)| seen.insert(*brand))
        .map(|(brand, doses)| format!("{brand}: {doses}"))
        .collect();
    info!(shipments = ?distinct, "# final report after dedupe");
}
