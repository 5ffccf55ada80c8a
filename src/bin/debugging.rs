//! # Debugging Operator Chains
//!
//! A failure deep inside a combinator chain surfaces as one terminal
//! error, far from the stage that caused it. These scenes build the same
//! failing pipeline three ways:
//!
//! 1. **Bare**: the error names the bad value but not the stage.
//! 2. **Checkpoints**: each stage stamps its name onto errors passing
//!    through, so the terminal error carries the whole path.
//! 3. **Signal log**: `inspect` taps with per-stage log targets trace
//!    every element past every point (run with `RUST_LOG=debug`).
//!
//! The last scene applies checkpoints to the classic zip-then-divide
//! failure.
//!
//! The pipeline under test delocalizes crate labels ("BANANAS") into
//! produce names ("banana") and looks each up in the catalog; `melon` is
//! missing from the catalog on purpose.

use futures::{future, stream, StreamExt, TryStreamExt};
use reactive_recipe::data::fruit_catalog;
use reactive_recipe::runtime::setup_tracing;
use tracing::{debug, error, info};

/// Crate labels arriving from upstream; MELONS is the poisoned one.
const CRATE_LABELS: [&str; 4] = ["BANANAS", "APPLES", "PEARS", "MELONS"];

/// "BANANAS" to "banana": lowercase, then drop the plural s.
fn delocalize(label: &str) -> String {
    let lower = label.to_lowercase();
    lower.strip_suffix('s').map(str::to_owned).unwrap_or(lower)
}

#[tokio::main]
async fn main() {
    setup_tracing();

    info!("===== scene: failure with no location =====");
    failure_without_location().await;

    info!("===== scene: checkpoints on every stage =====");
    failure_with_checkpoints().await;

    info!("===== scene: signal log =====");
    signal_log().await;

    info!("===== scene: zip, divide, checkpoint =====");
    zip_divide_with_checkpoints().await;
}

/// The terminal error says *what* was missing, but nothing in it says
/// *where* in the chain the lookup happened.
async fn failure_without_location() {
    let catalog = fruit_catalog();

    let outcome = stream::iter(CRATE_LABELS)
        .map(delocalize)
        .map(|fruit| {
            catalog
                .get(fruit.as_str())
                .copied()
                .ok_or(format!("no catalog entry for {fruit}"))
        })
        .try_for_each(|name| {
            info!(%name, "# onNext");
            future::ready(Ok(()))
        })
        .await;

    if let Err(e) = outcome {
        error!(error = %e, "Pipeline failed, but which stage?");
    }
}

/// Each stage wraps errors crossing it with its own name. The terminal
/// error reads like a path through the chain, innermost stage first.
async fn failure_with_checkpoints() {
    let catalog = fruit_catalog();

    let outcome = stream::iter(CRATE_LABELS)
        .map(|label| Ok::<_, String>(delocalize(label)))
        .map(|station| station.map_err(|e: String| format!("checkpoint <delocalize>: {e}")))
        .map(|fruit| {
            fruit.and_then(|fruit| {
                catalog
                    .get(fruit.as_str())
                    .copied()
                    .ok_or(format!("no catalog entry for {fruit}"))
            })
        })
        .map(|found| found.map_err(|e| format!("checkpoint <catalog_lookup>: {e}")))
        .try_for_each(|name| {
            info!(%name, "# onNext");
            future::ready(Ok(()))
        })
        .await;

    if let Err(e) = outcome {
        error!(error = %e, "The error names the stage it crossed");
    }
}

/// The always-on variant: tap every stage with its own log target and
/// watch each signal flow past. Nothing to deduce after the fact, the
/// log already shows the last stage the poisoned element reached.
async fn signal_log() {
    let catalog = fruit_catalog();

    let outcome = stream::iter(CRATE_LABELS)
        .inspect(|label| debug!(target: "produce::source", %label, "onNext"))
        .map(delocalize)
        .inspect(|fruit| debug!(target: "produce::delocalize", %fruit, "onNext"))
        .map(|fruit| {
            catalog
                .get(fruit.as_str())
                .copied()
                .ok_or(format!("no catalog entry for {fruit}"))
        })
        .inspect(|looked_up| debug!(target: "produce::catalog_lookup", ?looked_up, "onNext"))
        .try_for_each(|name| {
            info!(%name, "# onNext");
            future::ready(Ok(()))
        })
        .await;

    match outcome {
        Ok(()) => info!("# onComplete"),
        Err(e) => error!(error = %e, "# onError, see the last debug target that logged"),
    }
}

/// Division by zero produced three stages earlier, reported at the end of
/// the chain. With a checkpoint after the zip and after the map, the
/// terminal error lists both stations it travelled through.
async fn zip_divide_with_checkpoints() {
    let outcome = stream::iter([2, 4, 6, 8])
        .zip(stream::iter([1, 2, 3, 0]))
        .map(|(dividend, divisor): (i32, i32)| {
            dividend
                .checked_div(divisor)
                .ok_or(format!("division by zero: {dividend}/{divisor}"))
        })
        .map(|divided| divided.map_err(|e| format!("checkpoint <zip_divide>: {e}")))
        .map(|divided| divided.map(|n| n + 2))
        .map(|shifted| shifted.map_err(|e| format!("checkpoint <plus_two>: {e}")))
        .try_for_each(|n| {
            info!(n, "# onNext");
            future::ready(Ok(()))
        })
        .await;

    if let Err(e) = outcome {
        error!(error = %e, "Error path shows every checkpoint it crossed");
    }
}
