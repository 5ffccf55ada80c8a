//! Primary/standby selection between two futures.

use std::future::Future;

/// Awaits the main source; if it produces no value, falls back to standby.
///
/// The standby future is only polled when the main source came back empty.
/// `tests/demand_and_probe.rs` pins that property down with a poll harness,
/// the way a publisher probe would in other reactive toolkits.
pub async fn process_task<T, M, S>(main_source: M, standby: S) -> T
where
    M: Future<Output = Option<T>>,
    S: Future<Output = T>,
{
    match main_source.await {
        Some(value) => value,
        None => standby.await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn standby_is_not_polled_when_main_supplies_power() {
        let standby_touched = AtomicBool::new(false);
        let result = process_task(async { Some("main power") }, async {
            standby_touched.store(true, Ordering::SeqCst);
            "standby power"
        })
        .await;
        assert_eq!(result, "main power");
        assert!(!standby_touched.load(Ordering::SeqCst));
    }
}
