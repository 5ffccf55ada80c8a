//! Demand limits, poll probes and mock sources.
//!
//! These tests pin down behavior that plain collect-and-assert cannot
//! reach: how a bounded channel refuses work, whether a future was ever
//! polled, and what a flow does when its source is a scripted mock.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use reactive_recipe::flows::context::{secret_message, SECRET_KEY, SECRET_MESSAGE};
use reactive_recipe::flows::{divide_by_two, process_task, FlowError};
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, oneshot};
use tokio_test::stream_mock::StreamMockBuilder;
use tokio_test::{assert_pending, assert_ready, task};

/// A bounded channel accepts exactly its capacity and refuses the rest;
/// consuming one element opens exactly one slot.
#[tokio::test]
async fn bounded_channel_refuses_demand_above_capacity() {
    let (tx, mut rx) = mpsc::channel::<i64>(1);

    let mut accepted = 0;
    let mut refused = 0;
    for n in 0..100 {
        match tx.try_send(n) {
            Ok(()) => accepted += 1,
            Err(TrySendError::Full(_)) => refused += 1,
            Err(TrySendError::Closed(_)) => panic!("receiver dropped mid-test"),
        }
    }

    assert_eq!(accepted, 1);
    assert_eq!(refused, 99);

    // Draining the single buffered element frees one slot.
    assert_eq!(rx.recv().await, Some(0));
    assert!(tx.try_send(100).is_ok());
    assert!(matches!(tx.try_send(101), Err(TrySendError::Full(_))));
}

/// A scripted source, pauses included, drives the division flow to the
/// same four values and designed error as a plain iterator source.
#[tokio::test]
async fn a_mock_source_drives_the_division_flow() {
    let source = StreamMockBuilder::new()
        .next(2)
        .next(4)
        .wait(Duration::from_millis(10))
        .next(6)
        .next(8)
        .next(10)
        .build();

    let out: Vec<_> = divide_by_two(source).collect().await;

    assert_eq!(
        out,
        vec![Ok(1), Ok(2), Ok(3), Ok(4), Err(FlowError::DivideByZero)]
    );
}

/// The standby future is never polled while the main source is still
/// pending, and never at all once the main source answers.
#[tokio::test]
async fn standby_is_untouched_while_main_power_holds() {
    let (main_tx, main_rx) = oneshot::channel::<Option<&str>>();
    let standby_polled = Arc::new(AtomicBool::new(false));

    let standby = {
        let standby_polled = standby_polled.clone();
        async move {
            standby_polled.store(true, Ordering::SeqCst);
            "standby power"
        }
    };

    let mut switchover = task::spawn(process_task(
        async move { main_rx.await.unwrap_or(None) },
        standby,
    ));

    // Parked on the main source; the standby side has never run.
    assert_pending!(switchover.poll());
    assert!(!standby_polled.load(Ordering::SeqCst));

    main_tx
        .send(Some("main power"))
        .expect("Failed to hand power to the main source");
    assert!(switchover.is_woken());
    assert_eq!(assert_ready!(switchover.poll()), "main power");
    assert!(!standby_polled.load(Ordering::SeqCst));
}

/// An empty main source routes the request to standby.
#[tokio::test]
async fn standby_supplies_power_when_main_is_empty() {
    let result = process_task(async { None }, async { "standby power" }).await;
    assert_eq!(result, "standby power");
}

/// Driving the flow inside matching scopes unlocks the message; a wrong
/// candidate in the same scope is still refused.
#[tokio::test]
async fn scoped_key_unlocks_the_secret_message() {
    let candidates = stream::iter(vec!["polo".to_string(), "marco".to_string()]);

    let out = SECRET_KEY
        .scope(
            "polo".to_string(),
            SECRET_MESSAGE.scope(
                "Answer for polo".to_string(),
                secret_message(candidates).collect::<Vec<_>>(),
            ),
        )
        .await;

    assert_eq!(
        out,
        vec![
            Ok("Answer for polo".to_string()),
            Err(FlowError::Unauthorized)
        ]
    );
}
