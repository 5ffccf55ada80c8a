//! Interval-driven flows tested against tokio's paused clock.
//!
//! `start_paused` freezes time at test start; `tokio::time::advance` moves
//! it explicitly. An hour-long interval therefore costs microseconds of
//! wall time, and every assertion about "what has been released so far"
//! is exact instead of sleep-and-hope.

use std::time::Duration;

use futures::stream::{self, StreamExt};
use reactive_recipe::flows::{infection_counts, vote_counts};
use tokio::time::{self, Instant};
use tokio_stream::wrappers::IntervalStream;
use tokio_test::{assert_pending, assert_ready, task};

const HOUR: Duration = Duration::from_secs(60 * 60);
const MINUTE: Duration = Duration::from_secs(60);

/// One simulated hour releases one full tally board, eleven districts.
#[tokio::test(start_paused = true)]
async fn one_simulated_hour_releases_the_full_board() {
    let hourly = IntervalStream::new(time::interval_at(Instant::now() + HOUR, HOUR));
    let mut board = task::spawn(infection_counts(hourly).take(11).collect::<Vec<_>>());

    // Nothing can be ready before the first tick.
    assert_pending!(board.poll());

    time::advance(HOUR).await;
    assert!(board.is_woken());

    let tallies = assert_ready!(board.poll());
    assert_eq!(tallies.len(), 11);
    assert_eq!(tallies[0], ("gangnam", 12));
}

/// Fifty-nine minutes is not an hour. The board stays pending until the
/// final minute is advanced.
#[tokio::test(start_paused = true)]
async fn a_minute_short_of_the_hour_releases_nothing() {
    let hourly = IntervalStream::new(time::interval_at(Instant::now() + HOUR, HOUR));
    let mut board = task::spawn(infection_counts(hourly).take(11).collect::<Vec<_>>());

    assert_pending!(board.poll());
    time::advance(HOUR - MINUTE).await;
    assert_pending!(board.poll());

    time::advance(MINUTE).await;
    assert_eq!(assert_ready!(board.poll()).len(), 11);
}

/// Each advanced minute releases exactly one running tally, and the
/// stream completes on its own once the tally table is exhausted.
#[tokio::test(start_paused = true)]
async fn vote_tallies_release_once_per_minute() {
    let minutely = IntervalStream::new(time::interval_at(Instant::now() + MINUTE, MINUTE));
    let mut tallies = task::spawn(vote_counts(minutely));

    assert_pending!(tallies.poll_next());

    for expected in [50_000u64, 1_469_500, 3_000_000, 3_773_000, 3_926_000] {
        time::advance(MINUTE).await;
        assert_eq!(assert_ready!(tallies.poll_next()), Some(expected));
    }

    // The table is exhausted; completion needs no further tick.
    assert_eq!(assert_ready!(tallies.poll_next()), None);
}

/// A stream that never emits loses to the deadline, and the paused clock
/// reports exactly the timeout as elapsed.
#[tokio::test(start_paused = true)]
async fn silence_past_the_deadline_times_out() {
    let started = Instant::now();
    let result = time::timeout(Duration::from_millis(500), stream::pending::<i64>().next()).await;

    assert!(result.is_err(), "a silent stream must not beat the deadline");
    assert_eq!(started.elapsed(), Duration::from_millis(500));
}
