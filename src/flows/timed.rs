//! Flows driven by a time source the caller provides.
//!
//! Both functions take a tick stream instead of creating an interval
//! themselves. In production that tick stream is
//! `tokio_stream::wrappers::IntervalStream`; in the virtual-time tests it
//! is the same interval running against tokio's paused clock, advanced
//! explicitly with `tokio::time::advance`.

use futures::stream::{self, Stream, StreamExt};

/// The tally board published on every report tick: eleven districts.
const DISTRICT_TALLIES: [(&str, u32); 11] = [
    ("gangnam", 12),
    ("mapo", 7),
    ("jongno", 4),
    ("yongsan", 9),
    ("seocho", 15),
    ("songpa", 11),
    ("guro", 5),
    ("nowon", 8),
    ("jung", 3),
    ("gangseo", 6),
    ("dongjak", 10),
];

/// Re-publishes the full district tally board on every trigger tick.
///
/// One tick produces exactly eleven `(district, count)` items.
pub fn infection_counts<S, T>(trigger: S) -> impl Stream<Item = (&'static str, u32)>
where
    S: Stream<Item = T>,
{
    trigger.flat_map(|_| stream::iter(DISTRICT_TALLIES))
}

/// Running vote tallies released once per tick, five releases total.
const VOTE_TALLIES: [u64; 5] = [50_000, 1_469_500, 3_000_000, 3_773_000, 3_926_000];

/// Maps the first five ticks of `ticks` to the running vote tallies and
/// completes. Later ticks are ignored because the tally table is exhausted.
pub fn vote_counts<S, T>(ticks: S) -> impl Stream<Item = u64>
where
    S: Stream<Item = T>,
{
    ticks.zip(stream::iter(VOTE_TALLIES)).map(|(_, count)| count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn one_trigger_tick_produces_eleven_tallies() {
        let out: Vec<_> = infection_counts(stream::iter([()])).collect().await;
        assert_eq!(out.len(), 11);
        assert_eq!(out[0], ("gangnam", 12));
    }

    #[tokio::test]
    async fn vote_counts_stops_after_five_releases() {
        let out: Vec<u64> = vote_counts(stream::iter(0..100)).collect().await;
        assert_eq!(out.len(), 5);
        assert_eq!(out.last(), Some(&3_926_000));
    }
}
