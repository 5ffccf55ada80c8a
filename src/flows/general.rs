//! Pure stream transformations with assertable behavior.
//!
//! These are the functions the collect-and-assert tests in
//! `tests/flow_assertions.rs` exercise. None of them sleep or spawn; they
//! only combine whatever stream the caller hands in.

use futures::stream::{self, Stream, StreamExt};

use crate::flows::error::FlowError;

/// Divisors zipped against the source in [`divide_by_two`]. The final zero
/// is the designed failure.
const DIVISORS: [i64; 5] = [2, 2, 2, 2, 0];

/// Emits a fixed two-word greeting.
pub fn greetings() -> impl Stream<Item = &'static str> {
    stream::iter(["Hello", "Tokio"])
}

/// Divides each source element by the matching divisor in [`DIVISORS`].
///
/// Fed the even numbers 2, 4, 6, 8, 10 this yields `Ok(1)` through `Ok(4)`
/// and then `Err(DivideByZero)` for the fifth element. The error arrives as
/// a stream item; stopping on it is the consumer's choice.
pub fn divide_by_two<S>(source: S) -> impl Stream<Item = Result<i64, FlowError>>
where
    S: Stream<Item = i64>,
{
    source
        .zip(stream::iter(DIVISORS))
        .map(|(value, divisor)| value.checked_div(divisor).ok_or(FlowError::DivideByZero))
}

/// Passes through the first `n` elements of `source` and ends.
pub fn take_numbers<S>(source: S, n: usize) -> impl Stream<Item = i64>
where
    S: Stream<Item = i64>,
{
    source.take(n)
}

/// Uppercases the first letter of each element.
pub fn capitalize_countries<S, T>(source: S) -> impl Stream<Item = String>
where
    S: Stream<Item = T>,
    T: AsRef<str>,
{
    source.map(|country| {
        let country = country.as_ref();
        let mut chars = country.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn capitalize_leaves_the_tail_untouched() {
        let out: Vec<String> = capitalize_countries(stream::iter(["korea", "eNGland"]))
            .collect()
            .await;
        assert_eq!(out, vec!["Korea", "ENGland"]);
    }

    #[tokio::test]
    async fn divide_by_two_is_exact_for_even_input() {
        let out: Vec<_> = divide_by_two(stream::iter(vec![2, 4, 6, 8]))
            .collect()
            .await;
        assert_eq!(out, vec![Ok(1), Ok(2), Ok(3), Ok(4)]);
    }
}
