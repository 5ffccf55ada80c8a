use futures::stream::{self, StreamExt};
use reactive_recipe::flows::{
    capitalize_countries, divide_by_two, greetings, take_numbers, FlowError,
};

/// The fixed greeting comes out in order, then the stream completes.
#[tokio::test]
async fn greetings_emits_hello_then_tokio() {
    let out: Vec<&str> = greetings().collect().await;
    assert_eq!(out, vec!["Hello", "Tokio"]);
}

/// Four clean divisions and then the designed divide-by-zero as the fifth
/// item. The error travels as an item, not a panic, so collect sees all
/// five results.
#[tokio::test]
async fn divide_by_two_yields_four_values_then_the_error() {
    let out: Vec<Result<i64, FlowError>> = divide_by_two(stream::iter(vec![2, 4, 6, 8, 10]))
        .collect()
        .await;

    assert_eq!(out.len(), 5);
    assert_eq!(&out[..4], &[Ok(1), Ok(2), Ok(3), Ok(4)]);
    assert_eq!(out[4], Err(FlowError::DivideByZero));
}

/// A consumer stopping on the first error sees exactly the four values.
#[tokio::test]
async fn stopping_on_the_first_error_keeps_the_good_prefix() {
    let out: Vec<i64> = divide_by_two(stream::iter(vec![2, 4, 6, 8, 10]))
        .take_while(|result| futures::future::ready(result.is_ok()))
        .filter_map(|result| futures::future::ready(result.ok()))
        .collect()
        .await;

    assert_eq!(out, vec![1, 2, 3, 4]);
}

/// `take_numbers` caps the thousand-element source at exactly five hundred.
#[tokio::test]
async fn take_numbers_stops_at_the_requested_count() {
    let out: Vec<i64> = take_numbers(stream::iter(0..1000), 500).collect().await;

    assert_eq!(out.len(), 500);
    assert_eq!(out.first(), Some(&0));
    assert_eq!(out.last(), Some(&499));
}

/// Every country comes out with its first letter uppercased and the rest
/// of the word untouched.
#[tokio::test]
async fn capitalize_countries_uppercases_each_first_letter() {
    let out: Vec<String> =
        capitalize_countries(stream::iter(vec!["korea", "england", "canada", "japan"]))
            .collect()
            .await;

    assert_eq!(out, vec!["Korea", "England", "Canada", "Japan"]);
}
