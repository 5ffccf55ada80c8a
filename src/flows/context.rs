//! Task-local values read from inside a stream.
//!
//! Tokio's `task_local!` plays the role a subscriber context plays in other
//! reactive toolkits: the caller scopes a value around a future, and any
//! code polled within that scope can read it without threading parameters
//! through every combinator. The `task_context` demo binary walks through
//! the scoping rules; [`secret_message`] is the testable core.

use futures::stream::{Stream, StreamExt};

use crate::flows::error::FlowError;

tokio::task_local! {
    /// Key a caller must present to receive the secret message.
    pub static SECRET_KEY: String;
    /// Message released to callers presenting the right key.
    pub static SECRET_MESSAGE: String;
}

/// For each candidate key in `source`, yields the scoped secret message if
/// the candidate matches the scoped [`SECRET_KEY`].
///
/// Outside any scope, or on a mismatch, the item is
/// `Err(FlowError::Unauthorized)`. The locals are read at poll time, so
/// the stream must be *driven* inside the scope, not merely constructed
/// there.
pub fn secret_message<S>(source: S) -> impl Stream<Item = Result<String, FlowError>>
where
    S: Stream<Item = String>,
{
    source.map(|candidate| {
        let matches = SECRET_KEY
            .try_with(|key| *key == candidate)
            .map_err(|_| FlowError::Unauthorized)?;
        if !matches {
            return Err(FlowError::Unauthorized);
        }
        SECRET_MESSAGE
            .try_with(|message| message.clone())
            .map_err(|_| FlowError::Unauthorized)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    #[tokio::test]
    async fn unscoped_reads_are_unauthorized() {
        let out: Vec<_> = secret_message(stream::iter(vec!["any".to_string()]))
            .collect()
            .await;
        assert_eq!(out, vec![Err(FlowError::Unauthorized)]);
    }
}
