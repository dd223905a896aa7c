//! Bounded fan-out
//!
//! Runs one future per input with at most `max_in_flight` of them holding a
//! permit at any time. Results come back in input order. The first error
//! wins and the remaining futures are dropped.

use crate::prelude::*;
use futures::future::try_join_all;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;

pub async fn try_join_bounded<I, F, Fut, T>(
    inputs: I,
    max_in_flight: usize,
    task: F,
) -> Result<Vec<T>>
where
    I: IntoIterator,
    F: Fn(I::Item) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let semaphore = Arc::new(Semaphore::new(max_in_flight.max(1)));

    let futures = inputs.into_iter().map(|input| {
        let semaphore = Arc::clone(&semaphore);
        let fut = task(input);
        async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .map_err(|e| eyre!("Fan-out semaphore closed: {}", e))?;
            fut.await
        }
    });

    try_join_all(futures).await
}
