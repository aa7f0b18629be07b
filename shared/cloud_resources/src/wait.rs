//! Bounded polling against resource-state transitions
//!
//! The demo replaces fixed wall-clock sleeps with fixed-interval polling
//! under an overall deadline; a condition that never holds surfaces as a
//! timeout instead of a silent race.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::time::{sleep, Instant};

/// Error types for bounded polling
#[derive(Error, Debug)]
pub enum WaitError<E: std::fmt::Debug + std::fmt::Display> {
    /// The condition did not hold before the deadline
    #[error("condition not met within {0:?}")]
    Timeout(Duration),

    /// The check itself failed
    #[error("{0}")]
    Check(#[from] E),
}

/// Polls `check` at `interval` until it reports `true` or `deadline` elapses
///
/// The first check runs immediately. A check error aborts the poll.
///
/// # Errors
///
/// Returns `WaitError::Timeout` when the deadline passes and
/// `WaitError::Check` when a check call fails.
pub async fn poll_until<F, Fut, E>(
    interval: Duration,
    deadline: Duration,
    mut check: F,
) -> Result<(), WaitError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, E>>,
    E: std::fmt::Debug + std::fmt::Display,
{
    let started = Instant::now();

    loop {
        if check().await? {
            return Ok(());
        }

        if started.elapsed() >= deadline {
            return Err(WaitError::Timeout(deadline));
        }

        sleep(interval).await;
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn succeeds_once_condition_holds() {
        let calls = AtomicUsize::new(0);

        let result = poll_until(Duration::from_millis(200), Duration::from_secs(5), || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Ok::<bool, Infallible>(n >= 3) }
        })
        .await;

        assert!(result.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn times_out_when_condition_never_holds() {
        let result = poll_until(
            Duration::from_millis(200),
            Duration::from_secs(1),
            || async { Ok::<bool, Infallible>(false) },
        )
        .await;

        assert!(matches!(result, Err(WaitError::Timeout(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn check_error_aborts_the_poll() {
        #[derive(Debug, thiserror::Error)]
        #[error("boom")]
        struct Boom;

        let result = poll_until(
            Duration::from_millis(200),
            Duration::from_secs(5),
            || async { Err::<bool, Boom>(Boom) },
        )
        .await;

        assert!(matches!(result, Err(WaitError::Check(Boom))));
    }
}
