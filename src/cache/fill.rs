use std::future::Future;
use std::pin::Pin;
use std::task::ready;
use std::task::Context;
use std::task::Poll;
use std::time::Duration;

use tokio::time::Sleep;

use crate::context::Done;
use crate::error::ContextError;

/// Races the simulated backing lookup against the caller's done signal.
///
/// The done signal is polled first, so a context that is already done wins even if the delay has
/// also elapsed. Resolves to `Ok(())` when the lookup "completes".
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project::pin_project]
pub struct Fill {
    #[pin]
    delay: Sleep,
    #[pin]
    done: Done,
}

impl Fill {
    pub(crate) fn new(latency: Duration, done: Done) -> Self {
        Fill {
            delay: tokio::time::sleep(latency),
            done,
        }
    }
}

impl Future for Fill {
    type Output = Result<(), ContextError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        if let Poll::Ready(cause) = this.done.poll(cx) {
            return Poll::Ready(Err(cause));
        }

        ready!(this.delay.poll(cx));

        Poll::Ready(Ok(()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Context as LookupContext;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_delay_completes() {
        let start = Instant::now();
        let ctx = LookupContext::background();

        assert_eq!(Fill::new(Duration::from_millis(500), ctx.done()).await, Ok(()));
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_done_wins_when_both_ready() {
        let ctx = LookupContext::background();
        ctx.cancel();

        assert_eq!(
            Fill::new(Duration::ZERO, ctx.done()).await,
            Err(ContextError::Canceled)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_cuts_fill_short() {
        let start = Instant::now();
        let ctx = LookupContext::background().with_timeout(Duration::from_millis(100));

        assert_eq!(
            Fill::new(Duration::from_millis(500), ctx.done()).await,
            Err(ContextError::DeadlineExceeded)
        );
        assert!(start.elapsed() < Duration::from_millis(500));
    }
}
