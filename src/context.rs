use std::future::Future;
use std::pin::Pin;
use std::task::Poll;
use std::time::Duration;

use tokio::time::{Instant, Sleep};
use tokio_util::sync::{CancellationToken, WaitForCancellationFutureOwned};

use crate::error::ContextError;

/// Carries a cancellation signal and an optional deadline into a lookup.
///
/// Clones share the same signal, so cancelling a clone cancels the original.
/// Use [`Context::child`] for a context that can be cancelled on its own.
#[derive(Clone, Debug, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never cancelled and has no deadline
    pub fn background() -> Self {
        Self::default()
    }

    /// A new context that is cancelled whenever this one is, but whose own cancellation
    /// does not reach back to the parent
    pub fn child(&self) -> Self {
        Context {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// A child context that expires at `deadline`, or at the parent's deadline if that is earlier
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        };

        Context {
            token: self.token.child_token(),
            deadline: Some(deadline),
        }
    }

    /// A child context that expires after `timeout`.
    ///
    /// A timeout too large to represent as an instant adds no deadline of its own.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self.child(),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Why this context is done, or `None` if it is still live.
    ///
    /// Cancellation is reported over an expired deadline when both hold.
    pub fn err(&self) -> Option<ContextError> {
        if self.token.is_cancelled() {
            Some(ContextError::Canceled)
        } else if self.deadline.is_some_and(|d| d <= Instant::now()) {
            Some(ContextError::DeadlineExceeded)
        } else {
            None
        }
    }

    pub fn is_done(&self) -> bool {
        self.err().is_some()
    }

    /// A future that resolves with the cause once this context is cancelled or its deadline passes.
    ///
    /// Must be called from within a tokio runtime when the context has a deadline.
    pub fn done(&self) -> Done {
        Done {
            cancelled: self.token.clone().cancelled_owned(),
            deadline: self.deadline.map(tokio::time::sleep_until),
        }
    }
}

#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project::pin_project]
pub struct Done {
    #[pin]
    cancelled: WaitForCancellationFutureOwned,
    #[pin]
    deadline: Option<Sleep>,
}

impl Future for Done {
    type Output = ContextError;

    fn poll(self: Pin<&mut Self>, cx: &mut std::task::Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        if this.cancelled.poll(cx).is_ready() {
            return Poll::Ready(ContextError::Canceled);
        }

        if let Some(deadline) = this.deadline.as_pin_mut() {
            if deadline.poll(cx).is_ready() {
                return Poll::Ready(ContextError::DeadlineExceeded);
            }
        }

        Poll::Pending
    }
}
