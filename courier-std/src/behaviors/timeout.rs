//! Timeout behavior for time-limited pipelines.

use courier_core::{BehaviorError, BoxError, CancellationToken, Next, PipelineBehavior, Request};
use std::time::Duration;
use tokio::time::timeout;

/// A behavior that bounds the rest of the chain with a deadline.
///
/// If the inner behaviors and handler do not complete within the duration,
/// the dispatch fails with [`BehaviorError::Timeout`].
pub struct TimeoutBehavior {
    duration: Duration,
}

impl TimeoutBehavior {
    /// Create a new timeout behavior with the given deadline.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl<R: Request> PipelineBehavior<R> for TimeoutBehavior {
    async fn handle(
        &self,
        _request: &R,
        next: Next<'_, R>,
        _cancel: &CancellationToken,
    ) -> Result<R::Response, BoxError> {
        match timeout(self.duration, next.run()).await {
            Ok(result) => result,
            Err(_) => Err(BehaviorError::Timeout(self.duration).into()),
        }
    }
}
