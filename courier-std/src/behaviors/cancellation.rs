//! Cancellation guard behavior.

use courier_core::{BehaviorError, BoxError, CancellationToken, Next, PipelineBehavior, Request};
use futures::future::{Either, select};
use std::pin::pin;

/// A behavior that aborts the rest of the chain when the cancellation token
/// fires.
///
/// The dispatcher itself only threads the token through; it never acts on
/// it. Registering this behavior at the front of a chain turns the token
/// into an enforced short-circuit: a request whose token is cancelled fails
/// with [`BehaviorError::Cancelled`] instead of running to completion.
pub struct CancellationBehavior;

impl<R: Request> PipelineBehavior<R> for CancellationBehavior {
    async fn handle(
        &self,
        _request: &R,
        next: Next<'_, R>,
        cancel: &CancellationToken,
    ) -> Result<R::Response, BoxError> {
        if cancel.is_cancelled() {
            return Err(BehaviorError::Cancelled.into());
        }

        let cancelled = pin!(cancel.cancelled());
        let chain = pin!(next.run());
        match select(cancelled, chain).await {
            Either::Left(_) => Err(BehaviorError::Cancelled.into()),
            Either::Right((result, _)) => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::{DynPipelineBehavior, RequestHandler};
    use std::sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    };

    struct Work;

    impl Request for Work {
        type Response = ();
    }

    struct Tracker(Arc<AtomicBool>);

    impl RequestHandler<Work> for Tracker {
        async fn handle(&self, _request: &Work, _cancel: &CancellationToken) -> Result<(), BoxError> {
            self.0.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn a_cancelled_token_short_circuits_before_the_handler() {
        let ran = Arc::new(AtomicBool::new(false));
        let handler = Tracker(ran.clone());
        let behaviors: Vec<Arc<dyn DynPipelineBehavior<Work>>> = Vec::new();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let request = Work;

        let next = Next::new(&request, &behaviors, &handler, &cancel);
        let result = CancellationBehavior.handle(&request, next, &cancel).await;

        assert!(result.is_err());
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn an_idle_token_lets_the_chain_complete() {
        let ran = Arc::new(AtomicBool::new(false));
        let handler = Tracker(ran.clone());
        let behaviors: Vec<Arc<dyn DynPipelineBehavior<Work>>> = Vec::new();
        let cancel = CancellationToken::new();
        let request = Work;

        let next = Next::new(&request, &behaviors, &handler, &cancel);
        CancellationBehavior
            .handle(&request, next, &cancel)
            .await
            .unwrap();

        assert!(ran.load(Ordering::SeqCst));
    }
}
