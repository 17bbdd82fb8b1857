//! Pipeline behaviors and the continuation that composes them.
//!
//! A behavior is middleware wrapped around a request's handler invocation.
//! It receives the request, the cancellation token, and a [`Next`]
//! continuation representing everything after itself in the chain. A behavior
//! may run logic before invoking the continuation, after it returns, instead
//! of invoking it (short-circuit), or replace the response on the way out.
//!
//! # Composition order
//!
//! Behaviors compose as an onion: the first-registered behavior is the
//! outermost wrapper. It runs first on the way in and last on the way out;
//! the handler sits at the center. Within one dispatch the order is
//! deterministic and equals registration order.
//!
//! # Use Cases
//!
//! - Observing requests (logging, metrics, tracing)
//! - Validation that rejects requests before the handler runs
//! - Recovery policy: retry, fallback, circuit breaking, timeouts
//!
//! The dispatcher itself recovers nothing; all such policy lives here.

use crate::{
    error::BoxError,
    handler::DynRequestHandler,
    request::Request,
};
use std::{future::Future, pin::Pin, sync::Arc};
use tokio_util::sync::CancellationToken;

/// Middleware wrapping a request's handler invocation.
///
/// # Static vs Dynamic Dispatch
///
/// This trait uses native `async fn` for zero-cost static dispatch.
/// For dynamic dispatch (e.g., inside a registry), use
/// [`DynPipelineBehavior`].
///
/// # Example
///
/// ```rust,ignore
/// struct Validation;
///
/// impl PipelineBehavior<CreateUser> for Validation {
///     async fn handle(
///         &self,
///         request: &CreateUser,
///         next: Next<'_, CreateUser>,
///         _cancel: &CancellationToken,
///     ) -> Result<UserId, BoxError> {
///         if request.name.is_empty() {
///             return Err("name must not be empty".into());
///         }
///         next.run().await
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `PipelineBehavior<{R}>`",
    label = "missing `PipelineBehavior` implementation",
    note = "Behaviors must implement `handle` for the request type `{R}`."
)]
pub trait PipelineBehavior<R: Request>: Send + Sync + 'static {
    /// Wrap the rest of the chain.
    ///
    /// Invoking `next.run()` executes every behavior after this one and
    /// finally the handler. Not invoking it short-circuits the chain; the
    /// value returned here becomes the dispatch's response either way.
    fn handle(
        &self,
        request: &R,
        next: Next<'_, R>,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<R::Response, BoxError>> + Send;
}

/// Dynamic object-safe version of [`PipelineBehavior`].
pub trait DynPipelineBehavior<R: Request>: Send + Sync + 'static {
    /// Wrap the rest of the chain (dynamic dispatch version).
    fn handle_dyn<'a>(
        &'a self,
        request: &'a R,
        next: Next<'a, R>,
        cancel: &'a CancellationToken,
    ) -> Pin<Box<dyn Future<Output = Result<R::Response, BoxError>> + Send + 'a>>;
}

// Blanket implementation: any PipelineBehavior implements DynPipelineBehavior
// automatically.
impl<R: Request, T: PipelineBehavior<R>> DynPipelineBehavior<R> for T {
    fn handle_dyn<'a>(
        &'a self,
        request: &'a R,
        next: Next<'a, R>,
        cancel: &'a CancellationToken,
    ) -> Pin<Box<dyn Future<Output = Result<R::Response, BoxError>> + Send + 'a>> {
        Box::pin(self.handle(request, next, cancel))
    }
}

/// The continuation representing "the remainder of the chain".
///
/// A `Next` is built once per dispatch call and consumed by running it. It
/// borrows the request, the remaining behaviors, the handler, and the
/// cancellation token; none of them outlive the call.
///
/// Running the continuation peels the front behavior off the remaining
/// sequence and hands it a continuation for the tail, so the first-registered
/// behavior ends up outermost. When no behaviors remain, the handler runs.
pub struct Next<'a, R: Request> {
    request: &'a R,
    behaviors: &'a [Arc<dyn DynPipelineBehavior<R>>],
    handler: &'a dyn DynRequestHandler<R>,
    cancel: &'a CancellationToken,
}

impl<'a, R: Request> Next<'a, R> {
    /// Build the outermost continuation for one dispatch call.
    pub fn new(
        request: &'a R,
        behaviors: &'a [Arc<dyn DynPipelineBehavior<R>>],
        handler: &'a dyn DynRequestHandler<R>,
        cancel: &'a CancellationToken,
    ) -> Self {
        Self {
            request,
            behaviors,
            handler,
            cancel,
        }
    }

    /// How many behaviors remain between this point and the handler.
    pub fn remaining(&self) -> usize {
        self.behaviors.len()
    }

    /// Run the rest of the chain and yield the response.
    ///
    /// Consumes the continuation: the rest of the chain runs at most once.
    pub async fn run(self) -> Result<R::Response, BoxError> {
        match self.behaviors.split_first() {
            Some((behavior, rest)) => {
                let next = Next {
                    request: self.request,
                    behaviors: rest,
                    handler: self.handler,
                    cancel: self.cancel,
                };
                behavior.handle_dyn(self.request, next, self.cancel).await
            }
            None => self.handler.handle_dyn(self.request, self.cancel).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::RequestHandler;
    use std::sync::Mutex;

    struct Ask;

    impl Request for Ask {
        type Response = u32;
    }

    struct Answer(u32);

    impl RequestHandler<Ask> for Answer {
        async fn handle(&self, _request: &Ask, _cancel: &CancellationToken) -> Result<u32, BoxError> {
            Ok(self.0)
        }
    }

    struct Marker {
        id: usize,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl PipelineBehavior<Ask> for Marker {
        async fn handle(
            &self,
            _request: &Ask,
            next: Next<'_, Ask>,
            _cancel: &CancellationToken,
        ) -> Result<u32, BoxError> {
            self.log.lock().unwrap().push(format!("{}.before", self.id));
            let response = next.run().await;
            self.log.lock().unwrap().push(format!("{}.after", self.id));
            response
        }
    }

    struct Veto;

    impl PipelineBehavior<Ask> for Veto {
        async fn handle(
            &self,
            _request: &Ask,
            _next: Next<'_, Ask>,
            _cancel: &CancellationToken,
        ) -> Result<u32, BoxError> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn empty_chain_runs_the_handler() {
        let handler = Answer(7);
        let behaviors: Vec<Arc<dyn DynPipelineBehavior<Ask>>> = Vec::new();
        let cancel = CancellationToken::new();
        let request = Ask;

        let next = Next::new(&request, &behaviors, &handler, &cancel);
        assert_eq!(next.remaining(), 0);
        assert_eq!(next.run().await.unwrap(), 7);
    }

    #[tokio::test]
    async fn first_behavior_is_outermost() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let handler = Answer(7);
        let behaviors: Vec<Arc<dyn DynPipelineBehavior<Ask>>> = vec![
            Arc::new(Marker { id: 1, log: log.clone() }),
            Arc::new(Marker { id: 2, log: log.clone() }),
        ];
        let cancel = CancellationToken::new();
        let request = Ask;

        let next = Next::new(&request, &behaviors, &handler, &cancel);
        assert_eq!(next.run().await.unwrap(), 7);

        let entries = log.lock().unwrap();
        assert_eq!(*entries, vec!["1.before", "2.before", "2.after", "1.after"]);
    }

    #[tokio::test]
    async fn short_circuit_skips_inner_behaviors_and_handler() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let handler = Answer(7);
        let behaviors: Vec<Arc<dyn DynPipelineBehavior<Ask>>> = vec![
            Arc::new(Veto),
            Arc::new(Marker { id: 2, log: log.clone() }),
        ];
        let cancel = CancellationToken::new();
        let request = Ask;

        let next = Next::new(&request, &behaviors, &handler, &cancel);
        assert_eq!(next.run().await.unwrap(), 0);
        assert!(log.lock().unwrap().is_empty());
    }
}
