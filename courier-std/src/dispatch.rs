//! Request dispatcher: one handler, wrapped by its behavior chain.

use courier_core::{CancellationToken, DispatchError, HandlerProvider, Next, Request};
use std::{any::type_name, sync::Arc};

/// Routes each request to its single handler through the ordered behavior
/// chain bound to the request's type.
///
/// The dispatcher holds no bindings and no per-call state of its own: every
/// `send` resolves the handler and behaviors from the provider, composes
/// them into one continuation, and runs it on the caller's task. Failures
/// raised inside the chain surface unchanged.
///
/// Cloning is cheap and shares the provider.
pub struct RequestDispatcher<P> {
    provider: Arc<P>,
}

impl<P> RequestDispatcher<P> {
    /// Create a dispatcher over the given provider.
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Get a reference to the provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P> Clone for RequestDispatcher<P> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
        }
    }
}

impl<P: HandlerProvider> RequestDispatcher<P> {
    /// Send a request through its behavior chain to its handler.
    ///
    /// Equivalent to [`send_with_token`] with a token that never fires.
    ///
    /// [`send_with_token`]: RequestDispatcher::send_with_token
    pub async fn send<R: Request>(&self, request: R) -> Result<R::Response, DispatchError> {
        self.send_with_token(request, CancellationToken::new()).await
    }

    /// Send a request, threading the given cancellation token through every
    /// behavior and the handler.
    ///
    /// The token is handed through unchanged; the dispatcher neither
    /// observes nor overrides it. Exactly one handler invocation occurs per
    /// call unless a behavior short-circuits.
    pub async fn send_with_token<R: Request>(
        &self,
        request: R,
        cancel: CancellationToken,
    ) -> Result<R::Response, DispatchError> {
        // Resolve the handler first: a missing or ambiguous binding must
        // fail before any behavior runs.
        let handler = self.provider.request_handler::<R>()?;
        let behaviors = self.provider.behaviors::<R>();

        tracing::trace!(
            request = type_name::<R>(),
            behaviors = behaviors.len(),
            "dispatching request"
        );

        let next = Next::new(&request, &behaviors, &*handler, &cancel);
        next.run().await.map_err(|error| {
            tracing::debug!(request = type_name::<R>(), %error, "request pipeline failed");
            DispatchError::Failed(error)
        })
    }
}
