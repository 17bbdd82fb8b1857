//! Request handler traits.
//!
//! A request handler is the terminal endpoint of the dispatch chain: after
//! every behavior has run its entry logic, the innermost continuation invokes
//! the handler, and its response unwinds back out through the behaviors.
//!
//! Exactly one handler is bound per request type. The dispatcher guarantees
//! exactly one handler invocation per `send` call, unless an outer behavior
//! deliberately short-circuits.

use crate::{error::BoxError, request::Request};
use std::{future::Future, pin::Pin};
use tokio_util::sync::CancellationToken;

/// The single handler for a request type.
///
/// Handlers receive the request by shared reference together with the
/// cancellation token that was passed to the top-level `send` call. The token
/// arrives unchanged; observing it is the handler's choice.
///
/// # Static vs Dynamic Dispatch
///
/// This trait uses native `async fn` for zero-cost static dispatch.
/// For dynamic dispatch (e.g., inside a registry), use [`DynRequestHandler`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `RequestHandler<{R}>`",
    label = "missing `RequestHandler` implementation",
    note = "Request handlers must implement `handle` for the request type `{R}`."
)]
pub trait RequestHandler<R: Request>: Send + Sync + 'static {
    /// Handle the request and produce its response.
    fn handle(
        &self,
        request: &R,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<R::Response, BoxError>> + Send;
}

/// Dynamic object-safe version of [`RequestHandler`].
///
/// Use this trait when you need runtime polymorphism (e.g., in a registry).
pub trait DynRequestHandler<R: Request>: Send + Sync + 'static {
    /// Handle the request (dynamic dispatch version).
    fn handle_dyn<'a>(
        &'a self,
        request: &'a R,
        cancel: &'a CancellationToken,
    ) -> Pin<Box<dyn Future<Output = Result<R::Response, BoxError>> + Send + 'a>>;
}

// Blanket implementation: any RequestHandler implements DynRequestHandler
// automatically.
impl<R: Request, T: RequestHandler<R>> DynRequestHandler<R> for T {
    fn handle_dyn<'a>(
        &'a self,
        request: &'a R,
        cancel: &'a CancellationToken,
    ) -> Pin<Box<dyn Future<Output = Result<R::Response, BoxError>> + Send + 'a>> {
        Box::pin(self.handle(request, cancel))
    }
}

// Allow Box<dyn DynRequestHandler> to be used where RequestHandler is expected.
impl<R: Request> RequestHandler<R> for Box<dyn DynRequestHandler<R>> {
    async fn handle(&self, request: &R, cancel: &CancellationToken) -> Result<R::Response, BoxError> {
        self.handle_dyn(request, cancel).await
    }
}
