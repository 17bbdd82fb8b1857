//! Notification trait and handlers for fan-out delivery.
//!
//! A notification is a fact that occurred. Unlike a request, it has no
//! response and is delivered to zero or more handlers, sequentially, in
//! registration order. A notification type with no handlers is a valid
//! no-op, not an error.

use crate::error::BoxError;
use std::{future::Future, pin::Pin};
use tokio_util::sync::CancellationToken;

/// A marker trait for broadcast facts.
///
/// Notifications must be `Send + Sync + 'static` to be safe for async use.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Notification",
    label = "must be `Send + Sync + 'static`",
    note = "Implement `Notification` for `{Self}` to make it publishable."
)]
pub trait Notification: Send + Sync + 'static {}

/// Handles notifications of one concrete type.
///
/// Many handlers may subscribe to the same notification type; the publisher
/// awaits each in registration order and aborts on the first failure.
///
/// # Static vs Dynamic Dispatch
///
/// This trait uses native `async fn` for zero-cost static dispatch.
/// For dynamic dispatch (e.g., inside a registry), use
/// [`DynNotificationHandler`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `NotificationHandler<{N}>`",
    label = "missing `NotificationHandler` implementation",
    note = "Notification handlers must implement `handle` for the notification type `{N}`."
)]
pub trait NotificationHandler<N: Notification>: Send + Sync + 'static {
    /// Called when a notification of type `N` is published.
    fn handle(
        &self,
        notification: &N,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<(), BoxError>> + Send;
}

/// Dynamic object-safe version of [`NotificationHandler`].
pub trait DynNotificationHandler<N: Notification>: Send + Sync + 'static {
    /// Called when a notification is published (dynamic dispatch version).
    fn handle_dyn<'a>(
        &'a self,
        notification: &'a N,
        cancel: &'a CancellationToken,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>>;
}

// Blanket implementation: any NotificationHandler implements
// DynNotificationHandler automatically.
impl<N: Notification, T: NotificationHandler<N>> DynNotificationHandler<N> for T {
    fn handle_dyn<'a>(
        &'a self,
        notification: &'a N,
        cancel: &'a CancellationToken,
    ) -> Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'a>> {
        Box::pin(self.handle(notification, cancel))
    }
}

// Allow Box<dyn DynNotificationHandler> to be used where a handler is expected.
impl<N: Notification> NotificationHandler<N> for Box<dyn DynNotificationHandler<N>> {
    async fn handle(&self, notification: &N, cancel: &CancellationToken) -> Result<(), BoxError> {
        self.handle_dyn(notification, cancel).await
    }
}
