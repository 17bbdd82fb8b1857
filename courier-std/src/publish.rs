//! Notification publisher: sequential, in-order, fail-fast fan-out.

use courier_core::{
    CancellationToken, DynNotificationHandler, HandlerProvider, Notification, PublishError,
};
use std::{any::type_name, sync::Arc};

/// Delivers each notification to every handler subscribed to its type.
///
/// Handlers run sequentially in registration order, each awaited to
/// completion before the next starts. This trades parallel throughput for
/// deterministic ordering and simple failure semantics: the first handler
/// error aborts the remaining handlers and surfaces to the caller, with no
/// aggregation of multiple failures.
///
/// A notification type with zero subscribers publishes successfully as a
/// no-op, unlike the request path, where a missing handler is fatal.
///
/// Cloning is cheap and shares the provider.
pub struct NotificationPublisher<P> {
    provider: Arc<P>,
}

impl<P> NotificationPublisher<P> {
    /// Create a publisher over the given provider.
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Get a reference to the provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P> Clone for NotificationPublisher<P> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
        }
    }
}

impl<P: HandlerProvider> NotificationPublisher<P> {
    /// Publish a notification to all subscribed handlers.
    ///
    /// Equivalent to [`publish_with_token`] with a token that never fires.
    ///
    /// [`publish_with_token`]: NotificationPublisher::publish_with_token
    pub async fn publish<N: Notification>(&self, notification: N) -> Result<(), PublishError> {
        self.publish_with_token(notification, CancellationToken::new())
            .await
    }

    /// Publish a notification, threading the given cancellation token
    /// through every handler.
    pub async fn publish_with_token<N: Notification>(
        &self,
        notification: N,
        cancel: CancellationToken,
    ) -> Result<(), PublishError> {
        let handlers = self.provider.notification_handlers::<N>();

        tracing::trace!(
            notification = type_name::<N>(),
            handlers = handlers.len(),
            "publishing notification"
        );

        for (index, handler) in handlers.iter().enumerate() {
            if let Err(error) = handler.handle_dyn(&notification, &cancel).await {
                tracing::debug!(
                    notification = type_name::<N>(),
                    index,
                    %error,
                    "notification handler failed; skipping the rest"
                );
                return Err(PublishError::from(error));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryBuilder;
    use courier_core::{BoxError, NotificationHandler};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Tick;

    impl Notification for Tick {}

    struct Counter(Arc<AtomicUsize>);

    impl NotificationHandler<Tick> for Counter {
        async fn handle(&self, _notification: &Tick, _cancel: &CancellationToken) -> Result<(), BoxError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn zero_subscribers_is_a_successful_no_op() {
        let registry = RegistryBuilder::new().build();
        let publisher = NotificationPublisher::new(Arc::new(registry));

        assert!(publisher.publish(Tick).await.is_ok());
    }

    #[tokio::test]
    async fn every_subscriber_runs() {
        let count = Arc::new(AtomicUsize::new(0));
        let registry = RegistryBuilder::new()
            .subscribe::<Tick, _>(Counter(count.clone()))
            .subscribe::<Tick, _>(Counter(count.clone()))
            .build();
        let publisher = NotificationPublisher::new(Arc::new(registry));

        publisher.publish(Tick).await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
