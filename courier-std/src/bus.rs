//! Unified entry point for sending requests and publishing notifications.

use crate::{dispatch::RequestDispatcher, publish::NotificationPublisher};
use courier_core::{
    CancellationToken, DispatchError, HandlerProvider, Notification, PublishError, Request,
};
use std::sync::Arc;

/// A facade combining the request and notification dispatchers under one
/// capability surface.
///
/// The bus carries no state beyond its two parts and no logic of its own:
/// `send` delegates to the [`RequestDispatcher`] and `publish` to the
/// [`NotificationPublisher`]. It exists so callers depend on one entry point
/// instead of two.
///
/// Cloning is cheap and shares the underlying provider.
pub struct Bus<P> {
    requests: RequestDispatcher<P>,
    notifications: NotificationPublisher<P>,
}

impl<P> Bus<P> {
    /// Create a bus whose two dispatchers share one provider.
    pub fn new(provider: Arc<P>) -> Self {
        Self {
            requests: RequestDispatcher::new(provider.clone()),
            notifications: NotificationPublisher::new(provider),
        }
    }

    /// Assemble a bus from pre-built parts.
    pub fn from_parts(
        requests: RequestDispatcher<P>,
        notifications: NotificationPublisher<P>,
    ) -> Self {
        Self {
            requests,
            notifications,
        }
    }

    /// Get a reference to the request dispatcher.
    pub fn requests(&self) -> &RequestDispatcher<P> {
        &self.requests
    }

    /// Get a reference to the notification publisher.
    pub fn notifications(&self) -> &NotificationPublisher<P> {
        &self.notifications
    }
}

impl<P> Clone for Bus<P> {
    fn clone(&self) -> Self {
        Self {
            requests: self.requests.clone(),
            notifications: self.notifications.clone(),
        }
    }
}

impl<P: HandlerProvider> Bus<P> {
    /// Send a request through its behavior chain to its handler.
    pub async fn send<R: Request>(&self, request: R) -> Result<R::Response, DispatchError> {
        self.requests.send(request).await
    }

    /// Send a request with a cancellation token.
    pub async fn send_with_token<R: Request>(
        &self,
        request: R,
        cancel: CancellationToken,
    ) -> Result<R::Response, DispatchError> {
        self.requests.send_with_token(request, cancel).await
    }

    /// Publish a notification to all subscribed handlers.
    pub async fn publish<N: Notification>(&self, notification: N) -> Result<(), PublishError> {
        self.notifications.publish(notification).await
    }

    /// Publish a notification with a cancellation token.
    pub async fn publish_with_token<N: Notification>(
        &self,
        notification: N,
        cancel: CancellationToken,
    ) -> Result<(), PublishError> {
        self.notifications
            .publish_with_token(notification, cancel)
            .await
    }
}
