//! Testing utilities for Courier.
//!
//! This module provides reusable doubles for testing pipelines without real
//! handlers:
//!
//! - [`RecordingBehavior`]: appends before/after markers to a shared log
//! - [`ShortCircuitBehavior`]: returns a canned response without calling `next`
//! - [`CountingRequestHandler`]: counts invocations, answers with defaults
//! - [`RecordingNotificationHandler`]: records every notification it receives
//! - [`FailingNotificationHandler`]: always fails with a fixed message

use courier_core::{
    BoxError, CancellationToken, Next, Notification, NotificationHandler, PipelineBehavior,
    Request, RequestHandler,
};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Behavior
// ============================================================================

/// A behavior that appends `{label}.before` and `{label}.after` markers to a
/// shared log around the rest of the chain.
///
/// Useful for verifying wrapping order: first-registered behaviors log their
/// `before` marker first and their `after` marker last.
///
/// # Example
///
/// ```rust,ignore
/// let log = Arc::new(Mutex::new(Vec::new()));
/// let registry = RegistryBuilder::new()
///     .register_behavior::<Ping, _>(RecordingBehavior::new("outer", log.clone()))
///     .register_behavior::<Ping, _>(RecordingBehavior::new("inner", log.clone()))
///     .register_handler::<Ping, _>(EchoHandler)
///     .build();
/// ```
pub struct RecordingBehavior {
    label: &'static str,
    log: Arc<Mutex<Vec<String>>>,
}

impl RecordingBehavior {
    /// Create a recording behavior writing to the given shared log.
    pub fn new(label: &'static str, log: Arc<Mutex<Vec<String>>>) -> Self {
        Self { label, log }
    }
}

impl<R: Request> PipelineBehavior<R> for RecordingBehavior {
    async fn handle(
        &self,
        _request: &R,
        next: Next<'_, R>,
        _cancel: &CancellationToken,
    ) -> Result<R::Response, BoxError> {
        self.log.lock().unwrap().push(format!("{}.before", self.label));
        let result = next.run().await;
        self.log.lock().unwrap().push(format!("{}.after", self.label));
        result
    }
}

// ============================================================================
// Short-Circuit Behavior
// ============================================================================

/// A behavior that never invokes its continuation and answers with a canned
/// response instead.
///
/// The handler and every behavior registered after this one never run.
pub struct ShortCircuitBehavior<T> {
    response: T,
}

impl<T> ShortCircuitBehavior<T> {
    /// Create a short-circuiting behavior answering with `response`.
    pub fn new(response: T) -> Self {
        Self { response }
    }
}

impl<R: Request> PipelineBehavior<R> for ShortCircuitBehavior<R::Response>
where
    R::Response: Clone,
{
    async fn handle(
        &self,
        _request: &R,
        _next: Next<'_, R>,
        _cancel: &CancellationToken,
    ) -> Result<R::Response, BoxError> {
        Ok(self.response.clone())
    }
}

// ============================================================================
// Counting Request Handler
// ============================================================================

/// A handler that counts invocations and answers with `Default::default()`.
///
/// Clones share the counter.
///
/// # Example
///
/// ```rust,ignore
/// let handler = CountingRequestHandler::new();
/// let probe = handler.clone();
///
/// // register and dispatch...
///
/// assert_eq!(probe.count(), 1);
/// ```
pub struct CountingRequestHandler {
    count: Arc<AtomicUsize>,
}

impl CountingRequestHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current invocation count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingRequestHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingRequestHandler {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl<R: Request> RequestHandler<R> for CountingRequestHandler
where
    R::Response: Default,
{
    async fn handle(&self, _request: &R, _cancel: &CancellationToken) -> Result<R::Response, BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(R::Response::default())
    }
}

// ============================================================================
// Recording Notification Handler
// ============================================================================

/// A notification handler that records every notification it receives.
///
/// Clones share the recorded list.
pub struct RecordingNotificationHandler<N> {
    received: Arc<Mutex<Vec<N>>>,
}

impl<N> RecordingNotificationHandler<N> {
    /// Create a new recording handler.
    pub fn new() -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of recorded notifications.
    pub fn count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

impl<N: Clone> RecordingNotificationHandler<N> {
    /// Get a clone of the recorded notifications.
    pub fn received(&self) -> Vec<N> {
        self.received.lock().unwrap().clone()
    }
}

impl<N> Default for RecordingNotificationHandler<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Clone for RecordingNotificationHandler<N> {
    fn clone(&self) -> Self {
        Self {
            received: self.received.clone(),
        }
    }
}

impl<N: Notification + Clone> NotificationHandler<N> for RecordingNotificationHandler<N> {
    async fn handle(&self, notification: &N, _cancel: &CancellationToken) -> Result<(), BoxError> {
        self.received.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

// ============================================================================
// Failing Notification Handler
// ============================================================================

/// A notification handler that always fails with a fixed message.
///
/// Useful for verifying fail-fast delivery: handlers subscribed after this
/// one must never run.
pub struct FailingNotificationHandler {
    message: &'static str,
}

impl FailingNotificationHandler {
    /// Create a handler failing with the given message.
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl<N: Notification> NotificationHandler<N> for FailingNotificationHandler {
    async fn handle(&self, _notification: &N, _cancel: &CancellationToken) -> Result<(), BoxError> {
        Err(self.message.into())
    }
}
