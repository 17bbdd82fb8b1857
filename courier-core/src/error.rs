//! Error types for Courier.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`DispatchError`] - Errors surfaced by `send`
//! - [`PublishError`] - The first failure surfaced by `publish`
//! - [`BehaviorError`] - Failure kinds produced by standard behaviors

use std::time::Duration;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while dispatching a request.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No handler is registered for the request type.
    #[error("no handler registered for request type `{0}`")]
    HandlerNotFound(&'static str),

    /// More than one handler is registered for the request type.
    ///
    /// Exactly one handler must be bound per request type; the dispatcher
    /// never silently picks one of several.
    #[error("{count} handlers registered for request type `{request}`, expected exactly one")]
    AmbiguousHandler {
        /// The request type with conflicting bindings.
        request: &'static str,
        /// How many handlers were found.
        count: usize,
    },

    /// A behavior or the handler failed while the chain was running.
    ///
    /// The inner error is exactly what the behavior or handler returned;
    /// the dispatcher adds no wrapping, retry, or suppression.
    #[error(transparent)]
    Failed(BoxError),
}

/// The failure surfaced by `publish` when a notification handler errors.
///
/// Publishing is fail-fast: the first handler error aborts the remaining
/// handlers and propagates here unchanged. There is no aggregation of
/// multiple failures.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct PublishError(#[from] BoxError);

impl PublishError {
    /// Unwrap the underlying handler error.
    pub fn into_inner(self) -> BoxError {
        self.0
    }
}

/// Failure kinds produced by standard behaviors.
///
/// The dispatcher itself never constructs these; timeout and cancellation
/// policy belongs to behaviors.
#[derive(Error, Debug)]
pub enum BehaviorError {
    /// The rest of the chain did not complete in time.
    #[error("pipeline timed out after {0:?}")]
    Timeout(Duration),

    /// The cancellation token fired before the chain completed.
    #[error("pipeline was cancelled")]
    Cancelled,

    /// A custom behavior error.
    #[error(transparent)]
    Custom(BoxError),
}

// Convenience conversions
impl From<BoxError> for DispatchError {
    fn from(err: BoxError) -> Self {
        DispatchError::Failed(err)
    }
}

impl From<BoxError> for BehaviorError {
    fn from(err: BoxError) -> Self {
        BehaviorError::Custom(err)
    }
}
