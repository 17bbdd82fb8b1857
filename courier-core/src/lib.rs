//! # courier-core
//!
//! Core traits for the Courier in-process dispatch engine.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! extensions that don't need the full `courier-std` implementation.
//!
//! # Two Dispatch Surfaces
//!
//! Courier routes two kinds of values, both keyed by their concrete type:
//!
//! ## Requests ([`Request`])
//!
//! A request is one unit of work answered by exactly one
//! [`RequestHandler`]. On its way to the handler it passes through an
//! ordered chain of [`PipelineBehavior`] middleware: the first-registered
//! behavior is the outermost wrapper, running first on entry and last on
//! exit. Each behavior receives a [`Next`] continuation for the rest of the
//! chain and owns the decision to invoke it; short-circuiting is part of
//! the contract, not an error.
//!
//! ## Notifications ([`Notification`])
//!
//! A notification is a fact delivered to zero or more
//! [`NotificationHandler`]s, sequentially, in registration order, failing
//! fast on the first error. Zero subscribers is a successful no-op.
//!
//! # Resolution
//!
//! Dispatchers resolve bindings through the [`HandlerProvider`] contract;
//! the concrete registry lives in `courier-std`. Resolution happens per
//! call and the dispatchers hold no state of their own.
//!
//! # Cancellation
//!
//! A single `CancellationToken` threads unchanged from the top-level call
//! through every behavior into the handler. The engine never observes or
//! overrides it; timeout and cancellation policy belongs to behaviors.
//!
//! # Error Types
//!
//! - [`DispatchError`] - Request-path failures (not found, ambiguous,
//!   transparent handler/behavior failure)
//! - [`PublishError`] - The first notification handler failure
//! - [`BehaviorError`] - Failure kinds produced by standard behaviors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod behavior;
mod error;
mod handler;
mod notification;
mod provider;
mod request;

// Re-exports
pub use behavior::{DynPipelineBehavior, Next, PipelineBehavior};
pub use error::{BehaviorError, BoxError, DispatchError, PublishError};
pub use handler::{DynRequestHandler, RequestHandler};
pub use notification::{DynNotificationHandler, Notification, NotificationHandler};
pub use provider::HandlerProvider;
pub use request::Request;

/// The cancellation signal threaded through every dispatch call.
pub use tokio_util::sync::CancellationToken;
