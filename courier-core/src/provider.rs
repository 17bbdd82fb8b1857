//! Provider trait for handler and behavior resolution.
//!
//! The dispatchers do not own bindings; they consume this lookup contract.
//! A provider maps a request type to its single handler and its ordered
//! behaviors, and a notification type to its ordered handlers. Providers are
//! read-only at dispatch time: the dispatchers never mutate them and never
//! cache results across calls, so re-resolution per call must be cheap.

use crate::{
    behavior::DynPipelineBehavior,
    error::DispatchError,
    handler::DynRequestHandler,
    notification::{DynNotificationHandler, Notification},
    request::Request,
};
use std::sync::Arc;

/// Resolves handler and behavior bindings by concrete type.
///
/// Implementors must be safely usable under concurrent access: bindings are
/// expected to be frozen before the first dispatch, so `&self` lookups need
/// no locking.
pub trait HandlerProvider: Send + Sync {
    /// Resolve the single handler bound to the request type `R`.
    ///
    /// Exactly one binding must exist. Zero bindings is
    /// [`DispatchError::HandlerNotFound`]; more than one is
    /// [`DispatchError::AmbiguousHandler`]; never silently pick one.
    fn request_handler<R: Request>(&self) -> Result<Arc<dyn DynRequestHandler<R>>, DispatchError>;

    /// Resolve the ordered behaviors bound to the request type `R`.
    ///
    /// May be empty. Order is registration order and determines wrapping
    /// order: the first element becomes the outermost behavior.
    fn behaviors<R: Request>(&self) -> Vec<Arc<dyn DynPipelineBehavior<R>>>;

    /// Resolve the ordered handlers subscribed to the notification type `N`.
    ///
    /// May be empty: a notification with no listeners is a no-op, not an
    /// error. Order is registration order.
    fn notification_handlers<N: Notification>(&self) -> Vec<Arc<dyn DynNotificationHandler<N>>>;
}
