//! Type-keyed registry for handler and behavior bindings.
//!
//! This module provides a builder pattern for registering bindings and a
//! frozen registry for immutable, thread-safe resolution. All bindings are
//! declared at composition-root time through [`RegistryBuilder`]; `build()`
//! freezes them into a [`Registry`] that is read-only for its whole life,
//! so dispatch needs no locking.
//!
//! Bindings are keyed by the request or notification's `TypeId`. Because a
//! request's response is an associated type, one key covers the
//! (request, response) pair.

use courier_core::{
    DispatchError, DynNotificationHandler, DynPipelineBehavior, DynRequestHandler, HandlerProvider,
    Notification, NotificationHandler, PipelineBehavior, Request, RequestHandler,
};
use std::{
    any::{Any, TypeId, type_name},
    collections::HashMap,
    sync::Arc,
};

/// A type-erased binding slot. Each slot holds the typed `Arc` (or vector of
/// `Arc`s) registered under the same `TypeId` it is keyed by.
type Slot = Box<dyn Any + Send + Sync>;

/// An immutable, thread-safe store of handler and behavior bindings.
///
/// Created by calling [`RegistryBuilder::build`]. The registry is the
/// standard [`HandlerProvider`] implementation; share it via `Arc` across
/// however many dispatchers and tasks need it.
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .register_handler::<Ping, _>(EchoHandler)
///     .register_behavior::<Ping, _>(LoggingBehavior::new())
///     .subscribe::<UserCreated, _>(SendWelcomeEmail)
///     .build();
///
/// let bus = Bus::new(Arc::new(registry));
/// ```
pub struct Registry {
    handlers: HashMap<TypeId, Vec<Slot>>,
    behaviors: HashMap<TypeId, Slot>,
    subscribers: HashMap<TypeId, Slot>,
}

impl Registry {
    /// Whether a handler is bound for the request type `R`.
    pub fn contains_handler<R: Request>(&self) -> bool {
        self.handlers
            .get(&TypeId::of::<R>())
            .is_some_and(|slots| !slots.is_empty())
    }

    /// How many behaviors are bound for the request type `R`.
    pub fn behavior_count<R: Request>(&self) -> usize {
        self.behaviors
            .get(&TypeId::of::<R>())
            .and_then(|slot| slot.downcast_ref::<Vec<Arc<dyn DynPipelineBehavior<R>>>>())
            .map_or(0, Vec::len)
    }

    /// How many handlers are subscribed to the notification type `N`.
    pub fn notification_handler_count<N: Notification>(&self) -> usize {
        self.subscribers
            .get(&TypeId::of::<N>())
            .and_then(|slot| slot.downcast_ref::<Vec<Arc<dyn DynNotificationHandler<N>>>>())
            .map_or(0, Vec::len)
    }

    /// Whether the registry holds no bindings at all.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty() && self.behaviors.is_empty() && self.subscribers.is_empty()
    }
}

impl HandlerProvider for Registry {
    fn request_handler<R: Request>(&self) -> Result<Arc<dyn DynRequestHandler<R>>, DispatchError> {
        match self.handlers.get(&TypeId::of::<R>()).map(Vec::as_slice) {
            None | Some([]) => Err(DispatchError::HandlerNotFound(type_name::<R>())),
            Some([slot]) => Ok(slot
                .downcast_ref::<Arc<dyn DynRequestHandler<R>>>()
                .expect("handler slot keyed by TypeId::of::<R> holds a handler for R")
                .clone()),
            Some(slots) => Err(DispatchError::AmbiguousHandler {
                request: type_name::<R>(),
                count: slots.len(),
            }),
        }
    }

    fn behaviors<R: Request>(&self) -> Vec<Arc<dyn DynPipelineBehavior<R>>> {
        self.behaviors
            .get(&TypeId::of::<R>())
            .and_then(|slot| slot.downcast_ref::<Vec<Arc<dyn DynPipelineBehavior<R>>>>())
            .cloned()
            .unwrap_or_default()
    }

    fn notification_handlers<N: Notification>(&self) -> Vec<Arc<dyn DynNotificationHandler<N>>> {
        self.subscribers
            .get(&TypeId::of::<N>())
            .and_then(|slot| slot.downcast_ref::<Vec<Arc<dyn DynNotificationHandler<N>>>>())
            .cloned()
            .unwrap_or_default()
    }
}

/// Builder for constructing a [`Registry`].
///
/// Registration order is semantically significant: behaviors wrap the
/// handler in the order they were registered (first = outermost), and
/// notification handlers run in the order they were subscribed.
///
/// Duplicate handler registrations for one request type are retained: the
/// registry surfaces them as [`DispatchError::AmbiguousHandler`] at dispatch
/// time rather than silently picking one. `build()` flags them with a
/// warning as well.
pub struct RegistryBuilder {
    handlers: HashMap<TypeId, Vec<Slot>>,
    handler_names: HashMap<TypeId, &'static str>,
    behaviors: HashMap<TypeId, Slot>,
    subscribers: HashMap<TypeId, Slot>,
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            handler_names: HashMap::new(),
            behaviors: HashMap::new(),
            subscribers: HashMap::new(),
        }
    }

    /// Bind the single handler for the request type `R`.
    pub fn register_handler<R, H>(mut self, handler: H) -> Self
    where
        R: Request,
        H: RequestHandler<R>,
    {
        let handler: Arc<dyn DynRequestHandler<R>> = Arc::new(handler);
        self.handlers
            .entry(TypeId::of::<R>())
            .or_default()
            .push(Box::new(handler));
        self.handler_names.insert(TypeId::of::<R>(), type_name::<R>());
        self
    }

    /// Append a behavior to the chain for the request type `R`.
    pub fn register_behavior<R, B>(mut self, behavior: B) -> Self
    where
        R: Request,
        B: PipelineBehavior<R>,
    {
        let behavior: Arc<dyn DynPipelineBehavior<R>> = Arc::new(behavior);
        self.behaviors
            .entry(TypeId::of::<R>())
            .or_insert_with(|| Box::new(Vec::<Arc<dyn DynPipelineBehavior<R>>>::new()))
            .downcast_mut::<Vec<Arc<dyn DynPipelineBehavior<R>>>>()
            .expect("behavior slot keyed by TypeId::of::<R> holds behaviors for R")
            .push(behavior);
        self
    }

    /// Subscribe a handler to the notification type `N`.
    pub fn subscribe<N, H>(mut self, handler: H) -> Self
    where
        N: Notification,
        H: NotificationHandler<N>,
    {
        let handler: Arc<dyn DynNotificationHandler<N>> = Arc::new(handler);
        self.subscribers
            .entry(TypeId::of::<N>())
            .or_insert_with(|| Box::new(Vec::<Arc<dyn DynNotificationHandler<N>>>::new()))
            .downcast_mut::<Vec<Arc<dyn DynNotificationHandler<N>>>>()
            .expect("subscriber slot keyed by TypeId::of::<N> holds handlers for N")
            .push(handler);
        self
    }

    /// Freeze the bindings into an immutable [`Registry`].
    pub fn build(self) -> Registry {
        for (type_id, slots) in &self.handlers {
            if slots.len() > 1 {
                tracing::warn!(
                    request = self.handler_names.get(type_id).copied().unwrap_or("<unknown>"),
                    count = slots.len(),
                    "multiple handlers registered for one request type; dispatch will fail as ambiguous"
                );
            }
        }
        Registry {
            handlers: self.handlers,
            behaviors: self.behaviors,
            subscribers: self.subscribers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::{BoxError, CancellationToken, Next};

    struct Ping;

    impl Request for Ping {
        type Response = &'static str;
    }

    struct OrderCreated;

    impl Notification for OrderCreated {}

    struct Pong;

    impl RequestHandler<Ping> for Pong {
        async fn handle(
            &self,
            _request: &Ping,
            _cancel: &CancellationToken,
        ) -> Result<&'static str, BoxError> {
            Ok("pong")
        }
    }

    struct Noop;

    impl PipelineBehavior<Ping> for Noop {
        async fn handle(
            &self,
            _request: &Ping,
            next: Next<'_, Ping>,
            _cancel: &CancellationToken,
        ) -> Result<&'static str, BoxError> {
            next.run().await
        }
    }

    impl NotificationHandler<OrderCreated> for Noop {
        async fn handle(
            &self,
            _notification: &OrderCreated,
            _cancel: &CancellationToken,
        ) -> Result<(), BoxError> {
            Ok(())
        }
    }

    #[test]
    fn resolves_the_registered_handler() {
        let registry = RegistryBuilder::new().register_handler::<Ping, _>(Pong).build();

        assert!(registry.contains_handler::<Ping>());
        assert!(registry.request_handler::<Ping>().is_ok());
    }

    #[test]
    fn missing_handler_is_not_found() {
        let registry = RegistryBuilder::new().build();

        assert!(registry.is_empty());
        assert!(matches!(
            registry.request_handler::<Ping>(),
            Err(DispatchError::HandlerNotFound(_))
        ));
    }

    #[test]
    fn duplicate_handlers_are_ambiguous() {
        let registry = RegistryBuilder::new()
            .register_handler::<Ping, _>(Pong)
            .register_handler::<Ping, _>(Pong)
            .build();

        assert!(matches!(
            registry.request_handler::<Ping>(),
            Err(DispatchError::AmbiguousHandler { count: 2, .. })
        ));
    }

    #[test]
    fn behaviors_accumulate_in_order() {
        let registry = RegistryBuilder::new()
            .register_behavior::<Ping, _>(Noop)
            .register_behavior::<Ping, _>(Noop)
            .build();

        assert_eq!(registry.behavior_count::<Ping>(), 2);
        assert_eq!(registry.behaviors::<Ping>().len(), 2);
    }

    #[test]
    fn unknown_types_resolve_to_empty_sequences() {
        let registry = RegistryBuilder::new().build();

        assert!(registry.behaviors::<Ping>().is_empty());
        assert!(registry.notification_handlers::<OrderCreated>().is_empty());
    }

    #[test]
    fn subscribers_accumulate() {
        let registry = RegistryBuilder::new()
            .subscribe::<OrderCreated, _>(Noop)
            .subscribe::<OrderCreated, _>(Noop)
            .build();

        assert_eq!(registry.notification_handler_count::<OrderCreated>(), 2);
    }
}
