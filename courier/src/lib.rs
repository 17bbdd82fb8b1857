//! # courier - In-Process Dispatch Engine
//!
//! `courier` routes typed requests to exactly one handler through an ordered
//! chain of middleware behaviors, and fans typed notifications out to every
//! subscribed handler, sequentially and fail-fast. Dispatch is strictly by
//! concrete type; bindings are declared once at startup and frozen.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use courier::{Bus, RegistryBuilder, Request, RequestHandler};
//!
//! struct Ping;
//!
//! impl Request for Ping {
//!     type Response = String;
//! }
//!
//! struct PingHandler;
//!
//! impl RequestHandler<Ping> for PingHandler {
//!     async fn handle(&self, _: &Ping, _: &CancellationToken) -> Result<String, BoxError> {
//!         Ok("pong".into())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_handler::<Ping, _>(PingHandler)
//!     .build();
//! let bus = Bus::new(Arc::new(registry));
//!
//! let pong = bus.send(Ping).await?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use courier_core::{
    // Errors
    BehaviorError,
    BoxError,
    // Cancellation
    CancellationToken,
    DispatchError,
    // Object-safe twins
    DynNotificationHandler,
    DynPipelineBehavior,
    DynRequestHandler,
    // Registry contract
    HandlerProvider,
    // Continuation
    Next,
    Notification,
    NotificationHandler,
    // Behavior
    PipelineBehavior,
    PublishError,
    // Request / handler
    Request,
    RequestHandler,
};

pub use courier_std::{
    bus::Bus,
    dispatch::RequestDispatcher,
    publish::NotificationPublisher,
    registry::{Registry, RegistryBuilder},
};

/// Standard behavior implementations.
pub mod behaviors {
    pub use courier_std::behaviors::{CancellationBehavior, LoggingBehavior};

    #[cfg(feature = "timeout")]
    pub use courier_std::behaviors::TimeoutBehavior;
}

/// Testing utilities.
pub mod testing {
    pub use courier_std::testing::{
        CountingRequestHandler, FailingNotificationHandler, RecordingBehavior,
        RecordingNotificationHandler, ShortCircuitBehavior,
    };
}

/// Prelude module - common imports for Courier.
///
/// # Usage
///
/// ```rust,ignore
/// use courier::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        // Entry points
        Bus,
        CancellationToken,
        DispatchError,
        // Registry
        HandlerProvider,
        Next,
        Notification,
        NotificationHandler,
        NotificationPublisher,
        // Core traits
        PipelineBehavior,
        PublishError,
        Registry,
        RegistryBuilder,
        Request,
        RequestDispatcher,
        RequestHandler,
    };
}
