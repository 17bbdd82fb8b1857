//! Logging behavior for request observation.

use courier_core::{BoxError, CancellationToken, Next, PipelineBehavior, Request};
use std::fmt::Debug;

/// A behavior that logs the request on entry and the outcome on exit.
///
/// # Example
///
/// ```rust,ignore
/// let registry = RegistryBuilder::new()
///     .register_behavior::<CreateUser, _>(LoggingBehavior::named("users"))
///     .register_handler::<CreateUser, _>(CreateUserHandler)
///     .build();
/// ```
pub struct LoggingBehavior {
    name: &'static str,
}

impl LoggingBehavior {
    /// Create a new `LoggingBehavior` with a default name.
    pub fn new() -> Self {
        Self { name: "request" }
    }

    /// Create a new `LoggingBehavior` with a custom name.
    ///
    /// The name is used in log messages to identify the pipeline.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }
}

impl Default for LoggingBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> PipelineBehavior<R> for LoggingBehavior
where
    R: Request + Debug,
{
    async fn handle(
        &self,
        request: &R,
        next: Next<'_, R>,
        _cancel: &CancellationToken,
    ) -> Result<R::Response, BoxError> {
        tracing::debug!(name = %self.name, request = ?request, "handling request");
        let result = next.run().await;
        match &result {
            Ok(_) => tracing::debug!(name = %self.name, "request handled"),
            Err(error) => tracing::debug!(name = %self.name, %error, "request failed"),
        }
        result
    }
}
