//! Standard behavior implementations.

mod cancellation;
mod logging;
#[cfg(feature = "timeout")]
mod timeout;

pub use cancellation::CancellationBehavior;
pub use logging::LoggingBehavior;
#[cfg(feature = "timeout")]
pub use timeout::TimeoutBehavior;
