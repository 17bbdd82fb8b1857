//! Request trait for dispatchable units of work.

/// A unit of work that is answered by exactly one handler.
///
/// The concrete type of a request is its dispatch key: the dispatcher uses it
/// to locate the single registered handler and the ordered behaviors bound to
/// it. The associated [`Response`] pins the response type statically, so one
/// key covers the (request, response) pair.
///
/// Requests must be `Send + Sync + 'static` to be safe for async use.
///
/// # Example
///
/// ```rust,ignore
/// struct Ping { message: String }
///
/// impl Request for Ping {
///     type Response = Pong;
/// }
/// ```
///
/// [`Response`]: Request::Response
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Request",
    label = "must declare a `Response` type and be `Send + Sync + 'static`",
    note = "Implement `Request` for `{Self}` to make it dispatchable."
)]
pub trait Request: Send + Sync + 'static {
    /// The value produced by handling this request.
    type Response: Send + Sync + 'static;
}
