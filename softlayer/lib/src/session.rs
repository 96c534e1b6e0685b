//! The session port every service call goes through.

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;

use crate::error::Error;
use crate::options::Options;

/// Carries a call to the SoftLayer API and returns its raw result.
///
/// Implementations own everything below the bindings: the wire format,
/// endpoint and credentials, retries, and mapping failures onto [`Error`]
/// (API rejections as [`Error::Api`], everything else as
/// [`Error::Transport`]).
///
/// ## Native Async Traits
///
/// This trait uses native async functions in traits. Implementations may
/// write `async fn do_request(...)` directly.
///
/// ## Examples
///
/// ```
/// use serde_json::{json, Value};
/// use softlayer_lib::{Error, Options, Session};
///
/// struct Canned;
///
/// impl Session for Canned {
///     async fn do_request(
///         &self,
///         _service: &str,
///         method: &str,
///         _params: &[Value],
///         _options: &Options,
///     ) -> Result<Value, Error> {
///         Ok(json!({ "method": method }))
///     }
/// }
/// ```
pub trait Session: Send + Sync {
    /// Invokes `method` on the remote `service`.
    ///
    /// ## Arguments
    ///
    /// * `service` - Remote service name, e.g. `SoftLayer_Virtual_Guest`.
    /// * `method` - Remote method name, e.g. `getObject`.
    /// * `params` - Positional parameters; absent optional parameters are `null`.
    /// * `options` - The caller's query options, untouched.
    ///
    /// ## Errors
    ///
    /// Returns [`Error::Api`] when the API rejects the call and
    /// [`Error::Transport`] when it cannot be reached.
    fn do_request(
        &self,
        service: &str,
        method: &str,
        params: &[Value],
        options: &Options,
    ) -> impl Future<Output = Result<Value, Error>> + Send;
}

impl<S: Session + ?Sized> Session for &S {
    fn do_request(
        &self,
        service: &str,
        method: &str,
        params: &[Value],
        options: &Options,
    ) -> impl Future<Output = Result<Value, Error>> + Send {
        (**self).do_request(service, method, params, options)
    }
}

impl<S: Session + ?Sized> Session for Arc<S> {
    fn do_request(
        &self,
        service: &str,
        method: &str,
        params: &[Value],
        options: &Options,
    ) -> impl Future<Output = Result<Value, Error>> + Send {
        (**self).do_request(service, method, params, options)
    }
}
