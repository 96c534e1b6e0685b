//! The shape shared by every service binding.
//!
//! A binding is a struct holding a session and the [`Options`] for its next
//! calls. Each of its methods is one remote call: the arguments are encoded
//! as a positional parameter list, handed to [`Session::do_request`], and the
//! result is decoded into the method's return type.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use softlayer_datatypes::Void;
use tracing::{Span, debug, instrument, warn};

use crate::error::Error;
use crate::options::Options;
use crate::session::Session;

/// A binding for one remote SoftLayer service.
pub trait Service {
    /// Remote service name, e.g. `SoftLayer_Virtual_Guest`.
    const NAME: &'static str;

    /// The session calls are made through.
    type Session: Session;

    /// Returns the session.
    fn session(&self) -> &Self::Session;

    /// Returns the options sent with every call.
    fn options(&self) -> &Options;
}

/// Declares a service binding struct, its option setters, its [`Service`]
/// impl, and a `get_*_service` constructor.
macro_rules! service {
    (
        $(#[$meta:meta])*
        $name:ident => $remote:literal, $ctor:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<S> {
            session: S,
            options: $crate::options::Options,
        }

        impl<S: $crate::session::Session> $name<S> {
            /// Creates the service with empty options.
            pub fn new(session: S) -> Self {
                Self {
                    session,
                    options: $crate::options::Options::default(),
                }
            }

            /// Returns the session.
            pub fn session(&self) -> &S {
                &self.session
            }

            /// Returns the options sent with every call.
            pub fn options(&self) -> &$crate::options::Options {
                &self.options
            }

            /// Replaces all options at once.
            pub fn with_options(mut self, options: $crate::options::Options) -> Self {
                self.options = options;
                self
            }

            /// Consumes the service and returns its session.
            pub fn into_session(self) -> S {
                self.session
            }

            /// Sets the identifier of the object to call.
            pub fn id(mut self, id: i64) -> Self {
                self.options = self.options.id(id);
                self
            }

            /// Sets the object mask, wrapping lists as `mask[...]`.
            pub fn mask(mut self, mask: impl Into<String>) -> Self {
                self.options = self.options.mask(mask);
                self
            }

            /// Sets the object filter.
            pub fn filter(mut self, filter: impl Into<String>) -> Self {
                self.options = self.options.filter(filter);
                self
            }

            /// Sets the result limit.
            pub fn limit(mut self, limit: u32) -> Self {
                self.options = self.options.limit(limit);
                self
            }

            /// Sets the result offset.
            pub fn offset(mut self, offset: u32) -> Self {
                self.options = self.options.offset(offset);
                self
            }
        }

        impl<S: $crate::session::Session> $crate::service::Service for $name<S> {
            const NAME: &'static str = $remote;
            type Session = S;

            fn session(&self) -> &S {
                &self.session
            }

            fn options(&self) -> &$crate::options::Options {
                &self.options
            }
        }

        #[doc = concat!("Returns a [`", stringify!($name), "`] bound to `session`.")]
        pub fn $ctor<S: $crate::session::Session>(session: S) -> $name<S> {
            $name::new(session)
        }
    };
}

pub(crate) use service;

/// Calls `method` on the service and decodes the result.
///
/// `params` is a tuple of the positional parameters (`()` when there are
/// none); each element becomes one entry of the parameter list.
#[instrument(
    name = "softlayer_call",
    skip_all,
    fields(
        softlayer.service = S::NAME,
        softlayer.method = method,
        softlayer.params = tracing::field::Empty,
        softlayer.id = tracing::field::Empty,
    )
)]
pub(crate) async fn call<S, P, T>(service: &S, method: &'static str, params: P) -> Result<T, Error>
where
    S: Service,
    P: Serialize,
    T: DeserializeOwned,
{
    let params = encode_params(S::NAME, method, &params)?;
    let options = service.options();

    let span = Span::current();
    span.record("softlayer.params", params.len());
    if let Some(id) = options.id {
        span.record("softlayer.id", id);
    }

    let value = service
        .session()
        .do_request(S::NAME, method, &params, options)
        .await
        .inspect_err(|e| debug!(error = %e, "session returned an error"))?;

    match serde_json::from_value(value) {
        Ok(decoded) => {
            debug!("call succeeded");
            Ok(decoded)
        }
        Err(source) => {
            warn!(error = %source, "response did not match the expected type");
            Err(Error::Decode {
                service: S::NAME,
                method,
                source,
            })
        }
    }
}

/// Calls a method that has no result.
pub(crate) async fn call_void<S, P>(service: &S, method: &'static str, params: P) -> Result<(), Error>
where
    S: Service,
    P: Serialize,
{
    call::<S, P, Void>(service, method, params).await.map(|Void| ())
}

fn encode_params<P: Serialize>(
    service: &'static str,
    method: &'static str,
    params: &P,
) -> Result<Vec<Value>, Error> {
    let encoded = serde_json::to_value(params).map_err(|source| Error::Encode {
        service,
        method,
        source,
    })?;

    Ok(match encoded {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        other => vec![other],
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;
    use crate::services::account::Account;
    use crate::testing::MockSession;

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn calls_are_traced_with_service_and_method() {
        let session = MockSession::new().with_response(
            "SoftLayer_Account",
            "getObject",
            json!({ "id": 278444 }),
        );

        let account = Account::new(&session).id(278444).get_object().await.unwrap();
        assert_eq!(account.id, Some(278444));

        assert!(logs_contain("softlayer_call"));
        assert!(logs_contain("SoftLayer_Account"));
        assert!(logs_contain("getObject"));
        assert!(logs_contain("call succeeded"));
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn decode_failures_are_logged_as_warnings() {
        let session = MockSession::new().with_response(
            "SoftLayer_Account",
            "getObject",
            json!("not an account"),
        );

        let err = Account::new(&session).get_object().await.unwrap_err();
        assert!(err.is_decode());
        assert!(logs_contain("response did not match the expected type"));
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn session_errors_are_logged_at_debug() {
        let session = MockSession::new().with_transport_error(
            "SoftLayer_Account",
            "getBalance",
            "connection refused",
        );

        let err = Account::new(&session).get_balance().await.unwrap_err();
        assert!(err.is_transport());
        assert!(logs_contain("session returned an error"));
        assert!(!logs_contain("did not match"));
    }

    #[test]
    fn unit_encodes_to_no_params() {
        assert!(encode_params("S", "m", &()).unwrap().is_empty());
    }

    #[test]
    fn tuple_elements_become_positional_params() {
        let params = encode_params("S", "m", &("www", None::<i64>, 3600)).unwrap();
        assert_eq!(params, vec![json!("www"), Value::Null, json!(3600)]);
    }

    #[test]
    fn single_list_param_stays_nested() {
        let params = encode_params("S", "m", &(["a", "b"],)).unwrap();
        assert_eq!(params, vec![json!(["a", "b"])]);
    }

    #[test]
    fn unencodable_param_reports_encode_error() {
        let mut bad = BTreeMap::new();
        bad.insert(vec![1u8], "non-string keys cannot be JSON object keys");

        let err = encode_params("SoftLayer_Product_Order", "verifyOrder", &(bad,)).unwrap_err();
        assert!(matches!(
            err,
            Error::Encode {
                service: "SoftLayer_Product_Order",
                method: "verifyOrder",
                ..
            }
        ));
    }
}
