//! A recording [`Session`] for tests.
//!
//! [`MockSession`] answers calls from canned replies keyed by service and
//! method name, and records every call it receives so tests can assert on
//! the parameters and options a binding sent.
//!
//! ## Examples
//!
//! ```
//! use serde_json::json;
//! use softlayer_lib::services::dns::DnsDomain;
//! use softlayer_lib::testing::MockSession;
//!
//! # tokio_test_block(async {
//! let session = MockSession::new()
//!     .with_response("SoftLayer_Dns_Domain", "getZoneFileContents", json!("$ORIGIN example.com."));
//!
//! let zone = DnsDomain::new(&session).id(42).get_zone_file_contents().await.unwrap();
//! assert_eq!(zone, "$ORIGIN example.com.");
//! assert_eq!(session.last_call().unwrap().options.id, Some(42));
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use tracing::trace;

use crate::error::{Error, SoftLayerError};
use crate::options::Options;
use crate::session::Session;

/// One call received by a [`MockSession`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Remote service name.
    pub service: String,
    /// Remote method name.
    pub method: String,
    /// Positional parameters as sent.
    pub params: Vec<Value>,
    /// Options as sent.
    pub options: Options,
}

#[derive(Debug, Clone)]
enum Reply {
    Value(Value),
    Api(SoftLayerError),
    Transport(String),
}

/// A [`Session`] that replays canned replies and records calls.
///
/// Calls without a registered reply return `null`, which decodes into
/// `()`/`Option` results and fails to decode into anything else.
#[derive(Debug, Default)]
pub struct MockSession {
    replies: HashMap<(String, String), Reply>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockSession {
    /// Creates a session with no replies registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `service.method` with `value`.
    pub fn with_response(mut self, service: &str, method: &str, value: Value) -> Self {
        self.replies
            .insert((service.to_owned(), method.to_owned()), Reply::Value(value));
        self
    }

    /// Fails `service.method` with an API error.
    pub fn with_api_error(mut self, service: &str, method: &str, error: SoftLayerError) -> Self {
        self.replies
            .insert((service.to_owned(), method.to_owned()), Reply::Api(error));
        self
    }

    /// Fails `service.method` with a transport error carrying `message`.
    pub fn with_transport_error(
        mut self,
        service: &str,
        method: &str,
        message: impl Into<String>,
    ) -> Self {
        self.replies.insert(
            (service.to_owned(), method.to_owned()),
            Reply::Transport(message.into()),
        );
        self
    }

    /// Returns every call received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().clone()
    }

    /// Returns the most recent call.
    pub fn last_call(&self) -> Option<RecordedCall> {
        self.lock().last().cloned()
    }

    /// Returns the number of calls received.
    pub fn call_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RecordedCall>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Session for MockSession {
    async fn do_request(
        &self,
        service: &str,
        method: &str,
        params: &[Value],
        options: &Options,
    ) -> Result<Value, Error> {
        trace!(service, method, "mock session received call");
        self.lock().push(RecordedCall {
            service: service.to_owned(),
            method: method.to_owned(),
            params: params.to_vec(),
            options: options.clone(),
        });

        match self.replies.get(&(service.to_owned(), method.to_owned())) {
            Some(Reply::Value(value)) => Ok(value.clone()),
            Some(Reply::Api(error)) => Err(Error::Api(error.clone())),
            Some(Reply::Transport(message)) => Err(Error::transport(message.clone())),
            None => Ok(Value::Null),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn records_calls_in_order() {
        let session = MockSession::new();
        let options = Options::new().id(3);

        session
            .do_request("SoftLayer_Account", "getObject", &[], &Options::new())
            .await
            .unwrap();
        session
            .do_request("SoftLayer_Dns_Domain", "deleteObject", &[json!(1)], &options)
            .await
            .unwrap();

        let calls = session.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].method, "getObject");
        assert_eq!(calls[1].params, vec![json!(1)]);
        assert_eq!(calls[1].options, options);
        assert_eq!(session.call_count(), 2);
    }

    #[tokio::test]
    async fn replays_registered_replies() {
        let session = MockSession::new()
            .with_response("SoftLayer_Account", "getBalance", json!("12.50"))
            .with_api_error(
                "SoftLayer_Account",
                "getObject",
                SoftLayerError::new("SoftLayer_Exception_NotReady", "later").with_status_code(503),
            )
            .with_transport_error("SoftLayer_Account", "getUsers", "connection reset");

        let balance = session
            .do_request("SoftLayer_Account", "getBalance", &[], &Options::new())
            .await
            .unwrap();
        assert_eq!(balance, json!("12.50"));

        let api = session
            .do_request("SoftLayer_Account", "getObject", &[], &Options::new())
            .await
            .unwrap_err();
        assert_eq!(api.status_code(), Some(503));

        let transport = session
            .do_request("SoftLayer_Account", "getUsers", &[], &Options::new())
            .await
            .unwrap_err();
        assert!(transport.is_transport());

        let unknown = session
            .do_request("SoftLayer_Account", "getTags", &[], &Options::new())
            .await
            .unwrap();
        assert_eq!(unknown, Value::Null);
    }
}
