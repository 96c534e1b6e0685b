//! Error types for the SoftLayer bindings.
//!
//! - [`Error`] - returned by every service method
//! - [`SoftLayerError`] - the API's own rejection of a call, carried by [`Error::Api`]
//!
//! Sessions produce [`Error::Api`] and [`Error::Transport`]. The bindings
//! only add [`Error::Encode`] and [`Error::Decode`], because typed
//! (de)serialization happens on this side of the session boundary.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by SoftLayer service methods.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// The API rejected the call.
    #[error(transparent)]
    Api(#[from] SoftLayerError),

    /// The session failed to reach the API or read its reply.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A parameter could not be encoded as JSON.
    #[error("failed to encode parameters for {service}::{method}: {source}")]
    Encode {
        /// Remote service name, e.g. `SoftLayer_Dns_Domain`.
        service: &'static str,
        /// Remote method name, e.g. `createARecord`.
        method: &'static str,
        /// The serializer error.
        #[source]
        source: serde_json::Error,
    },

    /// The response did not match the method's result type.
    #[error("failed to decode response of {service}::{method}: {source}")]
    Decode {
        /// Remote service name, e.g. `SoftLayer_Dns_Domain`.
        service: &'static str,
        /// Remote method name, e.g. `getObject`.
        method: &'static str,
        /// The deserializer error.
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Wraps a session-level failure.
    ///
    /// ## Examples
    ///
    /// ```
    /// use softlayer_lib::Error;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "read timed out");
    /// let err = Error::transport(io);
    /// assert_eq!(err.to_string(), "transport error: read timed out");
    /// ```
    pub fn transport(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Transport(source.into())
    }

    /// Returns the API error, if the API rejected the call.
    pub fn api(&self) -> Option<&SoftLayerError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the HTTP status of an API error.
    pub fn status_code(&self) -> Option<u16> {
        self.api().and_then(SoftLayerError::status_code)
    }

    /// Returns `true` if the response could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Returns `true` if the session failed before the API answered.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// An error reported by the SoftLayer API.
///
/// Deserializes from the API's error document, `{"code": ..., "error": ...}`.
/// The HTTP status is not part of that document; sessions attach it with
/// [`SoftLayerError::with_status_code`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftLayerError {
    /// HTTP status of the response, when the transport has one.
    #[serde(skip)]
    pub status_code: Option<u16>,

    /// Exception class, e.g. `SoftLayer_Exception_ObjectNotFound`.
    #[serde(rename = "code", skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,

    /// Human readable message.
    #[serde(rename = "error", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SoftLayerError {
    /// Creates an error from an exception class and message.
    pub fn new(exception: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status_code: None,
            exception: Some(exception.into()),
            message: Some(message.into()),
        }
    }

    /// Attaches the HTTP status of the failed response.
    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Returns the HTTP status of the failed response.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Returns `true` for `SoftLayer_Exception_ObjectNotFound`.
    pub fn is_not_found(&self) -> bool {
        self.exception.as_deref() == Some("SoftLayer_Exception_ObjectNotFound")
    }
}

impl fmt::Display for SoftLayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        if let Some(exception) = &self.exception {
            out.push_str(exception);
            out.push_str(": ");
        }
        if let Some(message) = &self.message {
            out.push_str(message);
            out.push(' ');
        }
        if let Some(status) = self.status_code {
            out.push_str(&format!("(HTTP {status})"));
        }
        f.write_str(out.trim().trim_end_matches(':'))
    }
}

impl std::error::Error for SoftLayerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_every_present_part() {
        let err = SoftLayerError::new(
            "SoftLayer_Exception_ObjectNotFound",
            "Unable to find object with id of '42'.",
        )
        .with_status_code(404);

        assert_eq!(
            err.to_string(),
            "SoftLayer_Exception_ObjectNotFound: Unable to find object with id of '42'. (HTTP 404)"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn display_skips_absent_parts() {
        let only_message = SoftLayerError {
            message: Some("Access Denied.".into()),
            ..Default::default()
        };
        assert_eq!(only_message.to_string(), "Access Denied.");

        let only_exception = SoftLayerError {
            exception: Some("SoftLayer_Exception_Public".into()),
            ..Default::default()
        };
        assert_eq!(only_exception.to_string(), "SoftLayer_Exception_Public");

        let only_status = SoftLayerError::default().with_status_code(500);
        assert_eq!(only_status.to_string(), "(HTTP 500)");
    }

    #[test]
    fn decodes_api_error_document() {
        let raw = r#"{"error":"Invalid API token.","code":"SoftLayer_Exception_InvalidLogin"}"#;
        let err: SoftLayerError = serde_json::from_str(raw).unwrap();

        assert_eq!(err.exception.as_deref(), Some("SoftLayer_Exception_InvalidLogin"));
        assert_eq!(err.message.as_deref(), Some("Invalid API token."));
        assert_eq!(err.status_code(), None);
        assert!(!err.is_not_found());
    }

    #[test]
    fn api_error_is_transparent() {
        let err: Error = SoftLayerError::new("SoftLayer_Exception", "boom")
            .with_status_code(500)
            .into();

        assert_eq!(err.to_string(), "SoftLayer_Exception: boom (HTTP 500)");
        assert_eq!(err.status_code(), Some(500));
        assert!(err.api().is_some());
        assert!(!err.is_decode());
        assert!(!err.is_transport());
    }

    #[test]
    fn decode_error_names_service_and_method() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = Error::Decode {
            service: "SoftLayer_Account",
            method: "getObject",
            source,
        };

        assert!(err.is_decode());
        assert!(err.api().is_none());
        assert!(
            err.to_string()
                .starts_with("failed to decode response of SoftLayer_Account::getObject")
        );
    }

    #[test]
    fn transport_keeps_source() {
        let err = Error::transport("connection refused");
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "transport error: connection refused");
        assert!(std::error::Error::source(&err).is_some());
    }
}
