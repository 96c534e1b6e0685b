//! Typed bindings for the SoftLayer API services.
//!
//! Each service struct mirrors one remote `SoftLayer_*` service. It holds a
//! [`Session`] and the [`Options`] (object id, mask, filter, limit, offset)
//! for its calls; each method performs exactly one remote call and decodes
//! the result into a type from [`datatypes`].
//!
//! The library does not speak any wire protocol itself. Calls go through the
//! [`Session`] trait, which the application implements on top of its
//! transport of choice. [`testing::MockSession`] is a recording
//! implementation for tests.
//!
//! ## Modules
//!
//! - [`services`] - the service bindings, grouped as account, dns, product, and virtual_guest
//! - [`options`] - per-call query options
//! - [`session`] - the session port
//! - [`error`] - error types
//! - [`testing`] - the recording test session
//!
//! ## Examples
//!
//! ```
//! use serde_json::json;
//! use softlayer_lib::services::virtual_guest::get_virtual_guest_service;
//! use softlayer_lib::testing::MockSession;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let session = MockSession::new().with_response(
//!     "SoftLayer_Virtual_Guest",
//!     "getObject",
//!     json!({ "id": 1234, "hostname": "web01", "domain": "example.com" }),
//! );
//!
//! let guest = get_virtual_guest_service(&session)
//!     .id(1234)
//!     .mask("id,hostname,domain")
//!     .get_object()
//!     .await
//!     .unwrap();
//!
//! assert_eq!(guest.hostname.as_deref(), Some("web01"));
//!
//! let call = session.last_call().unwrap();
//! assert_eq!(call.options.mask.as_deref(), Some("mask[id,hostname,domain]"));
//! # });
//! ```

pub mod error;
pub mod options;
pub mod service;
pub mod services;
pub mod session;
pub mod testing;

pub use error::{Error, SoftLayerError};
pub use options::Options;
pub use service::Service;
pub use session::Session;
pub use softlayer_datatypes as datatypes;
