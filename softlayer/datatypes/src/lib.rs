//! Data types exchanged with the SoftLayer API.
//!
//! Every struct mirrors one `SoftLayer_*` data type. All fields are optional
//! because the API only returns what the object mask asks for, and templates
//! sent to `createObject`/`editObject` should carry only the fields being set.
//! Collections decode to an empty `Vec` when absent or `null` and are skipped
//! when empty.
//!
//! ## Modules
//!
//! - [`account`] - accounts, contacts, notes, addresses, billing, and tags
//! - [`dns`] - domains, resource records, and secondary zones
//! - [`metric`] - metric tracking objects and bandwidth usage
//! - [`network`] - locations, VLANs, subnets, hardware, security, and provisioning
//! - [`product`] - packages, items, prices, promotions, and order containers
//! - [`virtual_guest`] - guests, image templates, hosts, and placement groups
//! - [`scalar`] - [`Time`], [`Float64`], [`Bytes`], and [`Void`]
//!
//! ## Examples
//!
//! ```
//! use softlayer_datatypes::{DnsDomainResourceRecord, VirtualGuest};
//!
//! let guest: VirtualGuest = serde_json::from_str(r#"{"id": 1, "hostname": "web01"}"#).unwrap();
//! assert_eq!(guest.hostname.as_deref(), Some("web01"));
//! assert!(guest.block_devices.is_empty());
//!
//! let record = DnsDomainResourceRecord {
//!     host: Some("www".into()),
//!     record_type: Some("a".into()),
//!     ..Default::default()
//! };
//! assert_eq!(
//!     serde_json::to_string(&record).unwrap(),
//!     r#"{"host":"www","type":"a"}"#
//! );
//! ```

pub mod account;
pub mod dns;
pub mod metric;
pub mod network;
pub mod product;
pub mod scalar;
pub mod virtual_guest;

pub use account::*;
pub use dns::*;
pub use metric::*;
pub use network::*;
pub use product::*;
pub use scalar::{Bytes, Float64, Time, Void};
pub use virtual_guest::*;
