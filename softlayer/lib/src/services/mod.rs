//! Service bindings, one struct per remote `SoftLayer_*` service.
//!
//! Every struct is built the same way: `new(session)` (or the matching
//! `get_*_service` function), then the option setters, then one method
//! call. Setters consume and return the service, so a configured handle can
//! be kept and reused, or cloned and reconfigured independently.

pub mod account;
pub mod dns;
pub mod product;
pub mod virtual_guest;
