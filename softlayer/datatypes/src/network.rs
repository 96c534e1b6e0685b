//! Locations, networking, hardware, security, and provisioning types.
//!
//! These are mostly reached as relational properties of accounts and guests.

use serde::{Deserialize, Serialize};

use crate::account::TagReference;
use crate::scalar::{Float64, Time, deserialize_null_default};

// =============================================================================
// Locations
// =============================================================================

/// A SoftLayer location: a datacenter, server room, or point of presence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Short name, e.g. `dal13`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Descriptive name, e.g. `Dallas 13`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,

    /// Identifier of the location's status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,

    /// Regions this location belongs to.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub regions: Vec<LocationRegion>,
}

/// A named geographic region grouping several locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRegion {
    /// Unique key name, e.g. `na-usa-central-1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyname: Option<String>,

    /// Human readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
}

// =============================================================================
// Location groups
// =============================================================================

/// A group of locations that share prices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationGroupPricing {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_group_type_id: Option<i64>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub locations: Vec<Location>,
}

/// A regional group of datacenters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationGroupRegional {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_group_type_id: Option<i64>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub locations: Vec<Location>,
}

// =============================================================================
// Networking
// =============================================================================

/// A customer network container that groups VLANs and subnets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// Customer supplied name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// First address of the network block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_identifier: Option<String>,

    /// Prefix length of the network block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr: Option<i64>,

    /// Customer supplied notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A VLAN trunked to one or more devices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkVlan {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// The 802.1Q VLAN number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_number: Option<i64>,

    /// Customer supplied name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Router-qualified name such as `bcr01a.dal13.1234`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_name: Option<String>,

    /// `PUBLIC` or `PRIVATE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_space: Option<String>,

    /// Router the VLAN is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_router: Option<Box<Hardware>>,

    /// Subnet created with the VLAN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_subnet: Option<Box<NetworkSubnet>>,

    /// All subnets routed on the VLAN.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub subnets: Vec<NetworkSubnet>,

    /// Tags attached to the VLAN.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tag_references: Vec<TagReference>,
}

/// An IP subnet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSubnet {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// First address of the subnet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_identifier: Option<String>,

    /// Prefix length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr: Option<i64>,

    /// Dotted netmask (IPv4 only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netmask: Option<String>,

    /// Gateway address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,

    /// Broadcast address (IPv4 only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast_address: Option<String>,

    /// Subnet type, e.g. `PRIMARY` or `SECONDARY_ON_VLAN`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_type: Option<String>,

    /// IP version, 4 or 6.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    /// Number of addresses in the subnet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_ip_addresses: Option<Float64>,

    /// Number of addresses available for assignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usable_ip_address_count: Option<Float64>,

    /// VLAN the subnet is routed on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_vlan_id: Option<i64>,

    /// Customer supplied note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A network storage volume (block, file, or backup storage).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStorage {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// Volume username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Volume password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Provisioned capacity in gigabytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_gb: Option<i64>,

    /// Storage type, e.g. `ISCSI` or `NAS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nas_type: Option<String>,

    /// Address the volume is reachable on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_resource_backend_ip_address: Option<String>,

    /// Customer supplied notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the volume was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,
}

// =============================================================================
// Network appliances and subnets
// =============================================================================

/// A load balancing appliance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkApplicationDeliveryController {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// A virtual IP address served by a load balancing appliance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkApplicationDeliveryControllerLoadBalancerVirtualIpAddress {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancing_method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_port: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// A hardware firewall in front of one network component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkComponentFirewall {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_component_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_network_component_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A gateway appliance routing between VLANs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkGateway {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_space: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_number: Option<i64>,
}

/// A virtual IP address served by a shared load balancer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkLoadBalancerVirtualIpAddress {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancing_method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_port: Option<i64>,
}

/// A firewall log entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkLoggingSyslog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_port: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_port: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,
}

/// A message delivery (email) service account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkMessageDelivery {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// An outage recorded by network monitoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkMonitorVersion1Incident {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_id: Option<i64>,
}

/// A monitoring check against a server address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkMonitorVersion1QueryHost {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_type_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_action_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_cycles: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg1_value: Option<String>,
}

/// Monitoring level of a server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkMonitorVersion1QueryHostStratum {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_id: Option<i64>,
}

/// A regional internet registry such as ARIN or RIPE.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRegionalInternetRegistry {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A set of firewall rules applied to network interfaces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSecurityGroup {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// A vulnerability scan of one address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSecurityScannerRequest {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// A backend service such as a storage or backup cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkServiceResource {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontend_ip_address: Option<String>,
}

/// A host authorized to mount a storage volume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStorageAllowedHost {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_table_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_table_name: Option<String>,
}

/// An event logged against a storage volume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStorageEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,
}

/// A group of hosts that share access to storage volumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStorageGroup {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_type_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_resource_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_type_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// One address within a subnet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSubnetIpAddress {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_broadcast: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_gateway: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_network: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reserved: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A global IP address routed to a destination address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSubnetIpAddressGlobal {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_ip_address_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<Box<NetworkSubnetIpAddress>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_ip_address: Option<Box<NetworkSubnetIpAddress>>,
}

/// Registration of a subnet with a regional internet registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSubnetRegistration {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_handle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// RWhois contact details published for the account's subnets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSubnetRwhoisData {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub abuse_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_residence_flag: Option<bool>,
}

/// An IPsec VPN tunnel context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkTunnelModuleContext {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_peer_ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_peer_ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

// =============================================================================
// Hardware and SSH keys
// =============================================================================

/// A bare metal server, router, or other physical device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hardware {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// Hostname portion of the FQDN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    /// Domain portion of the FQDN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Hostname and domain joined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_domain_name: Option<String>,

    /// Primary public address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_ip_address: Option<String>,

    /// Primary private address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_backend_ip_address: Option<String>,

    /// Globally unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_identifier: Option<String>,

    /// Customer supplied notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Datacenter the device lives in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<Box<Location>>,

    /// When provisioning completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provision_date: Option<Time>,
}

/// An SSH public key stored on the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySshKey {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Customer supplied label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// The public key material.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// MD5 fingerprint of the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Customer supplied notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the key was added.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    /// When the key was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

// =============================================================================
// Configuration templates and devices
// =============================================================================

/// A disk array configuration on a server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationStorageGroup {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,
}

/// One array in a storage group template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationStorageGroupTemplateGroup {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Array the drives belong to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
}

/// A saved monitoring and configuration template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationTemplate {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// Lifecycle status of a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStatus {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A generic hardware component model, such as a GPU type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareComponentModelGeneric {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

/// A remote management command issued to a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareComponentRemoteManagementCommandRequest {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_management_command_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// A monitoring agent attached to a server or guest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringRobot {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// =============================================================================
// Security
// =============================================================================

/// An SSL certificate stored on the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityCertificate {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,

    /// PEM encoded certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate_certificate: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_size: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_begin: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_end: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_days: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// Summary of a [`SecurityCertificate`] without its key material.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityCertificateEntry {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_begin: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_end: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_days: Option<i64>,
}

/// A security clearance level for locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityLevel {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// =============================================================================
// Provisioning
// =============================================================================

/// A provisioning transaction against a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningVersion1Transaction {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Virtual guest the transaction runs against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<i64>,

    /// Hardware the transaction runs against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_id: Option<i64>,

    /// When the transaction was queued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    /// When the transaction last changed state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,

    /// Seconds spent in the current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_seconds: Option<i64>,

    /// When the current status was entered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_change_date: Option<Time>,

    /// Group the transaction belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_group: Option<ProvisioningVersion1TransactionGroup>,

    /// Current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_status: Option<ProvisioningVersion1TransactionStatus>,
}

/// A named group of provisioning steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningVersion1TransactionGroup {
    /// Group name, e.g. `Cloud Reload`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Historical average duration in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_time_to_complete: Option<Float64>,
}

/// A step within a provisioning transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningVersion1TransactionStatus {
    /// Machine readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Human readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
}

/// A URL called when a server finishes provisioning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningHook {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

// =============================================================================
// Software
// =============================================================================

/// A software installation on a device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareComponent {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Hardware the software is installed on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_id: Option<i64>,

    /// License key or serial.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_license_instance: Option<String>,

    /// What is installed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_description: Option<SoftwareDescription>,

    /// Credentials for the installation.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub passwords: Vec<SoftwareComponentPassword>,
}

/// A credential recorded for a software installation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareComponentPassword {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Login name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Login password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Port the credential applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,

    /// Customer supplied notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A software title and version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareDescription {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Product name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    /// Version string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Operating system reference code, e.g. `UBUNTU_22_64`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_code: Option<String>,

    /// Full descriptive name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    /// Non-zero when the title is an operating system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<i64>,
}

/// A software license held by the account rather than a server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareAccountLicense {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_description_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_description: Option<Box<SoftwareDescription>>,
}

/// A software license bound to a virtual host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareVirtualLicense {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_hardware_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_description_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_description: Option<Box<SoftwareDescription>>,
}

// =============================================================================
// Containers
// =============================================================================

/// Capacity of a managed hardware pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerHardwarePoolDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_orders: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_transactions: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_key_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub routers: Vec<ContainerHardwarePoolDetailsRouter>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_hardware: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_inventory_hardware: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_provisioned_hardware: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tested_hardware: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_testing_hardware: Option<i64>,
}

/// Capacity of a managed hardware pool behind one router.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerHardwarePoolDetailsRouter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_threshold: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_hardware: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_inventory_hardware: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_provisioned_hardware: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tested_hardware: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_testing_hardware: Option<i64>,
}

/// Disk layout of an image's storage group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerImageStorageGroupDetails {
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub drives: Vec<ContainerImageStorageGroupDetailsDrives>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_group_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_group_type: Option<String>,
}

/// One drive of an image's storage group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerImageStorageGroupDetailsDrives {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_space: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

/// An EVault backup job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerNetworkStorageEvaultWebCcJobDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_used: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_run_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_size: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_of_total_usage: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_guest_id: Option<i64>,
}

/// Windows update status of a server or guest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerUtilityMicrosoftWindowsUpdateServicesStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reboot_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_status_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync_date: Option<Time>,

    #[serde(rename = "privateIPAddress", skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_status: Option<String>,
}

// =============================================================================
// Hardware and software aliases
// =============================================================================

/// A router. Decodes the columns shared with [`Hardware`].
pub type HardwareRouter = Hardware;

/// A backend (private network) router.
pub type HardwareRouterBackend = Hardware;

/// A bare metal server. Decodes the columns shared with [`Hardware`].
pub type HardwareServer = Hardware;

/// An installed operating system.
///
/// The operating system subtype is decoded through the columns it shares with
/// [`SoftwareComponent`]: description, license, and passwords.
pub type SoftwareComponentOperatingSystem = SoftwareComponent;
