//! Virtual guests and the resources around them: disks, image templates,
//! dedicated hosts, hypervisor hosts, and placement groups.

use serde::{Deserialize, Serialize};

use crate::account::{Account, BillingItem, BillingItemVirtualGuest, TagReference, Ticket};
use crate::metric::{MetricTrackingObject, MetricTrackingObjectVirtualStorageRepository};
use crate::network::{
    HardwareRouterBackend, HardwareServer, Location, NetworkSecurityGroup, NetworkSubnetIpAddress,
    NetworkVlan, ProvisioningVersion1Transaction, SecuritySshKey, SoftwareComponentOperatingSystem,
    SoftwareDescription,
};
use crate::product::{ProductItemPrice, ProductPackagePreset};
use crate::scalar::{Float64, Time, deserialize_null_default};

// =============================================================================
// Virtual guests
// =============================================================================

/// A virtual server instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuest {
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

    /// Globally unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_identifier: Option<String>,

    /// Hypervisor UUID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    /// Number of CPUs at boot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cpus: Option<i64>,

    /// Maximum CPUs the guest may have.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cpu: Option<i64>,

    /// Unit of `maxCpu`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cpu_units: Option<String>,

    /// Maximum memory in megabytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_memory: Option<i64>,

    /// Set for hourly billed guests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_billing_flag: Option<bool>,

    /// Set when the guest uses local disks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_disk_flag: Option<bool>,

    /// Set when the guest runs on single tenant hosts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_account_host_only_flag: Option<bool>,

    /// Set when the guest has no public interface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_network_only_flag: Option<bool>,

    /// Set for transient guests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transient_guest_flag: Option<bool>,

    /// Primary public address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_ip_address: Option<String>,

    /// Primary private address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_backend_ip_address: Option<String>,

    /// Reference code of the OS to install.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system_reference_code: Option<String>,

    /// Script run after provisioning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_install_script_uri: Option<String>,

    /// Network interfaces.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub network_components: Vec<VirtualGuestNetworkComponent>,

    /// Attached disks.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub block_devices: Vec<VirtualGuestBlockDevice>,

    /// Customer supplied notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the guest was ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    /// When the guest record last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,

    /// When provisioning completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provision_date: Option<Time>,

    /// Identifier of the guest status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,

    /// Placement group the guest belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_group_id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Box<Account>>,

    /// Datacenter the guest runs in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<Box<Location>>,

    /// Current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VirtualGuestStatus>,

    /// Current power state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_state: Option<VirtualGuestPowerState>,

    /// Guest type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub guest_type: Option<VirtualGuestType>,

    /// Installed operating system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<SoftwareComponentOperatingSystem>,

    /// Transaction currently running.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_transaction: Option<Box<ProvisioningVersion1Transaction>>,

    /// Image the guest was provisioned from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_device_template_group: Option<Box<VirtualGuestBlockDeviceTemplateGroup>>,

    /// Dedicated host the guest runs on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_host: Option<Box<VirtualDedicatedHost>>,

    /// Placement group the guest belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_group: Option<Box<VirtualPlacementGroup>>,

    /// VLANs the guest is attached to.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub network_vlans: Vec<NetworkVlan>,

    /// SSH keys installed on the guest.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ssh_keys: Vec<SecuritySshKey>,

    /// Tags attached to the guest.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tag_references: Vec<TagReference>,

    /// User metadata attached to the guest.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub user_data: Vec<VirtualGuestAttribute>,

    /// Extra options honored by `createObject`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplemental_create_object_options: Option<VirtualGuestSupplementalCreateObjectOptions>,

    /// Billing item of the guest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_item: Option<Box<BillingItemVirtualGuest>>,

    /// Hypervisor host the guest runs on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<Box<VirtualHost>>,

    /// Reserved capacity the guest occupies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_capacity_group: Option<Box<VirtualReservedCapacityGroup>>,
}

/// Extra options honored when creating a virtual guest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuestSupplementalCreateObjectOptions {
    /// Boot mode, e.g. `HVM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_mode: Option<String>,

    /// Flavor to provision with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor_key_name: Option<String>,

    /// Skip the manual review queue when allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub immediate_approval_flag: Option<bool>,

    /// Script run after provisioning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_install_script_uri: Option<String>,
}

/// The lifecycle status of a virtual guest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuestStatus {
    /// Key name, e.g. `ACTIVE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    /// Human readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The power state of a virtual guest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuestPowerState {
    /// Key name, e.g. `RUNNING` or `HALTED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    /// Human readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The type of a virtual guest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuestType {
    /// Key name, e.g. `PUBLIC` or `DEDICATED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    /// Human readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A key/value attribute attached to a virtual guest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuestAttribute {
    /// Guest the attribute belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<i64>,

    /// Attribute value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Attribute type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub attribute_type: Option<VirtualGuestAttributeType>,
}

/// The kind of a virtual guest attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuestAttributeType {
    /// Key name, e.g. `USER_DATA`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyname: Option<String>,

    /// Human readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// =============================================================================
// Network components and disks
// =============================================================================

/// A network interface on a virtual guest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuestNetworkComponent {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Guest the interface belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<i64>,

    /// Network the interface is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_id: Option<i64>,

    /// Interface name, e.g. `eth`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Interface number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,

    /// Speed in Mbps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<i64>,

    /// Maximum speed in Mbps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_speed: Option<i64>,

    /// MAC address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,

    /// Primary address on the interface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_ip_address: Option<String>,

    /// Link status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// When the interface was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,
}

/// A disk attached to a virtual guest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuestBlockDevice {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Guest the disk is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<i64>,

    /// Disk image backing the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_image_id: Option<i64>,

    /// Device position, e.g. `0` or `2`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,

    /// Non-zero for the boot disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootable_flag: Option<i64>,

    /// Non-zero when the disk can be hot plugged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hot_plug_flag: Option<i64>,

    /// `RW` or `RO`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_mode: Option<String>,

    /// `Disk` or `CD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_type: Option<String>,

    /// Identifier of the device status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,

    /// When the device was attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    /// Disk image backing the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_image: Option<Box<VirtualDiskImage>>,
}

/// A disk image stored in a storage repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualDiskImage {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Image name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Image description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Capacity in `units`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,

    /// Unit of `capacity`, e.g. `GB`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,

    /// Image UUID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    /// Identifier of the image type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,

    /// Repository the image lives in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_repository_id: Option<i64>,

    /// Set when the image is bootable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootable_volume_flag: Option<bool>,

    /// Set when the image lives on local storage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_disk_flag: Option<bool>,

    /// When the image was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    /// When the image last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

// =============================================================================
// Image templates
// =============================================================================

/// An image template: a group of block device templates used to provision guests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuestBlockDeviceTemplateGroup {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// Parent template group (set on per-datacenter children).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,

    /// Template name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Customer supplied note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Short summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Globally unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_identifier: Option<String>,

    /// Non-zero for public images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_flag: Option<i64>,

    /// Identifier of the template status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,

    /// Set for images usable on both virtual and bare metal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_image_flag: Option<bool>,

    /// Image type, e.g. `SYSTEM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_type_key_name: Option<String>,

    /// When the template was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    /// Per-datacenter copies of the template.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<VirtualGuestBlockDeviceTemplateGroup>,

    /// Datacenters the template is available in.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub datacenters: Vec<Location>,

    /// Datacenter of a child template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<Box<Location>>,

    /// Current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VirtualGuestBlockDeviceTemplateGroupStatus>,
}

/// The status of an image template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuestBlockDeviceTemplateGroupStatus {
    /// Key name, e.g. `ACTIVE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    /// Human readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =============================================================================
// Dedicated hosts and placement groups
// =============================================================================

/// A dedicated host that runs only the account's guests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualDedicatedHost {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// Host name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Number of CPUs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_count: Option<i64>,

    /// Memory in gigabytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_capacity: Option<i64>,

    /// Disk in gigabytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_capacity: Option<i64>,

    /// Number of guests on the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<u32>,

    /// Customer supplied notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the host was provisioned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    /// When the host last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,

    /// Datacenter the host is in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<Box<Location>>,

    /// Guests running on the host.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub guests: Vec<VirtualGuest>,

    /// Tags attached to the host.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tag_references: Vec<TagReference>,
}

/// A group of guests placed according to a rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualPlacementGroup {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// Group name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Rule applied to the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<i64>,

    /// Router the group's guests are placed behind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_router_id: Option<i64>,

    /// Number of guests in the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<u32>,

    /// When the group was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    /// When the group last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,

    /// Guests in the group.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub guests: Vec<VirtualGuest>,

    /// Rule applied to the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<VirtualPlacementGroupRule>,
}

/// A placement rule, e.g. spread guests across hosts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualPlacementGroupRule {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Key name, e.g. `SPREAD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    /// Human readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// =============================================================================
// Hosts, image software, and reserved capacity
// =============================================================================

/// A connection to a guest's web console.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualBrowserConsoleAccessLog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_port: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Software installed on a disk image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualDiskImageSoftware {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_image: Option<Box<VirtualDiskImage>>,

    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_count: Option<u64>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub passwords: Vec<VirtualDiskImageSoftwarePassword>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_description: Option<Box<SoftwareDescription>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_description_id: Option<i64>,
}

/// A credential for software on a disk image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualDiskImageSoftwarePassword {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub software: Option<Box<VirtualDiskImageSoftware>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// The kind of a disk image, e.g. `system` or `swap`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualDiskImageType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One disk of an image template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuestBlockDeviceTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_image: Option<Box<VirtualDiskImage>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_image_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_space: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Box<VirtualGuestBlockDeviceTemplateGroup>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,

    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

/// An account an image template is shared with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuestBlockDeviceTemplateGroupAccounts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Box<Account>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Box<VirtualGuestBlockDeviceTemplateGroup>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
}

/// A boot parameter set on a guest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuestBootParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest: Option<Box<VirtualGuest>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_boot_parameter_type: Option<Box<VirtualGuestBootParameterType>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_boot_parameter_type_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<i64>,

    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// A boot parameter a guest may carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuestBootParameterType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_option: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Binding of a guest interface to a VPC allocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuestNetworkComponentIcpBinding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_allocation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_component: Option<Box<VirtualGuestNetworkComponent>>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub binding_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

/// An address bound to a guest interface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuestNetworkComponentIpAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<Box<NetworkSubnetIpAddress>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_component: Option<Box<VirtualGuestNetworkComponent>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub address_type: Option<String>,
}

/// A hypervisor host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualHost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Box<Account>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_flag: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware: Option<Box<HardwareServer>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_id: Option<i64>,

    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_tracking_object: Option<Box<MetricTrackingObject>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pci_device_count: Option<u64>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub pci_devices: Vec<VirtualHostPciDevice>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_memory_capacity: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// A PCI device on a hypervisor host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualHostPciDevice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<Box<VirtualHost>>,

    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub xen_pci_id: Option<String>,
}

/// Binding of a security group to a guest interface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualNetworkSecurityGroupNetworkComponentBinding {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_component: Option<Box<VirtualGuestNetworkComponent>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_component_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group: Option<Box<NetworkSecurityGroup>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_id: Option<i64>,
}

/// A block of reserved guest capacity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualReservedCapacityGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Box<Account>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_instance_count: Option<u64>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub available_instances: Vec<VirtualReservedCapacityGroupInstance>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_router: Option<Box<HardwareRouterBackend>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_router_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<u64>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub instances: Vec<VirtualReservedCapacityGroupInstance>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances_count: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupied_instance_count: Option<u64>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub occupied_instances: Vec<VirtualReservedCapacityGroupInstance>,
}

/// One slot of reserved capacity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualReservedCapacityGroupInstance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_flag: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_item: Option<Box<BillingItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest: Option<Box<VirtualGuest>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<i64>,

    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_capacity_group: Option<Box<VirtualReservedCapacityGroup>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_capacity_group_id: Option<i64>,
}

/// A storage repository on a hypervisor host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualStorageRepository {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Box<Account>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_item: Option<Box<BillingItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<Box<Location>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_image_count: Option<u64>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub disk_images: Vec<VirtualDiskImage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<u64>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub guests: Vec<VirtualGuest>,

    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_tracking_object: Option<Box<MetricTrackingObjectVirtualStorageRepository>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_flag: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_image_billing_item: Option<Box<BillingItem>>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub repository_type: Option<Box<VirtualStorageRepositoryType>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,
}

/// The kind of a storage repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualStorageRepositoryType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub storage_repositories: Vec<VirtualStorageRepository>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_repository_count: Option<u64>,
}

// =============================================================================
// Containers
// =============================================================================

/// The options available when creating a virtual guest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerVirtualGuestConfiguration {
    /// Disk options.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub block_devices: Vec<ContainerVirtualGuestConfigurationOption>,

    /// Datacenter options.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub datacenters: Vec<ContainerVirtualGuestConfigurationOption>,

    /// Flavor options.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub flavors: Vec<ContainerVirtualGuestConfigurationOption>,

    /// Memory options.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub memory: Vec<ContainerVirtualGuestConfigurationOption>,

    /// Network speed options.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub network_components: Vec<ContainerVirtualGuestConfigurationOption>,

    /// Operating system options.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub operating_systems: Vec<ContainerVirtualGuestConfigurationOption>,

    /// Processor options.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub processors: Vec<ContainerVirtualGuestConfigurationOption>,
}

/// One option within a create-object configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerVirtualGuestConfigurationOption {
    /// Flavor this option selects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor: Option<ProductPackagePreset>,

    /// Price of the option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_price: Option<ProductItemPrice>,

    /// Partial guest template that selects this option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<Box<VirtualGuest>>,
}

/// Describes an image to capture from a virtual guest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDiskImageCaptureTemplate {
    /// Name of the resulting image template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Description of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Short summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Volumes to include.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub volumes: Vec<ContainerDiskImageCaptureTemplateVolume>,
}

/// One volume of a capture template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDiskImageCaptureTemplateVolume {
    /// Volume name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Partitions to include.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub partitions: Vec<ContainerDiskImageCaptureTemplateVolumePartition>,
}

/// One partition of a captured volume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDiskImageCaptureTemplateVolumePartition {
    /// Partition name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Set for the root partition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_root: Option<bool>,
}

/// Import or export settings for an image template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerVirtualGuestBlockDeviceTemplateConfiguration {
    /// Name of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Note to attach to the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Object storage URI of the image file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// OS of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system_reference_code: Option<String>,

    /// Boot mode, e.g. `HVM`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_mode: Option<String>,

    /// Set when the image uses cloud-init.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_init: Option<bool>,

    /// Set for bring-your-own-license images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byol: Option<bool>,

    /// Set for encrypted images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_encrypted: Option<bool>,

    /// API key used to reach object storage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ibm_api_key: Option<String>,

    /// Key protect root key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_key_id: Option<String>,

    /// Wrapped data encryption key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapped_dek: Option<String>,

    /// Boot modes the image supports.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub supported_boot_modes: Vec<String>,
}

/// Options for an operating system reload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerHardwareServerConfiguration {
    /// Script run after the reload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_provision_script_uri: Option<String>,

    /// Image template to reload from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_template_id: Option<i64>,

    /// SSH keys to install.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ssh_key_ids: Vec<i64>,

    /// Prices of the OS and add-ons to install.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub item_prices: Vec<ProductItemPrice>,

    /// Non-zero to partition with LVM.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lvm_flag: Option<i64>,

    /// Non-zero to update the BIOS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_bios: Option<i64>,

    /// Keep the current disks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_retention_flag: Option<bool>,
}

/// Connection details for a guest's web console.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerVirtualConsoleData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub websocket_host: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub websocket_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub websocket_port: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub websocket_token: Option<String>,
}

/// Used and free resources of a dedicated host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerVirtualDedicatedHostAllocationStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_allocated: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_available: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_allocated: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_available: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_capacity: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_allocated: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_available: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_capacity: Option<i64>,
}

/// Used and free PCI devices of a dedicated host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerVirtualDedicatedHostPciDeviceAllocationStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices_allocated: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices_available: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_component_model_generic_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_id: Option<i64>,
}

/// Account details used to import images from a partner service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerVirtualGuestBlockDeviceTemplateGroupRiasAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Maintenance scheduled against a guest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerVirtualGuestPendingMaintenanceAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<Box<Ticket>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_explanation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_template_serializes_only_set_fields() {
        let template = VirtualGuest {
            hostname: Some("web01".into()),
            domain: Some("example.com".into()),
            start_cpus: Some(2),
            max_memory: Some(4096),
            hourly_billing_flag: Some(true),
            local_disk_flag: Some(false),
            operating_system_reference_code: Some("UBUNTU_LATEST".into()),
            datacenter: Some(Box::new(Location {
                name: Some("dal13".into()),
                ..Default::default()
            })),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&template).unwrap(),
            json!({
                "hostname": "web01",
                "domain": "example.com",
                "startCpus": 2,
                "maxMemory": 4096,
                "hourlyBillingFlag": true,
                "localDiskFlag": false,
                "operatingSystemReferenceCode": "UBUNTU_LATEST",
                "datacenter": { "name": "dal13" }
            })
        );
    }

    #[test]
    fn guest_decodes_nested_state() {
        let raw = json!({
            "id": 1234,
            "fullyQualifiedDomainName": "web01.example.com",
            "provisionDate": "2024-01-15T08:30:00-06:00",
            "powerState": { "keyName": "RUNNING", "name": "Running" },
            "type": { "keyName": "PUBLIC" },
            "blockDevices": [
                { "id": 1, "device": "0", "diskImage": { "capacity": 25, "units": "GB" } }
            ],
            "tagReferences": [{ "tag": { "name": "prod" } }]
        });

        let guest: VirtualGuest = serde_json::from_value(raw).unwrap();
        assert_eq!(
            guest.power_state.and_then(|p| p.key_name).as_deref(),
            Some("RUNNING")
        );
        assert_eq!(guest.guest_type.and_then(|t| t.key_name).as_deref(), Some("PUBLIC"));
        let disk = guest.block_devices[0].disk_image.as_ref().unwrap();
        assert_eq!(disk.capacity, Some(25));
        assert!(guest.provision_date.is_some());
    }

    #[test]
    fn capture_template_nests_volumes_and_partitions() {
        let template = ContainerDiskImageCaptureTemplate {
            name: Some("golden".into()),
            volumes: vec![ContainerDiskImageCaptureTemplateVolume {
                name: Some("Disk 1".into()),
                partitions: vec![ContainerDiskImageCaptureTemplateVolumePartition {
                    name: Some("/".into()),
                    is_root: Some(true),
                }],
            }],
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&template).unwrap(),
            json!({
                "name": "golden",
                "volumes": [{ "name": "Disk 1", "partitions": [{ "name": "/", "isRoot": true }] }]
            })
        );
    }

    #[test]
    fn null_block_devices_decode_as_empty() {
        let guest: VirtualGuest =
            serde_json::from_str(r#"{"id":1,"blockDevices":null}"#).unwrap();
        assert_eq!(guest.id, Some(1));
        assert!(guest.block_devices.is_empty());
        assert_eq!(serde_json::to_value(&guest).unwrap(), json!({ "id": 1 }));
    }

    #[test]
    fn guest_host_and_operating_system_relations() {
        let raw = json!({
            "id": 5,
            "operatingSystem": {
                "softwareDescription": { "referenceCode": "CENTOS_7_64" },
                "passwords": null
            },
            "host": { "id": 77, "name": "host-a", "pciDevices": [{ "id": 1 }] }
        });

        let guest: VirtualGuest = serde_json::from_value(raw).unwrap();
        let os: SoftwareComponentOperatingSystem = guest.operating_system.unwrap();
        assert!(os.passwords.is_empty());
        let host = guest.host.unwrap();
        assert_eq!(host.name.as_deref(), Some("host-a"));
        assert_eq!(host.pci_devices.len(), 1);
    }
}
