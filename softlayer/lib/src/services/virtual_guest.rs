//! Bindings for virtual guests and the services around them: image
//! templates, placement groups, dedicated hosts, disk images, hosts, and
//! reserved capacity.

use softlayer_datatypes as datatypes;

use crate::error::Error;
use crate::service::{call, call_void, service};
use crate::session::Session;

service! {
    /// A virtual server.
    ///
    /// Instance methods act on the guest selected with [`VirtualGuest::id`].
    /// `create_object`, `create_objects`, `generate_order_template`, and the
    /// `find_by_*` lookups are service-level and need no id.
    VirtualGuest => "SoftLayer_Virtual_Guest", get_virtual_guest_service
}

impl<S: Session> VirtualGuest<S> {
    /// Brings the private network interface up.
    pub async fn activate_private_port(&self) -> Result<bool, Error> {
        call(self, "activatePrivatePort", ()).await
    }

    /// Brings the public network interface up.
    pub async fn activate_public_port(&self) -> Result<bool, Error> {
        call(self, "activatePublicPort", ()).await
    }

    /// Authorizes the guest to mount a storage volume.
    pub async fn allow_access_to_network_storage(
        &self,
        network_storage_template_object: &datatypes::NetworkStorage,
    ) -> Result<bool, Error> {
        call(self, "allowAccessToNetworkStorage", (network_storage_template_object,)).await
    }

    /// Authorizes the guest to mount several storage volumes.
    pub async fn allow_access_to_network_storage_list(
        &self,
        network_storage_template_objects: &[datatypes::NetworkStorage],
    ) -> Result<bool, Error> {
        call(self, "allowAccessToNetworkStorageList", (network_storage_template_objects,)).await
    }

    /// Attaches a disk image to the guest.
    pub async fn attach_disk_image(
        &self,
        image_id: i64,
    ) -> Result<datatypes::ProvisioningVersion1Transaction, Error> {
        call(self, "attachDiskImage", (image_id,)).await
    }

    pub async fn cancel_isolation_for_destructive_action(&self) -> Result<(), Error> {
        call_void(self, "cancelIsolationForDestructiveAction", ()).await
    }

    /// Captures the guest's disks into a new image template.
    ///
    /// The guest must be powered off or the capture will be crash-consistent at
    /// best.
    pub async fn capture_image(
        &self,
        capture_template: &datatypes::ContainerDiskImageCaptureTemplate,
    ) -> Result<datatypes::VirtualGuestBlockDeviceTemplateGroup, Error> {
        call(self, "captureImage", (capture_template,)).await
    }

    /// Returns `true` if the guest's host has `disk_capacity` gigabytes free.
    pub async fn check_host_disk_availability(&self, disk_capacity: i64) -> Result<bool, Error> {
        call(self, "checkHostDiskAvailability", (disk_capacity,)).await
    }

    /// Attaches a metadata disk carrying the guest's user data.
    pub async fn configure_metadata_disk(
        &self,
    ) -> Result<datatypes::ProvisioningVersion1Transaction, Error> {
        call(self, "configureMetadataDisk", ()).await
    }

    /// Archives the given block devices into a private image template and
    /// returns the template.
    pub async fn create_archive_template(
        &self,
        group_name: &str,
        block_devices: &[datatypes::VirtualGuestBlockDevice],
        note: Option<&str>,
    ) -> Result<datatypes::VirtualGuestBlockDeviceTemplateGroup, Error> {
        call(self, "createArchiveTemplate", (group_name, block_devices, note)).await
    }

    /// Archives the given block devices into a private image template.
    pub async fn create_archive_transaction(
        &self,
        group_name: &str,
        block_devices: &[datatypes::VirtualGuestBlockDevice],
        note: Option<&str>,
    ) -> Result<datatypes::ProvisioningVersion1Transaction, Error> {
        call(self, "createArchiveTransaction", (group_name, block_devices, note)).await
    }

    /// Orders a guest from a template.
    ///
    /// This is a simplified ordering path: `hostname`, `domain`, `startCpus`,
    /// `maxMemory`, `hourlyBillingFlag`, `localDiskFlag`, and either
    /// `operatingSystemReferenceCode` or `blockDeviceTemplateGroup` are required.
    /// The returned guest carries its `globalIdentifier`; its `id` is assigned
    /// once provisioning starts.
    pub async fn create_object(
        &self,
        template: &datatypes::VirtualGuest,
    ) -> Result<datatypes::VirtualGuest, Error> {
        call(self, "createObject", (template,)).await
    }

    /// Orders several guests in one call.
    pub async fn create_objects(
        &self,
        templates: &[datatypes::VirtualGuest],
    ) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "createObjects", (templates,)).await
    }

    pub async fn create_post_software_install_transaction(
        &self,
        data: &str,
        return_boolean: bool,
    ) -> Result<bool, Error> {
        call(self, "createPostSoftwareInstallTransaction", (data, return_boolean)).await
    }

    /// Cancels the guest immediately.
    pub async fn delete_object(&self) -> Result<bool, Error> {
        call(self, "deleteObject", ()).await
    }

    /// Removes one tag from the guest.
    pub async fn delete_tag(&self, tag_name: &str) -> Result<bool, Error> {
        call(self, "deleteTag", (tag_name,)).await
    }

    pub async fn delete_transient_webhook(&self) -> Result<(), Error> {
        call_void(self, "deleteTransientWebhook", ()).await
    }

    pub async fn detach_disk_image(
        &self,
        image_id: i64,
    ) -> Result<datatypes::ProvisioningVersion1Transaction, Error> {
        call(self, "detachDiskImage", (image_id,)).await
    }

    /// Updates the guest's hostname, domain, or notes.
    pub async fn edit_object(&self, template: &datatypes::VirtualGuest) -> Result<bool, Error> {
        call(self, "editObject", (template,)).await
    }

    pub async fn execute_idera_bare_metal_restore(&self) -> Result<bool, Error> {
        call(self, "executeIderaBareMetalRestore", ()).await
    }

    pub async fn execute_r1_soft_bare_metal_restore(&self) -> Result<bool, Error> {
        call(self, "executeR1SoftBareMetalRestore", ()).await
    }

    /// Downloads and runs the script at `uri` on the guest.
    pub async fn execute_remote_script(&self, uri: &str) -> Result<(), Error> {
        call_void(self, "executeRemoteScript", (uri,)).await
    }

    /// Reboots the guest into the rescue kernel.
    pub async fn execute_rescue_layer(&self) -> Result<bool, Error> {
        call(self, "executeRescueLayer", ()).await
    }

    pub async fn find_by_hostname(
        &self,
        hostname: &str,
    ) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "findByHostname", (hostname,)).await
    }

    pub async fn find_by_ip_address(
        &self,
        ip_address: &str,
    ) -> Result<datatypes::VirtualGuest, Error> {
        call(self, "findByIpAddress", (ip_address,)).await
    }

    /// Converts a `create_object` template into the equivalent product order.
    pub async fn generate_order_template(
        &self,
        template: &datatypes::VirtualGuest,
    ) -> Result<datatypes::ContainerProductOrder, Error> {
        call(self, "generateOrderTemplate", (template,)).await
    }

    pub async fn get_account(&self) -> Result<datatypes::Account, Error> {
        call(self, "getAccount", ()).await
    }

    pub async fn get_account_owned_pool_flag(&self) -> Result<bool, Error> {
        call(self, "getAccountOwnedPoolFlag", ()).await
    }

    pub async fn get_active_network_monitor_incident(
        &self,
    ) -> Result<Vec<datatypes::NetworkMonitorVersion1Incident>, Error> {
        call(self, "getActiveNetworkMonitorIncident", ()).await
    }

    pub async fn get_active_tickets(&self) -> Result<Vec<datatypes::Ticket>, Error> {
        call(self, "getActiveTickets", ()).await
    }

    pub async fn get_active_transaction(
        &self,
    ) -> Result<datatypes::ProvisioningVersion1Transaction, Error> {
        call(self, "getActiveTransaction", ()).await
    }

    pub async fn get_active_transactions(
        &self,
    ) -> Result<Vec<datatypes::ProvisioningVersion1Transaction>, Error> {
        call(self, "getActiveTransactions", ()).await
    }

    pub async fn get_additional_required_prices_for_os_reload(
        &self,
        config: &datatypes::ContainerHardwareServerConfiguration,
    ) -> Result<Vec<datatypes::ProductItemPrice>, Error> {
        call(self, "getAdditionalRequiredPricesForOsReload", (config,)).await
    }

    pub async fn get_allowed_host(&self) -> Result<datatypes::NetworkStorageAllowedHost, Error> {
        call(self, "getAllowedHost", ()).await
    }

    pub async fn get_allowed_network_storage(
        &self,
    ) -> Result<Vec<datatypes::NetworkStorage>, Error> {
        call(self, "getAllowedNetworkStorage", ()).await
    }

    pub async fn get_allowed_network_storage_replicas(
        &self,
    ) -> Result<Vec<datatypes::NetworkStorage>, Error> {
        call(self, "getAllowedNetworkStorageReplicas", ()).await
    }

    pub async fn get_antivirus_spyware_software_component(
        &self,
    ) -> Result<datatypes::SoftwareComponent, Error> {
        call(self, "getAntivirusSpywareSoftwareComponent", ()).await
    }

    pub async fn get_application_delivery_controller(
        &self,
    ) -> Result<datatypes::NetworkApplicationDeliveryController, Error> {
        call(self, "getApplicationDeliveryController", ()).await
    }

    /// Returns the network storage volumes the guest is authorized for.
    pub async fn get_attached_network_storages(
        &self,
        nas_type: Option<&str>,
    ) -> Result<Vec<datatypes::NetworkStorage>, Error> {
        call(self, "getAttachedNetworkStorages", (nas_type,)).await
    }

    pub async fn get_attributes(&self) -> Result<Vec<datatypes::VirtualGuestAttribute>, Error> {
        call(self, "getAttributes", ()).await
    }

    pub async fn get_available_block_device_positions(&self) -> Result<Vec<String>, Error> {
        call(self, "getAvailableBlockDevicePositions", ()).await
    }

    pub async fn get_available_monitoring(
        &self,
    ) -> Result<Vec<datatypes::NetworkMonitorVersion1QueryHostStratum>, Error> {
        call(self, "getAvailableMonitoring", ()).await
    }

    pub async fn get_available_network_storages(
        &self,
        nas_type: Option<&str>,
    ) -> Result<Vec<datatypes::NetworkStorage>, Error> {
        call(self, "getAvailableNetworkStorages", (nas_type,)).await
    }

    pub async fn get_average_daily_private_bandwidth_usage(
        &self,
    ) -> Result<datatypes::Float64, Error> {
        call(self, "getAverageDailyPrivateBandwidthUsage", ()).await
    }

    pub async fn get_average_daily_public_bandwidth_usage(
        &self,
    ) -> Result<datatypes::Float64, Error> {
        call(self, "getAverageDailyPublicBandwidthUsage", ()).await
    }

    pub async fn get_backend_network_components(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuestNetworkComponent>, Error> {
        call(self, "getBackendNetworkComponents", ()).await
    }

    pub async fn get_backend_routers(&self) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getBackendRouters", ()).await
    }

    pub async fn get_bandwidth_allocation(&self) -> Result<datatypes::Float64, Error> {
        call(self, "getBandwidthAllocation", ()).await
    }

    pub async fn get_bandwidth_allotment_detail(
        &self,
    ) -> Result<datatypes::NetworkBandwidthVersion1AllotmentDetail, Error> {
        call(self, "getBandwidthAllotmentDetail", ()).await
    }

    pub async fn get_bandwidth_data_by_date(
        &self,
        start_date_time: datatypes::Time,
        end_date_time: datatypes::Time,
        network_type: &str,
    ) -> Result<Vec<datatypes::MetricTrackingObjectData>, Error> {
        call(self, "getBandwidthDataByDate", (start_date_time, end_date_time, network_type)).await
    }

    pub async fn get_bandwidth_for_date_range(
        &self,
        start_date: datatypes::Time,
        end_date: datatypes::Time,
    ) -> Result<Vec<datatypes::MetricTrackingObjectData>, Error> {
        call(self, "getBandwidthForDateRange", (start_date, end_date)).await
    }

    pub async fn get_bandwidth_image(
        &self,
        network_type: &str,
        snapshot_range: &str,
        date_specified: datatypes::Time,
        date_specified_end: datatypes::Time,
    ) -> Result<datatypes::ContainerBandwidthGraphOutputs, Error> {
        call(
            self,
            "getBandwidthImage",
            (network_type, snapshot_range, date_specified, date_specified_end),
        )
        .await
    }

    pub async fn get_bandwidth_image_by_date(
        &self,
        start_date_time: datatypes::Time,
        end_date_time: datatypes::Time,
        network_type: &str,
    ) -> Result<datatypes::ContainerBandwidthGraphOutputs, Error> {
        call(self, "getBandwidthImageByDate", (start_date_time, end_date_time, network_type)).await
    }

    /// Returns the bytes transferred between two dates.
    pub async fn get_bandwidth_total(
        &self,
        start_date_time: datatypes::Time,
        end_date_time: datatypes::Time,
        direction: &str,
        side: &str,
    ) -> Result<u64, Error> {
        call(self, "getBandwidthTotal", (start_date_time, end_date_time, direction, side)).await
    }

    pub async fn get_billing_cycle_bandwidth_usage(
        &self,
    ) -> Result<Vec<datatypes::NetworkBandwidthUsage>, Error> {
        call(self, "getBillingCycleBandwidthUsage", ()).await
    }

    pub async fn get_billing_cycle_private_bandwidth_usage(
        &self,
    ) -> Result<datatypes::NetworkBandwidthUsage, Error> {
        call(self, "getBillingCyclePrivateBandwidthUsage", ()).await
    }

    pub async fn get_billing_cycle_public_bandwidth_usage(
        &self,
    ) -> Result<datatypes::NetworkBandwidthUsage, Error> {
        call(self, "getBillingCyclePublicBandwidthUsage", ()).await
    }

    pub async fn get_billing_item(&self) -> Result<datatypes::BillingItemVirtualGuest, Error> {
        call(self, "getBillingItem", ()).await
    }

    pub async fn get_block_cancel_because_disconnected_flag(&self) -> Result<bool, Error> {
        call(self, "getBlockCancelBecauseDisconnectedFlag", ()).await
    }

    pub async fn get_block_device_template_group(
        &self,
    ) -> Result<datatypes::VirtualGuestBlockDeviceTemplateGroup, Error> {
        call(self, "getBlockDeviceTemplateGroup", ()).await
    }

    pub async fn get_block_devices(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuestBlockDevice>, Error> {
        call(self, "getBlockDevices", ()).await
    }

    pub async fn get_boot_mode(&self) -> Result<String, Error> {
        call(self, "getBootMode", ()).await
    }

    pub async fn get_boot_order(&self) -> Result<String, Error> {
        call(self, "getBootOrder", ()).await
    }

    pub async fn get_browser_console_access_logs(
        &self,
    ) -> Result<Vec<datatypes::VirtualBrowserConsoleAccessLog>, Error> {
        call(self, "getBrowserConsoleAccessLogs", ()).await
    }

    pub async fn get_console_access_log(
        &self,
    ) -> Result<Vec<datatypes::NetworkLoggingSyslog>, Error> {
        call(self, "getConsoleAccessLog", ()).await
    }

    pub async fn get_console_data(&self) -> Result<datatypes::ContainerVirtualConsoleData, Error> {
        call(self, "getConsoleData", ()).await
    }

    pub async fn get_console_ip_address_flag(&self) -> Result<bool, Error> {
        call(self, "getConsoleIpAddressFlag", ()).await
    }

    pub async fn get_console_ip_address_record(
        &self,
    ) -> Result<datatypes::VirtualGuestNetworkComponentIpAddress, Error> {
        call(self, "getConsoleIpAddressRecord", ()).await
    }

    pub async fn get_continuous_data_protection_software_component(
        &self,
    ) -> Result<datatypes::SoftwareComponent, Error> {
        call(self, "getContinuousDataProtectionSoftwareComponent", ()).await
    }

    pub async fn get_control_panel(&self) -> Result<datatypes::SoftwareComponent, Error> {
        call(self, "getControlPanel", ()).await
    }

    pub async fn get_core_restricted_operating_system_price(
        &self,
    ) -> Result<datatypes::ProductItemPrice, Error> {
        call(self, "getCoreRestrictedOperatingSystemPrice", ()).await
    }

    pub async fn get_cpu_metric_data_by_date(
        &self,
        start_date_time: datatypes::Time,
        end_date_time: datatypes::Time,
        cpu_indexes: &[i64],
    ) -> Result<Vec<datatypes::MetricTrackingObjectData>, Error> {
        call(self, "getCpuMetricDataByDate", (start_date_time, end_date_time, cpu_indexes)).await
    }

    pub async fn get_cpu_metric_image(
        &self,
        snapshot_range: &str,
        date_specified: datatypes::Time,
    ) -> Result<datatypes::ContainerBandwidthGraphOutputs, Error> {
        call(self, "getCpuMetricImage", (snapshot_range, date_specified)).await
    }

    pub async fn get_cpu_metric_image_by_date(
        &self,
        start_date_time: datatypes::Time,
        end_date_time: datatypes::Time,
        cpu_indexes: &[i64],
    ) -> Result<datatypes::ContainerBandwidthGraphOutputs, Error> {
        call(self, "getCpuMetricImageByDate", (start_date_time, end_date_time, cpu_indexes)).await
    }

    /// Returns the choices `create_object` accepts: datacenters, flavors, operating
    /// systems, and so on.
    pub async fn get_create_object_options(
        &self,
    ) -> Result<datatypes::ContainerVirtualGuestConfiguration, Error> {
        call(self, "getCreateObjectOptions", ()).await
    }

    pub async fn get_current_bandwidth_summary(
        &self,
    ) -> Result<datatypes::MetricTrackingObjectBandwidthSummary, Error> {
        call(self, "getCurrentBandwidthSummary", ()).await
    }

    pub async fn get_current_billing_detail(&self) -> Result<Vec<datatypes::BillingItem>, Error> {
        call(self, "getCurrentBillingDetail", ()).await
    }

    pub async fn get_current_billing_total(&self) -> Result<datatypes::Float64, Error> {
        call(self, "getCurrentBillingTotal", ()).await
    }

    pub async fn get_datacenter(&self) -> Result<datatypes::Location, Error> {
        call(self, "getDatacenter", ()).await
    }

    pub async fn get_dedicated_host(&self) -> Result<datatypes::VirtualDedicatedHost, Error> {
        call(self, "getDedicatedHost", ()).await
    }

    pub async fn get_device_status(&self) -> Result<datatypes::DeviceStatus, Error> {
        call(self, "getDeviceStatus", ()).await
    }

    pub async fn get_drive_retention_item_price(
        &self,
    ) -> Result<datatypes::ProductItemPrice, Error> {
        call(self, "getDriveRetentionItemPrice", ()).await
    }

    pub async fn get_evault_network_storage(
        &self,
    ) -> Result<Vec<datatypes::NetworkStorage>, Error> {
        call(self, "getEvaultNetworkStorage", ()).await
    }

    pub async fn get_firewall_protectable_subnets(
        &self,
    ) -> Result<Vec<datatypes::NetworkSubnet>, Error> {
        call(self, "getFirewallProtectableSubnets", ()).await
    }

    pub async fn get_firewall_service_component(
        &self,
    ) -> Result<datatypes::NetworkComponentFirewall, Error> {
        call(self, "getFirewallServiceComponent", ()).await
    }

    pub async fn get_first_available_block_device_position(&self) -> Result<String, Error> {
        call(self, "getFirstAvailableBlockDevicePosition", ()).await
    }

    pub async fn get_frontend_network_components(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuestNetworkComponent>, Error> {
        call(self, "getFrontendNetworkComponents", ()).await
    }

    pub async fn get_frontend_routers(&self) -> Result<datatypes::Hardware, Error> {
        call(self, "getFrontendRouters", ()).await
    }

    pub async fn get_global_identifier(&self) -> Result<String, Error> {
        call(self, "getGlobalIdentifier", ()).await
    }

    pub async fn get_gpu_count(&self) -> Result<i64, Error> {
        call(self, "getGpuCount", ()).await
    }

    pub async fn get_gpu_type(&self) -> Result<String, Error> {
        call(self, "getGpuType", ()).await
    }

    pub async fn get_guest_boot_parameter(
        &self,
    ) -> Result<datatypes::VirtualGuestBootParameter, Error> {
        call(self, "getGuestBootParameter", ()).await
    }

    pub async fn get_hardware_function_description(&self) -> Result<String, Error> {
        call(self, "getHardwareFunctionDescription", ()).await
    }

    pub async fn get_host(&self) -> Result<datatypes::VirtualHost, Error> {
        call(self, "getHost", ()).await
    }

    pub async fn get_host_ips_software_component(
        &self,
    ) -> Result<datatypes::SoftwareComponent, Error> {
        call(self, "getHostIpsSoftwareComponent", ()).await
    }

    pub async fn get_hourly_billing_flag(&self) -> Result<bool, Error> {
        call(self, "getHourlyBillingFlag", ()).await
    }

    pub async fn get_inbound_private_bandwidth_usage(&self) -> Result<datatypes::Float64, Error> {
        call(self, "getInboundPrivateBandwidthUsage", ()).await
    }

    pub async fn get_inbound_public_bandwidth_usage(&self) -> Result<datatypes::Float64, Error> {
        call(self, "getInboundPublicBandwidthUsage", ()).await
    }

    pub async fn get_internal_tag_references(&self) -> Result<Vec<datatypes::TagReference>, Error> {
        call(self, "getInternalTagReferences", ()).await
    }

    pub async fn get_iso_boot_image(&self) -> Result<datatypes::VirtualDiskImage, Error> {
        call(self, "getIsoBootImage", ()).await
    }

    pub async fn get_item_prices_from_software_descriptions(
        &self,
        software_descriptions: &[datatypes::SoftwareDescription],
        include_translations_flag: bool,
        return_all_prices_flag: bool,
    ) -> Result<Vec<datatypes::ProductItem>, Error> {
        call(
            self,
            "getItemPricesFromSoftwareDescriptions",
            (software_descriptions, include_translations_flag, return_all_prices_flag),
        )
        .await
    }

    pub async fn get_last_known_power_state(
        &self,
    ) -> Result<datatypes::VirtualGuestPowerState, Error> {
        call(self, "getLastKnownPowerState", ()).await
    }

    pub async fn get_last_operating_system_reload(
        &self,
    ) -> Result<datatypes::ProvisioningVersion1Transaction, Error> {
        call(self, "getLastOperatingSystemReload", ()).await
    }

    pub async fn get_last_transaction(
        &self,
    ) -> Result<datatypes::ProvisioningVersion1Transaction, Error> {
        call(self, "getLastTransaction", ()).await
    }

    pub async fn get_latest_network_monitor_incident(
        &self,
    ) -> Result<datatypes::NetworkMonitorVersion1Incident, Error> {
        call(self, "getLatestNetworkMonitorIncident", ()).await
    }

    pub async fn get_local_disk_flag(&self) -> Result<bool, Error> {
        call(self, "getLocalDiskFlag", ()).await
    }

    pub async fn get_location(&self) -> Result<datatypes::Location, Error> {
        call(self, "getLocation", ()).await
    }

    pub async fn get_managed_resource_flag(&self) -> Result<bool, Error> {
        call(self, "getManagedResourceFlag", ()).await
    }

    pub async fn get_memory_metric_data_by_date(
        &self,
        start_date_time: datatypes::Time,
        end_date_time: datatypes::Time,
    ) -> Result<Vec<datatypes::MetricTrackingObjectData>, Error> {
        call(self, "getMemoryMetricDataByDate", (start_date_time, end_date_time)).await
    }

    pub async fn get_memory_metric_image(
        &self,
        snapshot_range: &str,
        date_specified: datatypes::Time,
    ) -> Result<datatypes::ContainerBandwidthGraphOutputs, Error> {
        call(self, "getMemoryMetricImage", (snapshot_range, date_specified)).await
    }

    pub async fn get_memory_metric_image_by_date(
        &self,
        start_date_time: datatypes::Time,
        end_date_time: datatypes::Time,
    ) -> Result<datatypes::ContainerBandwidthGraphOutputs, Error> {
        call(self, "getMemoryMetricImageByDate", (start_date_time, end_date_time)).await
    }

    pub async fn get_metric_tracking_object(
        &self,
    ) -> Result<datatypes::MetricTrackingObject, Error> {
        call(self, "getMetricTrackingObject", ()).await
    }

    pub async fn get_metric_tracking_object_id(&self) -> Result<i64, Error> {
        call(self, "getMetricTrackingObjectId", ()).await
    }

    pub async fn get_monitoring_robot(&self) -> Result<datatypes::MonitoringRobot, Error> {
        call(self, "getMonitoringRobot", ()).await
    }

    pub async fn get_monitoring_service_component(
        &self,
    ) -> Result<datatypes::NetworkMonitorVersion1QueryHostStratum, Error> {
        call(self, "getMonitoringServiceComponent", ()).await
    }

    pub async fn get_monitoring_service_eligibility_flag(&self) -> Result<bool, Error> {
        call(self, "getMonitoringServiceEligibilityFlag", ()).await
    }

    pub async fn get_monitoring_user_notification(
        &self,
    ) -> Result<Vec<datatypes::UserCustomerNotificationVirtualGuest>, Error> {
        call(self, "getMonitoringUserNotification", ()).await
    }

    pub async fn get_network_component_firewall_protectable_ip_addresses(
        &self,
    ) -> Result<Vec<datatypes::NetworkSubnetIpAddress>, Error> {
        call(self, "getNetworkComponentFirewallProtectableIpAddresses", ()).await
    }

    pub async fn get_network_components(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuestNetworkComponent>, Error> {
        call(self, "getNetworkComponents", ()).await
    }

    pub async fn get_network_monitor_incidents(
        &self,
    ) -> Result<Vec<datatypes::NetworkMonitorVersion1Incident>, Error> {
        call(self, "getNetworkMonitorIncidents", ()).await
    }

    pub async fn get_network_monitors(
        &self,
    ) -> Result<Vec<datatypes::NetworkMonitorVersion1QueryHost>, Error> {
        call(self, "getNetworkMonitors", ()).await
    }

    pub async fn get_network_storage(&self) -> Result<Vec<datatypes::NetworkStorage>, Error> {
        call(self, "getNetworkStorage", ()).await
    }

    pub async fn get_network_vlans(&self) -> Result<Vec<datatypes::NetworkVlan>, Error> {
        call(self, "getNetworkVlans", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::VirtualGuest, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_open_cancellation_ticket(&self) -> Result<datatypes::Ticket, Error> {
        call(self, "getOpenCancellationTicket", ()).await
    }

    pub async fn get_operating_system(
        &self,
    ) -> Result<datatypes::SoftwareComponentOperatingSystem, Error> {
        call(self, "getOperatingSystem", ()).await
    }

    pub async fn get_operating_system_reference_code(&self) -> Result<String, Error> {
        call(self, "getOperatingSystemReferenceCode", ()).await
    }

    /// Builds a product order for the guest's current configuration.
    pub async fn get_order_template(
        &self,
        billing_type: &str,
        order_prices: &[datatypes::ProductItemPrice],
    ) -> Result<datatypes::ContainerProductOrder, Error> {
        call(self, "getOrderTemplate", (billing_type, order_prices)).await
    }

    pub async fn get_ordered_package_id(&self) -> Result<String, Error> {
        call(self, "getOrderedPackageId", ()).await
    }

    pub async fn get_outbound_private_bandwidth_usage(&self) -> Result<datatypes::Float64, Error> {
        call(self, "getOutboundPrivateBandwidthUsage", ()).await
    }

    pub async fn get_outbound_public_bandwidth_usage(&self) -> Result<datatypes::Float64, Error> {
        call(self, "getOutboundPublicBandwidthUsage", ()).await
    }

    pub async fn get_over_bandwidth_allocation_flag(&self) -> Result<i64, Error> {
        call(self, "getOverBandwidthAllocationFlag", ()).await
    }

    pub async fn get_pending_maintenance_actions(
        &self,
    ) -> Result<Vec<datatypes::ContainerVirtualGuestPendingMaintenanceAction>, Error> {
        call(self, "getPendingMaintenanceActions", ()).await
    }

    pub async fn get_pending_migration_flag(&self) -> Result<bool, Error> {
        call(self, "getPendingMigrationFlag", ()).await
    }

    pub async fn get_placement_group(&self) -> Result<datatypes::VirtualPlacementGroup, Error> {
        call(self, "getPlacementGroup", ()).await
    }

    pub async fn get_power_state(&self) -> Result<datatypes::VirtualGuestPowerState, Error> {
        call(self, "getPowerState", ()).await
    }

    pub async fn get_primary_backend_ip_address(&self) -> Result<String, Error> {
        call(self, "getPrimaryBackendIpAddress", ()).await
    }

    pub async fn get_primary_backend_network_component(
        &self,
    ) -> Result<datatypes::VirtualGuestNetworkComponent, Error> {
        call(self, "getPrimaryBackendNetworkComponent", ()).await
    }

    pub async fn get_primary_ip_address(&self) -> Result<String, Error> {
        call(self, "getPrimaryIpAddress", ()).await
    }

    pub async fn get_primary_network_component(
        &self,
    ) -> Result<datatypes::VirtualGuestNetworkComponent, Error> {
        call(self, "getPrimaryNetworkComponent", ()).await
    }

    pub async fn get_private_network_only_flag(&self) -> Result<bool, Error> {
        call(self, "getPrivateNetworkOnlyFlag", ()).await
    }

    pub async fn get_projected_over_bandwidth_allocation_flag(&self) -> Result<i64, Error> {
        call(self, "getProjectedOverBandwidthAllocationFlag", ()).await
    }

    pub async fn get_projected_public_bandwidth_usage(&self) -> Result<datatypes::Float64, Error> {
        call(self, "getProjectedPublicBandwidthUsage", ()).await
    }

    pub async fn get_provision_date(&self) -> Result<datatypes::Time, Error> {
        call(self, "getProvisionDate", ()).await
    }

    pub async fn get_recent_events(
        &self,
    ) -> Result<Vec<datatypes::NotificationOccurrenceEvent>, Error> {
        call(self, "getRecentEvents", ()).await
    }

    /// Returns metric data from the last `time` hours.
    pub async fn get_recent_metric_data(
        &self,
        time: u64,
    ) -> Result<Vec<datatypes::MetricTrackingObject>, Error> {
        call(self, "getRecentMetricData", (time,)).await
    }

    pub async fn get_regional_group(&self) -> Result<datatypes::LocationGroupRegional, Error> {
        call(self, "getRegionalGroup", ()).await
    }

    pub async fn get_regional_internet_registry(
        &self,
    ) -> Result<datatypes::NetworkRegionalInternetRegistry, Error> {
        call(self, "getRegionalInternetRegistry", ()).await
    }

    pub async fn get_reserved_capacity_group(
        &self,
    ) -> Result<datatypes::VirtualReservedCapacityGroup, Error> {
        call(self, "getReservedCapacityGroup", ()).await
    }

    pub async fn get_reserved_capacity_group_flag(&self) -> Result<bool, Error> {
        call(self, "getReservedCapacityGroupFlag", ()).await
    }

    pub async fn get_reserved_capacity_group_instance(
        &self,
    ) -> Result<datatypes::VirtualReservedCapacityGroupInstance, Error> {
        call(self, "getReservedCapacityGroupInstance", ()).await
    }

    pub async fn get_reverse_domain_records(&self) -> Result<Vec<datatypes::DnsDomain>, Error> {
        call(self, "getReverseDomainRecords", ()).await
    }

    pub async fn get_security_scan_requests(
        &self,
    ) -> Result<Vec<datatypes::NetworkSecurityScannerRequest>, Error> {
        call(self, "getSecurityScanRequests", ()).await
    }

    pub async fn get_server_room(&self) -> Result<datatypes::Location, Error> {
        call(self, "getServerRoom", ()).await
    }

    pub async fn get_software_components(
        &self,
    ) -> Result<Vec<datatypes::SoftwareComponent>, Error> {
        call(self, "getSoftwareComponents", ()).await
    }

    pub async fn get_ssh_keys(&self) -> Result<Vec<datatypes::SecuritySshKey>, Error> {
        call(self, "getSshKeys", ()).await
    }

    pub async fn get_status(&self) -> Result<datatypes::VirtualGuestStatus, Error> {
        call(self, "getStatus", ()).await
    }

    pub async fn get_tag_references(&self) -> Result<Vec<datatypes::TagReference>, Error> {
        call(self, "getTagReferences", ()).await
    }

    pub async fn get_transient_guest_flag(&self) -> Result<bool, Error> {
        call(self, "getTransientGuestFlag", ()).await
    }

    pub async fn get_transient_webhook_uri(
        &self,
    ) -> Result<datatypes::VirtualGuestAttribute, Error> {
        call(self, "getTransientWebhookURI", ()).await
    }

    pub async fn get_type(&self) -> Result<datatypes::VirtualGuestType, Error> {
        call(self, "getType", ()).await
    }

    /// Returns the prices the guest can be upgraded (or downgraded) to.
    pub async fn get_upgrade_item_prices(
        &self,
        include_downgrade_item_prices: Option<bool>,
    ) -> Result<Vec<datatypes::ProductItemPrice>, Error> {
        call(self, "getUpgradeItemPrices", (include_downgrade_item_prices,)).await
    }

    pub async fn get_upgrade_request(&self) -> Result<datatypes::ProductUpgradeRequest, Error> {
        call(self, "getUpgradeRequest", ()).await
    }

    pub async fn get_user_data(&self) -> Result<Vec<datatypes::VirtualGuestAttribute>, Error> {
        call(self, "getUserData", ()).await
    }

    pub async fn get_users(&self) -> Result<Vec<datatypes::UserCustomer>, Error> {
        call(self, "getUsers", ()).await
    }

    pub async fn get_valid_block_device_template_groups(
        &self,
        visibility: &str,
    ) -> Result<Vec<datatypes::VirtualGuestBlockDeviceTemplateGroup>, Error> {
        call(self, "getValidBlockDeviceTemplateGroups", (visibility,)).await
    }

    pub async fn get_virtual_rack(
        &self,
    ) -> Result<datatypes::NetworkBandwidthVersion1Allotment, Error> {
        call(self, "getVirtualRack", ()).await
    }

    pub async fn get_virtual_rack_id(&self) -> Result<i64, Error> {
        call(self, "getVirtualRackId", ()).await
    }

    pub async fn get_virtual_rack_name(&self) -> Result<String, Error> {
        call(self, "getVirtualRackName", ()).await
    }

    pub async fn is_backend_pingable(&self) -> Result<bool, Error> {
        call(self, "isBackendPingable", ()).await
    }

    pub async fn is_cloud_init(&self) -> Result<bool, Error> {
        call(self, "isCloudInit", ()).await
    }

    pub async fn is_pingable(&self) -> Result<bool, Error> {
        call(self, "isPingable", ()).await
    }

    pub async fn isolate_instance_for_destructive_action(&self) -> Result<(), Error> {
        call_void(self, "isolateInstanceForDestructiveAction", ()).await
    }

    /// Moves the guest to another host.
    pub async fn migrate(&self) -> Result<datatypes::ProvisioningVersion1Transaction, Error> {
        call(self, "migrate", ()).await
    }

    /// Moves the guest to another dedicated host on the account.
    pub async fn migrate_dedicated_host(&self, destination_host_id: i64) -> Result<(), Error> {
        call_void(self, "migrateDedicatedHost", (destination_host_id,)).await
    }

    pub async fn mount_iso_image(
        &self,
        disk_image_id: i64,
    ) -> Result<datatypes::ProvisioningVersion1Transaction, Error> {
        call(self, "mountIsoImage", (disk_image_id,)).await
    }

    pub async fn pause(&self) -> Result<bool, Error> {
        call(self, "pause", ()).await
    }

    pub async fn power_cycle(&self) -> Result<bool, Error> {
        call(self, "powerCycle", ()).await
    }

    /// Powers the guest off immediately.
    pub async fn power_off(&self) -> Result<bool, Error> {
        call(self, "powerOff", ()).await
    }

    /// Asks the guest's operating system to shut down.
    pub async fn power_off_soft(&self) -> Result<bool, Error> {
        call(self, "powerOffSoft", ()).await
    }

    pub async fn power_on(&self) -> Result<bool, Error> {
        call(self, "powerOn", ()).await
    }

    /// Reboots softly, falling back to a hard reboot.
    pub async fn reboot_default(&self) -> Result<bool, Error> {
        call(self, "rebootDefault", ()).await
    }

    pub async fn reboot_hard(&self) -> Result<bool, Error> {
        call(self, "rebootHard", ()).await
    }

    pub async fn reboot_soft(&self) -> Result<bool, Error> {
        call(self, "rebootSoft", ()).await
    }

    pub async fn reconfigure_console(&self) -> Result<(), Error> {
        call_void(self, "reconfigureConsole", ()).await
    }

    /// Reloads the installed operating system with its current settings.
    pub async fn reload_current_operating_system_configuration(
        &self,
    ) -> Result<datatypes::ProvisioningVersion1Transaction, Error> {
        call(self, "reloadCurrentOperatingSystemConfiguration", ()).await
    }

    /// Reloads the operating system, wiping the primary disk.
    ///
    /// The first call (without `token`) returns a confirmation token; a second
    /// call with that token starts the reload.
    pub async fn reload_operating_system(
        &self,
        token: Option<&str>,
        config: Option<&datatypes::ContainerHardwareServerConfiguration>,
    ) -> Result<String, Error> {
        call(self, "reloadOperatingSystem", (token, config)).await
    }

    /// Revokes the guest's access to a storage volume.
    pub async fn remove_access_to_network_storage(
        &self,
        network_storage_template_object: &datatypes::NetworkStorage,
    ) -> Result<bool, Error> {
        call(self, "removeAccessToNetworkStorage", (network_storage_template_object,)).await
    }

    /// Revokes the guest's access to several storage volumes.
    pub async fn remove_access_to_network_storage_list(
        &self,
        network_storage_template_objects: &[datatypes::NetworkStorage],
    ) -> Result<bool, Error> {
        call(self, "removeAccessToNetworkStorageList", (network_storage_template_objects,)).await
    }

    /// Removes a comma separated list of tags from the guest.
    pub async fn remove_tags(&self, tags: &str) -> Result<bool, Error> {
        call(self, "removeTags", (tags,)).await
    }

    pub async fn resume(&self) -> Result<bool, Error> {
        call(self, "resume", ()).await
    }

    pub async fn send_test_reclaim_scheduled_alert(&self) -> Result<(), Error> {
        call_void(self, "sendTestReclaimScheduledAlert", ()).await
    }

    pub async fn set_private_network_interface_speed(&self, new_speed: i64) -> Result<bool, Error> {
        call(self, "setPrivateNetworkInterfaceSpeed", (new_speed,)).await
    }

    pub async fn set_public_network_interface_speed(&self, new_speed: i64) -> Result<bool, Error> {
        call(self, "setPublicNetworkInterfaceSpeed", (new_speed,)).await
    }

    /// Replaces the guest's tags with the comma separated list in `tags`.
    pub async fn set_tags(&self, tags: &str) -> Result<bool, Error> {
        call(self, "setTags", (tags,)).await
    }

    /// Registers a webhook called before a transient guest is reclaimed.
    pub async fn set_transient_webhook(&self, uri: &str, secret: &str) -> Result<(), Error> {
        call_void(self, "setTransientWebhook", (uri, secret)).await
    }

    pub async fn set_user_metadata(&self, metadata: &[&str]) -> Result<bool, Error> {
        call(self, "setUserMetadata", (metadata,)).await
    }

    /// Takes the private network interface down.
    pub async fn shutdown_private_port(&self) -> Result<bool, Error> {
        call(self, "shutdownPrivatePort", ()).await
    }

    /// Takes the public network interface down.
    pub async fn shutdown_public_port(&self) -> Result<bool, Error> {
        call(self, "shutdownPublicPort", ()).await
    }

    pub async fn unmount_iso_image(
        &self,
    ) -> Result<datatypes::ProvisioningVersion1Transaction, Error> {
        call(self, "unmountIsoImage", ()).await
    }

    /// Returns `true` if the guest can be reloaded from the image template.
    pub async fn validate_image_template(&self, image_template_id: i64) -> Result<bool, Error> {
        call(self, "validateImageTemplate", (image_template_id,)).await
    }

    pub async fn verify_reload_operating_system(
        &self,
        config: &datatypes::ContainerHardwareServerConfiguration,
    ) -> Result<bool, Error> {
        call(self, "verifyReloadOperatingSystem", (config,)).await
    }
}

service! {
    /// An image template.
    VirtualGuestBlockDeviceTemplateGroup => "SoftLayer_Virtual_Guest_Block_Device_Template_Group", get_virtual_guest_block_device_template_group_service
}

impl<S: Session> VirtualGuestBlockDeviceTemplateGroup<S> {
    pub async fn add_byol_attribute(&self) -> Result<bool, Error> {
        call(self, "addByolAttribute", ()).await
    }

    pub async fn add_cloud_init_attribute(&self) -> Result<bool, Error> {
        call(self, "addCloudInitAttribute", ()).await
    }

    /// Copies the image to more datacenters.
    pub async fn add_locations(&self, locations: &[datatypes::Location]) -> Result<bool, Error> {
        call(self, "addLocations", (locations,)).await
    }

    pub async fn add_supported_boot_mode(&self, boot_mode: &str) -> Result<bool, Error> {
        call(self, "addSupportedBootMode", (boot_mode,)).await
    }

    /// Exports the image to object storage.
    pub async fn copy_to_external_source(
        &self,
        configuration: &datatypes::ContainerVirtualGuestBlockDeviceTemplateConfiguration,
    ) -> Result<bool, Error> {
        call(self, "copyToExternalSource", (configuration,)).await
    }

    /// Exports the image to IBM Cloud Object Storage.
    pub async fn copy_to_icos(
        &self,
        configuration: &datatypes::ContainerVirtualGuestBlockDeviceTemplateConfiguration,
    ) -> Result<bool, Error> {
        call(self, "copyToIcos", (configuration,)).await
    }

    /// Imports an image from object storage.
    pub async fn create_from_external_source(
        &self,
        configuration: &datatypes::ContainerVirtualGuestBlockDeviceTemplateConfiguration,
    ) -> Result<datatypes::VirtualGuestBlockDeviceTemplateGroup, Error> {
        call(self, "createFromExternalSource", (configuration,)).await
    }

    /// Imports an image from IBM Cloud Object Storage.
    pub async fn create_from_icos(
        &self,
        configuration: &datatypes::ContainerVirtualGuestBlockDeviceTemplateConfiguration,
    ) -> Result<datatypes::VirtualGuestBlockDeviceTemplateGroup, Error> {
        call(self, "createFromIcos", (configuration,)).await
    }

    /// Publishes a copy of the image as a public image.
    pub async fn create_public_archive_transaction(
        &self,
        group_name: &str,
        summary: &str,
        note: &str,
        locations: &[datatypes::Location],
    ) -> Result<i64, Error> {
        call(self, "createPublicArchiveTransaction", (group_name, summary, note, locations)).await
    }

    pub async fn delete_byol_attribute(&self) -> Result<bool, Error> {
        call(self, "deleteByolAttribute", ()).await
    }

    pub async fn delete_cloud_init_attribute(&self) -> Result<bool, Error> {
        call(self, "deleteCloudInitAttribute", ()).await
    }

    /// Deletes the image. Removal runs as a transaction.
    pub async fn delete_object(&self) -> Result<datatypes::ProvisioningVersion1Transaction, Error> {
        call(self, "deleteObject", ()).await
    }

    pub async fn deny_sharing_access(&self, account_id: i64) -> Result<bool, Error> {
        call(self, "denySharingAccess", (account_id,)).await
    }

    pub async fn edit_object(
        &self,
        template: &datatypes::VirtualGuestBlockDeviceTemplateGroup,
    ) -> Result<bool, Error> {
        call(self, "editObject", (template,)).await
    }

    /// Returns the user's images in the given datacenters or regions.
    pub async fn find_gc_images_by_current_user(
        &self,
        data_centers: &[&str],
        regions: &[&str],
    ) -> Result<Vec<datatypes::VirtualGuestBlockDeviceTemplateGroup>, Error> {
        call(self, "findGcImagesByCurrentUser", (data_centers, regions)).await
    }

    pub async fn get_account(&self) -> Result<datatypes::Account, Error> {
        call(self, "getAccount", ()).await
    }

    pub async fn get_account_contacts(&self) -> Result<Vec<datatypes::AccountContact>, Error> {
        call(self, "getAccountContacts", ()).await
    }

    pub async fn get_account_references(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuestBlockDeviceTemplateGroupAccounts>, Error> {
        call(self, "getAccountReferences", ()).await
    }

    pub async fn get_all_available_compatible_platform_names(&self) -> Result<Vec<String>, Error> {
        call(self, "getAllAvailableCompatiblePlatformNames", ()).await
    }

    pub async fn get_block_devices(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuestBlockDeviceTemplate>, Error> {
        call(self, "getBlockDevices", ()).await
    }

    pub async fn get_block_devices_disk_space_total(&self) -> Result<datatypes::Float64, Error> {
        call(self, "getBlockDevicesDiskSpaceTotal", ()).await
    }

    pub async fn get_boot_mode(&self) -> Result<String, Error> {
        call(self, "getBootMode", ()).await
    }

    pub async fn get_byol_flag(&self) -> Result<bool, Error> {
        call(self, "getByolFlag", ()).await
    }

    pub async fn get_children(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuestBlockDeviceTemplateGroup>, Error> {
        call(self, "getChildren", ()).await
    }

    pub async fn get_current_compatible_platform_names(&self) -> Result<Vec<String>, Error> {
        call(self, "getCurrentCompatiblePlatformNames", ()).await
    }

    pub async fn get_datacenter(&self) -> Result<datatypes::Location, Error> {
        call(self, "getDatacenter", ()).await
    }

    pub async fn get_datacenters(&self) -> Result<Vec<datatypes::Location>, Error> {
        call(self, "getDatacenters", ()).await
    }

    pub async fn get_default_boot_mode(&self) -> Result<String, Error> {
        call(self, "getDefaultBootMode", ()).await
    }

    pub async fn get_encryption_attributes(&self) -> Result<Vec<String>, Error> {
        call(self, "getEncryptionAttributes", ()).await
    }

    pub async fn get_first_child(
        &self,
    ) -> Result<datatypes::VirtualGuestBlockDeviceTemplateGroup, Error> {
        call(self, "getFirstChild", ()).await
    }

    pub async fn get_flex_image_flag(&self) -> Result<bool, Error> {
        call(self, "getFlexImageFlag", ()).await
    }

    pub async fn get_global_identifier(&self) -> Result<String, Error> {
        call(self, "getGlobalIdentifier", ()).await
    }

    pub async fn get_image_type(&self) -> Result<datatypes::VirtualDiskImageType, Error> {
        call(self, "getImageType", ()).await
    }

    pub async fn get_image_type_key_name(&self) -> Result<String, Error> {
        call(self, "getImageTypeKeyName", ()).await
    }

    pub async fn get_next_gen_flag(&self) -> Result<bool, Error> {
        call(self, "getNextGenFlag", ()).await
    }

    pub async fn get_object(
        &self,
    ) -> Result<datatypes::VirtualGuestBlockDeviceTemplateGroup, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_parent(
        &self,
    ) -> Result<datatypes::VirtualGuestBlockDeviceTemplateGroup, Error> {
        call(self, "getParent", ()).await
    }

    pub async fn get_public_customer_owned_images(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuestBlockDeviceTemplateGroup>, Error> {
        call(self, "getPublicCustomerOwnedImages", ()).await
    }

    pub async fn get_public_images(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuestBlockDeviceTemplateGroup>, Error> {
        call(self, "getPublicImages", ()).await
    }

    pub async fn get_region(&self) -> Result<datatypes::NetworkServiceResource, Error> {
        call(self, "getRegion", ()).await
    }

    pub async fn get_regions(&self) -> Result<Vec<datatypes::NetworkServiceResource>, Error> {
        call(self, "getRegions", ()).await
    }

    pub async fn get_rias_account(
        &self,
        secret: &str,
    ) -> Result<datatypes::ContainerVirtualGuestBlockDeviceTemplateGroupRiasAccount, Error> {
        call(self, "getRiasAccount", (secret,)).await
    }

    pub async fn get_ssh_keys(&self) -> Result<Vec<datatypes::SecuritySshKey>, Error> {
        call(self, "getSshKeys", ()).await
    }

    pub async fn get_status(
        &self,
    ) -> Result<datatypes::VirtualGuestBlockDeviceTemplateGroupStatus, Error> {
        call(self, "getStatus", ()).await
    }

    pub async fn get_storage_locations(&self) -> Result<Vec<datatypes::Location>, Error> {
        call(self, "getStorageLocations", ()).await
    }

    pub async fn get_storage_repository(
        &self,
    ) -> Result<datatypes::VirtualStorageRepository, Error> {
        call(self, "getStorageRepository", ()).await
    }

    pub async fn get_supported_boot_modes(&self) -> Result<Vec<String>, Error> {
        call(self, "getSupportedBootModes", ()).await
    }

    pub async fn get_tag_references(&self) -> Result<Vec<datatypes::TagReference>, Error> {
        call(self, "getTagReferences", ()).await
    }

    pub async fn get_template_data_center_name(&self) -> Result<String, Error> {
        call(self, "getTemplateDataCenterName", ()).await
    }

    pub async fn get_transaction(
        &self,
    ) -> Result<datatypes::ProvisioningVersion1Transaction, Error> {
        call(self, "getTransaction", ()).await
    }

    pub async fn get_vhd_import_software_descriptions(
        &self,
    ) -> Result<Vec<datatypes::SoftwareDescription>, Error> {
        call(self, "getVhdImportSoftwareDescriptions", ()).await
    }

    pub async fn is_byol(&self) -> Result<bool, Error> {
        call(self, "isByol", ()).await
    }

    pub async fn is_byol_capable_operating_system(&self) -> Result<bool, Error> {
        call(self, "isByolCapableOperatingSystem", ()).await
    }

    pub async fn is_byol_only_operating_system(&self) -> Result<bool, Error> {
        call(self, "isByolOnlyOperatingSystem", ()).await
    }

    pub async fn is_cloud_init(&self) -> Result<bool, Error> {
        call(self, "isCloudInit", ()).await
    }

    pub async fn is_cloud_init_only_operating_system(&self) -> Result<bool, Error> {
        call(self, "isCloudInitOnlyOperatingSystem", ()).await
    }

    pub async fn is_encrypted(&self) -> Result<bool, Error> {
        call(self, "isEncrypted", ()).await
    }

    /// Shares the image with another account.
    pub async fn permit_sharing_access(&self, account_id: i64) -> Result<bool, Error> {
        call(self, "permitSharingAccess", (account_id,)).await
    }

    pub async fn remove_compatible_platforms(
        &self,
        platform_names: &[&str],
    ) -> Result<bool, Error> {
        call(self, "removeCompatiblePlatforms", (platform_names,)).await
    }

    pub async fn remove_locations(&self, locations: &[datatypes::Location]) -> Result<bool, Error> {
        call(self, "removeLocations", (locations,)).await
    }

    pub async fn remove_supported_boot_mode(&self, boot_mode: &str) -> Result<bool, Error> {
        call(self, "removeSupportedBootMode", (boot_mode,)).await
    }

    /// Replaces the datacenters the image is copied to.
    pub async fn set_available_locations(
        &self,
        locations: &[datatypes::Location],
    ) -> Result<bool, Error> {
        call(self, "setAvailableLocations", (locations,)).await
    }

    /// Sets the boot mode, `HVM` or `PV`.
    pub async fn set_boot_mode(&self, new_boot_mode: &str) -> Result<bool, Error> {
        call(self, "setBootMode", (new_boot_mode,)).await
    }

    /// Replaces the platforms the image may be provisioned on.
    pub async fn set_compatible_platforms(&self, platform_names: &[&str]) -> Result<bool, Error> {
        call(self, "setCompatiblePlatforms", (platform_names,)).await
    }

    pub async fn set_tags(&self, tags: &str) -> Result<bool, Error> {
        call(self, "setTags", (tags,)).await
    }
}

service! {
    /// A placement group: guests placed on hosts according to a rule.
    VirtualPlacementGroup => "SoftLayer_Virtual_PlacementGroup", get_virtual_placement_group_service
}

impl<S: Session> VirtualPlacementGroup<S> {
    /// Creates a placement group. `name`, `ruleId`, and `backendRouterId` are required.
    pub async fn create_object(
        &self,
        template: &datatypes::VirtualPlacementGroup,
    ) -> Result<datatypes::VirtualPlacementGroup, Error> {
        call(self, "createObject", (template,)).await
    }

    /// Deletes the group. It must have no guests.
    pub async fn delete_object(&self) -> Result<bool, Error> {
        call(self, "deleteObject", ()).await
    }

    pub async fn edit_object(
        &self,
        template: &datatypes::VirtualPlacementGroup,
    ) -> Result<bool, Error> {
        call(self, "editObject", (template,)).await
    }

    pub async fn get_account(&self) -> Result<datatypes::Account, Error> {
        call(self, "getAccount", ()).await
    }

    /// Returns the backend routers a group can be created behind.
    pub async fn get_available_routers(
        &self,
        datacenter_id: Option<i64>,
    ) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getAvailableRouters", (datacenter_id,)).await
    }

    pub async fn get_backend_router(&self) -> Result<datatypes::HardwareRouterBackend, Error> {
        call(self, "getBackendRouter", ()).await
    }

    pub async fn get_guests(&self) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getGuests", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::VirtualPlacementGroup, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_rule(&self) -> Result<datatypes::VirtualPlacementGroupRule, Error> {
        call(self, "getRule", ()).await
    }
}

service! {
    /// A dedicated host.
    VirtualDedicatedHost => "SoftLayer_Virtual_DedicatedHost", get_virtual_dedicated_host_service
}

impl<S: Session> VirtualDedicatedHost<S> {
    /// Cancels the host. It must have no guests.
    pub async fn delete_object(&self) -> Result<bool, Error> {
        call(self, "deleteObject", ()).await
    }

    pub async fn edit_object(
        &self,
        template: &datatypes::VirtualDedicatedHost,
    ) -> Result<bool, Error> {
        call(self, "editObject", (template,)).await
    }

    pub async fn get_account(&self) -> Result<datatypes::Account, Error> {
        call(self, "getAccount", ()).await
    }

    pub async fn get_allocation_status(
        &self,
    ) -> Result<datatypes::ContainerVirtualDedicatedHostAllocationStatus, Error> {
        call(self, "getAllocationStatus", ()).await
    }

    /// Returns the backend routers a host can be ordered behind.
    pub async fn get_available_routers(
        &self,
        dedicated_host: Option<&datatypes::VirtualDedicatedHost>,
    ) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getAvailableRouters", (dedicated_host,)).await
    }

    pub async fn get_backend_router(&self) -> Result<datatypes::HardwareRouterBackend, Error> {
        call(self, "getBackendRouter", ()).await
    }

    pub async fn get_billing_item(
        &self,
    ) -> Result<datatypes::BillingItemVirtualDedicatedHost, Error> {
        call(self, "getBillingItem", ()).await
    }

    pub async fn get_datacenter(&self) -> Result<datatypes::Location, Error> {
        call(self, "getDatacenter", ()).await
    }

    pub async fn get_guests(&self) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getGuests", ()).await
    }

    pub async fn get_internal_tag_references(&self) -> Result<Vec<datatypes::TagReference>, Error> {
        call(self, "getInternalTagReferences", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::VirtualDedicatedHost, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_pci_device_allocation_status(
        &self,
    ) -> Result<datatypes::ContainerVirtualDedicatedHostPciDeviceAllocationStatus, Error> {
        call(self, "getPciDeviceAllocationStatus", ()).await
    }

    pub async fn get_pci_devices(&self) -> Result<Vec<datatypes::VirtualHostPciDevice>, Error> {
        call(self, "getPciDevices", ()).await
    }

    pub async fn get_tag_references(&self) -> Result<Vec<datatypes::TagReference>, Error> {
        call(self, "getTagReferences", ()).await
    }

    pub async fn set_tags(&self, tags: &str) -> Result<bool, Error> {
        call(self, "setTags", (tags,)).await
    }
}

service! {
    /// A disk image.
    VirtualDiskImage => "SoftLayer_Virtual_Disk_Image", get_virtual_disk_image_service
}

impl<S: Session> VirtualDiskImage<S> {
    pub async fn edit_object(&self, template: &datatypes::VirtualDiskImage) -> Result<bool, Error> {
        call(self, "editObject", (template,)).await
    }

    pub async fn get_available_boot_modes(&self) -> Result<Vec<String>, Error> {
        call(self, "getAvailableBootModes", ()).await
    }

    pub async fn get_billing_item(&self) -> Result<datatypes::BillingItemVirtualDiskImage, Error> {
        call(self, "getBillingItem", ()).await
    }

    pub async fn get_block_devices(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuestBlockDevice>, Error> {
        call(self, "getBlockDevices", ()).await
    }

    pub async fn get_bootable_volume_flag(&self) -> Result<bool, Error> {
        call(self, "getBootableVolumeFlag", ()).await
    }

    pub async fn get_cloud_init_flag(&self) -> Result<bool, Error> {
        call(self, "getCloudInitFlag", ()).await
    }

    pub async fn get_coalesced_disk_images(
        &self,
    ) -> Result<Vec<datatypes::VirtualDiskImage>, Error> {
        call(self, "getCoalescedDiskImages", ()).await
    }

    pub async fn get_copy_on_write_flag(&self) -> Result<bool, Error> {
        call(self, "getCopyOnWriteFlag", ()).await
    }

    pub async fn get_disk_file_extension(&self) -> Result<String, Error> {
        call(self, "getDiskFileExtension", ()).await
    }

    pub async fn get_disk_image_storage_group(
        &self,
    ) -> Result<datatypes::ConfigurationStorageGroup, Error> {
        call(self, "getDiskImageStorageGroup", ()).await
    }

    pub async fn get_imported_disk_type(&self) -> Result<String, Error> {
        call(self, "getImportedDiskType", ()).await
    }

    pub async fn get_is_encrypted(&self) -> Result<bool, Error> {
        call(self, "getIsEncrypted", ()).await
    }

    pub async fn get_local_disk_flag(&self) -> Result<bool, Error> {
        call(self, "getLocalDiskFlag", ()).await
    }

    pub async fn get_metadata_flag(&self) -> Result<bool, Error> {
        call(self, "getMetadataFlag", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::VirtualDiskImage, Error> {
        call(self, "getObject", ()).await
    }

    /// Returns the public ISO images guests can mount.
    pub async fn get_public_iso_images(&self) -> Result<Vec<datatypes::VirtualDiskImage>, Error> {
        call(self, "getPublicIsoImages", ()).await
    }

    pub async fn get_software_references(
        &self,
    ) -> Result<Vec<datatypes::VirtualDiskImageSoftware>, Error> {
        call(self, "getSoftwareReferences", ()).await
    }

    pub async fn get_source_disk_image(&self) -> Result<datatypes::VirtualDiskImage, Error> {
        call(self, "getSourceDiskImage", ()).await
    }

    pub async fn get_storage_group_details(
        &self,
    ) -> Result<datatypes::ContainerImageStorageGroupDetails, Error> {
        call(self, "getStorageGroupDetails", ()).await
    }

    pub async fn get_storage_groups(
        &self,
    ) -> Result<Vec<datatypes::ConfigurationStorageGroup>, Error> {
        call(self, "getStorageGroups", ()).await
    }

    pub async fn get_storage_repository(
        &self,
    ) -> Result<datatypes::VirtualStorageRepository, Error> {
        call(self, "getStorageRepository", ()).await
    }

    pub async fn get_storage_repository_type(
        &self,
    ) -> Result<datatypes::VirtualStorageRepositoryType, Error> {
        call(self, "getStorageRepositoryType", ()).await
    }

    pub async fn get_supported_hardware(&self) -> Result<String, Error> {
        call(self, "getSupportedHardware", ()).await
    }

    pub async fn get_template_block_device(
        &self,
    ) -> Result<datatypes::VirtualGuestBlockDeviceTemplate, Error> {
        call(self, "getTemplateBlockDevice", ()).await
    }

    pub async fn get_type(&self) -> Result<datatypes::VirtualDiskImageType, Error> {
        call(self, "getType", ()).await
    }
}

service! {
    /// A kernel boot parameter set on a guest.
    VirtualGuestBootParameter => "SoftLayer_Virtual_Guest_Boot_Parameter", get_virtual_guest_boot_parameter_service
}

impl<S: Session> VirtualGuestBootParameter<S> {
    pub async fn create_object(
        &self,
        template: &datatypes::VirtualGuestBootParameter,
    ) -> Result<bool, Error> {
        call(self, "createObject", (template,)).await
    }

    pub async fn delete_object(&self) -> Result<bool, Error> {
        call(self, "deleteObject", ()).await
    }

    pub async fn edit_object(
        &self,
        template: &datatypes::VirtualGuestBootParameter,
    ) -> Result<bool, Error> {
        call(self, "editObject", (template,)).await
    }

    pub async fn get_guest(&self) -> Result<datatypes::VirtualGuest, Error> {
        call(self, "getGuest", ()).await
    }

    pub async fn get_guest_boot_parameter_type(
        &self,
    ) -> Result<datatypes::VirtualGuestBootParameterType, Error> {
        call(self, "getGuestBootParameterType", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::VirtualGuestBootParameter, Error> {
        call(self, "getObject", ()).await
    }
}

service! {
    /// The boot parameters a guest may carry.
    VirtualGuestBootParameterType => "SoftLayer_Virtual_Guest_Boot_Parameter_Type", get_virtual_guest_boot_parameter_type_service
}

impl<S: Session> VirtualGuestBootParameterType<S> {
    pub async fn get_all_objects(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuestBootParameterType>, Error> {
        call(self, "getAllObjects", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::VirtualGuestBootParameterType, Error> {
        call(self, "getObject", ()).await
    }
}

service! {
    /// A network interface of a virtual guest.
    VirtualGuestNetworkComponent => "SoftLayer_Virtual_Guest_Network_Component", get_virtual_guest_network_component_service
}

impl<S: Session> VirtualGuestNetworkComponent<S> {
    /// Takes the interface down.
    pub async fn disable(&self) -> Result<bool, Error> {
        call(self, "disable", ()).await
    }

    /// Brings the interface up.
    pub async fn enable(&self) -> Result<bool, Error> {
        call(self, "enable", ()).await
    }

    pub async fn get_guest(&self) -> Result<datatypes::VirtualGuest, Error> {
        call(self, "getGuest", ()).await
    }

    pub async fn get_high_availability_firewall_flag(&self) -> Result<bool, Error> {
        call(self, "getHighAvailabilityFirewallFlag", ()).await
    }

    pub async fn get_icp_binding(
        &self,
    ) -> Result<datatypes::VirtualGuestNetworkComponentIcpBinding, Error> {
        call(self, "getIcpBinding", ()).await
    }

    pub async fn get_ip_address_bindings(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuestNetworkComponentIpAddress>, Error> {
        call(self, "getIpAddressBindings", ()).await
    }

    pub async fn get_network_component_firewall(
        &self,
    ) -> Result<datatypes::NetworkComponentFirewall, Error> {
        call(self, "getNetworkComponentFirewall", ()).await
    }

    pub async fn get_network_vlan(&self) -> Result<datatypes::NetworkVlan, Error> {
        call(self, "getNetworkVlan", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::VirtualGuestNetworkComponent, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_primary_ip_address(&self) -> Result<String, Error> {
        call(self, "getPrimaryIpAddress", ()).await
    }

    pub async fn get_primary_ip_address_record(
        &self,
    ) -> Result<datatypes::NetworkSubnetIpAddress, Error> {
        call(self, "getPrimaryIpAddressRecord", ()).await
    }

    pub async fn get_primary_subnet(&self) -> Result<datatypes::NetworkSubnet, Error> {
        call(self, "getPrimarySubnet", ()).await
    }

    pub async fn get_primary_version6_ip_address_record(
        &self,
    ) -> Result<datatypes::NetworkSubnetIpAddress, Error> {
        call(self, "getPrimaryVersion6IpAddressRecord", ()).await
    }

    pub async fn get_router(&self) -> Result<datatypes::HardwareRouter, Error> {
        call(self, "getRouter", ()).await
    }

    pub async fn get_security_group_bindings(
        &self,
    ) -> Result<Vec<datatypes::VirtualNetworkSecurityGroupNetworkComponentBinding>, Error> {
        call(self, "getSecurityGroupBindings", ()).await
    }

    pub async fn get_subnets(&self) -> Result<Vec<datatypes::NetworkSubnet>, Error> {
        call(self, "getSubnets", ()).await
    }

    pub async fn is_pingable(&self) -> Result<bool, Error> {
        call(self, "isPingable", ()).await
    }

    pub async fn security_groups_ready(&self) -> Result<bool, Error> {
        call(self, "securityGroupsReady", ()).await
    }
}

service! {
    /// A hypervisor host that runs virtual guests.
    VirtualHost => "SoftLayer_Virtual_Host", get_virtual_host_service
}

impl<S: Session> VirtualHost<S> {
    pub async fn get_account(&self) -> Result<datatypes::Account, Error> {
        call(self, "getAccount", ()).await
    }

    pub async fn get_hardware(&self) -> Result<datatypes::HardwareServer, Error> {
        call(self, "getHardware", ()).await
    }

    pub async fn get_metric_tracking_object(
        &self,
    ) -> Result<datatypes::MetricTrackingObject, Error> {
        call(self, "getMetricTrackingObject", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::VirtualHost, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_pci_devices(&self) -> Result<Vec<datatypes::VirtualHostPciDevice>, Error> {
        call(self, "getPciDevices", ()).await
    }
}

service! {
    /// The spreading rules a placement group can follow.
    VirtualPlacementGroupRule => "SoftLayer_Virtual_PlacementGroup_Rule", get_virtual_placement_group_rule_service
}

impl<S: Session> VirtualPlacementGroupRule<S> {
    pub async fn get_all_objects(
        &self,
    ) -> Result<Vec<datatypes::VirtualPlacementGroupRule>, Error> {
        call(self, "getAllObjects", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::VirtualPlacementGroupRule, Error> {
        call(self, "getObject", ()).await
    }
}

service! {
    /// A block of reserved guest capacity on one backend router.
    VirtualReservedCapacityGroup => "SoftLayer_Virtual_ReservedCapacityGroup", get_virtual_reserved_capacity_group_service
}

impl<S: Session> VirtualReservedCapacityGroup<S> {
    pub async fn edit_object(
        &self,
        template: &datatypes::VirtualReservedCapacityGroup,
    ) -> Result<bool, Error> {
        call(self, "editObject", (template,)).await
    }

    pub async fn get_account(&self) -> Result<datatypes::Account, Error> {
        call(self, "getAccount", ()).await
    }

    pub async fn get_available_instances(
        &self,
    ) -> Result<Vec<datatypes::VirtualReservedCapacityGroupInstance>, Error> {
        call(self, "getAvailableInstances", ()).await
    }

    pub async fn get_backend_router(&self) -> Result<datatypes::HardwareRouterBackend, Error> {
        call(self, "getBackendRouter", ()).await
    }

    pub async fn get_instances(
        &self,
    ) -> Result<Vec<datatypes::VirtualReservedCapacityGroupInstance>, Error> {
        call(self, "getInstances", ()).await
    }

    pub async fn get_instances_count(&self) -> Result<u64, Error> {
        call(self, "getInstancesCount", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::VirtualReservedCapacityGroup, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_occupied_instances(
        &self,
    ) -> Result<Vec<datatypes::VirtualReservedCapacityGroupInstance>, Error> {
        call(self, "getOccupiedInstances", ()).await
    }
}

service! {
    /// One reserved slot within a [`VirtualReservedCapacityGroup`].
    VirtualReservedCapacityGroupInstance => "SoftLayer_Virtual_ReservedCapacityGroup_Instance", get_virtual_reserved_capacity_group_instance_service
}

impl<S: Session> VirtualReservedCapacityGroupInstance<S> {
    pub async fn get_available_flag(&self) -> Result<bool, Error> {
        call(self, "getAvailableFlag", ()).await
    }

    pub async fn get_billing_item(&self) -> Result<datatypes::BillingItem, Error> {
        call(self, "getBillingItem", ()).await
    }

    pub async fn get_guest(&self) -> Result<datatypes::VirtualGuest, Error> {
        call(self, "getGuest", ()).await
    }

    pub async fn get_object(
        &self,
    ) -> Result<datatypes::VirtualReservedCapacityGroupInstance, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_reserved_capacity_group(
        &self,
    ) -> Result<datatypes::VirtualReservedCapacityGroup, Error> {
        call(self, "getReservedCapacityGroup", ()).await
    }
}

service! {
    /// A storage repository attached to a virtual host.
    VirtualStorageRepository => "SoftLayer_Virtual_Storage_Repository", get_virtual_storage_repository_service
}

impl<S: Session> VirtualStorageRepository<S> {
    pub async fn get_account(&self) -> Result<datatypes::Account, Error> {
        call(self, "getAccount", ()).await
    }

    pub async fn get_archive_disk_usage_rate_per_gb(&self) -> Result<datatypes::Float64, Error> {
        call(self, "getArchiveDiskUsageRatePerGb", ()).await
    }

    pub async fn get_average_disk_usage_metric_data_from_influx_by_date(
        &self,
        start_date_time: datatypes::Time,
        end_date_time: datatypes::Time,
    ) -> Result<datatypes::Float64, Error> {
        call(
            self,
            "getAverageDiskUsageMetricDataFromInfluxByDate",
            (start_date_time, end_date_time),
        )
        .await
    }

    pub async fn get_average_usage_metric_data_by_date(
        &self,
        start_date_time: datatypes::Time,
        end_date_time: datatypes::Time,
    ) -> Result<datatypes::Float64, Error> {
        call(self, "getAverageUsageMetricDataByDate", (start_date_time, end_date_time)).await
    }

    pub async fn get_billing_item(&self) -> Result<datatypes::BillingItem, Error> {
        call(self, "getBillingItem", ()).await
    }

    pub async fn get_datacenter(&self) -> Result<datatypes::Location, Error> {
        call(self, "getDatacenter", ()).await
    }

    pub async fn get_disk_images(&self) -> Result<Vec<datatypes::VirtualDiskImage>, Error> {
        call(self, "getDiskImages", ()).await
    }

    pub async fn get_guests(&self) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getGuests", ()).await
    }

    pub async fn get_metric_tracking_object(
        &self,
    ) -> Result<datatypes::MetricTrackingObjectVirtualStorageRepository, Error> {
        call(self, "getMetricTrackingObject", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::VirtualStorageRepository, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_public_image_billing_item(&self) -> Result<datatypes::BillingItem, Error> {
        call(self, "getPublicImageBillingItem", ()).await
    }

    pub async fn get_public_image_disk_usage_rate_per_gb(
        &self,
    ) -> Result<datatypes::Float64, Error> {
        call(self, "getPublicImageDiskUsageRatePerGb", ()).await
    }

    pub async fn get_storage_locations(&self) -> Result<Vec<datatypes::Location>, Error> {
        call(self, "getStorageLocations", ()).await
    }

    pub async fn get_type(&self) -> Result<datatypes::VirtualStorageRepositoryType, Error> {
        call(self, "getType", ()).await
    }

    /// Returns disk usage samples between two dates.
    pub async fn get_usage_metric_data_by_date(
        &self,
        start_date_time: datatypes::Time,
        end_date_time: datatypes::Time,
    ) -> Result<Vec<datatypes::MetricTrackingObjectData>, Error> {
        call(self, "getUsageMetricDataByDate", (start_date_time, end_date_time)).await
    }

    pub async fn get_usage_metric_image_by_date(
        &self,
        start_date_time: datatypes::Time,
        end_date_time: datatypes::Time,
    ) -> Result<datatypes::ContainerBandwidthGraphOutputs, Error> {
        call(self, "getUsageMetricImageByDate", (start_date_time, end_date_time)).await
    }
}
