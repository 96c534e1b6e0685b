//! Bindings for the product catalog and ordering services.

use serde::Serialize;
use softlayer_datatypes as datatypes;

use crate::error::Error;
use crate::service::{call, service};
use crate::session::Session;

service! {
    /// Order verification and placement.
    ///
    /// Orders are passed as any serializable value so callers can send the
    /// concrete container the order needs (for example
    /// `SoftLayer_Container_Product_Order_Virtual_Guest` with its `complexType`
    /// set). [`ContainerProductOrder`](datatypes::ContainerProductOrder) covers the
    /// common fields.
    ProductOrder => "SoftLayer_Product_Order", get_product_order_service
}

impl<S: Session> ProductOrder<S> {
    /// Returns `true` if every price is available to the account.
    pub async fn check_item_availability(
        &self,
        item_prices: &[datatypes::ProductItemPrice],
        account_id: Option<i64>,
        availability_type_key_names: Option<&[&str]>,
    ) -> Result<bool, Error> {
        call(
            self,
            "checkItemAvailability",
            (item_prices, account_id, availability_type_key_names),
        )
        .await
    }

    /// Returns `true` if the items an image template needs are available.
    pub async fn check_item_availability_for_image_template(
        &self,
        image_template_id: i64,
        account_id: Option<i64>,
        package_id: Option<i64>,
        availability_type_key_names: Option<&[&str]>,
    ) -> Result<bool, Error> {
        call(
            self,
            "checkItemAvailabilityForImageTemplate",
            (image_template_id, account_id, package_id, availability_type_key_names),
        )
        .await
    }

    /// Returns `true` if the prices can be ordered together.
    pub async fn check_item_conflicts(
        &self,
        item_prices: &[datatypes::ProductItemPrice],
    ) -> Result<bool, Error> {
        call(self, "checkItemConflicts", (item_prices,)).await
    }

    pub async fn get_external_payment_authorization_receipt(
        &self,
        token: &str,
        payer_id: &str,
    ) -> Result<datatypes::ContainerProductOrderReceipt, Error> {
        call(self, "getExternalPaymentAuthorizationReceipt", (token, payer_id)).await
    }

    /// Returns the networks an order in `location_id` may be placed on.
    pub async fn get_networks(
        &self,
        location_id: i64,
        package_id: i64,
        account_id: Option<i64>,
    ) -> Result<Vec<datatypes::ContainerProductOrderNetwork>, Error> {
        call(self, "getNetworks", (location_id, package_id, account_id)).await
    }

    pub async fn get_reseller_order(
        &self,
        order: &datatypes::ContainerProductOrder,
    ) -> Result<datatypes::ContainerProductOrder, Error> {
        call(self, "getResellerOrder", (order,)).await
    }

    /// Returns the tax computed for an order hash.
    pub async fn get_tax_calculation_result(
        &self,
        order_hash: &str,
    ) -> Result<datatypes::ContainerTaxCache, Error> {
        call(self, "getTaxCalculationResult", (order_hash,)).await
    }

    /// Returns the VLANs an order for the given package and items may use.
    pub async fn get_vlans(
        &self,
        location_id: i64,
        package_id: i64,
        selected_items: &str,
        vlan_ids: &[i64],
        subnet_ids: &[i64],
        account_id: Option<i64>,
        order_container: &datatypes::ContainerProductOrder,
        hardware_firewall_ordered_flag: bool,
    ) -> Result<datatypes::ContainerProductOrderNetworkVlans, Error> {
        call(
            self,
            "getVlans",
            (
                location_id,
                package_id,
                selected_items,
                vlan_ids,
                subnet_ids,
                account_id,
                order_container,
                hardware_firewall_ordered_flag,
            ),
        )
        .await
    }

    /// Places an order.
    ///
    /// The order is verified first; a rejected order comes back as
    /// [`Error::Api`](crate::Error::Api). With `save_as_quote` set, the order is
    /// saved as a quote instead of being placed.
    pub async fn place_order(
        &self,
        order_data: &(impl Serialize + Sync),
        save_as_quote: Option<bool>,
    ) -> Result<datatypes::ContainerProductOrderReceipt, Error> {
        call(self, "placeOrder", (order_data, save_as_quote)).await
    }

    /// Saves an order as a quote.
    pub async fn place_quote(
        &self,
        order_data: &(impl Serialize + Sync),
    ) -> Result<datatypes::ContainerProductOrderReceipt, Error> {
        call(self, "placeQuote", (order_data,)).await
    }

    /// Finishes an order paid through an external processor.
    pub async fn process_external_payment_authorization(
        &self,
        token: &str,
        payer_id: &str,
    ) -> Result<datatypes::ContainerProductOrder, Error> {
        call(self, "processExternalPaymentAuthorization", (token, payer_id)).await
    }

    /// Returns the items that must be ordered alongside the given prices.
    pub async fn required_items(
        &self,
        item_prices: &[datatypes::ProductItemPrice],
    ) -> Result<Vec<datatypes::ProductItem>, Error> {
        call(self, "requiredItems", (item_prices,)).await
    }

    /// Verifies an order without placing it.
    ///
    /// Returns the order as it would be placed, with prices and totals filled
    /// in.
    pub async fn verify_order(
        &self,
        order_data: &(impl Serialize + Sync),
    ) -> Result<datatypes::ContainerProductOrder, Error> {
        call(self, "verifyOrder", (order_data,)).await
    }
}

service! {
    /// A product package: the catalog of items and presets that can be ordered
    /// together.
    ProductPackage => "SoftLayer_Product_Package", get_product_package_service
}

impl<S: Session> ProductPackage<S> {
    pub async fn get_account_restricted_active_presets(
        &self,
    ) -> Result<Vec<datatypes::ProductPackagePreset>, Error> {
        call(self, "getAccountRestrictedActivePresets", ()).await
    }

    pub async fn get_account_restricted_categories(
        &self,
    ) -> Result<Vec<datatypes::ProductItemCategory>, Error> {
        call(self, "getAccountRestrictedCategories", ()).await
    }

    pub async fn get_account_restricted_prices_flag(&self) -> Result<bool, Error> {
        call(self, "getAccountRestrictedPricesFlag", ()).await
    }

    pub async fn get_active_items(&self) -> Result<Vec<datatypes::ProductItem>, Error> {
        call(self, "getActiveItems", ()).await
    }

    pub async fn get_active_packages_by_attribute(
        &self,
        attribute_key_name: &str,
    ) -> Result<Vec<datatypes::ProductPackage>, Error> {
        call(self, "getActivePackagesByAttribute", (attribute_key_name,)).await
    }

    pub async fn get_active_presets(&self) -> Result<Vec<datatypes::ProductPackagePreset>, Error> {
        call(self, "getActivePresets", ()).await
    }

    pub async fn get_active_private_hosted_cloud_packages(
        &self,
    ) -> Result<Vec<datatypes::ProductPackage>, Error> {
        call(self, "getActivePrivateHostedCloudPackages", ()).await
    }

    pub async fn get_active_ram_items(&self) -> Result<Vec<datatypes::ProductItem>, Error> {
        call(self, "getActiveRamItems", ()).await
    }

    pub async fn get_active_server_items(&self) -> Result<Vec<datatypes::ProductItem>, Error> {
        call(self, "getActiveServerItems", ()).await
    }

    pub async fn get_active_software_items(&self) -> Result<Vec<datatypes::ProductItem>, Error> {
        call(self, "getActiveSoftwareItems", ()).await
    }

    pub async fn get_active_usage_prices(&self) -> Result<Vec<datatypes::ProductItemPrice>, Error> {
        call(self, "getActiveUsagePrices", ()).await
    }

    /// Returns the usage rate prices active in a location.
    pub async fn get_active_usage_rate_prices(
        &self,
        location_id: i64,
        category_code: Option<&str>,
    ) -> Result<Vec<datatypes::ProductItemPrice>, Error> {
        call(self, "getActiveUsageRatePrices", (location_id, category_code)).await
    }

    pub async fn get_additional_service_flag(&self) -> Result<bool, Error> {
        call(self, "getAdditionalServiceFlag", ()).await
    }

    /// Returns every package. Use a mask and filter; the list is large.
    pub async fn get_all_objects(&self) -> Result<Vec<datatypes::ProductPackage>, Error> {
        call(self, "getAllObjects", ()).await
    }

    pub async fn get_attributes(&self) -> Result<Vec<datatypes::ProductPackageAttribute>, Error> {
        call(self, "getAttributes", ()).await
    }

    pub async fn get_available_locations(
        &self,
    ) -> Result<Vec<datatypes::ProductPackageLocations>, Error> {
        call(self, "getAvailableLocations", ()).await
    }

    /// Returns the packages an image template can be provisioned with.
    pub async fn get_available_packages_for_image_template(
        &self,
        image_template: &datatypes::VirtualGuestBlockDeviceTemplateGroup,
    ) -> Result<Vec<datatypes::ProductPackage>, Error> {
        call(self, "getAvailablePackagesForImageTemplate", (image_template,)).await
    }

    pub async fn get_available_storage_units(&self) -> Result<u64, Error> {
        call(self, "getAvailableStorageUnits", ()).await
    }

    pub async fn get_categories(&self) -> Result<Vec<datatypes::ProductItemCategory>, Error> {
        call(self, "getCategories", ()).await
    }

    pub async fn get_cdn_items(&self) -> Result<Vec<datatypes::ProductItem>, Error> {
        call(self, "getCdnItems", ()).await
    }

    pub async fn get_cloud_storage_items(
        &self,
        provider: i64,
    ) -> Result<Vec<datatypes::ProductItem>, Error> {
        call(self, "getCloudStorageItems", (provider,)).await
    }

    pub async fn get_configuration(
        &self,
    ) -> Result<Vec<datatypes::ProductPackageOrderConfiguration>, Error> {
        call(self, "getConfiguration", ()).await
    }

    pub async fn get_default_boot_category_code(&self) -> Result<String, Error> {
        call(self, "getDefaultBootCategoryCode", ()).await
    }

    pub async fn get_default_ram_items(&self) -> Result<Vec<datatypes::ProductItem>, Error> {
        call(self, "getDefaultRamItems", ()).await
    }

    pub async fn get_deployment_node_type(&self) -> Result<String, Error> {
        call(self, "getDeploymentNodeType", ()).await
    }

    pub async fn get_deployment_packages(&self) -> Result<Vec<datatypes::ProductPackage>, Error> {
        call(self, "getDeploymentPackages", ()).await
    }

    pub async fn get_deployment_type(&self) -> Result<String, Error> {
        call(self, "getDeploymentType", ()).await
    }

    pub async fn get_deployments(&self) -> Result<Vec<datatypes::ProductPackage>, Error> {
        call(self, "getDeployments", ()).await
    }

    pub async fn get_disallow_custom_disk_partitions(&self) -> Result<bool, Error> {
        call(self, "getDisallowCustomDiskPartitions", ()).await
    }

    pub async fn get_first_order_step(&self) -> Result<datatypes::ProductPackageOrderStep, Error> {
        call(self, "getFirstOrderStep", ()).await
    }

    pub async fn get_gateway_appliance_flag(&self) -> Result<bool, Error> {
        call(self, "getGatewayApplianceFlag", ()).await
    }

    pub async fn get_gpu_flag(&self) -> Result<bool, Error> {
        call(self, "getGpuFlag", ()).await
    }

    pub async fn get_hourly_billing_available_flag(&self) -> Result<bool, Error> {
        call(self, "getHourlyBillingAvailableFlag", ()).await
    }

    pub async fn get_hourly_only_orders(&self) -> Result<bool, Error> {
        call(self, "getHourlyOnlyOrders", ()).await
    }

    pub async fn get_item_availability_types(
        &self,
    ) -> Result<Vec<datatypes::ProductItemAttributeType>, Error> {
        call(self, "getItemAvailabilityTypes", ()).await
    }

    pub async fn get_item_conflicts(
        &self,
    ) -> Result<Vec<datatypes::ProductItemResourceConflict>, Error> {
        call(self, "getItemConflicts", ()).await
    }

    pub async fn get_item_location_conflicts(
        &self,
    ) -> Result<Vec<datatypes::ProductItemResourceConflict>, Error> {
        call(self, "getItemLocationConflicts", ()).await
    }

    pub async fn get_item_price_references(
        &self,
    ) -> Result<Vec<datatypes::ProductPackageItemPrices>, Error> {
        call(self, "getItemPriceReferences", ()).await
    }

    pub async fn get_item_prices(&self) -> Result<Vec<datatypes::ProductItemPrice>, Error> {
        call(self, "getItemPrices", ()).await
    }

    pub async fn get_item_prices_from_software_descriptions(
        &self,
        software_descriptions: &[datatypes::SoftwareDescription],
        include_translations_flag: bool,
        return_all_prices_flag: bool,
    ) -> Result<Vec<datatypes::ProductItemPrice>, Error> {
        call(
            self,
            "getItemPricesFromSoftwareDescriptions",
            (software_descriptions, include_translations_flag, return_all_prices_flag),
        )
        .await
    }

    pub async fn get_items(&self) -> Result<Vec<datatypes::ProductItem>, Error> {
        call(self, "getItems", ()).await
    }

    /// Returns the package items that match what an image template was built from.
    pub async fn get_items_from_image_template(
        &self,
        image_template: &datatypes::VirtualGuestBlockDeviceTemplateGroup,
    ) -> Result<Vec<datatypes::ProductItem>, Error> {
        call(self, "getItemsFromImageTemplate", (image_template,)).await
    }

    pub async fn get_locations(&self) -> Result<Vec<datatypes::Location>, Error> {
        call(self, "getLocations", ()).await
    }

    pub async fn get_lowest_server_price(&self) -> Result<datatypes::ProductItemPrice, Error> {
        call(self, "getLowestServerPrice", ()).await
    }

    pub async fn get_maximum_port_speed(&self) -> Result<u64, Error> {
        call(self, "getMaximumPortSpeed", ()).await
    }

    pub async fn get_message_queue_items(&self) -> Result<Vec<datatypes::ProductItem>, Error> {
        call(self, "getMessageQueueItems", ()).await
    }

    pub async fn get_minimum_port_speed(&self) -> Result<u64, Error> {
        call(self, "getMinimumPortSpeed", ()).await
    }

    pub async fn get_mongo_db_engineered_flag(&self) -> Result<bool, Error> {
        call(self, "getMongoDbEngineeredFlag", ()).await
    }

    pub async fn get_no_upgrades_flag(&self) -> Result<bool, Error> {
        call(self, "getNoUpgradesFlag", ()).await
    }

    pub async fn get_non_eu_compliant_flag(&self) -> Result<bool, Error> {
        call(self, "getNonEuCompliantFlag", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::ProductPackage, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_object_storage_datacenters(
        &self,
    ) -> Result<Vec<datatypes::ContainerProductOrderNetworkStorageHubDatacenter>, Error> {
        call(self, "getObjectStorageDatacenters", ()).await
    }

    pub async fn get_object_storage_location_groups(
        &self,
    ) -> Result<Vec<datatypes::ContainerProductOrderNetworkStorageObjectStorageLocationGroup>, Error> {
        call(self, "getObjectStorageLocationGroups", ()).await
    }

    pub async fn get_order_premiums(
        &self,
    ) -> Result<Vec<datatypes::ProductItemPricePremium>, Error> {
        call(self, "getOrderPremiums", ()).await
    }

    pub async fn get_pop_location_availability_flag(&self) -> Result<bool, Error> {
        call(self, "getPopLocationAvailabilityFlag", ()).await
    }

    pub async fn get_preconfigured_flag(&self) -> Result<bool, Error> {
        call(self, "getPreconfiguredFlag", ()).await
    }

    pub async fn get_preset_configuration_required_flag(&self) -> Result<bool, Error> {
        call(self, "getPresetConfigurationRequiredFlag", ()).await
    }

    pub async fn get_prevent_vlan_selection_flag(&self) -> Result<bool, Error> {
        call(self, "getPreventVlanSelectionFlag", ()).await
    }

    pub async fn get_private_hosted_cloud_package_flag(&self) -> Result<bool, Error> {
        call(self, "getPrivateHostedCloudPackageFlag", ()).await
    }

    pub async fn get_private_hosted_cloud_package_type(&self) -> Result<String, Error> {
        call(self, "getPrivateHostedCloudPackageType", ()).await
    }

    pub async fn get_private_network_only_flag(&self) -> Result<bool, Error> {
        call(self, "getPrivateNetworkOnlyFlag", ()).await
    }

    pub async fn get_quanta_stor_package_flag(&self) -> Result<bool, Error> {
        call(self, "getQuantaStorPackageFlag", ()).await
    }

    pub async fn get_raid_disk_restriction_flag(&self) -> Result<bool, Error> {
        call(self, "getRaidDiskRestrictionFlag", ()).await
    }

    pub async fn get_redundant_power_flag(&self) -> Result<bool, Error> {
        call(self, "getRedundantPowerFlag", ()).await
    }

    pub async fn get_regions(&self) -> Result<Vec<datatypes::LocationRegion>, Error> {
        call(self, "getRegions", ()).await
    }

    pub async fn get_standard_categories(
        &self,
    ) -> Result<Vec<datatypes::ProductItemCategory>, Error> {
        call(self, "getStandardCategories", ()).await
    }

    pub async fn get_top_level_item_category_code(&self) -> Result<String, Error> {
        call(self, "getTopLevelItemCategoryCode", ()).await
    }

    pub async fn get_type(&self) -> Result<datatypes::ProductPackageType, Error> {
        call(self, "getType", ()).await
    }
}

service! {
    /// An orderable product item.
    ProductItem => "SoftLayer_Product_Item", get_product_item_service
}

impl<S: Session> ProductItem<S> {
    pub async fn get_active_presale_events(
        &self,
    ) -> Result<Vec<datatypes::SalesPresaleEvent>, Error> {
        call(self, "getActivePresaleEvents", ()).await
    }

    pub async fn get_active_usage_prices(&self) -> Result<Vec<datatypes::ProductItemPrice>, Error> {
        call(self, "getActiveUsagePrices", ()).await
    }

    pub async fn get_attributes(&self) -> Result<Vec<datatypes::ProductItemAttribute>, Error> {
        call(self, "getAttributes", ()).await
    }

    pub async fn get_availability_attributes(
        &self,
    ) -> Result<Vec<datatypes::ProductItemAttribute>, Error> {
        call(self, "getAvailabilityAttributes", ()).await
    }

    pub async fn get_billing_type(&self) -> Result<String, Error> {
        call(self, "getBillingType", ()).await
    }

    pub async fn get_bundle(&self) -> Result<Vec<datatypes::ProductItemBundles>, Error> {
        call(self, "getBundle", ()).await
    }

    pub async fn get_bundle_items(&self) -> Result<Vec<datatypes::ProductItem>, Error> {
        call(self, "getBundleItems", ()).await
    }

    pub async fn get_capacity_maximum(&self) -> Result<String, Error> {
        call(self, "getCapacityMaximum", ()).await
    }

    pub async fn get_capacity_minimum(&self) -> Result<String, Error> {
        call(self, "getCapacityMinimum", ()).await
    }

    pub async fn get_capacity_restricted_product_flag(&self) -> Result<bool, Error> {
        call(self, "getCapacityRestrictedProductFlag", ()).await
    }

    pub async fn get_categories(&self) -> Result<Vec<datatypes::ProductItemCategory>, Error> {
        call(self, "getCategories", ()).await
    }

    pub async fn get_configuration_templates(
        &self,
    ) -> Result<Vec<datatypes::ConfigurationTemplate>, Error> {
        call(self, "getConfigurationTemplates", ()).await
    }

    pub async fn get_conflicts(
        &self,
    ) -> Result<Vec<datatypes::ProductItemResourceConflict>, Error> {
        call(self, "getConflicts", ()).await
    }

    pub async fn get_core_restricted_item_flag(&self) -> Result<bool, Error> {
        call(self, "getCoreRestrictedItemFlag", ()).await
    }

    pub async fn get_downgrade_item(&self) -> Result<datatypes::ProductItem, Error> {
        call(self, "getDowngradeItem", ()).await
    }

    pub async fn get_downgrade_items(&self) -> Result<Vec<datatypes::ProductItem>, Error> {
        call(self, "getDowngradeItems", ()).await
    }

    pub async fn get_global_category_conflicts(
        &self,
    ) -> Result<Vec<datatypes::ProductItemResourceConflict>, Error> {
        call(self, "getGlobalCategoryConflicts", ()).await
    }

    pub async fn get_hardware_generic_component_model(
        &self,
    ) -> Result<datatypes::HardwareComponentModelGeneric, Error> {
        call(self, "getHardwareGenericComponentModel", ()).await
    }

    pub async fn get_hide_from_portal_flag(&self) -> Result<bool, Error> {
        call(self, "getHideFromPortalFlag", ()).await
    }

    pub async fn get_ineligible_for_account_discount_flag(&self) -> Result<bool, Error> {
        call(self, "getIneligibleForAccountDiscountFlag", ()).await
    }

    pub async fn get_inventory(&self) -> Result<Vec<datatypes::ProductPackageInventory>, Error> {
        call(self, "getInventory", ()).await
    }

    pub async fn get_is_engineered_server_product(&self) -> Result<bool, Error> {
        call(self, "getIsEngineeredServerProduct", ()).await
    }

    pub async fn get_item_category(&self) -> Result<datatypes::ProductItemCategory, Error> {
        call(self, "getItemCategory", ()).await
    }

    pub async fn get_local_disk_flag(&self) -> Result<bool, Error> {
        call(self, "getLocalDiskFlag", ()).await
    }

    pub async fn get_location_conflicts(
        &self,
    ) -> Result<Vec<datatypes::ProductItemResourceConflict>, Error> {
        call(self, "getLocationConflicts", ()).await
    }

    pub async fn get_m2_controller_flag(&self) -> Result<bool, Error> {
        call(self, "getM2ControllerFlag", ()).await
    }

    pub async fn get_m2_drive_flag(&self) -> Result<bool, Error> {
        call(self, "getM2DriveFlag", ()).await
    }

    pub async fn get_minimum_nvme_bays(&self) -> Result<i64, Error> {
        call(self, "getMinimumNvmeBays", ()).await
    }

    pub async fn get_nvme_disk_flag(&self) -> Result<bool, Error> {
        call(self, "getNvmeDiskFlag", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::ProductItem, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_object_storage_cluster_geolocation_type(&self) -> Result<String, Error> {
        call(self, "getObjectStorageClusterGeolocationType", ()).await
    }

    pub async fn get_object_storage_item_flag(&self) -> Result<bool, Error> {
        call(self, "getObjectStorageItemFlag", ()).await
    }

    pub async fn get_object_storage_service_class(&self) -> Result<String, Error> {
        call(self, "getObjectStorageServiceClass", ()).await
    }

    pub async fn get_packages(&self) -> Result<Vec<datatypes::ProductPackage>, Error> {
        call(self, "getPackages", ()).await
    }

    pub async fn get_pcie_drive_flag(&self) -> Result<bool, Error> {
        call(self, "getPcieDriveFlag", ()).await
    }

    pub async fn get_physical_core_capacity(&self) -> Result<String, Error> {
        call(self, "getPhysicalCoreCapacity", ()).await
    }

    pub async fn get_presale_events(&self) -> Result<Vec<datatypes::SalesPresaleEvent>, Error> {
        call(self, "getPresaleEvents", ()).await
    }

    pub async fn get_prices(&self) -> Result<Vec<datatypes::ProductItemPrice>, Error> {
        call(self, "getPrices", ()).await
    }

    pub async fn get_private_interface_count(&self) -> Result<u64, Error> {
        call(self, "getPrivateInterfaceCount", ()).await
    }

    pub async fn get_public_interface_count(&self) -> Result<u64, Error> {
        call(self, "getPublicInterfaceCount", ()).await
    }

    pub async fn get_requirements(&self) -> Result<Vec<datatypes::ProductItemRequirement>, Error> {
        call(self, "getRequirements", ()).await
    }

    pub async fn get_rules(&self) -> Result<Vec<datatypes::ProductItemRule>, Error> {
        call(self, "getRules", ()).await
    }

    pub async fn get_software_description(&self) -> Result<datatypes::SoftwareDescription, Error> {
        call(self, "getSoftwareDescription", ()).await
    }

    pub async fn get_speed_select_server_core_count(&self) -> Result<String, Error> {
        call(self, "getSpeedSelectServerCoreCount", ()).await
    }

    pub async fn get_speed_select_server_flag(&self) -> Result<bool, Error> {
        call(self, "getSpeedSelectServerFlag", ()).await
    }

    pub async fn get_tax_category(&self) -> Result<datatypes::ProductItemTaxCategory, Error> {
        call(self, "getTaxCategory", ()).await
    }

    pub async fn get_third_party_policy_assignments(
        &self,
    ) -> Result<Vec<datatypes::ProductItemPolicyAssignment>, Error> {
        call(self, "getThirdPartyPolicyAssignments", ()).await
    }

    pub async fn get_third_party_support_vendor(&self) -> Result<String, Error> {
        call(self, "getThirdPartySupportVendor", ()).await
    }

    pub async fn get_total_physical_core_capacity(&self) -> Result<i64, Error> {
        call(self, "getTotalPhysicalCoreCapacity", ()).await
    }

    pub async fn get_total_physical_core_count(&self) -> Result<i64, Error> {
        call(self, "getTotalPhysicalCoreCount", ()).await
    }

    pub async fn get_total_processor_capacity(&self) -> Result<i64, Error> {
        call(self, "getTotalProcessorCapacity", ()).await
    }

    pub async fn get_upgrade_item(&self) -> Result<datatypes::ProductItem, Error> {
        call(self, "getUpgradeItem", ()).await
    }

    pub async fn get_upgrade_items(&self) -> Result<Vec<datatypes::ProductItem>, Error> {
        call(self, "getUpgradeItems", ()).await
    }
}

service! {
    /// A price for a product item.
    ProductItemPrice => "SoftLayer_Product_Item_Price", get_product_item_price_service
}

impl<S: Session> ProductItemPrice<S> {
    pub async fn get_account_restrictions(
        &self,
    ) -> Result<Vec<datatypes::ProductItemPriceAccountRestriction>, Error> {
        call(self, "getAccountRestrictions", ()).await
    }

    pub async fn get_attributes(&self) -> Result<Vec<datatypes::ProductItemPriceAttribute>, Error> {
        call(self, "getAttributes", ()).await
    }

    pub async fn get_bare_metal_reserved_capacity_flag(&self) -> Result<bool, Error> {
        call(self, "getBareMetalReservedCapacityFlag", ()).await
    }

    pub async fn get_big_data_os_journal_disk_flag(&self) -> Result<bool, Error> {
        call(self, "getBigDataOsJournalDiskFlag", ()).await
    }

    pub async fn get_bundle_references(&self) -> Result<Vec<datatypes::ProductItemBundles>, Error> {
        call(self, "getBundleReferences", ()).await
    }

    pub async fn get_capacity_restriction_maximum(&self) -> Result<String, Error> {
        call(self, "getCapacityRestrictionMaximum", ()).await
    }

    pub async fn get_capacity_restriction_minimum(&self) -> Result<String, Error> {
        call(self, "getCapacityRestrictionMinimum", ()).await
    }

    pub async fn get_capacity_restriction_type(&self) -> Result<String, Error> {
        call(self, "getCapacityRestrictionType", ()).await
    }

    pub async fn get_categories(&self) -> Result<Vec<datatypes::ProductItemCategory>, Error> {
        call(self, "getCategories", ()).await
    }

    pub async fn get_dedicated_host_instance_flag(&self) -> Result<bool, Error> {
        call(self, "getDedicatedHostInstanceFlag", ()).await
    }

    pub async fn get_defined_software_license_flag(&self) -> Result<bool, Error> {
        call(self, "getDefinedSoftwareLicenseFlag", ()).await
    }

    pub async fn get_eligibility_strategy(&self) -> Result<String, Error> {
        call(self, "getEligibilityStrategy", ()).await
    }

    pub async fn get_item(&self) -> Result<datatypes::ProductItem, Error> {
        call(self, "getItem", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::ProductItemPrice, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_order_premiums(
        &self,
    ) -> Result<Vec<datatypes::ProductItemPricePremium>, Error> {
        call(self, "getOrderPremiums", ()).await
    }

    pub async fn get_package_references(
        &self,
    ) -> Result<Vec<datatypes::ProductPackageItemPrices>, Error> {
        call(self, "getPackageReferences", ()).await
    }

    pub async fn get_packages(&self) -> Result<Vec<datatypes::ProductPackage>, Error> {
        call(self, "getPackages", ()).await
    }

    pub async fn get_preset_configurations(
        &self,
    ) -> Result<Vec<datatypes::ProductPackagePresetConfiguration>, Error> {
        call(self, "getPresetConfigurations", ()).await
    }

    /// Returns the price type, e.g. `STANDARD`.
    pub async fn get_price_type(&self) -> Result<String, Error> {
        call(self, "getPriceType", ()).await
    }

    pub async fn get_pricing_location_group(
        &self,
    ) -> Result<datatypes::LocationGroupPricing, Error> {
        call(self, "getPricingLocationGroup", ()).await
    }

    /// Returns the core count a software license price requires.
    pub async fn get_required_core_count(&self) -> Result<i64, Error> {
        call(self, "getRequiredCoreCount", ()).await
    }

    pub async fn get_reserved_capacity_instance_flag(&self) -> Result<bool, Error> {
        call(self, "getReservedCapacityInstanceFlag", ()).await
    }

    /// Returns the usage rate prices for `items` in `location`.
    pub async fn get_usage_rate_prices(
        &self,
        location: &datatypes::Location,
        items: &[datatypes::ProductItem],
    ) -> Result<Vec<datatypes::ProductItemPrice>, Error> {
        call(self, "getUsageRatePrices", (location, items)).await
    }
}

service! {
    /// A category items are ordered under.
    ProductItemCategory => "SoftLayer_Product_Item_Category", get_product_item_category_service
}

impl<S: Session> ProductItemCategory<S> {
    pub async fn get_additional_products_for_category(
        &self,
    ) -> Result<Vec<datatypes::ProductItem>, Error> {
        call(self, "getAdditionalProductsForCategory", ()).await
    }

    pub async fn get_bandwidth_categories(
        &self,
    ) -> Result<Vec<datatypes::ProductItemCategory>, Error> {
        call(self, "getBandwidthCategories", ()).await
    }

    pub async fn get_billing_items(&self) -> Result<Vec<datatypes::BillingItem>, Error> {
        call(self, "getBillingItems", ()).await
    }

    pub async fn get_computing_categories(
        &self,
        reset_cache: Option<bool>,
    ) -> Result<Vec<datatypes::ProductItemCategory>, Error> {
        call(self, "getComputingCategories", (reset_cache,)).await
    }

    pub async fn get_custom_usage_rates_categories(
        &self,
        reset_cache: Option<bool>,
    ) -> Result<Vec<datatypes::ProductItemCategory>, Error> {
        call(self, "getCustomUsageRatesCategories", (reset_cache,)).await
    }

    pub async fn get_external_resource_categories(
        &self,
    ) -> Result<Vec<datatypes::ProductItemCategory>, Error> {
        call(self, "getExternalResourceCategories", ()).await
    }

    pub async fn get_group(&self) -> Result<datatypes::ProductItemCategoryGroup, Error> {
        call(self, "getGroup", ()).await
    }

    pub async fn get_groups(
        &self,
    ) -> Result<Vec<datatypes::ProductPackageItemCategoryGroup>, Error> {
        call(self, "getGroups", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::ProductItemCategory, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_object_storage_categories(
        &self,
        reset_cache: Option<bool>,
    ) -> Result<Vec<datatypes::ProductItemCategory>, Error> {
        call(self, "getObjectStorageCategories", (reset_cache,)).await
    }

    pub async fn get_order_options(
        &self,
    ) -> Result<Vec<datatypes::ProductItemCategoryOrderOptionType>, Error> {
        call(self, "getOrderOptions", ()).await
    }

    pub async fn get_package_configurations(
        &self,
    ) -> Result<Vec<datatypes::ProductPackageOrderConfiguration>, Error> {
        call(self, "getPackageConfigurations", ()).await
    }

    pub async fn get_preset_configurations(
        &self,
    ) -> Result<Vec<datatypes::ProductPackagePresetConfiguration>, Error> {
        call(self, "getPresetConfigurations", ()).await
    }

    pub async fn get_question_references(
        &self,
    ) -> Result<Vec<datatypes::ProductItemCategoryQuestionXref>, Error> {
        call(self, "getQuestionReferences", ()).await
    }

    pub async fn get_questions(
        &self,
    ) -> Result<Vec<datatypes::ProductItemCategoryQuestion>, Error> {
        call(self, "getQuestions", ()).await
    }

    pub async fn get_software_categories(
        &self,
    ) -> Result<Vec<datatypes::ProductItemCategory>, Error> {
        call(self, "getSoftwareCategories", ()).await
    }

    pub async fn get_subnet_categories(
        &self,
    ) -> Result<Vec<datatypes::ProductItemCategory>, Error> {
        call(self, "getSubnetCategories", ()).await
    }

    /// Returns the categories that are not nested under another category.
    pub async fn get_top_level_categories(
        &self,
        reset_cache: Option<bool>,
    ) -> Result<Vec<datatypes::ProductItemCategory>, Error> {
        call(self, "getTopLevelCategories", (reset_cache,)).await
    }

    pub async fn get_valid_cancelable_service_item_categories(
        &self,
    ) -> Result<Vec<datatypes::ProductItemCategory>, Error> {
        call(self, "getValidCancelableServiceItemCategories", ()).await
    }

    pub async fn get_vlan_categories(&self) -> Result<Vec<datatypes::ProductItemCategory>, Error> {
        call(self, "getVlanCategories", ()).await
    }
}

service! {
    /// A grouping of item categories shown together when ordering.
    ProductItemCategoryGroup => "SoftLayer_Product_Item_Category_Group", get_product_item_category_group_service
}

impl<S: Session> ProductItemCategoryGroup<S> {
    pub async fn get_object(&self) -> Result<datatypes::ProductItemCategoryGroup, Error> {
        call(self, "getObject", ()).await
    }
}

service! {
    /// A policy document the account must accept before it can order an item.
    ProductItemPolicyAssignment => "SoftLayer_Product_Item_Policy_Assignment", get_product_item_policy_assignment_service
}

impl<S: Session> ProductItemPolicyAssignment<S> {
    /// Accepts the policy on behalf of the account through a ticket.
    pub async fn accept_from_ticket(&self, ticket_id: i64) -> Result<bool, Error> {
        call(self, "acceptFromTicket", (ticket_id,)).await
    }

    pub async fn get_object(&self) -> Result<datatypes::ProductItemPolicyAssignment, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_policy_document_contents(&self) -> Result<datatypes::Bytes, Error> {
        call(self, "getPolicyDocumentContents", ()).await
    }

    pub async fn get_policy_name(&self) -> Result<String, Error> {
        call(self, "getPolicyName", ()).await
    }

    pub async fn get_product(&self) -> Result<datatypes::ProductItem, Error> {
        call(self, "getProduct", ()).await
    }
}

service! {
    /// A premium surcharge applied to an item price in some locations.
    ProductItemPricePremium => "SoftLayer_Product_Item_Price_Premium", get_product_item_price_premium_service
}

impl<S: Session> ProductItemPricePremium<S> {
    pub async fn get_item_price(&self) -> Result<datatypes::ProductItemPrice, Error> {
        call(self, "getItemPrice", ()).await
    }

    pub async fn get_location(&self) -> Result<datatypes::Location, Error> {
        call(self, "getLocation", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::ProductItemPricePremium, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_package(&self) -> Result<datatypes::ProductPackage, Error> {
        call(self, "getPackage", ()).await
    }
}

service! {
    /// A pre-configured set of item prices within a package.
    ProductPackagePreset => "SoftLayer_Product_Package_Preset", get_product_package_preset_service
}

impl<S: Session> ProductPackagePreset<S> {
    pub async fn get_all_objects(&self) -> Result<Vec<datatypes::ProductPackagePreset>, Error> {
        call(self, "getAllObjects", ()).await
    }

    pub async fn get_available_storage_units(&self) -> Result<u64, Error> {
        call(self, "getAvailableStorageUnits", ()).await
    }

    pub async fn get_bare_metal_reserved_flag(&self) -> Result<bool, Error> {
        call(self, "getBareMetalReservedFlag", ()).await
    }

    pub async fn get_categories(&self) -> Result<Vec<datatypes::ProductItemCategory>, Error> {
        call(self, "getCategories", ()).await
    }

    pub async fn get_compute_group(&self) -> Result<datatypes::ProductItemServerGroup, Error> {
        call(self, "getComputeGroup", ()).await
    }

    pub async fn get_configuration(
        &self,
    ) -> Result<Vec<datatypes::ProductPackagePresetConfiguration>, Error> {
        call(self, "getConfiguration", ()).await
    }

    pub async fn get_disallowed_compute_group_upgrade_flag(&self) -> Result<bool, Error> {
        call(self, "getDisallowedComputeGroupUpgradeFlag", ()).await
    }

    pub async fn get_fixed_configuration_flag(&self) -> Result<bool, Error> {
        call(self, "getFixedConfigurationFlag", ()).await
    }

    pub async fn get_locations(&self) -> Result<Vec<datatypes::Location>, Error> {
        call(self, "getLocations", ()).await
    }

    pub async fn get_lowest_preset_server_price(
        &self,
    ) -> Result<datatypes::ProductItemPrice, Error> {
        call(self, "getLowestPresetServerPrice", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::ProductPackagePreset, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_package(&self) -> Result<datatypes::ProductPackage, Error> {
        call(self, "getPackage", ()).await
    }

    pub async fn get_package_configuration(
        &self,
    ) -> Result<Vec<datatypes::ProductPackageOrderConfiguration>, Error> {
        call(self, "getPackageConfiguration", ()).await
    }

    pub async fn get_prices(&self) -> Result<Vec<datatypes::ProductItemPrice>, Error> {
        call(self, "getPrices", ()).await
    }

    pub async fn get_storage_group_template_arrays(
        &self,
    ) -> Result<Vec<datatypes::ConfigurationStorageGroupTemplateGroup>, Error> {
        call(self, "getStorageGroupTemplateArrays", ()).await
    }

    pub async fn get_total_minimum_hourly_fee(&self) -> Result<datatypes::Float64, Error> {
        call(self, "getTotalMinimumHourlyFee", ()).await
    }

    pub async fn get_total_minimum_recurring_fee(&self) -> Result<datatypes::Float64, Error> {
        call(self, "getTotalMinimumRecurringFee", ()).await
    }
}

service! {
    /// A server configuration offered for ordering, with its package and item.
    ProductPackageServer => "SoftLayer_Product_Package_Server", get_product_package_server_service
}

impl<S: Session> ProductPackageServer<S> {
    pub async fn get_all_objects(&self) -> Result<Vec<datatypes::ProductPackageServer>, Error> {
        call(self, "getAllObjects", ()).await
    }

    pub async fn get_catalog(&self) -> Result<datatypes::ProductCatalog, Error> {
        call(self, "getCatalog", ()).await
    }

    pub async fn get_item(&self) -> Result<datatypes::ProductItem, Error> {
        call(self, "getItem", ()).await
    }

    pub async fn get_item_price(&self) -> Result<datatypes::ProductItemPrice, Error> {
        call(self, "getItemPrice", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::ProductPackageServer, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_package(&self) -> Result<datatypes::ProductPackage, Error> {
        call(self, "getPackage", ()).await
    }

    pub async fn get_preset(&self) -> Result<datatypes::ProductPackagePreset, Error> {
        call(self, "getPreset", ()).await
    }
}

service! {
    /// A filter option for [`ProductPackageServer`] listings.
    ProductPackageServerOption => "SoftLayer_Product_Package_Server_Option", get_product_package_server_option_service
}

impl<S: Session> ProductPackageServerOption<S> {
    pub async fn get_all_options(
        &self,
    ) -> Result<Vec<datatypes::ProductPackageServerOption>, Error> {
        call(self, "getAllOptions", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::ProductPackageServerOption, Error> {
        call(self, "getObject", ()).await
    }

    /// Returns the options of one type.
    pub async fn get_options(
        &self,
        option_type: &str,
    ) -> Result<Vec<datatypes::ProductPackageServerOption>, Error> {
        call(self, "getOptions", (option_type,)).await
    }
}

service! {
    /// The type of a product package, e.g. `BARE_METAL_CPU`.
    ProductPackageType => "SoftLayer_Product_Package_Type", get_product_package_type_service
}

impl<S: Session> ProductPackageType<S> {
    pub async fn get_all_objects(&self) -> Result<Vec<datatypes::ProductPackageType>, Error> {
        call(self, "getAllObjects", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::ProductPackageType, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_packages(&self) -> Result<Vec<datatypes::ProductPackage>, Error> {
        call(self, "getPackages", ()).await
    }
}

service! {
    /// A promotion that discounts orders placed with its code.
    ProductPromotion => "SoftLayer_Product_Promotion", get_product_promotion_service
}

impl<S: Session> ProductPromotion<S> {
    /// Looks up a promotion by its code.
    pub async fn find_by_promo_code(
        &self,
        code: &str,
    ) -> Result<datatypes::ContainerProductPromotion, Error> {
        call(self, "findByPromoCode", (code,)).await
    }

    pub async fn get_object(&self) -> Result<datatypes::ProductPromotion, Error> {
        call(self, "getObject", ()).await
    }
}

service! {
    /// A scheduled upgrade or downgrade of an existing service.
    ///
    /// Created by placing an upgrade order; the request then waits for its
    /// maintenance window.
    ProductUpgradeRequest => "SoftLayer_Product_Upgrade_Request", get_product_upgrade_request_service
}

impl<S: Session> ProductUpgradeRequest<S> {
    /// Approves a pending upgrade so it runs in its maintenance window.
    pub async fn approve_changes(&self) -> Result<bool, Error> {
        call(self, "approveChanges", ()).await
    }

    pub async fn get_account(&self) -> Result<datatypes::Account, Error> {
        call(self, "getAccount", ()).await
    }

    pub async fn get_completed_flag(&self) -> Result<bool, Error> {
        call(self, "getCompletedFlag", ()).await
    }

    pub async fn get_invoice(&self) -> Result<datatypes::BillingInvoice, Error> {
        call(self, "getInvoice", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::ProductUpgradeRequest, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_order(&self) -> Result<datatypes::BillingOrder, Error> {
        call(self, "getOrder", ()).await
    }

    pub async fn get_server(&self) -> Result<datatypes::Hardware, Error> {
        call(self, "getServer", ()).await
    }

    pub async fn get_status(&self) -> Result<datatypes::ProductUpgradeRequestStatus, Error> {
        call(self, "getStatus", ()).await
    }

    pub async fn get_ticket(&self) -> Result<datatypes::Ticket, Error> {
        call(self, "getTicket", ()).await
    }

    pub async fn get_user(&self) -> Result<datatypes::UserCustomer, Error> {
        call(self, "getUser", ()).await
    }

    pub async fn get_virtual_guest(&self) -> Result<datatypes::VirtualGuest, Error> {
        call(self, "getVirtualGuest", ()).await
    }

    /// Moves the upgrade to another maintenance window.
    pub async fn update_maintenance_window(
        &self,
        maintenance_start_time: &str,
        maintenance_window_id: i64,
    ) -> Result<bool, Error> {
        call(self, "updateMaintenanceWindow", (maintenance_start_time, maintenance_window_id)).await
    }
}
