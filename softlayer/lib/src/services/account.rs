//! Bindings for the account services: the account itself, its contacts,
//! notes, addresses, and stored passwords.

use softlayer_datatypes as datatypes;

use crate::error::Error;
use crate::service::{call, call_void, service};
use crate::session::Session;

service! {
    /// The account the session authenticates as.
    ///
    /// Unlike most services, `SoftLayer_Account` needs no object id: every call
    /// acts on the caller's own account. Relational getters such as
    /// [`Account::get_virtual_guests`] honor the mask, filter, limit, and offset
    /// options.
    Account => "SoftLayer_Account", get_account_service
}

impl<S: Session> Account<S> {
    /// Activates a partner account with the hash code sent to it.
    pub async fn activate_partner(
        &self,
        account_id: Option<&str>,
        hash_code: &str,
    ) -> Result<datatypes::Account, Error> {
        call(self, "activatePartner", (account_id, hash_code)).await
    }

    /// Adds ACH bank details as a payment method.
    pub async fn add_ach_information(
        &self,
        ach_information: &datatypes::ContainerBillingInfoAch,
    ) -> Result<bool, Error> {
        call(self, "addAchInformation", (ach_information,)).await
    }

    pub async fn add_referral_partner_payment_option(
        &self,
        payment_option: &datatypes::ContainerReferralPartnerPaymentOption,
    ) -> Result<bool, Error> {
        call(self, "addReferralPartnerPaymentOption", (payment_option,)).await
    }

    pub async fn are_vdr_updates_blocked_for_billing(&self) -> Result<bool, Error> {
        call(self, "areVdrUpdatesBlockedForBilling", ()).await
    }

    /// Abandons a pending PayPal payment.
    pub async fn cancel_pay_pal_transaction(
        &self,
        token: &str,
        payer_id: &str,
    ) -> Result<bool, Error> {
        call(self, "cancelPayPalTransaction", (token, payer_id)).await
    }

    /// Completes a PayPal payment and returns the transaction id.
    pub async fn complete_pay_pal_transaction(
        &self,
        token: &str,
        payer_id: &str,
    ) -> Result<String, Error> {
        call(self, "completePayPalTransaction", (token, payer_id)).await
    }

    /// Returns the number of hourly billed virtual guests and bare metal servers.
    pub async fn count_hourly_instances(&self) -> Result<i64, Error> {
        call(self, "countHourlyInstances", ()).await
    }

    /// Creates a portal user under the account.
    ///
    /// ## Arguments
    ///
    /// * `template` - The user to create. `username`, `firstName`, `lastName`, and `email` are required.
    /// * `password` - The portal password.
    /// * `vpn_password` - The VPN password, when different from the portal password.
    /// * `silently_create` - Skip the welcome email.
    pub async fn create_user(
        &self,
        template: &datatypes::UserCustomer,
        password: &str,
        vpn_password: Option<&str>,
        silently_create: Option<bool>,
    ) -> Result<datatypes::UserCustomer, Error> {
        call(self, "createUser", (template, password, vpn_password, silently_create)).await
    }

    /// Stops restricting support to EU personnel.
    pub async fn disable_eu_support(&self) -> Result<(), Error> {
        call_void(self, "disableEuSupport", ()).await
    }

    pub async fn disable_vpn_config_requires_vpn_manage_attribute(&self) -> Result<(), Error> {
        call_void(self, "disableVpnConfigRequiresVpnManageAttribute", ()).await
    }

    /// Requests changes to the account's company and contact details.
    ///
    /// Some changes need manual approval; the response says which.
    pub async fn edit_account(
        &self,
        modified: &datatypes::Account,
    ) -> Result<datatypes::ContainerAccountUpdateResponse, Error> {
        call(self, "editAccount", (modified,)).await
    }

    /// Restricts support to EU personnel.
    pub async fn enable_eu_support(&self) -> Result<(), Error> {
        call_void(self, "enableEuSupport", ()).await
    }

    pub async fn enable_vpn_config_requires_vpn_manage_attribute(&self) -> Result<(), Error> {
        call_void(self, "enableVpnConfigRequiresVpnManageAttribute", ()).await
    }

    /// Returns the primary abuse notification address.
    pub async fn get_abuse_email(&self) -> Result<String, Error> {
        call(self, "getAbuseEmail", ()).await
    }

    pub async fn get_abuse_emails(&self) -> Result<Vec<datatypes::AccountAbuseEmail>, Error> {
        call(self, "getAbuseEmails", ()).await
    }

    /// Returns EVault backup jobs between `start_date` and `end_date`.
    pub async fn get_account_backup_history(
        &self,
        start_date: datatypes::Time,
        end_date: datatypes::Time,
        backup_status: Option<&str>,
    ) -> Result<Vec<datatypes::ContainerNetworkStorageEvaultWebCcJobDetails>, Error> {
        call(self, "getAccountBackupHistory", (start_date, end_date, backup_status)).await
    }

    pub async fn get_account_contacts(&self) -> Result<Vec<datatypes::AccountContact>, Error> {
        call(self, "getAccountContacts", ()).await
    }

    pub async fn get_account_licenses(
        &self,
    ) -> Result<Vec<datatypes::SoftwareAccountLicense>, Error> {
        call(self, "getAccountLicenses", ()).await
    }

    pub async fn get_account_links(&self) -> Result<Vec<datatypes::AccountLink>, Error> {
        call(self, "getAccountLinks", ()).await
    }

    pub async fn get_account_status(&self) -> Result<datatypes::AccountStatus, Error> {
        call(self, "getAccountStatus", ()).await
    }

    /// Returns the value of one account trait.
    pub async fn get_account_trait_value(&self, key_name: &str) -> Result<String, Error> {
        call(self, "getAccountTraitValue", (key_name,)).await
    }

    pub async fn get_active_account_discount_billing_item(
        &self,
    ) -> Result<datatypes::BillingItem, Error> {
        call(self, "getActiveAccountDiscountBillingItem", ()).await
    }

    pub async fn get_active_account_licenses(
        &self,
    ) -> Result<Vec<datatypes::SoftwareAccountLicense>, Error> {
        call(self, "getActiveAccountLicenses", ()).await
    }

    pub async fn get_active_addresses(&self) -> Result<Vec<datatypes::AccountAddress>, Error> {
        call(self, "getActiveAddresses", ()).await
    }

    pub async fn get_active_agreements(&self) -> Result<Vec<datatypes::AccountAgreement>, Error> {
        call(self, "getActiveAgreements", ()).await
    }

    pub async fn get_active_billing_agreements(
        &self,
    ) -> Result<Vec<datatypes::AccountAgreement>, Error> {
        call(self, "getActiveBillingAgreements", ()).await
    }

    pub async fn get_active_catalyst_enrollment(
        &self,
    ) -> Result<datatypes::CatalystEnrollment, Error> {
        call(self, "getActiveCatalystEnrollment", ()).await
    }

    pub async fn get_active_colocation_containers(
        &self,
    ) -> Result<Vec<datatypes::BillingItem>, Error> {
        call(self, "getActiveColocationContainers", ()).await
    }

    pub async fn get_active_flexible_credit_enrollment(
        &self,
    ) -> Result<datatypes::FlexibleCreditEnrollment, Error> {
        call(self, "getActiveFlexibleCreditEnrollment", ()).await
    }

    pub async fn get_active_flexible_credit_enrollments(
        &self,
    ) -> Result<Vec<datatypes::FlexibleCreditEnrollment>, Error> {
        call(self, "getActiveFlexibleCreditEnrollments", ()).await
    }

    pub async fn get_active_notification_subscribers(
        &self,
    ) -> Result<Vec<datatypes::NotificationSubscriber>, Error> {
        call(self, "getActiveNotificationSubscribers", ()).await
    }

    pub async fn get_active_outlet_packages(
        &self,
    ) -> Result<Vec<datatypes::ProductPackage>, Error> {
        call(self, "getActiveOutletPackages", ()).await
    }

    /// Returns the product packages the account may order from.
    pub async fn get_active_packages(&self) -> Result<Vec<datatypes::ProductPackage>, Error> {
        call(self, "getActivePackages", ()).await
    }

    pub async fn get_active_packages_by_attribute(
        &self,
        attribute_key_name: &str,
    ) -> Result<Vec<datatypes::ProductPackage>, Error> {
        call(self, "getActivePackagesByAttribute", (attribute_key_name,)).await
    }

    pub async fn get_active_private_hosted_cloud_packages(
        &self,
    ) -> Result<Vec<datatypes::ProductPackage>, Error> {
        call(self, "getActivePrivateHostedCloudPackages", ()).await
    }

    pub async fn get_active_quotes(&self) -> Result<Vec<datatypes::BillingOrderQuote>, Error> {
        call(self, "getActiveQuotes", ()).await
    }

    pub async fn get_active_reserved_capacity_agreements(
        &self,
    ) -> Result<Vec<datatypes::AccountAgreement>, Error> {
        call(self, "getActiveReservedCapacityAgreements", ()).await
    }

    pub async fn get_active_virtual_licenses(
        &self,
    ) -> Result<Vec<datatypes::SoftwareVirtualLicense>, Error> {
        call(self, "getActiveVirtualLicenses", ()).await
    }

    pub async fn get_adc_load_balancers(
        &self,
    ) -> Result<Vec<datatypes::NetworkApplicationDeliveryControllerLoadBalancerVirtualIpAddress>, Error> {
        call(self, "getAdcLoadBalancers", ()).await
    }

    pub async fn get_addresses(&self) -> Result<Vec<datatypes::AccountAddress>, Error> {
        call(self, "getAddresses", ()).await
    }

    pub async fn get_affiliate_id(&self) -> Result<String, Error> {
        call(self, "getAffiliateId", ()).await
    }

    pub async fn get_all_billing_items(&self) -> Result<Vec<datatypes::BillingItem>, Error> {
        call(self, "getAllBillingItems", ()).await
    }

    pub async fn get_all_commission_billing_items(
        &self,
    ) -> Result<Vec<datatypes::BillingItem>, Error> {
        call(self, "getAllCommissionBillingItems", ()).await
    }

    pub async fn get_all_recurring_top_level_billing_items(
        &self,
    ) -> Result<Vec<datatypes::BillingItem>, Error> {
        call(self, "getAllRecurringTopLevelBillingItems", ()).await
    }

    pub async fn get_all_recurring_top_level_billing_items_unfiltered(
        &self,
    ) -> Result<Vec<datatypes::BillingItem>, Error> {
        call(self, "getAllRecurringTopLevelBillingItemsUnfiltered", ()).await
    }

    pub async fn get_all_subnet_billing_items(&self) -> Result<Vec<datatypes::BillingItem>, Error> {
        call(self, "getAllSubnetBillingItems", ()).await
    }

    pub async fn get_all_top_level_billing_items(
        &self,
    ) -> Result<Vec<datatypes::BillingItem>, Error> {
        call(self, "getAllTopLevelBillingItems", ()).await
    }

    pub async fn get_all_top_level_billing_items_unfiltered(
        &self,
    ) -> Result<Vec<datatypes::BillingItem>, Error> {
        call(self, "getAllTopLevelBillingItemsUnfiltered", ()).await
    }

    pub async fn get_allow_ibm_id_silent_migration_flag(&self) -> Result<bool, Error> {
        call(self, "getAllowIbmIdSilentMigrationFlag", ()).await
    }

    pub async fn get_allows_bluemix_account_linking_flag(&self) -> Result<bool, Error> {
        call(self, "getAllowsBluemixAccountLinkingFlag", ()).await
    }

    pub async fn get_alternate_credit_card_data(
        &self,
    ) -> Result<datatypes::ContainerAccountPaymentMethodCreditCard, Error> {
        call(self, "getAlternateCreditCardData", ()).await
    }

    pub async fn get_application_delivery_controllers(
        &self,
    ) -> Result<Vec<datatypes::NetworkApplicationDeliveryController>, Error> {
        call(self, "getApplicationDeliveryControllers", ()).await
    }

    /// Returns the attribute with the given type key name.
    pub async fn get_attribute_by_type(
        &self,
        attribute_type: &str,
    ) -> Result<datatypes::AccountAttribute, Error> {
        call(self, "getAttributeByType", (attribute_type,)).await
    }

    pub async fn get_attributes(&self) -> Result<Vec<datatypes::AccountAttribute>, Error> {
        call(self, "getAttributes", ()).await
    }

    pub async fn get_auxiliary_notifications(
        &self,
    ) -> Result<Vec<datatypes::ContainerUtilityMessage>, Error> {
        call(self, "getAuxiliaryNotifications", ()).await
    }

    pub async fn get_available_public_network_vlans(
        &self,
    ) -> Result<Vec<datatypes::NetworkVlan>, Error> {
        call(self, "getAvailablePublicNetworkVlans", ()).await
    }

    pub async fn get_average_archive_usage_metric_data_by_date(
        &self,
        start_date_time: datatypes::Time,
        end_date_time: datatypes::Time,
    ) -> Result<datatypes::Float64, Error> {
        call(self, "getAverageArchiveUsageMetricDataByDate", (start_date_time, end_date_time)).await
    }

    pub async fn get_average_public_usage_metric_data_by_date(
        &self,
        start_date_time: datatypes::Time,
        end_date_time: datatypes::Time,
    ) -> Result<datatypes::Float64, Error> {
        call(self, "getAveragePublicUsageMetricDataByDate", (start_date_time, end_date_time)).await
    }

    /// Returns the current account balance.
    pub async fn get_balance(&self) -> Result<datatypes::Float64, Error> {
        call(self, "getBalance", ()).await
    }

    pub async fn get_bandwidth_allotments(
        &self,
    ) -> Result<Vec<datatypes::NetworkBandwidthVersion1Allotment>, Error> {
        call(self, "getBandwidthAllotments", ()).await
    }

    pub async fn get_bandwidth_allotments_over_allocation(
        &self,
    ) -> Result<Vec<datatypes::NetworkBandwidthVersion1Allotment>, Error> {
        call(self, "getBandwidthAllotmentsOverAllocation", ()).await
    }

    pub async fn get_bandwidth_allotments_projected_over_allocation(
        &self,
    ) -> Result<Vec<datatypes::NetworkBandwidthVersion1Allotment>, Error> {
        call(self, "getBandwidthAllotmentsProjectedOverAllocation", ()).await
    }

    /// Returns bandwidth usage for the given servers over a date range.
    pub async fn get_bandwidth_list(
        &self,
        network_type: &str,
        direction: &str,
        start_date: &str,
        end_date: &str,
        server_ids: &[i64],
    ) -> Result<Vec<datatypes::ContainerBandwidthUsage>, Error> {
        call(
            self,
            "getBandwidthList",
            (network_type, direction, start_date, end_date, server_ids),
        )
        .await
    }

    pub async fn get_bare_metal_instances(&self) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getBareMetalInstances", ()).await
    }

    pub async fn get_billing_agreements(&self) -> Result<Vec<datatypes::AccountAgreement>, Error> {
        call(self, "getBillingAgreements", ()).await
    }

    pub async fn get_billing_info(&self) -> Result<datatypes::BillingInfo, Error> {
        call(self, "getBillingInfo", ()).await
    }

    /// Returns the image templates the account can see, private and shared.
    pub async fn get_block_device_template_groups(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuestBlockDeviceTemplateGroup>, Error> {
        call(self, "getBlockDeviceTemplateGroups", ()).await
    }

    pub async fn get_block_self_service_brand_migration(&self) -> Result<bool, Error> {
        call(self, "getBlockSelfServiceBrandMigration", ()).await
    }

    pub async fn get_bluemix_account_id(&self) -> Result<String, Error> {
        call(self, "getBluemixAccountId", ()).await
    }

    pub async fn get_bluemix_account_link(&self) -> Result<datatypes::AccountLinkBluemix, Error> {
        call(self, "getBluemixAccountLink", ()).await
    }

    pub async fn get_bluemix_linked_flag(&self) -> Result<bool, Error> {
        call(self, "getBluemixLinkedFlag", ()).await
    }

    pub async fn get_brand(&self) -> Result<datatypes::Brand, Error> {
        call(self, "getBrand", ()).await
    }

    pub async fn get_brand_account_flag(&self) -> Result<bool, Error> {
        call(self, "getBrandAccountFlag", ()).await
    }

    pub async fn get_brand_key_name(&self) -> Result<String, Error> {
        call(self, "getBrandKeyName", ()).await
    }

    pub async fn get_business_partner(&self) -> Result<datatypes::AccountBusinessPartner, Error> {
        call(self, "getBusinessPartner", ()).await
    }

    pub async fn get_can_order_additional_vlans_flag(&self) -> Result<bool, Error> {
        call(self, "getCanOrderAdditionalVlansFlag", ()).await
    }

    pub async fn get_carts(&self) -> Result<Vec<datatypes::BillingOrderQuote>, Error> {
        call(self, "getCarts", ()).await
    }

    pub async fn get_catalyst_enrollments(
        &self,
    ) -> Result<Vec<datatypes::CatalystEnrollment>, Error> {
        call(self, "getCatalystEnrollments", ()).await
    }

    pub async fn get_closed_tickets(&self) -> Result<Vec<datatypes::Ticket>, Error> {
        call(self, "getClosedTickets", ()).await
    }

    /// Returns the user the session authenticates as.
    pub async fn get_current_user(&self) -> Result<datatypes::UserCustomer, Error> {
        call(self, "getCurrentUser", ()).await
    }

    pub async fn get_datacenters_with_subnet_allocations(
        &self,
    ) -> Result<Vec<datatypes::Location>, Error> {
        call(self, "getDatacentersWithSubnetAllocations", ()).await
    }

    pub async fn get_dedicated_hosts(&self) -> Result<Vec<datatypes::VirtualDedicatedHost>, Error> {
        call(self, "getDedicatedHosts", ()).await
    }

    pub async fn get_dedicated_hosts_for_image_template(
        &self,
        image_template_id: i64,
    ) -> Result<Vec<datatypes::VirtualDedicatedHost>, Error> {
        call(self, "getDedicatedHostsForImageTemplate", (image_template_id,)).await
    }

    pub async fn get_disable_payment_processing_flag(&self) -> Result<bool, Error> {
        call(self, "getDisablePaymentProcessingFlag", ()).await
    }

    pub async fn get_display_support_representative_assignments(
        &self,
    ) -> Result<Vec<datatypes::AccountAttachmentEmployee>, Error> {
        call(self, "getDisplaySupportRepresentativeAssignments", ()).await
    }

    pub async fn get_domains(&self) -> Result<Vec<datatypes::DnsDomain>, Error> {
        call(self, "getDomains", ()).await
    }

    pub async fn get_domains_without_secondary_dns_records(
        &self,
    ) -> Result<Vec<datatypes::DnsDomain>, Error> {
        call(self, "getDomainsWithoutSecondaryDnsRecords", ()).await
    }

    pub async fn get_eu_supported_flag(&self) -> Result<bool, Error> {
        call(self, "getEuSupportedFlag", ()).await
    }

    pub async fn get_evault_capacity_gb(&self) -> Result<u64, Error> {
        call(self, "getEvaultCapacityGB", ()).await
    }

    pub async fn get_evault_master_users(&self) -> Result<Vec<datatypes::AccountPassword>, Error> {
        call(self, "getEvaultMasterUsers", ()).await
    }

    pub async fn get_evault_network_storage(
        &self,
    ) -> Result<Vec<datatypes::NetworkStorage>, Error> {
        call(self, "getEvaultNetworkStorage", ()).await
    }

    pub async fn get_expired_security_certificates(
        &self,
    ) -> Result<Vec<datatypes::SecurityCertificate>, Error> {
        call(self, "getExpiredSecurityCertificates", ()).await
    }

    pub async fn get_facility_logs(&self) -> Result<Vec<datatypes::UserAccessFacilityLog>, Error> {
        call(self, "getFacilityLogs", ()).await
    }

    pub async fn get_file_block_beta_access_flag(&self) -> Result<bool, Error> {
        call(self, "getFileBlockBetaAccessFlag", ()).await
    }

    pub async fn get_flexible_credit_enrollments(
        &self,
    ) -> Result<Vec<datatypes::FlexibleCreditEnrollment>, Error> {
        call(self, "getFlexibleCreditEnrollments", ()).await
    }

    pub async fn get_flexible_credit_program_info(
        &self,
        for_next_bill_cycle: bool,
    ) -> Result<datatypes::ContainerAccountDiscountProgram, Error> {
        call(self, "getFlexibleCreditProgramInfo", (for_next_bill_cycle,)).await
    }

    pub async fn get_flexible_credit_programs_info(
        &self,
        next_billing_cycle_flag: bool,
    ) -> Result<datatypes::ContainerAccountDiscountProgramCollection, Error> {
        call(self, "getFlexibleCreditProgramsInfo", (next_billing_cycle_flag,)).await
    }

    pub async fn get_force_paas_account_link_date(&self) -> Result<String, Error> {
        call(self, "getForcePaasAccountLinkDate", ()).await
    }

    pub async fn get_global_ip_records(
        &self,
    ) -> Result<Vec<datatypes::NetworkSubnetIpAddressGlobal>, Error> {
        call(self, "getGlobalIpRecords", ()).await
    }

    pub async fn get_global_ipv4_records(
        &self,
    ) -> Result<Vec<datatypes::NetworkSubnetIpAddressGlobal>, Error> {
        call(self, "getGlobalIpv4Records", ()).await
    }

    pub async fn get_global_ipv6_records(
        &self,
    ) -> Result<Vec<datatypes::NetworkSubnetIpAddressGlobal>, Error> {
        call(self, "getGlobalIpv6Records", ()).await
    }

    pub async fn get_hardware(&self) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getHardware", ()).await
    }

    pub async fn get_hardware_over_bandwidth_allocation(
        &self,
    ) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getHardwareOverBandwidthAllocation", ()).await
    }

    pub async fn get_hardware_pools(
        &self,
    ) -> Result<Vec<datatypes::ContainerHardwarePoolDetails>, Error> {
        call(self, "getHardwarePools", ()).await
    }

    pub async fn get_hardware_projected_over_bandwidth_allocation(
        &self,
    ) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getHardwareProjectedOverBandwidthAllocation", ()).await
    }

    pub async fn get_hardware_with_cpanel(&self) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getHardwareWithCpanel", ()).await
    }

    pub async fn get_hardware_with_helm(&self) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getHardwareWithHelm", ()).await
    }

    pub async fn get_hardware_with_mcafee(&self) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getHardwareWithMcafee", ()).await
    }

    pub async fn get_hardware_with_mcafee_antivirus_redhat(
        &self,
    ) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getHardwareWithMcafeeAntivirusRedhat", ()).await
    }

    pub async fn get_hardware_with_mcafee_antivirus_windows(
        &self,
    ) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getHardwareWithMcafeeAntivirusWindows", ()).await
    }

    pub async fn get_hardware_with_mcafee_intrusion_detection_system(
        &self,
    ) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getHardwareWithMcafeeIntrusionDetectionSystem", ()).await
    }

    pub async fn get_hardware_with_plesk(&self) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getHardwareWithPlesk", ()).await
    }

    pub async fn get_hardware_with_quantastor(&self) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getHardwareWithQuantastor", ()).await
    }

    pub async fn get_hardware_with_urchin(&self) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getHardwareWithUrchin", ()).await
    }

    pub async fn get_hardware_with_windows(&self) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getHardwareWithWindows", ()).await
    }

    pub async fn get_has_evault_bare_metal_restore_plugin_flag(&self) -> Result<bool, Error> {
        call(self, "getHasEvaultBareMetalRestorePluginFlag", ()).await
    }

    pub async fn get_has_idera_bare_metal_restore_plugin_flag(&self) -> Result<bool, Error> {
        call(self, "getHasIderaBareMetalRestorePluginFlag", ()).await
    }

    pub async fn get_has_pending_order(&self) -> Result<u64, Error> {
        call(self, "getHasPendingOrder", ()).await
    }

    pub async fn get_has_r1soft_bare_metal_restore_plugin_flag(&self) -> Result<bool, Error> {
        call(self, "getHasR1softBareMetalRestorePluginFlag", ()).await
    }

    pub async fn get_hourly_bare_metal_instances(&self) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getHourlyBareMetalInstances", ()).await
    }

    pub async fn get_hourly_service_billing_items(
        &self,
    ) -> Result<Vec<datatypes::BillingItem>, Error> {
        call(self, "getHourlyServiceBillingItems", ()).await
    }

    pub async fn get_hourly_virtual_guests(&self) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getHourlyVirtualGuests", ()).await
    }

    pub async fn get_hub_network_storage(&self) -> Result<Vec<datatypes::NetworkStorage>, Error> {
        call(self, "getHubNetworkStorage", ()).await
    }

    pub async fn get_ibm_customer_number(&self) -> Result<String, Error> {
        call(self, "getIbmCustomerNumber", ()).await
    }

    pub async fn get_ibm_id_authentication_required_flag(&self) -> Result<bool, Error> {
        call(self, "getIbmIdAuthenticationRequiredFlag", ()).await
    }

    pub async fn get_ibm_id_migration_expiration_timestamp(&self) -> Result<String, Error> {
        call(self, "getIbmIdMigrationExpirationTimestamp", ()).await
    }

    pub async fn get_in_progress_external_account_setup(
        &self,
    ) -> Result<datatypes::AccountExternalSetup, Error> {
        call(self, "getInProgressExternalAccountSetup", ()).await
    }

    pub async fn get_internal_cci_host_account_flag(&self) -> Result<bool, Error> {
        call(self, "getInternalCciHostAccountFlag", ()).await
    }

    pub async fn get_internal_image_template_creation_flag(&self) -> Result<bool, Error> {
        call(self, "getInternalImageTemplateCreationFlag", ()).await
    }

    pub async fn get_internal_notes(&self) -> Result<Vec<datatypes::AccountNote>, Error> {
        call(self, "getInternalNotes", ()).await
    }

    pub async fn get_internal_restriction_flag(&self) -> Result<bool, Error> {
        call(self, "getInternalRestrictionFlag", ()).await
    }

    pub async fn get_invoices(&self) -> Result<Vec<datatypes::BillingInvoice>, Error> {
        call(self, "getInvoices", ()).await
    }

    pub async fn get_ip_addresses(&self) -> Result<Vec<datatypes::NetworkSubnetIpAddress>, Error> {
        call(self, "getIpAddresses", ()).await
    }

    pub async fn get_iscsi_isolation_disabled(&self) -> Result<bool, Error> {
        call(self, "getIscsiIsolationDisabled", ()).await
    }

    pub async fn get_iscsi_network_storage(&self) -> Result<Vec<datatypes::NetworkStorage>, Error> {
        call(self, "getIscsiNetworkStorage", ()).await
    }

    /// Returns the largest CIDR the account may order in a location.
    pub async fn get_largest_allowed_subnet_cidr(
        &self,
        number_of_hosts: i64,
        location_id: i64,
    ) -> Result<i64, Error> {
        call(self, "getLargestAllowedSubnetCidr", (number_of_hosts, location_id)).await
    }

    pub async fn get_last_canceled_billing_item(&self) -> Result<datatypes::BillingItem, Error> {
        call(self, "getLastCanceledBillingItem", ()).await
    }

    pub async fn get_last_cancelled_server_billing_item(
        &self,
    ) -> Result<datatypes::BillingItem, Error> {
        call(self, "getLastCancelledServerBillingItem", ()).await
    }

    pub async fn get_last_five_closed_abuse_tickets(
        &self,
    ) -> Result<Vec<datatypes::Ticket>, Error> {
        call(self, "getLastFiveClosedAbuseTickets", ()).await
    }

    pub async fn get_last_five_closed_accounting_tickets(
        &self,
    ) -> Result<Vec<datatypes::Ticket>, Error> {
        call(self, "getLastFiveClosedAccountingTickets", ()).await
    }

    pub async fn get_last_five_closed_other_tickets(
        &self,
    ) -> Result<Vec<datatypes::Ticket>, Error> {
        call(self, "getLastFiveClosedOtherTickets", ()).await
    }

    pub async fn get_last_five_closed_sales_tickets(
        &self,
    ) -> Result<Vec<datatypes::Ticket>, Error> {
        call(self, "getLastFiveClosedSalesTickets", ()).await
    }

    pub async fn get_last_five_closed_support_tickets(
        &self,
    ) -> Result<Vec<datatypes::Ticket>, Error> {
        call(self, "getLastFiveClosedSupportTickets", ()).await
    }

    pub async fn get_last_five_closed_tickets(&self) -> Result<Vec<datatypes::Ticket>, Error> {
        call(self, "getLastFiveClosedTickets", ()).await
    }

    pub async fn get_latest_bill_date(&self) -> Result<datatypes::Time, Error> {
        call(self, "getLatestBillDate", ()).await
    }

    pub async fn get_latest_recurring_invoice(&self) -> Result<datatypes::BillingInvoice, Error> {
        call(self, "getLatestRecurringInvoice", ()).await
    }

    pub async fn get_latest_recurring_pending_invoice(
        &self,
    ) -> Result<datatypes::BillingInvoice, Error> {
        call(self, "getLatestRecurringPendingInvoice", ()).await
    }

    pub async fn get_legacy_iscsi_capacity_gb(&self) -> Result<u64, Error> {
        call(self, "getLegacyIscsiCapacityGB", ()).await
    }

    pub async fn get_load_balancers(
        &self,
    ) -> Result<Vec<datatypes::NetworkLoadBalancerVirtualIpAddress>, Error> {
        call(self, "getLoadBalancers", ()).await
    }

    pub async fn get_lockbox_capacity_gb(&self) -> Result<u64, Error> {
        call(self, "getLockboxCapacityGB", ()).await
    }

    pub async fn get_lockbox_network_storage(
        &self,
    ) -> Result<Vec<datatypes::NetworkStorage>, Error> {
        call(self, "getLockboxNetworkStorage", ()).await
    }

    pub async fn get_manual_payments_under_review(
        &self,
    ) -> Result<Vec<datatypes::BillingPaymentCardManualPayment>, Error> {
        call(self, "getManualPaymentsUnderReview", ()).await
    }

    /// Returns the account's master user.
    pub async fn get_master_user(&self) -> Result<datatypes::UserCustomer, Error> {
        call(self, "getMasterUser", ()).await
    }

    pub async fn get_media_data_transfer_requests(
        &self,
    ) -> Result<Vec<datatypes::AccountMediaDataTransferRequest>, Error> {
        call(self, "getMediaDataTransferRequests", ()).await
    }

    pub async fn get_migrated_to_ibm_cloud_portal_flag(&self) -> Result<bool, Error> {
        call(self, "getMigratedToIbmCloudPortalFlag", ()).await
    }

    pub async fn get_monthly_bare_metal_instances(
        &self,
    ) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getMonthlyBareMetalInstances", ()).await
    }

    pub async fn get_monthly_virtual_guests(&self) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getMonthlyVirtualGuests", ()).await
    }

    pub async fn get_nas_network_storage(&self) -> Result<Vec<datatypes::NetworkStorage>, Error> {
        call(self, "getNasNetworkStorage", ()).await
    }

    pub async fn get_net_app_active_account_license_keys(&self) -> Result<Vec<String>, Error> {
        call(self, "getNetAppActiveAccountLicenseKeys", ()).await
    }

    pub async fn get_network_creation_flag(&self) -> Result<bool, Error> {
        call(self, "getNetworkCreationFlag", ()).await
    }

    pub async fn get_network_gateways(&self) -> Result<Vec<datatypes::NetworkGateway>, Error> {
        call(self, "getNetworkGateways", ()).await
    }

    pub async fn get_network_hardware(&self) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getNetworkHardware", ()).await
    }

    pub async fn get_network_message_delivery_accounts(
        &self,
    ) -> Result<Vec<datatypes::NetworkMessageDelivery>, Error> {
        call(self, "getNetworkMessageDeliveryAccounts", ()).await
    }

    pub async fn get_network_monitor_down_hardware(
        &self,
    ) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getNetworkMonitorDownHardware", ()).await
    }

    pub async fn get_network_monitor_down_virtual_guests(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getNetworkMonitorDownVirtualGuests", ()).await
    }

    pub async fn get_network_monitor_recovering_hardware(
        &self,
    ) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getNetworkMonitorRecoveringHardware", ()).await
    }

    pub async fn get_network_monitor_recovering_virtual_guests(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getNetworkMonitorRecoveringVirtualGuests", ()).await
    }

    pub async fn get_network_monitor_up_hardware(&self) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getNetworkMonitorUpHardware", ()).await
    }

    pub async fn get_network_monitor_up_virtual_guests(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getNetworkMonitorUpVirtualGuests", ()).await
    }

    pub async fn get_network_storage(&self) -> Result<Vec<datatypes::NetworkStorage>, Error> {
        call(self, "getNetworkStorage", ()).await
    }

    pub async fn get_network_storage_groups(
        &self,
    ) -> Result<Vec<datatypes::NetworkStorageGroup>, Error> {
        call(self, "getNetworkStorageGroups", ()).await
    }

    pub async fn get_network_tunnel_contexts(
        &self,
    ) -> Result<Vec<datatypes::NetworkTunnelModuleContext>, Error> {
        call(self, "getNetworkTunnelContexts", ()).await
    }

    pub async fn get_network_vlan_span(&self) -> Result<datatypes::AccountNetworkVlanSpan, Error> {
        call(self, "getNetworkVlanSpan", ()).await
    }

    pub async fn get_network_vlans(&self) -> Result<Vec<datatypes::NetworkVlan>, Error> {
        call(self, "getNetworkVlans", ()).await
    }

    /// Returns the upcoming invoice as an Excel workbook.
    pub async fn get_next_invoice_excel(
        &self,
        document_create_date: datatypes::Time,
    ) -> Result<datatypes::Bytes, Error> {
        call(self, "getNextInvoiceExcel", (document_create_date,)).await
    }

    pub async fn get_next_invoice_incubator_exempt_total(
        &self,
    ) -> Result<datatypes::Float64, Error> {
        call(self, "getNextInvoiceIncubatorExemptTotal", ()).await
    }

    /// Returns the upcoming invoice as a PDF.
    pub async fn get_next_invoice_pdf(
        &self,
        document_create_date: datatypes::Time,
    ) -> Result<datatypes::Bytes, Error> {
        call(self, "getNextInvoicePdf", (document_create_date,)).await
    }

    /// Returns the upcoming invoice as a detailed PDF.
    pub async fn get_next_invoice_pdf_detailed(
        &self,
        document_create_date: datatypes::Time,
    ) -> Result<datatypes::Bytes, Error> {
        call(self, "getNextInvoicePdfDetailed", (document_create_date,)).await
    }

    pub async fn get_next_invoice_platform_services_total_amount(
        &self,
    ) -> Result<datatypes::Float64, Error> {
        call(self, "getNextInvoicePlatformServicesTotalAmount", ()).await
    }

    pub async fn get_next_invoice_recurring_amount_eligible_for_account_discount(
        &self,
    ) -> Result<datatypes::Float64, Error> {
        call(self, "getNextInvoiceRecurringAmountEligibleForAccountDiscount", ()).await
    }

    pub async fn get_next_invoice_top_level_billing_items(
        &self,
    ) -> Result<Vec<datatypes::BillingItem>, Error> {
        call(self, "getNextInvoiceTopLevelBillingItems", ()).await
    }

    /// Returns the projected total of the next invoice.
    pub async fn get_next_invoice_total_amount(&self) -> Result<datatypes::Float64, Error> {
        call(self, "getNextInvoiceTotalAmount", ()).await
    }

    pub async fn get_next_invoice_total_one_time_amount(
        &self,
    ) -> Result<datatypes::Float64, Error> {
        call(self, "getNextInvoiceTotalOneTimeAmount", ()).await
    }

    pub async fn get_next_invoice_total_one_time_tax_amount(
        &self,
    ) -> Result<datatypes::Float64, Error> {
        call(self, "getNextInvoiceTotalOneTimeTaxAmount", ()).await
    }

    pub async fn get_next_invoice_total_recurring_amount(
        &self,
    ) -> Result<datatypes::Float64, Error> {
        call(self, "getNextInvoiceTotalRecurringAmount", ()).await
    }

    pub async fn get_next_invoice_total_recurring_amount_before_account_discount(
        &self,
    ) -> Result<datatypes::Float64, Error> {
        call(self, "getNextInvoiceTotalRecurringAmountBeforeAccountDiscount", ()).await
    }

    pub async fn get_next_invoice_total_recurring_tax_amount(
        &self,
    ) -> Result<datatypes::Float64, Error> {
        call(self, "getNextInvoiceTotalRecurringTaxAmount", ()).await
    }

    pub async fn get_next_invoice_total_taxable_recurring_amount(
        &self,
    ) -> Result<datatypes::Float64, Error> {
        call(self, "getNextInvoiceTotalTaxableRecurringAmount", ()).await
    }

    pub async fn get_next_invoice_zero_fee_item_counts(
        &self,
    ) -> Result<Vec<datatypes::ContainerProductItemCategoryZeroFeeCount>, Error> {
        call(self, "getNextInvoiceZeroFeeItemCounts", ()).await
    }

    pub async fn get_notification_subscribers(
        &self,
    ) -> Result<Vec<datatypes::NotificationSubscriber>, Error> {
        call(self, "getNotificationSubscribers", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::Account, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_open_abuse_tickets(&self) -> Result<Vec<datatypes::Ticket>, Error> {
        call(self, "getOpenAbuseTickets", ()).await
    }

    pub async fn get_open_accounting_tickets(&self) -> Result<Vec<datatypes::Ticket>, Error> {
        call(self, "getOpenAccountingTickets", ()).await
    }

    pub async fn get_open_billing_tickets(&self) -> Result<Vec<datatypes::Ticket>, Error> {
        call(self, "getOpenBillingTickets", ()).await
    }

    pub async fn get_open_cancellation_requests(
        &self,
    ) -> Result<Vec<datatypes::BillingItemCancellationRequest>, Error> {
        call(self, "getOpenCancellationRequests", ()).await
    }

    pub async fn get_open_other_tickets(&self) -> Result<Vec<datatypes::Ticket>, Error> {
        call(self, "getOpenOtherTickets", ()).await
    }

    pub async fn get_open_recurring_invoices(
        &self,
    ) -> Result<Vec<datatypes::BillingInvoice>, Error> {
        call(self, "getOpenRecurringInvoices", ()).await
    }

    pub async fn get_open_sales_tickets(&self) -> Result<Vec<datatypes::Ticket>, Error> {
        call(self, "getOpenSalesTickets", ()).await
    }

    pub async fn get_open_stack_account_links(&self) -> Result<Vec<datatypes::AccountLink>, Error> {
        call(self, "getOpenStackAccountLinks", ()).await
    }

    pub async fn get_open_stack_object_storage(
        &self,
    ) -> Result<Vec<datatypes::NetworkStorage>, Error> {
        call(self, "getOpenStackObjectStorage", ()).await
    }

    pub async fn get_open_support_tickets(&self) -> Result<Vec<datatypes::Ticket>, Error> {
        call(self, "getOpenSupportTickets", ()).await
    }

    pub async fn get_open_tickets(&self) -> Result<Vec<datatypes::Ticket>, Error> {
        call(self, "getOpenTickets", ()).await
    }

    pub async fn get_open_tickets_waiting_on_customer(
        &self,
    ) -> Result<Vec<datatypes::Ticket>, Error> {
        call(self, "getOpenTicketsWaitingOnCustomer", ()).await
    }

    pub async fn get_orders(&self) -> Result<Vec<datatypes::BillingOrder>, Error> {
        call(self, "getOrders", ()).await
    }

    pub async fn get_orphan_billing_items(&self) -> Result<Vec<datatypes::BillingItem>, Error> {
        call(self, "getOrphanBillingItems", ()).await
    }

    pub async fn get_owned_brands(&self) -> Result<Vec<datatypes::Brand>, Error> {
        call(self, "getOwnedBrands", ()).await
    }

    pub async fn get_owned_hardware_generic_component_models(
        &self,
    ) -> Result<Vec<datatypes::HardwareComponentModelGeneric>, Error> {
        call(self, "getOwnedHardwareGenericComponentModels", ()).await
    }

    pub async fn get_payment_processors(
        &self,
    ) -> Result<Vec<datatypes::BillingPaymentProcessor>, Error> {
        call(self, "getPaymentProcessors", ()).await
    }

    pub async fn get_pending_credit_card_change_request_data(
        &self,
    ) -> Result<Vec<datatypes::ContainerAccountPaymentMethodCreditCard>, Error> {
        call(self, "getPendingCreditCardChangeRequestData", ()).await
    }

    pub async fn get_pending_events(
        &self,
    ) -> Result<Vec<datatypes::NotificationOccurrenceEvent>, Error> {
        call(self, "getPendingEvents", ()).await
    }

    pub async fn get_pending_invoice(&self) -> Result<datatypes::BillingInvoice, Error> {
        call(self, "getPendingInvoice", ()).await
    }

    pub async fn get_pending_invoice_top_level_items(
        &self,
    ) -> Result<Vec<datatypes::BillingInvoiceItem>, Error> {
        call(self, "getPendingInvoiceTopLevelItems", ()).await
    }

    pub async fn get_pending_invoice_total_amount(&self) -> Result<datatypes::Float64, Error> {
        call(self, "getPendingInvoiceTotalAmount", ()).await
    }

    pub async fn get_pending_invoice_total_one_time_amount(
        &self,
    ) -> Result<datatypes::Float64, Error> {
        call(self, "getPendingInvoiceTotalOneTimeAmount", ()).await
    }

    pub async fn get_pending_invoice_total_one_time_tax_amount(
        &self,
    ) -> Result<datatypes::Float64, Error> {
        call(self, "getPendingInvoiceTotalOneTimeTaxAmount", ()).await
    }

    pub async fn get_pending_invoice_total_recurring_amount(
        &self,
    ) -> Result<datatypes::Float64, Error> {
        call(self, "getPendingInvoiceTotalRecurringAmount", ()).await
    }

    pub async fn get_pending_invoice_total_recurring_tax_amount(
        &self,
    ) -> Result<datatypes::Float64, Error> {
        call(self, "getPendingInvoiceTotalRecurringTaxAmount", ()).await
    }

    pub async fn get_permission_groups(
        &self,
    ) -> Result<Vec<datatypes::UserPermissionGroup>, Error> {
        call(self, "getPermissionGroups", ()).await
    }

    pub async fn get_permission_roles(&self) -> Result<Vec<datatypes::UserPermissionRole>, Error> {
        call(self, "getPermissionRoles", ()).await
    }

    pub async fn get_placement_groups(
        &self,
    ) -> Result<Vec<datatypes::VirtualPlacementGroup>, Error> {
        call(self, "getPlacementGroups", ()).await
    }

    pub async fn get_portable_storage_volumes(
        &self,
    ) -> Result<Vec<datatypes::VirtualDiskImage>, Error> {
        call(self, "getPortableStorageVolumes", ()).await
    }

    pub async fn get_post_provisioning_hooks(
        &self,
    ) -> Result<Vec<datatypes::ProvisioningHook>, Error> {
        call(self, "getPostProvisioningHooks", ()).await
    }

    pub async fn get_pptp_vpn_allowed_flag(&self) -> Result<bool, Error> {
        call(self, "getPptpVpnAllowedFlag", ()).await
    }

    pub async fn get_pptp_vpn_users(&self) -> Result<Vec<datatypes::UserCustomer>, Error> {
        call(self, "getPptpVpnUsers", ()).await
    }

    pub async fn get_pre_open_recurring_invoices(
        &self,
    ) -> Result<Vec<datatypes::BillingInvoice>, Error> {
        call(self, "getPreOpenRecurringInvoices", ()).await
    }

    pub async fn get_previous_recurring_revenue(&self) -> Result<datatypes::Float64, Error> {
        call(self, "getPreviousRecurringRevenue", ()).await
    }

    pub async fn get_price_restrictions(
        &self,
    ) -> Result<Vec<datatypes::ProductItemPriceAccountRestriction>, Error> {
        call(self, "getPriceRestrictions", ()).await
    }

    pub async fn get_priority_one_tickets(&self) -> Result<Vec<datatypes::Ticket>, Error> {
        call(self, "getPriorityOneTickets", ()).await
    }

    pub async fn get_private_block_device_template_groups(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuestBlockDeviceTemplateGroup>, Error> {
        call(self, "getPrivateBlockDeviceTemplateGroups", ()).await
    }

    pub async fn get_private_ip_addresses(
        &self,
    ) -> Result<Vec<datatypes::NetworkSubnetIpAddress>, Error> {
        call(self, "getPrivateIpAddresses", ()).await
    }

    pub async fn get_private_network_vlans(&self) -> Result<Vec<datatypes::NetworkVlan>, Error> {
        call(self, "getPrivateNetworkVlans", ()).await
    }

    pub async fn get_private_subnets(&self) -> Result<Vec<datatypes::NetworkSubnet>, Error> {
        call(self, "getPrivateSubnets", ()).await
    }

    pub async fn get_proof_of_concept_account_flag(&self) -> Result<bool, Error> {
        call(self, "getProofOfConceptAccountFlag", ()).await
    }

    pub async fn get_public_ip_addresses(
        &self,
    ) -> Result<Vec<datatypes::NetworkSubnetIpAddress>, Error> {
        call(self, "getPublicIpAddresses", ()).await
    }

    pub async fn get_public_network_vlans(&self) -> Result<Vec<datatypes::NetworkVlan>, Error> {
        call(self, "getPublicNetworkVlans", ()).await
    }

    pub async fn get_public_subnets(&self) -> Result<Vec<datatypes::NetworkSubnet>, Error> {
        call(self, "getPublicSubnets", ()).await
    }

    pub async fn get_quotes(&self) -> Result<Vec<datatypes::BillingOrderQuote>, Error> {
        call(self, "getQuotes", ()).await
    }

    pub async fn get_recent_events(
        &self,
    ) -> Result<Vec<datatypes::NotificationOccurrenceEvent>, Error> {
        call(self, "getRecentEvents", ()).await
    }

    pub async fn get_referral_partner(&self) -> Result<datatypes::Account, Error> {
        call(self, "getReferralPartner", ()).await
    }

    pub async fn get_referral_partner_commission_forecast(
        &self,
    ) -> Result<Vec<datatypes::ContainerReferralPartnerCommission>, Error> {
        call(self, "getReferralPartnerCommissionForecast", ()).await
    }

    pub async fn get_referral_partner_commission_history(
        &self,
    ) -> Result<Vec<datatypes::ContainerReferralPartnerCommission>, Error> {
        call(self, "getReferralPartnerCommissionHistory", ()).await
    }

    pub async fn get_referral_partner_commission_pending(
        &self,
    ) -> Result<Vec<datatypes::ContainerReferralPartnerCommission>, Error> {
        call(self, "getReferralPartnerCommissionPending", ()).await
    }

    pub async fn get_referred_account_flag(&self) -> Result<bool, Error> {
        call(self, "getReferredAccountFlag", ()).await
    }

    pub async fn get_referred_accounts(&self) -> Result<Vec<datatypes::Account>, Error> {
        call(self, "getReferredAccounts", ()).await
    }

    pub async fn get_regulated_workloads(
        &self,
    ) -> Result<Vec<datatypes::LegalRegulatedWorkload>, Error> {
        call(self, "getRegulatedWorkloads", ()).await
    }

    pub async fn get_remote_management_command_requests(
        &self,
    ) -> Result<Vec<datatypes::HardwareComponentRemoteManagementCommandRequest>, Error> {
        call(self, "getRemoteManagementCommandRequests", ()).await
    }

    pub async fn get_replication_events(
        &self,
    ) -> Result<Vec<datatypes::NetworkStorageEvent>, Error> {
        call(self, "getReplicationEvents", ()).await
    }

    pub async fn get_require_silent_ibmid_user_creation(&self) -> Result<bool, Error> {
        call(self, "getRequireSilentIBMidUserCreation", ()).await
    }

    pub async fn get_reserved_capacity_agreements(
        &self,
    ) -> Result<Vec<datatypes::AccountAgreement>, Error> {
        call(self, "getReservedCapacityAgreements", ()).await
    }

    pub async fn get_reserved_capacity_groups(
        &self,
    ) -> Result<Vec<datatypes::VirtualReservedCapacityGroup>, Error> {
        call(self, "getReservedCapacityGroups", ()).await
    }

    pub async fn get_routers(&self) -> Result<Vec<datatypes::Hardware>, Error> {
        call(self, "getRouters", ()).await
    }

    pub async fn get_rwhois_data(&self) -> Result<Vec<datatypes::NetworkSubnetRwhoisData>, Error> {
        call(self, "getRwhoisData", ()).await
    }

    pub async fn get_saml_authentication(
        &self,
    ) -> Result<datatypes::AccountAuthenticationSaml, Error> {
        call(self, "getSamlAuthentication", ()).await
    }

    pub async fn get_secondary_domains(&self) -> Result<Vec<datatypes::DnsSecondary>, Error> {
        call(self, "getSecondaryDomains", ()).await
    }

    pub async fn get_security_certificates(
        &self,
    ) -> Result<Vec<datatypes::SecurityCertificate>, Error> {
        call(self, "getSecurityCertificates", ()).await
    }

    pub async fn get_security_groups(&self) -> Result<Vec<datatypes::NetworkSecurityGroup>, Error> {
        call(self, "getSecurityGroups", ()).await
    }

    pub async fn get_security_level(&self) -> Result<datatypes::SecurityLevel, Error> {
        call(self, "getSecurityLevel", ()).await
    }

    pub async fn get_security_scan_requests(
        &self,
    ) -> Result<Vec<datatypes::NetworkSecurityScannerRequest>, Error> {
        call(self, "getSecurityScanRequests", ()).await
    }

    pub async fn get_service_billing_items(&self) -> Result<Vec<datatypes::BillingItem>, Error> {
        call(self, "getServiceBillingItems", ()).await
    }

    /// Returns the image templates other accounts share with this one.
    pub async fn get_shared_block_device_template_groups(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuestBlockDeviceTemplateGroup>, Error> {
        call(self, "getSharedBlockDeviceTemplateGroups", ()).await
    }

    pub async fn get_shipments(&self) -> Result<Vec<datatypes::AccountShipment>, Error> {
        call(self, "getShipments", ()).await
    }

    pub async fn get_ssh_keys(&self) -> Result<Vec<datatypes::SecuritySshKey>, Error> {
        call(self, "getSshKeys", ()).await
    }

    pub async fn get_ssl_vpn_users(&self) -> Result<Vec<datatypes::UserCustomer>, Error> {
        call(self, "getSslVpnUsers", ()).await
    }

    pub async fn get_standard_pool_virtual_guests(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getStandardPoolVirtualGuests", ()).await
    }

    pub async fn get_subnet_registration_details(
        &self,
    ) -> Result<Vec<datatypes::AccountRegionalRegistryDetail>, Error> {
        call(self, "getSubnetRegistrationDetails", ()).await
    }

    pub async fn get_subnet_registrations(
        &self,
    ) -> Result<Vec<datatypes::NetworkSubnetRegistration>, Error> {
        call(self, "getSubnetRegistrations", ()).await
    }

    pub async fn get_subnets(&self) -> Result<Vec<datatypes::NetworkSubnet>, Error> {
        call(self, "getSubnets", ()).await
    }

    pub async fn get_support_representatives(&self) -> Result<Vec<datatypes::UserEmployee>, Error> {
        call(self, "getSupportRepresentatives", ()).await
    }

    pub async fn get_support_subscriptions(&self) -> Result<Vec<datatypes::BillingItem>, Error> {
        call(self, "getSupportSubscriptions", ()).await
    }

    pub async fn get_support_tier(&self) -> Result<String, Error> {
        call(self, "getSupportTier", ()).await
    }

    pub async fn get_suppress_invoices_flag(&self) -> Result<bool, Error> {
        call(self, "getSuppressInvoicesFlag", ()).await
    }

    pub async fn get_tags(&self) -> Result<Vec<datatypes::Tag>, Error> {
        call(self, "getTags", ()).await
    }

    pub async fn get_tech_incubator_program_info(
        &self,
        for_next_bill_cycle: bool,
    ) -> Result<datatypes::ContainerAccountDiscountProgram, Error> {
        call(self, "getTechIncubatorProgramInfo", (for_next_bill_cycle,)).await
    }

    pub async fn get_test_account_attribute_flag(&self) -> Result<bool, Error> {
        call(self, "getTestAccountAttributeFlag", ()).await
    }

    pub async fn get_third_party_policies_acceptance_status(
        &self,
    ) -> Result<Vec<datatypes::ContainerPolicyAcceptance>, Error> {
        call(self, "getThirdPartyPoliciesAcceptanceStatus", ()).await
    }

    pub async fn get_tickets(&self) -> Result<Vec<datatypes::Ticket>, Error> {
        call(self, "getTickets", ()).await
    }

    pub async fn get_tickets_closed_in_the_last_three_days(
        &self,
    ) -> Result<Vec<datatypes::Ticket>, Error> {
        call(self, "getTicketsClosedInTheLastThreeDays", ()).await
    }

    pub async fn get_tickets_closed_today(&self) -> Result<Vec<datatypes::Ticket>, Error> {
        call(self, "getTicketsClosedToday", ()).await
    }

    pub async fn get_upgrade_requests(
        &self,
    ) -> Result<Vec<datatypes::ProductUpgradeRequest>, Error> {
        call(self, "getUpgradeRequests", ()).await
    }

    pub async fn get_users(&self) -> Result<Vec<datatypes::UserCustomer>, Error> {
        call(self, "getUsers", ()).await
    }

    pub async fn get_valid_security_certificate_entries(
        &self,
    ) -> Result<Vec<datatypes::SecurityCertificateEntry>, Error> {
        call(self, "getValidSecurityCertificateEntries", ()).await
    }

    pub async fn get_valid_security_certificates(
        &self,
    ) -> Result<Vec<datatypes::SecurityCertificate>, Error> {
        call(self, "getValidSecurityCertificates", ()).await
    }

    pub async fn get_virtual_dedicated_racks(
        &self,
    ) -> Result<Vec<datatypes::NetworkBandwidthVersion1Allotment>, Error> {
        call(self, "getVirtualDedicatedRacks", ()).await
    }

    pub async fn get_virtual_disk_images(&self) -> Result<Vec<datatypes::VirtualDiskImage>, Error> {
        call(self, "getVirtualDiskImages", ()).await
    }

    /// Returns every virtual guest on the account.
    pub async fn get_virtual_guests(&self) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getVirtualGuests", ()).await
    }

    pub async fn get_virtual_guests_over_bandwidth_allocation(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getVirtualGuestsOverBandwidthAllocation", ()).await
    }

    pub async fn get_virtual_guests_projected_over_bandwidth_allocation(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getVirtualGuestsProjectedOverBandwidthAllocation", ()).await
    }

    pub async fn get_virtual_guests_with_cpanel(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getVirtualGuestsWithCpanel", ()).await
    }

    pub async fn get_virtual_guests_with_mcafee(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getVirtualGuestsWithMcafee", ()).await
    }

    pub async fn get_virtual_guests_with_mcafee_antivirus_redhat(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getVirtualGuestsWithMcafeeAntivirusRedhat", ()).await
    }

    pub async fn get_virtual_guests_with_mcafee_antivirus_windows(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getVirtualGuestsWithMcafeeAntivirusWindows", ()).await
    }

    pub async fn get_virtual_guests_with_mcafee_intrusion_detection_system(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getVirtualGuestsWithMcafeeIntrusionDetectionSystem", ()).await
    }

    pub async fn get_virtual_guests_with_plesk(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getVirtualGuestsWithPlesk", ()).await
    }

    pub async fn get_virtual_guests_with_quantastor(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getVirtualGuestsWithQuantastor", ()).await
    }

    pub async fn get_virtual_guests_with_urchin(
        &self,
    ) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getVirtualGuestsWithUrchin", ()).await
    }

    pub async fn get_virtual_private_rack(
        &self,
    ) -> Result<datatypes::NetworkBandwidthVersion1Allotment, Error> {
        call(self, "getVirtualPrivateRack", ()).await
    }

    pub async fn get_virtual_storage_archive_repositories(
        &self,
    ) -> Result<Vec<datatypes::VirtualStorageRepository>, Error> {
        call(self, "getVirtualStorageArchiveRepositories", ()).await
    }

    pub async fn get_virtual_storage_public_repositories(
        &self,
    ) -> Result<Vec<datatypes::VirtualStorageRepository>, Error> {
        call(self, "getVirtualStoragePublicRepositories", ()).await
    }

    pub async fn get_vm_ware_active_account_license_keys(&self) -> Result<Vec<String>, Error> {
        call(self, "getVmWareActiveAccountLicenseKeys", ()).await
    }

    pub async fn get_vpc_virtual_guests(&self) -> Result<Vec<datatypes::VirtualGuest>, Error> {
        call(self, "getVpcVirtualGuests", ()).await
    }

    pub async fn get_vpn_config_requires_vpn_manage_flag(&self) -> Result<bool, Error> {
        call(self, "getVpnConfigRequiresVPNManageFlag", ()).await
    }

    pub async fn get_windows_update_status(
        &self,
    ) -> Result<Vec<datatypes::ContainerUtilityMicrosoftWindowsUpdateServicesStatus>, Error> {
        call(self, "getWindowsUpdateStatus", ()).await
    }

    /// Returns `true` if the account has an attribute of the given type.
    pub async fn has_attribute(&self, attribute_type: &str) -> Result<bool, Error> {
        call(self, "hasAttribute", (attribute_type,)).await
    }

    /// Returns how many hourly guests the account may still create.
    pub async fn hourly_instance_limit(&self) -> Result<i64, Error> {
        call(self, "hourlyInstanceLimit", ()).await
    }

    /// Returns how many hourly bare metal servers the account may still create.
    pub async fn hourly_server_limit(&self) -> Result<i64, Error> {
        call(self, "hourlyServerLimit", ()).await
    }

    pub async fn initiate_payer_authentication(
        &self,
        setup_information: &datatypes::BillingPaymentCardPayerAuthenticationSetupInformation,
    ) -> Result<datatypes::BillingPaymentCardPayerAuthenticationSetup, Error> {
        call(self, "initiatePayerAuthentication", (setup_information,)).await
    }

    pub async fn is_active_vmware_customer(&self) -> Result<bool, Error> {
        call(self, "isActiveVmwareCustomer", ()).await
    }

    pub async fn is_eligible_for_local_currency_program(&self) -> Result<bool, Error> {
        call(self, "isEligibleForLocalCurrencyProgram", ()).await
    }

    pub async fn is_eligible_to_link_with_paas(&self) -> Result<bool, Error> {
        call(self, "isEligibleToLinkWithPaas", ()).await
    }

    /// Links an external service provider account.
    pub async fn link_external_account(
        &self,
        external_account_id: &str,
        authorization_token: &str,
        external_service_provider_key: &str,
    ) -> Result<(), Error> {
        call_void(
            self,
            "linkExternalAccount",
            (external_account_id, authorization_token, external_service_provider_key),
        )
        .await
    }

    pub async fn remove_alternate_credit_card(&self) -> Result<bool, Error> {
        call(self, "removeAlternateCreditCard", ()).await
    }

    /// Asks to replace the card on file.
    pub async fn request_credit_card_change(
        &self,
        request: &datatypes::BillingPaymentCardChangeRequest,
        vat_id: &str,
        payment_role_name: &str,
        only_change_nickname_flag: bool,
    ) -> Result<datatypes::BillingPaymentCardChangeRequest, Error> {
        call(
            self,
            "requestCreditCardChange",
            (request, vat_id, payment_role_name, only_change_nickname_flag),
        )
        .await
    }

    /// Pays an amount with a card that is not stored on the account.
    pub async fn request_manual_payment(
        &self,
        request: &datatypes::BillingPaymentCardManualPayment,
    ) -> Result<datatypes::BillingPaymentCardManualPayment, Error> {
        call(self, "requestManualPayment", (request,)).await
    }

    /// Pays an amount with the card on file.
    pub async fn request_manual_payment_using_credit_card_on_file(
        &self,
        amount: &str,
        pay_with_alternate_card_flag: bool,
        note: Option<&str>,
    ) -> Result<datatypes::BillingPaymentCardManualPayment, Error> {
        call(
            self,
            "requestManualPaymentUsingCreditCardOnFile",
            (amount, pay_with_alternate_card_flag, note),
        )
        .await
    }

    pub async fn save_internal_cost_recovery(
        &self,
        cost_recovery_container: &datatypes::ContainerAccountInternalIbmCostRecovery,
    ) -> Result<(), Error> {
        call_void(self, "saveInternalCostRecovery", (cost_recovery_container,)).await
    }

    /// Replaces the abuse notification addresses.
    pub async fn set_abuse_emails(&self, emails: &[&str]) -> Result<bool, Error> {
        call(self, "setAbuseEmails", (emails,)).await
    }

    /// Sets the size of a managed resource pool behind a router.
    pub async fn set_managed_pool_quantity(
        &self,
        pool_key_name: &str,
        backend_router: &str,
        quantity: i64,
    ) -> Result<i64, Error> {
        call(self, "setManagedPoolQuantity", (pool_key_name, backend_router, quantity)).await
    }

    /// Turns VLAN spanning on or off for the account.
    pub async fn set_vlan_span(&self, enabled: bool) -> Result<bool, Error> {
        call(self, "setVlanSpan", (enabled,)).await
    }

    /// Swaps the primary and alternate cards.
    pub async fn swap_credit_cards(&self) -> Result<bool, Error> {
        call(self, "swapCreditCards", ()).await
    }

    pub async fn sync_current_user_population_with_paas(&self) -> Result<(), Error> {
        call_void(self, "syncCurrentUserPopulationWithPaas", ()).await
    }

    pub async fn update_vpn_users_for_resource(
        &self,
        object_id: i64,
        object_type: &str,
    ) -> Result<bool, Error> {
        call(self, "updateVpnUsersForResource", (object_id, object_type)).await
    }

    /// Checks an account template and returns the problems found.
    pub async fn validate(&self, account: &datatypes::Account) -> Result<Vec<String>, Error> {
        call(self, "validate", (account,)).await
    }

    /// Returns `true` if `amount` is a valid manual payment.
    pub async fn validate_manual_payment_amount(&self, amount: &str) -> Result<bool, Error> {
        call(self, "validateManualPaymentAmount", (amount,)).await
    }
}

service! {
    /// An additional contact on the account.
    AccountContact => "SoftLayer_Account_Contact", get_account_contact_service
}

impl<S: Session> AccountContact<S> {
    /// Creates a contact allowed to request compliance reports.
    pub async fn create_compliance_report_requestor_contact(
        &self,
        requestor_template: &datatypes::AccountContact,
    ) -> Result<datatypes::AccountContact, Error> {
        call(self, "createComplianceReportRequestorContact", (requestor_template,)).await
    }

    pub async fn create_object(
        &self,
        template: &datatypes::AccountContact,
    ) -> Result<datatypes::AccountContact, Error> {
        call(self, "createObject", (template,)).await
    }

    pub async fn delete_object(&self) -> Result<bool, Error> {
        call(self, "deleteObject", ()).await
    }

    pub async fn edit_object(&self, template: &datatypes::AccountContact) -> Result<bool, Error> {
        call(self, "editObject", (template,)).await
    }

    pub async fn get_account(&self) -> Result<datatypes::Account, Error> {
        call(self, "getAccount", ()).await
    }

    /// Returns every contact type a contact may be created with.
    pub async fn get_all_contact_types(&self) -> Result<Vec<datatypes::AccountContactType>, Error> {
        call(self, "getAllContactTypes", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::AccountContact, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_type(&self) -> Result<datatypes::AccountContactType, Error> {
        call(self, "getType", ()).await
    }
}

service! {
    /// A free-form note on the account.
    AccountNote => "SoftLayer_Account_Note", get_account_note_service
}

impl<S: Session> AccountNote<S> {
    pub async fn create_object(
        &self,
        template: &datatypes::AccountNote,
    ) -> Result<datatypes::AccountNote, Error> {
        call(self, "createObject", (template,)).await
    }

    pub async fn delete_object(&self) -> Result<bool, Error> {
        call(self, "deleteObject", ()).await
    }

    /// Updates the note. The previous text is kept in its history.
    pub async fn edit_object(&self, template: &datatypes::AccountNote) -> Result<bool, Error> {
        call(self, "editObject", (template,)).await
    }

    pub async fn get_account(&self) -> Result<datatypes::Account, Error> {
        call(self, "getAccount", ()).await
    }

    /// Returns the user who wrote the note.
    pub async fn get_customer(&self) -> Result<datatypes::UserCustomer, Error> {
        call(self, "getCustomer", ()).await
    }

    pub async fn get_note_history(&self) -> Result<Vec<datatypes::AccountNoteHistory>, Error> {
        call(self, "getNoteHistory", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::AccountNote, Error> {
        call(self, "getObject", ()).await
    }
}

service! {
    /// A postal address on the account, used for datacenters, shipping, and
    /// billing.
    AccountAddress => "SoftLayer_Account_Address", get_account_address_service
}

impl<S: Session> AccountAddress<S> {
    pub async fn create_object(
        &self,
        template: &datatypes::AccountAddress,
    ) -> Result<datatypes::AccountAddress, Error> {
        call(self, "createObject", (template,)).await
    }

    pub async fn edit_object(&self, template: &datatypes::AccountAddress) -> Result<bool, Error> {
        call(self, "editObject", (template,)).await
    }

    pub async fn get_account(&self) -> Result<datatypes::Account, Error> {
        call(self, "getAccount", ()).await
    }

    pub async fn get_all_data_centers(&self) -> Result<Vec<datatypes::AccountAddress>, Error> {
        call(self, "getAllDataCenters", ()).await
    }

    pub async fn get_create_user(&self) -> Result<datatypes::UserCustomer, Error> {
        call(self, "getCreateUser", ()).await
    }

    pub async fn get_location(&self) -> Result<datatypes::Location, Error> {
        call(self, "getLocation", ()).await
    }

    pub async fn get_modify_employee(&self) -> Result<datatypes::UserEmployee, Error> {
        call(self, "getModifyEmployee", ()).await
    }

    pub async fn get_modify_user(&self) -> Result<datatypes::UserCustomer, Error> {
        call(self, "getModifyUser", ()).await
    }

    /// Looks up network addresses by location name.
    pub async fn get_network_address(
        &self,
        name: &str,
    ) -> Result<Vec<datatypes::AccountAddress>, Error> {
        call(self, "getNetworkAddress", (name,)).await
    }

    pub async fn get_object(&self) -> Result<datatypes::AccountAddress, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_type(&self) -> Result<datatypes::AccountAddressType, Error> {
        call(self, "getType", ()).await
    }
}

service! {
    /// The kinds of address an account can hold.
    AccountAddressType => "SoftLayer_Account_Address_Type", get_account_address_type_service
}

impl<S: Session> AccountAddressType<S> {
    pub async fn get_object(&self) -> Result<datatypes::AccountAddressType, Error> {
        call(self, "getObject", ()).await
    }
}

service! {
    /// A stored credential for an account-level service such as the VPN or
    /// storage portals.
    AccountPassword => "SoftLayer_Account_Password", get_account_password_service
}

impl<S: Session> AccountPassword<S> {
    pub async fn edit_object(&self, template: &datatypes::AccountPassword) -> Result<bool, Error> {
        call(self, "editObject", (template,)).await
    }

    pub async fn get_account(&self) -> Result<datatypes::Account, Error> {
        call(self, "getAccount", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::AccountPassword, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_type(&self) -> Result<datatypes::AccountPasswordType, Error> {
        call(self, "getType", ()).await
    }
}

service! {
    /// The link between this account and an IBM Cloud (Bluemix) account.
    AccountLinkBluemix => "SoftLayer_Account_Link_Bluemix", get_account_link_bluemix_service
}

impl<S: Session> AccountLinkBluemix<S> {
    pub async fn get_object(&self) -> Result<datatypes::AccountLinkBluemix, Error> {
        call(self, "getObject", ()).await
    }

    pub async fn get_support_tier_type(&self) -> Result<String, Error> {
        call(self, "getSupportTierType", ()).await
    }
}
