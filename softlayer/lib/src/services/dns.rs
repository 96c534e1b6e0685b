//! Bindings for the DNS services: domains, resource records, and secondary zones.

use softlayer_datatypes as datatypes;

use crate::error::Error;
use crate::service::{call, service};
use crate::session::Session;

service! {
    /// A forward DNS domain and the records in its zone.
    ///
    /// The record shortcuts (`create_a_record` and friends) add a record to the
    /// domain selected with [`DnsDomain::id`] without building a full
    /// [`DnsDomainResourceRecord`] template.
    DnsDomain => "SoftLayer_Dns_Domain", get_dns_domain_service
}

impl<S: Session> DnsDomain<S> {
    /// Adds an A record pointing `host` at the IPv4 address `data`.
    pub async fn create_a_record(
        &self,
        host: &str,
        data: &str,
        ttl: i64,
    ) -> Result<datatypes::DnsDomainResourceRecordAType, Error> {
        call(self, "createARecord", (host, data, ttl)).await
    }

    /// Adds an AAAA record pointing `host` at the IPv6 address `data`.
    pub async fn create_aaaa_record(
        &self,
        host: &str,
        data: &str,
        ttl: i64,
    ) -> Result<datatypes::DnsDomainResourceRecordAaaaType, Error> {
        call(self, "createAaaaRecord", (host, data, ttl)).await
    }

    /// Adds a CNAME record aliasing `host` to `data`.
    pub async fn create_cname_record(
        &self,
        host: &str,
        data: &str,
        ttl: i64,
    ) -> Result<datatypes::DnsDomainResourceRecordCnameType, Error> {
        call(self, "createCnameRecord", (host, data, ttl)).await
    }

    /// Adds an MX record. The API applies its default preference when
    /// `mx_priority` is `None`.
    pub async fn create_mx_record(
        &self,
        host: &str,
        data: &str,
        ttl: i64,
        mx_priority: Option<i64>,
    ) -> Result<datatypes::DnsDomainResourceRecordMxType, Error> {
        call(self, "createMxRecord", (host, data, ttl, mx_priority)).await
    }

    /// Adds an NS record delegating `host` to the nameserver `data`.
    pub async fn create_ns_record(
        &self,
        host: &str,
        data: &str,
        ttl: i64,
    ) -> Result<datatypes::DnsDomainResourceRecordNsType, Error> {
        call(self, "createNsRecord", (host, data, ttl)).await
    }

    /// Creates a domain, optionally with an initial set of records.
    pub async fn create_object(
        &self,
        template: &datatypes::DnsDomain,
    ) -> Result<datatypes::DnsDomain, Error> {
        call(self, "createObject", (template,)).await
    }

    /// Creates several domains in one call.
    pub async fn create_objects(
        &self,
        templates: &[datatypes::DnsDomain],
    ) -> Result<Vec<datatypes::DnsDomain>, Error> {
        call(self, "createObjects", (templates,)).await
    }

    /// Sets the reverse record of an address the account owns.
    ///
    /// This is a service-level call; no domain id is needed.
    pub async fn create_ptr_record(
        &self,
        ip_address: &str,
        ptr_record: &str,
        ttl: i64,
    ) -> Result<datatypes::DnsDomainResourceRecord, Error> {
        call(self, "createPtrRecord", (ip_address, ptr_record, ttl)).await
    }

    /// Adds an SPF record.
    pub async fn create_spf_record(
        &self,
        host: &str,
        data: &str,
        ttl: i64,
    ) -> Result<datatypes::DnsDomainResourceRecordSpfType, Error> {
        call(self, "createSpfRecord", (host, data, ttl)).await
    }

    /// Adds a TXT record.
    pub async fn create_txt_record(
        &self,
        host: &str,
        data: &str,
        ttl: i64,
    ) -> Result<datatypes::DnsDomainResourceRecordTxtType, Error> {
        call(self, "createTxtRecord", (host, data, ttl)).await
    }

    /// Deletes the domain and every record in it.
    pub async fn delete_object(&self) -> Result<bool, Error> {
        call(self, "deleteObject", ()).await
    }

    /// Returns the account that owns the domain.
    pub async fn get_account(&self) -> Result<datatypes::Account, Error> {
        call(self, "getAccount", ()).await
    }

    /// Finds the account's domains by name.
    pub async fn get_by_domain_name(&self, name: &str) -> Result<Vec<datatypes::DnsDomain>, Error> {
        call(self, "getByDomainName", (name,)).await
    }

    /// Returns `true` if the domain is managed by SoftLayer.
    pub async fn get_managed_resource_flag(&self) -> Result<bool, Error> {
        call(self, "getManagedResourceFlag", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::DnsDomain, Error> {
        call(self, "getObject", ()).await
    }

    /// Returns every record in the zone.
    pub async fn get_resource_records(
        &self,
    ) -> Result<Vec<datatypes::DnsDomainResourceRecord>, Error> {
        call(self, "getResourceRecords", ()).await
    }

    /// Returns the secondary zone the domain was converted from.
    pub async fn get_secondary(&self) -> Result<datatypes::DnsSecondary, Error> {
        call(self, "getSecondary", ()).await
    }

    /// Returns the zone's SOA record.
    pub async fn get_soa_resource_record(
        &self,
    ) -> Result<datatypes::DnsDomainResourceRecordSoaType, Error> {
        call(self, "getSoaResourceRecord", ()).await
    }

    /// Returns the zone rendered in BIND zone file format.
    pub async fn get_zone_file_contents(&self) -> Result<String, Error> {
        call(self, "getZoneFileContents", ()).await
    }
}

service! {
    /// A single record in a DNS zone.
    DnsDomainResourceRecord => "SoftLayer_Dns_Domain_ResourceRecord", get_dns_domain_resource_record_service
}

impl<S: Session> DnsDomainResourceRecord<S> {
    /// Creates a record. The template must name its domain and type.
    pub async fn create_object(
        &self,
        template: &datatypes::DnsDomainResourceRecord,
    ) -> Result<datatypes::DnsDomainResourceRecord, Error> {
        call(self, "createObject", (template,)).await
    }

    /// Creates several records in one call.
    pub async fn create_objects(
        &self,
        templates: &[datatypes::DnsDomainResourceRecord],
    ) -> Result<Vec<datatypes::DnsDomainResourceRecord>, Error> {
        call(self, "createObjects", (templates,)).await
    }

    /// Deletes the record.
    pub async fn delete_object(&self) -> Result<bool, Error> {
        call(self, "deleteObject", ()).await
    }

    /// Deletes the records matching the templates' ids.
    pub async fn delete_objects(
        &self,
        templates: &[datatypes::DnsDomainResourceRecord],
    ) -> Result<bool, Error> {
        call(self, "deleteObjects", (templates,)).await
    }

    /// Updates the record with the fields set on `template`.
    pub async fn edit_object(
        &self,
        template: &datatypes::DnsDomainResourceRecord,
    ) -> Result<bool, Error> {
        call(self, "editObject", (template,)).await
    }

    /// Updates several records, each identified by its template's id.
    pub async fn edit_objects(
        &self,
        templates: &[datatypes::DnsDomainResourceRecord],
    ) -> Result<bool, Error> {
        call(self, "editObjects", (templates,)).await
    }

    /// Returns the domain the record belongs to.
    pub async fn get_domain(&self) -> Result<datatypes::DnsDomain, Error> {
        call(self, "getDomain", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::DnsDomainResourceRecord, Error> {
        call(self, "getObject", ()).await
    }
}

service! {
    /// An MX record, addressed through its own service so `mxPriority` is
    /// validated on create and edit.
    DnsDomainResourceRecordMxType => "SoftLayer_Dns_Domain_ResourceRecord_MxType", get_dns_domain_resource_record_mx_type_service
}

impl<S: Session> DnsDomainResourceRecordMxType<S> {
    pub async fn create_object(
        &self,
        template: &datatypes::DnsDomainResourceRecordMxType,
    ) -> Result<datatypes::DnsDomainResourceRecordMxType, Error> {
        call(self, "createObject", (template,)).await
    }

    pub async fn create_objects(
        &self,
        templates: &[datatypes::DnsDomainResourceRecord],
    ) -> Result<Vec<datatypes::DnsDomainResourceRecord>, Error> {
        call(self, "createObjects", (templates,)).await
    }

    pub async fn delete_object(&self) -> Result<bool, Error> {
        call(self, "deleteObject", ()).await
    }

    pub async fn delete_objects(
        &self,
        templates: &[datatypes::DnsDomainResourceRecordMxType],
    ) -> Result<bool, Error> {
        call(self, "deleteObjects", (templates,)).await
    }

    pub async fn edit_object(
        &self,
        template: &datatypes::DnsDomainResourceRecordMxType,
    ) -> Result<bool, Error> {
        call(self, "editObject", (template,)).await
    }

    pub async fn edit_objects(
        &self,
        templates: &[datatypes::DnsDomainResourceRecordMxType],
    ) -> Result<bool, Error> {
        call(self, "editObjects", (templates,)).await
    }

    pub async fn get_domain(&self) -> Result<datatypes::DnsDomain, Error> {
        call(self, "getDomain", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::DnsDomainResourceRecordMxType, Error> {
        call(self, "getObject", ()).await
    }
}

service! {
    /// An SRV record.
    DnsDomainResourceRecordSrvType => "SoftLayer_Dns_Domain_ResourceRecord_SrvType", get_dns_domain_resource_record_srv_type_service
}

impl<S: Session> DnsDomainResourceRecordSrvType<S> {
    /// Creates an SRV record. `service`, `protocol`, `priority`, `weight`,
    /// and `port` are required alongside the base record fields.
    pub async fn create_object(
        &self,
        template: &datatypes::DnsDomainResourceRecordSrvType,
    ) -> Result<datatypes::DnsDomainResourceRecordSrvType, Error> {
        call(self, "createObject", (template,)).await
    }

    pub async fn create_objects(
        &self,
        templates: &[datatypes::DnsDomainResourceRecord],
    ) -> Result<Vec<datatypes::DnsDomainResourceRecord>, Error> {
        call(self, "createObjects", (templates,)).await
    }

    pub async fn delete_object(&self) -> Result<bool, Error> {
        call(self, "deleteObject", ()).await
    }

    pub async fn delete_objects(
        &self,
        templates: &[datatypes::DnsDomainResourceRecordSrvType],
    ) -> Result<bool, Error> {
        call(self, "deleteObjects", (templates,)).await
    }

    pub async fn edit_object(
        &self,
        template: &datatypes::DnsDomainResourceRecordSrvType,
    ) -> Result<bool, Error> {
        call(self, "editObject", (template,)).await
    }

    pub async fn edit_objects(
        &self,
        templates: &[datatypes::DnsDomainResourceRecordSrvType],
    ) -> Result<bool, Error> {
        call(self, "editObjects", (templates,)).await
    }

    pub async fn get_domain(&self) -> Result<datatypes::DnsDomain, Error> {
        call(self, "getDomain", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::DnsDomainResourceRecordSrvType, Error> {
        call(self, "getObject", ()).await
    }
}

service! {
    /// A secondary zone, transferred periodically from an external master.
    DnsSecondary => "SoftLayer_Dns_Secondary", get_dns_secondary_service
}

impl<S: Session> DnsSecondary<S> {
    /// Converts the secondary zone into a primary [`DnsDomain`]. Transfers
    /// stop and the records become editable.
    pub async fn convert_to_primary(&self) -> Result<bool, Error> {
        call(self, "convertToPrimary", ()).await
    }

    /// Creates a secondary zone. `zoneName`, `masterIpAddress`, and
    /// `transferFrequency` are required.
    pub async fn create_object(
        &self,
        template: &datatypes::DnsSecondary,
    ) -> Result<datatypes::DnsSecondary, Error> {
        call(self, "createObject", (template,)).await
    }

    /// Creates several secondary zones in one call.
    pub async fn create_objects(
        &self,
        templates: &[datatypes::DnsSecondary],
    ) -> Result<Vec<datatypes::DnsSecondary>, Error> {
        call(self, "createObjects", (templates,)).await
    }

    /// Deletes the secondary zone.
    pub async fn delete_object(&self) -> Result<bool, Error> {
        call(self, "deleteObject", ()).await
    }

    /// Updates the master address or transfer frequency.
    pub async fn edit_object(&self, template: &datatypes::DnsSecondary) -> Result<bool, Error> {
        call(self, "editObject", (template,)).await
    }

    /// Returns the account that owns the zone.
    pub async fn get_account(&self) -> Result<datatypes::Account, Error> {
        call(self, "getAccount", ()).await
    }

    /// Finds the account's secondary zones by name.
    pub async fn get_by_domain_name(
        &self,
        name: &str,
    ) -> Result<Vec<datatypes::DnsSecondary>, Error> {
        call(self, "getByDomainName", (name,)).await
    }

    /// Returns the primary domain created from this zone, if it was converted.
    pub async fn get_domain(&self) -> Result<datatypes::DnsDomain, Error> {
        call(self, "getDomain", ()).await
    }

    /// Returns the messages logged by failed transfers.
    pub async fn get_error_messages(&self) -> Result<Vec<datatypes::DnsMessage>, Error> {
        call(self, "getErrorMessages", ()).await
    }

    pub async fn get_object(&self) -> Result<datatypes::DnsSecondary, Error> {
        call(self, "getObject", ()).await
    }

    /// Returns the current transfer status.
    pub async fn get_status(&self) -> Result<datatypes::DnsStatus, Error> {
        call(self, "getStatus", ()).await
    }

    /// Schedules an immediate zone transfer.
    pub async fn transfer_now(&self) -> Result<bool, Error> {
        call(self, "transferNow", ()).await
    }
}
