//! DNS domains, resource records, and secondary zones.
//!
//! The API models each record type as its own data type, but every type
//! except SRV shares the shape of [`DnsDomainResourceRecord`]. Those are
//! exposed as aliases; [`DnsDomainResourceRecordSrvType`] flattens the base
//! record and adds the SRV fields.

use serde::{Deserialize, Serialize};

use crate::account::Account;
use crate::scalar::{Time, deserialize_null_default};

// =============================================================================
// Domains and records
// =============================================================================

/// A forward DNS domain hosted on the SoftLayer nameservers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsDomain {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The domain name, e.g. `example.com`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Zone serial number, bumped on every change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<i64>,

    /// When the zone was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_date: Option<Time>,

    /// Set when the domain is managed by SoftLayer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_resource_flag: Option<bool>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Box<Account>>,

    /// All records in the zone.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub resource_records: Vec<DnsDomainResourceRecord>,

    /// Secondary zone this domain was converted from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Box<DnsSecondary>>,

    /// The zone's SOA record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soa_resource_record: Option<Box<DnsDomainResourceRecord>>,
}

/// A single resource record within a DNS domain.
///
/// The record carries the MX and SOA specific columns as well, matching the
/// shape the API returns for every record type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsDomainResourceRecord {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Domain the record belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<i64>,

    /// Host portion, `@` for the zone apex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Record value: an address, a target host, or text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Time to live in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,

    /// Lowercase record type, e.g. `a`, `mx`, `txt`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,

    /// Preference of an MX record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mx_priority: Option<i64>,

    /// Mailbox of the zone administrator (SOA).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_person: Option<String>,

    /// Secondary refresh interval in seconds (SOA).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh: Option<i64>,

    /// Secondary retry interval in seconds (SOA).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry: Option<i64>,

    /// Secondary expiry in seconds (SOA).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<i64>,

    /// Negative caching TTL in seconds (SOA).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,

    /// Set when the record points at a subnet gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_gateway_address: Option<bool>,

    /// The owning domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Box<DnsDomain>>,
}

/// An SRV record: the base record plus service location fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsDomainResourceRecordSrvType {
    /// Fields shared with every record type.
    #[serde(flatten)]
    pub record: DnsDomainResourceRecord,

    /// Symbolic service name, e.g. `_sip`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    /// Transport protocol, e.g. `_tcp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,

    /// Target priority, lower is preferred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,

    /// Relative weight among targets of equal priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,

    /// Port the service listens on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
}

// =============================================================================
// Secondary zones
// =============================================================================

/// A secondary DNS zone transferred from an external master.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsSecondary {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Name of the zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,

    /// Address of the master nameserver.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_ip_address: Option<String>,

    /// Minutes between zone transfers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_frequency: Option<i64>,

    /// Identifier of the transfer status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,

    /// Human readable transfer status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,

    /// When the zone was last transferred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update: Option<Time>,

    /// When the secondary zone was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Box<Account>>,

    /// Primary domain created from this zone, if converted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Box<DnsDomain>>,

    /// Messages from failed transfers.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub error_messages: Vec<DnsMessage>,

    /// Current transfer status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DnsStatus>,
}

/// A message logged against a DNS domain, record, or secondary zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsMessage {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Domain the message refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<i64>,

    /// Record the message refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_record_id: Option<i64>,

    /// Secondary zone the message refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_id: Option<i64>,

    /// Message text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Severity of the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// When the message was logged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,
}

/// Transfer status of a secondary DNS zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsStatus {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Status name, e.g. `Active` or `Transfer Now`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// =============================================================================
// Record type aliases
// =============================================================================

/// An `A` record.
pub type DnsDomainResourceRecordAType = DnsDomainResourceRecord;

/// An `AAAA` record.
pub type DnsDomainResourceRecordAaaaType = DnsDomainResourceRecord;

/// A `CNAME` record.
pub type DnsDomainResourceRecordCnameType = DnsDomainResourceRecord;

/// An `MX` record. Uses `mx_priority` on the base record.
pub type DnsDomainResourceRecordMxType = DnsDomainResourceRecord;

/// An `NS` record.
pub type DnsDomainResourceRecordNsType = DnsDomainResourceRecord;

/// An `SOA` record. Uses the SOA columns on the base record.
pub type DnsDomainResourceRecordSoaType = DnsDomainResourceRecord;

/// An `SPF` record.
pub type DnsDomainResourceRecordSpfType = DnsDomainResourceRecord;

/// A `TXT` record.
pub type DnsDomainResourceRecordTxtType = DnsDomainResourceRecord;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_type_maps_to_wire_type_key() {
        let record = DnsDomainResourceRecord {
            domain_id: Some(12),
            host: Some("www".into()),
            data: Some("10.0.0.1".into()),
            ttl: Some(86400),
            record_type: Some("a".into()),
            ..Default::default()
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "domainId": 12,
                "host": "www",
                "data": "10.0.0.1",
                "ttl": 86400,
                "type": "a"
            })
        );
    }

    #[test]
    fn srv_record_flattens_base_fields() {
        let raw = json!({
            "id": 7,
            "domainId": 12,
            "host": "@",
            "data": "sip.example.com",
            "type": "srv",
            "service": "_sip",
            "protocol": "_tcp",
            "priority": 10,
            "weight": 5,
            "port": 5060
        });

        let srv: DnsDomainResourceRecordSrvType = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(srv.record.id, Some(7));
        assert_eq!(srv.record.record_type.as_deref(), Some("srv"));
        assert_eq!(srv.service.as_deref(), Some("_sip"));
        assert_eq!(srv.port, Some(5060));

        assert_eq!(serde_json::to_value(&srv).unwrap(), raw);
    }

    #[test]
    fn domain_decodes_nested_records_and_timestamps() {
        let raw = json!({
            "id": 1,
            "name": "example.com",
            "serial": 2024030101,
            "updateDate": "2024-03-01T09:00:00-06:00",
            "resourceRecords": [
                { "id": 2, "type": "mx", "host": "@", "data": "mail.example.com.", "mxPriority": 10 },
                { "id": 3, "type": "soa", "host": "@", "responsiblePerson": "root.example.com.", "refresh": 3600 }
            ]
        });

        let domain: DnsDomain = serde_json::from_value(raw).unwrap();
        assert_eq!(domain.resource_records.len(), 2);

        let mx: &DnsDomainResourceRecordMxType = &domain.resource_records[0];
        assert_eq!(mx.mx_priority, Some(10));

        let soa: &DnsDomainResourceRecordSoaType = &domain.resource_records[1];
        assert_eq!(soa.refresh, Some(3600));
        assert_eq!(
            domain.update_date.unwrap().to_string(),
            "2024-03-01T09:00:00-06:00"
        );
    }

    #[test]
    fn empty_domain_serializes_to_empty_object() {
        assert_eq!(serde_json::to_value(DnsDomain::default()).unwrap(), json!({}));
    }
}
