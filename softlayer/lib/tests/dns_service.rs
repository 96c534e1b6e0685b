use serde_json::{Value, json};
use softlayer_lib::datatypes::{self, DnsDomainResourceRecordSrvType};
use softlayer_lib::services::dns::{
    DnsDomain, DnsDomainResourceRecord, DnsDomainResourceRecordMxType as MxService,
    DnsDomainResourceRecordSrvType as SrvService, DnsSecondary, get_dns_domain_service,
};
use softlayer_lib::testing::MockSession;

const DOMAIN: &str = "SoftLayer_Dns_Domain";

#[tokio::test]
async fn create_a_record_sends_positional_params() {
    let session = MockSession::new().with_response(
        DOMAIN,
        "createARecord",
        json!({ "id": 501, "domainId": 77, "host": "www", "data": "10.1.2.3", "ttl": 900, "type": "a" }),
    );

    let record = get_dns_domain_service(&session)
        .id(77)
        .create_a_record("www", "10.1.2.3", 900)
        .await
        .unwrap();

    assert_eq!(record.id, Some(501));
    assert_eq!(record.record_type.as_deref(), Some("a"));

    let call = session.last_call().unwrap();
    assert_eq!(call.service, DOMAIN);
    assert_eq!(call.method, "createARecord");
    assert_eq!(call.params, vec![json!("www"), json!("10.1.2.3"), json!(900)]);
    assert_eq!(call.options.id, Some(77));
}

#[tokio::test]
async fn absent_mx_priority_is_sent_as_null() {
    let session = MockSession::new().with_response(
        DOMAIN,
        "createMxRecord",
        json!({ "id": 9, "type": "mx", "mxPriority": 10 }),
    );
    let domain = DnsDomain::new(&session).id(77);

    let record = domain
        .create_mx_record("@", "mail.example.com.", 86400, None)
        .await
        .unwrap();
    assert_eq!(record.mx_priority, Some(10));

    domain
        .create_mx_record("@", "backup.example.com.", 86400, Some(20))
        .await
        .unwrap();

    let calls = session.calls();
    assert_eq!(calls[0].params[3], Value::Null);
    assert_eq!(calls[1].params[3], json!(20));
}

#[tokio::test]
async fn create_ptr_record_uses_service_level_call() {
    let session = MockSession::new().with_response(
        DOMAIN,
        "createPtrRecord",
        json!({ "id": 3, "type": "ptr", "data": "web01.example.com." }),
    );

    DnsDomain::new(&session)
        .create_ptr_record("10.1.2.3", "web01.example.com.", 3600)
        .await
        .unwrap();

    let call = session.last_call().unwrap();
    assert!(call.options.is_empty());
    assert_eq!(
        call.params,
        vec![json!("10.1.2.3"), json!("web01.example.com."), json!(3600)]
    );
}

#[tokio::test]
async fn create_object_sends_template_without_unset_fields() {
    let session = MockSession::new().with_response(
        DOMAIN,
        "createObject",
        json!({ "id": 1, "name": "example.com", "serial": 2024030100 }),
    );

    let template = datatypes::DnsDomain {
        name: Some("example.com".into()),
        resource_records: vec![datatypes::DnsDomainResourceRecord {
            host: Some("@".into()),
            data: Some("10.0.0.1".into()),
            record_type: Some("a".into()),
            ..Default::default()
        }],
        ..Default::default()
    };

    let created = DnsDomain::new(&session).create_object(&template).await.unwrap();
    assert_eq!(created.id, Some(1));

    let call = session.last_call().unwrap();
    assert_eq!(
        call.params,
        vec![json!({
            "name": "example.com",
            "resourceRecords": [{ "host": "@", "data": "10.0.0.1", "type": "a" }]
        })]
    );
}

#[tokio::test]
async fn zone_file_and_listing_calls_pass_options_through() {
    let session = MockSession::new()
        .with_response(DOMAIN, "getZoneFileContents", json!("$ORIGIN example.com.\n"))
        .with_response(
            DOMAIN,
            "getResourceRecords",
            json!([{ "id": 1, "type": "a" }, { "id": 2, "type": "txt" }]),
        );
    let domain = DnsDomain::new(&session)
        .id(77)
        .mask("id,type")
        .filter(r#"{"resourceRecords":{"type":{"operation":"a"}}}"#)
        .limit(25)
        .offset(50);

    let zone = domain.get_zone_file_contents().await.unwrap();
    assert!(zone.starts_with("$ORIGIN"));

    let records = domain.get_resource_records().await.unwrap();
    assert_eq!(records.len(), 2);

    for call in session.calls() {
        assert!(call.params.is_empty());
        assert_eq!(call.options, *domain.options());
    }
    assert_eq!(domain.options().mask.as_deref(), Some("mask[id,type]"));
}

#[tokio::test]
async fn resource_record_batch_calls_send_one_list_param() {
    let session = MockSession::new().with_response(
        "SoftLayer_Dns_Domain_ResourceRecord",
        "editObjects",
        json!(true),
    );
    let records = vec![
        datatypes::DnsDomainResourceRecord {
            id: Some(1),
            ttl: Some(300),
            ..Default::default()
        },
        datatypes::DnsDomainResourceRecord {
            id: Some(2),
            ttl: Some(300),
            ..Default::default()
        },
    ];

    let edited = DnsDomainResourceRecord::new(&session)
        .edit_objects(&records)
        .await
        .unwrap();
    assert!(edited);

    let call = session.last_call().unwrap();
    assert_eq!(
        call.params,
        vec![json!([{ "id": 1, "ttl": 300 }, { "id": 2, "ttl": 300 }])]
    );
}

#[tokio::test]
async fn srv_record_round_trips_through_its_service() {
    let session = MockSession::new().with_response(
        "SoftLayer_Dns_Domain_ResourceRecord_SrvType",
        "getObject",
        json!({
            "id": 12,
            "domainId": 77,
            "host": "@",
            "data": "sip.example.com",
            "type": "srv",
            "service": "_sip",
            "protocol": "_udp",
            "priority": 10,
            "weight": 60,
            "port": 5060
        }),
    );

    let srv: DnsDomainResourceRecordSrvType =
        SrvService::new(&session).id(12).get_object().await.unwrap();

    assert_eq!(srv.record.domain_id, Some(77));
    assert_eq!(srv.protocol.as_deref(), Some("_udp"));
    assert_eq!(srv.weight, Some(60));
}

#[tokio::test]
async fn secondary_zone_lookups() {
    let session = MockSession::new()
        .with_response(
            "SoftLayer_Dns_Secondary",
            "getByDomainName",
            json!([{ "id": 4, "zoneName": "example.org", "transferFrequency": 10 }]),
        )
        .with_response(
            "SoftLayer_Dns_Secondary",
            "getStatus",
            json!({ "id": 1, "name": "Active" }),
        );
    let secondary = DnsSecondary::new(&session);

    let zones = secondary.get_by_domain_name("example.org").await.unwrap();
    assert_eq!(zones[0].transfer_frequency, Some(10));
    assert_eq!(session.last_call().unwrap().params, vec![json!("example.org")]);

    let status = secondary.id(4).get_status().await.unwrap();
    assert_eq!(status.name.as_deref(), Some("Active"));
}

#[tokio::test]
async fn mx_type_service_creates_record_with_priority() {
    let session = MockSession::new().with_response(
        "SoftLayer_Dns_Domain_ResourceRecord_MxType",
        "createObject",
        json!({ "id": 88, "domainId": 77, "type": "mx", "mxPriority": 5 }),
    );
    let template = datatypes::DnsDomainResourceRecordMxType {
        domain_id: Some(77),
        host: Some("@".into()),
        data: Some("mail.example.com.".into()),
        record_type: Some("mx".into()),
        mx_priority: Some(5),
        ..Default::default()
    };

    let created = MxService::new(&session)
        .create_object(&template)
        .await
        .unwrap();

    assert_eq!(created.id, Some(88));
    assert_eq!(created.mx_priority, Some(5));

    let call = session.last_call().unwrap();
    assert_eq!(call.service, "SoftLayer_Dns_Domain_ResourceRecord_MxType");
    assert_eq!(call.method, "createObject");
    assert_eq!(call.params[0]["mxPriority"], json!(5));
    assert_eq!(call.params[0]["type"], json!("mx"));
}
