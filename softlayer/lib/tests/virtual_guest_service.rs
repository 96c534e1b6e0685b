use serde_json::{Value, json};
use softlayer_lib::datatypes::{
    self, ContainerDiskImageCaptureTemplate, ContainerHardwareServerConfiguration, Location,
};
use softlayer_lib::services::virtual_guest::{
    VirtualDedicatedHost, VirtualGuest, VirtualGuestBlockDeviceTemplateGroup, VirtualHost,
    VirtualPlacementGroup, get_virtual_disk_image_service, get_virtual_guest_service,
    get_virtual_placement_group_rule_service,
};
use softlayer_lib::testing::MockSession;

const GUEST: &str = "SoftLayer_Virtual_Guest";

#[tokio::test]
async fn create_object_sends_the_template() {
    let session = MockSession::new().with_response(
        GUEST,
        "createObject",
        json!({
            "hostname": "web01",
            "domain": "example.com",
            "globalIdentifier": "0e0e6f5e-2f1c-4a0c-9d1e-5c8b1f0b7a11"
        }),
    );
    let template = datatypes::VirtualGuest {
        hostname: Some("web01".into()),
        domain: Some("example.com".into()),
        start_cpus: Some(1),
        max_memory: Some(1024),
        hourly_billing_flag: Some(true),
        local_disk_flag: Some(true),
        operating_system_reference_code: Some("UBUNTU_LATEST".into()),
        datacenter: Some(Box::new(Location {
            name: Some("dal13".into()),
            ..Default::default()
        })),
        ..Default::default()
    };

    let guest = get_virtual_guest_service(&session)
        .create_object(&template)
        .await
        .unwrap();

    assert!(guest.global_identifier.is_some());
    assert!(guest.id.is_none());

    let call = session.last_call().unwrap();
    assert_eq!(call.method, "createObject");
    assert_eq!(call.params[0]["datacenter"], json!({ "name": "dal13" }));
    assert_eq!(call.params[0]["startCpus"], json!(1));
    assert!(call.params[0].get("id").is_none());
}

#[tokio::test]
async fn power_actions_call_distinct_methods() {
    let session = MockSession::new()
        .with_response(GUEST, "powerOff", json!(true))
        .with_response(GUEST, "powerOn", json!(true))
        .with_response(GUEST, "rebootSoft", json!(true));
    let guest = VirtualGuest::new(&session).id(1234);

    assert!(guest.power_off().await.unwrap());
    assert!(guest.power_on().await.unwrap());
    assert!(guest.reboot_soft().await.unwrap());

    let calls = session.calls();
    let methods: Vec<_> = calls.iter().map(|c| c.method.as_str()).collect();
    assert_eq!(methods, ["powerOff", "powerOn", "rebootSoft"]);
    assert!(calls.iter().all(|c| c.options.id == Some(1234) && c.params.is_empty()));
}

#[tokio::test]
async fn power_state_and_provision_date_decode() {
    let session = MockSession::new()
        .with_response(
            GUEST,
            "getPowerState",
            json!({ "keyName": "HALTED", "name": "Halted" }),
        )
        .with_response(GUEST, "getProvisionDate", json!("2024-01-15T08:30:00-06:00"));
    let guest = VirtualGuest::new(&session).id(1234);

    let state = guest.get_power_state().await.unwrap();
    assert_eq!(state.key_name.as_deref(), Some("HALTED"));

    let provisioned = guest.get_provision_date().await.unwrap();
    assert_eq!(provisioned.to_string(), "2024-01-15T08:30:00-06:00");
}

#[tokio::test]
async fn void_methods_send_their_params() {
    let session = MockSession::new();
    let guest = VirtualGuest::new(&session).id(1234);

    guest
        .execute_remote_script("https://example.com/bootstrap.sh")
        .await
        .unwrap();
    guest.migrate_dedicated_host(88).await.unwrap();

    let calls = session.calls();
    assert_eq!(calls[0].params, vec![json!("https://example.com/bootstrap.sh")]);
    assert_eq!(calls[1].method, "migrateDedicatedHost");
    assert_eq!(calls[1].params, vec![json!(88)]);
}

#[tokio::test]
async fn reload_operating_system_confirms_with_token() {
    let session = MockSession::new().with_response(
        GUEST,
        "reloadOperatingSystem",
        json!("1A2B3C4D"),
    );
    let guest = VirtualGuest::new(&session).id(1234);
    let config = ContainerHardwareServerConfiguration {
        image_template_id: Some(55),
        ssh_key_ids: vec![7, 8],
        ..Default::default()
    };

    let token = guest.reload_operating_system(None, None).await.unwrap();
    guest
        .reload_operating_system(Some(token.as_str()), Some(&config))
        .await
        .unwrap();

    let calls = session.calls();
    assert_eq!(calls[0].params, vec![Value::Null, Value::Null]);
    assert_eq!(
        calls[1].params,
        vec![json!("1A2B3C4D"), json!({ "imageTemplateId": 55, "sshKeyIds": [7, 8] })]
    );
}

#[tokio::test]
async fn capture_image_returns_template_group() {
    let session = MockSession::new().with_response(
        GUEST,
        "captureImage",
        json!({ "id": 300, "name": "golden", "globalIdentifier": "abc" }),
    );
    let capture = ContainerDiskImageCaptureTemplate {
        name: Some("golden".into()),
        ..Default::default()
    };

    let image = VirtualGuest::new(&session)
        .id(1234)
        .capture_image(&capture)
        .await
        .unwrap();

    assert_eq!(image.id, Some(300));
    assert_eq!(session.last_call().unwrap().params, vec![json!({ "name": "golden" })]);
}

#[tokio::test]
async fn image_template_location_changes_send_location_lists() {
    let session = MockSession::new()
        .with_response(
            "SoftLayer_Virtual_Guest_Block_Device_Template_Group",
            "addLocations",
            json!(true),
        )
        .with_response(
            "SoftLayer_Virtual_Guest_Block_Device_Template_Group",
            "createPublicArchiveTransaction",
            json!(4411),
        );
    let images = VirtualGuestBlockDeviceTemplateGroup::new(&session).id(300);
    let locations = [Location {
        id: Some(1004997),
        ..Default::default()
    }];

    assert!(images.add_locations(&locations).await.unwrap());
    let transaction = images
        .create_public_archive_transaction("golden", "Golden image", "v1", &locations)
        .await
        .unwrap();

    assert_eq!(transaction, 4411);
    assert_eq!(
        session.last_call().unwrap().params,
        vec![
            json!("golden"),
            json!("Golden image"),
            json!("v1"),
            json!([{ "id": 1004997 }])
        ]
    );
}

#[tokio::test]
async fn placement_group_and_dedicated_host_routers() {
    let session = MockSession::new()
        .with_response(
            "SoftLayer_Virtual_PlacementGroup",
            "getAvailableRouters",
            json!([{ "id": 1, "hostname": "bcr01a.dal13" }]),
        )
        .with_response(
            "SoftLayer_Virtual_DedicatedHost",
            "getAvailableRouters",
            json!([]),
        );

    let routers = VirtualPlacementGroup::new(&session)
        .get_available_routers(Some(1004997))
        .await
        .unwrap();
    assert_eq!(routers[0].hostname.as_deref(), Some("bcr01a.dal13"));
    assert_eq!(session.last_call().unwrap().params, vec![json!(1004997)]);

    VirtualDedicatedHost::new(&session)
        .get_available_routers(None)
        .await
        .unwrap();
    assert_eq!(session.last_call().unwrap().params, vec![Value::Null]);
}

#[tokio::test]
async fn disk_image_boot_modes() {
    let session = MockSession::new().with_response(
        "SoftLayer_Virtual_Disk_Image",
        "getAvailableBootModes",
        json!(["HVM", "PV"]),
    );

    let modes = get_virtual_disk_image_service(&session)
        .id(9)
        .get_available_boot_modes()
        .await
        .unwrap();

    assert_eq!(modes, ["HVM", "PV"]);
}

#[tokio::test]
async fn operating_system_decodes_with_passwords() {
    let session = MockSession::new().with_response(
        GUEST,
        "getOperatingSystem",
        json!({
            "id": 7001,
            "softwareDescription": { "referenceCode": "UBUNTU_22_64", "version": "22.04-64" },
            "passwords": [{ "id": 1, "username": "root", "password": "s3cret" }]
        }),
    );

    let os: datatypes::SoftwareComponentOperatingSystem = VirtualGuest::new(&session)
        .id(123)
        .get_operating_system()
        .await
        .unwrap();

    let description = os.software_description.unwrap();
    assert_eq!(description.reference_code.as_deref(), Some("UBUNTU_22_64"));
    assert_eq!(os.passwords[0].username.as_deref(), Some("root"));
}

#[tokio::test]
async fn null_collections_decode_as_empty() {
    let session = MockSession::new().with_response(
        GUEST,
        "getObject",
        json!({ "id": 1, "blockDevices": null, "networkVlans": null }),
    );

    let guest = VirtualGuest::new(&session).id(1).get_object().await.unwrap();

    assert_eq!(guest.id, Some(1));
    assert!(guest.block_devices.is_empty());
    assert!(guest.network_vlans.is_empty());
}

#[tokio::test]
async fn bandwidth_image_decodes_base64_graph() {
    let session = MockSession::new().with_response(
        GUEST,
        "getBandwidthImage",
        json!({ "graphImage": "iVBORw0K", "graphTitle": "Public bandwidth" }),
    );
    let start: datatypes::Time = "2024-03-01T00:00:00-06:00".parse().unwrap();
    let end: datatypes::Time = "2024-03-02T00:00:00-06:00".parse().unwrap();

    let graph = VirtualGuest::new(&session)
        .id(123)
        .get_bandwidth_image("public", "day", start, end)
        .await
        .unwrap();

    let image = graph.graph_image.unwrap();
    assert_eq!(&image.as_slice()[..4], b"\x89PNG");

    let call = session.last_call().unwrap();
    assert_eq!(
        call.params,
        vec![
            json!("public"),
            json!("day"),
            json!("2024-03-01T00:00:00-06:00"),
            json!("2024-03-02T00:00:00-06:00"),
        ]
    );
}

#[tokio::test]
async fn hosts_and_placement_rules_have_their_own_services() {
    let session = MockSession::new()
        .with_response(
            "SoftLayer_Virtual_Host",
            "getPciDevices",
            json!([{ "id": 4, "xenPciId": "0000:3b:00.0" }]),
        )
        .with_response(
            "SoftLayer_Virtual_PlacementGroup_Rule",
            "getAllObjects",
            json!([{ "id": 1, "keyName": "SPREAD", "name": "SPREAD" }]),
        );

    let devices = VirtualHost::new(&session)
        .id(99)
        .get_pci_devices()
        .await
        .unwrap();
    assert_eq!(devices[0].xen_pci_id.as_deref(), Some("0000:3b:00.0"));
    assert_eq!(session.last_call().unwrap().options.id, Some(99));

    let rules = get_virtual_placement_group_rule_service(&session)
        .get_all_objects()
        .await
        .unwrap();
    assert_eq!(rules[0].key_name.as_deref(), Some("SPREAD"));
    assert_eq!(
        session.last_call().unwrap().service,
        "SoftLayer_Virtual_PlacementGroup_Rule"
    );
}
