use std::sync::Arc;

use serde_json::json;
use softlayer_lib::services::dns::DnsDomain;
use softlayer_lib::services::virtual_guest::VirtualGuest;
use softlayer_lib::testing::MockSession;
use softlayer_lib::{Error, Options, Service, SoftLayerError};

#[tokio::test]
async fn api_errors_come_back_unchanged() {
    let rejection = SoftLayerError::new(
        "SoftLayer_Exception_ObjectNotFound",
        "Unable to find object with id of '1'.",
    )
    .with_status_code(404);
    let session = MockSession::new().with_api_error(
        "SoftLayer_Virtual_Guest",
        "getObject",
        rejection.clone(),
    );

    let err = VirtualGuest::new(&session).id(1).get_object().await.unwrap_err();

    assert_eq!(err.api(), Some(&rejection));
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.to_string(), rejection.to_string());
}

#[tokio::test]
async fn transport_errors_come_back_unchanged() {
    let session = MockSession::new().with_transport_error(
        "SoftLayer_Dns_Domain",
        "getObject",
        "connection refused",
    );

    let err = DnsDomain::new(&session).id(1).get_object().await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.to_string(), "transport error: connection refused");
}

#[tokio::test]
async fn mismatched_document_is_a_decode_error() {
    let session = MockSession::new().with_response(
        "SoftLayer_Virtual_Guest",
        "getObject",
        json!({ "id": "not-a-number" }),
    );

    let err = VirtualGuest::new(&session).id(1).get_object().await.unwrap_err();

    match err {
        Error::Decode { service, method, .. } => {
            assert_eq!(service, "SoftLayer_Virtual_Guest");
            assert_eq!(method, "getObject");
        }
        other => panic!("expected a decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn unanswered_call_fails_to_decode_a_required_result() {
    let session = MockSession::new();

    let err = VirtualGuest::new(&session).id(1).is_pingable().await.unwrap_err();
    assert!(err.is_decode());
}

#[tokio::test]
async fn options_are_not_mutated_by_calls() {
    let session = MockSession::new().with_response(
        "SoftLayer_Dns_Domain",
        "getObject",
        json!({ "id": 5 }),
    );
    let domain = DnsDomain::new(&session).id(5).mask("id,name").limit(1);
    let before = domain.options().clone();

    domain.get_object().await.unwrap();
    domain.get_object().await.unwrap();

    assert_eq!(*domain.options(), before);
    for call in session.calls() {
        assert_eq!(call.options, before);
    }
}

#[tokio::test]
async fn cloned_handles_keep_separate_options() {
    let session = MockSession::new();
    let base = VirtualGuest::new(&session).mask("id,hostname");
    let first = base.clone().id(1);
    let second = base.clone().id(2);

    first.power_on().await.ok();
    second.power_on().await.ok();

    let ids: Vec<_> = session.calls().iter().map(|c| c.options.id).collect();
    assert_eq!(ids, [Some(1), Some(2)]);
    assert_eq!(base.options().id, None);
}

#[tokio::test]
async fn with_options_replaces_everything() {
    let session = MockSession::new();
    let options = Options::new().id(9).filter(r#"{"id":{"operation":9}}"#);

    let guest = VirtualGuest::new(&session)
        .mask("id")
        .limit(3)
        .with_options(options.clone());

    assert_eq!(Service::options(&guest), &options);
    assert_eq!(<VirtualGuest<&MockSession> as Service>::NAME, "SoftLayer_Virtual_Guest");
}

#[tokio::test]
async fn shared_session_serves_spawned_tasks() {
    let session = Arc::new(
        MockSession::new().with_response("SoftLayer_Virtual_Guest", "isPingable", json!(true)),
    );

    let handles: Vec<_> = (1..=4)
        .map(|id| {
            let guest = VirtualGuest::new(Arc::clone(&session)).id(id);
            tokio::spawn(async move { guest.is_pingable().await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().unwrap());
    }

    let mut ids: Vec<_> = session.calls().iter().filter_map(|c| c.options.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, [1, 2, 3, 4]);
}

#[tokio::test]
async fn into_session_returns_the_session() {
    let session = MockSession::new();
    let domain = DnsDomain::new(&session).id(1);

    let returned = domain.into_session();
    assert!(std::ptr::eq(returned, &session));
}
