use serde_json::{Value, json};
use softlayer_lib::datatypes::{self, Float64};
use softlayer_lib::services::account::{
    Account, AccountAddress, AccountContact, AccountNote, get_account_service,
};
use softlayer_lib::testing::MockSession;

const ACCOUNT: &str = "SoftLayer_Account";

#[tokio::test]
async fn get_object_decodes_account_with_relations() {
    let session = MockSession::new().with_response(
        ACCOUNT,
        "getObject",
        json!({
            "id": 278444,
            "companyName": "Example Co",
            "hourlyVirtualGuestCount": 3,
            "brand": { "id": 2, "keyName": "SOFTLAYER" },
            "accountContacts": [{ "id": 8, "email": "ops@example.com" }]
        }),
    );

    let account = get_account_service(&session)
        .mask("id,companyName,brand,accountContacts")
        .get_object()
        .await
        .unwrap();

    assert_eq!(account.company_name.as_deref(), Some("Example Co"));
    assert_eq!(account.hourly_virtual_guest_count, Some(3));
    assert_eq!(account.account_contacts[0].email.as_deref(), Some("ops@example.com"));

    let call = session.last_call().unwrap();
    assert!(call.params.is_empty());
    assert_eq!(
        call.options.mask.as_deref(),
        Some("mask[id,companyName,brand,accountContacts]")
    );
}

#[tokio::test]
async fn money_amounts_decode_from_strings() {
    let session = MockSession::new()
        .with_response(ACCOUNT, "getBalance", json!("-12.75"))
        .with_response(ACCOUNT, "getNextInvoiceTotalAmount", json!(431.2));
    let account = Account::new(&session);

    assert_eq!(account.get_balance().await.unwrap(), Float64(-12.75));
    assert_eq!(
        account.get_next_invoice_total_amount().await.unwrap().value(),
        431.2
    );
}

#[tokio::test]
async fn void_methods_accept_any_reply() {
    let session = MockSession::new()
        .with_response(ACCOUNT, "enableEuSupport", json!(true))
        .with_response(ACCOUNT, "disableEuSupport", Value::Null);
    let account = Account::new(&session);

    account.enable_eu_support().await.unwrap();
    account.disable_eu_support().await.unwrap();

    let methods: Vec<_> = session.calls().into_iter().map(|c| c.method).collect();
    assert_eq!(methods, ["enableEuSupport", "disableEuSupport"]);
}

#[tokio::test]
async fn create_user_sends_optional_params_as_null() {
    let session = MockSession::new().with_response(
        ACCOUNT,
        "createUser",
        json!({ "id": 90, "username": "ada" }),
    );
    let template = datatypes::UserCustomer {
        username: Some("ada".into()),
        first_name: Some("Ada".into()),
        last_name: Some("Lovelace".into()),
        email: Some("ada@example.com".into()),
        ..Default::default()
    };

    let user = Account::new(&session)
        .create_user(&template, "s3cret!", None, Some(true))
        .await
        .unwrap();
    assert_eq!(user.id, Some(90));

    let call = session.last_call().unwrap();
    assert_eq!(call.params.len(), 4);
    assert_eq!(call.params[0]["username"], json!("ada"));
    assert_eq!(call.params[1], json!("s3cret!"));
    assert_eq!(call.params[2], Value::Null);
    assert_eq!(call.params[3], json!(true));
}

#[tokio::test]
async fn set_abuse_emails_sends_a_single_list() {
    let session = MockSession::new().with_response(ACCOUNT, "setAbuseEmails", json!(true));

    let updated = Account::new(&session)
        .set_abuse_emails(&["abuse@example.com", "noc@example.com"])
        .await
        .unwrap();

    assert!(updated);
    assert_eq!(
        session.last_call().unwrap().params,
        vec![json!(["abuse@example.com", "noc@example.com"])]
    );
}

#[tokio::test]
async fn relational_listings_honor_paging_options() {
    let session = MockSession::new().with_response(
        ACCOUNT,
        "getVirtualGuests",
        json!([{ "id": 1, "hostname": "a" }, { "id": 2, "hostname": "b" }]),
    );

    let guests = Account::new(&session)
        .limit(2)
        .offset(10)
        .get_virtual_guests()
        .await
        .unwrap();

    assert_eq!(guests.len(), 2);
    let options = session.last_call().unwrap().options;
    assert_eq!((options.limit, options.offset), (Some(2), Some(10)));
}

#[tokio::test]
async fn contact_and_note_services() {
    let session = MockSession::new()
        .with_response(
            "SoftLayer_Account_Contact",
            "getAllContactTypes",
            json!([{ "id": 1, "keyName": "TECHNICAL", "name": "Technical" }]),
        )
        .with_response(
            "SoftLayer_Account_Note",
            "getNoteHistory",
            json!([{ "id": 10, "note": "first draft" }]),
        );

    let types = AccountContact::new(&session)
        .get_all_contact_types()
        .await
        .unwrap();
    assert_eq!(types[0].key_name.as_deref(), Some("TECHNICAL"));

    let history = AccountNote::new(&session).id(3).get_note_history().await.unwrap();
    assert_eq!(history[0].note.as_deref(), Some("first draft"));
    assert_eq!(session.last_call().unwrap().options.id, Some(3));
}

#[tokio::test]
async fn next_invoice_pdf_decodes_bytes() {
    let session =
        MockSession::new().with_response(ACCOUNT, "getNextInvoicePdf", json!("JVBERi0xLjQ="));
    let created: datatypes::Time = "2024-04-01T00:00:00-05:00".parse().unwrap();

    let pdf = get_account_service(&session)
        .get_next_invoice_pdf(created)
        .await
        .unwrap();

    assert_eq!(pdf.as_slice(), b"%PDF-1.4");
    assert_eq!(
        session.last_call().unwrap().params,
        vec![json!("2024-04-01T00:00:00-05:00")]
    );
}

#[tokio::test]
async fn address_service_creates_address() {
    let session = MockSession::new().with_response(
        "SoftLayer_Account_Address",
        "createObject",
        json!({ "id": 12, "city": "Dallas", "type": { "id": 3, "keyName": "SHIPPING" } }),
    );
    let template = datatypes::AccountAddress {
        address1: Some("4849 Alpha Rd".into()),
        city: Some("Dallas".into()),
        country: Some("US".into()),
        ..Default::default()
    };

    let address = AccountAddress::new(&session)
        .create_object(&template)
        .await
        .unwrap();

    assert_eq!(address.id, Some(12));
    assert_eq!(
        address.address_type.unwrap().key_name.as_deref(),
        Some("SHIPPING")
    );
    assert_eq!(
        session.last_call().unwrap().params,
        vec![json!({ "address1": "4849 Alpha Rd", "city": "Dallas", "country": "US" })]
    );
}
