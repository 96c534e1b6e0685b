use serde::Serialize;
use serde_json::{Value, json};
use softlayer_lib::datatypes::{ContainerProductOrder, Location, ProductItem, ProductItemPrice};
use softlayer_lib::services::product::{
    ProductItem as ItemService, ProductItemCategory, ProductItemPrice as PriceService,
    ProductOrder, ProductPackage, get_product_order_service, get_product_upgrade_request_service,
};
use softlayer_lib::testing::MockSession;

const ORDER: &str = "SoftLayer_Product_Order";

/// A caller-defined order container, serialized as-is.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VirtualGuestOrder {
    complex_type: &'static str,
    package_id: i64,
    location: &'static str,
    quantity: i64,
    prices: Vec<PriceRef>,
}

#[derive(Serialize)]
struct PriceRef {
    id: i64,
}

fn sample_order() -> VirtualGuestOrder {
    VirtualGuestOrder {
        complex_type: "SoftLayer_Container_Product_Order_Virtual_Guest",
        package_id: 46,
        location: "dal13",
        quantity: 1,
        prices: vec![PriceRef { id: 1641 }, PriceRef { id: 905 }],
    }
}

#[tokio::test]
async fn verify_order_accepts_any_serializable_order() {
    let session = MockSession::new().with_response(
        ORDER,
        "verifyOrder",
        json!({
            "packageId": 46,
            "postTaxRecurring": "0.05",
            "prices": [{ "id": 1641, "hourlyRecurringFee": ".021" }]
        }),
    );

    let verified = get_product_order_service(&session)
        .verify_order(&sample_order())
        .await
        .unwrap();

    assert_eq!(verified.package_id, Some(46));
    assert_eq!(verified.post_tax_recurring.map(|f| f.value()), Some(0.05));

    let call = session.last_call().unwrap();
    assert_eq!(call.params.len(), 1);
    assert_eq!(
        call.params[0]["complexType"],
        json!("SoftLayer_Container_Product_Order_Virtual_Guest")
    );
    assert_eq!(call.params[0]["prices"], json!([{ "id": 1641 }, { "id": 905 }]));
}

#[tokio::test]
async fn place_order_sends_quote_flag() {
    let session = MockSession::new().with_response(
        ORDER,
        "placeOrder",
        json!({ "orderId": 1200, "orderDate": "2024-03-01T10:00:00-06:00" }),
    );
    let order = ContainerProductOrder {
        package_id: Some(46),
        quantity: Some(1),
        ..Default::default()
    };
    let service = ProductOrder::new(&session);

    let receipt = service.place_order(&order, None).await.unwrap();
    assert_eq!(receipt.order_id, Some(1200));
    assert_eq!(session.last_call().unwrap().params[1], Value::Null);

    service.place_order(&order, Some(true)).await.unwrap();
    assert_eq!(
        session.last_call().unwrap().params,
        vec![json!({ "packageId": 46, "quantity": 1 }), json!(true)]
    );
}

#[tokio::test]
async fn check_item_availability_keeps_param_positions() {
    let session = MockSession::new().with_response(ORDER, "checkItemAvailability", json!(true));
    let prices = [ProductItemPrice {
        id: Some(1641),
        ..Default::default()
    }];

    let available = ProductOrder::new(&session)
        .check_item_availability(&prices, None, Some(&["DATACENTER"][..]))
        .await
        .unwrap();

    assert!(available);
    assert_eq!(
        session.last_call().unwrap().params,
        vec![json!([{ "id": 1641 }]), Value::Null, json!(["DATACENTER"])]
    );
}

#[tokio::test]
async fn package_listings_decode_items_and_prices() {
    let session = MockSession::new()
        .with_response(
            "SoftLayer_Product_Package",
            "getItems",
            json!([{
                "id": 859,
                "keyName": "GUEST_CORE_2",
                "capacity": "2",
                "prices": [{ "id": 1641, "recurringFee": "14.5" }]
            }]),
        )
        .with_response(
            "SoftLayer_Product_Package",
            "getActiveUsageRatePrices",
            json!([]),
        );
    let package = ProductPackage::new(&session).id(46);

    let items = package.get_items().await.unwrap();
    assert_eq!(items[0].capacity.map(|c| c.value()), Some(2.0));
    assert_eq!(items[0].prices[0].recurring_fee.map(|f| f.value()), Some(14.5));

    let prices = package.get_active_usage_rate_prices(1004997, None).await.unwrap();
    assert!(prices.is_empty());
    assert_eq!(
        session.last_call().unwrap().params,
        vec![json!(1004997), Value::Null]
    );
}

#[tokio::test]
async fn item_price_usage_rates_send_location_and_items() {
    let session = MockSession::new().with_response(
        "SoftLayer_Product_Item_Price",
        "getUsageRatePrices",
        json!([{ "id": 7, "hourlyRecurringFee": 0.5 }]),
    );
    let location = Location {
        id: Some(1004997),
        ..Default::default()
    };
    let items = [ProductItem {
        id: Some(859),
        ..Default::default()
    }];

    let prices = PriceService::new(&session)
        .get_usage_rate_prices(&location, &items)
        .await
        .unwrap();

    assert_eq!(prices[0].hourly_recurring_fee.map(|f| f.value()), Some(0.5));
    assert_eq!(
        session.last_call().unwrap().params,
        vec![json!({ "id": 1004997 }), json!([{ "id": 859 }])]
    );
}

#[tokio::test]
async fn top_level_categories_pass_reset_cache() {
    let session = MockSession::new().with_response(
        "SoftLayer_Product_Item_Category",
        "getTopLevelCategories",
        json!([{ "id": 80, "categoryCode": "guest_core" }]),
    );

    let categories = ProductItemCategory::new(&session)
        .get_top_level_categories(Some(false))
        .await
        .unwrap();

    assert_eq!(categories[0].category_code.as_deref(), Some("guest_core"));
    assert_eq!(session.last_call().unwrap().params, vec![json!(false)]);
}

#[tokio::test]
async fn item_service_lists_prices_for_selected_item() {
    let session = MockSession::new().with_response(
        "SoftLayer_Product_Item",
        "getPrices",
        json!([{ "id": 1641, "itemId": 859, "hourlyRecurringFee": ".021" }]),
    );

    let prices = ItemService::new(&session)
        .id(859)
        .mask("id;hourlyRecurringFee")
        .get_prices()
        .await
        .unwrap();

    assert_eq!(prices[0].item_id, Some(859));
    assert_eq!(
        prices[0].hourly_recurring_fee.map(|fee| fee.value()),
        Some(0.021)
    );

    let call = session.last_call().unwrap();
    assert_eq!(call.service, "SoftLayer_Product_Item");
    assert_eq!(call.options.id, Some(859));
    assert!(call.params.is_empty());
}

#[tokio::test]
async fn upgrade_request_approval_and_status() {
    let session = MockSession::new()
        .with_response("SoftLayer_Product_Upgrade_Request", "approveChanges", json!(true))
        .with_response(
            "SoftLayer_Product_Upgrade_Request",
            "getStatus",
            json!({ "id": 2, "name": "Pending Approval" }),
        );
    let request = get_product_upgrade_request_service(&session).id(31);

    assert!(request.approve_changes().await.unwrap());
    let status = request.get_status().await.unwrap();
    assert_eq!(status.name.as_deref(), Some("Pending Approval"));

    let calls = session.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|call| call.options.id == Some(31)));
    assert_eq!(calls[0].method, "approveChanges");
}
