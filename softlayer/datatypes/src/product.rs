//! Product catalog and ordering types.

use serde::{Deserialize, Serialize};

use crate::account::BillingOrder;
use crate::network::{Hardware, Location, Network, SoftwareDescription};
use crate::scalar::{Float64, Time, deserialize_null_default};
use crate::virtual_guest::VirtualGuest;

// =============================================================================
// Packages
// =============================================================================

/// A package: the catalog of items that can be ordered together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPackage {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Package name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Key name, e.g. `CLOUD_SERVER`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    /// Package description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Non-zero when the package can be ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<i64>,

    /// Rack units for server packages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_size: Option<i64>,

    /// First step of the ordering workflow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_order_step_id: Option<i64>,

    /// Set when hourly billing can be ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_billing_available_flag: Option<bool>,

    /// Set when orders must use a preset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preconfigured_flag: Option<bool>,

    /// Package type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub package_type: Option<ProductPackageType>,

    /// Presets currently orderable.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub active_presets: Vec<ProductPackagePreset>,

    /// Categories items are ordered under.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub categories: Vec<ProductItemCategory>,

    /// Items in the package.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub items: Vec<ProductItem>,

    /// Datacenters the package can be ordered in.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub locations: Vec<Location>,
}

/// The type of a product package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPackageType {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Key name, e.g. `VIRTUAL_SERVER_INSTANCE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    /// Human readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A predefined set of prices within a package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPackagePreset {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Package the preset belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<i64>,

    /// Key name, e.g. `B1_2X4X25`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `"1"` when the preset can be ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<String>,

    /// Minimum hourly charge of the preset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_minimum_hourly_fee: Option<Float64>,

    /// Minimum monthly charge of the preset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_minimum_recurring_fee: Option<Float64>,

    /// Prices included in the preset.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub prices: Vec<ProductItemPrice>,
}

/// A key/value attribute attached to a package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPackageAttribute {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_type_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Stock of an item in one package and location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPackageInventory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Box<ProductItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Box<Location>>,
}

/// Links a [`ProductItemCategoryGroup`] to a package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPackageItemCategoryGroup {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_category_group_id: Option<i64>,
}

/// A price offered through a package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPackageItemPrices {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_price_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_price: Option<Box<ProductItemPrice>>,
}

/// A location a package can be ordered in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPackageLocations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_time_information: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Box<Location>>,
}

/// Position of a category within a package's ordering steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPackageOrderConfiguration {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_category_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_step_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_category: Option<Box<ProductItemCategory>>,
}

/// One step of a package's ordering flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPackageOrderStep {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
}

/// A price chosen for one category of a preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPackagePresetConfiguration {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Box<ProductItemCategory>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Box<ProductItemPrice>>,
}

/// A server configuration listed for ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPackageServer {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Box<ProductItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<Box<ProductPackage>>,
}

/// A filter value for server listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPackageServerOption {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub option_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =============================================================================
// Items and prices
// =============================================================================

/// An orderable item such as a CPU, an OS, or a bandwidth allotment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItem {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Key name, e.g. `RAM_4_GB`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    /// Item description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Full item description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    /// Unit the capacity is measured in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,

    /// Capacity of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Float64>,

    /// Software the item installs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_description_id: Option<i64>,

    /// Primary category of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_category: Option<Box<ProductItemCategory>>,

    /// All categories of the item.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub categories: Vec<ProductItemCategory>,

    /// Prices for the item.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub prices: Vec<ProductItemPrice>,

    /// Software the item installs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_description: Option<SoftwareDescription>,
}

/// A category items are ordered under, e.g. `ram` or `os`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemCategory {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Code used in orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_code: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Maximum number of items orderable in the category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_limit: Option<i64>,
}

/// A price for an item, optionally restricted to a location group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemPrice {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The priced item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,

    /// Location group the price applies to; absent for standard prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_group_id: Option<i64>,

    /// Hourly charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_recurring_fee: Option<Float64>,

    /// Monthly charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_fee: Option<Float64>,

    /// One-time setup charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_fee: Option<Float64>,

    /// One-time labor charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labor_fee: Option<Float64>,

    /// Other one-time charges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_fee: Option<Float64>,

    /// Quantity ordered with this price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// Set when the price is currently used for new orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price_flag: Option<bool>,

    /// The priced item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Box<ProductItem>>,

    /// Categories the price can be ordered under.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub categories: Vec<ProductItemCategory>,
}

/// A request to upgrade a device's items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpgradeRequest {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// Order created for the upgrade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,

    /// Virtual guest being upgraded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_guest_id: Option<i64>,

    /// When the upgrade will run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_start_time_utc: Option<Time>,

    /// Set once the upgrade finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_flag: Option<bool>,

    /// When the request was made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    /// Current status of the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Box<ProductUpgradeRequestStatus>>,
}

// =============================================================================
// Catalog details
// =============================================================================

/// A catalog of packages sold under a brand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCatalog {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A key/value attribute attached to an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemAttribute {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_type_key_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_type: Option<Box<ProductItemAttributeType>>,
}

/// The kind of a [`ProductItemAttribute`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemAttributeType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// An item included with the purchase of a price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemBundles {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_price_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_item_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_item: Option<Box<ProductItem>>,
}

/// A grouping of item categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemCategoryGroup {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// An option that changes how items in a category are ordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemCategoryOrderOptionType {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A question asked when ordering from a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemCategoryQuestion {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_example: Option<String>,
}

/// Links a [`ProductItemCategoryQuestion`] to a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemCategoryQuestionXref {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_category_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Box<ProductItemCategoryQuestion>>,
}

/// A policy document that must be accepted to order an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemPolicyAssignment {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_document_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_item: Option<Box<ProductItem>>,
}

/// Limits a price to specific accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemPriceAccountRestriction {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_price_id: Option<i64>,
}

/// A key/value attribute attached to a price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemPriceAttribute {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_price_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_price_attribute_type_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A location or package surcharge on a price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemPricePremium {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_price_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_modifier: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_modifier: Option<Float64>,
}

/// An item that must be ordered together with another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemRequirement {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_item_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Box<ProductItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_item: Option<Box<ProductItem>>,
}

/// A resource that cannot be combined with an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemResourceConflict {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_table_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// An ordering rule that applies to a package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemRule {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_type_id: Option<i64>,
}

/// A family of servers that share a preset layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemServerGroup {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Tax category of an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemTaxCategory {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// =============================================================================
// Promotions and upgrades
// =============================================================================

/// Status of an upgrade request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpgradeRequestStatus {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A promotion applied through a code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPromotion {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =============================================================================
// Order containers
// =============================================================================

/// The order container exchanged with `verifyOrder` and `placeOrder`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProductOrder {
    /// The concrete container type, e.g. `SoftLayer_Container_Product_Order_Virtual_Guest`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complex_type: Option<String>,

    /// Package the order draws from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<i64>,

    /// Preset used for the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset_id: Option<i64>,

    /// Datacenter id or short name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Number of devices ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    /// Order hourly instead of monthly billing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_hourly_pricing: Option<bool>,

    /// Image template to provision from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_template_id: Option<i64>,

    /// Global identifier of the image template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_template_global_identifier: Option<String>,

    /// Name to save a quote under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_name: Option<String>,

    /// Email the quote once saved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_quote_email_flag: Option<bool>,

    /// Promotion code to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_code: Option<String>,

    /// Message returned by the ordering system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Currency of the totals, e.g. `USD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_short_name: Option<String>,

    /// Recurring total after tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_tax_recurring: Option<Float64>,

    /// Hourly total after tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_tax_recurring_hourly: Option<Float64>,

    /// Monthly total after tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_tax_recurring_monthly: Option<Float64>,

    /// Setup total after tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_tax_setup: Option<Float64>,

    /// Recurring total before tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_tax_recurring: Option<Float64>,

    /// Setup total before tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_tax_setup: Option<Float64>,

    /// First invoice amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prorated_initial_charge: Option<Float64>,

    /// Post-install script URIs.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub provision_scripts: Vec<String>,

    /// Nested orders placed together.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub order_containers: Vec<ContainerProductOrder>,

    /// Prices ordered.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub prices: Vec<ProductItemPrice>,

    /// Bare metal servers ordered.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub hardware: Vec<Hardware>,

    /// Virtual guests ordered.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub virtual_guests: Vec<VirtualGuest>,

    /// Resolved datacenter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_object: Option<Box<Location>>,
}

/// The receipt returned when an order or quote is placed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProductOrderReceipt {
    /// Identifier of the placed order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,

    /// When the order was placed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<Time>,

    /// The order as accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_details: Option<Box<ContainerProductOrder>>,

    /// Billing record of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placed_order: Option<Box<BillingOrder>>,

    /// Checkout URL for external payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_payment_checkout_url: Option<String>,

    /// Token for external payments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_payment_token: Option<String>,
}

/// A network available to an order, with its VLANs and subnets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProductOrderNetwork {
    /// The network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<Network>,

    /// Orderable public VLANs.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub public_vlans: Vec<ContainerProductOrder>,

    /// Orderable subnets.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub subnets: Vec<ContainerProductOrder>,
}

/// How many free items of a category the account has.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProductItemCategoryZeroFeeCount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

/// Usage rate prices of object storage in one datacenter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProductOrderNetworkStorageHubDatacenter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Box<Location>>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub usage_rate_prices: Vec<ProductItemPrice>,
}

/// Usage rate prices of object storage in one location group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProductOrderNetworkStorageObjectStorageLocationGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_geolocation_type: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub usage_rate_prices: Vec<ProductItemPrice>,
}

/// VLANs an order can use, as order containers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProductOrderNetworkVlans {
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub private_vlans: Vec<ContainerProductOrder>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub public_vlans: Vec<ContainerProductOrder>,
}

/// A promotion and the items it requires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProductPromotion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<Time>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub locations: Vec<Location>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub requirement_groups: Vec<ContainerProductPromotionRequirementGroup>,
}

/// A set of categories, presets, or prices a promotion requires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProductPromotionRequirementGroup {
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub categories: Vec<ProductItemCategory>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub presets: Vec<ProductPackagePreset>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub prices: Vec<ProductItemPrice>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn price_fees_decode_from_quoted_strings() {
        let raw = json!({
            "id": 1641,
            "itemId": 859,
            "hourlyRecurringFee": ".021",
            "recurringFee": "14.5",
            "setupFee": "0",
            "categories": [{ "id": 80, "categoryCode": "guest_core", "name": "Computing Instance" }]
        });

        let price: ProductItemPrice = serde_json::from_value(raw).unwrap();
        assert_eq!(price.hourly_recurring_fee, Some(Float64(0.021)));
        assert_eq!(price.recurring_fee.map(Float64::value), Some(14.5));
        assert_eq!(price.categories[0].category_code.as_deref(), Some("guest_core"));
        assert!(price.location_group_id.is_none());
    }

    #[test]
    fn package_type_maps_to_wire_type_key() {
        let raw = json!({
            "id": 46,
            "name": "Cloud Server",
            "type": { "keyName": "VIRTUAL_SERVER_INSTANCE" }
        });

        let package: ProductPackage = serde_json::from_value(raw).unwrap();
        assert_eq!(
            package.package_type.and_then(|t| t.key_name).as_deref(),
            Some("VIRTUAL_SERVER_INSTANCE")
        );
    }

    #[test]
    fn order_container_omits_unset_fields() {
        let order = ContainerProductOrder {
            complex_type: Some("SoftLayer_Container_Product_Order_Virtual_Guest".into()),
            package_id: Some(46),
            location: Some("dal13".into()),
            quantity: Some(1),
            prices: vec![ProductItemPrice {
                id: Some(1641),
                ..Default::default()
            }],
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({
                "complexType": "SoftLayer_Container_Product_Order_Virtual_Guest",
                "packageId": 46,
                "location": "dal13",
                "quantity": 1,
                "prices": [{ "id": 1641 }]
            })
        );
    }
}
