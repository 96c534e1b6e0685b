//! Account types: the account itself, its contacts and notes, addresses,
//! billing, programs, and tags.

use serde::{Deserialize, Serialize};

use crate::dns::DnsDomain;
use crate::network::{Hardware, Location, NetworkVlan, SecuritySshKey};
use crate::scalar::{Float64, Time, deserialize_null_default};
use crate::virtual_guest::VirtualGuest;

// =============================================================================
// Account
// =============================================================================

/// A SoftLayer customer account and its relational properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Company name on the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Account owner's first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Account owner's last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Primary contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// First line of the mailing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    /// Second line of the mailing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State or province code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Two letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Office phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_phone: Option<String>,

    /// Alternate phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_phone: Option<String>,

    /// Fax number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax_phone: Option<String>,

    /// Brand the account belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<i64>,

    /// Identifier of the account status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_status_id: Option<i64>,

    /// Non-zero for reseller accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reseller: Option<i64>,

    /// Restricts support to EU personnel when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_eu_support_flag: Option<bool>,

    /// Number of hourly billed virtual guests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_virtual_guest_count: Option<u32>,

    /// When the account was opened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    /// When the account was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,

    /// Current account status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_status: Option<AccountStatus>,

    /// Brand the account belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<Box<Brand>>,

    /// Addresses that receive abuse reports.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub abuse_emails: Vec<AccountAbuseEmail>,

    /// Additional contacts.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub account_contacts: Vec<AccountContact>,

    /// Forward DNS domains hosted for the account.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub domains: Vec<DnsDomain>,

    /// Bare metal servers.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub hardware: Vec<Hardware>,

    /// Virtual servers.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub virtual_guests: Vec<VirtualGuest>,

    /// Portal users.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub users: Vec<UserCustomer>,

    /// Stored SSH keys.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ssh_keys: Vec<SecuritySshKey>,

    /// VLANs assigned to the account.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub network_vlans: Vec<NetworkVlan>,
}

/// The status of an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountStatus {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Status name, e.g. `Active`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// An email address that receives abuse notifications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAbuseEmail {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// The address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A key/value flag attached to an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAttribute {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// Identifier of the attribute type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_attribute_type_id: Option<i64>,

    /// Attribute value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// The attribute type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_attribute_type: Option<AccountAttributeType>,
}

/// The kind of an account attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAttributeType {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Key name used to look the attribute up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    /// Human readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// What the attribute controls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =============================================================================
// Contacts and notes
// =============================================================================

/// An additional contact on an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountContact {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// Identifier of the contact type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,

    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Job title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    /// Office phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_phone: Option<String>,

    /// Alternate phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_phone: Option<String>,

    /// First line of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State or province code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Two letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Name of the contact profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Box<Account>>,

    /// Contact type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub contact_type: Option<AccountContactType>,
}

/// A category of account contact, e.g. technical or billing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountContactType {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Key name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    /// Human readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A free-form note attached to an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountNote {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// Portal user who wrote the note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// The note text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Category of the note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_type: Option<String>,

    /// When the note was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    /// When the note was last edited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,

    /// Portal user who wrote the note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Box<UserCustomer>>,

    /// Previous revisions.
    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub note_history: Vec<AccountNoteHistory>,
}

/// A previous revision of an account note.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountNoteHistory {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Note the revision belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_note_id: Option<i64>,

    /// Portal user who made the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// Note text at this revision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// When the revision was made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,
}

// =============================================================================
// Users and brands
// =============================================================================

/// A brand under which accounts are sold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Key name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Full legal name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,

    /// Product catalog the brand sells from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<i64>,
}

/// A portal user on a customer account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCustomer {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// User that created this user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,

    /// Login name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// First line of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State or province code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Two letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Office phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_phone: Option<String>,

    /// Identifier of the user's time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone_id: Option<i64>,

    /// Identifier of the user's status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_status_id: Option<i64>,

    /// When the user was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    /// When the user was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

// =============================================================================
// Billing
// =============================================================================

/// Billing configuration for an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingInfo {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// Day of the month invoices are generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anniversary_day_of_month: Option<i64>,

    /// One-time charge discount percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_discount_onetime: Option<i64>,

    /// Recurring charge discount percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_discount_recurring: Option<i64>,

    /// VAT identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,

    /// When billing was set up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    /// When billing was last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// A billable line on an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingItem {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Parent billing item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,

    /// Product category of the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_code: Option<String>,

    /// Line description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Hostname of the billed device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,

    /// Domain of the billed device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,

    /// Set for hourly billed items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_flag: Option<bool>,

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

    /// When the item was cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_date: Option<Time>,

    /// When the item was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    /// Next invoice date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_bill_date: Option<Time>,
}

/// An invoice issued to an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingInvoice {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// Invoice type, e.g. `RECURRING`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_code: Option<String>,

    /// Invoice status, e.g. `OPEN` or `CLOSED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,

    /// Total before tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_total_amount: Option<Float64>,

    /// Total before tax and credits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_total_pre_tax_amount: Option<Float64>,

    /// Number of top-level items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_top_level_item_count: Option<u32>,

    /// When the invoice closed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_date: Option<Time>,

    /// When the invoice was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,
}

/// An order placed on an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingOrder {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// Portal user who placed the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_record_id: Option<i64>,

    /// Order status, e.g. `APPROVED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Quote the order was placed from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_quote_id: Option<i64>,

    /// Total amount of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_total_amount: Option<Float64>,

    /// Promotion applied to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presale_event_id: Option<i64>,

    /// When the order was placed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    /// When the order last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

// =============================================================================
// Tickets and tags
// =============================================================================

/// A support ticket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// Ticket subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Identifier of the ticket status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,

    /// Identifier of the subject group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,

    /// Customer priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,

    /// Portal user assigned to the ticket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_user_id: Option<i64>,

    /// External ticket reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_provider_resource_id: Option<String>,

    /// When the ticket was opened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    /// When the ticket was last updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_edit_date: Option<Time>,

    /// When the ticket record last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// A tag name owned by an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// The tag text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Non-zero for tags only visible to employees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal: Option<i64>,
}

/// The attachment of a tag to a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagReference {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<i64>,

    /// Kind of resource the tag is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_type_id: Option<i64>,

    /// Identifier of the tagged resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_table_id: Option<i64>,

    /// Portal user who applied the tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usr_record_id: Option<i64>,

    /// The tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<Tag>,
}

// =============================================================================
// Addresses, passwords, and links
// =============================================================================

/// A postal address held by an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAddress {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// First street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    /// Second street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Two letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Person reachable at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `1` while the address is in use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<i64>,

    /// Datacenter the address belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Box<Account>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Box<Location>>,

    /// Kind of address.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub address_type: Option<Box<AccountAddressType>>,
}

/// A kind of account address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAddressType {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A contract the account has signed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAgreement {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreement_type_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,
}

/// An employee assigned to look after an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAttachmentEmployee {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_role_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<Box<UserEmployee>>,
}

/// SAML single sign-on settings for an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAuthenticationSaml {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// Service provider entity id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_sign_on_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_logout_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_fingerprint: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_id_format: Option<String>,
}

/// Partner channel and segment of an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBusinessPartner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<i64>,
}

/// An account being set up through an external service provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountExternalSetup {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_provider_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,
}

/// A link between this account and an account at another provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountLink {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// Account id at the other provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_account_alphanumeric_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_provider_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// A request to ship media into or out of a datacenter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMediaDataTransferRequest {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// VLAN spanning setting of an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountNetworkVlanSpan {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// Set when traffic may cross VLANs on the private network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_flag: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_verified_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// A stored credential for an account level service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPassword {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub password_type: Option<Box<AccountPasswordType>>,
}

/// What an [`AccountPassword`] is for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPasswordType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Contact or network detail registered with a regional internet registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRegionalRegistryDetail {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_type_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// A shipment of media or hardware to or from the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountShipment {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub courier_tracking_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub origination_address_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_address_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

// =============================================================================
// Invoices and payments
// =============================================================================

/// One line of an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingInvoiceItem {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_item_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_fee: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_fee: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_fee: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labor_fee: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,
}

/// A request to cancel one or more billing items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingItemCancellationRequest {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_cancel_reason_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// A saved quote that can later be turned into an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingOrderQuote {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Box<BillingOrder>>,
}

/// A request to replace the card on file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingPaymentCardChangeRequest {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A one-off card payment against the account balance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingPaymentCardManualPayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Where an external processor redirects after success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,

    /// Where an external processor redirects after cancellation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Result of starting 3-D Secure payer authentication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingPaymentCardPayerAuthenticationSetup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_data_collection_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
}

/// Card details submitted to start payer authentication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingPaymentCardPayerAuthenticationSetupInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_account_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_expiration_month: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_expiration_year: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_type: Option<String>,
}

/// A payment processor the account can pay through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingPaymentProcessor {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_account_id: Option<i64>,
}

// =============================================================================
// Programs and notifications
// =============================================================================

/// Enrollment of the account in the startup program.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalystEnrollment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative_employee_id: Option<i64>,
}

/// Enrollment of the account in a flexible credit program.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexibleCreditEnrollment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_date: Option<Time>,
}

/// Regulated workload setting of an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalRegulatedWorkload {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_flag: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// A planned or unplanned event the account is notified about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationOccurrenceEvent {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_ticket_id: Option<i64>,
}

/// A user subscribed to a notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSubscriber {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_record_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// A presale event that allows ordering an item before general availability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPresaleEvent {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
}

/// A visit to a datacenter by someone on the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccessFacilityLog {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_out: Option<Time>,
}

/// A user watching a guest for monitoring alerts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCustomerNotificationVirtualGuest {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest: Option<Box<VirtualGuest>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Box<UserCustomer>>,
}

/// A SoftLayer employee as seen by customers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEmployee {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A named set of permissions on resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissionGroup {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

/// A role that can be granted to users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissionRole {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,
}

// =============================================================================
// Containers
// =============================================================================

/// Result of editing account information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerAccountUpdateResponse {
    /// Set when the change was applied immediately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_flag: Option<bool>,

    /// The updated account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Box<Account>>,

    /// Review ticket opened for changes that need approval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<Box<Ticket>>,
}

/// Credit balance of one discount program.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerAccountDiscountProgram {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_credit: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_participant: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime_applied_credit: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime_credit: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime_remaining_credit: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_active_orders: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_credit: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_tax_remaining_credit: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_end_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_credit: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_credit_tax: Option<Float64>,
}

/// Credit balances across all discount programs of the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerAccountDiscountProgramCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_level_applied_credit: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_level_lifetime_applied_credit: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_level_lifetime_credit: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_level_lifetime_remaining_credit: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_level_monthly_credit: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_level_remaining_credit: Option<Float64>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub enrollments: Vec<FlexibleCreditEnrollment>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_account_level_participant_flag: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_participant_flag: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_product_specific_participant_flag: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_specific_applied_credit: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_specific_lifetime_applied_credit: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_specific_lifetime_credit: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_specific_lifetime_remaining_credit: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_specific_monthly_credit: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_specific_remaining_credit: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_applied_credit: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_remaining_credit: Option<Float64>,
}

/// IBM internal cost recovery details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerAccountInternalIbmCostRecovery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<String>,
}

/// A credit card payment method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerAccountPaymentMethodCreditCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_short_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cybersource_assigned_card_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_month: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_year: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_four_digits: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_role_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// ACH bank details submitted as a payment method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerBillingInfoAch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_transit_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub federal_tax_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
}

/// Whether the account accepted an item policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerPolicyAcceptance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_flag: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_policy_assignment_id: Option<i64>,
}

/// Commission earned on one referred account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerReferralPartnerCommission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_amount: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_rate: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_company_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_partner_account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_revenue: Option<Float64>,
}

/// How a referral partner is paid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerReferralPartnerPaymentOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_transit_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub federal_tax_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paypal_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Tax computed for an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerTaxCache {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_tax_rate: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_null_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub items: Vec<ContainerTaxCacheItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax_amount: Option<Float64>,
}

/// Tax computed for one price of an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerTaxCacheItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_price_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rates: Option<Box<ContainerTaxRates>>,
}

/// Tax rates per fee kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerTaxRates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labor_tax_rate: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_tax_rate: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_tax_rate: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_tax_rate: Option<Float64>,
}

/// A system message shown to the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerUtilityMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

// =============================================================================
// Billing and link aliases
// =============================================================================

/// A link to an IBM Cloud account. Carries the same columns as [`AccountLink`].
pub type AccountLinkBluemix = AccountLink;

/// The billing item of a dedicated host.
pub type BillingItemVirtualDedicatedHost = BillingItem;

/// The billing item of a disk image.
pub type BillingItemVirtualDiskImage = BillingItem;

/// The billing item of a virtual guest.
pub type BillingItemVirtualGuest = BillingItem;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn account_decodes_relational_collections() {
        let raw = json!({
            "id": 278444,
            "companyName": "Example Co",
            "createDate": "2012-05-04T10:11:12-05:00",
            "accountStatus": { "id": 1001, "name": "Active" },
            "virtualGuests": [{ "id": 1, "hostname": "web01" }],
            "domains": [{ "id": 9, "name": "example.com" }]
        });

        let account: Account = serde_json::from_value(raw).unwrap();
        assert_eq!(account.company_name.as_deref(), Some("Example Co"));
        assert_eq!(account.virtual_guests[0].hostname.as_deref(), Some("web01"));
        assert_eq!(account.domains[0].name.as_deref(), Some("example.com"));
        assert!(account.hardware.is_empty());
    }

    #[test]
    fn contact_type_maps_to_wire_type_key() {
        let raw = json!({
            "id": 5,
            "firstName": "Ada",
            "type": { "id": 2, "keyName": "TECHNICAL", "name": "Technical" }
        });

        let contact: AccountContact = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(
            contact.contact_type.as_ref().and_then(|t| t.key_name.as_deref()),
            Some("TECHNICAL")
        );
        assert_eq!(serde_json::to_value(&contact).unwrap(), raw);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let raw = json!({ "id": 3, "note": "hello", "someFutureField": [1, 2, 3] });
        let note: AccountNote = serde_json::from_value(raw).unwrap();
        assert_eq!(note.note.as_deref(), Some("hello"));
    }
}
