//! Scalar wrappers for the value shapes the SoftLayer API uses on the wire.
//!
//! - [`Time`] - timestamps with a numeric UTC offset (`2024-03-01T12:00:00-06:00`)
//! - [`Float64`] - floats that may arrive as JSON numbers or numeric strings
//! - [`Bytes`] - binary payloads carried as base64 strings
//! - [`Void`] - the result of methods that return nothing useful

use std::fmt;
use std::str::FromStr;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, FixedOffset, Utc};
use serde::de::{self, IgnoredAny};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Format used when rendering a [`Time`] back onto the wire.
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

// =============================================================================
// Time
// =============================================================================

/// A timestamp as exchanged with the SoftLayer API.
///
/// The API always includes the offset of the datacenter that produced the
/// value, so the offset is preserved rather than normalized to UTC.
///
/// ## Examples
///
/// ```
/// use softlayer_datatypes::Time;
///
/// let time: Time = "2024-03-01T12:30:00-06:00".parse().unwrap();
/// assert_eq!(time.to_string(), "2024-03-01T12:30:00-06:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(DateTime<FixedOffset>);

impl Time {
    /// Wraps an offset-aware timestamp.
    pub fn new(value: DateTime<FixedOffset>) -> Self {
        Self(value)
    }

    /// Returns the current time in UTC.
    pub fn now() -> Self {
        Self(Utc::now().fixed_offset())
    }

    /// Returns the wrapped timestamp.
    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    /// Consumes the wrapper and returns the timestamp.
    pub fn into_inner(self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl From<DateTime<FixedOffset>> for Time {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self(value)
    }
}

impl From<DateTime<Utc>> for Time {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.fixed_offset())
    }
}

impl FromStr for Time {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateTime::parse_from_rfc3339(s).map(Self)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|e| de::Error::custom(format!("invalid timestamp `{raw}`: {e}")))
    }
}

// =============================================================================
// Float64
// =============================================================================

/// A float that tolerates the API's habit of quoting numbers.
///
/// Monetary amounts (fees, balances, invoice totals) come back as strings
/// such as `"12.50"`; usage figures come back as plain numbers. Both decode
/// into the same type. Serialization always emits a JSON number.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Float64(pub f64);

impl Float64 {
    /// Returns the wrapped value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Float64 {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Float64> for f64 {
    fn from(value: Float64) -> Self {
        value.0
    }
}

impl fmt::Display for Float64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Float64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Float64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Self(n)),
            Raw::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(Self)
                .map_err(|_| de::Error::custom(format!("invalid float `{s}`"))),
        }
    }
}

// =============================================================================
// Bytes
// =============================================================================

/// Binary data such as rendered graphs and PDF invoices.
///
/// The API encodes these as standard base64 strings.
///
/// ## Examples
///
/// ```
/// use softlayer_datatypes::Bytes;
///
/// let bytes: Bytes = serde_json::from_str(r#""aGVsbG8=""#).unwrap();
/// assert_eq!(bytes.as_slice(), b"hello");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    /// Returns the decoded bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the wrapper and returns the decoded bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl Serialize for Bytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&BASE64.encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for Bytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        BASE64
            .decode(raw.trim())
            .map(Self)
            .map_err(|e| de::Error::custom(format!("invalid base64 payload: {e}")))
    }
}

// =============================================================================
// Collections
// =============================================================================

/// Decodes an explicit `null` the same way as a missing field.
///
/// The API sends `null` for some empty relational collections.
pub(crate) fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// =============================================================================
// Void
// =============================================================================

/// Result type for API methods that return nothing.
///
/// Some of these methods still send a body (often `true` or `null`), so
/// decoding accepts and discards any JSON value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Void;

impl Serialize for Void {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_unit()
    }
}

impl<'de> Deserialize<'de> for Void {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Void)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_keeps_datacenter_offset() {
        let time: Time = serde_json::from_str(r#""2016-09-13T12:25:42-05:00""#).unwrap();
        assert_eq!(time.as_datetime().offset().local_minus_utc(), -5 * 3600);
        assert_eq!(
            serde_json::to_string(&time).unwrap(),
            r#""2016-09-13T12:25:42-05:00""#
        );
    }

    #[test]
    fn time_from_utc_renders_zero_offset() {
        let utc = DateTime::parse_from_rfc3339("2020-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        let time = Time::from(utc);
        assert_eq!(time.to_string(), "2020-01-02T03:04:05+00:00");
    }

    #[test]
    fn time_rejects_garbage() {
        let err = serde_json::from_str::<Time>(r#""yesterday""#).unwrap_err();
        assert!(err.to_string().contains("invalid timestamp `yesterday`"));
    }

    #[test]
    fn float64_accepts_number_and_string() {
        let from_number: Float64 = serde_json::from_str("12.5").unwrap();
        let from_string: Float64 = serde_json::from_str(r#""12.5""#).unwrap();
        let from_integer: Float64 = serde_json::from_str("3").unwrap();
        assert_eq!(from_number, Float64(12.5));
        assert_eq!(from_string, Float64(12.5));
        assert_eq!(from_integer.value(), 3.0);
    }

    #[test]
    fn float64_rejects_non_numeric_string() {
        let err = serde_json::from_str::<Float64>(r#""twelve""#).unwrap_err();
        assert!(err.to_string().contains("invalid float `twelve`"));
    }

    #[test]
    fn float64_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Float64(0.25)).unwrap(), "0.25");
    }

    #[test]
    fn bytes_decode_from_base64() {
        let bytes: Bytes = serde_json::from_str(r#""JVBERi0xLjQ=""#).unwrap();
        assert_eq!(bytes.as_slice(), b"%PDF-1.4");
        assert_eq!(serde_json::to_string(&bytes).unwrap(), r#""JVBERi0xLjQ=""#);
    }

    #[test]
    fn bytes_reject_invalid_base64() {
        let err = serde_json::from_str::<Bytes>(r#""not base64!""#).unwrap_err();
        assert!(err.to_string().contains("invalid base64 payload"));
    }

    #[test]
    fn null_collection_decodes_as_empty() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(default, deserialize_with = "deserialize_null_default")]
            items: Vec<i64>,
        }

        let from_null: Holder = serde_json::from_str(r#"{"items":null}"#).unwrap();
        let from_missing: Holder = serde_json::from_str("{}").unwrap();
        let from_list: Holder = serde_json::from_str(r#"{"items":[1,2]}"#).unwrap();
        assert!(from_null.items.is_empty());
        assert!(from_missing.items.is_empty());
        assert_eq!(from_list.items, vec![1, 2]);
    }

    #[test]
    fn void_accepts_anything() {
        for body in ["null", "true", "{\"a\":[1,2]}", "\"done\""] {
            let void: Void = serde_json::from_str(body).unwrap();
            assert_eq!(void, Void);
        }
    }
}
