//! Per-call query options.

use serde::Serialize;

/// Query options passed through to the session with every call.
///
/// - `id` - the object the call is made on, for instance-level methods
/// - `mask` - the relational properties to include in the result
/// - `filter` - constrains the records a listing call returns
/// - `limit`/`offset` - result windowing
///
/// The bindings never interpret these; they are handed to
/// [`Session::do_request`](crate::Session::do_request) as given.
///
/// ## Examples
///
/// ```
/// use softlayer_lib::Options;
///
/// let options = Options::new().id(1234).mask("id,hostname").limit(50);
/// assert_eq!(options.id, Some(1234));
/// assert_eq!(options.mask.as_deref(), Some("mask[id,hostname]"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Options {
    /// Identifier of the object the call is made on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Object mask, normalized by [`Options::mask`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,

    /// Object filter, as a JSON document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    /// Maximum number of results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Index of the first result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl Options {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the object identifier.
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the object mask.
    ///
    /// A mask that lists several properties or nests one (`id,hostname`,
    /// `datacenter[name]`) is wrapped as `mask[...]` unless it already is.
    /// An empty mask clears it.
    pub fn mask(mut self, mask: impl Into<String>) -> Self {
        self.mask = normalize_mask(mask.into());
        self
    }

    /// Sets the object filter. An empty filter clears it.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        let filter = filter.into();
        self.filter = (!filter.is_empty()).then_some(filter);
        self
    }

    /// Sets the result limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the result offset.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Returns `true` if no option is set.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.mask.is_none()
            && self.filter.is_none()
            && self.limit.is_none()
            && self.offset.is_none()
    }
}

fn normalize_mask(mask: String) -> Option<String> {
    if mask.is_empty() {
        return None;
    }
    if !mask.starts_with("mask[") && (mask.contains('[') || mask.contains(',')) {
        return Some(format!("mask[{mask}]"));
    }
    Some(mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_wraps_lists_and_nested_properties() {
        assert_eq!(
            Options::new().mask("id,hostname").mask.as_deref(),
            Some("mask[id,hostname]")
        );
        assert_eq!(
            Options::new().mask("datacenter[name]").mask.as_deref(),
            Some("mask[datacenter[name]]")
        );
    }

    #[test]
    fn mask_keeps_plain_and_wrapped_masks() {
        assert_eq!(Options::new().mask("id").mask.as_deref(), Some("id"));
        assert_eq!(
            Options::new().mask("mask[id,name]").mask.as_deref(),
            Some("mask[id,name]")
        );
        assert_eq!(
            Options::new()
                .mask("mask(SoftLayer_Hardware)[id]")
                .mask
                .as_deref(),
            Some("mask[mask(SoftLayer_Hardware)[id]]")
        );
    }

    #[test]
    fn empty_strings_clear_mask_and_filter() {
        let options = Options::new()
            .mask("id,name")
            .filter(r#"{"id":{"operation":5}}"#)
            .mask("")
            .filter("");

        assert!(options.mask.is_none());
        assert!(options.filter.is_none());
        assert!(options.is_empty());
    }

    #[test]
    fn serializes_only_set_fields() {
        let options = Options::new().id(9).limit(10).offset(20);
        assert_eq!(
            serde_json::to_string(&options).unwrap(),
            r#"{"id":9,"limit":10,"offset":20}"#
        );
        assert_eq!(serde_json::to_string(&Options::new()).unwrap(), "{}");
    }

    #[test]
    fn later_setters_override_earlier_ones() {
        let options = Options::new().id(1).id(2).limit(5).limit(0);
        assert_eq!(options.id, Some(2));
        assert_eq!(options.limit, Some(0));
        assert!(!options.is_empty());
    }
}
