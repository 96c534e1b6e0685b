//! Metric tracking objects and bandwidth usage.

use serde::{Deserialize, Serialize};

use crate::scalar::{Bytes, Float64, Time};

// =============================================================================
// Metric tracking
// =============================================================================

/// An object that collects metrics for a server, guest, or storage volume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTrackingObject {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Id of the tracked resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_table_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,

    /// When tracking started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Time>,
}

/// One metric sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTrackingObjectData {
    /// Sampled value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter: Option<Float64>,

    /// When the sample was taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<Time>,

    /// Metric the sample belongs to, e.g. `cpu0`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

/// Bandwidth use against the allocation for the current cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTrackingObjectBandwidthSummary {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_id: Option<i64>,

    /// Gigabytes allocated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_amount: Option<Float64>,

    /// Gigabytes sent so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_out: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_daily_usage: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_bandwidth_usage: Option<Float64>,
}

// =============================================================================
// Bandwidth
// =============================================================================

/// Bandwidth used by a resource on one day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkBandwidthUsage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_in: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_out: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth_usage_detail_type_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_date: Option<Time>,
}

/// A pooled bandwidth allotment shared by servers and guests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkBandwidthVersion1Allotment {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth_allotment_type_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_group_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_provider_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Time>,
}

/// Membership of a resource in a bandwidth allotment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkBandwidthVersion1AllotmentDetail {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth_allotment_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_provider_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_effective_date: Option<Time>,
}

// =============================================================================
// Containers
// =============================================================================

/// A rendered usage graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerBandwidthGraphOutputs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_image: Option<Bytes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_end_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_start_date: Option<Time>,
}

/// Bandwidth used by one server over a date range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerBandwidthUsage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_in_usage: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_out_usage: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_in_usage: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_out_usage: Option<Float64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Time>,
}

// =============================================================================
// Aliases
// =============================================================================

/// The tracking object of a storage repository.
pub type MetricTrackingObjectVirtualStorageRepository = MetricTrackingObject;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn graph_outputs_decode_image_bytes() {
        let raw = json!({
            "graphImage": "R0lGODlh",
            "graphTitle": "Private bandwidth",
            "maxEndDate": "2024-03-02T00:00:00-06:00"
        });

        let graph: ContainerBandwidthGraphOutputs = serde_json::from_value(raw).unwrap();
        assert_eq!(graph.graph_image.unwrap().as_slice(), b"GIF89a");
        assert_eq!(graph.graph_title.as_deref(), Some("Private bandwidth"));
        assert!(graph.min_start_date.is_none());
    }

    #[test]
    fn sample_type_maps_to_wire_type_key() {
        let raw = json!([
            { "counter": "12.5", "dateTime": "2024-03-01T00:05:00-06:00", "type": "cpu0" },
            { "counter": 3, "dateTime": "2024-03-01T00:10:00-06:00", "type": "cpu0" }
        ]);

        let samples: Vec<MetricTrackingObjectData> = serde_json::from_value(raw).unwrap();
        assert_eq!(samples[0].counter, Some(Float64(12.5)));
        assert_eq!(samples[1].counter.map(Float64::value), Some(3.0));
        assert_eq!(samples[1].data_type.as_deref(), Some("cpu0"));
    }
}
