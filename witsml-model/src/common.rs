use serde::{Deserialize, Serialize};
use witsml_types::{Timestamp, Value};

/// The `commonData` block shared by every object type.
///
/// Which fields a server can send depends on the protocol version: 1.2.0
/// has no service category, and only 1.4.1.1 carries the acquisition time
/// zone and default datum.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_change_time: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition_time_zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_datum: Option<String>,
}

/// A surface or geographic position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<String>,
    #[serde(default)]
    pub latitude: Value,
    #[serde(default)]
    pub longitude: Value,
    #[serde(default)]
    pub easting: Value,
    #[serde(default)]
    pub northing: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
