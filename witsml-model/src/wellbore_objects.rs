//! The smaller wellbore children: messages, realtime headers, rigs and
//! formation markers.

use serde::{Deserialize, Serialize};
use witsml_types::{Timestamp, Value};

use crate::common::CommonData;
use crate::identity::ObjectIdentity;

/// A free-text event reported against a wellbore.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub identity: ObjectIdentity,
    pub time: Option<Timestamp>,
    pub md: Value,
    pub type_message: Option<String>,
    pub message_text: Option<String>,
    pub severity: Option<String>,
    pub common_data: CommonData,
}

impl Message {
    pub fn new(identity: ObjectIdentity) -> Self {
        Self {
            identity,
            time: None,
            md: Value::default(),
            type_message: None,
            message_text: None,
            severity: None,
            common_data: CommonData::default(),
        }
    }
}

/// One channel advertised by a realtime header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelDefinition {
    pub uid: Option<String>,
    pub mnemonic: String,
    pub data_type: Option<String>,
    pub unit: Option<String>,
    pub description: Option<String>,
}

/// A realtime stream header. Only 1.2.0 and 1.3.1.1 know this object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Realtime {
    pub identity: ObjectIdentity,
    pub d_tim: Option<Timestamp>,
    pub md: Value,
    pub sequence: Option<i64>,
    pub active_status: Option<String>,
    pub channels: Vec<ChannelDefinition>,
}

impl Realtime {
    pub fn new(identity: ObjectIdentity) -> Self {
        Self {
            identity,
            d_tim: None,
            md: Value::default(),
            sequence: None,
            active_status: None,
            channels: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rig {
    pub identity: ObjectIdentity,
    pub owner: Option<String>,
    pub type_rig: Option<String>,
    pub manufacturer: Option<String>,
    pub year_ent_service: Option<i32>,
    pub class_rig: Option<String>,
    pub approvals: Option<String>,
    pub registration: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub air_gap: Value,
    pub d_tim_start_op: Option<Timestamp>,
    pub d_tim_end_op: Option<Timestamp>,
    pub common_data: CommonData,
}

impl Rig {
    pub fn new(identity: ObjectIdentity) -> Self {
        Self {
            identity,
            owner: None,
            type_rig: None,
            manufacturer: None,
            year_ent_service: None,
            class_rig: None,
            approvals: None,
            registration: None,
            telephone: None,
            email: None,
            air_gap: Value::default(),
            d_tim_start_op: None,
            d_tim_end_op: None,
            common_data: CommonData::default(),
        }
    }
}

/// A formation top picked along a wellbore. Not available in 1.2.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormationMarker {
    pub identity: ObjectIdentity,
    pub md_prognosed: Value,
    pub tvd_prognosed: Value,
    pub md_top_sample: Value,
    pub tvd_top_sample: Value,
    pub thickness_bed: Value,
    pub thickness_apparent: Value,
    pub dip: Value,
    pub dip_direction: Value,
    pub lithostratigraphic: Option<String>,
    pub chronostratigraphic: Option<String>,
    pub description: Option<String>,
    pub common_data: CommonData,
}

impl FormationMarker {
    pub fn new(identity: ObjectIdentity) -> Self {
        Self {
            identity,
            md_prognosed: Value::default(),
            tvd_prognosed: Value::default(),
            md_top_sample: Value::default(),
            tvd_top_sample: Value::default(),
            thickness_bed: Value::default(),
            thickness_apparent: Value::default(),
            dip: Value::default(),
            dip_direction: Value::default(),
            lithostratigraphic: None,
            chronostratigraphic: None,
            description: None,
            common_data: CommonData::default(),
        }
    }
}
