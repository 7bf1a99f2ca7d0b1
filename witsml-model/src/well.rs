use serde::{Deserialize, Serialize};
use witsml_types::{Timestamp, Value};

use crate::common::{CommonData, Location};
use crate::identity::ObjectIdentity;

/// A well: the root of the hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Well {
    pub identity: ObjectIdentity,
    pub legal_name: Option<String>,
    pub field: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub county: Option<String>,
    pub region: Option<String>,
    pub district: Option<String>,
    pub block: Option<String>,
    pub time_zone: Option<String>,
    pub operator: Option<String>,
    pub operator_div: Option<String>,
    pub status: Option<String>,
    pub purpose: Option<String>,
    pub spud_date: Option<Timestamp>,
    pub ground_elevation: Value,
    pub water_depth: Value,
    pub locations: Vec<Location>,
    pub common_data: CommonData,
}

impl Well {
    pub fn new(identity: ObjectIdentity) -> Self {
        Self {
            identity,
            legal_name: None,
            field: None,
            country: None,
            state: None,
            county: None,
            region: None,
            district: None,
            block: None,
            time_zone: None,
            operator: None,
            operator_div: None,
            status: None,
            purpose: None,
            spud_date: None,
            ground_elevation: Value::default(),
            water_depth: Value::default(),
            locations: Vec::new(),
            common_data: CommonData::default(),
        }
    }
}

/// A wellbore: one drilled path belonging to a well.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wellbore {
    pub identity: ObjectIdentity,
    pub number: Option<String>,
    pub suffix_api: Option<String>,
    pub num_govt: Option<String>,
    pub status: Option<String>,
    pub purpose: Option<String>,
    pub shape: Option<String>,
    pub is_active: Option<bool>,
    pub kickoff_time: Option<Timestamp>,
    pub md_current: Value,
    pub tvd_current: Value,
    pub md_planned: Value,
    pub tvd_planned: Value,
    pub common_data: CommonData,
}

impl Wellbore {
    pub fn new(identity: ObjectIdentity) -> Self {
        Self {
            identity,
            number: None,
            suffix_api: None,
            num_govt: None,
            status: None,
            purpose: None,
            shape: None,
            is_active: None,
            kickoff_time: None,
            md_current: Value::default(),
            tvd_current: Value::default(),
            md_planned: Value::default(),
            tvd_planned: Value::default(),
            common_data: CommonData::default(),
        }
    }
}
