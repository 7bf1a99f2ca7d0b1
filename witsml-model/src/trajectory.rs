use serde::{Deserialize, Serialize};
use witsml_types::{Timestamp, Value};

use crate::common::CommonData;
use crate::identity::ObjectIdentity;

/// One survey station.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectoryStation {
    pub uid: Option<String>,
    pub time: Option<Timestamp>,
    pub type_station: Option<String>,
    pub md: Value,
    pub tvd: Value,
    pub incl: Value,
    pub azi: Value,
    pub disp_ns: Value,
    pub disp_ew: Value,
    pub dls: Value,
}

/// A directional survey: an ordered list of stations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trajectory {
    pub identity: ObjectIdentity,
    pub service_company: Option<String>,
    pub definitive: Option<bool>,
    pub memory: Option<bool>,
    pub final_traj: Option<bool>,
    pub azi_ref: Option<String>,
    pub md_min: Value,
    pub md_max: Value,
    pub magnetic_declination: Value,
    pub grid_correction: Value,
    pub stations: Vec<TrajectoryStation>,
    pub common_data: CommonData,
}

impl Trajectory {
    pub fn new(identity: ObjectIdentity) -> Self {
        Self {
            identity,
            service_company: None,
            definitive: None,
            memory: None,
            final_traj: None,
            azi_ref: None,
            md_min: Value::default(),
            md_max: Value::default(),
            magnetic_declination: Value::default(),
            grid_correction: Value::default(),
            stations: Vec::new(),
            common_data: CommonData::default(),
        }
    }

    /// Deepest station by measured depth, if any station carries one.
    pub fn deepest_station(&self) -> Option<&TrajectoryStation> {
        self.stations
            .iter()
            .filter(|s| s.md.magnitude().is_some())
            .max_by(|a, b| a.md.cmp(&b.md))
    }
}
