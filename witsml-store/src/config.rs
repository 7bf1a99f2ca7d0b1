//! Client configuration.
//!
//! ```toml
//! version = "1.4.1.1"
//! units = "metric"
//!
//! [decode]
//! delimiter = ","
//! null_value = "-999.25"
//! harmonize_units = true
//! numeric_policy = "store_null"
//! datetime_policy = "fail"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use witsml_model::DecodeOptions;
use witsml_types::{UnitProfile, WitsmlVersion};

use crate::error::{StoreError, StoreResult};

/// Settings for a [`crate::WitsmlClient`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Data schema version used for every query.
    pub version: WitsmlVersion,
    /// Units requested in query templates.
    pub units: UnitProfile,
    pub decode: DecodeOptions,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: WitsmlVersion::V1_4_1,
            units: UnitProfile::ServerDefault,
            decode: DecodeOptions::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_toml_str(text: &str) -> StoreResult<Self> {
        toml::from_str(text).map_err(|e| StoreError::Config(e.to_string()))
    }

    /// Reads a TOML file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> StoreResult<String> {
        toml::to_string_pretty(self).map_err(|e| StoreError::Config(e.to_string()))
    }
}
