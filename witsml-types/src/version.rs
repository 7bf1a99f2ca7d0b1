//! Supported WITSML data schema versions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A WITSML data schema version understood by this client.
///
/// The three versions are mutually incompatible on the wire: each has its
/// own namespace URI and its own field set per object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WitsmlVersion {
    #[serde(rename = "1.2.0")]
    V1_2_0,
    #[serde(rename = "1.3.1.1")]
    V1_3_1,
    #[serde(rename = "1.4.1.1")]
    V1_4_1,
}

impl WitsmlVersion {
    /// All supported versions, oldest first.
    pub const ALL: [WitsmlVersion; 3] = [
        WitsmlVersion::V1_2_0,
        WitsmlVersion::V1_3_1,
        WitsmlVersion::V1_4_1,
    ];

    /// The version token written in the `version` attribute of a query root.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            WitsmlVersion::V1_2_0 => "1.2.0",
            WitsmlVersion::V1_3_1 => "1.3.1.1",
            WitsmlVersion::V1_4_1 => "1.4.1.1",
        }
    }

    /// The data schema namespace URI.
    #[must_use]
    pub const fn namespace(self) -> &'static str {
        match self {
            WitsmlVersion::V1_2_0 => "http://www.witsml.org/schemas/120",
            WitsmlVersion::V1_3_1 => "http://www.witsml.org/schemas/131",
            WitsmlVersion::V1_4_1 => "http://www.witsml.org/schemas/1series",
        }
    }

    /// Parses a version token. Both the short (`1.3.1`) and the full
    /// (`1.3.1.1`) forms are accepted.
    pub fn parse(s: &str) -> Result<Self, Error> {
        match s.trim() {
            "1.2.0" | "1.2" => Ok(WitsmlVersion::V1_2_0),
            "1.3.1" | "1.3.1.1" => Ok(WitsmlVersion::V1_3_1),
            "1.4.1" | "1.4.1.0" | "1.4.1.1" => Ok(WitsmlVersion::V1_4_1),
            other => Err(Error::UnknownVersion(other.to_string())),
        }
    }

    /// Parses the comma-separated list returned by `WMLS_GetVersion`,
    /// skipping tokens this client does not understand.
    #[must_use]
    pub fn parse_list(s: &str) -> Vec<Self> {
        let mut versions: Vec<Self> = s
            .split(',')
            .filter_map(|token| Self::parse(token).ok())
            .collect();
        versions.sort();
        versions.dedup();
        versions
    }
}

impl fmt::Display for WitsmlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WitsmlVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
