//! Unit profiles for query templates.
//!
//! A query may pin the unit the server should answer in by filling the
//! `uom` attribute of a measured element. The profile decides what goes in
//! that attribute; it is passed explicitly to template rendering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Physical quantities that appear as `uom` attributes in query templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Length,
    PlaneAngle,
    AnglePerLength,
}

impl Quantity {
    /// The placeholder key used inside templates (`%uom:<key>%`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Quantity::Length => "length",
            Quantity::PlaneAngle => "angle",
            Quantity::AnglePerLength => "dls",
        }
    }

    pub const ALL: [Quantity; 3] = [
        Quantity::Length,
        Quantity::PlaneAngle,
        Quantity::AnglePerLength,
    ];
}

/// Which units the client asks the server to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitProfile {
    /// Leave every `uom` attribute empty: the server picks.
    #[default]
    ServerDefault,
    Metric,
    Imperial,
}

impl UnitProfile {
    /// The unit symbol requested for a quantity. Empty means unconstrained.
    #[must_use]
    pub const fn unit_for(self, quantity: Quantity) -> &'static str {
        match (self, quantity) {
            (UnitProfile::ServerDefault, _) => "",
            (UnitProfile::Metric, Quantity::Length) => "m",
            (UnitProfile::Imperial, Quantity::Length) => "ft",
            (_, Quantity::PlaneAngle) => "dega",
            (UnitProfile::Metric, Quantity::AnglePerLength) => "dega/30m",
            (UnitProfile::Imperial, Quantity::AnglePerLength) => "dega/100ft",
        }
    }
}

impl fmt::Display for UnitProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnitProfile::ServerDefault => "server_default",
            UnitProfile::Metric => "metric",
            UnitProfile::Imperial => "imperial",
        })
    }
}

impl FromStr for UnitProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "server_default" | "server" | "default" => Ok(UnitProfile::ServerDefault),
            "metric" | "si" => Ok(UnitProfile::Metric),
            "imperial" | "english" => Ok(UnitProfile::Imperial),
            _ => Err(Error::UnknownUnitProfile(s.to_string())),
        }
    }
}
