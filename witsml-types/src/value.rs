//! Measured values with an optional unit of measure.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A numeric magnitude with an optional unit symbol.
///
/// Either part may be absent: the store frequently returns a unit with no
/// magnitude (an empty element that only echoes the `uom` attribute).
///
/// Ordering is by magnitude only, with an absent magnitude sorting after
/// every present one. Magnitudes compare with [`f64::total_cmp`], so the
/// ordering is total and consistent with equality.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Value {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    magnitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
}

impl Value {
    /// Creates a value from both parts.
    #[must_use]
    pub fn new(magnitude: Option<f64>, unit: Option<String>) -> Self {
        Self { magnitude, unit }
    }

    /// Creates a value with a magnitude and a unit.
    #[must_use]
    pub fn with_unit(magnitude: f64, unit: impl Into<String>) -> Self {
        Self {
            magnitude: Some(magnitude),
            unit: Some(unit.into()),
        }
    }

    /// Creates a dimensionless value.
    #[must_use]
    pub fn scalar(magnitude: f64) -> Self {
        Self {
            magnitude: Some(magnitude),
            unit: None,
        }
    }

    /// Parses a magnitude from protocol text. Unparseable or blank text
    /// yields an absent magnitude; the unit is kept either way.
    #[must_use]
    pub fn parse(text: Option<&str>, unit: Option<&str>) -> Self {
        let magnitude = text.and_then(|t| t.trim().parse::<f64>().ok());
        let unit = unit.map(str::trim).filter(|u| !u.is_empty()).map(str::to_string);
        Self { magnitude, unit }
    }

    #[must_use]
    pub fn magnitude(&self) -> Option<f64> {
        self.magnitude
    }

    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// Returns true when neither a magnitude nor a unit is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.magnitude.is_none() && self.unit.is_none()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_magnitude = match (self.magnitude, other.magnitude) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        // Unit only breaks ties so that Eq stays consistent with Ord.
        by_magnitude.then_with(|| self.unit.cmp(&other.unit))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.magnitude, self.unit.as_deref()) {
            (Some(m), Some(u)) => write!(f, "{m} {u}"),
            (Some(m), None) => write!(f, "{m}"),
            (None, Some(u)) => write!(f, "- {u}"),
            (None, None) => f.write_str("-"),
        }
    }
}
