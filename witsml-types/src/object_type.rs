//! Logical object type tags.
//!
//! Every STORE object lives under a fixed ancestry: a well is the root, a
//! wellbore belongs to a well, and every other type belongs to a wellbore
//! (rigs included, as the protocol addresses them by `uidWell`/`uidWellbore`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The logical type of a STORE object, independent of protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectType {
    Well,
    Wellbore,
    Log,
    Trajectory,
    Message,
    Realtime,
    Rig,
    FormationMarker,
}

impl ObjectType {
    /// Every known type, in hierarchy order.
    pub const ALL: [ObjectType; 8] = [
        ObjectType::Well,
        ObjectType::Wellbore,
        ObjectType::Log,
        ObjectType::Trajectory,
        ObjectType::Message,
        ObjectType::Realtime,
        ObjectType::Rig,
        ObjectType::FormationMarker,
    ];

    /// The singular element name used on the wire (e.g. `formationMarker`).
    #[must_use]
    pub const fn element_name(self) -> &'static str {
        match self {
            ObjectType::Well => "well",
            ObjectType::Wellbore => "wellbore",
            ObjectType::Log => "log",
            ObjectType::Trajectory => "trajectory",
            ObjectType::Message => "message",
            ObjectType::Realtime => "realtime",
            ObjectType::Rig => "rig",
            ObjectType::FormationMarker => "formationMarker",
        }
    }

    /// The plural root element name (e.g. `wellbores`).
    #[must_use]
    pub const fn collection_name(self) -> &'static str {
        match self {
            ObjectType::Well => "wells",
            ObjectType::Wellbore => "wellbores",
            ObjectType::Log => "logs",
            ObjectType::Trajectory => "trajectorys",
            ObjectType::Message => "messages",
            ObjectType::Realtime => "realtimes",
            ObjectType::Rig => "rigs",
            ObjectType::FormationMarker => "formationMarkers",
        }
    }

    /// The type of the immediate parent, or `None` for wells.
    #[must_use]
    pub const fn parent_type(self) -> Option<ObjectType> {
        match self {
            ObjectType::Well => None,
            ObjectType::Wellbore => Some(ObjectType::Well),
            _ => Some(ObjectType::Wellbore),
        }
    }

    /// Number of ancestor ids needed to address an instance of this type.
    #[must_use]
    pub const fn ancestor_count(self) -> usize {
        match self {
            ObjectType::Well => 0,
            ObjectType::Wellbore => 1,
            _ => 2,
        }
    }

    /// Looks up a type by its singular element name.
    #[must_use]
    pub fn from_element_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.element_name() == name)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_name())
    }
}

impl FromStr for ObjectType {
    type Err = Error;

    /// Accepts the element name in any letter case, singular or plural.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| {
                t.element_name().eq_ignore_ascii_case(s) || t.collection_name().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| Error::UnknownObjectType(s.to_string()))
    }
}
