use serde::{Deserialize, Serialize};
use witsml_types::ObjectType;

use crate::identity::ObjectIdentity;
use crate::log::Log;
use crate::trajectory::Trajectory;
use crate::well::{Well, Wellbore};
use crate::wellbore_objects::{FormationMarker, Message, Realtime, Rig};

/// Any materialized STORE object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WitsmlObject {
    Well(Well),
    Wellbore(Wellbore),
    Log(Log),
    Trajectory(Trajectory),
    Message(Message),
    Realtime(Realtime),
    Rig(Rig),
    FormationMarker(FormationMarker),
}

macro_rules! accessors {
    ($($variant:ident => $as_ref:ident, $as_mut:ident, $into:ident;)*) => {
        $(
            pub fn $as_ref(&self) -> Option<&$variant> {
                match self {
                    WitsmlObject::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            pub fn $as_mut(&mut self) -> Option<&mut $variant> {
                match self {
                    WitsmlObject::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            pub fn $into(self) -> Option<$variant> {
                match self {
                    WitsmlObject::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        )*
    };
}

impl WitsmlObject {
    /// A blank object of the identity's type, ready to be filled in.
    pub fn empty(identity: ObjectIdentity) -> Self {
        match identity.object_type() {
            ObjectType::Well => WitsmlObject::Well(Well::new(identity)),
            ObjectType::Wellbore => WitsmlObject::Wellbore(Wellbore::new(identity)),
            ObjectType::Log => WitsmlObject::Log(Log::new(identity)),
            ObjectType::Trajectory => WitsmlObject::Trajectory(Trajectory::new(identity)),
            ObjectType::Message => WitsmlObject::Message(Message::new(identity)),
            ObjectType::Realtime => WitsmlObject::Realtime(Realtime::new(identity)),
            ObjectType::Rig => WitsmlObject::Rig(Rig::new(identity)),
            ObjectType::FormationMarker => {
                WitsmlObject::FormationMarker(FormationMarker::new(identity))
            }
        }
    }

    pub fn identity(&self) -> &ObjectIdentity {
        match self {
            WitsmlObject::Well(o) => &o.identity,
            WitsmlObject::Wellbore(o) => &o.identity,
            WitsmlObject::Log(o) => &o.identity,
            WitsmlObject::Trajectory(o) => &o.identity,
            WitsmlObject::Message(o) => &o.identity,
            WitsmlObject::Realtime(o) => &o.identity,
            WitsmlObject::Rig(o) => &o.identity,
            WitsmlObject::FormationMarker(o) => &o.identity,
        }
    }

    pub fn identity_mut(&mut self) -> &mut ObjectIdentity {
        match self {
            WitsmlObject::Well(o) => &mut o.identity,
            WitsmlObject::Wellbore(o) => &mut o.identity,
            WitsmlObject::Log(o) => &mut o.identity,
            WitsmlObject::Trajectory(o) => &mut o.identity,
            WitsmlObject::Message(o) => &mut o.identity,
            WitsmlObject::Realtime(o) => &mut o.identity,
            WitsmlObject::Rig(o) => &mut o.identity,
            WitsmlObject::FormationMarker(o) => &mut o.identity,
        }
    }

    pub fn object_type(&self) -> ObjectType {
        self.identity().object_type()
    }

    pub fn id(&self) -> Option<&str> {
        self.identity().id()
    }

    pub fn name(&self) -> Option<&str> {
        self.identity().name()
    }

    accessors! {
        Well => as_well, as_well_mut, into_well;
        Wellbore => as_wellbore, as_wellbore_mut, into_wellbore;
        Log => as_log, as_log_mut, into_log;
        Trajectory => as_trajectory, as_trajectory_mut, into_trajectory;
        Message => as_message, as_message_mut, into_message;
        Realtime => as_realtime, as_realtime_mut, into_realtime;
        Rig => as_rig, as_rig_mut, into_rig;
        FormationMarker => as_formation_marker, as_formation_marker_mut, into_formation_marker;
    }
}

/// Same rule as [`ObjectIdentity`]: same instance, or equal non-empty ids.
impl PartialEq for WitsmlObject {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}
