//! Domain object model for the WITSML STORE client.
//!
//! Defines the version-independent objects the store crate materializes:
//! - [`ObjectIdentity`]: type, id, name and the resolved ancestor chain
//! - [`Well`], [`Wellbore`], [`Log`], [`Trajectory`], [`Message`],
//!   [`Realtime`], [`Rig`], [`FormationMarker`]
//! - [`WitsmlObject`]: the tagged union handed back to callers
//! - [`BulkDecoder`]: turns delimited log rows into typed curve columns
//!
//! Nothing in here knows about XML or protocol versions. Parsing lives in
//! `witsml-store`; this crate only holds state and the rules for updating it.

mod bulk;
mod common;
mod error;
mod identity;
mod log;
mod object;
mod refresh;
mod trajectory;
mod well;
mod wellbore_objects;

pub use bulk::{harmonize_units, is_depth_index, BulkDecodeError, BulkDecoder, DecodeOptions, TokenPolicy};
pub use common::{CommonData, Location};
pub use error::{ModelError, ModelResult};
pub use identity::{ObjectIdentity, ParentRef};
pub use log::{ColumnOrder, CurveHeader, DataType, Log, LogCurve, SampleValue};
pub use object::WitsmlObject;
pub use refresh::Refresh;
pub use trajectory::{Trajectory, TrajectoryStation};
pub use well::{Well, Wellbore};
pub use wellbore_objects::{ChannelDefinition, FormationMarker, Message, Realtime, Rig};
