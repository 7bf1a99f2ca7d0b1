//! Core type definitions for the WITSML STORE client.
//!
//! This crate defines the small, schema-agnostic vocabulary every other
//! crate in the workspace speaks:
//! - Logical object type tags and their wire element names
//! - Supported protocol versions and their namespaces
//! - Measured values (magnitude + unit) with a total ordering
//! - Unit profiles used when rendering query templates
//! - Lenient ISO-8601 timestamp parsing
//!
//! Version-specific field sets and parsing belong in `witsml-store`, not here.

mod object_type;
mod timestamp;
mod units;
mod value;
mod version;

pub use object_type::ObjectType;
pub use timestamp::{parse_timestamp, Timestamp};
pub use units::{Quantity, UnitProfile};
pub use value::Value;
pub use version::WitsmlVersion;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown object type: {0}")]
    UnknownObjectType(String),

    #[error("unsupported WITSML version: {0}")]
    UnknownVersion(String),

    #[error("unknown unit profile: {0}")]
    UnknownUnitProfile(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
