//! WITSML STORE client.
//!
//! The client talks to a STORE server through a [`StoreTransport`] and turns
//! its XML replies into the typed objects of `witsml-model`:
//!
//! - [`registry`] maps a (version, object type) pair to its [`ObjectCodec`]
//! - each codec renders its query template and parses its response elements
//! - [`materialize_all`] and [`update_from`] drive a codec over a reply
//! - [`WitsmlClient`] ties these to one transport and notifies
//!   [`AccessListener`]s of every round trip
//!
//! The transport itself (SOAP, HTTP, credentials) is the caller's concern.

mod client;
mod config;
mod error;
mod fields;
mod listener;
mod materialize;
mod parse;
pub mod registry;
mod schema;
pub mod transport;

pub use client::WitsmlClient;
pub use config::ClientConfig;
pub use error::{StoreError, StoreResult};
pub use listener::{AccessEvent, AccessListener, StoreOperation, SubscriptionId, Subscriptions};
pub use materialize::{materialize_all, update_from};
pub use registry::{resolve, supported_types, ObjectCodec};
pub use transport::{mock, StoreReply, StoreStatus, StoreTransport, TransportError, TransportResult};
