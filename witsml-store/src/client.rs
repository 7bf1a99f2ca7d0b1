//! The client facade.
//!
//! Ties the pipeline together: resolve the codec, render and constrain the
//! query, make one round trip, check the status and materialize the reply.
//! Every call is synchronous; the transport owns timeouts.

use quick_xml::escape::escape;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};
use witsml_model::{BulkDecoder, ObjectIdentity, WitsmlObject};
use witsml_query::{constrain, QueryConstraints};
use witsml_types::{ObjectType, WitsmlVersion};

use crate::config::ClientConfig;
use crate::error::{StoreError, StoreResult};
use crate::listener::{AccessEvent, AccessListener, StoreOperation, Subscriptions, SubscriptionId};
use crate::materialize::{materialize_all, update_from};
use crate::registry::{resolve, ObjectCodec};
use crate::schema::document;
use crate::transport::{StoreReply, StoreStatus, StoreTransport, TransportResult};

/// A STORE client bound to one transport and one schema version.
pub struct WitsmlClient<T: StoreTransport> {
    transport: T,
    config: ClientConfig,
    decoder: BulkDecoder,
    listeners: Subscriptions,
}

impl<T: StoreTransport> WitsmlClient<T> {
    pub fn new(transport: T, config: ClientConfig) -> StoreResult<Self> {
        let decoder = BulkDecoder::new(config.decode.clone())
            .map_err(|err| StoreError::Config(err.to_string()))?;
        Ok(Self {
            transport,
            config,
            decoder,
            listeners: Subscriptions::new(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn version(&self) -> WitsmlVersion {
        self.config.version
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn subscribe(&self, listener: Arc<dyn AccessListener>) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    // ── Server information ───────────────────────────────────────

    /// Versions the server supports, oldest first. Unknown entries are
    /// skipped.
    pub fn server_versions(&self) -> StoreResult<Vec<WitsmlVersion>> {
        let result = self.observe(
            StoreOperation::GetVersion,
            None,
            "",
            || self.transport.get_version(),
            |text| (text.clone(), None),
        );
        let text = result.map_err(|source| StoreError::Transport {
            operation: StoreOperation::GetVersion.as_str(),
            source,
        })?;
        Ok(WitsmlVersion::parse_list(&text))
    }

    /// The raw capabilities document.
    pub fn capabilities(&self) -> StoreResult<String> {
        let reply = self.round_trip(StoreOperation::GetCapabilities, None, "", || {
            self.transport.get_capabilities()
        })?;
        Ok(reply.xml)
    }

    // ── Queries ──────────────────────────────────────────────────

    /// Renders the constrained query for every `object_type` under `parent`
    /// without talking to the server.
    pub fn query_for(
        &self,
        object_type: ObjectType,
        parent: Option<&ObjectIdentity>,
        constraints: &QueryConstraints,
    ) -> StoreResult<String> {
        let codec = self.codec(object_type)?;
        self.render(codec, "", parent, constraints)
    }

    /// Fetches every `object_type` under `parent` that matches `constraints`.
    pub fn fetch(
        &self,
        object_type: ObjectType,
        parent: Option<&ObjectIdentity>,
        constraints: &QueryConstraints,
    ) -> StoreResult<Vec<WitsmlObject>> {
        let codec = self.codec(object_type)?;
        let query = self.render(codec, "", parent, constraints)?;
        let reply = self.get_from_store(object_type, &query)?;
        materialize_all(codec, &reply.xml, parent, &self.decoder)
    }

    /// Fetches one instance by id. `None` when the server has no match.
    pub fn fetch_one(
        &self,
        object_type: ObjectType,
        id: &str,
        parent: Option<&ObjectIdentity>,
    ) -> StoreResult<Option<WitsmlObject>> {
        let codec = self.codec(object_type)?;
        let query = self.render(codec, id, parent, &QueryConstraints::new())?;
        let reply = self.get_from_store(object_type, &query)?;
        let mut objects = materialize_all(codec, &reply.xml, parent, &self.decoder)?;
        let Some(position) = objects.iter().position(|o| o.id() == Some(id)) else {
            debug!("No {} with id {} in the reply", object_type, id);
            return Ok(None);
        };
        Ok(Some(objects.swap_remove(position)))
    }

    /// Fetches every child of `object_type` directly under `parent`.
    pub fn fetch_children(
        &self,
        parent: &ObjectIdentity,
        object_type: ObjectType,
    ) -> StoreResult<Vec<WitsmlObject>> {
        self.fetch(object_type, Some(parent), &QueryConstraints::new())
    }

    /// Re-reads `object` and updates it in place.
    ///
    /// Only fields present in the reply change. Returns false when the
    /// server no longer returns the object (or it has no id to ask for).
    pub fn refresh(
        &self,
        object: &mut WitsmlObject,
        constraints: &QueryConstraints,
    ) -> StoreResult<bool> {
        let object_type = object.object_type();
        let Some(id) = object.id().map(str::to_string) else {
            warn!("Cannot refresh a {} without id", object_type);
            return Ok(false);
        };
        let codec = self.codec(object_type)?;
        let parent_ids = object.identity().parent_ids().to_vec();
        let template = codec.build_query(&id, &parent_ids, self.config.units);
        let query = constrain(&template, constraints)?;
        let reply = self.get_from_store(object_type, &query)?;
        update_from(codec, object, &reply.xml, &self.decoder)
    }

    /// Deletes `object` from the store.
    pub fn delete(&self, object: &WitsmlObject) -> StoreResult<()> {
        let identity = object.identity();
        let object_type = identity.object_type();
        self.codec(object_type)?;
        let id = identity.id().ok_or_else(|| {
            StoreError::InvalidParent(format!("cannot delete a {object_type} without id"))
        })?;

        let query = identity_query(self.config.version, identity, id);
        let status = self
            .observe(
                StoreOperation::DeleteFromStore,
                Some(object_type),
                &query,
                || self.transport.delete_from_store(object_type, &query),
                |status| (String::new(), Some(status.clone())),
            )
            .map_err(|source| StoreError::Transport {
                operation: StoreOperation::DeleteFromStore.as_str(),
                source,
            })?;
        self.check_status(&status)?;
        info!("Deleted {}", identity);
        Ok(())
    }

    // ── Internals ────────────────────────────────────────────────

    fn codec(&self, object_type: ObjectType) -> StoreResult<&'static dyn ObjectCodec> {
        resolve(self.config.version, object_type)
    }

    fn render(
        &self,
        codec: &dyn ObjectCodec,
        id: &str,
        parent: Option<&ObjectIdentity>,
        constraints: &QueryConstraints,
    ) -> StoreResult<String> {
        let parent_ids = parent_chain(codec.object_type(), parent)?;
        let template = codec.build_query(id, &parent_ids, self.config.units);
        let query = constrain(&template, constraints)?;
        debug!("Built {} query ({} bytes)", codec.object_type(), query.len());
        Ok(query)
    }

    fn get_from_store(&self, object_type: ObjectType, query: &str) -> StoreResult<StoreReply> {
        self.round_trip(StoreOperation::GetFromStore, Some(object_type), query, || {
            self.transport.get_from_store(object_type, query)
        })
    }

    /// One reply-returning call: notify listeners, then check the status.
    fn round_trip(
        &self,
        operation: StoreOperation,
        object_type: Option<ObjectType>,
        request: &str,
        call: impl FnOnce() -> TransportResult<StoreReply>,
    ) -> StoreResult<StoreReply> {
        let reply = self
            .observe(operation, object_type, request, call, |reply| {
                (reply.xml.clone(), Some(reply.status.clone()))
            })
            .map_err(|source| StoreError::Transport {
                operation: operation.as_str(),
                source,
            })?;
        self.check_status(&reply.status)?;
        Ok(reply)
    }

    /// Times `call` and reports it to the listeners. `describe` extracts
    /// the response text and status for the event.
    fn observe<R>(
        &self,
        operation: StoreOperation,
        object_type: Option<ObjectType>,
        request: &str,
        call: impl FnOnce() -> TransportResult<R>,
        describe: impl FnOnce(&R) -> (String, Option<StoreStatus>),
    ) -> TransportResult<R> {
        let started = Instant::now();
        let result = call();
        let elapsed = started.elapsed();

        match &result {
            Ok(_) => info!(
                "{} {} completed in {:?}",
                operation.as_str(),
                object_type.map(ObjectType::element_name).unwrap_or_default(),
                elapsed
            ),
            Err(err) => warn!("{} failed after {:?}: {}", operation.as_str(), elapsed, err),
        }

        if !self.listeners.is_empty() {
            let (response, status) = match &result {
                Ok(value) => describe(value),
                Err(_) => (String::new(), None),
            };
            self.listeners.notify(&AccessEvent {
                operation,
                object_type,
                request: request.to_string(),
                response,
                status,
                elapsed,
            });
        }

        result
    }

    fn check_status(&self, status: &StoreStatus) -> StoreResult<()> {
        if status.is_success() {
            return Ok(());
        }
        let message = match status.message.as_deref().filter(|m| !m.trim().is_empty()) {
            Some(message) => message.to_string(),
            None => match self.transport.get_status_message(status.code) {
                Ok(text) if !text.trim().is_empty() => text,
                Ok(_) => format!("status {}", status.code),
                Err(err) => {
                    warn!("Cannot look up message for status {}: {}", status.code, err);
                    format!("status {}", status.code)
                }
            },
        };
        Err(StoreError::Server {
            code: status.code,
            message,
        })
    }
}

impl<T: StoreTransport + std::fmt::Debug> std::fmt::Debug for WitsmlClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WitsmlClient")
            .field("transport", &self.transport)
            .field("config", &self.config)
            .field("listeners", &self.listeners)
            .finish()
    }
}

/// Ancestor ids for a query under `parent`. No parent means no constraint.
fn parent_chain(object_type: ObjectType, parent: Option<&ObjectIdentity>) -> StoreResult<Vec<String>> {
    let Some(parent) = parent else {
        return Ok(Vec::new());
    };
    if object_type.parent_type() != Some(parent.object_type()) {
        return Err(StoreError::InvalidParent(format!(
            "a {} cannot be the parent of a {}",
            parent.object_type(),
            object_type
        )));
    }
    Ok(parent.child_chain()?)
}

/// A query naming only the object: root, one element, identity attributes.
fn identity_query(version: WitsmlVersion, identity: &ObjectIdentity, id: &str) -> String {
    let mut attributes = String::new();
    let names: &[&str] = match identity.object_type().ancestor_count() {
        0 => &[],
        1 => &["uidWell"],
        _ => &["uidWellbore", "uidWell"],
    };
    // Outermost ancestor first, as in the templates.
    for (name, value) in names.iter().zip(identity.parent_ids()).rev() {
        attributes.push_str(&format!(r#" {}="{}""#, name, escape(value)));
    }
    attributes.push_str(&format!(r#" uid="{}""#, escape(id)));
    let body = format!("<{}{}/>", identity.object_type().element_name(), attributes);
    document(version, identity.object_type(), &body)
}
