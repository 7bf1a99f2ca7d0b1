//! Shared logic for the `witsml` command-line tool.
//!
//! Both commands work offline: `query` prints the text a client would
//! send, `parse` materializes a response saved from a server.

use tracing::debug;
use witsml_model::{BulkDecoder, ObjectIdentity, WitsmlObject};
use witsml_query::{QueryConstraints, constrain};
use witsml_store::{ClientConfig, StoreError, StoreResult, materialize_all, resolve};
use witsml_types::{ObjectType, UnitProfile, WitsmlVersion};

/// Everything needed to render one query.
#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub version: WitsmlVersion,
    pub object_type: ObjectType,
    /// `None` asks for every instance.
    pub id: Option<String>,
    /// Ancestor ids, closest first (`wellbore`, then `well`).
    pub parents: Vec<String>,
    pub units: UnitProfile,
    pub constraints: QueryConstraints,
}

/// Renders the constrained query text for `request`.
pub fn render_query(request: &QueryRequest) -> StoreResult<String> {
    let codec = resolve(request.version, request.object_type)?;
    let parent_ids = match parent_identity(request.object_type, &request.parents)? {
        Some(parent) => parent.child_chain()?,
        None => Vec::new(),
    };
    let template = codec.build_query(
        request.id.as_deref().unwrap_or_default(),
        &parent_ids,
        request.units,
    );
    Ok(constrain(&template, &request.constraints)?)
}

/// Materializes every `object_type` element of a saved response.
///
/// `parents` works as in [`QueryRequest::parents`]; when empty, the
/// ancestor chain is read from each element's attributes.
pub fn parse_response(
    config: &ClientConfig,
    object_type: ObjectType,
    xml: &str,
    parents: &[String],
) -> StoreResult<Vec<WitsmlObject>> {
    let codec = resolve(config.version, object_type)?;
    let decoder = BulkDecoder::new(config.decode.clone())
        .map_err(|err| StoreError::Config(err.to_string()))?;
    let parent = parent_identity(object_type, parents)?;
    let objects = materialize_all(codec, xml, parent.as_ref(), &decoder)?;
    debug!("Parsed {} {}(s)", objects.len(), object_type);
    Ok(objects)
}

/// The identity of the parent addressed by `parents`, if any.
pub fn parent_identity(
    object_type: ObjectType,
    parents: &[String],
) -> StoreResult<Option<ObjectIdentity>> {
    let Some((id, ancestors)) = parents.split_first() else {
        return Ok(None);
    };
    let parent_type = object_type
        .parent_type()
        .ok_or_else(|| StoreError::InvalidParent(format!("a {object_type} has no parent")))?;
    if parents.len() != object_type.ancestor_count() {
        return Err(StoreError::InvalidParent(format!(
            "a {} needs {} parent id(s), got {}",
            object_type,
            object_type.ancestor_count(),
            parents.len()
        )));
    }
    let identity =
        ObjectIdentity::with_ancestors(parent_type, Some(id.clone()), ancestors.to_vec())?;
    Ok(Some(identity))
}

/// Parses `element=value`.
pub fn parse_assignment(text: &str) -> Result<(String, String), String> {
    let (element, value) = text
        .split_once('=')
        .ok_or_else(|| format!("expected ELEMENT=VALUE, got {text:?}"))?;
    if element.trim().is_empty() {
        return Err(format!("missing element name in {text:?}"));
    }
    Ok((element.trim().to_string(), value.to_string()))
}

/// Parses `element@attribute=value`.
pub fn parse_attribute_assignment(text: &str) -> Result<(String, String, String), String> {
    let (target, value) = parse_assignment(text)?;
    let (element, attribute) = target
        .split_once('@')
        .filter(|(e, a)| !e.is_empty() && !a.is_empty())
        .ok_or_else(|| format!("expected ELEMENT@ATTRIBUTE=VALUE, got {text:?}"))?;
    Ok((element.to_string(), attribute.to_string(), value))
}
