//! Response materialization.
//!
//! A GetFromStore reply is a plural root holding zero or more singular
//! elements. Each element of the requested type becomes one object.

use roxmltree::{Document, Node};
use tracing::{debug, warn};
use witsml_model::{BulkDecoder, ObjectIdentity, WitsmlObject};

use crate::error::StoreResult;
use crate::registry::ObjectCodec;

/// Materializes every element of the codec's type in `xml`.
///
/// An empty reply (no document at all) yields no objects. Elements of other
/// types under the root are skipped.
pub fn materialize_all(
    codec: &dyn ObjectCodec,
    xml: &str,
    parent: Option<&ObjectIdentity>,
    decoder: &BulkDecoder,
) -> StoreResult<Vec<WitsmlObject>> {
    if xml.trim().is_empty() {
        return Ok(Vec::new());
    }
    let doc = Document::parse(xml)?;
    let objects = matching_elements(codec, &doc)
        .map(|element| codec.materialize(parent, element, decoder))
        .collect::<StoreResult<Vec<_>>>()?;
    debug!(
        "Materialized {} {}(s) from WITSML {} response",
        objects.len(),
        codec.object_type(),
        codec.version()
    );
    Ok(objects)
}

/// Updates `object` in place from the matching element of `xml`.
///
/// The element is picked by `uid`; a reply holding a single element of the
/// right type is accepted only when it carries no `uid` at all. Returns
/// false when the reply held nothing for this object.
pub fn update_from(
    codec: &dyn ObjectCodec,
    object: &mut WitsmlObject,
    xml: &str,
    decoder: &BulkDecoder,
) -> StoreResult<bool> {
    if xml.trim().is_empty() {
        return Ok(false);
    }
    let doc = Document::parse(xml)?;
    let candidates: Vec<Node<'_, '_>> = matching_elements(codec, &doc).collect();

    let by_id = object
        .id()
        .and_then(|id| candidates.iter().find(|e| e.attribute("uid") == Some(id)).copied());
    let element = match (by_id, candidates.as_slice()) {
        (Some(element), _) => element,
        (None, [only]) if only.attribute("uid").is_none() => *only,
        (None, []) => return Ok(false),
        (None, [other]) => {
            warn!(
                "Reply holds {} {:?}, not {:?}",
                codec.object_type(),
                other.attribute("uid"),
                object.id()
            );
            return Ok(false);
        }
        (None, _) => {
            warn!(
                "Reply holds {} {} elements and none matches uid {:?}",
                candidates.len(),
                codec.object_type(),
                object.id()
            );
            return Ok(false);
        }
    };
    codec.update(object, element, decoder)?;
    Ok(true)
}

fn matching_elements<'a, 'input>(
    codec: &dyn ObjectCodec,
    doc: &'a Document<'input>,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    let root = doc.root_element();
    let expected_root = codec.object_type().collection_name();
    if root.tag_name().name() != expected_root {
        warn!(
            "Expected <{}> root, found <{}>",
            expected_root,
            root.tag_name().name()
        );
    }
    let name = codec.object_type().element_name();
    root.children()
        .filter(move |c| c.is_element() && c.tag_name().name() == name)
}

