//! Per-version schemas.
//!
//! Each version module owns its query templates and its [`ObjectCodec`]
//! implementation. They share only the data-only readers in `parse` and
//! `fields`.
//!
//! [`ObjectCodec`]: crate::ObjectCodec

use roxmltree::Node;
use witsml_model::{BulkDecoder, CurveHeader, Log, WitsmlObject};
use witsml_types::{ObjectType, WitsmlVersion};

use crate::error::{StoreError, StoreResult};
use crate::parse::{children, curve_header, data_rows};

pub(crate) mod v120;
pub(crate) mod v131;
pub(crate) mod v141;

/// Wraps a singular element template in its plural root.
pub(crate) fn document(version: WitsmlVersion, object_type: ObjectType, body: &str) -> String {
    format!(
        r#"<{plural} xmlns="{ns}" version="{version}">{body}</{plural}>"#,
        plural = object_type.collection_name(),
        ns = version.namespace(),
        version = version.as_str(),
    )
}

/// Rejects an element or object that does not belong to this codec.
pub(crate) fn check_target(
    version: WitsmlVersion,
    object_type: ObjectType,
    object: &WitsmlObject,
    element: Node<'_, '_>,
) -> StoreResult<()> {
    if element.tag_name().name() != object_type.element_name() {
        return Err(StoreError::ResponseParse(format!(
            "expected <{}>, found <{}>",
            object_type.element_name(),
            element.tag_name().name()
        )));
    }
    if object.object_type() != object_type {
        return Err(StoreError::ResponseParse(format!(
            "WITSML {} {} codec cannot update a {}",
            version,
            object_type,
            object.object_type()
        )));
    }
    Ok(())
}

/// Curve headers and data for the versions that number columns in each
/// `logCurveInfo` (1.2.0 and 1.3.1.1).
pub(crate) fn update_indexed_curves(
    log: &mut Log,
    element: Node<'_, '_>,
    decoder: &BulkDecoder,
) -> StoreResult<()> {
    let headers: Vec<CurveHeader> = children(element, "logCurveInfo")
        .map(|node| curve_header(node, true))
        .collect();
    log.apply_curve_headers(headers, None)?;
    if let Some(rows) = data_rows(element) {
        decoder.decode(log, &rows)?;
    }
    Ok(())
}
