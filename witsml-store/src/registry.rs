//! Version registry and codec dispatch.
//!
//! Every supported (version, object type) pair has one static codec. The
//! registry only maps the pair to it; everything version-specific lives in
//! the `schema` modules.

use roxmltree::Node;
use witsml_model::{BulkDecoder, ObjectIdentity, WitsmlObject};
use witsml_query::render_template;
use witsml_types::{ObjectType, UnitProfile, WitsmlVersion};

use crate::error::{StoreError, StoreResult};
use crate::parse;
use crate::schema::{v120, v131, v141};

/// Query construction and response parsing for one (version, type) pair.
pub trait ObjectCodec: Send + Sync {
    fn version(&self) -> WitsmlVersion;

    fn object_type(&self) -> ObjectType;

    /// The query skeleton with `%uid%`, `%parent.N%` and `%uom:..%`
    /// placeholders still in place.
    fn skeleton(&self) -> &'static str;

    /// Renders the skeleton for one instance. An empty `id` asks for every
    /// instance under the given ancestors.
    fn build_query(&self, id: &str, parent_ids: &[String], units: UnitProfile) -> String {
        render_template(self.skeleton(), id, parent_ids, units)
    }

    /// Creates an object from one response element.
    ///
    /// With `parent`, the new object's ancestor chain is copied from it;
    /// otherwise it is read from the element's `uidWell`/`uidWellbore`.
    fn materialize(
        &self,
        parent: Option<&ObjectIdentity>,
        element: Node<'_, '_>,
        decoder: &BulkDecoder,
    ) -> StoreResult<WitsmlObject> {
        let identity = parse::identity(self.object_type(), parent, element)?;
        let mut object = WitsmlObject::empty(identity);
        self.update(&mut object, element, decoder)?;
        Ok(object)
    }

    /// Refreshes `object` from a response element, field by field.
    /// Calling it again with the same element changes nothing.
    fn update(
        &self,
        object: &mut WitsmlObject,
        element: Node<'_, '_>,
        decoder: &BulkDecoder,
    ) -> StoreResult<()>;
}

/// Looks up the codec for a pair. Fails before any network traffic when
/// the version does not define the type.
pub fn resolve(version: WitsmlVersion, object_type: ObjectType) -> StoreResult<&'static dyn ObjectCodec> {
    let codec = match version {
        WitsmlVersion::V1_2_0 => v120::codec(object_type),
        WitsmlVersion::V1_3_1 => v131::codec(object_type),
        WitsmlVersion::V1_4_1 => v141::codec(object_type),
    };
    codec.ok_or(StoreError::TemplateResolution {
        version,
        object_type,
    })
}

/// Object types a version defines, in hierarchy order.
pub fn supported_types(version: WitsmlVersion) -> Vec<ObjectType> {
    ObjectType::ALL
        .into_iter()
        .filter(|t| resolve(version, *t).is_ok())
        .collect()
}
