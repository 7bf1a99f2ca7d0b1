//! Data-only parsing helpers shared by every schema version.
//!
//! Each helper reads one child element by local name and returns `None`
//! (or an empty [`Value`]) when it is absent or blank, so callers can feed
//! the result straight into [`Refresh::refresh`].

use roxmltree::Node;
use std::str::FromStr;
use tracing::warn;
use witsml_model::{
    CommonData, CurveHeader, DataType, Location, ObjectIdentity, Refresh, TrajectoryStation,
};
use witsml_types::{parse_timestamp, ObjectType, Timestamp, Value};

use crate::error::{StoreError, StoreResult};

pub(crate) type Element<'a, 'input> = Node<'a, 'input>;

/// First child element with the given local name.
pub(crate) fn child<'a, 'input>(node: Element<'a, 'input>, name: &str) -> Option<Element<'a, 'input>> {
    node.children()
        .find(|c| c.is_element() && c.tag_name().name() == name)
}

/// Every child element with the given local name, in document order.
pub(crate) fn children<'a, 'input>(
    node: Element<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Element<'a, 'input>> + 'a
where
    'input: 'a,
{
    node.children()
        .filter(move |c| c.is_element() && c.tag_name().name() == name)
}

/// Trimmed text of a child element; blank text counts as absent.
pub(crate) fn text(node: Element<'_, '_>, name: &str) -> Option<String> {
    child(node, name).and_then(own_text)
}

/// Trimmed text of `node` itself.
pub(crate) fn own_text(node: Element<'_, '_>) -> Option<String> {
    node.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Non-blank attribute value.
pub(crate) fn attr(node: Element<'_, '_>, name: &str) -> Option<String> {
    node.attribute(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Measured value: child text plus its `uom` attribute.
pub(crate) fn value(node: Element<'_, '_>, name: &str) -> Value {
    match child(node, name) {
        Some(element) => Value::parse(element.text(), element.attribute("uom")),
        None => Value::default(),
    }
}

pub(crate) fn timestamp(node: Element<'_, '_>, name: &str) -> Option<Timestamp> {
    let raw = text(node, name)?;
    match parse_timestamp(&raw) {
        Ok(ts) => Some(ts),
        Err(err) => {
            warn!("Ignoring <{}>: {}", name, err);
            None
        }
    }
}

pub(crate) fn boolean(node: Element<'_, '_>, name: &str) -> Option<bool> {
    match text(node, name)?.as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        other => {
            warn!("Ignoring <{}>: {:?} is not a boolean", name, other);
            None
        }
    }
}

pub(crate) fn number<T: FromStr>(node: Element<'_, '_>, name: &str) -> Option<T> {
    let raw = text(node, name)?;
    let parsed = raw.parse().ok();
    if parsed.is_none() {
        warn!("Ignoring <{}>: {:?} is not a number", name, raw);
    }
    parsed
}

// ── Identity ─────────────────────────────────────────────────────

/// Builds the identity of a response element.
///
/// With a parent, the ancestor chain comes from the parent. Without one it
/// is read from the `uidWellbore`/`uidWell` attributes, which must then be
/// present.
pub(crate) fn identity(
    object_type: ObjectType,
    parent: Option<&ObjectIdentity>,
    element: Element<'_, '_>,
) -> StoreResult<ObjectIdentity> {
    let id = attr(element, "uid");
    if let Some(parent) = parent {
        return Ok(ObjectIdentity::child_of(object_type, id, parent)?);
    }

    let wanted: &[&str] = match object_type.ancestor_count() {
        0 => &[],
        1 => &["uidWell"],
        _ => &["uidWellbore", "uidWell"],
    };
    let chain = wanted
        .iter()
        .map(|name| {
            attr(element, name).ok_or_else(|| {
                StoreError::ResponseParse(format!(
                    "<{}> without parent is missing attribute {}",
                    object_type.element_name(),
                    name
                ))
            })
        })
        .collect::<StoreResult<Vec<_>>>()?;
    Ok(ObjectIdentity::with_ancestors(object_type, id, chain)?)
}

/// Refreshes the display name and the cached parent name.
pub(crate) fn refresh_names(identity: &mut ObjectIdentity, element: Element<'_, '_>) {
    identity.set_name(text(element, "name"));
    let parent_name = match identity.object_type() {
        ObjectType::Well => None,
        ObjectType::Wellbore => text(element, "nameWell"),
        _ => text(element, "nameWellbore"),
    };
    identity.set_parent_name(parent_name);
}

// ── Shared nested concepts ───────────────────────────────────────

/// Which optional `commonData` fields a version defines.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CommonFields {
    pub service_category: bool,
    pub time_zone_and_datum: bool,
}

pub(crate) fn refresh_common(common: &mut CommonData, element: Element<'_, '_>, fields: CommonFields) {
    let Some(node) = child(element, "commonData") else {
        return;
    };
    common.source_name.refresh(text(node, "sourceName"));
    common.creation_time.refresh(timestamp(node, "dTimCreation"));
    common.last_change_time.refresh(timestamp(node, "dTimLastChange"));
    common.item_state.refresh(text(node, "itemState"));
    common.comments.refresh(text(node, "comments"));
    if fields.service_category {
        common.service_category.refresh(text(node, "serviceCategory"));
    }
    if fields.time_zone_and_datum {
        common.acquisition_time_zone.refresh(text(node, "acquisitionTimeZone"));
        common.default_datum.refresh(text(node, "defaultDatum"));
    }
}

pub(crate) fn location(node: Element<'_, '_>) -> Location {
    let mut location = Location {
        uid: attr(node, "uid"),
        ..Location::default()
    };
    refresh_location(&mut location, node);
    location
}

pub(crate) fn refresh_location(location: &mut Location, node: Element<'_, '_>) {
    location.crs.refresh(text(node, "wellCRS").or_else(|| attr(node, "crs")));
    location.latitude.refresh(value(node, "latitude"));
    location.longitude.refresh(value(node, "longitude"));
    location.easting.refresh(value(node, "easting"));
    location.northing.refresh(value(node, "northing"));
    location.description.refresh(text(node, "description"));
}

pub(crate) fn refresh_station(station: &mut TrajectoryStation, node: Element<'_, '_>) {
    station.time.refresh(timestamp(node, "dTimStn"));
    station.type_station.refresh(text(node, "typeTrajStation"));
    station.md.refresh(value(node, "md"));
    station.tvd.refresh(value(node, "tvd"));
    station.incl.refresh(value(node, "incl"));
    station.azi.refresh(value(node, "azi"));
    station.disp_ns.refresh(value(node, "dispNs"));
    station.disp_ew.refresh(value(node, "dispEw"));
    station.dls.refresh(value(node, "dls"));
}

/// Curve metadata from one `logCurveInfo` element.
///
/// `with_column_index` is false for 1.4.1.1, whose headers carry no
/// `columnIndex`.
pub(crate) fn curve_header(node: Element<'_, '_>, with_column_index: bool) -> CurveHeader {
    let data_type = text(node, "typeLogData").and_then(|raw| {
        let parsed = DataType::from_protocol(&raw);
        if parsed.is_none() {
            warn!("Unknown typeLogData {:?}; treating as double", raw);
        }
        parsed
    });
    CurveHeader {
        uid: attr(node, "uid"),
        mnemonic: text(node, "mnemonic").unwrap_or_default(),
        column_index: if with_column_index {
            number(node, "columnIndex")
        } else {
            None
        },
        unit: text(node, "unit"),
        data_type,
        null_value: text(node, "nullValue"),
        quantity_class: text(node, "classWitsml"),
        description: text(node, "curveDescription"),
        min_index: value(node, "minIndex"),
        max_index: value(node, "maxIndex"),
        min_time: timestamp(node, "minDateTimeIndex"),
        max_time: timestamp(node, "maxDateTimeIndex"),
    }
}

/// Raw `<data>` rows of a `logData` block, or `None` when it is absent.
///
/// Row text is kept verbatim; the decoder owns tokenizing.
pub(crate) fn data_rows(element: Element<'_, '_>) -> Option<Vec<String>> {
    let log_data = child(element, "logData")?;
    Some(
        children(log_data, "data")
            .map(|row| row.text().unwrap_or_default().to_string())
            .collect(),
    )
}

/// Rebuilds a list from the present elements, reusing entries whose key
/// matches. An absent list (no elements at all) keeps the current one.
pub(crate) fn rebuild_list<T, K, F>(
    current: &mut Vec<T>,
    nodes: Vec<Element<'_, '_>>,
    key_of_entry: impl Fn(&T) -> Option<K>,
    key_of_node: impl Fn(Element<'_, '_>) -> Option<K>,
    mut refresh: F,
) where
    T: Default,
    K: PartialEq,
    F: FnMut(&mut T, Element<'_, '_>),
{
    if nodes.is_empty() {
        return;
    }
    let mut pool: Vec<Option<T>> = std::mem::take(current).into_iter().map(Some).collect();
    for node in nodes {
        let key = key_of_node(node);
        let reused = key.as_ref().and_then(|key| {
            pool.iter_mut()
                .find(|slot| {
                    slot.as_ref()
                        .and_then(&key_of_entry)
                        .is_some_and(|k| k == *key)
                })
                .and_then(Option::take)
        });
        let mut entry = reused.unwrap_or_default();
        refresh(&mut entry, node);
        current.push(entry);
    }
}
