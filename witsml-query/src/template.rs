//! Textual placeholder substitution for query templates.
//!
//! Templates mark the addressing attributes with placeholders:
//!
//! | Placeholder | Replaced with |
//! |-------------|---------------|
//! | `%uid%` | the instance id |
//! | `%parent.0%`, `%parent.1%` | ancestor ids, closest ancestor first |
//! | `%uom:<quantity>%` | the unit symbol the profile requests |
//!
//! A missing id becomes the empty string, which the protocol reads as
//! "any instance". Substitution happens before the template is parsed.

use quick_xml::escape::escape;
use witsml_types::{Quantity, UnitProfile};

/// Placeholder for the id of the instance being queried.
pub const ID_PLACEHOLDER: &str = "%uid%";

/// The deepest ancestor chain any object type has (well, wellbore).
const MAX_ANCESTORS: usize = 2;

/// Renders a template skeleton into query text.
///
/// `parent_ids` is the ancestor chain closest-first: for a log that is
/// `[uidWellbore, uidWell]`. Ids are escaped for use inside attribute values.
#[must_use]
pub fn render_template(
    skeleton: &str,
    id: &str,
    parent_ids: &[String],
    units: UnitProfile,
) -> String {
    let mut out = skeleton.replace(ID_PLACEHOLDER, &escape(id));

    for depth in 0..MAX_ANCESTORS {
        let placeholder = format!("%parent.{depth}%");
        let value = parent_ids.get(depth).map(String::as_str).unwrap_or_default();
        out = out.replace(&placeholder, &escape(value));
    }

    for quantity in Quantity::ALL {
        let placeholder = format!("%uom:{}%", quantity.key());
        out = out.replace(&placeholder, units.unit_for(quantity));
    }

    out
}
