//! Field-by-field update rules.
//!
//! A re-read object only overwrites what the server actually sent: a field
//! whose element was absent from the response keeps its previous value.

use witsml_types::Value;

/// Replaces `self` with `newer` only when `newer` carries something.
pub trait Refresh {
    fn refresh(&mut self, newer: Self);
}

impl<T> Refresh for Option<T> {
    fn refresh(&mut self, newer: Self) {
        if newer.is_some() {
            *self = newer;
        }
    }
}

impl Refresh for Value {
    /// Magnitude and unit are refreshed independently, so an element that
    /// only echoes its `uom` does not wipe a known magnitude.
    fn refresh(&mut self, newer: Self) {
        if newer.is_empty() {
            return;
        }
        let magnitude = newer.magnitude().or(self.magnitude());
        let unit = newer
            .unit()
            .or(self.unit())
            .map(str::to_string);
        *self = Value::new(magnitude, unit);
    }
}
