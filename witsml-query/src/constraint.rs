//! Caller-supplied query constraints.

use serde::{Deserialize, Serialize};

/// Pins the text of an element to a literal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementConstraint {
    pub element: String,
    pub value: String,
}

/// Pins an attribute of an element to a literal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeConstraint {
    pub element: String,
    pub attribute: String,
    pub value: String,
}

/// The refinements applied to one query template.
///
/// All four lists keep insertion order; the engine applies them in that
/// order. Element names are local names (no namespace prefix).
///
/// ```
/// use witsml_query::QueryConstraints;
///
/// let constraints = QueryConstraints::new()
///     .include("name")
///     .include("logCurveInfo")
///     .exclude("logData")
///     .with_value("mnemonic", "GR");
/// assert_eq!(constraints.includes(), ["name", "logCurveInfo"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConstraints {
    #[serde(default)]
    includes: Vec<String>,
    #[serde(default)]
    excludes: Vec<String>,
    #[serde(default)]
    values: Vec<ElementConstraint>,
    #[serde(default)]
    attributes: Vec<AttributeConstraint>,
}

impl QueryConstraints {
    /// An empty constraint set: the full template is sent unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only the named elements (plus their subtrees and ancestors).
    #[must_use]
    pub fn include(mut self, element: impl Into<String>) -> Self {
        self.add_include(element);
        self
    }

    /// Drops the named elements. Exclusion wins over inclusion.
    #[must_use]
    pub fn exclude(mut self, element: impl Into<String>) -> Self {
        self.add_exclude(element);
        self
    }

    /// Requires an element to have the given text. Repeating the call for
    /// the same element yields one sibling group per value.
    #[must_use]
    pub fn with_value(mut self, element: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_value(element, value);
        self
    }

    /// Sets an existing attribute of an element.
    #[must_use]
    pub fn with_attribute(
        mut self,
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.add_attribute(element, attribute, value);
        self
    }

    /// In-place form of [`QueryConstraints::include`].
    pub fn add_include(&mut self, element: impl Into<String>) {
        self.includes.push(element.into());
    }

    /// In-place form of [`QueryConstraints::exclude`].
    pub fn add_exclude(&mut self, element: impl Into<String>) {
        self.excludes.push(element.into());
    }

    /// In-place form of [`QueryConstraints::with_value`].
    pub fn add_value(&mut self, element: impl Into<String>, value: impl Into<String>) {
        self.values.push(ElementConstraint {
            element: element.into(),
            value: value.into(),
        });
    }

    /// In-place form of [`QueryConstraints::with_attribute`].
    pub fn add_attribute(
        &mut self,
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.attributes.push(AttributeConstraint {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        });
    }

    /// Element names to keep, in the order added.
    #[must_use]
    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    /// Element names to drop.
    #[must_use]
    pub fn excludes(&self) -> &[String] {
        &self.excludes
    }

    /// Text constraints, in the order added.
    #[must_use]
    pub fn values(&self) -> &[ElementConstraint] {
        &self.values
    }

    /// Attribute constraints, in the order added.
    #[must_use]
    pub fn attributes(&self) -> &[AttributeConstraint] {
        &self.attributes
    }

    /// True when applying the set would leave a template unchanged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty()
            && self.excludes.is_empty()
            && self.values.is_empty()
            && self.attributes.is_empty()
    }
}
