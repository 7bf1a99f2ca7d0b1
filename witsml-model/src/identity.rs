//! Object identity and the ancestor chain.
//!
//! Every STORE object is addressed by its own id plus the ids of its
//! ancestors. The chain is stored innermost first (wellbore before well)
//! and is fixed once the identity is built.

use serde::{Deserialize, Serialize};
use std::fmt;
use witsml_types::ObjectType;

use crate::error::{ModelError, ModelResult};

/// A non-owning reference to the parent object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    pub object_type: ObjectType,
    pub id: Option<String>,
    /// Display name as last reported by the server (`nameWell`, `nameWellbore`).
    pub name: Option<String>,
}

/// Who an object is and where it lives in the hierarchy.
///
/// Equality follows the protocol's notion of "same object": two identities
/// are equal when they are the same instance, or when both carry an id and
/// the ids match. Two id-less identities are never equal, which is why this
/// type implements [`PartialEq`] but not [`Eq`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectIdentity {
    object_type: ObjectType,
    id: Option<String>,
    name: Option<String>,
    parent: Option<ParentRef>,
    parent_ids: Vec<String>,
}

impl ObjectIdentity {
    /// Identity of a well. Wells have no parent.
    pub fn root(id: Option<String>) -> Self {
        Self {
            object_type: ObjectType::Well,
            id,
            name: None,
            parent: None,
            parent_ids: Vec::new(),
        }
    }

    /// Identity of an object created under an already materialized parent.
    ///
    /// The chain is the parent's id followed by the parent's own chain.
    pub fn child_of(
        object_type: ObjectType,
        id: Option<String>,
        parent: &ObjectIdentity,
    ) -> ModelResult<Self> {
        if object_type.parent_type() != Some(parent.object_type) {
            return Err(ModelError::InvalidParent {
                object_type,
                parent_type: parent.object_type,
            });
        }
        let parent_ids = parent.child_chain()?;
        Ok(Self {
            object_type,
            id,
            name: None,
            parent: Some(ParentRef {
                object_type: parent.object_type,
                id: parent.id.clone(),
                name: parent.name.clone(),
            }),
            parent_ids,
        })
    }

    /// Identity built from the ancestor ids carried on the wire
    /// (`uidWellbore`, `uidWell`), innermost first.
    pub fn with_ancestors(
        object_type: ObjectType,
        id: Option<String>,
        parent_ids: Vec<String>,
    ) -> ModelResult<Self> {
        let expected = object_type.ancestor_count();
        if parent_ids.len() != expected {
            return Err(ModelError::AncestorChain {
                object_type,
                expected,
                actual: parent_ids.len(),
            });
        }
        let parent = object_type.parent_type().map(|parent_type| ParentRef {
            object_type: parent_type,
            id: parent_ids.first().cloned(),
            name: None,
        });
        Ok(Self {
            object_type,
            id,
            name: None,
            parent,
            parent_ids,
        })
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn parent(&self) -> Option<&ParentRef> {
        self.parent.as_ref()
    }

    /// Ancestor ids, closest ancestor first.
    pub fn parent_ids(&self) -> &[String] {
        &self.parent_ids
    }

    /// Updates the display name. `None` keeps the current one.
    pub fn set_name(&mut self, name: Option<String>) {
        if name.is_some() {
            self.name = name;
        }
    }

    /// Updates the cached parent display name. `None` keeps the current one.
    pub fn set_parent_name(&mut self, name: Option<String>) {
        if let (Some(parent), Some(name)) = (self.parent.as_mut(), name) {
            parent.name = Some(name);
        }
    }

    /// The chain a child of this object carries: this id, then this chain.
    pub fn child_chain(&self) -> ModelResult<Vec<String>> {
        let id = self
            .id
            .clone()
            .ok_or(ModelError::ParentWithoutId(self.object_type))?;
        let mut chain = Vec::with_capacity(self.parent_ids.len() + 1);
        chain.push(id);
        chain.extend(self.parent_ids.iter().cloned());
        Ok(chain)
    }

    /// True when both references point at the same instance.
    pub fn is_same_instance(&self, other: &ObjectIdentity) -> bool {
        std::ptr::eq(self, other)
    }

    /// True when both identities carry an id and the ids match.
    pub fn same_id(&self, other: &ObjectIdentity) -> bool {
        matches!((&self.id, &other.id), (Some(a), Some(b)) if a == b)
    }
}

impl PartialEq for ObjectIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_instance(other) || self.same_id(other)
    }
}

impl fmt::Display for ObjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.object_type, self.id.as_deref().unwrap_or("?"))?;
        if let Some(name) = &self.name {
            write!(f, " ({name})")?;
        }
        if !self.parent_ids.is_empty() {
            write!(f, " in [{}]", self.parent_ids.join(", "))?;
        }
        Ok(())
    }
}
