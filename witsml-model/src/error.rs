use thiserror::Error;
use witsml_types::ObjectType;

/// Errors raised while building or updating domain objects.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("a {object_type} cannot be a child of a {parent_type}")]
    InvalidParent {
        object_type: ObjectType,
        parent_type: ObjectType,
    },

    #[error("parent {0} has no id, so its children cannot be addressed")]
    ParentWithoutId(ObjectType),

    #[error("a {object_type} needs {expected} ancestor id(s), got {actual}")]
    AncestorChain {
        object_type: ObjectType,
        expected: usize,
        actual: usize,
    },

    #[error("invalid curve column layout: {0}")]
    ColumnLayout(String),
}

pub type ModelResult<T> = std::result::Result<T, ModelError>;
