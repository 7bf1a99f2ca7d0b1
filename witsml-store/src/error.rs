//! Error types for the store client.

use thiserror::Error;
use witsml_model::{BulkDecodeError, ModelError};
use witsml_query::QueryError;
use witsml_types::{ObjectType, WitsmlVersion};

use crate::transport::TransportError;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while talking to a STORE server.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No codec exists for this (version, type) pair.
    #[error("no {object_type} template for WITSML {version}")]
    TemplateResolution {
        version: WitsmlVersion,
        object_type: ObjectType,
    },

    /// A parent of the wrong type (or without an id) was supplied.
    #[error("invalid parent: {0}")]
    InvalidParent(String),

    /// The query template could not be constrained.
    #[error("cannot apply query constraints: {0}")]
    ConstraintApplication(#[from] QueryError),

    /// The transport failed before the server answered.
    #[error("{operation} failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: TransportError,
    },

    /// The server answered with a non-positive status code.
    #[error("server returned {code}: {message}")]
    Server { code: i32, message: String },

    /// The response was not the XML we expected.
    #[error("cannot parse response: {0}")]
    ResponseParse(String),

    /// Log data rows could not be decoded.
    #[error("cannot decode log data: {0}")]
    BulkDecode(#[from] BulkDecodeError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<roxmltree::Error> for StoreError {
    fn from(err: roxmltree::Error) -> Self {
        StoreError::ResponseParse(err.to_string())
    }
}

impl From<ModelError> for StoreError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::InvalidParent { .. } | ModelError::ParentWithoutId(_) => {
                StoreError::InvalidParent(err.to_string())
            }
            ModelError::AncestorChain { .. } | ModelError::ColumnLayout(_) => {
                StoreError::ResponseParse(err.to_string())
            }
        }
    }
}
