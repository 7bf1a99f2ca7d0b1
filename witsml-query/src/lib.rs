//! Query construction for the WITSML STORE client.
//!
//! A query starts life as a version-specific template: an XML skeleton that
//! lists every retrievable field, with placeholders where the protocol
//! addresses instances. Building a query is two steps:
//!
//! 1. [`render_template`] substitutes ids and unit symbols textually
//! 2. [`constrain`] parses the result and rewrites it according to a
//!    caller-supplied [`QueryConstraints`]
//!
//! The constraint engine works on [`XmlTree`], a small owned element tree
//! that supports detaching, deep-cloning and re-serializing elements.

mod constraint;
mod engine;
mod error;
mod template;
mod tree;

pub use constraint::{AttributeConstraint, ElementConstraint, QueryConstraints};
pub use engine::constrain;
pub use error::{QueryError, QueryResult};
pub use template::{render_template, ID_PLACEHOLDER};
pub use tree::{NodeId, XmlTree};
