//! jsonbind - a strict, declarative schema-binding layer over JSON documents
//!
//! Overlay a statically-declared field schema onto a parsed
//! [`serde_json::Value`] tree, run one validating binding pass, then read
//! typed accessors. Missing or mis-typed fields are reported with the
//! exact container and field that failed.
//!
//! # Usage
//!
//! ```
//! use jsonbind::{ObjectNode, SchemaNode};
//! use serde_json::json;
//!
//! let document = json!({ "name": "hello_world", "retries": 3 });
//!
//! let mut root = ObjectNode::root(document, true)?;
//! root.attach(SchemaNode::string("name"));
//! root.attach(SchemaNode::integer("retries"));
//! root.initialize()?;
//!
//! assert_eq!(root.scalar("name").unwrap().string_value()?, "hello_world");
//! assert_eq!(root.scalar("retries").unwrap().int_value()?, 3);
//! # Ok::<(), jsonbind::BindError>(())
//! ```

mod array;
mod descriptor;
mod errors;
mod kind;
mod node;
mod object;
mod scalar;

pub use array::ArrayNode;
pub use descriptor::{FieldType, SchemaDef};
pub use errors::{BindError, BindResult};
pub use kind::Kind;
pub use node::SchemaNode;
pub use object::{ObjectNode, ROOT_NAME};
pub use scalar::ScalarNode;
