//! Declarative schema descriptors
//!
//! A descriptor is pure data describing a schema shape, deserializable
//! from JSON. Compiling one produces the same node tree an integrator
//! would declare by hand with `attach`, so a schema can live next to the
//! documents it validates instead of in code.
//!
//! Compiling performs no document validation; that remains the binding
//! pass's job. Descriptor field maps are sorted, so a descriptor-built
//! root reports errors deterministically.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::array::ArrayNode;
use crate::errors::BindResult;
use crate::node::SchemaNode;
use crate::object::ObjectNode;
use crate::scalar::ScalarNode;

/// Field shape inside a schema descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string.
    String,
    /// Boolean.
    Bool,
    /// Signed 64-bit integer.
    Int,
    /// Unsigned integer beyond the signed 64-bit range.
    Uint,
    /// 64-bit floating point.
    Real,
    /// Nested object with its own field map and policy.
    Object {
        /// Whether every declared field of this object must be present.
        #[serde(default)]
        require_all: bool,
        /// Nested field descriptors, compiled in name order.
        fields: BTreeMap<String, FieldType>,
    },
    /// Array with a single element descriptor.
    Array {
        /// Element shape, applied to every entry.
        element: Box<FieldType>,
    },
}

impl FieldType {
    /// Compiles this descriptor into a schema node declared under `name`.
    fn into_node(self, name: &str) -> SchemaNode {
        match self {
            FieldType::String => ScalarNode::string(name).into(),
            FieldType::Bool => ScalarNode::boolean(name).into(),
            FieldType::Int => ScalarNode::integer(name).into(),
            FieldType::Uint => ScalarNode::unsigned(name).into(),
            FieldType::Real => ScalarNode::real(name).into(),
            FieldType::Object { require_all, fields } => {
                let mut object = ObjectNode::nested(name).require_all_fields(require_all);
                for (field, shape) in fields {
                    object.attach(shape.into_node(&field));
                }
                object.into()
            }
            FieldType::Array { element } => {
                ArrayNode::of(name, (*element).into_node("")).into()
            }
        }
    }
}

/// Top-level schema descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDef {
    /// Whether every declared root field must be present.
    #[serde(default)]
    pub require_all: bool,
    /// Root field descriptors, compiled in name order.
    pub fields: BTreeMap<String, FieldType>,
}

impl SchemaDef {
    /// Builds a fully-declared root for the given document.
    ///
    /// The returned root has every descriptor field attached but has not
    /// run its binding pass yet; call `initialize` on it next.
    pub fn build_root(self, document: Value) -> BindResult<ObjectNode> {
        let mut root = ObjectNode::root(document, self.require_all)?;
        for (name, shape) in self.fields {
            root.attach(shape.into_node(&name));
        }
        Ok(root)
    }
}
