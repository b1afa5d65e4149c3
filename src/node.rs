//! Schema node abstraction
//!
//! A [`SchemaNode`] is one declared unit of a validation schema: a scalar
//! leaf, a nested object, or an array. Nodes are created once at
//! declaration time and bound against a document by the binding pass. A
//! node is *defined* once its bound value is anything but null.
//!
//! The shared absence/kind-check step of the binding protocol lives here
//! ([`check_field`]) so every node type fails identically.

use serde_json::Value;

use crate::array::ArrayNode;
use crate::errors::{BindError, BindResult};
use crate::kind::Kind;
use crate::object::ObjectNode;
use crate::scalar::ScalarNode;

/// A declared schema node.
#[derive(Debug, Clone)]
pub enum SchemaNode {
    /// Scalar leaf (string, bool, int, uint, real).
    Scalar(ScalarNode),
    /// Nested object with its own declared children.
    Object(ObjectNode),
    /// Array materializing one element node per entry.
    Array(ArrayNode),
}

impl SchemaNode {
    /// Declares a string field.
    pub fn string(name: impl Into<String>) -> Self {
        SchemaNode::Scalar(ScalarNode::string(name))
    }

    /// Declares a boolean field.
    pub fn boolean(name: impl Into<String>) -> Self {
        SchemaNode::Scalar(ScalarNode::boolean(name))
    }

    /// Declares a signed integer field.
    pub fn integer(name: impl Into<String>) -> Self {
        SchemaNode::Scalar(ScalarNode::integer(name))
    }

    /// Declares an unsigned integer field.
    pub fn unsigned(name: impl Into<String>) -> Self {
        SchemaNode::Scalar(ScalarNode::unsigned(name))
    }

    /// Declares a real (floating point) field.
    pub fn real(name: impl Into<String>) -> Self {
        SchemaNode::Scalar(ScalarNode::real(name))
    }

    /// Returns the field name this node was declared under. Array
    /// elements are unnamed and return the empty string.
    pub fn name(&self) -> &str {
        match self {
            SchemaNode::Scalar(n) => n.name(),
            SchemaNode::Object(n) => n.name(),
            SchemaNode::Array(n) => n.name(),
        }
    }

    /// True once the node's bound value is not null.
    pub fn is_defined(&self) -> bool {
        match self {
            SchemaNode::Scalar(n) => n.is_defined(),
            SchemaNode::Object(n) => n.is_defined(),
            SchemaNode::Array(n) => n.is_defined(),
        }
    }

    /// Read access to the bound value. Never fails; undefined nodes hold
    /// null.
    pub fn current_value(&self) -> &Value {
        match self {
            SchemaNode::Scalar(n) => n.current_value(),
            SchemaNode::Object(n) => n.current_value(),
            SchemaNode::Array(n) => n.current_value(),
        }
    }

    /// Unconditionally replaces the bound value. No validation.
    pub fn bind_raw(&mut self, value: Value) {
        match self {
            SchemaNode::Scalar(n) => n.bind_raw(value),
            SchemaNode::Object(n) => n.bind_raw(value),
            SchemaNode::Array(n) => n.bind_raw(value),
        }
    }

    /// The value kind this node expects its bound value to have.
    pub fn expected_kind(&self) -> Kind {
        match self {
            SchemaNode::Scalar(n) => n.expected_kind(),
            SchemaNode::Object(_) => Kind::Object,
            SchemaNode::Array(_) => Kind::Array,
        }
    }

    /// True for nodes that recurse into their own children once bound.
    pub fn is_composite(&self) -> bool {
        matches!(self, SchemaNode::Object(_))
    }

    /// Downcast to a scalar node.
    pub fn as_scalar(&self) -> Option<&ScalarNode> {
        match self {
            SchemaNode::Scalar(n) => Some(n),
            _ => None,
        }
    }

    /// Downcast to an object node.
    pub fn as_object(&self) -> Option<&ObjectNode> {
        match self {
            SchemaNode::Object(n) => Some(n),
            _ => None,
        }
    }

    /// Downcast to an array node.
    pub fn as_array(&self) -> Option<&ArrayNode> {
        match self {
            SchemaNode::Array(n) => Some(n),
            _ => None,
        }
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        match self {
            SchemaNode::Scalar(n) => n.set_name(name),
            SchemaNode::Object(n) => n.set_name(name),
            SchemaNode::Array(n) => n.set_name(name),
        }
    }

    pub(crate) fn set_container(&mut self, container: &str) {
        match self {
            SchemaNode::Scalar(n) => n.set_container(container),
            SchemaNode::Object(n) => n.set_container(container),
            SchemaNode::Array(n) => n.set_container(container),
        }
    }

    /// Per-type binding step: look this node's name up in the container
    /// value, then bind (and recurse, for composites).
    pub(crate) fn initialize_against(
        &mut self,
        container_value: &Value,
        container_name: &str,
        require_all: bool,
    ) -> BindResult<()> {
        match self {
            SchemaNode::Scalar(n) => {
                n.initialize_against(container_value, container_name, require_all)
            }
            SchemaNode::Object(n) => {
                n.initialize_against(container_value, container_name, require_all)
            }
            SchemaNode::Array(n) => {
                n.initialize_against(container_value, container_name, require_all)
            }
        }
    }
}

impl From<ScalarNode> for SchemaNode {
    fn from(node: ScalarNode) -> Self {
        SchemaNode::Scalar(node)
    }
}

impl From<ObjectNode> for SchemaNode {
    fn from(node: ObjectNode) -> Self {
        SchemaNode::Object(node)
    }
}

impl From<ArrayNode> for SchemaNode {
    fn from(node: ArrayNode) -> Self {
        SchemaNode::Array(node)
    }
}

/// Shared absence/kind-check step of the binding protocol.
///
/// Looks `field` up inside the container's bound value. A present-but-null
/// entry counts as absent. Returns the value snapshot to bind on success,
/// `None` when the field is absent and the container's policy allows it.
pub(crate) fn check_field(
    container_value: &Value,
    container_name: &str,
    require_all: bool,
    field: &str,
    expected: Kind,
) -> BindResult<Option<Value>> {
    match container_value.get(field).filter(|v| !v.is_null()) {
        None => {
            if require_all {
                Err(BindError::absent(container_name, field))
            } else {
                Ok(None)
            }
        }
        Some(value) => {
            let actual = Kind::of(value);
            if actual != expected {
                Err(BindError::mismatch(container_name, field, expected, actual))
            } else {
                Ok(Some(value.clone()))
            }
        }
    }
}
