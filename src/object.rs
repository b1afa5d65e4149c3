//! Object nodes and the two-phase binding pass
//!
//! An [`ObjectNode`] owns a named collection of child schema nodes and
//! drives the bind-then-recurse protocol: binding the object's own value
//! first, then walking the declared children in declaration order and
//! binding each against it.
//!
//! The pass is fail-fast and not transactional: the first failure
//! propagates immediately, children bound before it keep their state,
//! and children after it are never touched.

use serde_json::Value;
use tracing::debug;

use crate::array::ArrayNode;
use crate::errors::{BindError, BindResult};
use crate::kind::Kind;
use crate::node::{self, SchemaNode};
use crate::scalar::ScalarNode;

/// Name under which the document root reports binding errors.
pub const ROOT_NAME: &str = "$root";

/// A composite schema node owning named children.
#[derive(Debug, Clone)]
pub struct ObjectNode {
    name: String,
    container: String,
    require_all: bool,
    children: Vec<SchemaNode>,
    value: Value,
}

impl ObjectNode {
    /// Constructs the document root.
    ///
    /// The supplied value is bound as-is with no enclosing container to
    /// check against; it must itself be object-kind. The policy governs
    /// absence handling for this object's direct children only.
    pub fn root(document: Value, require_all: bool) -> BindResult<ObjectNode> {
        let actual = Kind::of(&document);
        if actual != Kind::Object {
            return Err(BindError::mismatch(ROOT_NAME, ROOT_NAME, Kind::Object, actual));
        }
        Ok(Self {
            name: ROOT_NAME.to_string(),
            container: String::new(),
            require_all,
            children: Vec::new(),
            value: document,
        })
    }

    /// Declares a nested object field.
    ///
    /// Nested containers default to the optional-fields policy; use
    /// [`ObjectNode::require_all_fields`] to tighten it.
    pub fn nested(name: impl Into<String>) -> ObjectNode {
        Self {
            name: name.into(),
            container: String::new(),
            require_all: false,
            children: Vec::new(),
            value: Value::Null,
        }
    }

    /// Sets the require-all-fields policy for this object's direct
    /// children. Not transitive: nested objects keep their own policy.
    pub fn require_all_fields(mut self, require_all: bool) -> Self {
        self.require_all = require_all;
        self
    }

    /// Registers a child schema node under its declared name.
    ///
    /// Re-attaching an existing name replaces that child. Children bind
    /// in declaration order, which makes error reporting deterministic.
    pub fn attach(&mut self, child: impl Into<SchemaNode>) {
        let mut child = child.into();
        child.set_container(&self.name);
        match self.children.iter_mut().find(|c| c.name() == child.name()) {
            Some(existing) => *existing = child,
            None => self.children.push(child),
        }
    }

    /// Replaces the bound document so the binding pass can run again.
    ///
    /// Same object-kind check as root construction. Child state is left
    /// untouched until the next [`ObjectNode::initialize`] call.
    pub fn rebind(&mut self, document: Value) -> BindResult<()> {
        let actual = Kind::of(&document);
        if actual != Kind::Object {
            return Err(BindError::mismatch(&self.name, &self.name, Kind::Object, actual));
        }
        self.value = document;
        Ok(())
    }

    /// Runs the binding pass over the declared children.
    ///
    /// Walks children in declaration order, binding each against this
    /// object's bound value. Fail-fast: the first failure propagates
    /// unchanged and no rollback happens.
    pub fn initialize(&mut self) -> BindResult<()> {
        debug!(
            object = %self.name,
            children = self.children.len(),
            "binding object fields"
        );
        for child in &mut self.children {
            child.initialize_against(&self.value, &self.name, self.require_all)?;
        }
        Ok(())
    }

    pub(crate) fn initialize_against(
        &mut self,
        container_value: &Value,
        container_name: &str,
        require_all: bool,
    ) -> BindResult<()> {
        match node::check_field(
            container_value,
            container_name,
            require_all,
            &self.name,
            Kind::Object,
        )? {
            Some(value) => {
                self.value = value;
                self.initialize()
            }
            None => {
                self.value = Value::Null;
                Ok(())
            }
        }
    }

    /// Returns the declared field name (the root sentinel for roots).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns this object's require-all-fields policy.
    pub fn requires_all_fields(&self) -> bool {
        self.require_all
    }

    /// True once a non-null value has been bound.
    pub fn is_defined(&self) -> bool {
        !self.value.is_null()
    }

    /// Read access to the bound value. Undefined nodes hold null.
    pub fn current_value(&self) -> &Value {
        &self.value
    }

    /// Unconditionally replaces the bound value. No validation and no
    /// recursion into children.
    pub fn bind_raw(&mut self, value: Value) {
        self.value = value;
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub(crate) fn set_container(&mut self, container: &str) {
        self.container = container.to_string();
    }

    /// Looks up a declared child by name.
    pub fn field(&self, name: &str) -> Option<&SchemaNode> {
        self.children.iter().find(|c| c.name() == name)
    }

    /// Looks up a declared scalar child by name.
    pub fn scalar(&self, name: &str) -> Option<&ScalarNode> {
        self.field(name).and_then(SchemaNode::as_scalar)
    }

    /// Looks up a declared object child by name.
    pub fn object(&self, name: &str) -> Option<&ObjectNode> {
        self.field(name).and_then(SchemaNode::as_object)
    }

    /// Looks up a declared array child by name.
    pub fn array(&self, name: &str) -> Option<&ArrayNode> {
        self.field(name).and_then(SchemaNode::as_array)
    }

    /// All declared children in declaration order.
    pub fn children(&self) -> &[SchemaNode] {
        &self.children
    }
}
