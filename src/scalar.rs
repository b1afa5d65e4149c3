//! Scalar leaf nodes
//!
//! A [`ScalarNode`] expects exactly one value kind and exposes one typed
//! getter per scalar kind. Getters fail with `FieldAbsent` on an
//! undefined node and with `FieldTypeMismatch` when the bound kind does
//! not match the getter. There is no numeric coercion between
//! int/uint/real.

use serde_json::Value;

use crate::errors::{BindError, BindResult};
use crate::kind::Kind;
use crate::node;

/// A leaf schema node with a fixed expected value kind.
#[derive(Debug, Clone)]
pub struct ScalarNode {
    name: String,
    container: String,
    expected: Kind,
    value: Value,
}

impl ScalarNode {
    fn new(name: impl Into<String>, expected: Kind) -> Self {
        Self {
            name: name.into(),
            container: String::new(),
            expected,
            value: Value::Null,
        }
    }

    /// Declares a string field.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, Kind::String)
    }

    /// Declares a boolean field.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, Kind::Bool)
    }

    /// Declares a signed integer field.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, Kind::Int)
    }

    /// Declares an unsigned integer field.
    pub fn unsigned(name: impl Into<String>) -> Self {
        Self::new(name, Kind::UInt)
    }

    /// Declares a real (floating point) field.
    pub fn real(name: impl Into<String>) -> Self {
        Self::new(name, Kind::Real)
    }

    /// Returns the declared field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value kind this node expects.
    pub fn expected_kind(&self) -> Kind {
        self.expected
    }

    /// True once a non-null value has been bound.
    pub fn is_defined(&self) -> bool {
        !self.value.is_null()
    }

    /// Read access to the bound value. Undefined nodes hold null.
    pub fn current_value(&self) -> &Value {
        &self.value
    }

    /// Unconditionally replaces the bound value. No validation.
    pub fn bind_raw(&mut self, value: Value) {
        self.value = value;
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub(crate) fn set_container(&mut self, container: &str) {
        self.container = container.to_string();
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
            self.expected,
        )? {
            Some(value) => self.bind_raw(value),
            None => self.bind_raw(Value::Null),
        }
        Ok(())
    }

    /// Checks definedness and the bound kind before a typed read.
    fn defined_as(&self, kind: Kind) -> BindResult<&Value> {
        if !self.is_defined() {
            return Err(BindError::absent(&self.container, &self.name));
        }
        let actual = Kind::of(&self.value);
        if actual != kind {
            return Err(BindError::mismatch(&self.container, &self.name, kind, actual));
        }
        Ok(&self.value)
    }

    fn kind_error(&self, expected: Kind) -> BindError {
        BindError::mismatch(&self.container, &self.name, expected, Kind::of(&self.value))
    }

    /// Returns the bound string value.
    pub fn string_value(&self) -> BindResult<&str> {
        self.defined_as(Kind::String)?
            .as_str()
            .ok_or_else(|| self.kind_error(Kind::String))
    }

    /// Returns the bound boolean value.
    pub fn bool_value(&self) -> BindResult<bool> {
        self.defined_as(Kind::Bool)?
            .as_bool()
            .ok_or_else(|| self.kind_error(Kind::Bool))
    }

    /// Returns the bound signed integer value.
    pub fn int_value(&self) -> BindResult<i64> {
        self.defined_as(Kind::Int)?
            .as_i64()
            .ok_or_else(|| self.kind_error(Kind::Int))
    }

    /// Returns the bound unsigned integer value.
    pub fn uint_value(&self) -> BindResult<u64> {
        self.defined_as(Kind::UInt)?
            .as_u64()
            .ok_or_else(|| self.kind_error(Kind::UInt))
    }

    /// Returns the bound real value.
    pub fn real_value(&self) -> BindResult<f64> {
        self.defined_as(Kind::Real)?
            .as_f64()
            .ok_or_else(|| self.kind_error(Kind::Real))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unbound_node_is_undefined() {
        let node = ScalarNode::string("name");
        assert!(!node.is_defined());
        assert_eq!(node.current_value(), &Value::Null);
    }

    #[test]
    fn test_bind_against_present_field() {
        let mut node = ScalarNode::string("name");
        node.set_container("root");
        node.initialize_against(&json!({"name": "hello_world"}), "root", true)
            .unwrap();
        assert!(node.is_defined());
        assert_eq!(node.string_value().unwrap(), "hello_world");
    }

    #[test]
    fn test_bind_absent_required_fails() {
        let mut node = ScalarNode::boolean("flag");
        let err = node
            .initialize_against(&json!({}), "root", true)
            .unwrap_err();
        assert_eq!(err, BindError::absent("root", "flag"));
    }

    #[test]
    fn test_bind_absent_optional_stays_undefined() {
        let mut node = ScalarNode::boolean("flag");
        node.set_container("root");
        node.initialize_against(&json!({}), "root", false).unwrap();
        assert!(!node.is_defined());
        assert_eq!(node.bool_value().unwrap_err(), BindError::absent("root", "flag"));
    }

    #[test]
    fn test_bind_kind_mismatch_fails() {
        let mut node = ScalarNode::integer("count");
        let err = node
            .initialize_against(&json!({"count": "seven"}), "root", true)
            .unwrap_err();
        assert_eq!(
            err,
            BindError::mismatch("root", "count", Kind::Int, Kind::String)
        );
    }

    #[test]
    fn test_int_round_trip() {
        let mut node = ScalarNode::integer("count");
        node.initialize_against(&json!({"count": -12}), "root", true)
            .unwrap();
        assert_eq!(node.int_value().unwrap(), -12);
    }

    #[test]
    fn test_uint_round_trip() {
        let mut node = ScalarNode::unsigned("big");
        node.initialize_against(&json!({"big": u64::MAX}), "root", true)
            .unwrap();
        assert_eq!(node.uint_value().unwrap(), u64::MAX);
    }

    #[test]
    fn test_real_round_trip() {
        let mut node = ScalarNode::real("score");
        node.initialize_against(&json!({"score": 3.19}), "root", true)
            .unwrap();
        assert_eq!(node.real_value().unwrap(), 3.19);
    }

    #[test]
    fn test_no_numeric_coercion_between_subkinds() {
        // A real-declared field must not accept an int-kind value.
        let mut node = ScalarNode::real("score");
        let err = node
            .initialize_against(&json!({"score": 100}), "root", true)
            .unwrap_err();
        assert_eq!(err, BindError::mismatch("root", "score", Kind::Real, Kind::Int));
    }

    #[test]
    fn test_getter_kind_is_enforced() {
        let mut node = ScalarNode::integer("count");
        node.set_container("root");
        node.initialize_against(&json!({"count": 5}), "root", true)
            .unwrap();
        // Reading through the wrong getter reports a mismatch instead of
        // silently converting.
        assert_eq!(
            node.real_value().unwrap_err(),
            BindError::mismatch("root", "count", Kind::Real, Kind::Int)
        );
    }

    #[test]
    fn test_rebinding_resets_to_undefined() {
        let mut node = ScalarNode::string("name");
        node.initialize_against(&json!({"name": "first"}), "root", false)
            .unwrap();
        assert!(node.is_defined());

        node.initialize_against(&json!({}), "root", false).unwrap();
        assert!(!node.is_defined());
    }
}
