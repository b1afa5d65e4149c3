//! Array nodes and element materialization
//!
//! An [`ArrayNode`] carries an unbound element prototype. Binding the
//! array clones the prototype once per JSON entry, validates the entry's
//! kind against it, binds the entry as the element's value snapshot, and
//! runs the nested binding pass for object elements. Elements are
//! unnamed; kind failures name the offending entry by index (`[i]`).

use serde_json::Value;
use tracing::debug;

use crate::errors::{BindError, BindResult};
use crate::kind::Kind;
use crate::node::{self, SchemaNode};

/// A repeated-element schema node.
#[derive(Debug, Clone)]
pub struct ArrayNode {
    name: String,
    container: String,
    element: Box<SchemaNode>,
    elements: Vec<SchemaNode>,
    value: Value,
}

impl ArrayNode {
    /// Declares an array field whose entries bind against clones of the
    /// given element prototype. The prototype stays unbound and unnamed.
    pub fn of(name: impl Into<String>, prototype: impl Into<SchemaNode>) -> Self {
        let mut prototype = prototype.into();
        prototype.set_name("");
        Self {
            name: name.into(),
            container: String::new(),
            element: Box::new(prototype),
            elements: Vec::new(),
            value: Value::Null,
        }
    }

    /// Returns the declared field name.
    pub fn name(&self) -> &str {
        &self.name
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
    /// element materialization.
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
        let bound = node::check_field(
            container_value,
            container_name,
            require_all,
            &self.name,
            Kind::Array,
        )?;
        self.elements.clear();
        match bound {
            Some(value) => {
                self.value = value;
                self.materialize()
            }
            None => {
                self.value = Value::Null;
                Ok(())
            }
        }
    }

    /// Builds one element node per bound entry, in source order.
    ///
    /// Each entry's kind is validated against the prototype before the
    /// snapshot is bound; object elements additionally run their own
    /// binding pass. The composite capability is queried once per array
    /// bind, not per element.
    fn materialize(&mut self) -> BindResult<()> {
        let composite = self.element.is_composite();
        let expected = self.element.expected_kind();
        if let Value::Array(entries) = &self.value {
            debug!(
                array = %self.name,
                entries = entries.len(),
                composite,
                "materializing array elements"
            );
            for (index, entry) in entries.iter().enumerate() {
                let actual = Kind::of(entry);
                if actual != expected {
                    return Err(BindError::mismatch(
                        &self.name,
                        format!("[{index}]"),
                        expected,
                        actual,
                    ));
                }
                let mut element = (*self.element).clone();
                element.set_container(&self.name);
                element.bind_raw(entry.clone());
                if composite {
                    if let SchemaNode::Object(object) = &mut element {
                        object.initialize()?;
                    }
                }
                self.elements.push(element);
            }
        }
        Ok(())
    }

    /// Returns the materialized elements in source order.
    ///
    /// Fails with `FieldAbsent` while the array is undefined.
    pub fn elements(&self) -> BindResult<&[SchemaNode]> {
        if !self.is_defined() {
            return Err(BindError::absent(&self.container, &self.name));
        }
        Ok(&self.elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjectNode;
    use crate::scalar::ScalarNode;
    use serde_json::json;

    fn bind(node: &mut ArrayNode, container: Value) -> BindResult<()> {
        node.initialize_against(&container, "root", true)
    }

    #[test]
    fn test_scalar_elements_in_source_order() {
        let mut node = ArrayNode::of("values", ScalarNode::integer(""));
        bind(&mut node, json!({"values": [1, 2, 3, 4]})).unwrap();

        let elements = node.elements().unwrap();
        assert_eq!(elements.len(), 4);
        for (i, element) in elements.iter().enumerate() {
            let got = element.as_scalar().unwrap().int_value().unwrap();
            assert_eq!(got, i as i64 + 1);
        }
    }

    #[test]
    fn test_empty_array_is_defined_with_no_elements() {
        let mut node = ArrayNode::of("values", ScalarNode::integer(""));
        bind(&mut node, json!({"values": []})).unwrap();
        assert!(node.is_defined());
        assert!(node.elements().unwrap().is_empty());
    }

    #[test]
    fn test_absent_optional_array() {
        let mut node = ArrayNode::of("values", ScalarNode::integer(""));
        node.set_container("root");
        node.initialize_against(&json!({}), "root", false).unwrap();
        assert!(!node.is_defined());
        assert_eq!(
            node.elements().unwrap_err(),
            BindError::absent("root", "values")
        );
    }

    #[test]
    fn test_non_array_field_fails() {
        let mut node = ArrayNode::of("values", ScalarNode::integer(""));
        let err = bind(&mut node, json!({"values": 7})).unwrap_err();
        assert_eq!(
            err,
            BindError::mismatch("root", "values", Kind::Array, Kind::Int)
        );
    }

    #[test]
    fn test_heterogeneous_entries_fail_by_index() {
        let mut node = ArrayNode::of("values", ScalarNode::string(""));
        let err = bind(&mut node, json!({"values": ["a", 1]})).unwrap_err();
        assert_eq!(
            err,
            BindError::mismatch("values", "[1]", Kind::String, Kind::Int)
        );
    }

    #[test]
    fn test_null_entry_fails() {
        let mut node = ArrayNode::of("values", ScalarNode::integer(""));
        let err = bind(&mut node, json!({"values": [1, null, 3]})).unwrap_err();
        assert_eq!(
            err,
            BindError::mismatch("values", "[1]", Kind::Int, Kind::Null)
        );
    }

    #[test]
    fn test_object_elements_are_initialized() {
        let mut prototype = ObjectNode::nested("");
        prototype.attach(ScalarNode::boolean("set"));

        let mut node = ArrayNode::of("flags", prototype);
        bind(&mut node, json!({"flags": [{"set": true}, {"set": false}]})).unwrap();

        let elements = node.elements().unwrap();
        let values: Vec<bool> = elements
            .iter()
            .map(|e| {
                e.as_object()
                    .unwrap()
                    .scalar("set")
                    .unwrap()
                    .bool_value()
                    .unwrap()
            })
            .collect();
        assert_eq!(values, vec![true, false]);
    }

    #[test]
    fn test_object_element_field_failure_propagates() {
        let mut prototype = ObjectNode::nested("").require_all_fields(true);
        prototype.attach(ScalarNode::boolean("set"));

        let mut node = ArrayNode::of("flags", prototype);
        let err = bind(&mut node, json!({"flags": [{"set": true}, {}]})).unwrap_err();
        assert_eq!(err, BindError::absent("", "set"));
    }

    #[test]
    fn test_rebinding_repopulates_elements() {
        let mut node = ArrayNode::of("values", ScalarNode::integer(""));
        bind(&mut node, json!({"values": [1, 2, 3]})).unwrap();
        assert_eq!(node.elements().unwrap().len(), 3);

        bind(&mut node, json!({"values": [9]})).unwrap();
        let elements = node.elements().unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].as_scalar().unwrap().int_value().unwrap(), 9);
    }
}
