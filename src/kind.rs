//! Value kind tags for the binding engine
//!
//! The engine consumes a parsed `serde_json::Value` tree and never looks
//! at raw text. Every kind decision goes through [`Kind::of`] so the
//! numeric subkind split is made in exactly one place.

use std::fmt;

use serde_json::Value;

/// The kind of a JSON value as seen by the binding engine.
///
/// Numbers split into three subkinds with no coercion between them:
/// - `Int`: representable as `i64`
/// - `UInt`: representable only as `u64`
/// - `Real`: everything else (fractional or out of integer range)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Bool,
    Int,
    UInt,
    Real,
    String,
    Array,
    Object,
}

impl Kind {
    /// Classifies a JSON value.
    pub fn of(value: &Value) -> Kind {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(n) => {
                if n.is_i64() {
                    Kind::Int
                } else if n.is_u64() {
                    Kind::UInt
                } else {
                    Kind::Real
                }
            }
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns the kind name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::UInt => "uint",
            Kind::Real => "real",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
