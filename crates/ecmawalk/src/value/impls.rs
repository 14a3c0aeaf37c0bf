//! Value trait implementations: constructors, predicates, conversions, property lookup, PartialEq

use std::sync::Arc;

use super::number::{number_to_string, string_to_number};
use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Arc::new(s.into()))
    }

    /// Create an object value
    pub fn object(o: ObjectValue) -> Self {
        Value::Object(Arc::new(o))
    }

    /// Create a callable value
    pub fn callable(f: BuiltinFn) -> Self {
        Value::Callable(Arc::new(f))
    }

    /// Create a regex value
    pub fn regex(pattern: impl Into<String>, flags: impl Into<String>) -> Self {
        Value::Regex(Arc::new(RegexValue::new(pattern, flags)))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════
    /// Check if value is `null` or `undefined`
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// Check if value is a string
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Check if value is callable
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Callable(_))
    }

    /// Check if value is an object, callable or regex
    pub fn is_object_like(&self) -> bool {
        matches!(
            self,
            Value::Object(_) | Value::Callable(_) | Value::Regex(_)
        )
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════
    /// Extract boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract number value
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Primitive Conversions
    // ═══════════════════════════════════════════════════════════════════
    /// ToNumber for primitives. `None` for BigInt and object-like values,
    /// which never convert implicitly here.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Value::Undefined => Some(f64::NAN),
            Value::Null => Some(0.0),
            Value::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Number(n) => Some(*n),
            Value::String(s) => Some(string_to_number(s)),
            Value::BigInt(_) | Value::Regex(_) | Value::Callable(_) | Value::Object(_) => None,
        }
    }

    /// ToString for primitives. `None` for object-like values.
    pub fn to_js_string(&self) -> Option<String> {
        match self {
            Value::Undefined => Some("undefined".to_string()),
            Value::Null => Some("null".to_string()),
            Value::Boolean(b) => Some(b.to_string()),
            Value::Number(n) => Some(number_to_string(*n)),
            Value::String(s) => Some(s.as_ref().clone()),
            Value::BigInt(b) => Some(b.to_string()),
            Value::Regex(_) | Value::Callable(_) | Value::Object(_) => None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Property Lookup
    // ═══════════════════════════════════════════════════════════════════
    /// Look up a named property. `None` means the property does not exist;
    /// primitives other than strings expose no properties.
    pub fn property(&self, name: &str) -> Option<Value> {
        match self {
            Value::Object(o) => o.get(name).cloned(),
            Value::String(s) if name == "length" => {
                Some(Value::Number(s.encode_utf16().count() as f64))
            }
            Value::Callable(f) => match name {
                "name" => Some(Value::string(f.name.clone())),
                "length" => Some(Value::Number(f64::from(f.arity.max(0)))),
                _ => None,
            },
            Value::Regex(r) => match name {
                "source" => Some(Value::string(r.pattern.clone())),
                "flags" => Some(Value::string(r.flags.clone())),
                "global" => Some(Value::Boolean(r.has_flag('g'))),
                "ignoreCase" => Some(Value::Boolean(r.has_flag('i'))),
                "multiline" => Some(Value::Boolean(r.has_flag('m'))),
                "sticky" => Some(Value::Boolean(r.has_flag('y'))),
                "unicode" => Some(Value::Boolean(r.has_flag('u'))),
                "dotAll" => Some(Value::Boolean(r.has_flag('s'))),
                "lastIndex" => Some(Value::Number(0.0)),
                _ => None,
            },
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// PartialEq Implementation
// ═══════════════════════════════════════════════════════════════════

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,

            // Object-like values are equal only if they're the same Arc
            (Value::Regex(a), Value::Regex(b)) => Arc::ptr_eq(a, b),
            (Value::Callable(a), Value::Callable(b)) => Arc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),

            // Different types are never equal
            _ => false,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Trait Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::BigInt(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<ObjectValue> for Value {
    fn from(o: ObjectValue) -> Self {
        Value::object(o)
    }
}

impl From<BuiltinFn> for Value {
    fn from(f: BuiltinFn) -> Self {
        Value::callable(f)
    }
}
