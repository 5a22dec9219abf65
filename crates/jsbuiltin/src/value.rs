//! Guest-side representation of host values.
//!
//! [`Value`] is a tagged union over everything a host call can receive or
//! return. Primitives are carried inline; objects, functions and symbols are
//! handles into a [`Realm`](crate::realm::Realm), which owns the object graph.

use std::fmt;

/// Handle to an object (or function) living in a [`Realm`](crate::realm::Realm).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub(crate) usize);

/// Handle to a symbol created by a [`Realm`](crate::realm::Realm).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolId(pub(crate) usize);

/// A host value as seen by guest code.
///
/// `Null` is the absent-object sentinel and `Undefined` the `undefined`
/// sentinel. `Object` and `Function` both reference heap objects; a function
/// is an object that can be called.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Symbol(SymbolId),
    Object(ObjectId),
    Function(ObjectId),
}

impl Value {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// True for everything that is not an object or function reference.
    pub fn is_primitive(&self) -> bool {
        self.as_object_id().is_none()
    }

    /// The referenced heap object, for both `Object` and `Function`.
    pub fn as_object_id(&self) -> Option<ObjectId> {
        match self {
            Value::Object(id) | Value::Function(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

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

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

/// Host numbers are doubles; magnitudes above 2^53 round to the nearest one.
impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

/// `None` maps to the absent-object sentinel, as a nil pointer would.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Result of the `typeof` operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Undefined,
    /// Ordinary objects, boxed primitives, and the absent-object sentinel.
    Object,
    Boolean,
    Number,
    String,
    Function,
    Symbol,
}

impl TypeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Undefined => "undefined",
            TypeTag::Object => "object",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::String => "string",
            TypeTag::Function => "function",
            TypeTag::Symbol => "symbol",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for TypeTag {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<str> for TypeTag {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_none_is_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".into()));
    }

    #[test]
    fn references_are_not_primitive() {
        assert!(Value::Object(ObjectId(0)).as_object_id().is_some());
        assert!(Value::Function(ObjectId(3)).as_object_id().is_some());
        assert!(Value::Symbol(SymbolId(0)).is_primitive());
        assert!(Value::Null.is_primitive());
    }

    #[test]
    fn type_tag_compares_with_strings() {
        assert_eq!(TypeTag::Symbol, "symbol");
        assert_eq!(TypeTag::Undefined.to_string(), "undefined");
    }
}
