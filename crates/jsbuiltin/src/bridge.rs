//! The global built-ins, bound to a realm.
//!
//! A [`Bridge`] can only be built from a [`Realm`], and a realm is fully
//! bootstrapped by the time its constructor returns, so no operation can run
//! against a half-initialized global object.
//!
//! Every operation is pure and total except the two decoders, which may
//! return [`BuiltinError::MalformedUri`](crate::BuiltinError::MalformedUri).

use crate::error::Result;
use crate::number::to_number;
use crate::realm::Realm;
use crate::uri;
use crate::value::{TypeTag, Value};

/// Stateless access to the host's global functions and operators.
#[derive(Debug, Clone, Copy)]
pub struct Bridge<'r> {
    realm: &'r Realm,
}

impl<'r> Bridge<'r> {
    pub fn new(realm: &'r Realm) -> Self {
        Self { realm }
    }

    pub fn realm(&self) -> &'r Realm {
        self.realm
    }

    /// `encodeURI`
    pub fn encode_uri(&self, input: &str) -> String {
        uri::encode_uri(input)
    }

    /// `decodeURI`
    pub fn decode_uri(&self, input: &str) -> Result<String> {
        uri::decode_uri(input)
    }

    /// `encodeURIComponent`
    pub fn encode_uri_component(&self, input: &str) -> String {
        uri::encode_uri_component(input)
    }

    /// `decodeURIComponent`
    pub fn decode_uri_component(&self, input: &str) -> Result<String> {
        uri::decode_uri_component(input)
    }

    /// `isFinite`: coerces to a number, then rejects NaN and both infinities.
    pub fn is_finite(&self, value: &Value) -> bool {
        to_number(self.realm, value).is_finite()
    }

    /// `isNaN`: coerces to a number, then tests for NaN. Values that cannot
    /// be coerced are NaN.
    pub fn is_nan(&self, value: &Value) -> bool {
        to_number(self.realm, value).is_nan()
    }

    /// The `typeof` operator.
    ///
    /// The absent-object sentinel reports `"object"`, exactly as the host does.
    pub fn type_of(&self, value: &Value) -> TypeTag {
        match value {
            Value::Undefined => TypeTag::Undefined,
            Value::Null => TypeTag::Object,
            Value::Boolean(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            Value::Symbol(_) => TypeTag::Symbol,
            Value::Object(id) | Value::Function(id) => {
                if self.realm.is_callable(*id) {
                    TypeTag::Function
                } else {
                    TypeTag::Object
                }
            }
        }
    }

    /// The `instanceof` operator: walks `value`'s prototype chain looking for
    /// `constructor.prototype`.
    ///
    /// Primitives are never instances, even of their own wrapper constructor.
    /// A right-hand side that is not a function with a prototype object yields
    /// `false` where the host would throw.
    pub fn instance_of(&self, value: &Value, constructor: &Value) -> bool {
        let Some(target) = constructor
            .as_object_id()
            .and_then(|id| self.realm.function_prototype_object(id))
        else {
            log::trace!("instanceof: right-hand side has no prototype object");
            return false;
        };
        let Some(mut current) = value.as_object_id() else {
            return false;
        };
        while let Some(proto) = self.realm.prototype_of(current) {
            if proto == target {
                return true;
            }
            current = proto;
        }
        false
    }
}
