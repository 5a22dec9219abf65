//! Host object model: the objects, prototypes and globals that `typeof` and
//! `instanceof` classify.
//!
//! A [`Realm`] is an arena of host objects addressed by [`ObjectId`]. Creating
//! one bootstraps the intrinsics guest code expects to find on the global
//! object:
//!
//! - `Object.prototype` (end of every prototype chain) and `Function.prototype`
//! - the constructors `Object`, `Function`, `String`, `Number`, `Boolean`, and
//!   `Symbol` when [`RealmOptions::symbols`] is on
//! - `globalThis`, `undefined`, `NaN` and `Infinity`
//!
//! Objects carry only what classification needs: a prototype link and a kind
//! (ordinary, boxed primitive, or function). There are no property bags.
//!
//! # Example
//! ```
//! use jsbuiltin::{Realm, Value};
//! let mut realm = Realm::new();
//! let string_ctor = realm.global("String");
//! let boxed = realm.construct(&string_ctor, &[Value::from("foo")]).unwrap();
//! assert!(matches!(boxed, Value::Object(_)));
//! ```

use std::collections::HashMap;

use crate::config::RealmOptions;
use crate::error::{BuiltinError, Result};
use crate::number::to_number;
use crate::value::{ObjectId, SymbolId, Value};

/// Which built-in `[[Construct]]` behaviour a function has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConstructorKind {
    Object,
    Function,
    String,
    Number,
    Boolean,
    /// Callable but throws under `new`.
    Symbol,
    /// A guest-defined function: `new F()` makes an object inheriting `F.prototype`.
    Ordinary,
    /// Not constructible at all (methods, arrow-style functions).
    None,
}

#[derive(Debug, Clone)]
struct FunctionData {
    name: String,
    /// The object stored in the function's `prototype` property.
    prototype_object: Option<ObjectId>,
    constructor: ConstructorKind,
}

#[derive(Debug, Clone)]
enum ObjectKind {
    Ordinary,
    /// A wrapper object around a primitive (`new String("foo")`).
    Boxed(Value),
    Function(FunctionData),
}

#[derive(Debug, Clone)]
struct HostObject {
    prototype: Option<ObjectId>,
    kind: ObjectKind,
}

#[derive(Debug, Clone, Copy)]
struct Intrinsics {
    object_prototype: ObjectId,
    function_prototype: ObjectId,
    string_prototype: ObjectId,
    number_prototype: ObjectId,
    boolean_prototype: ObjectId,
    symbol_prototype: Option<ObjectId>,
}

/// A bootstrapped host environment.
#[derive(Debug, Clone)]
pub struct Realm {
    objects: Vec<HostObject>,
    symbols: Vec<Option<String>>,
    globals: HashMap<String, Value>,
    global_object: ObjectId,
    intrinsics: Intrinsics,
    options: RealmOptions,
}

impl Default for Realm {
    fn default() -> Self {
        Self::new()
    }
}

impl Realm {
    /// Bootstrap a realm with default options (symbols supported).
    pub fn new() -> Self {
        Self::with_options(RealmOptions::default())
    }

    /// Bootstrap a realm with the given host capabilities.
    pub fn with_options(options: RealmOptions) -> Self {
        let mut objects = Vec::new();

        let object_prototype = alloc(&mut objects, None, ObjectKind::Ordinary);
        let function_prototype = alloc(
            &mut objects,
            Some(object_prototype),
            ObjectKind::Function(FunctionData {
                name: String::new(),
                prototype_object: None,
                constructor: ConstructorKind::None,
            }),
        );
        // Primitive prototypes are themselves wrappers around the zero value.
        let string_prototype = alloc(
            &mut objects,
            Some(object_prototype),
            ObjectKind::Boxed(Value::String(String::new())),
        );
        let number_prototype = alloc(
            &mut objects,
            Some(object_prototype),
            ObjectKind::Boxed(Value::Number(0.0)),
        );
        let boolean_prototype = alloc(
            &mut objects,
            Some(object_prototype),
            ObjectKind::Boxed(Value::Boolean(false)),
        );
        let symbol_prototype = options
            .symbols
            .then(|| alloc(&mut objects, Some(object_prototype), ObjectKind::Ordinary));

        let mut constructors = vec![
            ("Object", object_prototype, ConstructorKind::Object),
            ("Function", function_prototype, ConstructorKind::Function),
            ("String", string_prototype, ConstructorKind::String),
            ("Number", number_prototype, ConstructorKind::Number),
            ("Boolean", boolean_prototype, ConstructorKind::Boolean),
        ];
        if let Some(proto) = symbol_prototype {
            constructors.push(("Symbol", proto, ConstructorKind::Symbol));
        }

        let mut globals = HashMap::new();
        for (name, proto, kind) in constructors {
            let id = alloc(
                &mut objects,
                Some(function_prototype),
                ObjectKind::Function(FunctionData {
                    name: name.to_string(),
                    prototype_object: Some(proto),
                    constructor: kind,
                }),
            );
            globals.insert(name.to_string(), Value::Function(id));
        }

        let global_object = alloc(&mut objects, Some(object_prototype), ObjectKind::Ordinary);
        globals.insert("globalThis".to_string(), Value::Object(global_object));
        globals.insert("undefined".to_string(), Value::Undefined);
        globals.insert("NaN".to_string(), Value::Number(f64::NAN));
        globals.insert("Infinity".to_string(), Value::Number(f64::INFINITY));

        log::trace!(
            "realm bootstrapped: {} objects, {} globals, symbols={}",
            objects.len(),
            globals.len(),
            options.symbols
        );

        Self {
            objects,
            symbols: Vec::new(),
            globals,
            global_object,
            intrinsics: Intrinsics {
                object_prototype,
                function_prototype,
                string_prototype,
                number_prototype,
                boolean_prototype,
                symbol_prototype,
            },
            options,
        }
    }

    pub fn options(&self) -> RealmOptions {
        self.options
    }

    /// The global object itself.
    pub fn global_object(&self) -> Value {
        Value::Object(self.global_object)
    }

    /// Look up a global binding. Missing names read as `undefined`.
    pub fn global(&self, name: &str) -> Value {
        self.globals.get(name).cloned().unwrap_or_default()
    }

    /// Create an empty object inheriting from `Object.prototype`.
    pub fn new_object(&mut self) -> Value {
        let proto = self.intrinsics.object_prototype;
        Value::Object(self.alloc(Some(proto), ObjectKind::Ordinary))
    }

    /// Create an empty object with an explicit prototype (`Object.create`).
    pub fn new_object_with_proto(&mut self, proto: Option<ObjectId>) -> Value {
        Value::Object(self.alloc(proto, ObjectKind::Ordinary))
    }

    /// Create a constructible function with its own `prototype` object.
    pub fn new_function(&mut self, name: &str) -> Value {
        let object_prototype = self.intrinsics.object_prototype;
        let prototype_object = self.alloc(Some(object_prototype), ObjectKind::Ordinary);
        self.alloc_function(name, Some(prototype_object), ConstructorKind::Ordinary)
    }

    /// Create a callable that has no `prototype` object and cannot be used
    /// with `new`, like a method or arrow function.
    pub fn new_function_without_prototype(&mut self, name: &str) -> Value {
        self.alloc_function(name, None, ConstructorKind::None)
    }

    /// Create a fresh symbol, as `Symbol(description)` does.
    ///
    /// Returns `None` when the realm was bootstrapped without symbol support.
    pub fn new_symbol(&mut self, description: Option<&str>) -> Option<Value> {
        if !self.options.symbols {
            return None;
        }
        self.symbols.push(description.map(str::to_string));
        Some(Value::Symbol(SymbolId(self.symbols.len() - 1)))
    }

    pub fn symbol_description(&self, id: SymbolId) -> Option<&str> {
        self.symbols.get(id.0).and_then(|d| d.as_deref())
    }

    /// Apply `new` to `constructor` with the given arguments.
    ///
    /// # Errors
    /// Returns [`BuiltinError::NotAConstructor`] for non-functions, `Symbol`,
    /// and functions created without a prototype. Boxing a symbol as a string
    /// fails with [`BuiltinError::Host`], as the host's `new String(sym)` throws.
    pub fn construct(&mut self, constructor: &Value, args: &[Value]) -> Result<Value> {
        let Some(func) = constructor.as_object_id().and_then(|id| self.function(id)) else {
            return Err(BuiltinError::NotAConstructor(self.describe(constructor)));
        };
        let (name, kind, prototype_object) =
            (func.name.clone(), func.constructor, func.prototype_object);
        log::trace!("construct {name} ({kind:?}) with {} argument(s)", args.len());

        let arg = args.first();
        match kind {
            ConstructorKind::Object => Ok(match arg {
                None | Some(Value::Undefined | Value::Null) => self.new_object(),
                Some(reference @ (Value::Object(_) | Value::Function(_))) => reference.clone(),
                Some(primitive) => self.box_primitive(primitive.clone()),
            }),
            ConstructorKind::Function => Ok(self.new_function("anonymous")),
            ConstructorKind::String => {
                let s = match arg {
                    Some(v) => self.to_string_value(v)?,
                    None => String::new(),
                };
                Ok(self.box_primitive(Value::String(s)))
            }
            ConstructorKind::Number => {
                let n = arg.map_or(0.0, |v| to_number(self, v));
                Ok(self.box_primitive(Value::Number(n)))
            }
            ConstructorKind::Boolean => {
                let b = arg.is_some_and(|v| self.to_boolean(v));
                Ok(self.box_primitive(Value::Boolean(b)))
            }
            ConstructorKind::Ordinary => {
                let proto = prototype_object.unwrap_or(self.intrinsics.object_prototype);
                Ok(self.new_object_with_proto(Some(proto)))
            }
            ConstructorKind::Symbol | ConstructorKind::None => {
                Err(BuiltinError::NotAConstructor(name))
            }
        }
    }

    /// The `[[Prototype]]` of an object, `None` at the end of the chain.
    pub fn prototype_of(&self, id: ObjectId) -> Option<ObjectId> {
        self.objects.get(id.0).and_then(|o| o.prototype)
    }

    /// Replace an object's prototype (`Object.setPrototypeOf`).
    ///
    /// Returns `false`, leaving the object unchanged, if either id is unknown
    /// or the change would make the chain circular.
    pub fn set_prototype_of(&mut self, id: ObjectId, proto: Option<ObjectId>) -> bool {
        if id.0 >= self.objects.len() {
            return false;
        }
        if let Some(target) = proto {
            if target.0 >= self.objects.len() {
                return false;
            }
            let mut current = Some(target);
            while let Some(link) = current {
                if link == id {
                    return false;
                }
                current = self.prototype_of(link);
            }
        }
        self.objects[id.0].prototype = proto;
        true
    }

    /// The wrapped primitive of a boxed object.
    pub fn primitive_value(&self, id: ObjectId) -> Option<&Value> {
        match &self.objects.get(id.0)?.kind {
            ObjectKind::Boxed(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_callable(&self, id: ObjectId) -> bool {
        self.function(id).is_some()
    }

    pub fn function_name(&self, id: ObjectId) -> Option<&str> {
        self.function(id).map(|f| f.name.as_str())
    }

    /// The object held in a function's `prototype` property.
    pub fn function_prototype_object(&self, id: ObjectId) -> Option<ObjectId> {
        self.function(id).and_then(|f| f.prototype_object)
    }

    fn function(&self, id: ObjectId) -> Option<&FunctionData> {
        match &self.objects.get(id.0)?.kind {
            ObjectKind::Function(f) => Some(f),
            _ => None,
        }
    }

    fn alloc(&mut self, prototype: Option<ObjectId>, kind: ObjectKind) -> ObjectId {
        alloc(&mut self.objects, prototype, kind)
    }

    fn alloc_function(
        &mut self,
        name: &str,
        prototype_object: Option<ObjectId>,
        constructor: ConstructorKind,
    ) -> Value {
        let proto = self.intrinsics.function_prototype;
        let id = self.alloc(
            Some(proto),
            ObjectKind::Function(FunctionData {
                name: name.to_string(),
                prototype_object,
                constructor,
            }),
        );
        Value::Function(id)
    }

    fn box_primitive(&mut self, primitive: Value) -> Value {
        let i = self.intrinsics;
        let proto = match &primitive {
            Value::String(_) => i.string_prototype,
            Value::Number(_) => i.number_prototype,
            Value::Boolean(_) => i.boolean_prototype,
            Value::Symbol(_) => i.symbol_prototype.unwrap_or(i.object_prototype),
            _ => i.object_prototype,
        };
        Value::Object(self.alloc(Some(proto), ObjectKind::Boxed(primitive)))
    }

    fn to_boolean(&self, value: &Value) -> bool {
        match value {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_) | Value::Object(_) | Value::Function(_) => true,
        }
    }

    /// `ToString`, used when boxing a string.
    fn to_string_value(&self, value: &Value) -> Result<String> {
        match value {
            Value::Symbol(_) => Err(BuiltinError::Host(
                "Cannot convert a Symbol value to a string".to_string(),
            )),
            Value::Object(id) | Value::Function(id) => match self.primitive_value(*id) {
                Some(primitive) => self.to_string_value(primitive),
                None => Ok(self.describe(value)),
            },
            _ => Ok(self.describe(value)),
        }
    }

    /// Render a value for messages, following the host's string forms.
    fn describe(&self, value: &Value) -> String {
        match value {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Number(n) => number_to_string(*n),
            Value::String(s) => s.clone(),
            Value::Symbol(id) => {
                format!("Symbol({})", self.symbol_description(*id).unwrap_or_default())
            }
            Value::Object(id) | Value::Function(id) => match self.function_name(*id) {
                Some(name) => format!("function {name}() {{ [native code] }}"),
                None => "[object Object]".to_string(),
            },
        }
    }
}

fn alloc(objects: &mut Vec<HostObject>, prototype: Option<ObjectId>, kind: ObjectKind) -> ObjectId {
    objects.push(HostObject { prototype, kind });
    ObjectId(objects.len() - 1)
}

/// Host number formatting: integers without a fraction, `-0` as `0`, and
/// exponent form with an explicit sign outside `[1e-6, 1e21)`.
fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return n.to_string();
    }
    let s = format!("{n:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}
