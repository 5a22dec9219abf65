//! # jsbuiltin
//!
//! The JavaScript global built-ins that compiled guest code most often needs,
//! available without a JavaScript engine:
//!
//! - `encodeURI` / `decodeURI` / `encodeURIComponent` / `decodeURIComponent`
//! - `isFinite` / `isNaN`, with the host's numeric coercion
//! - the `typeof` and `instanceof` operators
//!
//! Host semantics are reproduced natively: the URI character tables and UTF-8
//! percent-escaping, the `StringToNumber` grammar, and a small object model
//! with prototype chains ([`Realm`]) for the two operators. For forwarding to a
//! real JavaScript host from WebAssembly, see the `jsbuiltin-wasm` crate.
//!
//! ## Quick start
//!
//! ```rust
//! use jsbuiltin::{Bridge, Realm, Value};
//!
//! let mut realm = Realm::new();
//! let string_ctor = realm.global("String");
//! let boxed = realm.construct(&string_ctor, &[Value::from("foo")]).unwrap();
//!
//! let js = Bridge::new(&realm);
//! assert_eq!(js.encode_uri_component("a&b"), "a%26b");
//! assert_eq!(js.decode_uri("%80").unwrap_err().to_string(), "JavaScript error: URI malformed");
//! assert!(js.is_finite(&Value::from("123")));
//! assert!(js.is_nan(&Value::from("Hello")));
//! assert_eq!(js.type_of(&Value::Null), "object");
//! assert!(js.instance_of(&boxed, &string_ctor));
//! assert!(!js.instance_of(&Value::from("foo"), &string_ctor));
//! ```
//!
//! ## Modules
//!
//! - [`bridge`] — the eight operations, bound to a realm
//! - [`uri`] — percent-encoding and decoding
//! - [`number`] — `ToNumber` coercion
//! - [`realm`] — host object model and intrinsics
//! - [`value`] — `Value` tagged union and `TypeTag`
//! - [`config`] — realm options
//! - [`error`] — error type

pub mod bridge;
pub mod config;
pub mod error;
pub mod number;
pub mod realm;
pub mod uri;
pub mod value;

pub use bridge::Bridge;
pub use config::RealmOptions;
pub use error::BuiltinError;
pub use realm::Realm;
pub use uri::{decode_uri, decode_uri_component, encode_uri, encode_uri_component};
pub use value::{ObjectId, SymbolId, TypeTag, Value};
