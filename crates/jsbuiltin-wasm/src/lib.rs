//! Host-forwarding built-ins for guest code compiled to WebAssembly.
//!
//! Where `jsbuiltin` reimplements the host semantics natively, this crate
//! calls the real globals of the JavaScript environment hosting the module.
//! Each operation is a single forwarding call with light marshalling:
//!
//! - the URI functions are imported directly; host `URIError`s become
//!   [`BuiltinError::MalformedUri`], anything else thrown becomes
//!   [`BuiltinError::Host`] with the exception's message
//! - `isFinite`, `isNaN` and `instanceof` go through a small inline helper
//!   that turns host `TypeError`s (symbol coercion, a non-callable right-hand
//!   side) into the total answers guest code expects
//! - `typeof` uses the host operator via [`JsValue::js_typeof`]
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p jsbuiltin-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/jsbuiltin_wasm.wasm
//! ```
//!
//! Off `wasm32` the imports link to stubs that panic when called, so only
//! [`HostBridge::connect`] inside a JavaScript host yields a usable bridge.

use jsbuiltin::BuiltinError;
use wasm_bindgen::prelude::*;

/// Globals the bridge forwards to. All must be functions before it connects.
const REQUIRED_GLOBALS: [&str; 6] = [
    "encodeURI",
    "decodeURI",
    "encodeURIComponent",
    "decodeURIComponent",
    "isFinite",
    "isNaN",
];

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = encodeURI)]
    fn host_encode_uri(input: &str) -> String;

    #[wasm_bindgen(catch, js_name = decodeURI)]
    fn host_decode_uri(input: &str) -> Result<String, JsValue>;

    #[wasm_bindgen(js_name = encodeURIComponent)]
    fn host_encode_uri_component(input: &str) -> String;

    #[wasm_bindgen(catch, js_name = decodeURIComponent)]
    fn host_decode_uri_component(input: &str) -> Result<String, JsValue>;
}

#[wasm_bindgen(inline_js = r#"
export function global_type(name) { return typeof globalThis[name]; }
export function global_value(name) { return globalThis[name]; }
export function is_finite(x) { try { return isFinite(x); } catch (_) { return false; } }
export function is_nan(x) { try { return isNaN(x); } catch (_) { return true; } }
export function instance_of(x, c) { try { return x instanceof c; } catch (_) { return false; } }
export function is_uri_error(e) { return typeof URIError === "function" && e instanceof URIError; }
export function error_message(e) {
  if (e !== null && typeof e === "object" && "message" in e) { return String(e.message); }
  try { return String(e); } catch (_) { return typeof e; }
}
"#)]
extern "C" {
    fn global_type(name: &str) -> String;
    fn global_value(name: &str) -> JsValue;
    fn is_finite(value: &JsValue) -> bool;
    fn is_nan(value: &JsValue) -> bool;
    fn instance_of(value: &JsValue, constructor: &JsValue) -> bool;
    fn is_uri_error(err: &JsValue) -> bool;
    fn error_message(err: &JsValue) -> String;
}

/// Access to the host's global built-ins, available once the host has
/// finished bootstrapping its global object.
#[derive(Debug, Clone, Copy)]
pub struct HostBridge {
    _connected: (),
}

impl HostBridge {
    /// Check that every forwarded global is in place and return a bridge.
    ///
    /// # Errors
    /// Returns [`BuiltinError::HostNotReady`] naming the first global that is
    /// missing or not a function.
    pub fn connect() -> Result<Self, BuiltinError> {
        for name in REQUIRED_GLOBALS {
            let kind = global_type(name);
            if kind != "function" {
                log::debug!("host global {name} is {kind}, not a function");
                return Err(BuiltinError::HostNotReady(name.to_string()));
            }
        }
        Ok(Self { _connected: () })
    }

    /// Read a host global (`globalThis[name]`), e.g. a constructor for
    /// [`instance_of`](Self::instance_of).
    pub fn global(&self, name: &str) -> JsValue {
        global_value(name)
    }

    pub fn encode_uri(&self, input: &str) -> String {
        host_encode_uri(input)
    }

    pub fn decode_uri(&self, input: &str) -> Result<String, BuiltinError> {
        host_decode_uri(input).map_err(|e| translate_exception("decodeURI", &e))
    }

    pub fn encode_uri_component(&self, input: &str) -> String {
        host_encode_uri_component(input)
    }

    pub fn decode_uri_component(&self, input: &str) -> Result<String, BuiltinError> {
        host_decode_uri_component(input).map_err(|e| translate_exception("decodeURIComponent", &e))
    }

    pub fn is_finite(&self, value: &JsValue) -> bool {
        is_finite(value)
    }

    pub fn is_nan(&self, value: &JsValue) -> bool {
        is_nan(value)
    }

    /// The host's `typeof` tag for `value`, unchanged (`"object"` for null).
    pub fn type_of(&self, value: &JsValue) -> String {
        value
            .js_typeof()
            .as_string()
            .unwrap_or_else(|| "undefined".to_string())
    }

    pub fn instance_of(&self, value: &JsValue, constructor: &JsValue) -> bool {
        instance_of(value, constructor)
    }
}

fn translate_exception(function: &str, err: &JsValue) -> BuiltinError {
    if is_uri_error(err) {
        return BuiltinError::MalformedUri;
    }
    let message = error_message(err);
    log::debug!("{function} threw a non-URI exception: {message}");
    BuiltinError::Host(message)
}
