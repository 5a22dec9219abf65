//! URI percent-encoding and decoding with the host's character tables.
//!
//! Implements the `Encode` / `Decode` abstract operations behind the four
//! global URI functions:
//!
//! - **`encode_uri`** leaves letters, digits, `- _ . ! ~ * ' ( )` and the
//!   reserved set `; / ? : @ & = + $ , #` untouched.
//! - **`encode_uri_component`** leaves only letters, digits and
//!   `- _ . ! ~ * ' ( )` untouched.
//! - Everything else is UTF-8 encoded and each byte written as `%XX`
//!   (upper-case hex).
//! - **`decode_uri`** reverses the escaping but keeps escapes of the reserved
//!   set as they were written (`%3B` stays `%3B`, `%3b` stays `%3b`).
//! - **`decode_uri_component`** decodes every escape.
//!
//! Decoding fails with [`BuiltinError::MalformedUri`] when an escape is
//! truncated, a multi-byte sequence is broken, or the octets are not valid
//! UTF-8 (overlong forms, surrogates, code points past U+10FFFF).
//!
//! # Example
//! ```
//! use jsbuiltin::uri::{decode_uri_component, encode_uri_component};
//! let encoded = encode_uri_component("a b/c");
//! assert_eq!(encoded, "a%20b%2Fc");
//! assert_eq!(decode_uri_component(&encoded).unwrap(), "a b/c");
//! assert!(decode_uri_component("%80").is_err());
//! ```

use crate::error::{BuiltinError, Result};

/// Marks allowed unescaped in both schemes, next to ASCII letters and digits.
const UNRESERVED_MARKS: &[u8] = b"-_.!~*'()";

/// The reserved characters plus `#`: unescaped by `encode_uri`, and never
/// produced from an escape by `decode_uri`.
const RESERVED: &[u8] = b";/?:@&=+$,#";

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Which of the two URI character tables applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scheme {
    /// A whole URI (`encodeURI` / `decodeURI`).
    Uri,
    /// A single URI component (`encodeURIComponent` / `decodeURIComponent`).
    Component,
}

impl Scheme {
    fn leaves_unescaped(self, c: char) -> bool {
        if !c.is_ascii() {
            return false;
        }
        let b = c as u8;
        if b.is_ascii_alphanumeric() || UNRESERVED_MARKS.contains(&b) {
            return true;
        }
        self == Scheme::Uri && RESERVED.contains(&b)
    }

    fn keeps_escaped(self, byte: u8) -> bool {
        self == Scheme::Uri && RESERVED.contains(&byte)
    }
}

/// Percent-encode a full URI, leaving its structural characters intact.
pub fn encode_uri(input: &str) -> String {
    encode(input, Scheme::Uri)
}

/// Percent-encode a single URI component (query value, path segment, ...).
pub fn encode_uri_component(input: &str) -> String {
    encode(input, Scheme::Component)
}

/// Decode a string produced by [`encode_uri`] or any equivalent encoder.
///
/// Escapes that stand for `; / ? : @ & = + $ , #` are left as written.
///
/// # Errors
/// Returns [`BuiltinError::MalformedUri`] if any escape sequence is invalid.
pub fn decode_uri(input: &str) -> Result<String> {
    decode(input, Scheme::Uri)
}

/// Decode a string produced by [`encode_uri_component`].
///
/// # Errors
/// Returns [`BuiltinError::MalformedUri`] if any escape sequence is invalid.
pub fn decode_uri_component(input: &str) -> Result<String> {
    decode(input, Scheme::Component)
}

fn encode(input: &str, scheme: Scheme) -> String {
    let mut out = String::with_capacity(input.len());
    let mut buf = [0u8; 4];
    for c in input.chars() {
        if scheme.leaves_unescaped(c) {
            out.push(c);
            continue;
        }
        for &byte in c.encode_utf8(&mut buf).as_bytes() {
            push_escape(byte, &mut out);
        }
    }
    out
}

fn push_escape(byte: u8, out: &mut String) {
    out.push('%');
    out.push(HEX_UPPER[usize::from(byte >> 4)] as char);
    out.push(HEX_UPPER[usize::from(byte & 0x0F)] as char);
}

/// Walks the input byte-wise. Literal runs between escapes are copied as
/// slices; `%` and hex digits are ASCII, so every slice boundary is a char
/// boundary.
fn decode(input: &str, scheme: Scheme) -> Result<String> {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut literal_start = 0;
    let mut k = 0;

    while k < bytes.len() {
        if bytes[k] != b'%' {
            k += 1;
            continue;
        }
        out.push_str(&input[literal_start..k]);

        let lead = read_escape(bytes, k)?;
        if lead < 0x80 {
            if scheme.keeps_escaped(lead) {
                out.push_str(&input[k..k + 3]);
            } else {
                out.push(char::from(lead));
            }
            k += 3;
        } else {
            let len = utf8_sequence_len(lead)
                .ok_or_else(|| malformed(input, k, "lead byte does not start a UTF-8 sequence"))?;
            let mut octets = [lead, 0, 0, 0];
            k += 3;
            for slot in octets.iter_mut().take(len).skip(1) {
                if bytes.get(k) != Some(&b'%') {
                    return Err(malformed(input, k, "multi-byte sequence is truncated"));
                }
                let byte = read_escape(bytes, k)?;
                if byte & 0xC0 != 0x80 {
                    return Err(malformed(input, k, "expected a continuation byte"));
                }
                *slot = byte;
                k += 3;
            }
            let decoded = std::str::from_utf8(&octets[..len])
                .map_err(|_| malformed(input, k, "octets are not valid UTF-8"))?;
            out.push_str(decoded);
        }
        literal_start = k;
    }

    out.push_str(&input[literal_start..]);
    Ok(out)
}

/// Read the byte encoded by the `%XX` escape starting at `k`.
fn read_escape(bytes: &[u8], k: usize) -> Result<u8> {
    let hi = bytes.get(k + 1).copied().and_then(hex_value);
    let lo = bytes.get(k + 2).copied().and_then(hex_value);
    if let (Some(hi), Some(lo)) = (hi, lo) {
        return Ok(hi << 4 | lo);
    }
    log::debug!("URI decode rejected input at byte {k}: incomplete percent-escape");
    Err(BuiltinError::MalformedUri)
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Number of octets announced by a non-ASCII lead byte, counted from its
/// leading one bits. A lone continuation byte (`10xxxxxx`) or a lead of five
/// or more ones announces nothing valid.
fn utf8_sequence_len(lead: u8) -> Option<usize> {
    match lead.leading_ones() {
        n @ 2..=4 => Some(n as usize),
        _ => None,
    }
}

fn malformed(input: &str, offset: usize, reason: &str) -> BuiltinError {
    log::debug!(
        "URI decode rejected input at byte {offset} of {}: {reason}",
        input.len()
    );
    BuiltinError::MalformedUri
}
