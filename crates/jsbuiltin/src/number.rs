//! Numeric coercion (`ToNumber`) as applied by `isFinite` and `isNaN`.
//!
//! Strings follow the host's `StringToNumber` grammar rather than Rust's
//! `f64::from_str`: surrounding white space and line terminators are ignored,
//! an empty string is zero, `Infinity` is spelled exactly, unsigned `0x`/`0o`/
//! `0b` literals are accepted, and words Rust would accept (`inf`, `NaN`) are
//! not numbers.

use crate::realm::Realm;
use crate::value::Value;

/// Coerce a value to a number.
///
/// Never fails. Values the host would refuse to coerce (symbols) come out as
/// NaN, as do ordinary objects and functions, whose default string forms are
/// never numeric. Boxed primitives unwrap to their primitive first.
pub fn to_number(realm: &Realm, value: &Value) -> f64 {
    match value {
        Value::Undefined => f64::NAN,
        Value::Null => 0.0,
        Value::Boolean(b) => f64::from(u8::from(*b)),
        Value::Number(n) => *n,
        Value::String(s) => string_to_number(s),
        Value::Symbol(_) => f64::NAN,
        Value::Object(id) | Value::Function(id) => match realm.primitive_value(*id) {
            Some(primitive) => to_number(realm, primitive),
            None => f64::NAN,
        },
    }
}

/// Parse a string the way the host converts strings to numbers.
///
/// ```
/// use jsbuiltin::number::string_to_number;
/// assert_eq!(string_to_number(" 42\n"), 42.0);
/// assert_eq!(string_to_number(""), 0.0);
/// assert_eq!(string_to_number("0x1F"), 31.0);
/// assert!(string_to_number("2005/12/12").is_nan());
/// assert!(string_to_number("inf").is_nan());
/// ```
pub fn string_to_number(input: &str) -> f64 {
    let s = input.trim_matches(is_host_whitespace);
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(n) = parse_radix_literal(s) {
        return n;
    }
    if is_decimal_literal(s) {
        // The grammar check above is stricter than `f64::from_str`, which
        // also takes `inf`/`nan` spellings; anything that passes it parses.
        return s.parse::<f64>().unwrap_or(f64::NAN);
    }
    f64::NAN
}

/// White space and line terminators stripped around numeric strings:
/// TAB, VT, FF, SP, NBSP, BOM, the `Zs` category, LF, CR, LS and PS.
fn is_host_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `0x`, `0o` and `0b` integer literals. Returns `None` when the prefix is
/// absent, and NaN when it is present but the digits are not valid.
/// Signs are not allowed with these prefixes.
fn parse_radix_literal(s: &str) -> Option<f64> {
    let radix = match s.as_bytes() {
        [b'0', b'x' | b'X', ..] => 16,
        [b'0', b'o' | b'O', ..] => 8,
        [b'0', b'b' | b'B', ..] => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let mut acc = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * f64::from(radix) + f64::from(d),
            None => return Some(f64::NAN),
        }
    }
    Some(acc)
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(s: &str) -> bool {
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_digits = count_digits(&b[i..]);
    i += int_digits;
    let mut frac_digits = 0;
    if b.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(&b[i..]);
        i += frac_digits;
    }
    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(b.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(b.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_digits = count_digits(&b[i..]);
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
    }
    i == b.len()
}

fn count_digits(b: &[u8]) -> usize {
    b.iter().take_while(|c| c.is_ascii_digit()).count()
}
