//! Canonical JSON normalization
//!
//! Every payload signed as JSON goes through this module first, so that
//! clients written in other languages sign the exact same bytes.
//!
//! Rules:
//! - UTF-8 encoding
//! - Object keys sorted by their UTF-8 bytes, at every nesting level
//! - Array order preserved
//! - No whitespace outside string values
//! - Strings keep their Unicode content; only `"`, `\` and control
//!   characters are escaped
//! - Numbers formatted the way `JSON.stringify` formats them

use crate::Result;
use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Serialize `value` into its canonical JSON text.
pub fn to_canonical_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let value = serde_json::to_value(value)?;
    let mut out = String::new();
    write_value(&value, &mut out)?;
    Ok(out)
}

/// Serialize `value` into canonical UTF-8 bytes, ready to be signed.
pub fn to_canonical_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    to_canonical_string(value).map(String::into_bytes)
}

/// Parse a JSON document and return its canonical text.
pub fn normalize_str(text: &str) -> Result<String> {
    let value: Value = serde_json::from_str(text)?;
    to_canonical_string(&value)
}

/// Return a copy of `value` whose objects have their keys inserted in
/// canonical order.
///
/// Only observable when `serde_json` is built with `preserve_order`;
/// otherwise maps are already ordered.
pub fn sort_value(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

            let mut sorted = Map::new();
            for (key, value) in entries {
                sorted.insert(key, sort_value(value));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_value).collect()),
        other => other,
    }
}

fn write_value(value: &Value, out: &mut String) -> Result<()> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&format_number(n)),
        Value::String(s) => write_string(s, out)?,
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(item, out)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            // Sort explicitly: another crate in the graph may enable
            // `preserve_order`, which turns `Map` into an insertion-ordered map.
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out)?;
                out.push(':');
                write_value(item, out)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

fn write_string(s: &str, out: &mut String) -> Result<()> {
    // serde_json escapes exactly what JSON.stringify escapes for valid UTF-8
    out.push_str(&serde_json::to_string(s)?);
    Ok(())
}

/// Integers are written verbatim. JavaScript (and Go decoding into
/// `interface{}`) round integers beyond 2^53 through f64, so payloads
/// carrying them will not sign identically across clients.
fn format_number(n: &Number) -> String {
    if n.is_u64() || n.is_i64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) => format_f64(f),
        None => n.to_string(),
    }
}

/// ECMAScript `Number::toString` for finite doubles.
fn format_f64(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e-7"
    let sci = format!("{:e}", f.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let k = digits.len() as i32;
    let n = exponent + 1;

    let mut out = String::new();
    if f < 0.0 {
        out.push('-');
    }

    if k <= n && n <= 21 {
        out.push_str(&digits);
        out.push_str(&"0".repeat((n - k) as usize));
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if -6 < n && n <= 0 {
        out.push_str("0.");
        out.push_str(&"0".repeat((-n) as usize));
        out.push_str(&digits);
    } else {
        let e = n - 1;
        out.push_str(&digits[..1]);
        if k > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push(if e < 0 { '-' } else { '+' });
        out.push_str(&e.abs().to_string());
    }
    out
}
