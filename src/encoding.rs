//! Hex helpers shared by the signature and key parsers.

use crate::{Error, Result};

pub fn ensure_0x(value: &str) -> String {
    if value.starts_with("0x") {
        value.to_string()
    } else {
        format!("0x{value}")
    }
}

pub fn strip_0x(value: &str) -> &str {
    value.strip_prefix("0x").unwrap_or(value)
}

/// Decode a hex string, with or without the `0x` prefix.
///
/// An empty string decodes to an empty buffer. Odd lengths and non-hex
/// characters are rejected.
pub fn hex_to_bytes(value: &str) -> Result<Vec<u8>> {
    let digits = strip_0x(value);
    if digits.len() % 2 != 0 {
        return Err(Error::decoding("the hex string has an odd length"));
    }
    hex::decode(digits).map_err(|e| Error::decoding(format!("invalid hex string: {e}")))
}

/// Encode bytes as lowercase hex, `0x`-prefixed unless `skip_0x` is set.
pub fn bytes_to_hex(bytes: &[u8], skip_0x: bool) -> String {
    let digits = hex::encode(bytes);
    if skip_0x {
        digits
    } else {
        format!("0x{digits}")
    }
}
