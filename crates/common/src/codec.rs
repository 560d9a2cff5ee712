//! Hex text codec shared by every scalar type.
//!
//! The canonical text form is `0x` followed by lowercase hex digits without
//! leading zeros, with zero rendered as `0x0`. Decoding accepts an odd number
//! of digits by left-padding a single zero nibble.

const LUT: [u8; 16] = *b"0123456789abcdef";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    #[error("missing value")]
    Missing,
    #[error("missing '0x' prefix")]
    InvalidPrefix,
    #[error("missing closing quote")]
    InvalidSuffix,
    #[error("invalid hex digits")]
    InvalidHex,
    #[error("too many bytes: got {actual}, at most {max} allowed")]
    Overlong { max: usize, actual: usize },
    #[error("value does not fit in 64 bits")]
    Overflow,
}

/// Returns the digits following the mandatory `0x` prefix.
pub fn strip_prefix(s: &str) -> Result<&str, HexError> {
    if s.is_empty() {
        return Err(HexError::Missing);
    }

    s.strip_prefix("0x").ok_or(HexError::InvalidPrefix)
}

/// Returns the digits of a raw JSON string literal such as `"0x1f"`, quotes
/// included.
pub fn strip_json_literal(raw: &[u8]) -> Result<&str, HexError> {
    if raw.is_empty() {
        return Err(HexError::Missing);
    }

    let rest = raw.strip_prefix(b"\"0x").ok_or(HexError::InvalidPrefix)?;
    let digits = rest.strip_suffix(b"\"").ok_or(HexError::InvalidSuffix)?;

    std::str::from_utf8(digits).map_err(|_| HexError::InvalidHex)
}

/// Decodes hex digits (without prefix) into bytes.
pub fn decode_bytes(digits: &str) -> Result<Vec<u8>, HexError> {
    if digits.len() % 2 == 1 {
        let mut padded = String::with_capacity(digits.len() + 1);
        padded.push('0');
        padded.push_str(digits);
        hex::decode(padded).map_err(|_| HexError::InvalidHex)
    } else {
        hex::decode(digits).map_err(|_| HexError::InvalidHex)
    }
}

/// Decodes hex digits (without prefix) into a big-endian array of `N` bytes,
/// right-aligned so that short values occupy the low-order bytes.
pub fn decode_fixed<const N: usize>(digits: &str) -> Result<[u8; N], HexError> {
    let bytes = decode_bytes(digits)?;
    if bytes.len() > N {
        return Err(HexError::Overlong {
            max: N,
            actual: bytes.len(),
        });
    }

    let mut out = [0u8; N];
    out[N - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

/// Decodes hex digits (without prefix) into a `u64`.
pub fn decode_u64(digits: &str) -> Result<u64, HexError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HexError::InvalidHex);
    }

    let significant = digits.trim_start_matches('0');
    if significant.len() > 16 {
        return Err(HexError::Overflow);
    }
    if significant.is_empty() {
        return Ok(0);
    }

    u64::from_str_radix(significant, 16).map_err(|_| HexError::InvalidHex)
}

/// Encodes bytes in canonical form, skipping leading zero bytes and the
/// leading zero nibble. An all-zero or empty input gives `0x0`.
pub fn bytes_to_hex_str_stripped(data: &[u8]) -> String {
    let zero_count = data.iter().take_while(|b| **b == 0).count();
    let data = &data[zero_count..];

    if data.is_empty() {
        return String::from("0x0");
    }

    // Index is safe since we just checked that it is non-empty.
    let zero_nibble = (0xF0 & data[0]) == 0;
    to_hex_str(data, zero_nibble)
}

/// Encodes a `u64` in canonical form.
pub fn u64_to_hex_str(value: u64) -> String {
    bytes_to_hex_str_stripped(&value.to_be_bytes())
}

fn to_hex_str(data: &[u8], skip_first_nibble: bool) -> String {
    let count = if skip_first_nibble {
        data.len() * 2 - 1
    } else {
        data.len() * 2
    };
    let mut buf = Vec::with_capacity(2 + count);
    buf.extend_from_slice(b"0x");

    let data = if skip_first_nibble {
        buf.push(LUT[data[0] as usize & 0x0f]);
        &data[1..]
    } else {
        data
    };

    for b in data {
        buf.push(LUT[(*b >> 4) as usize]);
        buf.push(LUT[(*b & 0x0f) as usize]);
    }

    // Only ASCII from the lookup table was pushed.
    buf.into_iter().map(char::from).collect()
}
