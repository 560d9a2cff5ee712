use crate::codec;
use crate::HexError;

/// Arbitrary-length binary data.
///
/// Encodes with leading zeros stripped like every other scalar, except that
/// empty data renders as `0x`.
///
/// Unlike the fixed-width types this does not round-trip when the data starts
/// with zero bytes: `[0, 1]` encodes as `0x1`, which decodes to `[1]`. Only
/// data without leading zero bytes survives encoding unchanged.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Data(pub Vec<u8>);

impl Data {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    /// Decodes a raw JSON string literal, quotes included.
    pub fn from_json_literal(raw: &[u8]) -> Result<Self, HexError> {
        let digits = codec::strip_json_literal(raw)?;
        codec::decode_bytes(digits).map(Self)
    }
}

impl From<Vec<u8>> for Data {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for Data {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl std::str::FromStr for Data {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = codec::strip_prefix(s)?;
        codec::decode_bytes(digits).map(Self)
    }
}

impl std::fmt::Display for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("0x");
        }
        f.write_str(&codec::bytes_to_hex_str_stripped(&self.0))
    }
}

crate::macros::fmt::thin_debug!(Data);
crate::macros::serde_str!(Data, "data", "'0x' prefix followed by hex digits");
