//! Scalar value types used by the Starknet JSON-RPC client.
//!
//! Every type encodes to the canonical hex text form described in [codec].
pub mod codec;
mod data;
mod macros;

pub use codec::HexError;
pub use data::Data;

macros::fixed_hex_newtypes!(
    Hash => "hash",
    Address => "address",
    FieldElement => "field element",
    PublicKey => "public key",
    Root => "root",
);

macros::u64_hex_newtypes!(
    Amount => "amount",
    Number => "number",
);

/// A transaction signature, an ordered sequence of field elements.
pub type Signature = Vec<FieldElement>;

/// A Starknet block number, encoded as a plain JSON integer.
#[derive(
    Copy,
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct BlockNumber(pub u64);

impl BlockNumber {
    pub const GENESIS: BlockNumber = BlockNumber(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for BlockNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl PartialEq<u64> for BlockNumber {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for BlockNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pretty_assertions_sorted::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case::zero("0x0")]
    #[case::small("0x1")]
    #[case::nibble("0xabc")]
    #[case::full("0x7d328a71faf48c5c3857e99f20a77b18522480956d1cd5bff1ff2df3c8b427b")]
    #[case::max("0xffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff")]
    fn canonical_text_survives_decoding(#[case] text: &str) {
        let hash: Hash = text.parse().unwrap();
        assert_eq!(hash.to_string(), text);

        let address: Address = text.parse().unwrap();
        assert_eq!(address.to_string(), text);
    }

    #[test]
    fn odd_nibble_tolerance() {
        let short: FieldElement = "0x1".parse().unwrap();
        let padded: FieldElement = "0x01".parse().unwrap();
        assert_eq!(short, padded);
        assert_eq!(padded.to_string(), "0x1");
    }

    #[test]
    fn zero_collapses() {
        assert_eq!(Hash::ZERO.to_string(), "0x0");
        assert_eq!(Root::default().to_string(), "0x0");
        assert_eq!(PublicKey::ZERO.to_string(), "0x0");
        assert_eq!(Amount::ZERO.to_string(), "0x0");

        let many_zeros: Hash = "0x0000".parse().unwrap();
        assert!(many_zeros.is_zero());
        assert_eq!(many_zeros, Hash::ZERO);
    }

    #[test]
    fn big_endian_right_alignment() {
        let hash: Hash = "0x102".parse().unwrap();
        let mut expected = [0u8; 32];
        expected[30] = 0x01;
        expected[31] = 0x02;
        assert_eq!(hash.as_be_bytes(), &expected);
        assert_eq!(Hash::from_be_slice(&[1, 2]).unwrap(), hash);
    }

    #[test]
    fn overlong_is_rejected() {
        let too_long = format!("0x1{}", "0".repeat(64));
        assert_matches!(
            too_long.parse::<Hash>(),
            Err(HexError::Overlong { max: 32, actual: 33 })
        );
        assert_matches!(
            Hash::from_be_slice(&[1u8; 33]),
            Err(HexError::Overlong { .. })
        );
    }

    #[test]
    fn decoding_errors() {
        assert_matches!("".parse::<Address>(), Err(HexError::Missing));
        assert_matches!("123".parse::<Address>(), Err(HexError::InvalidPrefix));
        assert_matches!("0xzz".parse::<Address>(), Err(HexError::InvalidHex));
        assert_matches!(
            Address::from_json_literal(br#""0x12"#),
            Err(HexError::InvalidSuffix)
        );
        assert_eq!(
            Address::from_json_literal(br#""0x12""#).unwrap(),
            "0x12".parse::<Address>().unwrap()
        );
    }

    #[test]
    fn serde_uses_canonical_strings() {
        let element: FieldElement = serde_json::from_value(json!("0x00ab")).unwrap();
        assert_eq!(serde_json::to_value(element).unwrap(), json!("0xab"));

        let err = serde_json::from_value::<Hash>(json!("ab")).unwrap_err();
        assert_eq!(err.to_string(), "invalid hash: missing '0x' prefix");

        serde_json::from_value::<Hash>(json!(12)).unwrap_err();
    }

    #[test]
    fn debug_is_thin() {
        let hash: Hash = "0x12".parse().unwrap();
        assert_eq!(format!("{hash:?}"), "Hash(0x12)");
        assert_eq!(format!("{:?}", Number(16)), "Number(0x10)");
    }

    #[rstest]
    #[case::zero("0x0", 0)]
    #[case::padded("0x0001", 1)]
    #[case::odd("0x100", 256)]
    #[case::max("0xffffffffffffffff", u64::MAX)]
    fn numbers(#[case] text: &str, #[case] expected: u64) {
        let number: Number = text.parse().unwrap();
        assert_eq!(number, expected);

        let amount: Amount = serde_json::from_value(json!(text)).unwrap();
        assert_eq!(amount.get(), expected);
    }

    #[test]
    fn numbers_round_trip_canonically() {
        for value in [0u64, 1, 15, 16, 0xabc, u64::MAX] {
            let number = Number::new(value);
            assert_eq!(number.to_string().parse::<Number>().unwrap(), number);
        }
        assert_eq!(Number(0xabc).to_string(), "0xabc");
    }

    #[test]
    fn numbers_beyond_64_bits_fail() {
        assert_matches!(
            "0x10000000000000000".parse::<Number>(),
            Err(HexError::Overflow)
        );
        let err = serde_json::from_value::<Amount>(json!("0x10000000000000000")).unwrap_err();
        assert_eq!(err.to_string(), "invalid amount: value does not fit in 64 bits");
    }

    #[test]
    fn block_number_is_a_plain_integer() {
        assert_eq!(serde_json::to_value(BlockNumber(5)).unwrap(), json!(5));
        let number: BlockNumber = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(number, 7);
    }
}
