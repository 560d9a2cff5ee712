/// Generates 32-byte newtypes which encode as canonical hex strings.
///
/// Usage:
///     `fixed_hex_newtypes!(X1 => "label", X2 => "label", ..)`
/// where the label is used to prefix decoding errors.
macro_rules! fixed_hex_newtypes {
    ($($target:ident => $label:literal),* $(,)?) => {
        $(
            crate::macros::fixed_hex_newtypes!(@define $target, $label);
        )*
    };

    (@define $target:ident, $label:literal) => {
        #[derive(Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $target(pub [u8; 32]);

        impl $target {
            pub const ZERO: Self = Self([0u8; 32]);

            pub const fn from_be_bytes(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }

            /// Right-aligns up to 32 big-endian bytes.
            pub fn from_be_slice(bytes: &[u8]) -> Result<Self, $crate::HexError> {
                if bytes.len() > 32 {
                    return Err($crate::HexError::Overlong {
                        max: 32,
                        actual: bytes.len(),
                    });
                }
                let mut out = [0u8; 32];
                out[32 - bytes.len()..].copy_from_slice(bytes);
                Ok(Self(out))
            }

            pub const fn as_be_bytes(&self) -> &[u8; 32] {
                &self.0
            }

            pub fn is_zero(&self) -> bool {
                self.0 == [0u8; 32]
            }

            /// Decodes a raw JSON string literal, quotes included.
            pub fn from_json_literal(raw: &[u8]) -> Result<Self, $crate::HexError> {
                let digits = $crate::codec::strip_json_literal(raw)?;
                $crate::codec::decode_fixed::<32>(digits).map(Self)
            }
        }

        impl std::str::FromStr for $target {
            type Err = $crate::HexError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let digits = $crate::codec::strip_prefix(s)?;
                $crate::codec::decode_fixed::<32>(digits).map(Self)
            }
        }

        impl std::fmt::Display for $target {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::codec::bytes_to_hex_str_stripped(&self.0))
            }
        }

        $crate::macros::fmt::thin_debug!($target);
        $crate::macros::serde_str!($target, $label, "'0x' prefix followed by up to 64 hex digits");
    };
}

/// Generates `u64` newtypes which encode as canonical hex strings.
macro_rules! u64_hex_newtypes {
    ($($target:ident => $label:literal),* $(,)?) => {
        $(
            crate::macros::u64_hex_newtypes!(@define $target, $label);
        )*
    };

    (@define $target:ident, $label:literal) => {
        #[derive(Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $target(pub u64);

        impl $target {
            pub const ZERO: Self = Self(0);

            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            pub const fn get(&self) -> u64 {
                self.0
            }

            pub const fn is_zero(&self) -> bool {
                self.0 == 0
            }

            /// Decodes a raw JSON string literal, quotes included.
            pub fn from_json_literal(raw: &[u8]) -> Result<Self, $crate::HexError> {
                let digits = $crate::codec::strip_json_literal(raw)?;
                $crate::codec::decode_u64(digits).map(Self)
            }
        }

        impl From<u64> for $target {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl PartialEq<u64> for $target {
            fn eq(&self, other: &u64) -> bool {
                self.0 == *other
            }
        }

        impl std::str::FromStr for $target {
            type Err = $crate::HexError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let digits = $crate::codec::strip_prefix(s)?;
                $crate::codec::decode_u64(digits).map(Self)
            }
        }

        impl std::fmt::Display for $target {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::codec::u64_to_hex_str(self.0))
            }
        }

        $crate::macros::fmt::thin_debug!($target);
        $crate::macros::serde_str!($target, $label, "'0x' prefix followed by up to 16 significant hex digits");
    };
}

/// Serializes through `Display` and deserializes through `FromStr`, prefixing
/// decoding errors with the label.
macro_rules! serde_str {
    ($target:ty, $label:literal, $expecting:literal) => {
        impl serde::Serialize for $target {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $target {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct HexVisitor;

                impl<'de> serde::de::Visitor<'de> for HexVisitor {
                    type Value = $target;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        formatter.write_str($expecting)
                    }

                    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        v.parse()
                            .map_err(|e| E::custom(format_args!("invalid {}: {}", $label, e)))
                    }
                }

                deserializer.deserialize_str(HexVisitor)
            }
        }
    };
}

pub(crate) use {fixed_hex_newtypes, serde_str, u64_hex_newtypes};

pub(super) mod fmt {

    /// Adds a thin Debug implementation which renders `X(0x..)` using the
    /// canonical hex form.
    macro_rules! thin_debug {
        ($target:ty) => {
            impl std::fmt::Debug for $target {
                fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(fmt, "{}({})", stringify!($target), self)
                }
            }
        };
    }

    pub(crate) use thin_debug;
}
