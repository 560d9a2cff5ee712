/// Generates a closed enumeration with a canonical wire token per variant.
///
/// The first variant is the default "unknown" state. It is only accepted on
/// decode when `decode_unknown = true`. Decoding is case-insensitive and
/// trims surrounding whitespace. Encoding always emits the listed token.
///
/// Usage:
/// ```rust,ignore
/// wire_enum! {
///     /// Docs.
///     Name, "error label", decode_unknown = false {
///         Unknown => "UNKNOWN",
///         Known => "KNOWN",
///     }
/// }
/// ```
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal, decode_unknown = $decode_unknown:literal {
            $(#[$umeta:meta])* $unknown:ident => $unknown_token:literal,
            $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub enum $name {
            $(#[$umeta])*
            #[default]
            $unknown,
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// All variants in token table order.
            pub const ALL: &'static [$name] = &[Self::$unknown, $(Self::$variant),+];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    Self::$unknown => $unknown_token,
                    $(Self::$variant => $token),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::UnrecognisedToken;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let token = s.trim();
                $(
                    if token.eq_ignore_ascii_case($token) {
                        return Ok(Self::$variant);
                    }
                )+
                if $decode_unknown && token.eq_ignore_ascii_case($unknown_token) {
                    return Ok(Self::$unknown);
                }

                Err(crate::error::UnrecognisedToken::new($label, s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct TokenVisitor;

                impl<'de> serde::de::Visitor<'de> for TokenVisitor {
                    type Value = $name;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(formatter, "a {} token", $label)
                    }

                    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        v.parse().map_err(E::custom)
                    }
                }

                deserializer.deserialize_str(TokenVisitor)
            }
        }
    };
}

pub(crate) use wire_enum;
