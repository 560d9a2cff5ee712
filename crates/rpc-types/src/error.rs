//! Decoding error types.

/// A wire token that is not part of an enumeration's token table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised {kind} {input:?}")]
pub struct UnrecognisedToken {
    pub kind: &'static str,
    pub input: String,
}

impl UnrecognisedToken {
    pub fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_owned(),
        }
    }
}

/// Transaction envelope decoding errors.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    #[error("invalid transaction JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    /// The type is known but the version is not supported for it.
    #[error("unsupported {kind} transaction version: {version}")]
    UnsupportedVersion { kind: &'static str, version: String },
    #[error("unhandled transaction {transaction_type} {version}")]
    Unhandled {
        transaction_type: String,
        version: String,
    },
}

/// Sync state decoding errors.
#[derive(Debug, thiserror::Error)]
pub enum SyncStateError {
    #[error("{0} missing")]
    Missing(&'static str),
    #[error("{field} invalid: {source}")]
    InvalidHash {
        field: &'static str,
        #[source]
        source: starknet_client_common::HexError,
    },
    #[error("{0} invalid: expected an unsigned integer")]
    InvalidNumber(&'static str),
    /// Neither `false` nor an object.
    #[error("invalid sync state JSON {0}")]
    InvalidJson(String),
}
