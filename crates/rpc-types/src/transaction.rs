//! The transaction envelope.
//!
//! A [Transaction] holds exactly one of eleven variants, selected by the
//! `(type, version)` pair carried in the JSON payload.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use starknet_client_common::Hash;

use crate::error::TransactionError;
use crate::macros::wire_enum;

mod declare;
mod deploy;
mod deploy_account;
mod invoke;
mod l1_handler;
mod resource_bounds;

pub use declare::{
    DeclareV0Transaction, DeclareV1Transaction, DeclareV2Transaction, DeclareV3Transaction,
};
pub use deploy::DeployV0Transaction;
pub use deploy_account::{DeployAccountV1Transaction, DeployAccountV3Transaction};
pub use invoke::{InvokeV0Transaction, InvokeV1Transaction, InvokeV3Transaction};
pub use l1_handler::L1HandlerV0Transaction;
pub use resource_bounds::{ResourceBound, ResourceBounds};

wire_enum! {
    TransactionType, "transaction type", decode_unknown = true {
        Unknown => "UNKNOWN",
        Deploy => "DEPLOY",
        Invoke => "INVOKE",
        Declare => "DECLARE",
        DeployAccount => "DEPLOY_ACCOUNT",
        L1Handler => "L1_HANDLER",
    }
}

impl TransactionType {
    /// Lower case name used in error messages.
    fn kind(&self) -> &'static str {
        match self {
            TransactionType::Unknown => "unknown",
            TransactionType::Deploy => "deploy",
            TransactionType::Invoke => "invoke",
            TransactionType::Declare => "declare",
            TransactionType::DeployAccount => "deploy account",
            TransactionType::L1Handler => "L1 handler",
        }
    }
}

wire_enum! {
    /// Transaction version, including the query variants which mark a
    /// transaction as only valid for simulation.
    TransactionVersion, "transaction version", decode_unknown = true {
        Unknown => "UNKNOWN",
        V0 => "0x0",
        V0Query => "0x100000000000000000000000000000000",
        V1 => "0x1",
        V1Query => "0x100000000000000000000000000000001",
        V2 => "0x2",
        V2Query => "0x100000000000000000000000000000002",
        V3 => "0x3",
        V3Query => "0x100000000000000000000000000000003",
    }
}

impl TransactionVersion {
    /// Returns the query counterpart of this version. Query versions map to
    /// themselves.
    pub const fn with_query_version(self) -> Self {
        match self {
            Self::V0 | Self::V0Query => Self::V0Query,
            Self::V1 | Self::V1Query => Self::V1Query,
            Self::V2 | Self::V2Query => Self::V2Query,
            Self::V3 | Self::V3Query => Self::V3Query,
            Self::Unknown => Self::Unknown,
        }
    }

    /// Returns the base version with the query marker cleared.
    pub const fn without_query_version(self) -> Self {
        match self {
            Self::V0 | Self::V0Query => Self::V0,
            Self::V1 | Self::V1Query => Self::V1,
            Self::V2 | Self::V2Query => Self::V2,
            Self::V3 | Self::V3Query => Self::V3,
            Self::Unknown => Self::Unknown,
        }
    }

    pub const fn has_query_version(&self) -> bool {
        matches!(
            self,
            Self::V0Query | Self::V1Query | Self::V2Query | Self::V3Query
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transaction {
    DeployV0(DeployV0Transaction),
    InvokeV0(InvokeV0Transaction),
    InvokeV1(InvokeV1Transaction),
    InvokeV3(InvokeV3Transaction),
    DeclareV0(DeclareV0Transaction),
    DeclareV1(DeclareV1Transaction),
    DeclareV2(DeclareV2Transaction),
    DeclareV3(DeclareV3Transaction),
    DeployAccountV1(DeployAccountV1Transaction),
    DeployAccountV3(DeployAccountV3Transaction),
    L1HandlerV0(L1HandlerV0Transaction),
}

/// Applies `$body` to the variant payload, binding it as `$tx`.
macro_rules! for_each_variant {
    ($value:expr, $tx:ident => $body:expr) => {
        match $value {
            Transaction::DeployV0($tx) => $body,
            Transaction::InvokeV0($tx) => $body,
            Transaction::InvokeV1($tx) => $body,
            Transaction::InvokeV3($tx) => $body,
            Transaction::DeclareV0($tx) => $body,
            Transaction::DeclareV1($tx) => $body,
            Transaction::DeclareV2($tx) => $body,
            Transaction::DeclareV3($tx) => $body,
            Transaction::DeployAccountV1($tx) => $body,
            Transaction::DeployAccountV3($tx) => $body,
            Transaction::L1HandlerV0($tx) => $body,
        }
    };
}

impl Transaction {
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            Transaction::DeployV0(_) => TransactionType::Deploy,
            Transaction::InvokeV0(_) | Transaction::InvokeV1(_) | Transaction::InvokeV3(_) => {
                TransactionType::Invoke
            }
            Transaction::DeclareV0(_)
            | Transaction::DeclareV1(_)
            | Transaction::DeclareV2(_)
            | Transaction::DeclareV3(_) => TransactionType::Declare,
            Transaction::DeployAccountV1(_) | Transaction::DeployAccountV3(_) => {
                TransactionType::DeployAccount
            }
            Transaction::L1HandlerV0(_) => TransactionType::L1Handler,
        }
    }

    pub fn version(&self) -> TransactionVersion {
        for_each_variant!(self, tx => tx.version)
    }

    pub fn transaction_hash(&self) -> Option<Hash> {
        for_each_variant!(self, tx => tx.transaction_hash)
    }

    /// Marks the transaction as a query, only valid for simulation. Only the
    /// version field changes and calling this more than once has no further
    /// effect.
    pub fn set_query_bit(&mut self) {
        use TransactionVersion::*;

        match self {
            Transaction::DeployV0(tx) => tx.version = V0Query,
            Transaction::InvokeV0(tx) => tx.version = V0Query,
            Transaction::InvokeV1(tx) => tx.version = V1Query,
            Transaction::InvokeV3(tx) => tx.version = V3Query,
            Transaction::DeclareV0(tx) => tx.version = V0Query,
            Transaction::DeclareV1(tx) => tx.version = V1Query,
            Transaction::DeclareV2(tx) => tx.version = V2Query,
            Transaction::DeclareV3(tx) => tx.version = V3Query,
            Transaction::DeployAccountV1(tx) => tx.version = V1Query,
            Transaction::DeployAccountV3(tx) => tx.version = V3Query,
            Transaction::L1HandlerV0(tx) => tx.version = V0Query,
        }
    }

    /// Returns an independent copy ready to be sent to the node.
    ///
    /// Every sequence is freshly allocated and always present on the wire,
    /// even when empty.
    pub fn pre_flight_copy(&self) -> Transaction {
        self.clone()
    }

    /// Returns a query marked copy of the transaction, leaving `self` intact.
    pub fn to_query(&self) -> Transaction {
        let mut tx = self.pre_flight_copy();
        tx.set_query_bit();
        tx
    }

    /// Decodes a transaction in two passes: first the `(type, version)` pair,
    /// then the whole payload as the variant selected by that pair.
    pub fn from_value(value: serde_json::Value) -> Result<Self, TransactionError> {
        #[derive(Deserialize)]
        struct TypeAndVersion {
            #[serde(rename = "type")]
            transaction_type: String,
            version: String,
        }

        fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, TransactionError> {
            serde_json::from_value(value).map_err(TransactionError::InvalidJson)
        }

        let header = TypeAndVersion::deserialize(&value).map_err(TransactionError::InvalidJson)?;
        let transaction_type = header
            .transaction_type
            .parse::<TransactionType>()
            .map_err(|_| TransactionError::Unhandled {
                transaction_type: header.transaction_type.clone(),
                version: header.version.clone(),
            })?;
        let version = header
            .version
            .parse::<TransactionVersion>()
            .map(TransactionVersion::without_query_version)
            .unwrap_or_default();

        use TransactionType as Ty;
        use TransactionVersion as V;

        let tx = match (transaction_type, version) {
            (Ty::Deploy, V::V0) => Transaction::DeployV0(decode(value)?),
            (Ty::Invoke, V::V0) => Transaction::InvokeV0(decode(value)?),
            (Ty::Invoke, V::V1) => Transaction::InvokeV1(decode(value)?),
            (Ty::Invoke, V::V3) => Transaction::InvokeV3(decode(value)?),
            (Ty::Declare, V::V0) => Transaction::DeclareV0(decode(value)?),
            (Ty::Declare, V::V1) => Transaction::DeclareV1(decode(value)?),
            (Ty::Declare, V::V2) => Transaction::DeclareV2(decode(value)?),
            (Ty::Declare, V::V3) => Transaction::DeclareV3(decode(value)?),
            (Ty::DeployAccount, V::V1) => Transaction::DeployAccountV1(decode(value)?),
            (Ty::DeployAccount, V::V3) => Transaction::DeployAccountV3(decode(value)?),
            (Ty::L1Handler, V::V0) => Transaction::L1HandlerV0(decode(value)?),
            (Ty::Unknown, _) => {
                return Err(TransactionError::Unhandled {
                    transaction_type: header.transaction_type,
                    version: header.version,
                })
            }
            (other, _) => {
                return Err(TransactionError::UnsupportedVersion {
                    kind: other.kind(),
                    version: header.version,
                })
            }
        };

        Ok(tx)
    }
}

impl Serialize for Transaction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        /// The variant payload with its `type` discriminant.
        #[derive(Serialize)]
        struct Tagged<'a, T> {
            #[serde(rename = "type")]
            transaction_type: TransactionType,
            #[serde(flatten)]
            inner: &'a T,
        }

        let transaction_type = self.transaction_type();
        for_each_variant!(self, inner => Tagged { transaction_type, inner }.serialize(serializer))
    }
}

impl<'de> Deserialize<'de> for Transaction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Transaction::from_value(value).map_err(serde::de::Error::custom)
    }
}
