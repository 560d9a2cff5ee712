use serde::{Deserialize, Serialize};
use starknet_client_common::{Address, FieldElement, Hash, Number};

use super::{ResourceBounds, TransactionVersion};
use crate::status::TxDaMode;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclareV0Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<Hash>,
    pub version: TransactionVersion,
    pub sender_address: Address,
    pub max_fee: Number,
    #[serde(default)]
    pub signature: Vec<FieldElement>,
    pub class_hash: Hash,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclareV1Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<Hash>,
    pub version: TransactionVersion,
    pub sender_address: Address,
    pub max_fee: Number,
    #[serde(default)]
    pub signature: Vec<FieldElement>,
    pub nonce: Number,
    pub class_hash: Hash,
}

/// Declares a Sierra class together with its compiled class hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclareV2Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<Hash>,
    pub version: TransactionVersion,
    pub sender_address: Address,
    pub compiled_class_hash: Hash,
    pub max_fee: Number,
    #[serde(default)]
    pub signature: Vec<FieldElement>,
    pub nonce: Number,
    pub class_hash: Hash,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclareV3Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<Hash>,
    pub version: TransactionVersion,
    pub sender_address: Address,
    pub compiled_class_hash: Hash,
    #[serde(default)]
    pub signature: Vec<FieldElement>,
    pub nonce: Number,
    pub class_hash: Hash,
    pub resource_bounds: ResourceBounds,
    pub tip: Number,
    #[serde(default)]
    pub paymaster_data: Vec<FieldElement>,
    #[serde(default)]
    pub account_deployment_data: Vec<FieldElement>,
    pub nonce_data_availability_mode: TxDaMode,
    pub fee_data_availability_mode: TxDaMode,
}
