use serde::{Deserialize, Serialize};
use starknet_client_common::{Address, FieldElement, Hash, Number};

use super::{ResourceBounds, TransactionVersion};
use crate::status::TxDaMode;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeV0Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<Hash>,
    pub version: TransactionVersion,
    pub max_fee: Number,
    #[serde(default)]
    pub signature: Vec<FieldElement>,
    pub contract_address: Address,
    pub entry_point_selector: FieldElement,
    #[serde(default)]
    pub calldata: Vec<FieldElement>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeV1Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<Hash>,
    pub version: TransactionVersion,
    pub sender_address: Address,
    #[serde(default)]
    pub calldata: Vec<FieldElement>,
    pub max_fee: Number,
    #[serde(default)]
    pub signature: Vec<FieldElement>,
    pub nonce: Number,
}

/// Invoke with resource bounds instead of a max fee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeV3Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<Hash>,
    pub version: TransactionVersion,
    pub sender_address: Address,
    #[serde(default)]
    pub calldata: Vec<FieldElement>,
    #[serde(default)]
    pub signature: Vec<FieldElement>,
    pub nonce: Number,
    pub resource_bounds: ResourceBounds,
    pub tip: Number,
    #[serde(default)]
    pub paymaster_data: Vec<FieldElement>,
    #[serde(default)]
    pub account_deployment_data: Vec<FieldElement>,
    pub nonce_data_availability_mode: TxDaMode,
    pub fee_data_availability_mode: TxDaMode,
}
