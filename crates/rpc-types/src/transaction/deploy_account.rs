use serde::{Deserialize, Serialize};
use starknet_client_common::{FieldElement, Hash, Number};

use super::{ResourceBounds, TransactionVersion};
use crate::status::TxDaMode;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployAccountV1Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<Hash>,
    pub version: TransactionVersion,
    pub max_fee: Number,
    #[serde(default)]
    pub signature: Vec<FieldElement>,
    pub nonce: Number,
    pub contract_address_salt: FieldElement,
    #[serde(default)]
    pub constructor_calldata: Vec<FieldElement>,
    pub class_hash: Hash,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployAccountV3Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<Hash>,
    pub version: TransactionVersion,
    #[serde(default)]
    pub signature: Vec<FieldElement>,
    pub nonce: Number,
    pub contract_address_salt: FieldElement,
    #[serde(default)]
    pub constructor_calldata: Vec<FieldElement>,
    pub class_hash: Hash,
    pub resource_bounds: ResourceBounds,
    pub tip: Number,
    #[serde(default)]
    pub paymaster_data: Vec<FieldElement>,
    pub nonce_data_availability_mode: TxDaMode,
    pub fee_data_availability_mode: TxDaMode,
}
