use serde::{Deserialize, Serialize};
use starknet_client_common::{Address, FieldElement, Hash, Number};

use super::TransactionVersion;

/// A message consumed from L1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct L1HandlerV0Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<Hash>,
    pub version: TransactionVersion,
    pub nonce: Number,
    pub contract_address: Address,
    pub entry_point_selector: FieldElement,
    #[serde(default)]
    pub calldata: Vec<FieldElement>,
}
