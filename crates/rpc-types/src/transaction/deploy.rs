use serde::{Deserialize, Serialize};
use starknet_client_common::{FieldElement, Hash};

use super::TransactionVersion;

/// Legacy deploy transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployV0Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<Hash>,
    pub version: TransactionVersion,
    pub contract_address_salt: FieldElement,
    #[serde(default)]
    pub constructor_calldata: Vec<FieldElement>,
    pub class_hash: Hash,
}
