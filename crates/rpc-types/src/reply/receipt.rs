use serde::{Deserialize, Serialize};
use starknet_client_common::{Address, Amount, BlockNumber, Data, FieldElement, Hash};

use crate::status::{ExecutionStatus, FeeUnit, FinalityStatus};
use crate::transaction::TransactionType;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub transaction_hash: Hash,
    pub actual_fee: Fee,
    pub execution_status: ExecutionStatus,
    pub finality_status: FinalityStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<Hash>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<BlockNumber>,
    #[serde(default)]
    pub messages_sent: Vec<Message>,
    /// Only present when the execution reverted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revert_reason: Option<String>,
    #[serde(default)]
    pub events: Vec<TransactionEvent>,
    /// Set for deploy and deploy account receipts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<Address>,
    pub execution_resources: ExecutionResources,
}

impl TransactionReceipt {
    pub fn is_reverted(&self) -> bool {
        self.execution_status == ExecutionStatus::Reverted
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    pub amount: Amount,
    pub unit: FeeUnit,
}

/// L2 to L1 message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub from_address: Address,
    pub to_address: Address,
    pub payload: Data,
}

/// An event emitted by a contract.
///
/// The block and transaction fields are only populated by the events query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<Hash>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<BlockNumber>,
    pub from_address: Address,
    #[serde(default)]
    pub keys: Vec<FieldElement>,
    #[serde(default)]
    pub data: Vec<FieldElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<Hash>,
}

// Counters the node leaves out when zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionResources {
    pub steps: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub memory_holes: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub pedersen_builtin_applications: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub range_check_builtin_applications: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub bitwise_builtin_applications: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub ec_op_builtin_applications: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub poseidon_builtin_applications: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub ecdsa_builtin_applications: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub keccak_builtin_applications: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub segment_arena_builtin: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_availability: Option<DataAvailability>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataAvailability {
    pub l1_gas: u64,
    pub l1_data_gas: u64,
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}
