//! Structures used for deserializing replies from a Starknet node's JSON-RPC
//! interface.
use serde::{Deserialize, Serialize};
use starknet_client_common::{BlockNumber, FieldElement, Hash, Number};

use crate::status::FeeUnit;

mod block;
mod receipt;
mod sync_state;

pub use block::{Block, BlockTransaction, Price};
pub use receipt::{
    DataAvailability, ExecutionResources, Fee, Message, TransactionEvent, TransactionReceipt,
};
pub use sync_state::SyncState;

/// Fee estimate for a single simulated transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeEstimate {
    pub gas_consumed: Number,
    pub gas_price: Number,
    pub data_gas_consumed: Number,
    pub data_gas_price: Number,
    pub overall_fee: Number,
    pub unit: FeeUnit,
}

/// Reply to a submitted transaction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitTransactionResponse {
    pub transaction_hash: Hash,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHashAndNumber {
    pub block_hash: Hash,
    pub block_number: BlockNumber,
}

/// A page of events. Only the events themselves are surfaced to callers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsChunk {
    #[serde(default)]
    pub events: Vec<TransactionEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
}

/// Result of a contract call.
pub type CallResult = Vec<FieldElement>;
