use serde::{Deserialize, Serialize};
use starknet_client_common::{Address, BlockNumber, Hash, Number, Root};

use super::TransactionReceipt;
use crate::status::{BlockDaMode, FinalityStatus};
use crate::transaction::Transaction;

/// A block with every transaction paired with its receipt.
///
/// The status, hash, number and root are absent while the block is pending.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FinalityStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<Hash>,
    pub parent_hash: Hash,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<BlockNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_root: Option<Root>,
    pub timestamp: u64,
    pub sequencer_address: Address,
    pub l1_gas_price: Price,
    pub l1_data_gas_price: Price,
    pub l1_da_mode: BlockDaMode,
    pub starknet_version: String,
    #[serde(default)]
    pub transactions: Vec<BlockTransaction>,
}

impl Block {
    pub fn is_pending(&self) -> bool {
        self.block_hash.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTransaction {
    pub transaction: Transaction,
    pub receipt: TransactionReceipt,
}

/// Gas price in both fee units.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub price_in_fri: Number,
    pub price_in_wei: Number,
}
