//! Structures used for serializing requests to a Starknet node's JSON-RPC
//! interface.
//!
//! Every request serializes to exactly the `params` value of its method.
use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize};
use starknet_client_common::{Address, BlockNumber, FieldElement, Hash, HexError};

use crate::transaction::Transaction;

/// A way of identifying a block in a JSON-RPC request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BlockId {
    Latest,
    Pending,
    Hash(Hash),
    Number(BlockNumber),
}

#[derive(Debug, thiserror::Error)]
pub enum BlockIdError {
    #[error("no block specified")]
    Empty,
    #[error("invalid block hash: {0}")]
    InvalidHash(#[source] HexError),
    #[error("invalid block number {0:?}")]
    InvalidNumber(String),
}

impl BlockId {
    /// Classifies a textual block selector: a tag, then a `0x` prefixed hash,
    /// then a decimal number.
    pub fn parse(s: &str) -> Result<Self, BlockIdError> {
        match s {
            "" => Err(BlockIdError::Empty),
            "latest" => Ok(BlockId::Latest),
            "pending" => Ok(BlockId::Pending),
            hash if hash.starts_with("0x") => hash
                .parse()
                .map(BlockId::Hash)
                .map_err(BlockIdError::InvalidHash),
            number => number
                .parse::<u64>()
                .map(|n| BlockId::Number(BlockNumber(n)))
                .map_err(|_| BlockIdError::InvalidNumber(number.to_owned())),
        }
    }
}

impl std::str::FromStr for BlockId {
    type Err = BlockIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Hash> for BlockId {
    fn from(value: Hash) -> Self {
        BlockId::Hash(value)
    }
}

impl From<BlockNumber> for BlockId {
    fn from(value: BlockNumber) -> Self {
        BlockId::Number(value)
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockId::Latest => f.write_str("latest"),
            BlockId::Pending => f.write_str("pending"),
            BlockId::Hash(hash) => std::fmt::Display::fmt(hash, f),
            BlockId::Number(number) => std::fmt::Display::fmt(number, f),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum BlockTag {
    Latest,
    Pending,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum BlockIdRepr {
    Tag(BlockTag),
    Hash { block_hash: Hash },
    Number { block_number: BlockNumber },
}

impl Serialize for BlockId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let repr = match *self {
            BlockId::Latest => BlockIdRepr::Tag(BlockTag::Latest),
            BlockId::Pending => BlockIdRepr::Tag(BlockTag::Pending),
            BlockId::Hash(block_hash) => BlockIdRepr::Hash { block_hash },
            BlockId::Number(block_number) => BlockIdRepr::Number { block_number },
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BlockId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match BlockIdRepr::deserialize(deserializer)? {
            BlockIdRepr::Tag(BlockTag::Latest) => BlockId::Latest,
            BlockIdRepr::Tag(BlockTag::Pending) => BlockId::Pending,
            BlockIdRepr::Hash { block_hash } => BlockId::Hash(block_hash),
            BlockIdRepr::Number { block_number } => BlockId::Number(block_number),
        })
    }
}

/// `starknet_getBlockWithReceipts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetBlock {
    #[serde(rename = "block_id")]
    pub block: BlockId,
}

/// `starknet_call`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub block: BlockId,
    pub contract: Address,
    pub entry_point_selector: FieldElement,
    pub calldata: Vec<FieldElement>,
}

impl Serialize for Call {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(Serialize)]
        struct FunctionCall<'a> {
            contract_address: &'a Address,
            entry_point_selector: &'a FieldElement,
            calldata: &'a [FieldElement],
        }

        #[derive(Serialize)]
        struct Params<'a> {
            request: FunctionCall<'a>,
            block_id: &'a BlockId,
        }

        Params {
            request: FunctionCall {
                contract_address: &self.contract,
                entry_point_selector: &self.entry_point_selector,
                calldata: &self.calldata,
            },
            block_id: &self.block,
        }
        .serialize(serializer)
    }
}

/// Asks the node not to validate the signature while simulating.
pub const SKIP_VALIDATE: &str = "SKIP_VALIDATE";

/// `starknet_estimateFee`
///
/// The transaction is sent as a query so it can never be included on chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateFee {
    pub block: BlockId,
    pub transaction: Transaction,
}

impl Serialize for EstimateFee {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let transactions = [self.transaction.to_query()];
        let mut params = serializer.serialize_tuple(3)?;
        params.serialize_element(&transactions)?;
        params.serialize_element(&[SKIP_VALIDATE])?;
        params.serialize_element(&self.block)?;
        params.end()
    }
}

/// `starknet_getEvents`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetEvents {
    pub from_block: BlockId,
    pub to_block: BlockId,
    /// Only return events emitted by this contract.
    pub address: Option<Address>,
    /// Key filter, one set of accepted values per key position.
    pub keys: Vec<Vec<FieldElement>>,
    /// Maximum number of events to return, must be positive.
    pub limit: u64,
}

impl GetEvents {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.limit == 0 {
            return Err("limit must be specified");
        }
        Ok(())
    }
}

impl Serialize for GetEvents {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(Serialize)]
        struct Filter<'a> {
            from_block: &'a BlockId,
            to_block: &'a BlockId,
            chunk_size: u64,
            #[serde(skip_serializing_if = "Option::is_none")]
            address: Option<&'a Address>,
            #[serde(skip_serializing_if = "no_keys")]
            keys: &'a [Vec<FieldElement>],
        }

        #[derive(Serialize)]
        struct Params<'a> {
            filter: Filter<'a>,
        }

        fn no_keys(keys: &&[Vec<FieldElement>]) -> bool {
            keys.is_empty()
        }

        Params {
            filter: Filter {
                from_block: &self.from_block,
                to_block: &self.to_block,
                chunk_size: self.limit,
                address: self.address.as_ref(),
                keys: &self.keys,
            },
        }
        .serialize(serializer)
    }
}

/// `starknet_getNonce`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetNonce {
    pub block: BlockId,
    pub contract: Address,
}

impl Serialize for GetNonce {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.block, &self.contract).serialize(serializer)
    }
}

/// `starknet_addInvokeTransaction`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTransaction {
    pub transaction: Transaction,
}

impl SubmitTransaction {
    /// Only v1 and v3 invoke transactions can be submitted.
    pub fn validate(&self) -> Result<(), &'static str> {
        match self.transaction {
            Transaction::InvokeV1(_) | Transaction::InvokeV3(_) => Ok(()),
            _ => Err("unhandled transaction type"),
        }
    }
}

impl Serialize for SubmitTransaction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        [self.transaction.pre_flight_copy()].serialize(serializer)
    }
}
