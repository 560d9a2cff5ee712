use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use starknet_client_common::Hash;

use crate::error::SyncStateError;

/// Synchronisation progress of the node.
///
/// `syncing` is always derived from the block numbers when decoding, never
/// taken from the wire, as nodes are known to report a stale flag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncState {
    pub syncing: bool,
    pub starting_block_hash: Hash,
    pub starting_block_num: u64,
    pub current_block_hash: Hash,
    pub current_block_num: u64,
    pub highest_block_hash: Hash,
    pub highest_block_num: u64,
}

impl SyncState {
    /// Decodes either the bare `false` reply or a progress object.
    pub fn from_value(value: &Value) -> Result<Self, SyncStateError> {
        match value {
            Value::Bool(false) => Ok(Self::default()),
            // A re-encoded idle state.
            Value::Object(object)
                if object.get("syncing") == Some(&Value::Bool(false))
                    && !object.contains_key("starting_block_hash") =>
            {
                Ok(Self::default())
            }
            Value::Object(object) => {
                let num = |key: &str, field: &'static str| number(object, key, field);
                let hex = |key: &str, field: &'static str| hash(object, key, field);
                let mut state = Self {
                    syncing: false,
                    starting_block_num: num("starting_block_num", "starting block number")?,
                    starting_block_hash: hex("starting_block_hash", "starting block hash")?,
                    current_block_num: num("current_block_num", "current block number")?,
                    current_block_hash: hex("current_block_hash", "current block hash")?,
                    highest_block_num: num("highest_block_num", "highest block number")?,
                    highest_block_hash: hex("highest_block_hash", "highest block hash")?,
                };
                state.syncing = state.current_block_num < state.highest_block_num;
                Ok(state)
            }
            other => Err(SyncStateError::InvalidJson(other.to_string())),
        }
    }
}

fn hash(
    object: &Map<String, Value>,
    key: &str,
    field: &'static str,
) -> Result<Hash, SyncStateError> {
    match object.get(key) {
        None | Some(Value::Null) => Err(SyncStateError::Missing(field)),
        Some(Value::String(s)) => s
            .parse()
            .map_err(|source| SyncStateError::InvalidHash { field, source }),
        Some(_) => Err(SyncStateError::InvalidHash {
            field,
            source: starknet_client_common::HexError::Missing,
        }),
    }
}

fn number(
    object: &Map<String, Value>,
    key: &str,
    field: &'static str,
) -> Result<u64, SyncStateError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(0),
        Some(value) => value.as_u64().ok_or(SyncStateError::InvalidNumber(field)),
    }
}

impl Serialize for SyncState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        if !self.syncing {
            let mut s = serializer.serialize_struct("SyncState", 1)?;
            s.serialize_field("syncing", &false)?;
            return s.end();
        }

        let mut s = serializer.serialize_struct("SyncState", 7)?;
        s.serialize_field("syncing", &true)?;
        s.serialize_field("starting_block_hash", &self.starting_block_hash)?;
        s.serialize_field("starting_block_num", &self.starting_block_num)?;
        s.serialize_field("current_block_hash", &self.current_block_hash)?;
        s.serialize_field("current_block_num", &self.current_block_num)?;
        s.serialize_field("highest_block_hash", &self.highest_block_hash)?;
        s.serialize_field("highest_block_num", &self.highest_block_num)?;
        s.end()
    }
}

impl<'de> Deserialize<'de> for SyncState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        SyncState::from_value(&value).map_err(serde::de::Error::custom)
    }
}
