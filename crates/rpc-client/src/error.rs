//! Client error types.
use std::fmt;

/// Failure of a call made through the [service](crate::Service).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request is missing a required field or has an invalid one.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("client not active")]
    NotActive,
    #[error("client not synced")]
    NotSynced,
    #[error("{method} call failed")]
    CallFailed {
        method: &'static str,
        #[source]
        source: TransportError,
    },
    #[error("failed to decode {method} reply")]
    Decode {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode {method} parameters")]
    Encode {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("call cancelled")]
    Cancelled,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// The error reported by the node, if any.
    pub fn rpc_error(&self) -> Option<&RpcError> {
        match self {
            ClientError::CallFailed {
                source: TransportError::Rpc(e),
                ..
            } => Some(e),
            _ => None,
        }
    }
}

/// Failure to obtain a JSON-RPC result.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Rpc(#[from] RpcError),
    #[error("failed to decode JSON-RPC response")]
    Decode(#[source] serde_json::Error),
    #[error("invalid JSON-RPC response: {0}")]
    InvalidResponse(String),
}

/// Error object returned by the node.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, thiserror::Error)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)?;
        if let Some(data) = &self.data {
            write!(f, ": {data}")?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no address specified")]
    NoAddress,
    #[error("no timeout specified")]
    NoTimeout,
    #[error("invalid address")]
    InvalidAddress(#[source] url::ParseError),
    #[error("failed to create HTTP client")]
    HttpClient(#[source] reqwest::Error),
}
