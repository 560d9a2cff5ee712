//! Typed client for the Starknet JSON-RPC interface of a single node.
//!
//! [Service] tracks whether the node is reachable and synced, and gates every
//! call on that state. Requests and replies are defined in
//! [starknet_rpc_types].
mod config;
mod error;
pub mod metrics;
mod service;
mod state;
mod transport;

pub use config::{Config, ConfigBuilder, DEFAULT_TIMEOUT};
pub use error::{ClientError, ConfigError, RpcError, TransportError};
#[cfg(any(test, feature = "test-utils"))]
pub use service::MockStarknetApi;
pub use service::{Response, Service, StarknetApi, REFRESH_INTERVAL};
pub use state::ConnectionState;
#[cfg(any(test, feature = "test-utils"))]
pub use transport::MockTransport;
pub use transport::{HttpTransport, Transport};
